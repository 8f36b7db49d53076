// SPDX-License-Identifier: Apache-2.0

use crate::html::{escape_html, group_thousands};
use crate::selection::{AibiPane, DashboardSelection};
use crate::{Page, PAGE_TITLE};
use pmsafety_model::RiskLevel;
use pmsafety_query::dashboard_kpis;
use pmsafety_store::SafetyStore;
use std::fmt::Write;

const PRIMARY: &str = "#1b3139";
const SECONDARY: &str = "#ff5f46";
const INFO: &str = "#016bc1";
const HIGH_RISK: &str = "#ff3621";

const STYLE: &str = "\
body{margin:0;font-family:\"DM Sans\",sans-serif;background:#f9f7f4;color:#1b3139}\
.navbar{position:fixed;top:0;left:0;right:0;height:56px;display:flex;align-items:center;gap:16px;padding:0 24px;background:#1b3139;color:#fff;box-shadow:0 2px 8px rgba(27,49,57,.15);z-index:1100}\
.navbar h6{margin:0;font-size:1rem;font-weight:600}\
.brand{display:flex;flex-direction:column}.brand small{font-size:.65rem;opacity:.8}\
.sidebar{position:fixed;top:56px;left:0;bottom:0;width:280px;background:#fff;border-right:1px solid #dce0e2;padding-top:16px}\
.sidebar a{display:flex;margin:4px 8px;padding:10px;border-radius:4px;font-weight:500;font-size:.95rem;color:#1b3139;text-decoration:none}\
.sidebar a.active{background:#1b3139;color:#fff}.sidebar .icon{margin-right:10px;min-width:40px}\
main{margin-left:280px;margin-top:56px;padding:24px;min-height:calc(100vh - 56px)}\
h4{margin-bottom:24px;font-weight:600;color:#1b3139}\
.cards{display:grid;grid-template-columns:repeat(auto-fit,minmax(220px,1fr));gap:24px}\
.card{background:#fff;border-radius:8px;padding:16px;box-shadow:0 2px 8px rgba(27,49,57,.08)}\
.card p{color:#5a6f77;margin:0 0 8px}.card h3{margin:0;font-weight:700}\
table{width:100%;border-collapse:collapse}th,td{text-align:left;padding:12px}\
th{background:#f9f7f4;font-weight:600}\
tr.risk-high{background:#ffebee;color:#c62828}tr.risk-medium{background:#fff8e1;color:#f57f17}tr.risk-low{background:#e8f5e9;color:#2e7d32}\
.alert{border-radius:6px;padding:16px}.alert-info{background:#e3f2fd}.alert-warning{background:#fff8e1}\
.description{margin-bottom:16px;color:#5a6f77}select{min-width:320px;padding:6px;margin-bottom:16px}";

/// Full HTML document for `page`; `selected` only affects the AI/BI page.
#[must_use]
pub fn render_page<S: SafetyStore + ?Sized>(
    store: &S,
    page: Page,
    selected: Option<&str>,
) -> String {
    let content = match page {
        Page::Overview => overview(store),
        Page::DrugSafety => drug_safety(store),
        Page::AdverseEvents => adverse_events(store),
        Page::AibiDashboards => aibi_dashboards(store, selected),
    };
    format!(
        "<!doctype html><html><head><meta charset=\"utf-8\"><title>{}</title><style>{STYLE}</style></head><body>\
{}{}<main><div id=\"page-content\">{content}</div></main></body></html>",
        escape_html(PAGE_TITLE),
        header(),
        sidebar(page),
    )
}

fn header() -> String {
    "<nav class=\"navbar\"><h6>Postmarket Safety Surveillance</h6>\
<div class=\"brand\"><span>Adverse Events Registry</span><small>Powered by Lakebase</small></div></nav>"
        .to_string()
}

fn sidebar(active: Page) -> String {
    let mut links = String::new();
    for page in Page::ALL {
        let class = if page == active { " class=\"active\"" } else { "" };
        let _ = write!(
            links,
            "<a id=\"nav-{}\" href=\"{}\"{class}><span class=\"icon\">{}</span><span>{}</span></a>",
            page.id(),
            page.href(),
            page.icon(),
            escape_html(page.label()),
        );
    }
    format!("<nav class=\"sidebar\">{links}</nav>")
}

fn overview<S: SafetyStore + ?Sized>(store: &S) -> String {
    let kpis = dashboard_kpis(store);
    let cards = [
        ("Total Cases", kpis.total_cases, INFO),
        ("Total Drugs", kpis.total_drugs, PRIMARY),
        ("High Risk Drugs", kpis.high_risk_drugs, HIGH_RISK),
        ("Total Adverse Events", kpis.total_adverse_events, SECONDARY),
    ];
    let mut body = String::new();
    for (label, value, color) in cards {
        let _ = write!(
            body,
            "<div class=\"card\" style=\"background:linear-gradient(135deg, {color}15 0%, {color}05 100%)\">\
<p>{label}</p><h3 style=\"color:{color}\">{}</h3></div>",
            group_thousands(value),
        );
    }
    format!("<h4>Overview Dashboard</h4><div class=\"cards\">{body}</div>")
}

fn table(headers: &[&str], rows: &str) -> String {
    let head: String = headers
        .iter()
        .map(|h| format!("<th>{}</th>", escape_html(h)))
        .collect();
    format!("<div class=\"card\"><table><thead><tr>{head}</tr></thead><tbody>{rows}</tbody></table></div>")
}

fn risk_class(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::High => "risk-high",
        RiskLevel::Medium => "risk-medium",
        _ => "risk-low",
    }
}

fn drug_safety<S: SafetyStore + ?Sized>(store: &S) -> String {
    let mut rows = String::new();
    for row in store.drug_safety() {
        let _ = write!(
            rows,
            "<tr class=\"{}\"><td>{}</td><td>{}</td><td>{:.1}</td><td>{}</td></tr>",
            risk_class(row.risk_level),
            escape_html(&row.drug_name),
            row.total_events,
            row.signal_score,
            row.risk_level,
        );
    }
    format!(
        "<h4>Drug Safety Summary</h4>{}",
        table(&["Drug Name", "Total Events", "Signal Score", "Risk Level"], &rows)
    )
}

fn adverse_events<S: SafetyStore + ?Sized>(store: &S) -> String {
    let mut rows = String::new();
    for row in store.top_adverse_events() {
        let _ = write!(
            rows,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape_html(&row.drug_name),
            escape_html(&row.adverse_event),
            row.event_count,
            row.severity,
        );
    }
    format!(
        "<h4>Top Adverse Events</h4>{}",
        table(&["Drug Name", "Adverse Event", "Event Count", "Severity"], &rows)
    )
}

fn aibi_dashboards<S: SafetyStore + ?Sized>(store: &S, requested: Option<&str>) -> String {
    let selection = DashboardSelection::resolve(store, requested);
    let mut options = String::from("<option value=\"\">Choose a dashboard...</option>");
    for dashboard in store.dashboards() {
        let selected = if selection.selected_id() == Some(dashboard.id.as_str()) {
            " selected"
        } else {
            ""
        };
        let _ = write!(
            options,
            "<option value=\"{}\"{selected}>{}</option>",
            escape_html(&dashboard.id),
            escape_html(&dashboard.name),
        );
    }
    let (description, content) = match selection.pane() {
        AibiPane::Prompt => (
            String::new(),
            "<div class=\"alert alert-info\"><h5>Select a Dashboard</h5>\
<p>Choose a dashboard from the dropdown above to view AI/BI analytics.</p></div>"
                .to_string(),
        ),
        AibiPane::NotConfigured { description } => (
            escape_html(&description),
            "<div class=\"alert alert-warning\"><h5>Dashboard URL Not Configured</h5>\
<p>Please configure the dashboard URL in the application.</p><hr>\
<p>To configure:</p><ol>\
<li>Create AI/BI Dashboards in Databricks</li>\
<li>Get the embed URL for each dashboard</li>\
<li>Update the dashboard URLs in the application</li></ol>\
<p>Embed URL format:</p>\
<code>https://your-workspace.cloud.databricks.com/sql/dashboards/dashboard-id?o=workspace-id</code></div>"
                .to_string(),
        ),
    };
    format!(
        "<h4>Databricks AI/BI Dashboards</h4>\
<div class=\"card\"><form method=\"get\" action=\"{}\"><label for=\"dashboard-dropdown\">Select Dashboard</label><br>\
<select id=\"dashboard-dropdown\" name=\"dashboard\" onchange=\"this.form.submit()\">{options}</select>\
<noscript><button type=\"submit\">Show</button></noscript></form>\
<div id=\"dashboard-description\" class=\"description\">{description}</div></div>\
<div id=\"dashboard-content\">{content}</div>",
        Page::AibiDashboards.href(),
    )
}
