// SPDX-License-Identifier: Apache-2.0

/// Dashboard pages. Unknown paths fall back to [`Page::Overview`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Overview,
    DrugSafety,
    AdverseEvents,
    AibiDashboards,
}

impl Page {
    pub const ALL: [Self; 4] = [
        Self::Overview,
        Self::DrugSafety,
        Self::AdverseEvents,
        Self::AibiDashboards,
    ];

    #[must_use]
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "/drug-safety" => Self::DrugSafety,
            "/adverse-events" => Self::AdverseEvents,
            "/aibi-dashboards" => Self::AibiDashboards,
            _ => Self::Overview,
        }
    }

    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::DrugSafety => "drug-safety",
            Self::AdverseEvents => "adverse-events",
            Self::AibiDashboards => "aibi-dashboards",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::DrugSafety => "Drug Safety",
            Self::AdverseEvents => "Adverse Events",
            Self::AibiDashboards => "Databricks AI/BI Dashboards",
        }
    }

    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Overview => "\u{1F4CA}",
            Self::DrugSafety => "\u{26A0}\u{FE0F}",
            Self::AdverseEvents => "\u{1F4CB}",
            Self::AibiDashboards => "\u{1F4C8}",
        }
    }

    #[must_use]
    pub fn href(self) -> String {
        format!("/{}", self.id())
    }
}
