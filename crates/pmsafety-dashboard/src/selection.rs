use pmsafety_model::DashboardDescriptor;
use pmsafety_store::SafetyStore;

/// What the AI/BI content pane shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AibiPane {
    /// Nothing selected yet.
    Prompt,
    /// A known dashboard with no embed URL wired in.
    NotConfigured { description: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardSelection {
    pub selected: Option<DashboardDescriptor>,
}

impl DashboardSelection {
    /// Unknown or empty ids count as no selection.
    #[must_use]
    pub fn resolve<S: SafetyStore + ?Sized>(store: &S, requested: Option<&str>) -> Self {
        let selected = requested
            .filter(|id| !id.is_empty())
            .and_then(|id| store.dashboards().iter().find(|d| d.id == id))
            .cloned();
        Self { selected }
    }

    #[must_use]
    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_ref().map(|d| d.id.as_str())
    }

    #[must_use]
    pub fn pane(&self) -> AibiPane {
        match &self.selected {
            None => AibiPane::Prompt,
            Some(dashboard) => AibiPane::NotConfigured {
                description: dashboard.description.clone(),
            },
        }
    }
}
