use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Site {
    pub id: String,
    pub name: String,
    pub country: String,
}

impl Site {
    #[must_use]
    pub fn new(id: &str, name: &str, country: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            country: country.to_string(),
        }
    }
}

/// A named AI/BI dashboard. None of them carry an embed URL yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DashboardDescriptor {
    pub id: String,
    pub name: String,
    pub description: String,
}

impl DashboardDescriptor {
    #[must_use]
    pub fn new(id: &str, name: &str, description: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
        }
    }
}
