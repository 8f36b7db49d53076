// SPDX-License-Identifier: Apache-2.0

use crate::{API_VERSION, SERVICE_NAME};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HealthDto {
    pub status: String,
    pub service: String,
    pub environment: String,
    pub version: String,
}

impl HealthDto {
    #[must_use]
    pub fn healthy(environment: &str) -> Self {
        Self {
            status: "healthy".to_string(),
            service: SERVICE_NAME.to_string(),
            environment: environment.to_string(),
            version: API_VERSION.to_string(),
        }
    }
}
