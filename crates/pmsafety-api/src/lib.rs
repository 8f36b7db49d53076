#![forbid(unsafe_code)]

pub mod dto;
pub mod error_mapping;
pub mod errors;
pub mod openapi;
pub mod params;

pub use dto::HealthDto;
pub use errors::{ApiError, ApiErrorCode};
pub use openapi::openapi_spec;
pub use params::{
    parse_adverse_event_params, parse_adverse_event_params_with_limits, parse_case_params,
    parse_case_params_with_limits, parse_workflow_params,
};

pub const CRATE_NAME: &str = "pmsafety-api";
pub const API_TITLE: &str = "Postmarket Safety Surveillance API";
pub const API_DESCRIPTION: &str =
    "Backend API for Postmarket Safety Surveillance and Adverse Event Reporting";
pub const API_VERSION: &str = "1.0.0";
pub const SERVICE_NAME: &str = "Postmarket Safety Surveillance";
