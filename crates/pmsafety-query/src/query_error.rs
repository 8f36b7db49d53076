// SPDX-License-Identifier: Apache-2.0

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum QueryErrorCode {
    NotFound,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryError {
    pub code: QueryErrorCode,
    pub message: String,
    /// Identifier of the record the query was about, if any.
    pub id: Option<String>,
}

impl QueryError {
    #[must_use]
    pub fn new(code: QueryErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            id: None,
        }
    }

    /// `kind` is the lower-case record name, e.g. `"adverse event"`.
    #[must_use]
    pub fn not_found(kind: &str, id: &str) -> Self {
        let mut chars = kind.chars();
        let kind = match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
            None => String::from("Record"),
        };
        Self {
            code: QueryErrorCode::NotFound,
            message: format!("{kind} not found"),
            id: Some(id.to_string()),
        }
    }
}

impl std::fmt::Display for QueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.id {
            Some(id) => write!(f, "{:?}: {} ({id})", self.code, self.message),
            None => write!(f, "{:?}: {}", self.code, self.message),
        }
    }
}
impl std::error::Error for QueryError {}
