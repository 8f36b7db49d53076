use serde::{Deserialize, Serialize};

/// Default result counts applied when a request names no `limit`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QueryLimits {
    pub adverse_event_limit: usize,
    pub case_limit: usize,
}

impl Default for QueryLimits {
    fn default() -> Self {
        Self {
            adverse_event_limit: 100,
            case_limit: 50,
        }
    }
}

/// End of the slice taken from the filtered rows.
///
/// A non-negative limit keeps the first `n` matches; a negative one counts
/// from the end and drops the last `n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResultLimit {
    First(usize),
    DropLast(usize),
}

impl ResultLimit {
    #[must_use]
    pub fn from_signed(value: i64) -> Self {
        let magnitude = usize::try_from(value.unsigned_abs()).unwrap_or(usize::MAX);
        if value < 0 {
            Self::DropLast(magnitude)
        } else {
            Self::First(magnitude)
        }
    }

    /// How many of `len` matching rows survive.
    #[must_use]
    pub fn keep(self, len: usize) -> usize {
        match self {
            Self::First(n) => n.min(len),
            Self::DropLast(n) => len.saturating_sub(n),
        }
    }
}
