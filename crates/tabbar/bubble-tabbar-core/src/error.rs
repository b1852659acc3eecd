//! Errors raised at the fallible edges of the core (color strings, JSON config and snapshots).
//!
//! The per-frame path never fails: unresolvable routes are omitted and missing values fall
//! back to palette defaults.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TabBarError {
    #[error("invalid color '{input}': {reason}")]
    InvalidColor { input: String, reason: String },
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("active index {index} out of range for {len} routes")]
    IndexOutOfRange { index: usize, len: usize },
}

impl TabBarError {
    pub(crate) fn invalid_color(input: &str, reason: impl Into<String>) -> Self {
        TabBarError::InvalidColor {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}
