//! Fetch lifecycle state.

use serde::{Deserialize, Serialize};

/// State of one page-view fetch.
///
/// A failed fetch must not look like a perpetual loading spinner;
/// keeping the three states explicit lets the view render each one
/// differently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "state", content = "value")]
pub enum FetchState<T> {
    /// Request issued, response not yet in
    Loading,
    /// Response parsed successfully (possibly empty)
    Ready(T),
    /// Transport or decode failure, with the logged message
    Failed(String),
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// The payload, if the fetch completed.
    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    /// Map the payload, preserving loading/failure.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> FetchState<U> {
        match self {
            Self::Loading => FetchState::Loading,
            Self::Ready(value) => FetchState::Ready(f(value)),
            Self::Failed(message) => FetchState::Failed(message),
        }
    }
}

impl<T, E: std::fmt::Display> From<Result<T, E>> for FetchState<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(err) => Self::Failed(err.to_string()),
        }
    }
}
