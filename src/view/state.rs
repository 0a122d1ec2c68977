use crate::error::FetchError;
use crate::models::{RawResponse, Record};

/// Lifecycle of one resource view. Exactly one variant is active.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState {
    #[default]
    Loading,
    Error(String),
    Ready(Vec<Record>),
}

impl ViewState {
    /// Terminal state for a finished fetch cycle.
    pub fn from_result(result: Result<RawResponse, FetchError>) -> Self {
        match result {
            Ok(raw) => ViewState::Ready(raw.into_records()),
            Err(e) => ViewState::Error(e.to_string()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn records(&self) -> Option<&[Record]> {
        match self {
            ViewState::Ready(records) => Some(records),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            ViewState::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ViewState::Loading => "loading",
            ViewState::Error(_) => "error",
            ViewState::Ready(_) => "ready",
        }
    }
}
