//! Report envelope and the sections shared by both report shapes.

use serde::Serialize;

use crate::config::SIMULATED_RESPONSE_TIME;
use crate::error_handling::AuditError;

/// Outcome of one audit call.
///
/// Serializes either as the report itself or as exactly `{"error": "..."}`;
/// a partially filled report is never produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AuditReport<T> {
    Complete(T),
    Failed { error: String },
}

impl<T> AuditReport<T> {
    pub fn is_error(&self) -> bool {
        matches!(self, AuditReport::Failed { .. })
    }

    /// The failure message, if the audit failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            AuditReport::Complete(_) => None,
            AuditReport::Failed { error } => Some(error.as_str()),
        }
    }

    /// The report, if the audit succeeded.
    pub fn report(&self) -> Option<&T> {
        match self {
            AuditReport::Complete(report) => Some(report),
            AuditReport::Failed { .. } => None,
        }
    }

    pub fn into_report(self) -> Option<T> {
        match self {
            AuditReport::Complete(report) => Some(report),
            AuditReport::Failed { .. } => None,
        }
    }
}

impl<T> From<Result<T, AuditError>> for AuditReport<T> {
    fn from(result: Result<T, AuditError>) -> Self {
        match result {
            Ok(report) => AuditReport::Complete(report),
            Err(e) => AuditReport::Failed {
                error: e.to_string(),
            },
        }
    }
}

/// The `http` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HttpInfo {
    pub status: u16,
    pub using_https: bool,
    /// Always `"Simulated"`; timing is not measured
    pub response_time: &'static str,
}

impl HttpInfo {
    pub fn new(status: u16, using_https: bool) -> Self {
        Self {
            status,
            using_https,
            response_time: SIMULATED_RESPONSE_TIME,
        }
    }
}
