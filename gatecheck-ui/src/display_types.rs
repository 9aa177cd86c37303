//! Display types for UI components
//!
//! Lightweight versions of backend records, containing only the fields
//! needed for display. They enable props-based components that can work
//! with either real or demo data.

/// A selectable site
#[derive(Clone, Debug, PartialEq)]
pub struct Location {
    pub id: i64,
    pub name: String,
}

/// Outcome of a verification request, as shown to the user
#[derive(Clone, Debug, PartialEq)]
pub struct VerificationOutcome {
    /// `"error"` marks a failed verification; any other value is a success
    pub status: String,
    /// Machine-readable code for failed verifications
    pub error_code: Option<String>,
    /// Human-readable detail for failed verifications
    pub message: Option<String>,
    /// Granted access entries, rendered as a JSON dump when present
    pub access_list: Option<serde_json::Value>,
}

impl VerificationOutcome {
    pub fn is_error(&self) -> bool {
        self.status == "error"
    }
}
