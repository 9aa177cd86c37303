//! Submission progress state store

use dioxus::prelude::*;

/// State of the in-flight verification submission, if any.
///
/// Plain setters only; the submit flow that drives this lives with its
/// page, not here. Nothing in this store is persisted.
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct SubmissionState {
    /// Identifier assigned by the backend on submit
    pub submission_id: Option<String>,
    /// Opaque progress record, passed through to the UI as-is
    pub progress: Option<serde_json::Value>,
}

impl SubmissionState {
    pub fn set_submission_id(&mut self, submission_id: Option<String>) {
        self.submission_id = submission_id;
    }

    pub fn set_progress(&mut self, progress: Option<serde_json::Value>) {
        self.progress = progress;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_setters() {
        let mut state = SubmissionState::default();
        state.set_submission_id(Some("sub-19".to_string()));
        state.set_progress(Some(json!({"step": "screening", "percent": 40})));

        assert_eq!(state.submission_id.as_deref(), Some("sub-19"));
        assert_eq!(state.progress.as_ref().unwrap()["percent"], 40);
    }

    #[test]
    fn test_reset() {
        let mut state = SubmissionState::default();
        state.set_submission_id(Some("sub-19".to_string()));
        state.set_progress(Some(json!({"step": "done"})));
        state.reset();

        assert_eq!(state, SubmissionState::default());
    }
}
