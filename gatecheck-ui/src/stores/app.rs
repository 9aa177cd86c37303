//! Top-level application state store
//!
//! Combines the sub-states into a single Store provided at the app root.
//! Components access state via lensing: `app.location().selected_location_id()`

use super::location::LocationSelectionState;
use super::submission::SubmissionState;
use dioxus::prelude::*;

/// Top-level application state combining all sub-states
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct AppState {
    /// Location list and active selection
    pub location: LocationSelectionState,
    /// In-flight verification submission
    pub submission: SubmissionState,
}
