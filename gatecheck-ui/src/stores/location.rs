//! Location selection state store
//!
//! Single source of truth for the known locations and the active selection.
//! The selection survives reloads via one local storage key; everything else
//! lives only for the session.

use crate::display_types::Location;
use crate::storage::SelectionStorage;
use dioxus::prelude::*;

/// Storage key holding the selected location id as a decimal string.
/// Absence of the key means "no selection".
pub const SELECTED_LOCATION_KEY: &str = "selectedLocationId";

/// Shared location selection state
///
/// `selected_location_id` is intended to be `None` or an id present in
/// `locations`, but replacing the list does not re-validate the selection:
/// a stale id is tolerated and simply renders as no current choice.
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct LocationSelectionState {
    /// Known locations, in server response order
    pub locations: Vec<Location>,
    /// Active selection, persisted across sessions
    pub selected_location_id: Option<i64>,
    /// Reserved for a stricter fetch path; the selector never drives this
    pub is_loading: bool,
    /// Reserved for a stricter fetch path; the selector never drives this
    pub error: Option<String>,
}

impl LocationSelectionState {
    /// Build the session-start state, restoring the selection from storage.
    ///
    /// A missing or non-numeric stored value normalizes to no selection.
    pub fn restore(storage: &dyn SelectionStorage) -> Self {
        let selected_location_id = storage
            .get(SELECTED_LOCATION_KEY)
            .and_then(|v| v.parse().ok());
        Self {
            selected_location_id,
            ..Default::default()
        }
    }

    /// Replace the full location list.
    ///
    /// The current selection is left as-is even if the new list no longer
    /// contains it.
    pub fn set_locations(&mut self, locations: Vec<Location>) {
        self.locations = locations;
    }

    /// Set the active selection and persist it.
    ///
    /// `Some(id)` writes the key, `None` removes it. The storage write is
    /// best-effort; in-memory state updates regardless.
    pub fn set_selected_location_id(
        &mut self,
        id: Option<i64>,
        storage: &dyn SelectionStorage,
    ) {
        match id {
            Some(id) => storage.set(SELECTED_LOCATION_KEY, &id.to_string()),
            None => storage.remove(SELECTED_LOCATION_KEY),
        }
        self.selected_location_id = id;
    }

    pub fn set_is_loading(&mut self, is_loading: bool) {
        self.is_loading = is_loading;
    }

    pub fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }

    /// Clear everything and remove the persisted key.
    pub fn reset(&mut self, storage: &dyn SelectionStorage) {
        storage.remove(SELECTED_LOCATION_KEY);
        *self = Self::default();
    }

    /// Apply a successful location fetch: replace the list, then default
    /// the selection to the first entry iff none exists yet (first-wins,
    /// never overrides an existing selection, stale or not).
    pub fn ingest_fetched(
        &mut self,
        locations: Vec<Location>,
        storage: &dyn SelectionStorage,
    ) {
        self.set_locations(locations);
        if self.selected_location_id.is_none() {
            if let Some(first_id) = self.locations.first().map(|l| l.id) {
                self.set_selected_location_id(Some(first_id), storage);
            }
        }
    }
}
