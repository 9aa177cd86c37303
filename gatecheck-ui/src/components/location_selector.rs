//! Location picker - pure rendering, no data fetching
//!
//! The fetch/persistence lifecycle lives with the page that mounts this
//! view; here we only render the current list and report choices upward.

use crate::display_types::Location;
use dioxus::prelude::*;

/// Dropdown for choosing the active location.
///
/// Renders nothing with fewer than two locations; a picker with one
/// choice (or none) is noise. The bound value uses an empty-string
/// sentinel when no selection exists, and a chosen value that does not
/// parse as an id reports `None` (clears the selection).
#[component]
pub fn LocationSelectorView(
    locations: Vec<Location>,
    selected_location_id: Option<i64>,
    on_select: EventHandler<Option<i64>>,
) -> Element {
    if locations.len() < 2 {
        return rsx! {};
    }

    let value = selected_location_id
        .map(|id| id.to_string())
        .unwrap_or_default();

    rsx! {
        div { class: "flex items-center gap-3",
            label {
                class: "text-sm text-gray-400",
                r#for: "location-select",
                "Location:"
            }
            select {
                id: "location-select",
                class: "text-sm rounded-lg px-3 py-1.5 bg-gray-800 border border-gray-600 text-gray-200 hover:border-gray-500 focus:outline-none focus:border-indigo-500",
                value: "{value}",
                onchange: move |evt: FormEvent| {
                    on_select.call(evt.value().parse::<i64>().ok());
                },
                for location in locations.iter() {
                    option {
                        key: "{location.id}",
                        value: "{location.id}",
                        "{location.name}"
                    }
                }
            }
        }
    }
}
