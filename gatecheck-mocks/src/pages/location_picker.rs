use crate::demo_data;
use dioxus::prelude::*;
use gatecheck_ui::display_types::Location;
use gatecheck_ui::LocationSelectorView;

#[component]
pub fn MockLocationPicker() -> Element {
    let mut selected = use_signal(|| Some(3i64));
    let locations = demo_data::demo_locations();
    let selected_label = selected()
        .map(|id| id.to_string())
        .unwrap_or_else(|| "none".to_string());

    rsx! {
        div { class: "p-8 max-w-xl space-y-8",
            h1 { class: "text-xl font-bold", "Location picker" }

            div {
                h2 { class: "text-sm text-gray-500 mb-2", "Three locations" }
                LocationSelectorView {
                    locations: locations.clone(),
                    selected_location_id: selected(),
                    on_select: move |id| selected.set(id),
                }
                p { class: "text-xs text-gray-500 mt-2", "Selected id: {selected_label}" }
            }

            div {
                h2 { class: "text-sm text-gray-500 mb-2",
                    "One location (renders nothing)"
                }
                LocationSelectorView {
                    locations: locations[..1].to_vec(),
                    selected_location_id: None,
                    on_select: |_| {},
                }
            }

            div {
                h2 { class: "text-sm text-gray-500 mb-2",
                    "No locations (renders nothing)"
                }
                LocationSelectorView {
                    locations: Vec::<Location>::new(),
                    selected_location_id: None,
                    on_select: |_| {},
                }
            }
        }
    }
}
