//! Home page - mounts the location picker and its fetch lifecycle

use crate::api;
use dioxus::prelude::*;
use gatecheck_ui::storage::BrowserStorage;
use gatecheck_ui::stores::{
    AppState, AppStateStoreExt, LocationSelectionStateStoreExt, SubmissionStateStoreExt,
};
use gatecheck_ui::LocationSelectorView;

#[component]
pub fn Home() -> Element {
    let app = use_context::<Store<AppState>>();

    // One fetch per mount. The locations endpoint may not be deployed
    // everywhere yet, so a failed fetch leaves the store untouched and the
    // picker hidden instead of surfacing an error.
    use_future(move || async move {
        match api::fetch_locations().await {
            Ok(locations) => {
                app.location()
                    .write()
                    .ingest_fetched(locations, &BrowserStorage);
            }
            Err(err) => {
                tracing::debug!("location fetch failed: {err}");
            }
        }
    });

    let locations = app.location().locations().cloned();
    let selected_location_id = app.location().selected_location_id().cloned();
    let submission_id = app.submission().submission_id().cloned();
    let progress = app.submission().progress().cloned();

    rsx! {
        div { class: "max-w-xl space-y-6",
            LocationSelectorView {
                locations,
                selected_location_id,
                on_select: move |id| {
                    app.location()
                        .write()
                        .set_selected_location_id(id, &BrowserStorage);
                },
            }

            if let Some(id) = submission_id {
                div { class: "bg-gray-800/60 border border-gray-700 rounded-lg p-4",
                    p { class: "text-sm font-medium text-gray-200 mb-1",
                        "Submission {id}"
                    }
                    if let Some(progress) = progress.as_ref().and_then(|p| serde_json::to_string_pretty(p).ok()) {
                        pre { class: "text-xs text-gray-400 overflow-x-auto", "{progress}" }
                    }
                }
            }
        }
    }
}
