use crate::demo_data;
use dioxus::prelude::*;
use gatecheck_ui::stores::SubmissionState;

/// Drives the submission store through its setters with fixture data,
/// rendering whatever the store currently holds.
#[component]
pub fn MockSubmission() -> Element {
    let mut state = use_signal(SubmissionState::default);

    let submission_id = state.read().submission_id.clone();
    let progress_dump = state
        .read()
        .progress
        .as_ref()
        .and_then(|p| serde_json::to_string_pretty(p).ok());

    rsx! {
        div { class: "p-8 max-w-xl space-y-6",
            h1 { class: "text-xl font-bold", "Submission progress" }

            div { class: "flex gap-2",
                button {
                    class: "text-sm rounded-lg px-3 py-1.5 border border-gray-600 text-gray-300 hover:border-gray-500 hover:text-white transition-colors",
                    onclick: move |_| {
                        state.write().set_submission_id(Some("sub-0042".to_string()));
                    },
                    "Assign id"
                }
                button {
                    class: "text-sm rounded-lg px-3 py-1.5 border border-gray-600 text-gray-300 hover:border-gray-500 hover:text-white transition-colors",
                    onclick: move |_| {
                        state.write().set_progress(Some(demo_data::demo_progress()));
                    },
                    "Advance progress"
                }
                button {
                    class: "text-sm rounded-lg px-3 py-1.5 border border-gray-600 text-gray-300 hover:border-gray-500 hover:text-white transition-colors",
                    onclick: move |_| state.write().reset(),
                    "Reset"
                }
            }

            div { class: "bg-gray-800/60 border border-gray-700 rounded-lg p-4",
                if let Some(id) = submission_id {
                    p { class: "text-sm font-medium text-gray-200 mb-1", "Submission {id}" }
                } else {
                    p { class: "text-sm text-gray-500 mb-1", "No submission" }
                }
                if let Some(dump) = progress_dump {
                    pre { class: "text-xs text-gray-400 overflow-x-auto", "{dump}" }
                }
            }
        }
    }
}
