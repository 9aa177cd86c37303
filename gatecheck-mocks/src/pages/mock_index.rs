use crate::Route;
use dioxus::prelude::*;

#[component]
fn SpecimenLink(to: Route, title: &'static str, description: &'static str) -> Element {
    rsx! {
        Link {
            to,
            class: "block bg-gray-800/60 border border-gray-700 rounded-lg p-4 hover:border-gray-500 transition-colors",
            p { class: "text-sm font-medium text-gray-200", "{title}" }
            p { class: "text-xs text-gray-500 mt-1", "{description}" }
        }
    }
}

#[component]
pub fn MockIndex() -> Element {
    rsx! {
        div { class: "p-8 max-w-2xl",
            h1 { class: "text-2xl font-bold mb-6", "gatecheck mocks" }
            div { class: "space-y-2",
                SpecimenLink {
                    to: Route::MockLocationPicker {},
                    title: "Location picker",
                    description: "Hide-when-trivial rule and selection handling",
                }
                SpecimenLink {
                    to: Route::MockVerificationResult {},
                    title: "Verification result",
                    description: "Success, success with access list, and error panels",
                }
                SpecimenLink {
                    to: Route::MockSubmission {},
                    title: "Submission progress",
                    description: "Drive the submission store through its setters",
                }
            }
        }
    }
}
