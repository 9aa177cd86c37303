use crate::demo_data;
use dioxus::prelude::*;
use gatecheck_ui::VerificationResultView;

#[component]
pub fn MockVerificationResult() -> Element {
    rsx! {
        div { class: "p-8 max-w-xl space-y-8",
            h1 { class: "text-xl font-bold", "Verification result" }

            div {
                h2 { class: "text-sm text-gray-500 mb-2", "Passed, with access list" }
                VerificationResultView { outcome: demo_data::outcome_passed() }
            }

            div {
                h2 { class: "text-sm text-gray-500 mb-2", "Passed, no access list" }
                VerificationResultView { outcome: demo_data::outcome_passed_minimal() }
            }

            div {
                h2 { class: "text-sm text-gray-500 mb-2", "Failed" }
                VerificationResultView { outcome: demo_data::outcome_failed() }
            }
        }
    }
}
