//! Verification result panel
//!
//! Pure function of its one prop: an error panel for failed verifications,
//! otherwise a success panel with the granted access list dumped as JSON.

use crate::display_types::VerificationOutcome;
use dioxus::prelude::*;

#[component]
pub fn VerificationResultView(outcome: VerificationOutcome) -> Element {
    if outcome.is_error() {
        return rsx! {
            div { class: "bg-red-900/30 border border-red-700/50 rounded-lg p-4",
                p { class: "text-sm font-medium text-red-200 mb-1",
                    "Verification failed"
                }
                p { class: "text-xs text-gray-400", "Status: {outcome.status}" }
                if let Some(code) = outcome.error_code.as_ref() {
                    p { class: "text-xs text-gray-400 font-mono", "Code: {code}" }
                }
                if let Some(message) = outcome.message.as_ref() {
                    p { class: "text-sm text-gray-300 mt-2 select-text break-words",
                        "{message}"
                    }
                }
            }
        };
    }

    let access_dump = outcome
        .access_list
        .as_ref()
        .map(|list| serde_json::to_string_pretty(list).unwrap_or_default());

    rsx! {
        div { class: "bg-emerald-900/30 border border-emerald-700/50 rounded-lg p-4",
            p { class: "text-sm font-medium text-emerald-200 mb-1",
                "Verification passed"
            }
            p { class: "text-xs text-gray-400", "Status: {outcome.status}" }
            if let Some(dump) = access_dump {
                pre { class: "mt-3 p-3 rounded bg-gray-900/60 text-xs text-gray-300 overflow-x-auto select-text",
                    "{dump}"
                }
            }
        }
    }
}
