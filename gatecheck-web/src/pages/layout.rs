use crate::Route;
use dioxus::prelude::*;

#[component]
pub fn AppLayout() -> Element {
    rsx! {
        div { class: "min-h-screen bg-gray-900 text-white",
            header { class: "border-b border-gray-800 px-6 py-4 flex items-center gap-3",
                h1 { class: "text-lg font-semibold tracking-tight", "gatecheck" }
                span { class: "text-xs text-gray-500", "site access verification" }
            }
            main { class: "p-6", Outlet::<Route> {} }
        }
    }
}
