pub mod api;
pub mod config;
pub mod pages;

use dioxus::prelude::*;
use gatecheck_ui::storage::BrowserStorage;
use gatecheck_ui::stores::{AppState, LocationSelectionState};
use pages::{AppLayout, Home};

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    Home {},
}

#[component]
pub fn App() -> Element {
    // One store for the whole session; the persisted selection is restored
    // here so every consumer sees it from the first render.
    let store = use_store(|| AppState {
        location: LocationSelectionState::restore(&BrowserStorage),
        ..Default::default()
    });
    use_context_provider(|| store);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        div { class: "min-h-screen", Router::<Route> {} }
    }
}
