//! gatecheck mocks - fixture-driven demo app
//!
//! A minimal web app that renders the UI components with canned data,
//! without a backend. Used for design review and screenshots.

mod demo_data;
mod pages;

use dioxus::prelude::*;
use pages::{MockIndex, MockLocationPicker, MockSubmission, MockVerificationResult};

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    MockIndex {},
    #[route("/location-picker")]
    MockLocationPicker {},
    #[route("/verification-result")]
    MockVerificationResult {},
    #[route("/submission")]
    MockSubmission {},
}

#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        div { class: "min-h-screen bg-gray-900 text-white", Router::<Route> {} }
    }
}

fn main() {
    dioxus::launch(App);
}
