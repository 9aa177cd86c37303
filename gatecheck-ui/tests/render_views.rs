//! Rendering tests for the pure view components
//!
//! Server-side renders each view with fixed props and asserts on the
//! produced markup, so the picker's hide-when-trivial rule and the result
//! panel's two modes are covered without a browser.

use dioxus::prelude::*;
use gatecheck_ui::display_types::{Location, VerificationOutcome};
use gatecheck_ui::{LocationSelectorView, VerificationResultView};
use serde_json::json;

fn render_to_html(app: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

fn loc(id: i64, name: &str) -> Location {
    Location {
        id,
        name: name.to_string(),
    }
}

#[component]
fn EmptyPicker() -> Element {
    rsx! {
        LocationSelectorView {
            locations: Vec::<Location>::new(),
            selected_location_id: None,
            on_select: move |_| {},
        }
    }
}

#[component]
fn SingleLocationPicker() -> Element {
    rsx! {
        LocationSelectorView {
            locations: vec![loc(1, "Headquarters")],
            selected_location_id: Some(1),
            on_select: move |_| {},
        }
    }
}

#[component]
fn TwoLocationPicker() -> Element {
    rsx! {
        LocationSelectorView {
            locations: vec![loc(3, "North"), loc(7, "South")],
            selected_location_id: Some(3),
            on_select: move |_| {},
        }
    }
}

#[test]
fn picker_is_absent_for_zero_locations() {
    let html = render_to_html(EmptyPicker);
    assert!(!html.contains("<select"), "unexpected picker in: {html}");
}

#[test]
fn picker_is_absent_for_one_location() {
    let html = render_to_html(SingleLocationPicker);
    assert!(!html.contains("<select"), "unexpected picker in: {html}");
}

#[test]
fn picker_renders_one_option_per_location() {
    let html = render_to_html(TwoLocationPicker);
    assert_eq!(html.matches("<option").count(), 2, "in: {html}");
    assert!(html.contains("value=\"3\""));
    assert!(html.contains("value=\"7\""));
    assert!(html.contains("North"));
    assert!(html.contains("South"));
    assert!(html.contains("Location:"));
}

#[component]
fn FailedResult() -> Element {
    rsx! {
        VerificationResultView {
            outcome: VerificationOutcome {
                status: "error".to_string(),
                error_code: Some("ACCESS_DENIED".to_string()),
                message: Some("No active permit for this site".to_string()),
                access_list: None,
            },
        }
    }
}

#[component]
fn PassedResult() -> Element {
    rsx! {
        VerificationResultView {
            outcome: VerificationOutcome {
                status: "verified".to_string(),
                error_code: None,
                message: None,
                access_list: Some(json!({"zones": ["lobby", "lab-2"]})),
            },
        }
    }
}

#[component]
fn PassedResultWithoutAccessList() -> Element {
    rsx! {
        VerificationResultView {
            outcome: VerificationOutcome {
                status: "verified".to_string(),
                error_code: None,
                message: None,
                access_list: None,
            },
        }
    }
}

#[test]
fn failed_result_shows_status_code_and_message() {
    let html = render_to_html(FailedResult);
    assert!(html.contains("Verification failed"));
    assert!(html.contains("error"));
    assert!(html.contains("ACCESS_DENIED"));
    assert!(html.contains("No active permit for this site"));
}

#[test]
fn passed_result_dumps_access_list() {
    let html = render_to_html(PassedResult);
    assert!(html.contains("Verification passed"));
    assert!(html.contains("lab-2"));
    assert!(!html.contains("Verification failed"));
}

#[test]
fn passed_result_without_access_list_has_no_dump() {
    let html = render_to_html(PassedResultWithoutAccessList);
    assert!(html.contains("Verification passed"));
    assert!(!html.contains("<pre"));
}
