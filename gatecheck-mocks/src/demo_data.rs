//! Fixture data for the mock pages

use gatecheck_ui::display_types::{Location, VerificationOutcome};
use serde_json::json;

pub fn demo_locations() -> Vec<Location> {
    [
        (3, "North Campus"),
        (7, "South Campus"),
        (12, "Harbor Lab"),
    ]
    .into_iter()
    .map(|(id, name)| Location {
        id,
        name: name.to_string(),
    })
    .collect()
}

pub fn outcome_passed() -> VerificationOutcome {
    VerificationOutcome {
        status: "verified".to_string(),
        error_code: None,
        message: None,
        access_list: Some(json!({
            "zones": ["lobby", "lab-2", "server-room"],
            "valid_until": "2026-12-31",
        })),
    }
}

pub fn outcome_passed_minimal() -> VerificationOutcome {
    VerificationOutcome {
        status: "verified".to_string(),
        error_code: None,
        message: None,
        access_list: None,
    }
}

pub fn outcome_failed() -> VerificationOutcome {
    VerificationOutcome {
        status: "error".to_string(),
        error_code: Some("PERMIT_EXPIRED".to_string()),
        message: Some("The permit on file expired on 2026-05-01.".to_string()),
        access_list: None,
    }
}

pub fn demo_progress() -> serde_json::Value {
    json!({
        "step": "document-screening",
        "percent": 40,
    })
}
