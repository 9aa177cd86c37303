//! API client for the gatecheck backend

use crate::config;
use gatecheck_ui::display_types::Location;
use serde::Deserialize;

/// Wire shape of a location record
#[derive(Deserialize)]
struct ApiLocation {
    id: i64,
    name: String,
}

/// Fetch the selectable locations.
///
/// Any transport failure, non-2xx status, or unparsable body comes back
/// as `Err`; the selector's mount path deliberately discards it, so this
/// never bubbles an error into the UI on its own.
pub async fn fetch_locations() -> Result<Vec<Location>, String> {
    let url = format!("{}/api/locations", config::api_base_url());
    let resp = reqwest::get(&url)
        .await
        .map_err(|e| format!("Network error: {e}"))?;

    if !resp.status().is_success() {
        return Err(format!("Server error: {}", resp.status()));
    }

    let wire: Vec<ApiLocation> = resp.json().await.map_err(|e| format!("Parse error: {e}"))?;

    Ok(wire
        .into_iter()
        .map(|l| Location {
            id: l.id,
            name: l.name,
        })
        .collect())
}
