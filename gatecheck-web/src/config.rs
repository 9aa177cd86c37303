//! Build-time configuration

/// Base address of the gatecheck API, supplied via `GATECHECK_API_URL`
/// when building. Empty means same-origin relative requests, which is
/// what deployments behind the usual reverse proxy want.
pub fn api_base_url() -> &'static str {
    option_env!("GATECHECK_API_URL").unwrap_or("")
}
