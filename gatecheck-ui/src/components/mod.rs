//! Shared UI components

pub mod location_selector;
pub mod verification_result;

pub use location_selector::LocationSelectorView;
pub use verification_result::VerificationResultView;
