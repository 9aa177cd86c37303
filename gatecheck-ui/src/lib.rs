//! gatecheck-ui - Shared UI types and components for gatecheck
//!
//! Contains display types, stores, and pure view components used by both
//! the real web app and the fixture-driven mocks app.

pub mod components;
pub mod display_types;
pub mod storage;
pub mod stores;

pub use components::*;
pub use display_types::*;
