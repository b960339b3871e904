//! HTTP handler modules for the tunescout API.
//!
//! Handlers validate input through `tunescout-core`, delegate to a provider
//! adapter, and return JSON responses. No business logic lives in handlers.

pub mod artist;
pub mod home;
pub mod lyrics;
