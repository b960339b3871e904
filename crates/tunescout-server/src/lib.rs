//! HTTP/JSON backend for artist, album and lyrics lookups.
//!
//! Serves a static home page plus JSON endpoints backed by the iTunes Search
//! API (albums) and the Musixmatch API (lyrics). Input validation lives in
//! `tunescout-core`; this crate holds configuration, provider adapters,
//! error mapping, and route definitions.

pub mod config;
pub mod error;
pub mod handlers;
pub mod providers;
pub mod router;
pub mod schema;
pub mod state;
