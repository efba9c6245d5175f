//! Remote API access.

pub mod api;
