//! Global client state.

pub mod session;
