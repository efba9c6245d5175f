//! Small client-side helpers.

pub mod constants;
pub mod lifecycle;
pub mod url;
