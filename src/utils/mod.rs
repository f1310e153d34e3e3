//! Browser helpers.
//!
//! - [`dom`] - window access, confirmation prompts and body classes
//! - [`logging`] - `tracing` subscriber that writes to the browser console

pub mod dom;
pub mod logging;
