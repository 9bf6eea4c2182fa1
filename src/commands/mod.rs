//! Remote Command Wrappers
//!
//! Frontend bindings to the remote endpoint, organized by domain.

mod users;

// Re-export all public items
pub use users::*;
