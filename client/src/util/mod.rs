//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep routing decisions, timing, and display formatting out
//! of page and component code so they can be tested without a browser.

pub mod auth;
pub mod debounce;
pub mod format;
