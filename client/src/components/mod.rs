//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the product screens and read/write shared state from
//! Leptos context providers or signals handed down by their page.

pub mod notifications;
pub mod pagination;
pub mod product_modal;
pub mod product_table;
pub mod protected_route;
