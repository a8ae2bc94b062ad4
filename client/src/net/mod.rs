//! Networking modules for the product proxy and the identity provider.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` calls this app's own `/api/*` routes, `identity` talks to the
//! identity provider directly, and `types` defines the shared wire schema.

pub mod api;
pub mod identity;
pub mod types;
