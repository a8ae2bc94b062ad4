//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `login`, `products`, `notify`) so each
//! page depends only on the small models it drives.

pub mod auth;
pub mod login;
pub mod notify;
pub mod products;
