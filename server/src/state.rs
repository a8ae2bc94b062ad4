//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds only the upstream product API handle: this server keeps no data
//! of its own.

use std::sync::Arc;

use crate::upstream::ProductApi;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; the upstream handle is Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub upstream: Arc<dyn ProductApi>,
}

impl AppState {
    #[must_use]
    pub fn new(upstream: Arc<dyn ProductApi>) -> Self {
        Self { upstream }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
#[path = "state_helpers_test.rs"]
pub mod test_helpers;
