//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guarded routes and the login page must agree on when the auth context is
//! settled and what to do with it. The decisions live here as plain
//! functions; the components only wire them to signals and navigation.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

pub const LOGIN_PATH: &str = "/login";
pub const PRODUCTS_PATH: &str = "/products";

/// What a guarded route should show for the current auth state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Auth still resolving: render the loading placeholder.
    Pending,
    /// Resolved with no user: render nothing and redirect to login.
    Redirect,
    /// Resolved with a user: render the protected content.
    Render,
}

#[must_use]
pub fn guard_decision(state: &AuthState) -> GuardDecision {
    match (state.loading, state.user.is_some()) {
        (true, _) => GuardDecision::Pending,
        (false, false) => GuardDecision::Redirect,
        (false, true) => GuardDecision::Render,
    }
}

#[must_use]
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    guard_decision(state) == GuardDecision::Redirect
}

/// Lets a redirect fire once per unauthenticated stretch, even if the effect
/// that drives it re-runs. Re-arms once a user shows up again.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RedirectLatch {
    fired: bool,
}

impl RedirectLatch {
    /// Returns `true` exactly when the caller should navigate now.
    pub fn observe(&mut self, state: &AuthState) -> bool {
        match guard_decision(state) {
            GuardDecision::Redirect if !self.fired => {
                self.fired = true;
                true
            }
            GuardDecision::Render => {
                self.fired = false;
                false
            }
            _ => false,
        }
    }
}

/// Redirect to `/login` whenever auth has loaded and no user is present.
pub fn install_unauth_redirect<F>(auth: ReadSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let latch = StoredValue::new(RedirectLatch::default());
    Effect::new(move || {
        let state = auth.get();
        let fire = latch.try_update_value(|latch| latch.observe(&state)).unwrap_or(false);
        if fire {
            navigate(LOGIN_PATH, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
