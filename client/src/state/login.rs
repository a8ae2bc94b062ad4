//! Login form state machine.
//!
//! `Idle -> Submitting -> Idle | Failed(message)`. A failed attempt keeps the
//! message visible until the next submit clears it.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use crate::state::auth::AuthState;

/// Shown for every sign-in failure; the underlying cause only goes to the console.
pub const LOGIN_FAILED_MESSAGE: &str = "Email atau password salah. Silakan coba lagi.";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoginPhase {
    #[default]
    Idle,
    Submitting,
    Failed(String),
}

impl LoginPhase {
    /// Enter `Submitting`. Returns `false` (and changes nothing) if a sign-in
    /// is already in flight.
    pub fn begin(&mut self) -> bool {
        if self.is_submitting() {
            return false;
        }
        *self = Self::Submitting;
        true
    }

    pub fn succeed(&mut self) {
        *self = Self::Idle;
    }

    pub fn fail(&mut self) {
        *self = Self::Failed(LOGIN_FAILED_MESSAGE.to_owned());
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// What the login route renders for the current auth state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginView {
    /// Auth still resolving, or already signed in and about to leave.
    Placeholder,
    Form,
}

#[must_use]
pub fn login_view(state: &AuthState) -> LoginView {
    if state.loading || state.user.is_some() {
        LoginView::Placeholder
    } else {
        LoginView::Form
    }
}

/// Signed-in users on the login route go straight to the products page.
#[must_use]
pub fn should_enter_app(state: &AuthState) -> bool {
    !state.loading && state.user.is_some()
}
