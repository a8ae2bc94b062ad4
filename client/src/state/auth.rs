//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the route guard, the login page, and the products header. The
//! `SessionStore` mirrors what the identity provider announces; it never
//! decides on its own that someone is signed in or out.
//!
//! LIFECYCLE
//! =========
//! `init` subscribes to the provider (idempotent), `resolve` asks the provider
//! for its first announcement once the browser has hydrated, and `teardown`
//! unsubscribes. The store is constructed explicitly and handed to the app,
//! so tests can build one around their own provider.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::rc::Rc;

use leptos::prelude::*;

use crate::net::identity::{IdentityClient, IdentityError, ListenerId};
use crate::net::types::User;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    /// `true` until the provider has reported the initial session.
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl AuthState {
    #[must_use]
    pub fn resolved(user: Option<User>) -> Self {
        Self { user, loading: false }
    }
}

/// Injectable session store shared through Leptos context.
#[derive(Clone, Copy)]
pub struct SessionStore {
    read: ReadSignal<AuthState>,
    write: WriteSignal<AuthState>,
    provider: StoredValue<Rc<IdentityClient>, LocalStorage>,
    listener: StoredValue<Option<ListenerId>>,
}

impl SessionStore {
    pub fn new(provider: Rc<IdentityClient>) -> Self {
        let (read, write) = signal(AuthState::default());
        Self {
            read,
            write,
            provider: StoredValue::new_local(provider),
            listener: StoredValue::new(None),
        }
    }

    /// Subscribe to provider session changes. Calling it again is a no-op.
    pub fn init(self) {
        if self.listener.get_value().is_some() {
            return;
        }
        let write = self.write;
        let id = self.provider.with_value(|provider| {
            provider.on_session_change(move |user| {
                let _ = write.try_set(AuthState::resolved(user));
            })
        });
        self.listener.set_value(Some(id));
    }

    /// Unsubscribe from the provider. The last known state stays readable.
    pub fn teardown(self) {
        let Some(Some(id)) = self.listener.try_update_value(Option::take) else {
            return;
        };
        let _ = self.provider.try_with_value(|provider| provider.remove_listener(id));
    }

    /// Ask the provider to announce its initial session.
    pub fn resolve(self) {
        self.provider.with_value(|provider| provider.resolve());
    }

    /// Reactive view of the auth state.
    pub fn state(self) -> ReadSignal<AuthState> {
        self.read
    }

    /// Current auth state without tracking.
    pub fn snapshot(self) -> AuthState {
        self.read.get_untracked()
    }

    pub fn is_subscribed(self) -> bool {
        self.listener.get_value().is_some()
    }

    /// Sign in through the provider; the state updates via the subscription.
    ///
    /// # Errors
    ///
    /// Returns the provider's error when sign-in fails.
    pub async fn sign_in(self, email: String, password: String) -> Result<User, IdentityError> {
        let provider = self.provider.get_value();
        provider.sign_in_with_email_and_password(&email, &password).await
    }

    pub fn sign_out(self) {
        self.provider.with_value(|provider| provider.sign_out());
    }
}
