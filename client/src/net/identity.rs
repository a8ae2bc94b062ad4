//! Identity provider client: email/password sign-in against the Firebase
//! Identity Toolkit REST API, called straight from the browser.
//!
//! DESIGN
//! ======
//! The provider owns the signed-in session and announces every change to
//! registered listeners, the way the provider SDK's auth-state observer does.
//! Nothing else writes session state: the auth context only mirrors these
//! notifications.
//!
//! The first notification is deferred until `resolve()` runs in the browser,
//! so server-rendered markup (still "loading") matches the hydrated tree.

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[cfg(any(test, feature = "hydrate"))]
use serde::{Deserialize, Serialize};

use super::types::User;

pub const DEFAULT_AUTH_BASE_URL: &str = "https://identitytoolkit.googleapis.com";

#[cfg(feature = "hydrate")]
const SESSION_STORAGE_KEY: &str = "product_admin_session";

/// Errors from the identity provider. The login form collapses all of them
/// into one message; the variants exist for the console log.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentityError {
    #[error("identity provider API key is not configured")]
    NotConfigured,
    #[error("sign-in is only available in the browser")]
    Unavailable,
    #[error("sign-in request failed: {0}")]
    Transport(String),
    #[error("sign-in rejected: {0}")]
    Rejected(String),
    #[error("sign-in response parse failed: {0}")]
    Parse(String),
}

/// Provider endpoint settings, baked in at build time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityConfig {
    pub api_key: String,
    pub auth_base_url: String,
}

impl IdentityConfig {
    /// Read `IDENTITY_API_KEY` and `IDENTITY_AUTH_BASE_URL` from the build environment.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::new(
            option_env!("IDENTITY_API_KEY").unwrap_or_default(),
            option_env!("IDENTITY_AUTH_BASE_URL").unwrap_or(DEFAULT_AUTH_BASE_URL),
        )
    }

    #[must_use]
    pub fn new(api_key: &str, auth_base_url: &str) -> Self {
        Self {
            api_key: api_key.trim().to_owned(),
            auth_base_url: auth_base_url.trim().trim_end_matches('/').to_owned(),
        }
    }

    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }

    #[must_use]
    pub fn sign_in_endpoint(&self) -> String {
        format!("{}/v1/accounts:signInWithPassword?key={}", self.auth_base_url, self.api_key)
    }
}

// =============================================================================
// WIRE FORMAT
// =============================================================================

#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SignInRequest<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignInResponse {
    local_id: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    display_name: Option<String>,
    id_token: String,
    #[serde(default)]
    refresh_token: String,
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

#[cfg(any(test, feature = "hydrate"))]
fn sign_in_body(email: &str, password: &str) -> serde_json::Value {
    serde_json::json!(SignInRequest { email, password, return_secure_token: true })
}

/// Map a provider reply to a `User` or the provider's error code.
#[cfg(any(test, feature = "hydrate"))]
fn parse_sign_in_response(status: u16, body: &str) -> Result<User, IdentityError> {
    if !(200..300).contains(&status) {
        let code = serde_json::from_str::<ErrorEnvelope>(body)
            .map(|envelope| envelope.error.message)
            .unwrap_or_else(|_| format!("status {status}"));
        return Err(IdentityError::Rejected(code));
    }

    let reply: SignInResponse = serde_json::from_str(body).map_err(|e| IdentityError::Parse(e.to_string()))?;
    Ok(User {
        uid: reply.local_id,
        email: reply.email.filter(|e| !e.is_empty()),
        display_name: reply.display_name.filter(|n| !n.is_empty()),
        id_token: reply.id_token,
        refresh_token: reply.refresh_token,
    })
}

// =============================================================================
// CLIENT
// =============================================================================

/// Handle returned by [`IdentityClient::on_session_change`].
pub type ListenerId = u64;

type Listener = Rc<dyn Fn(Option<User>)>;

#[derive(Default)]
struct Listeners {
    next_id: ListenerId,
    entries: Vec<(ListenerId, Listener)>,
}

/// Browser-side identity provider. Single-threaded; share through `Rc`.
pub struct IdentityClient {
    config: IdentityConfig,
    session: RefCell<Option<User>>,
    resolved: Cell<bool>,
    listeners: RefCell<Listeners>,
}

impl IdentityClient {
    #[must_use]
    pub fn new(config: IdentityConfig) -> Self {
        Self {
            config,
            session: RefCell::new(None),
            resolved: Cell::new(false),
            listeners: RefCell::new(Listeners::default()),
        }
    }

    #[must_use]
    pub fn config(&self) -> &IdentityConfig {
        &self.config
    }

    #[must_use]
    pub fn current_user(&self) -> Option<User> {
        self.session.borrow().clone()
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().entries.len()
    }

    /// Register a session-change listener. If the initial session has already
    /// been resolved the listener is called once immediately.
    pub fn on_session_change(&self, listener: impl Fn(Option<User>) + 'static) -> ListenerId {
        let listener: Listener = Rc::new(listener);
        let id = {
            let mut listeners = self.listeners.borrow_mut();
            let id = listeners.next_id;
            listeners.next_id += 1;
            listeners.entries.push((id, listener.clone()));
            id
        };
        if self.resolved.get() {
            listener(self.current_user());
        }
        id
    }

    /// Unregister a listener. Returns `false` if it was already gone.
    pub fn remove_listener(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.entries.len();
        listeners.entries.retain(|(entry_id, _)| *entry_id != id);
        listeners.entries.len() != before
    }

    /// Restore any persisted session and announce the initial state. Runs once.
    pub fn resolve(&self) {
        if self.resolved.replace(true) {
            return;
        }
        *self.session.borrow_mut() = restore_session();
        self.notify();
    }

    /// Sign in with email and password. On success the new session is
    /// persisted and announced before this returns.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider is unconfigured, unreachable, or
    /// rejects the credentials.
    pub async fn sign_in_with_email_and_password(&self, email: &str, password: &str) -> Result<User, IdentityError> {
        if !self.config.is_configured() {
            return Err(IdentityError::NotConfigured);
        }
        let user = self.request_sign_in(email, password).await?;
        self.complete_sign_in(user.clone());
        Ok(user)
    }

    /// Drop the session and announce the signed-out state.
    pub fn sign_out(&self) {
        persist_session(None);
        *self.session.borrow_mut() = None;
        self.resolved.set(true);
        self.notify();
    }

    pub(crate) fn complete_sign_in(&self, user: User) {
        persist_session(Some(&user));
        *self.session.borrow_mut() = Some(user);
        self.resolved.set(true);
        self.notify();
    }

    /// Call every listener with the current session. The listener list is
    /// snapshotted first so a listener may (un)register without a borrow panic.
    fn notify(&self) {
        let snapshot: Vec<Listener> = self
            .listeners
            .borrow()
            .entries
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();
        let user = self.current_user();
        for listener in snapshot {
            listener(user.clone());
        }
    }

    #[cfg_attr(not(feature = "hydrate"), allow(clippy::unused_async))]
    async fn request_sign_in(&self, email: &str, password: &str) -> Result<User, IdentityError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.config.sign_in_endpoint())
                .json(&sign_in_body(email, password))
                .map_err(|e| IdentityError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| IdentityError::Transport(e.to_string()))?;
            let status = resp.status();
            let body = resp
                .text()
                .await
                .map_err(|e| IdentityError::Transport(e.to_string()))?;
            parse_sign_in_response(status, &body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email, password);
            Err(IdentityError::Unavailable)
        }
    }
}

// =============================================================================
// PERSISTENCE
// =============================================================================

fn restore_session() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window()?.local_storage().ok()??;
        let raw = storage.get_item(SESSION_STORAGE_KEY).ok()??;
        serde_json::from_str(&raw).ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

fn persist_session(user: Option<&User>) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        match user.and_then(|u| serde_json::to_string(u).ok()) {
            Some(raw) => {
                let _ = storage.set_item(SESSION_STORAGE_KEY, &raw);
            }
            None => {
                let _ = storage.remove_item(SESSION_STORAGE_KEY);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user;
    }
}
