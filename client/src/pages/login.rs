//! Email/password login page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sign-in goes straight to the identity provider. This page never sets auth
//! state itself: on success the provider announces the user, the session
//! store updates, and the effect below moves to `/products`.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::SessionStore;
use crate::state::login::{LoginPhase, LoginView, login_view, should_enter_app};
use crate::util::auth::PRODUCTS_PATH;

pub const EMAIL_REQUIRED: &str = "Please input your Email!";
pub const EMAIL_INVALID: &str = "The input is not valid E-mail!";
pub const PASSWORD_REQUIRED: &str = "Please input your Password!";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CredentialErrors {
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
}

/// Loose `local@domain.tld` shape check; the provider does the real validation.
fn looks_like_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && domain.split('.').all(|label| !label.is_empty())
}

/// Trim the email and check both fields are usable.
fn validate_credentials(email: &str, password: &str) -> Result<(String, String), CredentialErrors> {
    let email = email.trim();
    let mut errors = CredentialErrors::default();
    if email.is_empty() {
        errors.email = Some(EMAIL_REQUIRED);
    } else if !looks_like_email(email) {
        errors.email = Some(EMAIL_INVALID);
    }
    if password.is_empty() {
        errors.password = Some(PASSWORD_REQUIRED);
    }
    if errors == CredentialErrors::default() {
        Ok((email.to_owned(), password.to_owned()))
    } else {
        Err(errors)
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let auth = store.state();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let field_errors = RwSignal::new(CredentialErrors::default());
    let phase = RwSignal::new(LoginPhase::default());

    Effect::new(move || {
        if should_enter_app(&auth.get()) {
            navigate(PRODUCTS_PATH, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let (email_value, password_value) = match validate_credentials(&email.get(), &password.get()) {
            Ok(valid) => valid,
            Err(errors) => {
                field_errors.set(errors);
                return;
            }
        };
        field_errors.set(CredentialErrors::default());
        if !phase.try_update(LoginPhase::begin).unwrap_or(false) {
            return;
        }

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match store.sign_in(email_value, password_value).await {
                Ok(_) => phase.update(LoginPhase::succeed),
                Err(e) => {
                    log::error!("Login failed: {e}");
                    phase.update(LoginPhase::fail);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (store, email_value, password_value);
        }
    };

    let view_kind = Memo::new(move |_| login_view(&auth.get()));
    let submitting = move || phase.with(LoginPhase::is_submitting);

    move || match view_kind.get() {
        LoginView::Placeholder => view! { <div class="placeholder">"Loading..."</div> }.into_any(),
        LoginView::Form => view! {
            <div class="login-page">
                <div class="login-card">
                    <h1>"Login"</h1>
                    <form class="login-form" on:submit=on_submit novalidate>
                        <input
                            class="login-input"
                            type="email"
                            placeholder="Email"
                            autocomplete="off"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                        {move || field_errors.get().email.map(|msg| view! { <p class="login-field-error">{msg}</p> })}
                        <input
                            class="login-input"
                            type="password"
                            placeholder="Password"
                            autocomplete="off"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        {move || field_errors.get().password.map(|msg| view! { <p class="login-field-error">{msg}</p> })}
                        {move || {
                            phase.with(|p| p.error().map(str::to_owned))
                                .map(|msg| view! { <div class="login-message login-message--error">{msg}</div> })
                        }}
                        <button class="login-button" type="submit" disabled=submitting>
                            {move || if submitting() { "Logging in..." } else { "Log In" }}
                        </button>
                    </form>
                </div>
            </div>
        }
        .into_any(),
    }
}
