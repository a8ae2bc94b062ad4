//! Route guard for pages that need a signed-in user.
//!
//! While auth resolves it shows a placeholder; once resolved without a user
//! it renders nothing and redirects to `/login` exactly once.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::SessionStore;
use crate::util::auth::{GuardDecision, guard_decision, install_unauth_redirect};

#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let auth = store.state();
    install_unauth_redirect(auth, use_navigate());

    let decision = Memo::new(move |_| guard_decision(&auth.get()));

    move || match decision.get() {
        GuardDecision::Pending => view! { <div class="placeholder">"Loading..."</div> }.into_any(),
        GuardDecision::Redirect => ().into_any(),
        GuardDecision::Render => children().into_any(),
    }
}
