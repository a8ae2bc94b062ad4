//! Root application component with routing and context providers.

use std::rc::Rc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::notifications::Notifications;
use crate::components::protected_route::ProtectedRoute;
use crate::net::identity::{IdentityClient, IdentityConfig};
use crate::pages::{login::LoginPage, products::ProductsPage};
use crate::state::auth::SessionStore;
use crate::state::notify::NotificationQueue;
use crate::util::auth::PRODUCTS_PATH;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Builds the session store around the identity provider, provides it and
/// the notification queue as context, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let provider = Rc::new(IdentityClient::new(IdentityConfig::from_build_env()));
    let session = SessionStore::new(provider);
    session.init();
    // The provider's first announcement happens after hydration so the
    // server-rendered "loading" markup matches the client's first render.
    Effect::new(move || session.resolve());
    on_cleanup(move || session.teardown());

    provide_context(session);
    provide_context(RwSignal::new(NotificationQueue::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/product-admin.css"/>
        <Title text="Product Admin"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=|| view! { <Redirect path=PRODUCTS_PATH/> }/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route
                    path=StaticSegment("products")
                    view=|| view! { <ProtectedRoute><ProductsPage/></ProtectedRoute> }
                />
            </Routes>
        </Router>
        <Notifications/>
    }
}
