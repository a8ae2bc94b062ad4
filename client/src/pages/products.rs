//! Product management page: search, table, pagination, create/edit modal.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guarded by `ProtectedRoute`. All list/modal bookkeeping is in
//! `state::products`; this page owns the signals, the timers, and the calls
//! into `net::api`.
//!
//! Fetches are started explicitly (mount, page change, settled search, after a
//! successful write) rather than from an effect on the query, so one settled
//! search term produces exactly one request.

use leptos::prelude::*;

use crate::components::pagination::Pagination;
use crate::components::product_modal::ProductModal;
use crate::components::product_table::ProductTable;
use crate::net::types::Product;
use crate::state::auth::SessionStore;
use crate::state::notify::NotificationQueue;
use crate::state::products::{
    FetchTicket, ListQuery, ModalState, PAGE_SIZE, ProductsState, Submission, complete_delete, complete_submission,
};
use crate::util::debounce::Debounce;

/// The Delete action is wired but hidden until product removal is exposed to operators.
const SHOW_DELETE_ACTION: bool = false;

/// Run the list request for `ticket` and apply its result.
fn spawn_fetch(
    products: RwSignal<ProductsState>,
    notices: RwSignal<NotificationQueue>,
    ticket: FetchTicket,
    query: ListQuery,
) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_products(query.page, query.limit, &query.search).await;
        if let Err(e) = &result {
            log::warn!("product list fetch failed: {e}");
        }
        products.update(|state| {
            notices.update(|queue| {
                crate::state::products::complete_fetch(state, queue, ticket, result);
            });
        });
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (products, notices, ticket, query);
    }
}

#[component]
pub fn ProductsPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let notices = expect_context::<RwSignal<NotificationQueue>>();

    let products = RwSignal::new(ProductsState::default());
    let modal = RwSignal::new(ModalState::Closed);
    let search_input = RwSignal::new(String::new());
    let debounce = StoredValue::new(Debounce::<String>::default());

    let run_fetch = move || {
        if let Some((ticket, query)) = products.try_update(ProductsState::begin_fetch) {
            spawn_fetch(products, notices, ticket, query);
        }
    };

    // Initial load, browser only.
    Effect::new(move || run_fetch());

    let schedule_search = move |term: String| {
        let Some(ticket) = debounce.try_update_value(|d| d.push(term)) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(crate::state::products::SEARCH_DEBOUNCE_MS).await;
            let Some(Some(term)) = debounce.try_update_value(|d| d.settle(ticket)) else {
                return;
            };
            if products.try_update(|state| state.apply_search(&term)).unwrap_or(false) {
                run_fetch();
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ticket;
        }
    };

    let on_search_input = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        search_input.set(value.clone());
        schedule_search(value);
    };
    let on_search_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        schedule_search(search_input.get_untracked());
    };

    let on_page_change = Callback::new(move |page: u32| {
        if products.try_update(|state| state.set_page(page)).unwrap_or(false) {
            run_fetch();
        }
    });

    let on_edit = Callback::new(move |product: Product| modal.set(ModalState::edit(product)));
    let on_create = move |_| modal.set(ModalState::create());

    let on_submit = Callback::new(move |()| {
        let Some(Some(submission)) = modal.try_update(ModalState::submit) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = match &submission {
                Submission::Create(draft) => crate::net::api::create_product(draft).await,
                Submission::Update(product) => crate::net::api::update_product(product).await,
            }
            .map(|_| ());
            if let Err(e) = &result {
                log::error!("product save failed: {e}");
            }
            let mut refetch = None;
            products.update(|state| {
                modal.update(|m| {
                    notices.update(|queue| {
                        refetch = complete_submission(state, m, queue, &submission, result);
                    });
                });
            });
            if let Some((ticket, query)) = refetch {
                spawn_fetch(products, notices, ticket, query);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = submission;
        }
    });

    let on_delete = Callback::new(move |product: Product| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::delete_product(&product.product_id).await.map(|_| ());
            if let Err(e) = &result {
                log::error!("product delete failed: {e}");
            }
            let mut refetch = None;
            products.update(|state| {
                notices.update(|queue| {
                    refetch = complete_delete(state, queue, result);
                });
            });
            if let Some((ticket, query)) = refetch {
                spawn_fetch(products, notices, ticket, query);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = product;
        }
    });

    let user_label = move || {
        store
            .state()
            .with(|auth| auth.user.as_ref().map(|u| u.label().to_owned()))
            .unwrap_or_default()
    };

    view! {
        <div class="products-page">
            <header class="products-page__header">
                <h1>"Product Management"</h1>
                <div class="products-page__session">
                    <span class="products-page__user">{user_label}</span>
                    <button class="btn" on:click=move |_| store.sign_out()>"Sign out"</button>
                </div>
            </header>

            <div class="products-page__toolbar">
                <form class="search" on:submit=on_search_submit>
                    <input
                        class="search__input"
                        type="search"
                        placeholder="Search by title, description, category..."
                        prop:value=move || search_input.get()
                        on:input=on_search_input
                    />
                    <button class="btn" type="submit">"Search"</button>
                </form>
                <button class="btn btn--primary" on:click=on_create>"Create Product"</button>
            </div>

            <ProductTable
                products=Signal::derive(move || products.with(|s| s.products.clone()))
                loading=Signal::derive(move || products.with(|s| s.loading))
                on_edit=on_edit
                on_delete=SHOW_DELETE_ACTION.then_some(on_delete)
            />

            <Pagination
                current=Signal::derive(move || products.with(|s| s.page))
                total=Signal::derive(move || products.with(|s| s.total))
                page_size=PAGE_SIZE
                on_change=on_page_change
            />

            <ProductModal modal=modal on_submit=on_submit/>
        </div>
    }
}
