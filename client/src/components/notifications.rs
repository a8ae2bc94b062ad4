//! Toast stack for success/error notices.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages push into the `RwSignal<NotificationQueue>` context; this component
//! renders the queue and expires each toast after `NOTICE_TTL_MS`.

use leptos::prelude::*;

use crate::state::notify::{Notice, NoticeKind, NotificationQueue};

/// Fixed-position toast stack. Mounted once at the app root.
#[component]
pub fn Notifications() -> impl IntoView {
    let notices = expect_context::<RwSignal<NotificationQueue>>();

    view! {
        <div class="toasts" role="status" aria-live="polite">
            <For each=move || notices.get().notices().to_vec() key=|notice| notice.id let:notice>
                <Toast notice=notice/>
            </For>
        </div>
    }
}

#[component]
fn Toast(notice: Notice) -> impl IntoView {
    let notices = expect_context::<RwSignal<NotificationQueue>>();
    let id = notice.id;

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(crate::state::notify::NOTICE_TTL_MS).await;
        notices.update(|queue| {
            queue.dismiss(id);
        });
    });

    let class = match notice.kind {
        NoticeKind::Success => "toast toast--success",
        NoticeKind::Error => "toast toast--error",
    };

    view! {
        <div class=class>
            <div class="toast__body">
                <strong class="toast__message">{notice.message}</strong>
                {notice.description.map(|text| view! { <p class="toast__description">{text}</p> })}
            </div>
            <button
                class="toast__close"
                aria-label="Close"
                on:click=move |_| {
                    notices.update(|queue| {
                        queue.dismiss(id);
                    });
                }
            >
                "×"
            </button>
        </div>
    }
}
