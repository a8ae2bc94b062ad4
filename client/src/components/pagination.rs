//! Page selector under the product table. Fixed page size; no size changer.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

use leptos::prelude::*;

/// 1-based page numbers to show as buttons.
fn page_numbers(total: u64, page_size: u32) -> Vec<u32> {
    let pages = total.div_ceil(u64::from(page_size.max(1)));
    let pages = u32::try_from(pages).unwrap_or(u32::MAX).max(1);
    (1..=pages).collect()
}

#[component]
pub fn Pagination(
    #[prop(into)] current: Signal<u32>,
    #[prop(into)] total: Signal<u64>,
    page_size: u32,
    on_change: Callback<u32>,
) -> impl IntoView {
    let pages = Memo::new(move |_| page_numbers(total.get(), page_size));
    let last_page = move || pages.with(|p| p.last().copied().unwrap_or(1));

    view! {
        <nav class="pagination" aria-label="Pagination">
            <span class="pagination__total">{move || format!("Total {} items", total.get())}</span>
            <button
                class="pagination__step"
                disabled=move || current.get() <= 1
                on:click=move |_| on_change.run(current.get_untracked().saturating_sub(1).max(1))
            >
                "‹"
            </button>
            <For each=move || pages.get() key=|page| *page let:page>
                <button
                    class=move || {
                        if current.get() == page {
                            "pagination__page pagination__page--active"
                        } else {
                            "pagination__page"
                        }
                    }
                    on:click=move |_| on_change.run(page)
                >
                    {page}
                </button>
            </For>
            <button
                class="pagination__step"
                disabled=move || current.get() >= last_page()
                on:click=move |_| on_change.run(current.get_untracked() + 1)
            >
                "›"
            </button>
        </nav>
    }
}
