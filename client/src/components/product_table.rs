//! Product table: title, price, category, description preview, actions.

use leptos::prelude::*;

use crate::net::types::Product;
use crate::util::format::{format_rupiah, truncate_description};

#[component]
pub fn ProductTable(
    #[prop(into)] products: Signal<Vec<Product>>,
    #[prop(into)] loading: Signal<bool>,
    on_edit: Callback<Product>,
    /// Rendered as a Delete button per row when present.
    #[prop(optional_no_strip)]
    on_delete: Option<Callback<Product>>,
) -> impl IntoView {
    view! {
        <div class=move || if loading.get() { "table-wrap table-wrap--loading" } else { "table-wrap" }>
            <table class="product-table">
                <thead>
                    <tr>
                        <th>"Product Title"</th>
                        <th>"Price"</th>
                        <th>"Category"</th>
                        <th>"Description"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <Show when=move || products.with(Vec::is_empty) && !loading.get()>
                        <tr class="product-table__empty">
                            <td colspan="5">"No data"</td>
                        </tr>
                    </Show>
                    <For
                        each=move || products.get()
                        key=|product| product.product_id.to_string()
                        let:product
                    >
                        <ProductRow product=product on_edit=on_edit on_delete=on_delete/>
                    </For>
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn ProductRow(product: Product, on_edit: Callback<Product>, on_delete: Option<Callback<Product>>) -> impl IntoView {
    let price = format_rupiah(product.product_price);
    let category = product.product_category.clone().unwrap_or_default();
    let description = truncate_description(product.product_description.as_deref().unwrap_or_default());
    let title = product.product_title.clone();
    let edit_target = product.clone();

    view! {
        <tr>
            <td>{title}</td>
            <td class="product-table__price">{price}</td>
            <td>{category}</td>
            <td>{description}</td>
            <td class="product-table__actions">
                <button class="btn" on:click=move |_| on_edit.run(edit_target.clone())>"Edit"</button>
                {on_delete.map(|on_delete| {
                    view! {
                        <button
                            class="btn btn--danger"
                            on:click=move |_| on_delete.run(product.clone())
                        >
                            "Delete"
                        </button>
                    }
                })}
            </td>
        </tr>
    }
}
