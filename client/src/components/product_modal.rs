//! Create/edit product dialog.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads and writes the page's `RwSignal<ModalState>`. Submitting only asks
//! the page to send; validation and phase changes live in `ModalState`.

use leptos::prelude::*;

use crate::state::products::{ModalState, ProductForm};

fn field(modal: RwSignal<ModalState>, read: fn(&ProductForm) -> &String) -> impl Fn() -> String + Copy + Send + Sync + 'static {
    move || modal.with(|m| m.form().map(|form| read(form).clone()).unwrap_or_default())
}

#[component]
pub fn ProductModal(modal: RwSignal<ModalState>, on_submit: Callback<()>) -> impl IntoView {
    let title = field(modal, |f| &f.title);
    let price = field(modal, |f| &f.price);
    let description = field(modal, |f| &f.description);
    let category = field(modal, |f| &f.category);
    let image = field(modal, |f| &f.image);

    let errors = move || modal.with(ModalState::errors);
    let submitting = move || modal.with(ModalState::is_submitting);

    let on_cancel = move |_| modal.update(ModalState::close);
    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(());
    };
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            modal.update(ModalState::close);
        }
    };

    view! {
        <Show when=move || modal.with(ModalState::is_open)>
            <div class="dialog-backdrop" on:click=on_cancel>
                <div
                    class="dialog"
                    role="dialog"
                    aria-modal="true"
                    tabindex="0"
                    on:click=move |ev| ev.stop_propagation()
                    on:keydown=on_keydown
                >
                    <h2>{move || modal.with(ModalState::title)}</h2>
                    <form class="product-form" on:submit=on_form_submit>
                        <label class="product-form__field">
                            <span class="product-form__label product-form__label--required">"Product Title"</span>
                            <input
                                type="text"
                                prop:value=title
                                disabled=submitting
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    modal.update(|m| m.update_form(|f| f.title = value));
                                }
                            />
                            {move || errors().title.map(|msg| view! { <span class="product-form__error">{msg}</span> })}
                        </label>
                        <label class="product-form__field">
                            <span class="product-form__label product-form__label--required">"Price"</span>
                            <input
                                type="number"
                                min="0"
                                step="any"
                                prop:value=price
                                disabled=submitting
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    modal.update(|m| m.update_form(|f| f.price = value));
                                }
                            />
                            {move || errors().price.map(|msg| view! { <span class="product-form__error">{msg}</span> })}
                        </label>
                        <label class="product-form__field">
                            <span class="product-form__label">"Description"</span>
                            <textarea
                                rows="4"
                                prop:value=description
                                disabled=submitting
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    modal.update(|m| m.update_form(|f| f.description = value));
                                }
                            ></textarea>
                        </label>
                        <label class="product-form__field">
                            <span class="product-form__label">"Category"</span>
                            <input
                                type="text"
                                prop:value=category
                                disabled=submitting
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    modal.update(|m| m.update_form(|f| f.category = value));
                                }
                            />
                        </label>
                        <label class="product-form__field">
                            <span class="product-form__label">"Image URL"</span>
                            <input
                                type="text"
                                prop:value=image
                                disabled=submitting
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    modal.update(|m| m.update_form(|f| f.image = value));
                                }
                            />
                        </label>
                        <div class="dialog__actions">
                            <button type="button" class="btn" on:click=on_cancel>"Cancel"</button>
                            <button type="submit" class="btn btn--primary" disabled=submitting>
                                {move || if submitting() { "Saving..." } else { "OK" }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
