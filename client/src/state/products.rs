//! Product management page state: list query, fetch bookkeeping, and the
//! create/edit modal.
//!
//! DESIGN
//! ======
//! Everything here is plain data driven by the page component, so the whole
//! list/search/modal cycle can be exercised without a browser.
//!
//! - Every fetch takes a `FetchTicket`; only the latest ticket may apply its
//!   result, so a slow response for an old page or term is dropped.
//! - A settled search term that differs from the current one and is non-empty
//!   jumps back to page 1. An empty term keeps the current page.
//! - The modal is one enum: closed, or open with a mode, the form, and whether
//!   a submit is in flight.

#[cfg(test)]
#[path = "products_test.rs"]
mod products_test;

use crate::net::types::{Product, ProductDraft, ProductPage};
use crate::state::notify::NotificationQueue;

pub const PAGE_SIZE: u32 = 5;
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

pub const FETCH_FAILED_TITLE: &str = "Error";
pub const FETCH_FAILED_DESCRIPTION: &str = "Gagal mengambil data produk.";
pub const CREATED_MESSAGE: &str = "Produk berhasil ditambahkan";
pub const UPDATED_MESSAGE: &str = "Produk berhasil diupdate";
pub const SUBMIT_FAILED_MESSAGE: &str = "Terjadi kesalahan";
pub const DELETED_MESSAGE: &str = "Produk berhasil dihapus";
pub const DELETE_FAILED_MESSAGE: &str = "Gagal menghapus produk";

pub const TITLE_REQUIRED: &str = "Title is required";
pub const PRICE_REQUIRED: &str = "Price is required";
pub const PRICE_INVALID: &str = "Price must be a number";
pub const PRICE_NEGATIVE: &str = "Price must be 0 or more";

// =============================================================================
// LIST
// =============================================================================

/// Parameters of one `/api/products` call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListQuery {
    pub page: u32,
    pub limit: u32,
    pub search: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchTicket(u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchOutcome {
    Applied,
    Failed,
    /// A newer fetch was started; this result was discarded.
    Stale,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProductsState {
    /// 1-based.
    pub page: u32,
    /// Debounced search term used for fetching.
    pub search: String,
    pub products: Vec<Product>,
    pub total: u64,
    pub loading: bool,
    generation: u64,
}

impl Default for ProductsState {
    fn default() -> Self {
        Self {
            page: 1,
            search: String::new(),
            products: Vec::new(),
            total: 0,
            loading: false,
            generation: 0,
        }
    }
}

impl ProductsState {
    #[must_use]
    pub fn query(&self) -> ListQuery {
        ListQuery { page: self.page, limit: PAGE_SIZE, search: self.search.clone() }
    }

    /// Start a fetch for the current query. Earlier tickets become stale.
    pub fn begin_fetch(&mut self) -> (FetchTicket, ListQuery) {
        self.generation += 1;
        self.loading = true;
        (FetchTicket(self.generation), self.query())
    }

    /// Apply a fetch result if `ticket` is still the latest. A failure keeps
    /// the rows already shown and only clears `loading`.
    pub fn finish_fetch(&mut self, ticket: FetchTicket, result: Result<ProductPage, String>) -> FetchOutcome {
        if ticket.0 != self.generation {
            return FetchOutcome::Stale;
        }
        self.loading = false;
        match result {
            Ok(page) => {
                self.products = page.data;
                self.total = page.pagination.total;
                FetchOutcome::Applied
            }
            Err(_) => FetchOutcome::Failed,
        }
    }

    /// Move to `page` (clamped to 1). Returns `true` if a fetch is needed.
    pub fn set_page(&mut self, page: u32) -> bool {
        let page = page.max(1);
        if page == self.page {
            return false;
        }
        self.page = page;
        true
    }

    /// Adopt a settled search term. Returns `true` if the query changed; a
    /// term equal to the current one changes nothing, page included.
    pub fn apply_search(&mut self, term: &str) -> bool {
        if term == self.search {
            return false;
        }
        self.search = term.to_owned();
        if !term.is_empty() {
            self.page = 1;
        }
        true
    }

    #[must_use]
    pub fn page_count(&self) -> u64 {
        self.total.div_ceil(u64::from(PAGE_SIZE))
    }
}

/// Apply a list result and raise the error toast when it failed.
pub fn complete_fetch(
    state: &mut ProductsState,
    notices: &mut NotificationQueue,
    ticket: FetchTicket,
    result: Result<ProductPage, String>,
) -> FetchOutcome {
    let outcome = state.finish_fetch(ticket, result);
    if outcome == FetchOutcome::Failed {
        notices.error(FETCH_FAILED_TITLE, Some(FETCH_FAILED_DESCRIPTION));
    }
    outcome
}

/// Report a delete result. Success re-fetches the current page; failure
/// leaves `loading` to whichever fetch is in flight.
pub fn complete_delete(
    state: &mut ProductsState,
    notices: &mut NotificationQueue,
    result: Result<(), String>,
) -> Option<(FetchTicket, ListQuery)> {
    match result {
        Ok(()) => {
            notices.success(DELETED_MESSAGE);
            Some(state.begin_fetch())
        }
        Err(_) => {
            notices.error(DELETE_FAILED_MESSAGE, None);
            None
        }
    }
}

// =============================================================================
// MODAL
// =============================================================================

/// Raw form inputs. `price` stays text until validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProductForm {
    pub title: String,
    pub price: String,
    pub description: String,
    pub category: String,
    pub image: String,
}

impl Default for ProductForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            price: "0".to_owned(),
            description: String::new(),
            category: String::new(),
            image: String::new(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub title: Option<&'static str>,
    pub price: Option<&'static str>,
}

impl FormErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.price.is_none()
    }
}

impl ProductForm {
    #[must_use]
    pub fn from_product(product: &Product) -> Self {
        Self {
            title: product.product_title.clone(),
            price: price_input(product.product_price),
            description: product.product_description.clone().unwrap_or_default(),
            category: product.product_category.clone().unwrap_or_default(),
            image: product.product_image.clone().unwrap_or_default(),
        }
    }

    /// Check the required fields and build the outgoing draft.
    ///
    /// # Errors
    ///
    /// Returns per-field messages when the title is blank or the price is
    /// missing, not a number, or negative.
    pub fn validate(&self) -> Result<ProductDraft, FormErrors> {
        let mut errors = FormErrors::default();
        if self.title.trim().is_empty() {
            errors.title = Some(TITLE_REQUIRED);
        }
        let price = match parse_price(&self.price) {
            Ok(price) => price,
            Err(message) => {
                errors.price = Some(message);
                0.0
            }
        };
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(ProductDraft {
            product_title: self.title.clone(),
            product_price: price,
            product_description: self.description.clone(),
            product_category: self.category.clone(),
            product_image: self.image.clone(),
        })
    }
}

fn parse_price(raw: &str) -> Result<f64, &'static str> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(PRICE_REQUIRED);
    }
    let price: f64 = raw.parse().map_err(|_| PRICE_INVALID)?;
    if !price.is_finite() {
        return Err(PRICE_INVALID);
    }
    if price < 0.0 {
        return Err(PRICE_NEGATIVE);
    }
    Ok(price)
}

#[allow(clippy::cast_possible_truncation)]
fn price_input(price: f64) -> String {
    if price.fract() == 0.0 && price.abs() < 1e15 {
        format!("{}", price as i64)
    } else {
        price.to_string()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ModalMode {
    Create,
    Edit(Product),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalPhase {
    Editing,
    Submitting,
}

/// What a successful submit sends.
#[derive(Clone, Debug, PartialEq)]
pub enum Submission {
    Create(ProductDraft),
    Update(Product),
}

impl Submission {
    #[must_use]
    pub fn success_message(&self) -> &'static str {
        match self {
            Self::Create(_) => CREATED_MESSAGE,
            Self::Update(_) => UPDATED_MESSAGE,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum ModalState {
    #[default]
    Closed,
    Open {
        mode: ModalMode,
        form: ProductForm,
        errors: FormErrors,
        phase: ModalPhase,
    },
}

impl ModalState {
    #[must_use]
    pub fn create() -> Self {
        Self::Open {
            mode: ModalMode::Create,
            form: ProductForm::default(),
            errors: FormErrors::default(),
            phase: ModalPhase::Editing,
        }
    }

    #[must_use]
    pub fn edit(product: Product) -> Self {
        Self::Open {
            form: ProductForm::from_product(&product),
            mode: ModalMode::Edit(product),
            errors: FormErrors::default(),
            phase: ModalPhase::Editing,
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Open { phase: ModalPhase::Submitting, .. })
    }

    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Self::Open { mode: ModalMode::Edit(_), .. } => "Edit Product",
            _ => "Create New Product",
        }
    }

    #[must_use]
    pub fn form(&self) -> Option<&ProductForm> {
        match self {
            Self::Open { form, .. } => Some(form),
            Self::Closed => None,
        }
    }

    #[must_use]
    pub fn errors(&self) -> FormErrors {
        match self {
            Self::Open { errors, .. } => errors.clone(),
            Self::Closed => FormErrors::default(),
        }
    }

    /// Edit the form in place. Ignored while closed or submitting.
    pub fn update_form(&mut self, edit: impl FnOnce(&mut ProductForm)) {
        if let Self::Open { form, phase: ModalPhase::Editing, .. } = self {
            edit(form);
        }
    }

    /// Validate and enter `Submitting`. Returns what to send, or `None` if the
    /// modal is closed, already submitting, or the form is invalid (the field
    /// errors are then stored on the modal).
    pub fn submit(&mut self) -> Option<Submission> {
        let Self::Open { mode, form, errors, phase } = self else {
            return None;
        };
        if *phase == ModalPhase::Submitting {
            return None;
        }
        match form.validate() {
            Ok(draft) => {
                *errors = FormErrors::default();
                *phase = ModalPhase::Submitting;
                Some(match mode {
                    ModalMode::Create => Submission::Create(draft),
                    ModalMode::Edit(original) => Submission::Update(draft.merge_into(original)),
                })
            }
            Err(field_errors) => {
                *errors = field_errors;
                None
            }
        }
    }

    pub fn close(&mut self) {
        *self = Self::Closed;
    }
}

/// Report a create/update result. Success closes the modal and re-fetches the
/// current page and term; failure leaves the modal open for another try.
pub fn complete_submission(
    state: &mut ProductsState,
    modal: &mut ModalState,
    notices: &mut NotificationQueue,
    submission: &Submission,
    result: Result<(), String>,
) -> Option<(FetchTicket, ListQuery)> {
    match result {
        Ok(()) => {
            notices.success(submission.success_message());
            modal.close();
            Some(state.begin_fetch())
        }
        Err(_) => {
            notices.error(SUBMIT_FAILED_MESSAGE, None);
            if let ModalState::Open { phase, .. } = modal {
                *phase = ModalPhase::Editing;
            }
            None
        }
    }
}
