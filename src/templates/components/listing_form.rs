use maud::{html, Markup};

pub const DEFAULT_PRICE: u32 = 80;

/// Values shown in the entry form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingFormVm {
    pub title: String,
    pub price: u32,
    pub description: String,
}

impl Default for ListingFormVm {
    fn default() -> Self {
        Self {
            title: String::new(),
            price: DEFAULT_PRICE,
            description: String::new(),
        }
    }
}

/// Cancel posts to `/listing-form/reset`; htmx swaps the returned fragment
/// in place, plain browsers follow the redirect back to `/`.
pub fn listing_form(vm: &ListingFormVm) -> Markup {
    html! {
        form id="listing-form" class="listing-form card card-body mb-4" method="post" {
            div class="mb-3" {
                label for="input-title" class="form-label" { "Title" }
                input
                    type="text"
                    id="input-title"
                    name="title"
                    class="form-control"
                    value=(vm.title);
            }

            div class="mb-3" {
                label for="input-price" class="form-label" { "Price per night" }
                input
                    type="number"
                    id="input-price"
                    name="price"
                    class="form-control"
                    min="0"
                    value=(vm.price);
            }

            div class="mb-3" {
                label for="input-description" class="form-label" { "Description" }
                textarea
                    id="input-description"
                    name="description"
                    class="form-control"
                    rows="3"
                { (vm.description) }
            }

            div class="d-flex gap-2" {
                button
                    type="submit"
                    id="btnCancel"
                    class="btn btn-outline-secondary"
                    formaction="/listing-form/reset"
                    hx-post="/listing-form/reset"
                    hx-target="#listing-form"
                    hx-swap="outerHTML"
                { "Cancel" }
            }
        }
    }
}
