// templates/pages/listings.rs

use crate::catalog::Catalog;
use crate::templates::{desktop_layout, listing_card, listing_form, ListingCardVm, ListingFormVm};
use maud::{html, Markup};

pub fn listings_page(catalog: &Catalog, form: &ListingFormVm) -> Markup {
    desktop_layout(
        "Rentals",
        html! {
            main class="container" {
                section class="mb-4" {
                    h2 class="h4" { "Add a listing" }
                    (listing_form(form))
                }

                section {
                    h2 class="h4 mb-3" { "Listings" }
                    div id="listings-container" class="row" {
                        @for listing in catalog.listings() {
                            (listing_card(&ListingCardVm::from_listing(listing)))
                        }
                    }
                }
            }
        },
    )
}
