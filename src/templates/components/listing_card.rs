use crate::domain::format::{
    amenities_summary, details_line, format_rating, nightly_price, parse_leading_float,
    star_rating, truncate_text,
};
use crate::domain::listing::{HOST_PHOTO_BROKEN_PLACEHOLDER, THUMBNAIL_BROKEN_PLACEHOLDER};
use crate::domain::Listing;
use maud::{html, Markup};

const DESCRIPTION_MAX_CHARS: usize = 150;

/// Display-ready strings for one card.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingCardVm {
    pub title: String,
    pub thumbnail_url: String,
    pub thumbnail_alt: String,
    pub price_badge: String,
    pub host_photo_url: String,
    pub host_photo_alt: String,
    pub host_name: String,
    pub is_superhost: bool,
    pub stars: String,
    pub rating: String,
    pub description: String,
    pub amenities: String,
    pub details: String,
}

impl ListingCardVm {
    pub fn from_listing(listing: &Listing) -> Self {
        // Stars are read back from the rating text shown next to them.
        let rating = format_rating(listing.rating());
        let stars = star_rating(parse_leading_float(&rating));

        Self {
            title: listing.title().to_string(),
            thumbnail_url: listing.thumbnail_url().to_string(),
            thumbnail_alt: listing.thumbnail_alt().to_string(),
            price_badge: nightly_price(listing.price.as_deref()),
            host_photo_url: listing.host_photo_url().to_string(),
            host_photo_alt: listing.host_photo_alt().to_string(),
            host_name: listing.host_display_name().to_string(),
            is_superhost: listing.is_superhost(),
            stars,
            rating,
            description: truncate_text(listing.description_text(), DESCRIPTION_MAX_CHARS),
            amenities: amenities_summary(&listing.amenities()),
            details: details_line(
                listing.property_type.as_deref(),
                listing.room_type.as_deref(),
                listing.accommodates.as_deref(),
            ),
        }
    }
}

fn fallback_src(url: &str) -> String {
    format!("this.onerror=null;this.src='{url}';")
}

pub fn listing_card(vm: &ListingCardVm) -> Markup {
    html! {
        div class="listing col-12 col-md-6 col-lg-4 mb-4" {
            article class="card h-100 listing-card" {
                div class="thumbnail-container" {
                    img
                        class="card-img-top listing-thumbnail"
                        src=(vm.thumbnail_url)
                        alt=(vm.thumbnail_alt)
                        loading="lazy"
                        onerror=(fallback_src(THUMBNAIL_BROKEN_PLACEHOLDER));
                    div class="price-badge" { (vm.price_badge) }
                }

                div class="card-body" {
                    h3 class="card-title listing-title" { (vm.title) }

                    div class="host-info mb-2" {
                        img
                            class="host-photo"
                            src=(vm.host_photo_url)
                            alt=(vm.host_photo_alt)
                            onerror=(fallback_src(HOST_PHOTO_BROKEN_PLACEHOLDER));
                        span class="host-name" { (vm.host_name) }
                        @if vm.is_superhost {
                            span class="badge bg-warning text-dark superhost-badge" { "Superhost" }
                        }
                    }

                    div class="rating mb-2" {
                        span class="rating-stars" { (vm.stars) }
                        span class="rating-text" { (vm.rating) }
                    }

                    div class="description mb-3" { (vm.description) }

                    div class="amenities mb-3" {
                        strong { "Amenities:" }
                        div class="amenities-list" { (vm.amenities) }
                    }

                    div class="listing-details mb-3" {
                        small class="text-muted" { (vm.details) }
                    }

                    div class="actions" {
                        button type="button" class="btn btn-primary w-100" { "View Details" }
                    }
                }
            }
        }
    }
}
