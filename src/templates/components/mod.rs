pub mod error;
pub mod listing_card;
pub mod listing_form;

pub use error::error_page;
pub use listing_card::{listing_card, ListingCardVm};
pub use listing_form::{listing_form, ListingFormVm};
