pub mod amenities;
pub mod format;
pub mod listing;

pub use listing::Listing;
