use crate::domain::Listing;
use crate::errors::LoadError;

/// The listings held in memory for the life of the process.
#[derive(Debug, Clone, Default)]
pub enum Catalog {
    #[default]
    NotLoaded,
    Loaded(Vec<Listing>),
}

impl Catalog {
    /// A failed load is logged and leaves the catalog empty.
    pub fn from_load(result: Result<Vec<Listing>, LoadError>) -> Self {
        match result {
            Ok(listings) => {
                log::info!("Loaded {} listings", listings.len());
                Catalog::Loaded(listings)
            }
            Err(e) => {
                log::error!("Error loading listings: {e}");
                Catalog::NotLoaded
            }
        }
    }

    pub fn listings(&self) -> &[Listing] {
        match self {
            Catalog::Loaded(listings) => listings,
            Catalog::NotLoaded => &[],
        }
    }
}
