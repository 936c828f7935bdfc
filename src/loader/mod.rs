mod loader_error;
mod models;
mod source;

pub use loader_error::LoaderError;
pub use models::{Listing, Person};
pub use source::{HttpListingSource, ListingSource};

#[cfg(test)]
pub use models::ListingId;
