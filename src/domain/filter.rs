// src/domain/filter.rs

use crate::loader::Listing;

/// Keeps the listings whose title contains `needle`, ignoring case.
/// An empty needle keeps everything. Order is preserved.
pub fn filter_by_title<'a>(listings: &'a [Listing], needle: &str) -> Vec<&'a Listing> {
    if needle.is_empty() {
        return listings.iter().collect();
    }

    let needle = needle.to_lowercase();
    listings
        .iter()
        .filter(|listing| listing.title.to_lowercase().contains(&needle))
        .collect()
}
