// src/domain/view.rs

use crate::domain::{filter_by_title, PageSize, PageState, TableQuery};
use crate::loader::{Listing, ListingSource};
use log::{debug, error, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    Loading,
    LoadedEmpty,
    LoadedNonEmpty,
}

/// State behind one programs table: the fetched listings, the title filter
/// and the page window.
///
/// A view loads once. A failed load is logged and leaves the data set empty,
/// which renders exactly like a feed with no matching listings.
#[derive(Debug)]
pub struct ProgramsView {
    listings: Vec<Listing>,
    loading: bool,
    activated: bool,
    filter: String,
    pages: PageState,
}

impl Default for ProgramsView {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgramsView {
    pub fn new() -> Self {
        Self {
            listings: Vec::new(),
            loading: true,
            activated: false,
            filter: String::new(),
            pages: PageState::default(),
        }
    }

    /// Performs the load on first activation. Later calls do nothing.
    pub fn activate(&mut self, source: &dyn ListingSource) {
        if self.activated {
            debug!("Programs view already activated, skipping fetch");
            return;
        }
        self.activated = true;

        match source.fetch_listings() {
            Ok(listings) => {
                info!("Loaded {} listings", listings.len());
                self.listings = listings;
            }
            Err(e) if e.is_transport() => {
                error!("Error fetching listings: {e}");
            }
            Err(e) => {
                error!("Error reading listings feed: {e}");
            }
        }

        self.loading = false;
    }

    /// Applies request parameters in the order a user would: filter, size, then page.
    pub fn apply(&mut self, query: &TableQuery) {
        self.set_filter(query.filter.as_str());
        self.set_page_size(query.rows);
        if let Some(page) = query.page {
            self.set_page(page);
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn pages(&self) -> PageState {
        self.pages
    }

    pub fn set_filter(&mut self, filter: impl Into<String>) {
        self.filter = filter.into();
        self.reset_page();
    }

    pub fn set_page(&mut self, page: usize) {
        self.pages.set_page(page);
    }

    pub fn set_page_size(&mut self, page_size: PageSize) {
        self.pages.set_page_size(page_size);
    }

    pub fn reset_page(&mut self) {
        self.pages.reset_page();
    }

    pub fn filtered(&self) -> Vec<&Listing> {
        filter_by_title(self.listings(), &self.filter)
    }

    /// The filtered listings inside the current page window.
    pub fn visible(&self) -> Vec<&Listing> {
        let filtered = self.filtered();
        self.pages.window(&filtered).to_vec()
    }

    pub fn state(&self) -> ViewState {
        if self.is_loading() {
            ViewState::Loading
        } else if self.visible().is_empty() {
            ViewState::LoadedEmpty
        } else {
            ViewState::LoadedNonEmpty
        }
    }
}
