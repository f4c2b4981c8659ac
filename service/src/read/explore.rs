//! Explore [`Feed`] definitions.

use crate::domain::{
    filter::ActiveFilter,
    listing::{Listing, Location},
};
#[cfg(doc)]
use crate::domain::{filter::SearchText, FilterState};

/// [`Listing`]s matching a [`SearchText`] and a [`FilterState`], along with
/// the metadata rendered around them.
#[derive(Clone, Debug, Default)]
pub struct Feed {
    /// Matching [`Listing`]s, in source order.
    pub listings: Vec<Listing>,

    /// [`ActiveFilter`]s of the applied [`FilterState`].
    pub active_filters: Vec<ActiveFilter>,

    /// Distinct pickup [`Location`]s of the whole [`Listing`] collection,
    /// offered as location filter options.
    pub locations: Vec<Location>,
}

impl Feed {
    /// Returns the number of matching [`Listing`]s.
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.listings.len()
    }

    /// Returns the number of [`ActiveFilter`]s.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active_filters.len()
    }

    /// Indicates whether no [`Listing`] matched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    /// Returns the headline summarizing this [`Feed`].
    #[must_use]
    pub fn headline(&self) -> String {
        format!("{} items available", self.total_count())
    }
}
