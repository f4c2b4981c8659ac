//! Filtering of [`Listing`]s by a [`SearchText`] and a [`FilterState`].
//!
//! Functions of this module are pure: they never mutate the provided
//! [`Listing`]s and always preserve their relative order.

use std::{borrow::Borrow, collections::HashSet};

use crate::domain::{listing::Location, Listing};

use super::{FilterState, SearchText};

/// Indicates whether the provided [`Listing`] passes both the [`SearchText`]
/// and every field of the [`FilterState`].
#[must_use]
pub fn matches(
    listing: &Listing,
    search: &SearchText,
    state: &FilterState,
) -> bool {
    let matches_search = search.matches(listing.title.as_str());
    let matches_category = state.category.admits(&listing.category);
    let matches_condition = state.condition.admits(&listing.condition);
    let matches_location = state.location.admits(&listing.location);
    let matches_price = state.price.contains(listing.price);

    matches_search
        && matches_category
        && matches_condition
        && matches_location
        && matches_price
}

/// Lazily filters the provided `listings`, preserving their order.
pub fn iter<'a, I>(
    listings: I,
    search: &'a SearchText,
    state: &'a FilterState,
) -> impl Iterator<Item = I::Item> + 'a
where
    I: IntoIterator,
    I::IntoIter: 'a,
    I::Item: Borrow<Listing>,
{
    listings
        .into_iter()
        .filter(move |l| matches(l.borrow(), search, state))
}

/// Filters the provided `listings` into a new sequence, preserving their
/// order.
///
/// Works equally over owned and borrowed [`Listing`]s, so its own output may
/// be filtered again.
#[must_use]
pub fn filter<I>(
    listings: I,
    search: &SearchText,
    state: &FilterState,
) -> Vec<I::Item>
where
    I: IntoIterator,
    I::Item: Borrow<Listing>,
{
    listings
        .into_iter()
        .filter(|l| matches(l.borrow(), search, state))
        .collect()
}

/// Counts the provided `listings` passing the filters.
#[must_use]
pub fn count<I>(listings: I, search: &SearchText, state: &FilterState) -> usize
where
    I: IntoIterator,
    I::Item: Borrow<Listing>,
{
    listings
        .into_iter()
        .filter(|l| matches(l.borrow(), search, state))
        .count()
}

/// Collects distinct pickup [`Location`]s of the provided `listings` in
/// first-seen order.
#[must_use]
pub fn locations<'l, I>(listings: I) -> Vec<&'l Location>
where
    I: IntoIterator<Item = &'l Listing>,
{
    let mut seen = HashSet::new();
    listings
        .into_iter()
        .map(|l| &l.location)
        .filter(|loc| seen.insert(*loc))
        .collect()
}
