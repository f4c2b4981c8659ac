//! Plain text rendering of [`Feed`]s and [`Listing`]s.

use std::fmt::Write as _;

use itertools::Itertools as _;
use service::{
    command::create_listing::ExecutionError,
    domain::{
        listing::{Category, Condition, Location},
        Listing,
    },
    read::Feed,
};

/// Message rendered instead of an empty [`Feed`].
pub const NOTHING_FOUND: &str = "No items found. Try adjusting your filters.";

/// Renders the provided [`Feed`]: its headline, active filter chips,
/// matching [`Listing`]s one per line, and the pickup [`Location`]s to filter
/// by.
#[must_use]
pub fn feed(feed: &Feed) -> String {
    let mut out = feed.headline();

    if feed.active_count() > 0 {
        _ = write!(
            out,
            "\nFilters: {}",
            feed.active_filters
                .iter()
                .format_with(" ", |f, show| show(&format_args!(
                    "[{f} x --clear {}]",
                    f.field,
                ))),
        );
    }

    if feed.is_empty() {
        _ = write!(out, "\n\n{NOTHING_FOUND}");
    } else {
        _ = write!(out, "\n\n{}", feed.listings.iter().map(listing).join("\n"));
    }

    if !feed.locations.is_empty() {
        _ = write!(
            out,
            "\n\nPickup locations: {}",
            feed.locations.iter().format(", "),
        );
    }

    out
}

/// Renders the provided [`Listing`] as a single line.
#[must_use]
pub fn listing(listing: &Listing) -> String {
    format!(
        "{:<30} {:>8}  {} | {} | {}",
        listing.title.as_str(),
        listing.price.to_string(),
        listing.condition,
        listing.category,
        listing.location,
    )
}

/// Renders the confirmation of the provided [`Listing`] being put up for
/// sale.
#[must_use]
pub fn listed(listing: &Listing) -> String {
    format!(
        "Listed `{}` for {} (id: {})",
        listing.title, listing.price, listing.id,
    )
}

/// Renders the options to pick from, if the provided [`ExecutionError`] is
/// caused by a missing selection.
#[must_use]
pub fn hint(err: &ExecutionError) -> Option<String> {
    use ExecutionError as E;

    let options = match err {
        E::NoCategory => {
            Category::ALL.iter().copied().map(Category::label).join(", ")
        }
        E::NoCondition => {
            Condition::ALL.iter().copied().map(Condition::label).join(", ")
        }
        E::NoLocation => Location::SUGGESTED.join(", "),
        E::Source(_)
        | E::NoTitle
        | E::TitleTooShort
        | E::TitleTooLong
        | E::NoDescription
        | E::DescriptionTooShort
        | E::DescriptionTooLong
        | E::NoPrice
        | E::InvalidPrice => return None,
    };
    Some(format!("Pick one of: {options}"))
}
