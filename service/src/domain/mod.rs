//! Domain definitions.

pub mod filter;
pub mod listing;

pub use self::{filter::FilterState, listing::Listing};
