//! [`Query`] definition.

pub mod explore;

/// [`Query`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Query;

pub use self::explore::Explore;
