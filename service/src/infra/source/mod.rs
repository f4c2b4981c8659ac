//! [`Source`]-related implementations.

mod memory;
#[cfg(feature = "json")]
pub mod json_file;

use derive_more::{Display, Error as StdError, From};

pub use self::memory::InMemory;
#[cfg(feature = "json")]
pub use self::json_file::JsonFile;

/// Operation over the external [`Listing`] source.
///
/// [`Listing`]: crate::domain::Listing
pub use common::Handler as Source;

/// [`Source`] error.
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    #[cfg(feature = "json")]
    /// [`JsonFile`] error.
    #[display("`JsonFile` operation failed: {_0}")]
    Json(json_file::Error),
}
