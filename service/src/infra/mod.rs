//! Infrastructure layer.

pub mod source;

#[cfg(feature = "json")]
pub use self::source::JsonFile;
pub use self::source::{InMemory, Source};
