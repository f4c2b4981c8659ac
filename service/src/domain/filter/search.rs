//! [`SearchText`] definition.

use derive_more::Display;

#[cfg(doc)]
use crate::domain::{listing::Title, Listing};

/// Free-text query matched against [`Listing`] [`Title`]s.
#[derive(Clone, Debug, Default, Display, Eq, Hash, PartialEq)]
#[display("{raw}")]
pub struct SearchText {
    /// Text as typed.
    raw: String,

    /// Lowercased [`SearchText::raw`].
    folded: String,
}

impl SearchText {
    /// Creates a new [`SearchText`] out of the provided `text`.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        let raw = text.into();
        let folded = raw.to_lowercase();
        Self { raw, folded }
    }

    /// Indicates whether this [`SearchText`] is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Returns this [`SearchText`] as typed.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Indicates whether the provided `title` contains this [`SearchText`],
    /// ignoring case.
    ///
    /// An empty [`SearchText`] matches any `title`.
    #[must_use]
    pub fn matches(&self, title: &str) -> bool {
        self.is_empty() || title.to_lowercase().contains(&self.folded)
    }
}

impl From<&str> for SearchText {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for SearchText {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}
