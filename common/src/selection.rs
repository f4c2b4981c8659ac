//! [`Selection`] definitions.

use std::{fmt, str::FromStr};

/// Selection of a filter field: either no constraint at all, or exactly one
/// value.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Selection<T> {
    /// No constraint on the field.
    ///
    /// Displayed and parsed as [`Selection::ANY_LABEL`].
    Any,

    /// Only the given value is admitted.
    Only(T),
}

impl<T> Selection<T> {
    /// Label of the [`Selection::Any`] variant.
    pub const ANY_LABEL: &'static str = "All";

    /// Indicates whether this [`Selection`] imposes no constraint.
    #[must_use]
    pub const fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }

    /// Indicates whether the provided `value` passes this [`Selection`].
    #[must_use]
    pub fn admits<V>(&self, value: &V) -> bool
    where
        V: PartialEq<T> + ?Sized,
    {
        match self {
            Self::Any => true,
            Self::Only(selected) => value == selected,
        }
    }
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Self::Any
    }
}

impl<T> From<Option<T>> for Selection<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Any, Self::Only)
    }
}

impl<T: fmt::Display> fmt::Display for Selection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str(Self::ANY_LABEL),
            Self::Only(v) => write!(f, "{v}"),
        }
    }
}

impl<T: FromStr> FromStr for Selection<T> {
    type Err = T::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == Self::ANY_LABEL {
            return Ok(Self::Any);
        }
        s.parse().map(Self::Only)
    }
}

#[cfg(test)]
mod spec {
    use super::Selection;

    #[test]
    fn any_admits_everything() {
        let any = Selection::<u8>::Any;

        assert!(any.admits(&0));
        assert!(any.admits(&255));
        assert!(any.is_any());
    }

    #[test]
    fn only_admits_equal_values() {
        let only = Selection::Only("Books".to_owned());

        assert!(only.admits(&"Books".to_owned()));
        assert!(!only.admits(&"books".to_owned()));
        assert!(!only.admits(&"Furniture".to_owned()));
        assert!(!only.is_any());
    }

    #[test]
    fn defaults_to_any() {
        assert_eq!(Selection::<u8>::default(), Selection::Any);
        assert_eq!(Selection::from(None::<u8>), Selection::Any);
        assert_eq!(Selection::from(Some(3)), Selection::Only(3));
    }

    #[test]
    fn parses_all_as_any() {
        assert_eq!("All".parse::<Selection<u8>>(), Ok(Selection::Any));
        assert_eq!("7".parse::<Selection<u8>>(), Ok(Selection::Only(7)));
        assert!("all".parse::<Selection<u8>>().is_err());
    }

    #[test]
    fn displays_any_as_all() {
        assert_eq!(Selection::<u8>::Any.to_string(), "All");
        assert_eq!(Selection::Only(5).to_string(), "5");
    }
}
