//! [`Tag`] definitions.

use std::{fmt, str::FromStr};

/// Value of a closed kind `K` as received from an external source.
///
/// Values not recognized as any `K` are kept verbatim instead of being
/// rejected, so newer records stay readable.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Tag<K> {
    /// Recognized kind.
    Known(K),

    /// Unrecognized raw value.
    Unknown(String),
}

impl<K> Tag<K> {
    /// Returns the recognized kind, if any.
    #[must_use]
    pub const fn known(&self) -> Option<&K> {
        match self {
            Self::Known(k) => Some(k),
            Self::Unknown(_) => None,
        }
    }

    /// Indicates whether this [`Tag`] wasn't recognized.
    #[must_use]
    pub const fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown(_))
    }
}

impl<K: FromStr> Tag<K> {
    /// Parses the provided raw value, falling back to [`Tag::Unknown`].
    #[must_use]
    pub fn parse(raw: impl AsRef<str> + Into<String>) -> Self {
        raw.as_ref()
            .parse()
            .map_or_else(|_| Self::Unknown(raw.into()), Self::Known)
    }
}

impl<K> From<K> for Tag<K> {
    fn from(kind: K) -> Self {
        Self::Known(kind)
    }
}

impl<K: PartialEq> PartialEq<K> for Tag<K> {
    fn eq(&self, other: &K) -> bool {
        self.known() == Some(other)
    }
}

impl<K: fmt::Display> fmt::Display for Tag<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(k) => write!(f, "{k}"),
            Self::Unknown(raw) => f.write_str(raw),
        }
    }
}

#[cfg(feature = "serde")]
mod serde {
    //! Module providing integration with [`serde`] crate.

    use std::{fmt, str::FromStr};

    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::Tag;

    impl<K: fmt::Display> Serialize for Tag<K> {
        fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
            s.collect_str(self)
        }
    }

    impl<'de, K: FromStr> Deserialize<'de> for Tag<K> {
        fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
            String::deserialize(d).map(Self::parse)
        }
    }
}

#[cfg(test)]
mod spec {
    use super::Tag;

    #[test]
    fn parses_known_values() {
        assert_eq!(Tag::<u8>::parse("42"), Tag::Known(42));
    }

    #[test]
    fn keeps_unknown_values_verbatim() {
        let tag = Tag::<u8>::parse("Mint");

        assert_eq!(tag, Tag::Unknown("Mint".to_owned()));
        assert!(tag.is_unknown());
        assert_eq!(tag.to_string(), "Mint");
    }

    #[test]
    fn unknown_never_equals_a_kind() {
        assert!(Tag::Known(1_u8) == 1_u8);
        assert!(Tag::Known(1_u8) != 2_u8);
        assert!(Tag::<u8>::Unknown("1".to_owned()) != 1_u8);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde() {
        let tag: Tag<u8> = serde_json::from_str("\"7\"").unwrap();
        assert_eq!(tag, Tag::Known(7));

        let tag: Tag<u8> = serde_json::from_str("\"Mint\"").unwrap();
        assert_eq!(tag, Tag::Unknown("Mint".to_owned()));
        assert_eq!(serde_json::to_string(&tag).unwrap(), "\"Mint\"");
    }
}
