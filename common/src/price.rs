//! [`Price`]-related definitions.

use std::{fmt, str::FromStr};

use rust_decimal::Decimal;

/// Non-negative amount of money in the marketplace currency.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Price(Decimal);

impl Price {
    /// Zero [`Price`].
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// [`Price`] of one hundred.
    pub const ONE_HUNDRED: Self = Self(Decimal::ONE_HUNDRED);

    /// Creates a new [`Price`] if the provided `amount` is not negative.
    #[must_use]
    pub fn new(amount: Decimal) -> Option<Self> {
        (!amount.is_sign_negative() || amount.is_zero())
            .then_some(Self(amount.normalize()))
    }

    /// Returns the amount of this [`Price`].
    #[must_use]
    pub const fn amount(self) -> Decimal {
        self.0
    }
}

impl From<u32> for Price {
    fn from(amount: u32) -> Self {
        Self(Decimal::from(amount))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.0.normalize())
    }
}

impl FromStr for Price {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let amount = s.strip_prefix('$').unwrap_or(s);
        if amount.is_empty() {
            return Err("empty price");
        }

        Decimal::from_str(amount)
            .map_err(|_| "invalid amount")
            .and_then(|d| Self::new(d).ok_or("negative amount"))
    }
}

#[cfg(feature = "serde")]
mod serde {
    //! Module providing integration with [`serde`] crate.

    use rust_decimal::{prelude::ToPrimitive as _, Decimal};
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

    use super::Price;

    impl Serialize for Price {
        fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
            if let Some(whole) =
                self.0.is_integer().then(|| self.0.to_u64()).flatten()
            {
                return s.serialize_u64(whole);
            }
            match self.0.to_f64() {
                Some(f) => s.serialize_f64(f),
                None => s.serialize_str(&self.0.to_string()),
            }
        }
    }

    impl<'de> Deserialize<'de> for Price {
        fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
            let amount = <Decimal as Deserialize>::deserialize(d)?;
            Self::new(amount).ok_or_else(|| {
                de::Error::custom(format!("negative `Price`: {amount}"))
            })
        }
    }
}
