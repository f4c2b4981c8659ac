//! [`FilterState`] definitions.

pub mod engine;
mod search;
mod summary;

use common::{Price, Selection};
use rust_decimal::{Decimal, RoundingStrategy};
use smart_default::SmartDefault;

use crate::domain::listing::{Category, Condition, Location};
#[cfg(doc)]
use crate::domain::Listing;

pub use self::{search::SearchText, summary::ActiveFilter};

/// Complete filter selection applied to [`Listing`]s.
///
/// Immutable: every edit produces a new [`FilterState`].
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct FilterState {
    /// [`Selection`] of a [`Category`].
    category: Selection<Category>,

    /// [`Selection`] of a [`Condition`].
    condition: Selection<Condition>,

    /// [`Selection`] of a pickup [`Location`].
    location: Selection<Location>,

    /// Admitted [`PriceRange`].
    price: PriceRange,
}

impl FilterState {
    /// Returns the canonical default [`FilterState`], constraining nothing.
    #[must_use]
    pub fn reset() -> Self {
        Self::default()
    }

    /// Returns the [`Category`] [`Selection`] of this [`FilterState`].
    #[must_use]
    pub fn category(&self) -> &Selection<Category> {
        &self.category
    }

    /// Returns the [`Condition`] [`Selection`] of this [`FilterState`].
    #[must_use]
    pub fn condition(&self) -> &Selection<Condition> {
        &self.condition
    }

    /// Returns the [`Location`] [`Selection`] of this [`FilterState`].
    #[must_use]
    pub fn location(&self) -> &Selection<Location> {
        &self.location
    }

    /// Returns the [`PriceRange`] of this [`FilterState`].
    #[must_use]
    pub fn price(&self) -> PriceRange {
        self.price
    }

    /// Returns a new [`FilterState`] with exactly one field replaced by the
    /// provided [`Update`].
    ///
    /// Price bounds are not validated against each other.
    #[must_use]
    pub fn with(self, update: Update) -> Self {
        match update {
            Update::Category(category) => Self { category, ..self },
            Update::Condition(condition) => Self { condition, ..self },
            Update::Location(location) => Self { location, ..self },
            Update::MinPrice(min) => Self {
                price: PriceRange { min, ..self.price },
                ..self
            },
            Update::MaxPrice(max) => Self {
                price: PriceRange { max, ..self.price },
                ..self
            },
        }
    }

    /// Returns a new [`FilterState`] with the provided [`Field`] reset to its
    /// unconstrained value.
    #[must_use]
    pub fn clear(self, field: Field) -> Self {
        match field {
            Field::Category => Self {
                category: Selection::Any,
                ..self
            },
            Field::Condition => Self {
                condition: Selection::Any,
                ..self
            },
            Field::Location => Self {
                location: Selection::Any,
                ..self
            },
            Field::Price => Self {
                price: PriceRange::default(),
                ..self
            },
        }
    }

    /// Returns the [`Field`]s of this [`FilterState`] deviating from their
    /// unconstrained value, in display order.
    #[must_use]
    pub fn active_fields(&self) -> Vec<Field> {
        Field::ALL
            .iter()
            .copied()
            .filter(|f| self.is_active(*f))
            .collect()
    }

    /// Counts active filters.
    ///
    /// The price range counts once, however far both bounds are moved. The
    /// search text is never counted.
    #[must_use]
    pub fn active_count(&self) -> usize {
        Field::ALL.iter().filter(|f| self.is_active(**f)).count()
    }

    /// Indicates whether this [`FilterState`] constrains nothing.
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.active_count() == 0
    }

    /// Indicates whether the provided [`Field`] is constrained.
    #[must_use]
    pub fn is_active(&self, field: Field) -> bool {
        match field {
            Field::Category => !self.category.is_any(),
            Field::Condition => !self.condition.is_any(),
            Field::Location => !self.location.is_any(),
            Field::Price => !self.price.is_default(),
        }
    }
}

/// Replacement of a single [`FilterState`] field.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Update {
    /// Replaces the [`Category`] [`Selection`].
    Category(Selection<Category>),

    /// Replaces the [`Condition`] [`Selection`].
    Condition(Selection<Condition>),

    /// Replaces the [`Location`] [`Selection`].
    Location(Selection<Location>),

    /// Replaces the lower [`PriceRange`] bound.
    MinPrice(Price),

    /// Replaces the upper [`PriceRange`] bound.
    MaxPrice(Price),
}

/// Clearable [`FilterState`] field.
///
/// Both price bounds form the single [`Field::Price`].
#[derive(
    Clone, Copy, Debug, Eq, Hash, PartialEq, strum::Display, strum::EnumString,
)]
#[strum(serialize_all = "kebab-case")]
pub enum Field {
    /// [`Category`] selection.
    Category,

    /// [`Condition`] selection.
    Condition,

    /// [`Location`] selection.
    Location,

    /// Both [`PriceRange`] bounds.
    Price,
}

impl Field {
    /// All the [`Field`]s, in display order.
    pub const ALL: [Self; 4] =
        [Self::Category, Self::Condition, Self::Location, Self::Price];
}

/// Inclusive range of admitted [`Price`]s.
///
/// Bounded by [`PriceRange::FLOOR`] and [`PriceRange::CEILING`], moved in
/// [`PriceRange::STEP`]s by the slider feeding it.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, SmartDefault)]
pub struct PriceRange {
    /// Lower bound.
    #[default(PriceRange::FLOOR)]
    pub min: Price,

    /// Upper bound.
    #[default(PriceRange::CEILING)]
    pub max: Price,
}

impl PriceRange {
    /// Lowest possible lower bound.
    pub const FLOOR: Price = Price::ZERO;

    /// Highest possible upper bound.
    pub const CEILING: Price = Price::ONE_HUNDRED;

    /// Slider step of the bounds.
    pub const STEP: u32 = 5;

    /// Indicates whether the provided [`Price`] lies within this
    /// [`PriceRange`], bounds included.
    #[must_use]
    pub fn contains(self, price: Price) -> bool {
        self.min <= price && price <= self.max
    }

    /// Snaps the provided [`Price`] to the closest slider position between
    /// [`PriceRange::FLOOR`] and [`PriceRange::CEILING`].
    ///
    /// Halfway values go up.
    #[must_use]
    pub fn snap(price: Price) -> Price {
        let step = Decimal::from(Self::STEP);
        let steps = (price.amount() / step)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        Price::new(steps * step)
            .unwrap_or(Self::FLOOR)
            .clamp(Self::FLOOR, Self::CEILING)
    }

    /// Indicates whether this [`PriceRange`] spans the full
    /// [`PriceRange::FLOOR`]..=[`PriceRange::CEILING`] range.
    #[must_use]
    pub fn is_default(self) -> bool {
        self.min <= Self::FLOOR && self.max >= Self::CEILING
    }
}
