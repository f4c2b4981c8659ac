//! [`ActiveFilter`] summary of a [`FilterState`].

use derive_more::Display;

use super::{Field, FilterState};

/// Removable summary of one active [`FilterState`] field.
#[derive(Clone, Debug, Display, Eq, PartialEq)]
#[display("{label}")]
pub struct ActiveFilter {
    /// [`Field`] to clear for removing this [`ActiveFilter`].
    pub field: Field,

    /// Human-readable label of the selected value.
    pub label: String,
}

impl FilterState {
    /// Summarizes the active filters of this [`FilterState`] in display
    /// order.
    ///
    /// Always has [`FilterState::active_count()`] elements.
    #[must_use]
    pub fn active_filters(&self) -> Vec<ActiveFilter> {
        self.active_fields()
            .into_iter()
            .map(|field| ActiveFilter {
                field,
                label: self.label(field),
            })
            .collect()
    }

    /// Renders the selected value of the provided [`Field`].
    fn label(&self, field: Field) -> String {
        match field {
            Field::Category => self.category.to_string(),
            Field::Condition => self.condition.to_string(),
            Field::Location => self.location.to_string(),
            Field::Price => format!("{}-{}", self.price.min, self.price.max),
        }
    }
}

#[cfg(test)]
mod spec {
    use common::Selection;

    use crate::domain::listing::{Category, Condition, Location};

    use super::{super::Update, ActiveFilter, Field, FilterState};

    #[test]
    fn default_state_has_no_chips() {
        assert!(FilterState::reset().active_filters().is_empty());
    }

    #[test]
    fn labels_chips_in_display_order() {
        let state = FilterState::reset()
            .with(Update::MinPrice(10.into()))
            .with(Update::MaxPrice(90.into()))
            .with(Update::Location(Selection::Only(
                Location::new("Perth Hall").unwrap(),
            )))
            .with(Update::Condition(Selection::Only(Condition::LikeNew)))
            .with(Update::Category(Selection::Only(Category::Books)));

        assert_eq!(
            state.active_filters(),
            [
                ActiveFilter {
                    field: Field::Category,
                    label: "Books".to_owned(),
                },
                ActiveFilter {
                    field: Field::Condition,
                    label: "Like New".to_owned(),
                },
                ActiveFilter {
                    field: Field::Location,
                    label: "Perth Hall".to_owned(),
                },
                ActiveFilter {
                    field: Field::Price,
                    label: "$10-$90".to_owned(),
                },
            ],
        );
    }

    #[test]
    fn price_chip_shows_both_bounds() {
        let state = FilterState::reset().with(Update::MaxPrice(50.into()));

        let chips = state.active_filters();

        assert_eq!(chips.len(), state.active_count());
        assert_eq!(chips[0].to_string(), "$0-$50");
    }

    #[test]
    fn clearing_a_chip_removes_it() {
        let state = FilterState::reset()
            .with(Update::Category(Selection::Only(Category::Sports)))
            .with(Update::MinPrice(25.into()));

        let chip = state.active_filters().remove(0);
        let state = state.clear(chip.field);

        assert_eq!(state.active_filters().len(), 1);
        assert_eq!(state.active_filters()[0].field, Field::Price);
    }
}
