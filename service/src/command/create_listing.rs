//! [`Command`] for creating a new [`Listing`].

use std::str::FromStr as _;

use common::{operations::Insert, Price};
use derive_more::{Display, Error, From};
use rust_decimal::Decimal;
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{
        listing::{self, Category, Condition, Location},
        Listing,
    },
    infra::{source, Source},
    Service,
};

use super::Command;

/// [`Command`] for creating a new [`Listing`] out of the sell form input.
///
/// Text fields are taken as typed and validated on execution.
#[derive(Clone, Debug, Default)]
pub struct CreateListing {
    /// Title of a new [`Listing`].
    pub title: String,

    /// Description of a new [`Listing`].
    pub description: String,

    /// Price of a new [`Listing`], as typed.
    pub price: String,

    /// [`Category`] of a new [`Listing`], if selected.
    pub category: Option<Category>,

    /// [`Condition`] of a new [`Listing`], if selected.
    pub condition: Option<Condition>,

    /// Pickup [`Location`] of a new [`Listing`], if selected.
    pub location: Option<Location>,
}

impl CreateListing {
    /// Minimal number of characters in a [`Listing`] title.
    pub const MIN_TITLE_LEN: usize = 3;

    /// Maximal number of characters in a [`Listing`] title.
    pub const MAX_TITLE_LEN: usize = 100;

    /// Minimal number of characters in a [`Listing`] description.
    pub const MIN_DESCRIPTION_LEN: usize = 10;

    /// Maximal number of characters in a [`Listing`] description.
    pub const MAX_DESCRIPTION_LEN: usize = 500;

    /// Validates this [`CreateListing`] input into a new [`Listing`].
    ///
    /// Stops on the first invalid field, in form order. Lengths are counted
    /// on the text as typed, while the [`Listing`] stores it trimmed.
    ///
    /// # Errors
    ///
    /// With [`ExecutionError`] describing the first invalid field.
    pub fn validate(self) -> Result<Listing, ExecutionError> {
        use ExecutionError as E;

        let Self {
            title,
            description,
            price,
            category,
            condition,
            location,
        } = self;

        if title.trim().is_empty() {
            return Err(E::NoTitle);
        }
        match title.chars().count() {
            n if n < Self::MIN_TITLE_LEN => return Err(E::TitleTooShort),
            n if n > Self::MAX_TITLE_LEN => return Err(E::TitleTooLong),
            _ => {}
        }

        if description.trim().is_empty() {
            return Err(E::NoDescription);
        }
        match description.chars().count() {
            n if n < Self::MIN_DESCRIPTION_LEN => {
                return Err(E::DescriptionTooShort);
            }
            n if n > Self::MAX_DESCRIPTION_LEN => {
                return Err(E::DescriptionTooLong);
            }
            _ => {}
        }

        let price = price.trim();
        if price.is_empty() {
            return Err(E::NoPrice);
        }
        let price = Decimal::from_str(price)
            .ok()
            .filter(|p| *p > Decimal::ZERO)
            .and_then(Price::new)
            .ok_or(E::InvalidPrice)?;

        let category = category.ok_or(E::NoCategory)?;
        let condition = condition.ok_or(E::NoCondition)?;
        let location = location.ok_or(E::NoLocation)?;

        Ok(Listing {
            id: listing::Id::new(),
            title: listing::Title::new(title.trim()).ok_or(E::NoTitle)?,
            description: description.trim().to_owned().into(),
            price,
            condition: condition.into(),
            category: category.into(),
            location,
        })
    }
}

impl<Src> Command<CreateListing> for Service<Src>
where
    Src: Source<Insert<Listing>, Ok = (), Err = Traced<source::Error>>,
{
    type Ok = Listing;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: CreateListing) -> Result<Self::Ok, Self::Err> {
        let listing = cmd.validate().map_err(tracerr::wrap!())?;

        self.source()
            .execute(Insert(listing.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> ExecutionError))?;
        log::info!("created `Listing({})`: {}", listing.id, listing.title);

        Ok(listing)
    }
}

/// Error of [`CreateListing`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Source`] error.
    #[display("`Source` operation failed: {_0}")]
    #[from]
    Source(source::Error),

    /// Title is blank.
    #[display("Please enter a title")]
    NoTitle,

    /// Title is shorter than [`CreateListing::MIN_TITLE_LEN`].
    #[display("Title must be at least 3 characters")]
    TitleTooShort,

    /// Title is longer than [`CreateListing::MAX_TITLE_LEN`].
    #[display("Title must be at most 100 characters")]
    TitleTooLong,

    /// Description is blank.
    #[display("Please enter a description")]
    NoDescription,

    /// Description is shorter than
    /// [`CreateListing::MIN_DESCRIPTION_LEN`].
    #[display("Description must be at least 10 characters")]
    DescriptionTooShort,

    /// Description is longer than [`CreateListing::MAX_DESCRIPTION_LEN`].
    #[display("Description must be at most 500 characters")]
    DescriptionTooLong,

    /// Price is blank.
    #[display("Please enter a price")]
    NoPrice,

    /// Price is not a positive number.
    #[display("Please enter a valid price")]
    InvalidPrice,

    /// No [`Category`] selected.
    #[display("Please select a category")]
    NoCategory,

    /// No [`Condition`] selected.
    #[display("Please select a condition")]
    NoCondition,

    /// No [`Location`] selected.
    #[display("Please select a location")]
    NoLocation,
}

impl ExecutionError {
    /// Indicates whether this [`ExecutionError`] is caused by invalid input
    /// rather than by the [`Source`].
    #[must_use]
    pub fn is_validation(&self) -> bool {
        !matches!(self, Self::Source(_))
    }
}
