//! [`Listing`] definitions.

use std::{str::FromStr, sync::Arc};

use common::{define_kind, Price, Tag};
use derive_more::{AsRef, Display, From, Into};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Item offered for sale on the marketplace.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Listing {
    /// ID of this [`Listing`].
    pub id: Id,

    /// [`Title`] of this [`Listing`].
    pub title: Title,

    /// [`Description`] of this [`Listing`].
    #[serde(default)]
    pub description: Description,

    /// [`Price`] of this [`Listing`].
    pub price: Price,

    /// [`Condition`] of this [`Listing`].
    pub condition: Tag<Condition>,

    /// [`Category`] of this [`Listing`].
    pub category: Tag<Category>,

    /// Pickup [`Location`] of this [`Listing`].
    pub location: Location,
}

impl Listing {
    /// Indicates whether this [`Listing`] carries a [`Category`] or a
    /// [`Condition`] that wasn't recognized.
    #[must_use]
    pub fn has_unknown_tags(&self) -> bool {
        self.category.is_unknown() || self.condition.is_unknown()
    }
}

/// Immutable snapshot of a [`Listing`] collection.
pub type Collection = Arc<[Listing]>;

/// ID of a [`Listing`].
///
/// Opaque for this crate: IDs issued by the external backend are kept as is.
#[derive(
    AsRef,
    Clone,
    Debug,
    Deserialize,
    Display,
    Eq,
    From,
    Hash,
    Into,
    PartialEq,
    Serialize,
)]
#[as_ref(str, String)]
#[serde(transparent)]
pub struct Id(String);

impl Id {
    /// Creates a new random [`Id`].
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns this [`Id`] as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Id {
    fn default() -> Self {
        Self::new()
    }
}

/// Title of a [`Listing`].
#[derive(
    AsRef, Clone, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize,
)]
#[as_ref(str, String)]
#[serde(try_from = "String", into = "String")]
pub struct Title(String);

impl Title {
    /// Creates a new [`Title`] if the given `title` is valid.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Option<Self> {
        let title = title.into();
        Self::check(&title).then_some(Self(title))
    }

    /// Returns this [`Title`] as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Checks whether the given `title` is a valid [`Title`].
    fn check(title: impl AsRef<str>) -> bool {
        !title.as_ref().trim().is_empty()
    }
}

impl FromStr for Title {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Title`")
    }
}

impl TryFrom<String> for Title {
    type Error = &'static str;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value).ok_or("`Title` must not be blank")
    }
}

impl From<Title> for String {
    fn from(value: Title) -> Self {
        value.0
    }
}

/// Description of a [`Listing`].
#[derive(
    AsRef,
    Clone,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    From,
    Hash,
    Into,
    PartialEq,
    Serialize,
)]
#[as_ref(str, String)]
#[serde(transparent)]
pub struct Description(String);

impl Description {
    /// Returns this [`Description`] as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Pickup location of a [`Listing`].
///
/// Free-form: the sell form suggests [`Location::SUGGESTED`] ones, but any
/// non-blank value is accepted.
#[derive(
    AsRef, Clone, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize,
)]
#[as_ref(str, String)]
#[serde(try_from = "String", into = "String")]
pub struct Location(String);

impl Location {
    /// Pickup locations offered by the sell form.
    pub const SUGGESTED: &'static [&'static str] = &[
        "Main Campus",
        "Alumni Hall",
        "Delaware Hall",
        "Essex Hall",
        "Medway-Sydenham Hall",
        "Perth Hall",
        "Saugeen-Maitland Hall",
        "Off-Campus",
    ];

    /// Creates a new [`Location`] if the given `location` is valid.
    #[must_use]
    pub fn new(location: impl Into<String>) -> Option<Self> {
        let location = location.into();
        Self::check(&location).then_some(Self(location))
    }

    /// Returns this [`Location`] as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Checks whether the given `location` is a valid [`Location`].
    fn check(location: impl AsRef<str>) -> bool {
        !location.as_ref().trim().is_empty()
    }
}

impl FromStr for Location {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Location`")
    }
}

impl TryFrom<String> for Location {
    type Error = &'static str;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value).ok_or("`Location` must not be blank")
    }
}

impl From<Location> for String {
    fn from(value: Location) -> Self {
        value.0
    }
}

define_kind! {
    #[doc = "Condition of a [`Listing`]."]
    enum Condition {
        #[doc = "Barely used."]
        LikeNew => "Like New",

        #[doc = "Used, with minor signs of wear."]
        Good => "Good",

        #[doc = "Noticeably worn, fully functional."]
        Fair => "Fair",

        #[doc = "Heavily worn or partially damaged."]
        Poor => "Poor",
    }
}

define_kind! {
    #[doc = "Category of a [`Listing`]."]
    enum Category {
        #[doc = "Textbooks, notes and other reading."]
        Books => "Books",

        #[doc = "Devices and accessories."]
        Electronics => "Electronics",

        #[doc = "Desks, chairs, lamps and the like."]
        Furniture => "Furniture",

        #[doc = "Wearables."]
        Clothing => "Clothing",

        #[doc = "Fridges, microwaves and other appliances."]
        Appliances => "Appliances",

        #[doc = "Sports equipment."]
        Sports => "Sports",

        #[doc = "Anything else."]
        Other => "Other",
    }
}

#[cfg(test)]
mod spec {
    use common::Tag;

    use super::{Category, Condition, Listing, Location, Title};

    #[test]
    fn kinds_round_trip_through_labels() {
        for c in Condition::ALL {
            assert_eq!(c.label().parse::<Condition>(), Ok(*c));
            assert_eq!(c.to_string(), c.label());
        }
        for c in Category::ALL {
            assert_eq!(c.label().parse::<Category>(), Ok(*c));
        }

        assert_eq!(Condition::LikeNew.to_string(), "Like New");
        assert!("like new".parse::<Condition>().is_err());
        assert!("LikeNew".parse::<Condition>().is_err());
    }

    #[test]
    fn rejects_blank_titles_and_locations() {
        assert!(Title::new("").is_none());
        assert!(Title::new("   ").is_none());
        assert!(Title::new("Desk Lamp").is_some());

        assert!(Location::new("").is_none());
        assert!(Location::new("North Campus").is_some());
    }

    #[test]
    fn deserializes_listing_with_unknown_tags() {
        let listing: Listing = serde_json::from_str(
            r#"{
                "id": "1",
                "title": "Calculus Textbook",
                "price": 45,
                "condition": "Mint",
                "category": "Books",
                "location": "North Campus"
            }"#,
        )
        .unwrap();

        assert_eq!(listing.id.as_str(), "1");
        assert_eq!(listing.category, Tag::Known(Category::Books));
        assert_eq!(listing.condition, Tag::Unknown("Mint".to_owned()));
        assert!(listing.description.as_str().is_empty());
        assert!(listing.has_unknown_tags());
    }

    #[test]
    fn rejects_listing_with_blank_title() {
        assert!(serde_json::from_str::<Listing>(
            r#"{
                "id": "1",
                "title": " ",
                "price": 45,
                "condition": "Good",
                "category": "Books",
                "location": "North Campus"
            }"#,
        )
        .is_err());
    }
}
