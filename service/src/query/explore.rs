//! [`Query`] for exploring [`Listing`]s.

use common::operations::{All, Select};
use tracerr::Traced;
use tracing as log;

#[cfg(doc)]
use crate::domain::Listing;
use crate::{
    domain::{
        filter::{engine, SearchText},
        listing::Collection,
        FilterState,
    },
    infra::{source, Source},
    read::Feed,
    Service,
};

use super::Query;

/// [`Query`] for the [`Listing`]s matching a [`SearchText`] and a
/// [`FilterState`].
#[derive(Clone, Debug, Default)]
pub struct Explore {
    /// [`SearchText`] to match [`Listing`] titles against.
    pub search: SearchText,

    /// [`FilterState`] to apply.
    pub filter: FilterState,
}

impl<Src> Query<Explore> for Service<Src>
where
    Src: Source<
        Select<All<Collection>>,
        Ok = Collection,
        Err = Traced<source::Error>,
    >,
{
    type Ok = Feed;
    type Err = Traced<source::Error>;

    async fn execute(&self, query: Explore) -> Result<Self::Ok, Self::Err> {
        let Explore { search, filter } = query;

        let listings = self
            .source()
            .execute(Select(All::new()))
            .await
            .map_err(tracerr::wrap!())?;

        let found: Vec<_> = engine::filter(listings.iter(), &search, &filter)
            .into_iter()
            .cloned()
            .collect();
        log::debug!(
            "{} of {} listings match `{search}` with {} active filters",
            found.len(),
            listings.len(),
            filter.active_count(),
        );

        Ok(Feed {
            listings: found,
            active_filters: filter.active_filters(),
            locations: engine::locations(listings.iter())
                .into_iter()
                .cloned()
                .collect(),
        })
    }
}

#[cfg(test)]
mod spec {
    use common::{operations::Update, Price, Selection};

    use crate::{
        domain::{
            filter::{Field, SearchText, Update as Edit},
            listing::{Category, Collection, Condition, Id, Location, Title},
            FilterState, Listing,
        },
        infra::{InMemory, Source as _},
        Service,
    };

    use super::Explore;

    fn listing(
        id: &str,
        title: &str,
        price: u32,
        condition: Condition,
        category: Category,
        location: &str,
    ) -> Listing {
        Listing {
            id: Id::from(id.to_owned()),
            title: Title::new(title).unwrap(),
            description: "Pick up anytime.".to_owned().into(),
            price: Price::from(price),
            condition: condition.into(),
            category: category.into(),
            location: Location::new(location).unwrap(),
        }
    }

    fn service() -> Service<InMemory> {
        Service::new(InMemory::new(vec![
            listing(
                "1",
                "Calculus Textbook",
                45,
                Condition::LikeNew,
                Category::Books,
                "North Campus",
            ),
            listing(
                "2",
                "Desk Lamp",
                20,
                Condition::Good,
                Category::Furniture,
                "South Campus",
            ),
        ]))
    }

    fn titles(feed: &crate::read::Feed) -> Vec<&str> {
        feed.listings.iter().map(|l| l.title.as_str()).collect()
    }

    #[tokio::test]
    async fn lists_everything_by_default() {
        let feed = service().execute(Explore::default()).await.unwrap();

        assert_eq!(titles(&feed), ["Calculus Textbook", "Desk Lamp"]);
        assert_eq!(feed.headline(), "2 items available");
        assert_eq!(feed.active_count(), 0);
    }

    #[tokio::test]
    async fn applies_filters_and_summarizes_them() {
        let feed = service()
            .execute(Explore {
                search: SearchText::default(),
                filter: FilterState::reset()
                    .with(Edit::Category(Selection::Only(Category::Books)))
                    .with(Edit::MinPrice(10.into()))
                    .with(Edit::MaxPrice(90.into())),
            })
            .await
            .unwrap();

        assert_eq!(titles(&feed), ["Calculus Textbook"]);
        assert_eq!(feed.headline(), "1 items available");
        assert_eq!(feed.active_count(), 2);
        assert_eq!(feed.active_filters[0].field, Field::Category);
        assert_eq!(feed.active_filters[1].label, "$10-$90");
    }

    #[tokio::test]
    async fn searches_titles() {
        let feed = service()
            .execute(Explore {
                search: SearchText::new("LAMP"),
                filter: FilterState::reset(),
            })
            .await
            .unwrap();

        assert_eq!(titles(&feed), ["Desk Lamp"]);
        assert_eq!(feed.active_count(), 0);
    }

    #[tokio::test]
    async fn empty_result_is_not_an_error() {
        let feed = service()
            .execute(Explore {
                search: SearchText::default(),
                filter: FilterState::reset().with(Edit::MinPrice(50.into())),
            })
            .await
            .unwrap();

        assert!(feed.is_empty());
        assert_eq!(feed.headline(), "0 items available");
        assert_eq!(
            feed.locations
                .iter()
                .map(Location::as_str)
                .collect::<Vec<_>>(),
            ["North Campus", "South Campus"],
        );
    }

    #[tokio::test]
    async fn uses_latest_collection() {
        let service = service();
        service
            .source()
            .execute(Update(Collection::from(vec![listing(
                "3",
                "Winter Jacket",
                60,
                Condition::LikeNew,
                Category::Clothing,
                "Perth Hall",
            )])))
            .await
            .unwrap();

        let feed = service.execute(Explore::default()).await.unwrap();

        assert_eq!(titles(&feed), ["Winter Jacket"]);
    }
}
