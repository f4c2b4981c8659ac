//! [`Args`] definitions.

use clap::{Parser, Subcommand};
use common::{Price, Selection};
use service::{
    command::CreateListing,
    domain::{
        filter::{Field, PriceRange, SearchText, Update},
        listing::{Category, Condition, Location},
        FilterState,
    },
    query::Explore,
};

/// Campus marketplace listings browser.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,

    /// Action to perform.
    #[command(subcommand)]
    pub action: Action,
}

impl Args {
    /// Parses command line arguments.
    ///
    /// # Errors
    ///
    /// Errors if failed to parse command line arguments.
    pub fn parse() -> Result<Self, clap::Error> {
        <Self as Parser>::try_parse()
    }
}

/// Action of the application.
#[derive(Debug, Subcommand)]
pub enum Action {
    /// Prints the listings matching the provided search and filters.
    Explore(ExploreArgs),

    /// Puts a new listing up for sale.
    Sell(SellArgs),
}

/// Arguments of the [`Action::Explore`].
#[derive(Debug, clap::Args)]
pub struct ExploreArgs {
    /// Text to look for in listing titles, case-insensitively.
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Category to show, or `All`.
    #[arg(long, default_value = "All")]
    pub category: Selection<Category>,

    /// Condition to show, or `All`.
    #[arg(long, default_value = "All")]
    pub condition: Selection<Condition>,

    /// Pickup location to show, or `All`.
    #[arg(long, default_value = "All")]
    pub location: Selection<Location>,

    /// Lowest price to show, inclusive. Snapped to $5 steps within $0-$100.
    #[arg(long)]
    pub min_price: Option<Price>,

    /// Highest price to show, inclusive. Snapped to $5 steps within $0-$100.
    #[arg(long)]
    pub max_price: Option<Price>,

    /// Filters to remove after applying the ones above.
    #[arg(long = "clear", value_name = "FIELD")]
    pub clear: Vec<Field>,
}

impl From<ExploreArgs> for Explore {
    fn from(args: ExploreArgs) -> Self {
        let ExploreArgs {
            search,
            category,
            condition,
            location,
            min_price,
            max_price,
            clear,
        } = args;

        let mut filter = FilterState::reset()
            .with(Update::Category(category))
            .with(Update::Condition(condition))
            .with(Update::Location(location));
        if let Some(min) = min_price {
            filter = filter.with(Update::MinPrice(PriceRange::snap(min)));
        }
        if let Some(max) = max_price {
            filter = filter.with(Update::MaxPrice(PriceRange::snap(max)));
        }
        let filter = clear.into_iter().fold(filter, FilterState::clear);

        Self {
            search: SearchText::new(search),
            filter,
        }
    }
}

/// Arguments of the [`Action::Sell`].
#[derive(Debug, clap::Args)]
pub struct SellArgs {
    /// Title of the listing.
    #[arg(long, default_value = "")]
    pub title: String,

    /// Description of the listing.
    #[arg(long, default_value = "")]
    pub description: String,

    /// Asking price.
    #[arg(long, default_value = "")]
    pub price: String,

    /// Category of the item.
    #[arg(long)]
    pub category: Option<Category>,

    /// Condition of the item.
    #[arg(long)]
    pub condition: Option<Condition>,

    /// Pickup location.
    #[arg(long)]
    pub location: Option<Location>,
}

impl From<SellArgs> for CreateListing {
    fn from(args: SellArgs) -> Self {
        let SellArgs {
            title,
            description,
            price,
            category,
            condition,
            location,
        } = args;

        Self {
            title,
            description,
            price,
            category,
            condition,
            location,
        }
    }
}

#[cfg(test)]
mod spec {
    use clap::Parser as _;
    use common::{Price, Selection};
    use service::{
        command::CreateListing,
        domain::{
            filter::Field,
            listing::{Category, Condition},
        },
        query::Explore,
    };

    use super::{Action, Args};

    fn explore(args: &[&str]) -> Explore {
        let args = Args::try_parse_from(
            ["application", "explore"].into_iter().chain(args.iter().copied()),
        )
        .unwrap();
        match args.action {
            Action::Explore(a) => a.into(),
            Action::Sell(_) => panic!("expected `explore`"),
        }
    }

    #[test]
    fn explores_everything_by_default() {
        let query = explore(&[]);

        assert!(query.search.is_empty());
        assert!(query.filter.is_default());
    }

    #[test]
    fn builds_filter_state() {
        let query = explore(&[
            "--search",
            "Lamp",
            "--category",
            "Furniture",
            "--condition",
            "Like New",
            "--min-price",
            "10",
            "--max-price",
            "$90",
        ]);

        assert_eq!(query.search.as_str(), "Lamp");
        assert_eq!(
            query.filter.category(),
            &Selection::Only(Category::Furniture),
        );
        assert_eq!(
            query.filter.condition(),
            &Selection::Only(Condition::LikeNew),
        );
        assert!(query.filter.location().is_any());
        assert_eq!(query.filter.price().min, Price::from(10));
        assert_eq!(query.filter.price().max, Price::from(90));
        assert_eq!(query.filter.active_count(), 3);
    }

    #[test]
    fn snaps_price_bounds() {
        let query = explore(&["--min-price", "12", "--max-price", "140"]);

        assert_eq!(query.filter.price().min, Price::from(10));
        assert_eq!(query.filter.price().max, Price::from(100));
        assert_eq!(query.filter.active_count(), 1);
    }

    #[test]
    fn accepts_all_sentinel() {
        let query = explore(&["--category", "All", "--location", "All"]);

        assert!(query.filter.is_default());
    }

    #[test]
    fn clears_fields_last() {
        let query = explore(&[
            "--category",
            "Books",
            "--max-price",
            "50",
            "--clear",
            "price",
            "--clear",
            "category",
        ]);

        assert!(query.filter.is_default());
        assert!(!query.filter.is_active(Field::Price));
    }

    #[test]
    fn rejects_unknown_category() {
        let res = Args::try_parse_from([
            "application",
            "explore",
            "--category",
            "Toys",
        ]);

        assert!(res.is_err());
    }

    #[test]
    fn passes_sell_input_as_typed() {
        let args = Args::try_parse_from([
            "application",
            "sell",
            "--title",
            " Desk Lamp ",
            "--price",
            "abc",
            "--category",
            "Furniture",
        ])
        .unwrap();
        let Action::Sell(sell) = args.action else {
            panic!("expected `sell`");
        };

        let cmd = CreateListing::from(sell);

        assert_eq!(cmd.title, " Desk Lamp ");
        assert_eq!(cmd.price, "abc");
        assert_eq!(cmd.category, Some(Category::Furniture));
        assert!(cmd.condition.is_none());
        assert!(cmd.location.is_none());
    }
}
