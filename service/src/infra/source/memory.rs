//! [`InMemory`] [`Source`] implementation.

use std::sync::Arc;

use common::operations::{All, Insert, Select, Update};
use tokio::sync::RwLock;
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{listing::Collection, Listing},
    infra::source,
};

use super::Source;

/// [`Source`] keeping a [`Collection`] snapshot in memory.
///
/// Writers never touch a snapshot already handed out: they swap in a new
/// one, so readers keep working with whatever they selected last.
#[derive(Clone, Debug)]
pub struct InMemory {
    /// Current [`Collection`] snapshot.
    listings: Arc<RwLock<Collection>>,
}

impl InMemory {
    /// Creates a new [`InMemory`] [`Source`] holding the provided
    /// [`Listing`]s.
    #[must_use]
    pub fn new(listings: impl Into<Collection>) -> Self {
        Self {
            listings: Arc::new(RwLock::new(listings.into())),
        }
    }
}

impl Default for InMemory {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Source<Select<All<Collection>>> for InMemory {
    type Ok = Collection;
    type Err = Traced<source::Error>;

    async fn execute(
        &self,
        _: Select<All<Collection>>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(Arc::clone(&*self.listings.read().await))
    }
}

impl Source<Insert<Listing>> for InMemory {
    type Ok = ();
    type Err = Traced<source::Error>;

    async fn execute(
        &self,
        Insert(listing): Insert<Listing>,
    ) -> Result<Self::Ok, Self::Err> {
        let mut current = self.listings.write().await;
        log::debug!("inserting `Listing({})` in memory", listing.id);
        *current = current.iter().cloned().chain([listing]).collect();
        Ok(())
    }
}

impl Source<Update<Collection>> for InMemory {
    type Ok = ();
    type Err = Traced<source::Error>;

    async fn execute(
        &self,
        Update(listings): Update<Collection>,
    ) -> Result<Self::Ok, Self::Err> {
        log::debug!("replacing in-memory listings with {}", listings.len());
        *self.listings.write().await = listings;
        Ok(())
    }
}
