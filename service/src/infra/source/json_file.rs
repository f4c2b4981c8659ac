//! [`JsonFile`] [`Source`] implementation.

use std::{
    io,
    path::{Path, PathBuf},
    sync::Arc,
};

use common::operations::{All, Insert, Select};
use derive_more::{Display, Error as StdError};
use tokio::{fs, sync::Mutex};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{listing::Collection, Listing},
    infra::source,
};

use super::Source;

/// [`Source`] backed by a JSON file holding an array of [`Listing`]s.
///
/// A missing file is treated as an empty one.
#[derive(Clone, Debug)]
pub struct JsonFile {
    /// Path to the file.
    path: PathBuf,

    /// Serializes writes to the file from this process.
    write_lock: Arc<Mutex<()>>,
}

impl JsonFile {
    /// Creates a new [`JsonFile`] [`Source`] reading the file at the
    /// provided `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Returns the path of the file backing this [`JsonFile`].
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads all the [`Listing`]s from the file.
    async fn read(&self) -> Result<Vec<Listing>, Traced<source::Error>> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::warn!(
                    "`{}` doesn't exist, assuming no listings",
                    self.path.display(),
                );
                return Ok(Vec::new());
            }
            Err(e) => {
                let e = source::Error::from(Error::Read(e));
                return Err(tracerr::new!(e));
            }
        };

        let listings: Vec<Listing> = serde_json::from_slice(&bytes)
            .map_err(Error::Format)
            .map_err(tracerr::from_and_wrap!(=> source::Error))?;

        for l in listings.iter().filter(|l| l.has_unknown_tags()) {
            log::warn!(
                "`Listing({})` has unrecognized category `{}` or condition \
                 `{}`, it will only show up unfiltered",
                l.id,
                l.category,
                l.condition,
            );
        }

        Ok(listings)
    }

    /// Replaces the file contents with the provided [`Listing`]s.
    async fn write(
        &self,
        listings: &[Listing],
    ) -> Result<(), Traced<source::Error>> {
        let bytes = serde_json::to_vec_pretty(listings)
            .map_err(Error::Format)
            .map_err(tracerr::from_and_wrap!(=> source::Error))?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, bytes)
            .await
            .map_err(Error::Write)
            .map_err(tracerr::from_and_wrap!(=> source::Error))?;
        fs::rename(&tmp, &self.path)
            .await
            .map_err(Error::Write)
            .map_err(tracerr::from_and_wrap!(=> source::Error))
    }
}

impl Source<Select<All<Collection>>> for JsonFile {
    type Ok = Collection;
    type Err = Traced<source::Error>;

    async fn execute(
        &self,
        _: Select<All<Collection>>,
    ) -> Result<Self::Ok, Self::Err> {
        let listings = self.read().await.map_err(tracerr::wrap!())?;
        log::debug!(
            "read {} listings from `{}`",
            listings.len(),
            self.path.display(),
        );
        Ok(listings.into())
    }
}

impl Source<Insert<Listing>> for JsonFile {
    type Ok = ();
    type Err = Traced<source::Error>;

    async fn execute(
        &self,
        Insert(listing): Insert<Listing>,
    ) -> Result<Self::Ok, Self::Err> {
        let _guard = self.write_lock.lock().await;

        let mut listings = self.read().await.map_err(tracerr::wrap!())?;
        log::debug!(
            "appending `Listing({})` to `{}`",
            listing.id,
            self.path.display(),
        );
        listings.push(listing);

        self.write(&listings).await.map_err(tracerr::wrap!())
    }
}

/// [`JsonFile`] error.
#[derive(Debug, Display, StdError)]
pub enum Error {
    /// Failed to read the file.
    #[display("failed to read listings file: {_0}")]
    Read(io::Error),

    /// Failed to write the file.
    #[display("failed to write listings file: {_0}")]
    Write(io::Error),

    /// File contents are not a valid JSON array of [`Listing`]s.
    #[display("malformed listings file: {_0}")]
    Format(serde_json::Error),
}
