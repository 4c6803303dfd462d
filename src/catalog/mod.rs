//! Aggregations over the catalog.
//!
//! A [`Catalog`] composes the paginated listings and single-entity lookups of
//! [`SpotifyClient`] into complete album and track sets for one artist or
//! album. Results are fresh snapshots built from the responses of that call.
//! Any failed request aborts the aggregation; malformed dates only blank the
//! affected field.

mod albums;
mod tracks;

use crate::spotify::{SpotifyClient, Transport};

/// How track popularity is looked up for album track listings, which do not
/// carry it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PopularityLookup {
    /// One several-tracks request per 50 tracks.
    #[default]
    Batched,
    /// One track request per track.
    PerTrack,
}

pub struct Catalog<T: Transport> {
    client: SpotifyClient<T>,
    popularity: PopularityLookup,
}

impl<T: Transport> Catalog<T> {
    pub fn new(client: SpotifyClient<T>) -> Self {
        Catalog {
            client,
            popularity: PopularityLookup::default(),
        }
    }

    pub fn with_popularity_lookup(mut self, popularity: PopularityLookup) -> Self {
        self.popularity = popularity;
        self
    }

    pub fn client(&self) -> &SpotifyClient<T> {
        &self.client
    }
}
