use crate::{
    error::{Error, FetchError},
    spotify::{client::SpotifyClient, transport::Transport},
    types::{Artist, FullTrack, Page, ReleaseGroup, SearchResponse, SimplifiedAlbum, TopTracksResponse},
};

/// Number of matches requested when resolving an artist by name.
pub const SEARCH_LIMIT: u32 = 5;

impl<T: Transport> SpotifyClient<T> {
    /// Resolves an artist name to the catalog's best match.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] when the search has no artist results, or
    /// [`Error::Fetch`] when the search request itself fails.
    pub fn search_artist(&self, name: &str) -> Result<Artist, Error> {
        self.search_artists(name, SEARCH_LIMIT)?
            .into_iter()
            .next()
            .ok_or_else(|| Error::NotFound {
                kind: "artist",
                query: name.to_string(),
            })
    }

    /// Returns up to `limit` artist matches for `name`, best match first.
    pub fn search_artists(&self, name: &str, limit: u32) -> Result<Vec<Artist>, FetchError> {
        let response: SearchResponse = self.get_json(
            "/search",
            &[
                ("q", name.to_string()),
                ("type", "artist".to_string()),
                ("limit", limit.to_string()),
            ],
            None,
        )?;

        Ok(response.artists.items)
    }

    /// Lists every release of an artist in the given groups.
    pub fn artist_albums(
        &self,
        artist_id: &str,
        groups: &[ReleaseGroup],
    ) -> Result<Vec<SimplifiedAlbum>, FetchError> {
        self.fetch_all(
            &format!("/artists/{artist_id}/albums"),
            &[("include_groups", include_groups(groups))],
        )
    }

    /// Reads the number of releases in one group from a single `limit=1` page.
    pub fn release_total(&self, artist_id: &str, group: ReleaseGroup) -> Result<u32, FetchError> {
        let page: Page<SimplifiedAlbum> = self.fetch_page(
            &format!("/artists/{artist_id}/albums"),
            &[("include_groups", group.as_str().to_string())],
            1,
            0,
        )?;

        Ok(page.total)
    }

    /// The catalog's current top tracks of an artist in `market`.
    pub fn artist_top_tracks(
        &self,
        artist_id: &str,
        market: &str,
    ) -> Result<Vec<FullTrack>, FetchError> {
        let response: TopTracksResponse = self.get_json(
            &format!("/artists/{artist_id}/top-tracks"),
            &[("market", market.to_string())],
            None,
        )?;

        Ok(response.tracks)
    }
}

fn include_groups(groups: &[ReleaseGroup]) -> String {
    groups
        .iter()
        .map(|g| g.as_str())
        .collect::<Vec<_>>()
        .join(",")
}
