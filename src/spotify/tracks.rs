use crate::{
    error::FetchError,
    spotify::{client::SpotifyClient, transport::Transport},
    types::{FullTrack, SeveralTracksResponse},
};

/// Maximum number of ids accepted by the several-tracks endpoint.
pub const SEVERAL_TRACKS_LIMIT: usize = 50;

impl<T: Transport> SpotifyClient<T> {
    /// Fetches the full detail of one track.
    pub fn get_track(&self, track_id: &str) -> Result<FullTrack, FetchError> {
        self.get_json(&format!("/tracks/{track_id}"), &[], None)
    }

    /// Fetches up to [`SEVERAL_TRACKS_LIMIT`] tracks in one request.
    ///
    /// The result is positional: entry `i` belongs to `track_ids[i]`, and is
    /// `None` when the catalog has no detail for that id.
    pub fn get_several_tracks(
        &self,
        track_ids: &[&str],
    ) -> Result<Vec<Option<FullTrack>>, FetchError> {
        debug_assert!(track_ids.len() <= SEVERAL_TRACKS_LIMIT);
        if track_ids.is_empty() {
            return Ok(Vec::new());
        }

        let response: SeveralTracksResponse =
            self.get_json("/tracks", &[("ids", track_ids.join(","))], None)?;

        Ok(response.tracks)
    }
}
