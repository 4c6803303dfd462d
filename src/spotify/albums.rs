use crate::{
    error::FetchError,
    spotify::{client::SpotifyClient, transport::Transport},
    types::{FullAlbum, SimplifiedTrack},
};

impl<T: Transport> SpotifyClient<T> {
    /// Fetches the full detail of one album.
    pub fn get_album(&self, album_id: &str) -> Result<FullAlbum, FetchError> {
        self.get_json(&format!("/albums/{album_id}"), &[], None)
    }

    /// Lists every track of an album. The listing carries no popularity.
    pub fn album_tracks(&self, album_id: &str) -> Result<Vec<SimplifiedTrack>, FetchError> {
        self.fetch_all(&format!("/albums/{album_id}/tracks"), &[])
    }
}
