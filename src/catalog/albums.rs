use crate::{
    catalog::Catalog,
    error::Error,
    spotify::Transport,
    types::{AlbumRecord, ReleaseCounts, ReleaseGroup, SimplifiedAlbum},
    utils,
};

impl<T: Transport> Catalog<T> {
    /// Every album, single and compilation of an artist, one row per release.
    pub fn all_albums_of_artist(&self, artist_id: &str) -> Result<Vec<AlbumRecord>, Error> {
        let albums = self.client.artist_albums(artist_id, &ReleaseGroup::ALL)?;
        log::debug!("Artist {} has {} releases", artist_id, albums.len());

        Ok(albums.into_iter().map(album_record).collect())
    }

    /// Ids of every album, single and compilation of an artist, in fetch order.
    pub fn all_album_ids_of_artist(&self, artist_id: &str) -> Result<Vec<String>, Error> {
        let albums = self.client.artist_albums(artist_id, &ReleaseGroup::ALL)?;
        Ok(albums.into_iter().map(|a| a.id).collect())
    }

    pub fn release_counts(&self, artist_id: &str) -> Result<ReleaseCounts, Error> {
        Ok(ReleaseCounts {
            albums: self.client.release_total(artist_id, ReleaseGroup::Album)?,
            singles: self.client.release_total(artist_id, ReleaseGroup::Single)?,
            compilations: self
                .client
                .release_total(artist_id, ReleaseGroup::Compilation)?,
        })
    }
}

fn album_record(album: SimplifiedAlbum) -> AlbumRecord {
    let release_year = utils::release_year(&album.release_date);
    AlbumRecord {
        name: album.name,
        album_type: album.album_type,
        id: album.id,
        release_date: album.release_date,
        total_tracks: album.total_tracks,
        release_year,
    }
}
