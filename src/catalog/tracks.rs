use std::collections::BTreeSet;

use crate::{
    catalog::{Catalog, PopularityLookup},
    error::Error,
    spotify::{Transport, tracks::SEVERAL_TRACKS_LIMIT},
    types::{FullAlbum, FullTrack, SimplifiedTrack, TrackRecord},
    utils,
};

impl<T: Transport> Catalog<T> {
    /// Every track of an album with popularity and the album's name and
    /// release date attached.
    pub fn tracks_of_album(&self, album_id: &str) -> Result<Vec<TrackRecord>, Error> {
        let album = self.client.get_album(album_id)?;
        let tracks = self.client.album_tracks(album_id)?;
        let popularity = self.popularity_of(&tracks)?;
        let release_year = utils::release_year(&album.release_date);

        Ok(tracks
            .into_iter()
            .zip(popularity)
            .map(|(track, popularity)| album_track_record(track, &album, release_year, popularity))
            .collect())
    }

    /// Uris of every track of an album, without any enrichment.
    pub fn track_ids_of_album(&self, album_id: &str) -> Result<Vec<String>, Error> {
        let tracks = self.client.album_tracks(album_id)?;
        Ok(tracks.into_iter().map(|t| t.uri).collect())
    }

    /// Every track across all releases of an artist, album by album.
    ///
    /// With `deduplicate` unset, a track released on several groupings (say a
    /// studio album and a compilation) appears once per grouping. With it set,
    /// only the first row per uri is kept.
    pub fn tracks_of_artist(
        &self,
        artist_id: &str,
        deduplicate: bool,
    ) -> Result<Vec<TrackRecord>, Error> {
        let mut tracks = Vec::new();
        for album_id in self.all_album_ids_of_artist(artist_id)? {
            tracks.extend(self.tracks_of_album(&album_id)?);
        }

        if deduplicate {
            utils::remove_duplicate_tracks(&mut tracks);
        }
        Ok(tracks)
    }

    /// Distinct uris of every track across all releases of an artist.
    pub fn track_ids_of_artist(&self, artist_id: &str) -> Result<BTreeSet<String>, Error> {
        let mut uris = BTreeSet::new();
        for album_id in self.all_album_ids_of_artist(artist_id)? {
            uris.extend(self.track_ids_of_album(&album_id)?);
        }
        Ok(uris)
    }

    pub fn top_tracks_of_artist(
        &self,
        artist_id: &str,
        market: &str,
    ) -> Result<Vec<TrackRecord>, Error> {
        let tracks = self.client.artist_top_tracks(artist_id, market)?;
        Ok(tracks.into_iter().map(full_track_record).collect())
    }

    /// Popularity per track, positionally aligned with `tracks`.
    fn popularity_of(&self, tracks: &[SimplifiedTrack]) -> Result<Vec<Option<u8>>, Error> {
        let mut popularity = Vec::with_capacity(tracks.len());

        match self.popularity {
            PopularityLookup::PerTrack => {
                for track in tracks {
                    popularity.push(Some(self.client.get_track(&track.id)?.popularity));
                }
            }
            PopularityLookup::Batched => {
                for chunk in tracks.chunks(SEVERAL_TRACKS_LIMIT) {
                    let ids: Vec<&str> = chunk.iter().map(|t| t.id.as_str()).collect();
                    let mut details = self.client.get_several_tracks(&ids)?;
                    // keep the alignment even if the response is short
                    details.resize_with(chunk.len(), || None);
                    popularity.extend(details.into_iter().map(|d| d.map(|t| t.popularity)));
                }
            }
        }

        Ok(popularity)
    }
}

fn album_track_record(
    track: SimplifiedTrack,
    album: &FullAlbum,
    release_year: Option<i32>,
    popularity: Option<u8>,
) -> TrackRecord {
    TrackRecord {
        name: track.name,
        album: album.name.clone(),
        artists: utils::artist_names(&track.artists),
        duration: utils::format_duration(track.duration_ms),
        popularity,
        release_date: album.release_date.clone(),
        release_year,
        uri: track.uri,
    }
}

fn full_track_record(track: FullTrack) -> TrackRecord {
    let release_year = utils::release_year(&track.album.release_date);
    TrackRecord {
        name: track.name,
        album: track.album.name,
        artists: utils::artist_names(&track.artists),
        duration: utils::format_duration(track.duration_ms),
        popularity: Some(track.popularity),
        release_date: track.album.release_date,
        release_year,
        uri: track.uri,
    }
}
