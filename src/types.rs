use std::fmt;

use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
    #[serde(default)]
    pub expires_in: u64,
}

/// One page of a paginated collection endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct Page<T> {
    pub total: u32,
    pub items: Vec<T>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
}

#[derive(Tabled)]
pub struct ArtistTableRow {
    pub name: String,
    pub id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub artists: Page<Artist>,
}

/// Artist credit embedded in album and track objects.
#[derive(Debug, Clone, Deserialize)]
pub struct ArtistRef {
    pub id: Option<String>,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlbumType {
    Album,
    Single,
    Compilation,
}

impl fmt::Display for AlbumType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AlbumType::Album => "album",
            AlbumType::Single => "single",
            AlbumType::Compilation => "compilation",
        };
        f.write_str(name)
    }
}

/// Album as listed by the artist albums endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct SimplifiedAlbum {
    pub id: String,
    pub name: String,
    pub album_type: AlbumType,
    pub release_date: String,
    #[serde(default)]
    pub release_date_precision: Option<String>,
    pub total_tracks: u32,
    #[serde(default)]
    pub artists: Vec<ArtistRef>,
}

/// Album detail from the single album endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct FullAlbum {
    pub id: String,
    pub name: String,
    pub album_type: AlbumType,
    pub release_date: String,
    #[serde(default)]
    pub total_tracks: u32,
}

/// Album reference embedded in a full track.
#[derive(Debug, Clone, Deserialize)]
pub struct TrackAlbum {
    pub name: String,
    pub release_date: String,
}

/// Track as listed by the album tracks endpoint. Carries no popularity.
#[derive(Debug, Clone, Deserialize)]
pub struct SimplifiedTrack {
    pub id: String,
    pub name: String,
    pub uri: String,
    pub duration_ms: u64,
    #[serde(default)]
    pub artists: Vec<ArtistRef>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FullTrack {
    pub id: String,
    pub name: String,
    pub uri: String,
    pub duration_ms: u64,
    pub popularity: u8,
    #[serde(default)]
    pub artists: Vec<ArtistRef>,
    pub album: TrackAlbum,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeveralTracksResponse {
    pub tracks: Vec<Option<FullTrack>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TopTracksResponse {
    pub tracks: Vec<FullTrack>,
}

/// Release groups accepted by the artist albums endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseGroup {
    Album,
    Single,
    Compilation,
}

impl ReleaseGroup {
    pub const ALL: [ReleaseGroup; 3] = [
        ReleaseGroup::Album,
        ReleaseGroup::Single,
        ReleaseGroup::Compilation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReleaseGroup::Album => "album",
            ReleaseGroup::Single => "single",
            ReleaseGroup::Compilation => "compilation",
        }
    }
}

/// Normalized album row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlbumRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub album_type: AlbumType,
    pub id: String,
    pub release_date: String,
    pub total_tracks: u32,
    pub release_year: Option<i32>,
}

#[derive(Tabled)]
pub struct AlbumTableRow {
    pub name: String,
    #[tabled(rename = "type")]
    pub album_type: String,
    pub id: String,
    pub release_date: String,
    pub total_tracks: String,
    pub release_year: String,
}

/// Normalized track row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackRecord {
    pub name: String,
    pub album: String,
    pub artists: Vec<String>,
    pub duration: String,
    pub popularity: Option<u8>,
    pub release_date: String,
    pub release_year: Option<i32>,
    pub uri: String,
}

#[derive(Tabled)]
pub struct TrackTableRow {
    pub name: String,
    pub album: String,
    pub artists: String,
    pub duration: String,
    pub popularity: String,
    pub release_date: String,
    pub uri: String,
}

#[derive(Tabled)]
pub struct TrackIdTableRow {
    pub uri: String,
}

/// Number of releases an artist has per group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReleaseCounts {
    pub albums: u32,
    pub singles: u32,
    pub compilations: u32,
}

#[derive(Tabled)]
pub struct ReleaseCountsTableRow {
    pub group: String,
    pub total: u32,
}
