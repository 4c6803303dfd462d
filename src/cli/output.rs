use clap::ValueEnum;
use serde::Serialize;
use tabled::{Table, Tabled};

use crate::{
    error,
    types::{AlbumRecord, AlbumTableRow, TrackIdTableRow, TrackRecord, TrackTableRow},
    utils,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Terminal table
    Table,
    /// Pretty-printed JSON array
    Json,
}

pub fn print_albums(albums: Vec<AlbumRecord>, format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(&albums),
        OutputFormat::Table => print_table(albums.into_iter().map(|a| AlbumTableRow {
            name: a.name,
            album_type: a.album_type.to_string(),
            id: a.id,
            release_date: a.release_date,
            total_tracks: a.total_tracks.to_string(),
            release_year: utils::display_optional(a.release_year),
        })),
    }
}

pub fn print_tracks(tracks: Vec<TrackRecord>, format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(&tracks),
        OutputFormat::Table => print_table(tracks.into_iter().map(|t| TrackTableRow {
            name: t.name,
            album: t.album,
            artists: t.artists.join(", "),
            duration: t.duration,
            popularity: utils::display_optional(t.popularity),
            release_date: t.release_date,
            uri: t.uri,
        })),
    }
}

pub fn print_uris<I>(uris: I, format: OutputFormat)
where
    I: IntoIterator<Item = String>,
{
    let uris: Vec<String> = uris.into_iter().collect();
    match format {
        OutputFormat::Json => print_json(&uris),
        OutputFormat::Table => print_table(uris.into_iter().map(|uri| TrackIdTableRow { uri })),
    }
}

pub fn print_table<R, I>(rows: I)
where
    R: Tabled,
    I: IntoIterator<Item = R>,
{
    println!("{}", Table::new(rows));
}

fn print_json<S: Serialize + ?Sized>(value: &S) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => error!("Cannot serialize output. Err: {}", e),
    }
}
