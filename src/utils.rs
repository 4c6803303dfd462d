use std::collections::HashSet;

use chrono::{Datelike, NaiveDate};

use crate::{
    error::NormalizationError,
    types::{ArtistRef, TrackRecord},
};

/// Formats a duration as `minutes:seconds`.
///
/// Sub-second remainders are dropped, seconds are zero-padded and minutes are
/// never wrapped into hours.
pub fn format_duration(duration_ms: u64) -> String {
    let total_secs = duration_ms / 1000;
    format!("{}:{:02}", total_secs / 60, total_secs % 60)
}

/// Parses a catalog release date of day, month or year precision.
///
/// `YYYY-MM` resolves to the first of the month and `YYYY` to the first of
/// January. The catalog uses year `0000` for unknown dates, which is rejected.
pub fn parse_release_date(raw: &str) -> Result<NaiveDate, NormalizationError> {
    let invalid = || NormalizationError::ReleaseDate(raw.to_string());
    let raw_trimmed = raw.trim();

    let date = match raw_trimmed.len() {
        10 => NaiveDate::parse_from_str(raw_trimmed, "%Y-%m-%d").ok(),
        7 => NaiveDate::parse_from_str(&format!("{raw_trimmed}-01"), "%Y-%m-%d").ok(),
        4 if raw_trimmed.bytes().all(|b| b.is_ascii_digit()) => raw_trimmed
            .parse::<i32>()
            .ok()
            .and_then(|year| NaiveDate::from_ymd_opt(year, 1, 1)),
        _ => None,
    }
    .ok_or_else(invalid)?;

    if date.year() == 0 {
        return Err(invalid());
    }
    Ok(date)
}

/// Extracts the release year, or `None` when the date is malformed.
pub fn release_year(raw: &str) -> Option<i32> {
    match parse_release_date(raw) {
        Ok(date) => Some(date.year()),
        Err(e) => {
            log::warn!("{}; leaving release year empty", e);
            None
        }
    }
}

/// Credited artist names in catalog order.
pub fn artist_names(artists: &[ArtistRef]) -> Vec<String> {
    artists.iter().map(|a| a.name.clone()).collect()
}

/// Drops every track whose uri was already seen, keeping the first one.
pub fn remove_duplicate_tracks(tracks: &mut Vec<TrackRecord>) {
    let mut seen_uris = HashSet::new();
    tracks.retain(|track| seen_uris.insert(track.uri.clone()));
}

pub fn display_optional<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
