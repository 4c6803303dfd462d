use crate::{
    catalog::PopularityLookup,
    cli::{artists::resolve_artist, connect, output, output::OutputFormat, spinner},
    config::Config,
    error, success,
};

/// Prints every track across all releases of an artist.
///
/// `ids_only` prints the distinct track uris instead. Full rows are only
/// deduplicated by uri when `dedup` is set.
pub fn tracks(
    config: &Config,
    artist: &str,
    by_id: bool,
    dedup: bool,
    ids_only: bool,
    popularity: PopularityLookup,
    format: OutputFormat,
) {
    let catalog = connect(config, popularity);
    let artist = resolve_artist(&catalog, artist, by_id);
    let pb = spinner(format!("Fetching tracks of {}...", artist.name));

    if ids_only {
        let result = catalog.track_ids_of_artist(&artist.id);
        pb.finish_and_clear();
        match result {
            Ok(uris) => {
                success!("Found {} distinct tracks of {}", uris.len(), artist.name);
                output::print_uris(uris, format);
            }
            Err(e) => error!("Cannot fetch tracks of {}. Err: {}", artist.name, e),
        }
        return;
    }

    let result = catalog.tracks_of_artist(&artist.id, dedup);
    pb.finish_and_clear();
    match result {
        Ok(tracks) => {
            success!("Fetched {} tracks of {}", tracks.len(), artist.name);
            output::print_tracks(tracks, format);
        }
        Err(e) => error!("Cannot fetch tracks of {}. Err: {}", artist.name, e),
    }
}

/// Prints the artist's top tracks in `market`.
pub fn top_tracks(config: &Config, artist: &str, by_id: bool, market: &str, format: OutputFormat) {
    let catalog = connect(config, PopularityLookup::default());
    let artist = resolve_artist(&catalog, artist, by_id);

    let pb = spinner(format!("Fetching top tracks of {} in {}...", artist.name, market));
    let result = catalog.top_tracks_of_artist(&artist.id, market);
    pb.finish_and_clear();

    match result {
        Ok(tracks) => output::print_tracks(tracks, format),
        Err(e) => error!("Cannot fetch top tracks of {}. Err: {}", artist.name, e),
    }
}
