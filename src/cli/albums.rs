use crate::{
    catalog::PopularityLookup,
    cli::{artists::resolve_artist, connect, output, output::OutputFormat, spinner},
    config::Config,
    error, success,
};

/// Prints every album, single and compilation of an artist.
pub fn albums(config: &Config, artist: &str, by_id: bool, format: OutputFormat) {
    let catalog = connect(config, PopularityLookup::default());
    let artist = resolve_artist(&catalog, artist, by_id);

    let pb = spinner(format!("Fetching releases of {}...", artist.name));
    let result = catalog.all_albums_of_artist(&artist.id);
    pb.finish_and_clear();

    match result {
        Ok(albums) => {
            success!("Fetched {} releases of {}", albums.len(), artist.name);
            output::print_albums(albums, format);
        }
        Err(e) => error!("Cannot fetch releases of {}. Err: {}", artist.name, e),
    }
}

/// Prints every track of one album, or only their uris with `ids_only`.
pub fn album_tracks(
    config: &Config,
    album_id: &str,
    ids_only: bool,
    popularity: PopularityLookup,
    format: OutputFormat,
) {
    let catalog = connect(config, popularity);
    let pb = spinner(format!("Fetching tracks of album {}...", album_id));

    if ids_only {
        let result = catalog.track_ids_of_album(album_id);
        pb.finish_and_clear();
        match result {
            Ok(uris) => output::print_uris(uris, format),
            Err(e) => error!("Cannot fetch tracks of album {}. Err: {}", album_id, e),
        }
        return;
    }

    let result = catalog.tracks_of_album(album_id);
    pb.finish_and_clear();
    match result {
        Ok(tracks) => {
            success!("Fetched {} tracks", tracks.len());
            output::print_tracks(tracks, format);
        }
        Err(e) => error!("Cannot fetch tracks of album {}. Err: {}", album_id, e),
    }
}
