use crate::{
    catalog::{Catalog, PopularityLookup},
    cli::{connect, output, spinner},
    config::Config,
    error, info,
    spotify::Transport,
    types::{Artist, ArtistTableRow, ReleaseCountsTableRow},
    warning,
};

/// Lists the top artist matches for `name`.
pub fn search(config: &Config, name: &str, limit: u32) {
    let catalog = connect(config, PopularityLookup::default());

    let pb = spinner(format!("Searching artists matching '{}'...", name));
    let result = catalog.client().search_artists(name, limit);
    pb.finish_and_clear();

    match result {
        Ok(artists) if artists.is_empty() => warning!("No artist found for '{}'", name),
        Ok(artists) => output::print_table(
            artists
                .into_iter()
                .map(|a| ArtistTableRow { name: a.name, id: a.id }),
        ),
        Err(e) => error!("Search failed. Err: {}", e),
    }
}

/// Prints how many albums, singles and compilations an artist has.
pub fn counts(config: &Config, artist: &str, by_id: bool) {
    let catalog = connect(config, PopularityLookup::default());
    let artist = resolve_artist(&catalog, artist, by_id);

    let pb = spinner(format!("Counting releases of {}...", artist.name));
    let result = catalog.release_counts(&artist.id);
    pb.finish_and_clear();

    match result {
        Ok(counts) => output::print_table([
            ReleaseCountsTableRow {
                group: "album".to_string(),
                total: counts.albums,
            },
            ReleaseCountsTableRow {
                group: "single".to_string(),
                total: counts.singles,
            },
            ReleaseCountsTableRow {
                group: "compilation".to_string(),
                total: counts.compilations,
            },
        ]),
        Err(e) => error!("Cannot count releases of {}. Err: {}", artist.name, e),
    }
}

/// Turns the `<artist>` argument into an artist, searching by name unless
/// `by_id` is set.
pub(crate) fn resolve_artist<T: Transport>(
    catalog: &Catalog<T>,
    artist: &str,
    by_id: bool,
) -> Artist {
    if by_id {
        return Artist {
            id: artist.to_string(),
            name: artist.to_string(),
        };
    }

    match catalog.client().search_artist(artist) {
        Ok(found) => {
            info!("Using artist {} ({})", found.name, found.id);
            found
        }
        Err(e) => error!("Cannot resolve artist '{}'. Err: {}", artist, e),
    }
}
