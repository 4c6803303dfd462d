//! # CLI Module
//!
//! User-facing commands of the `spotcat` binary. Each command connects to the
//! Web API with the configured credentials, runs one aggregation from
//! [`catalog`](crate::catalog) and prints the records as a table or as JSON.
//!
//! ## Commands
//!
//! - [`search`] - Lists the top artist matches for a name
//! - [`counts`] - Number of albums, singles and compilations of an artist
//! - [`albums`] - Every release of an artist
//! - [`album_tracks`] - Every track of one album
//! - [`tracks`] - Every track across all releases of an artist
//! - [`top_tracks`] - The artist's top tracks in a market
//!
//! Errors are fatal here: they are printed with [`error!`](crate::error!) and
//! the process exits with status 1.

mod albums;
mod artists;
mod output;
mod tracks;

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

pub use albums::{album_tracks, albums};
pub use artists::{counts, search};
pub use output::OutputFormat;
pub use tracks::{top_tracks, tracks};

use crate::{
    catalog::{Catalog, PopularityLookup},
    config::Config,
    error,
    spotify::{HttpTransport, SpotifyClient},
};

/// Authenticates with the configured credentials and builds a catalog.
pub fn connect(config: &Config, popularity: PopularityLookup) -> Catalog<HttpTransport> {
    match SpotifyClient::connect(HttpTransport::new(), config) {
        Ok(client) => Catalog::new(client).with_popularity_lookup(popularity),
        Err(e) => error!("Cannot connect to Spotify. Err: {}", e),
    }
}

fn spinner(message: impl Into<String>) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.into());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}
