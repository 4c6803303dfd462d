//! Spotify Catalog Extraction Library
//!
//! Turns an artist into complete, normalized album and track tables by
//! walking the paginated endpoints of the Spotify Web API.
//!
//! # Modules
//!
//! - `catalog` - Aggregations: artist → albums, album → tracks, artist → tracks
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `error` - Error taxonomy
//! - `spotify` - Spotify Web API client, authentication and pagination
//! - `types` - Wire types, output records and table rows
//! - `utils` - Record normalization helpers
//!
//! # Example
//!
//! ```
//! use spotcat::{catalog::Catalog, config::Config, spotify::{HttpTransport, SpotifyClient}};
//!
//! fn main() -> spotcat::Res<()> {
//!     let config = Config::from_env();
//!     let client = SpotifyClient::connect(HttpTransport::new(), &config)?;
//!     let catalog = Catalog::new(client);
//!     let artist = catalog.client().search_artist("Ngọt")?;
//!     for album in catalog.all_albums_of_artist(&artist.id)? {
//!         println!("{} ({:?})", album.name, album.release_year);
//!     }
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod spotify;
pub mod types;
pub mod utils;

pub use error::Error;

/// A convenient Result type alias for the command-line layer.
///
/// Library operations return typed errors from [`error`]; this alias boxes
/// them for callers that only need to report.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Resolving artist {}...", name);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Fetched {} tracks", count);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only for fatal errors in the command-line layer; the program exits with
/// status 1 right after printing.
///
/// # Example
///
/// ```
/// error!("Missing required environment variable: {}", var_name);
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// # Example
///
/// ```
/// warning!("No releases found for {}", artist);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
