use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use spotcat::{
    catalog::PopularityLookup,
    cli::{self, OutputFormat},
    config::{self, Config},
    error,
    spotify::artists::SEARCH_LIMIT,
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Search artists by name
    Search(SearchOptions),

    /// Count albums, singles and compilations of an artist
    Counts(ArtistOptions),

    /// List every release of an artist
    Albums(AlbumsOptions),

    /// List every track of an album
    AlbumTracks(AlbumTracksOptions),

    /// List every track of an artist
    Tracks(TracksOptions),

    /// List the top tracks of an artist
    TopTracks(TopTracksOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct SearchOptions {
    /// Artist name to search for
    name: String,

    /// Number of matches to show
    #[clap(long, default_value_t = SEARCH_LIMIT)]
    limit: u32,
}

#[derive(Parser, Debug, Clone)]
pub struct ArtistOptions {
    /// Artist name, or Spotify artist id with --id
    artist: String,

    /// Treat <ARTIST> as a Spotify artist id instead of a name
    #[clap(long)]
    id: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct AlbumsOptions {
    #[clap(flatten)]
    artist: ArtistOptions,

    #[clap(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
}

#[derive(Parser, Debug, Clone)]
pub struct AlbumTracksOptions {
    /// Spotify album id
    album_id: String,

    /// Only print track uris
    #[clap(long)]
    ids_only: bool,

    /// Look up popularity with one request per track
    #[clap(long)]
    per_track: bool,

    #[clap(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
}

#[derive(Parser, Debug, Clone)]
pub struct TracksOptions {
    #[clap(flatten)]
    artist: ArtistOptions,

    /// Drop repeated tracks (same uri) found on several releases
    #[clap(long, conflicts_with = "ids_only")]
    dedup: bool,

    /// Only print distinct track uris
    #[clap(long)]
    ids_only: bool,

    /// Look up popularity with one request per track
    #[clap(long)]
    per_track: bool,

    #[clap(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
}

#[derive(Parser, Debug, Clone)]
pub struct TopTracksOptions {
    #[clap(flatten)]
    artist: ArtistOptions,

    /// Market (ISO 3166-1 alpha-2); defaults to SPOTIFY_MARKET
    #[clap(long)]
    market: Option<String>,

    #[clap(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

fn popularity_lookup(per_track: bool) -> PopularityLookup {
    if per_track {
        PopularityLookup::PerTrack
    } else {
        PopularityLookup::Batched
    }
}

fn main() {
    env_logger::init();

    if let Err(e) = config::load_env() {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();
    let config = Config::from_env();

    match cli.command {
        Command::Search(opt) => cli::search(&config, &opt.name, opt.limit),
        Command::Counts(opt) => cli::counts(&config, &opt.artist, opt.id),
        Command::Albums(opt) => cli::albums(&config, &opt.artist.artist, opt.artist.id, opt.format),
        Command::AlbumTracks(opt) => cli::album_tracks(
            &config,
            &opt.album_id,
            opt.ids_only,
            popularity_lookup(opt.per_track),
            opt.format,
        ),
        Command::Tracks(opt) => cli::tracks(
            &config,
            &opt.artist.artist,
            opt.artist.id,
            opt.dedup,
            opt.ids_only,
            popularity_lookup(opt.per_track),
            opt.format,
        ),
        Command::TopTracks(opt) => {
            let market = opt.market.unwrap_or_else(|| config.market.clone());
            cli::top_tracks(
                &config,
                &opt.artist.artist,
                opt.artist.id,
                &market,
                opt.format,
            )
        }
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
