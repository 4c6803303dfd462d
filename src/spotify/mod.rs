//! # Spotify Integration Module
//!
//! Blocking access to the Spotify Web API for catalog extraction.
//!
//! ```text
//! Catalog (aggregation)
//!          ↓
//! SpotifyClient
//!     ├── auth      client-credentials token exchange, bearer headers
//!     ├── paging    offset/limit walk over `{ total, items }` endpoints
//!     ├── artists   search, artist albums, release totals, top tracks
//!     ├── albums    album detail, album tracks
//!     └── tracks    track detail, batched track detail
//!          ↓
//! Transport (reqwest::blocking in production)
//! ```
//!
//! Every operation is a single synchronous call chain. Nothing is cached and
//! failed requests are not retried: a non-2xx response becomes a
//! [`FetchError`](crate::error::FetchError) that aborts the caller.

pub mod albums;
pub mod artists;
pub mod auth;
pub mod client;
pub mod paging;
pub mod tracks;
pub mod transport;

pub use auth::{AuthProvider, Token, get_auth_header};
pub use client::SpotifyClient;
pub use paging::PAGE_LIMIT;
pub use transport::{Headers, HttpTransport, Method, Request, Response, Transport};
