use std::{
    cell::RefCell,
    collections::{BTreeSet, HashMap},
};

use reqwest::Url;
use serde_json::{Value, json};
use spotcat::{
    Error,
    catalog::{Catalog, PopularityLookup},
    error::{FetchErrorKind, TransportError},
    spotify::{Request, Response, SpotifyClient, Token, Transport},
    types::AlbumType,
};

const API_URL: &str = "https://api.test/v1";

/// In-memory stand-in for the Web API serving a small fixed catalog.
#[derive(Default)]
struct FakeCatalog {
    artists: Vec<Value>,
    artist_albums: HashMap<String, Vec<Value>>,
    albums: HashMap<String, Value>,
    album_tracks: HashMap<String, Vec<Value>>,
    tracks: HashMap<String, Value>,
    top_tracks: HashMap<String, Vec<Value>>,
    failing_paths: Vec<String>,
    requests: RefCell<Vec<String>>,
}

impl FakeCatalog {
    fn artist(mut self, id: &str, name: &str) -> Self {
        self.artists.push(json!({ "id": id, "name": name }));
        self
    }

    /// Adds an album of `artist_id` with the given `(track id, popularity)`
    /// entries; the track uri is derived from the id.
    fn album(
        mut self,
        artist_id: &str,
        album_id: &str,
        album_type: &str,
        release_date: &str,
        tracks: &[(&str, u8)],
    ) -> Self {
        let name = format!("Album {album_id}");
        self.artist_albums
            .entry(artist_id.to_string())
            .or_default()
            .push(json!({
                "id": album_id,
                "name": name,
                "album_type": album_type,
                "release_date": release_date,
                "release_date_precision": "day",
                "total_tracks": tracks.len(),
                "artists": [{ "id": artist_id, "name": "Artist" }],
            }));
        self.albums.insert(
            album_id.to_string(),
            json!({
                "id": album_id,
                "name": name,
                "album_type": album_type,
                "release_date": release_date,
                "total_tracks": tracks.len(),
            }),
        );

        let mut listing = Vec::new();
        for (i, (track_id, popularity)) in tracks.iter().enumerate() {
            let simplified = json!({
                "id": track_id,
                "name": format!("Track {track_id}"),
                "uri": format!("spotify:track:{track_id}"),
                "duration_ms": 180_000 + i as u64 * 1_000,
                "artists": [{ "id": artist_id, "name": "Artist" }, { "id": null, "name": "Guest" }],
            });
            let mut full = simplified.clone();
            full["popularity"] = json!(popularity);
            full["album"] = json!({ "name": name, "release_date": release_date });

            listing.push(simplified);
            self.tracks.insert(track_id.to_string(), full);
        }
        self.album_tracks.insert(album_id.to_string(), listing);
        self
    }

    fn top_tracks(mut self, artist_id: &str, track_ids: &[&str]) -> Self {
        let tracks = track_ids.iter().map(|id| self.tracks[*id].clone()).collect();
        self.top_tracks.insert(artist_id.to_string(), tracks);
        self
    }

    fn failing(mut self, path: &str) -> Self {
        self.failing_paths.push(path.to_string());
        self
    }

    fn catalog(self) -> Catalog<FakeCatalog> {
        Catalog::new(SpotifyClient::new(self, API_URL, &Token::new("test-token")))
    }

    fn page(items: &[Value], params: &HashMap<String, String>) -> Value {
        let limit: usize = params["limit"].parse().unwrap();
        let offset: usize = params["offset"].parse().unwrap();
        let end = (offset + limit).min(items.len());
        let start = offset.min(end);
        json!({ "total": items.len(), "items": items[start..end].to_vec() })
    }

    fn route(&self, path: &str, params: &HashMap<String, String>) -> Option<Value> {
        let segments: Vec<&str> = path.trim_start_matches("/v1/").split('/').collect();
        match segments.as_slice() {
            ["search"] => {
                let query = params["q"].to_lowercase();
                let matches: Vec<Value> = self
                    .artists
                    .iter()
                    .filter(|a| a["name"].as_str().unwrap().to_lowercase().contains(&query))
                    .cloned()
                    .collect();
                let limit: usize = params["limit"].parse().unwrap();
                let items: Vec<Value> = matches.iter().take(limit).cloned().collect();
                Some(json!({ "artists": { "total": matches.len(), "items": items } }))
            }
            ["artists", id, "albums"] => {
                let groups: Vec<&str> = params["include_groups"].split(',').collect();
                let albums: Vec<Value> = self
                    .artist_albums
                    .get(*id)
                    .map(|albums| {
                        albums
                            .iter()
                            .filter(|a| groups.contains(&a["album_type"].as_str().unwrap()))
                            .cloned()
                            .collect()
                    })
                    .unwrap_or_default();
                Some(Self::page(&albums, params))
            }
            ["artists", id, "top-tracks"] => {
                assert!(params.contains_key("market"));
                let tracks = self.top_tracks.get(*id)?;
                Some(json!({ "tracks": tracks }))
            }
            ["albums", id] => self.albums.get(*id).cloned(),
            ["albums", id, "tracks"] => Some(Self::page(self.album_tracks.get(*id)?, params)),
            ["tracks"] => {
                let tracks: Vec<Value> = params["ids"]
                    .split(',')
                    .map(|id| self.tracks.get(id).cloned().unwrap_or(Value::Null))
                    .collect();
                Some(json!({ "tracks": tracks }))
            }
            ["tracks", id] => self.tracks.get(*id).cloned(),
            _ => None,
        }
    }

    fn requests_matching(&self, needle: &str) -> usize {
        self.requests
            .borrow()
            .iter()
            .filter(|url| url.contains(needle))
            .count()
    }
}

impl Transport for FakeCatalog {
    fn send(&self, request: &Request) -> Result<Response, TransportError> {
        assert_eq!(request.headers["Authorization"], "Bearer test-token");
        self.requests.borrow_mut().push(request.url.clone());

        let url = Url::parse(&request.url).map_err(|e| TransportError(e.to_string()))?;
        if self.failing_paths.iter().any(|p| url.path() == p) {
            return Ok(Response::new(500, "internal error"));
        }

        let params: HashMap<String, String> = url.query_pairs().into_owned().collect();
        Ok(match self.route(url.path(), &params) {
            Some(body) => Response::new(200, body.to_string()),
            None => Response::new(404, r#"{"error":{"status":404}}"#),
        })
    }
}

/// One artist with two albums of 3 and 2 tracks, no overlap.
fn two_album_artist() -> FakeCatalog {
    FakeCatalog::default()
        .artist("ar1", "Ngot")
        .album("ar1", "al1", "album", "2017-04-21", &[("t1", 40), ("t2", 50), ("t3", 60)])
        .album("ar1", "al2", "single", "2019-10", &[("t4", 70), ("t5", 80)])
}

/// The same track released on a studio album and a compilation.
fn reissued_track_artist() -> FakeCatalog {
    FakeCatalog::default()
        .album("ar1", "al1", "album", "2001-01-01", &[("t1", 40), ("shared", 90)])
        .album("ar1", "al2", "compilation", "2010-06-15", &[("shared", 90), ("t9", 10)])
}

#[test]
fn test_end_to_end_two_albums() {
    let catalog = two_album_artist().catalog();

    let tracks = catalog.tracks_of_artist("ar1", false).unwrap();
    assert_eq!(tracks.len(), 5);

    let uris = catalog.track_ids_of_artist("ar1").unwrap();
    let expected: BTreeSet<String> = ["t1", "t2", "t3", "t4", "t5"]
        .iter()
        .map(|id| format!("spotify:track:{id}"))
        .collect();
    assert_eq!(uris, expected);
}

#[test]
fn test_track_rows_are_normalized_and_joined_with_album() {
    let catalog = two_album_artist().catalog();

    let tracks = catalog.tracks_of_album("al1").unwrap();
    let first = &tracks[0];

    assert_eq!(first.name, "Track t1");
    assert_eq!(first.album, "Album al1");
    assert_eq!(first.artists, vec!["Artist", "Guest"]);
    assert_eq!(first.duration, "3:00");
    assert_eq!(first.popularity, Some(40));
    assert_eq!(first.release_date, "2017-04-21");
    assert_eq!(first.release_year, Some(2017));
    assert_eq!(first.uri, "spotify:track:t1");
    assert_eq!(tracks[2].duration, "3:02");
}

#[test]
fn test_month_precision_release_date_gets_year() {
    let catalog = two_album_artist().catalog();

    let tracks = catalog.tracks_of_album("al2").unwrap();
    assert!(tracks.iter().all(|t| t.release_year == Some(2019)));
}

#[test]
fn test_dedup_only_for_id_aggregation_by_default() {
    let catalog = reissued_track_artist().catalog();

    let uris = catalog.track_ids_of_artist("ar1").unwrap();
    assert_eq!(uris.len(), 3);
    assert!(uris.contains("spotify:track:shared"));

    let tracks = catalog.tracks_of_artist("ar1", false).unwrap();
    let shared: Vec<_> = tracks
        .iter()
        .filter(|t| t.uri == "spotify:track:shared")
        .collect();
    assert_eq!(tracks.len(), 4);
    assert_eq!(shared.len(), 2);
    assert_eq!(shared[0].album, "Album al1");
    assert_eq!(shared[1].album, "Album al2");
}

#[test]
fn test_tracks_of_artist_with_dedup_keeps_first_occurrence() {
    let catalog = reissued_track_artist().catalog();

    let tracks = catalog.tracks_of_artist("ar1", true).unwrap();
    let uris: Vec<&str> = tracks.iter().map(|t| t.uri.as_str()).collect();

    assert_eq!(
        uris,
        vec!["spotify:track:t1", "spotify:track:shared", "spotify:track:t9"]
    );
    assert_eq!(tracks[1].album, "Album al1");
}

#[test]
fn test_albums_of_artist() {
    let catalog = two_album_artist().catalog();

    let albums = catalog.all_albums_of_artist("ar1").unwrap();
    assert_eq!(albums.len(), 2);
    assert_eq!(albums[0].id, "al1");
    assert_eq!(albums[0].album_type, AlbumType::Album);
    assert_eq!(albums[0].total_tracks, 3);
    assert_eq!(albums[0].release_year, Some(2017));
    assert_eq!(albums[1].album_type, AlbumType::Single);

    let requests = catalog.client().transport().requests.borrow();
    assert!(requests[0].contains("include_groups=album%2Csingle%2Ccompilation"));
}

#[test]
fn test_album_ids_preserve_fetch_order() {
    let catalog = FakeCatalog::default()
        .album("ar1", "zz", "album", "2001", &[])
        .album("ar1", "aa", "album", "2002", &[])
        .album("ar1", "mm", "compilation", "2003", &[])
        .catalog();

    assert_eq!(
        catalog.all_album_ids_of_artist("ar1").unwrap(),
        vec!["zz", "aa", "mm"]
    );
}

#[test]
fn test_malformed_release_date_keeps_row() {
    let catalog = FakeCatalog::default()
        .album("ar1", "al1", "album", "not-a-date", &[("t1", 10)])
        .catalog();

    let albums = catalog.all_albums_of_artist("ar1").unwrap();
    assert_eq!(albums.len(), 1);
    assert_eq!(albums[0].release_year, None);
    assert_eq!(albums[0].name, "Album al1");
    assert_eq!(albums[0].release_date, "not-a-date");
    assert_eq!(albums[0].total_tracks, 1);

    let tracks = catalog.tracks_of_album("al1").unwrap();
    assert_eq!(tracks.len(), 1);
    assert_eq!(tracks[0].release_year, None);
    assert_eq!(tracks[0].popularity, Some(10));
}

#[test]
fn test_many_albums_are_paginated() {
    let mut fake = FakeCatalog::default();
    for i in 0..120 {
        fake = fake.album("ar1", &format!("al{i}"), "single", "2020-01-01", &[]);
    }
    let catalog = fake.catalog();

    let ids = catalog.all_album_ids_of_artist("ar1").unwrap();
    assert_eq!(ids.len(), 120);
    assert_eq!(ids.iter().collect::<BTreeSet<_>>().len(), 120);
    assert_eq!(catalog.client().transport().requests_matching("/albums?"), 3);
}

#[test]
fn test_batched_popularity_uses_several_tracks_endpoint() {
    let track_ids: Vec<String> = (0..60).map(|i| format!("t{i}")).collect();
    let tracks: Vec<(&str, u8)> = track_ids.iter().map(|id| (id.as_str(), 33)).collect();
    let catalog = FakeCatalog::default()
        .album("ar1", "al1", "album", "2020-01-01", &tracks)
        .catalog();

    let rows = catalog.tracks_of_album("al1").unwrap();
    assert_eq!(rows.len(), 60);
    assert!(rows.iter().all(|t| t.popularity == Some(33)));

    let transport = catalog.client().transport();
    assert_eq!(transport.requests_matching("/tracks?ids="), 2);
    assert_eq!(transport.requests_matching("/v1/tracks/"), 0);
}

#[test]
fn test_per_track_popularity_fetches_each_track() {
    let catalog = two_album_artist()
        .catalog()
        .with_popularity_lookup(PopularityLookup::PerTrack);

    let rows = catalog.tracks_of_album("al1").unwrap();
    let popularity: Vec<Option<u8>> = rows.iter().map(|t| t.popularity).collect();
    assert_eq!(popularity, vec![Some(40), Some(50), Some(60)]);

    let transport = catalog.client().transport();
    assert_eq!(transport.requests_matching("/v1/tracks/"), 3);
    assert_eq!(transport.requests_matching("/tracks?ids="), 0);
}

#[test]
fn test_missing_track_detail_leaves_popularity_empty() {
    let mut fake = two_album_artist();
    fake.tracks.remove("t2");
    let catalog = fake.catalog();

    let rows = catalog.tracks_of_album("al1").unwrap();
    let popularity: Vec<Option<u8>> = rows.iter().map(|t| t.popularity).collect();
    assert_eq!(popularity, vec![Some(40), None, Some(60)]);
}

#[test]
fn test_track_ids_of_album_skip_enrichment() {
    let catalog = two_album_artist().catalog();

    let uris = catalog.track_ids_of_album("al2").unwrap();
    assert_eq!(uris, vec!["spotify:track:t4", "spotify:track:t5"]);

    let transport = catalog.client().transport();
    assert_eq!(transport.requests.borrow().len(), 1);
}

#[test]
fn test_failed_album_aborts_artist_aggregation() {
    let catalog = two_album_artist().failing("/v1/albums/al2/tracks").catalog();

    match catalog.tracks_of_artist("ar1", false) {
        Err(Error::Fetch(err)) => {
            assert_eq!(err.kind, FetchErrorKind::Status(500));
            assert_eq!(err.offset, Some(0));
            assert!(err.url.contains("/albums/al2/tracks"));
        }
        other => panic!("expected fetch error, got {other:?}"),
    }
    assert!(matches!(
        catalog.track_ids_of_artist("ar1"),
        Err(Error::Fetch(_))
    ));
}

#[test]
fn test_failed_popularity_lookup_aborts() {
    let catalog = two_album_artist()
        .failing("/v1/tracks/t2")
        .catalog()
        .with_popularity_lookup(PopularityLookup::PerTrack);

    let err = catalog.tracks_of_album("al1").unwrap_err();
    match err {
        Error::Fetch(err) => assert_eq!(err.offset, None),
        other => panic!("expected fetch error, got {other:?}"),
    }
}

#[test]
fn test_search_artist_takes_first_match() {
    let catalog = FakeCatalog::default()
        .artist("ar1", "Ngot")
        .artist("ar2", "Ngot Cover Band")
        .catalog();

    let artist = catalog.client().search_artist("ngot").unwrap();
    assert_eq!(artist.id, "ar1");
    assert_eq!(artist.name, "Ngot");

    let requests = catalog.client().transport().requests.borrow();
    assert!(requests[0].contains("type=artist"));
    assert!(requests[0].contains("limit=5"));
}

#[test]
fn test_search_artists_respects_limit() {
    let catalog = FakeCatalog::default()
        .artist("ar1", "Ngot")
        .artist("ar2", "Ngot Cover Band")
        .artist("ar3", "Ngot Tribute")
        .catalog();

    let artists = catalog.client().search_artists("ngot", 2).unwrap();
    let ids: Vec<&str> = artists.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["ar1", "ar2"]);

    assert!(catalog.client().search_artists("nobody", 5).unwrap().is_empty());
}

#[test]
fn test_search_artist_without_match_is_not_found() {
    let catalog = FakeCatalog::default().artist("ar1", "Ngot").catalog();

    match catalog.client().search_artist("Nobody Here") {
        Err(Error::NotFound { kind, query }) => {
            assert_eq!(kind, "artist");
            assert_eq!(query, "Nobody Here");
        }
        other => panic!("expected not found, got {other:?}"),
    }
}

#[test]
fn test_release_counts() {
    let catalog = FakeCatalog::default()
        .album("ar1", "a1", "album", "2001", &[])
        .album("ar1", "a2", "album", "2002", &[])
        .album("ar1", "s1", "single", "2003", &[])
        .catalog();

    let counts = catalog.release_counts("ar1").unwrap();
    assert_eq!(counts.albums, 2);
    assert_eq!(counts.singles, 1);
    assert_eq!(counts.compilations, 0);
    assert_eq!(catalog.client().transport().requests_matching("limit=1&"), 3);
}

#[test]
fn test_top_tracks_of_artist() {
    let catalog = two_album_artist()
        .top_tracks("ar1", &["t5", "t1"])
        .catalog();

    let tracks = catalog.top_tracks_of_artist("ar1", "VN").unwrap();
    assert_eq!(tracks.len(), 2);
    assert_eq!(tracks[0].uri, "spotify:track:t5");
    assert_eq!(tracks[0].popularity, Some(80));
    assert_eq!(tracks[0].album, "Album al2");
    assert_eq!(tracks[0].release_year, Some(2019));
    assert_eq!(tracks[1].artists, vec!["Artist", "Guest"]);

    let requests = catalog.client().transport().requests.borrow();
    assert!(requests[0].contains("market=VN"));
}

#[test]
fn test_unknown_artist_has_no_tracks() {
    let catalog = two_album_artist().catalog();

    assert!(catalog.tracks_of_artist("nobody", false).unwrap().is_empty());
    assert!(catalog.track_ids_of_artist("nobody").unwrap().is_empty());
}
