use reqwest::Url;
use serde::de::DeserializeOwned;

use crate::{
    config::Config,
    error::{Error, FetchError, FetchErrorKind},
    spotify::{
        auth::{AuthProvider, Token, get_auth_header},
        transport::{Headers, Request, Transport},
    },
};

/// Authenticated access to the Web API over a [`Transport`].
///
/// Each client carries its own bearer headers; there is no shared state
/// between clients.
pub struct SpotifyClient<T: Transport> {
    transport: T,
    api_url: String,
    headers: Headers,
}

impl<T: Transport> SpotifyClient<T> {
    pub fn new(transport: T, api_url: impl Into<String>, token: &Token) -> Self {
        SpotifyClient {
            transport,
            api_url: api_url.into().trim_end_matches('/').to_string(),
            headers: get_auth_header(token),
        }
    }

    /// Fetches a fresh token with the configured credentials and returns a
    /// client ready for use.
    pub fn connect(transport: T, config: &Config) -> Result<Self, Error> {
        let provider = AuthProvider::new(config.credentials.clone(), &config.token_url);
        let token = provider.get_token(&transport)?;
        Ok(Self::new(transport, &config.api_url, &token))
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// GETs `path` relative to the API root and decodes the JSON body.
    ///
    /// `offset` only annotates the error when the request belongs to a
    /// paginated walk.
    pub(crate) fn get_json<R: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
        offset: Option<u32>,
    ) -> Result<R, FetchError> {
        let url = self.endpoint(path, params).map_err(|e| {
            FetchError::new(
                format!("{}/{}", self.api_url, path.trim_start_matches('/')),
                offset,
                FetchErrorKind::InvalidUrl(e),
            )
        })?;
        log::debug!("GET {}", url);

        let response = self
            .transport
            .send(&Request::get(url.as_str(), self.headers.clone()))
            .map_err(|e| FetchError::new(url.as_str(), offset, FetchErrorKind::Transport(e.0)))?;
        if !response.is_success() {
            return Err(FetchError::new(
                url.as_str(),
                offset,
                FetchErrorKind::Status(response.status),
            ));
        }

        serde_json::from_str(&response.body).map_err(|e| {
            FetchError::new(url.as_str(), offset, FetchErrorKind::Decode(e.to_string()))
        })
    }

    fn endpoint(&self, path: &str, params: &[(&str, String)]) -> Result<Url, String> {
        let base = format!("{}/{}", self.api_url, path.trim_start_matches('/'));
        let url = if params.is_empty() {
            Url::parse(&base)
        } else {
            Url::parse_with_params(&base, params.iter().map(|(k, v)| (*k, v.as_str())))
        };
        url.map_err(|e| e.to_string())
    }
}
