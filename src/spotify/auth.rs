use std::fmt;

use base64::{Engine, engine::general_purpose::STANDARD};

use crate::{
    config::{CLIENT_ID_VAR, CLIENT_SECRET_VAR, Credentials},
    error::AuthError,
    spotify::transport::{Headers, Request, Transport},
    types::TokenResponse,
};

/// Opaque bearer credential.
///
/// Expiry is not tracked; a fresh token is requested for every run.
#[derive(Clone, PartialEq, Eq)]
pub struct Token(String);

impl Token {
    pub fn new(access_token: impl Into<String>) -> Self {
        Token(access_token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Token(***)")
    }
}

/// Exchanges client credentials for a bearer token.
///
/// Credentials are handed in at construction, typically from
/// [`Config`](crate::config::Config), so several providers with different
/// credentials can coexist in one process.
#[derive(Debug, Clone)]
pub struct AuthProvider {
    credentials: Credentials,
    token_url: String,
}

impl AuthProvider {
    pub fn new(credentials: Credentials, token_url: impl Into<String>) -> Self {
        AuthProvider {
            credentials,
            token_url: token_url.into(),
        }
    }

    /// Requests a token with the client-credentials grant.
    ///
    /// Blank credentials are rejected before the transport is touched.
    pub fn get_token<T: Transport>(&self, transport: &T) -> Result<Token, AuthError> {
        let basic = self.basic_credential()?;

        let mut headers = Headers::new();
        headers.insert("Authorization".to_string(), format!("Basic {basic}"));
        headers.insert(
            "Content-Type".to_string(),
            "application/x-www-form-urlencoded".to_string(),
        );

        let request = Request::post_form(
            &self.token_url,
            headers,
            &[("grant_type", "client_credentials")],
        );
        log::debug!("POST {}", self.token_url);

        let response = transport
            .send(&request)
            .map_err(|e| AuthError::Transport(e.to_string()))?;
        if !response.is_success() {
            return Err(AuthError::Rejected {
                status: response.status,
                body: response.body,
            });
        }

        let token: TokenResponse = serde_json::from_str(&response.body)
            .map_err(|e| AuthError::MalformedResponse(e.to_string()))?;
        if token.access_token.is_empty() {
            return Err(AuthError::MalformedResponse(
                "empty access_token".to_string(),
            ));
        }

        Ok(Token::new(token.access_token))
    }

    fn basic_credential(&self) -> Result<String, AuthError> {
        let client_id = self.credentials.client_id.trim();
        let client_secret = self.credentials.client_secret.trim();
        if client_id.is_empty() {
            return Err(AuthError::MissingCredential(CLIENT_ID_VAR));
        }
        if client_secret.is_empty() {
            return Err(AuthError::MissingCredential(CLIENT_SECRET_VAR));
        }

        Ok(STANDARD.encode(format!("{client_id}:{client_secret}")))
    }
}

/// Wraps a token into the header mapping expected by the Web API.
pub fn get_auth_header(token: &Token) -> Headers {
    let mut headers = Headers::new();
    headers.insert(
        "Authorization".to_string(),
        format!("Bearer {}", token.as_str()),
    );
    headers
}
