use std::collections::BTreeMap;

use reqwest::blocking::Client;

use crate::error::TransportError;

/// Header name to value mapping attached to every request.
pub type Headers = BTreeMap<String, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// A request as seen by a [`Transport`]. Form fields are only sent for POST.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: Method,
    pub url: String,
    pub headers: Headers,
    pub form: Vec<(String, String)>,
}

impl Request {
    pub fn get(url: impl Into<String>, headers: Headers) -> Self {
        Request {
            method: Method::Get,
            url: url.into(),
            headers,
            form: Vec::new(),
        }
    }

    pub fn post_form(url: impl Into<String>, headers: Headers, form: &[(&str, &str)]) -> Self {
        Request {
            method: Method::Post,
            url: url.into(),
            headers,
            form: form
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub body: String,
}

impl Response {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Response {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Blocking request/response capability the client is built on.
///
/// Non-2xx statuses are not errors at this level; they are returned as a
/// [`Response`] and interpreted by the caller. `Err` is reserved for requests
/// that produced no response at all.
#[cfg_attr(test, mockall::automock)]
pub trait Transport {
    fn send(&self, request: &Request) -> Result<Response, TransportError>;
}

impl<F> Transport for F
where
    F: Fn(&Request) -> Result<Response, TransportError>,
{
    fn send(&self, request: &Request) -> Result<Response, TransportError> {
        self(request)
    }
}

/// [`Transport`] backed by a blocking `reqwest` client.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        HttpTransport {
            client: Client::new(),
        }
    }
}

impl Transport for HttpTransport {
    fn send(&self, request: &Request) -> Result<Response, TransportError> {
        let mut builder = match request.method {
            Method::Get => self.client.get(&request.url),
            Method::Post => self.client.post(&request.url).form(&request.form),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = builder.send()?;
        let status = response.status().as_u16();
        let body = response.text()?;

        Ok(Response { status, body })
    }
}
