//! The single HTTP GET of a check.
//!
//! Transport failures are not errors of the fetcher: they become a
//! [`FetchOutcome::TransportError`] the classifier reports as `UNKNOWN`.
//! The response, and the connection behind it, is dropped before
//! [`Fetcher::fetch`] returns.
use std::sync::Arc;

use reqwest::header::LAST_MODIFIED;
use reqwest::{Client as HttpClient, Response};
use thiserror::Error;
use tracing::{debug, instrument, trace};

use super::outcome::{Body, FetchOutcome, HttpResponse};

/// Value of the `User-Agent` request header.
pub const USER_AGENT: &str = concat!("last-modified-check/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("failed to build the http client: {}", describe(.err.as_ref()))]
    ClientBuildingError { err: Arc<reqwest::Error> },
}

pub struct Fetcher {
    client: HttpClient,
}

impl Fetcher {
    /// Builds a fetcher with the client defaults: redirects are followed and
    /// no timeout is set.
    ///
    /// # Errors
    ///
    /// Will return an error if the TLS backend cannot be initialized.
    pub fn new() -> Result<Self, Error> {
        let client = HttpClient::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| Error::ClientBuildingError { err: e.into() })?;

        Ok(Self { client })
    }

    /// Sends a GET to `url` and reads the whole response.
    #[instrument(skip(self))]
    pub async fn fetch(&self, url: &str) -> FetchOutcome {
        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(err) => {
                let description = describe(&err);
                debug!(%description, "request failed");
                return FetchOutcome::TransportError(description);
            }
        };

        read_response(response).await.into()
    }
}

async fn read_response(response: Response) -> HttpResponse {
    let status = response.status().as_u16();

    let last_modified = response
        .headers()
        .get(LAST_MODIFIED)
        .and_then(|value| value.to_str().ok())
        .map(ToOwned::to_owned);

    debug!(status, ?last_modified, "response received");

    let body = match response.bytes().await {
        Ok(bytes) => {
            trace!(len = bytes.len(), "body read");
            Body::Received(bytes.to_vec())
        }
        Err(err) => Body::Unreadable(describe(&err)),
    };

    HttpResponse {
        status,
        last_modified,
        body,
    }
}

/// Joins an error with all its sources.
///
/// `reqwest` keeps the useful part ("connection refused", "dns error", ...)
/// in the source chain, not in its own message.
fn describe(err: &(dyn std::error::Error + 'static)) -> String {
    let mut description = err.to_string();
    let mut source = err.source();

    while let Some(cause) = source {
        let cause_description = cause.to_string();
        if !description.contains(&cause_description) {
            description = format!("{description}: {cause_description}");
        }
        source = cause.source();
    }

    description
}
