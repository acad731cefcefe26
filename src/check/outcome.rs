//! What the fetcher hands to the classifier.

/// The result of trying to GET the checked URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The request could not be completed (DNS, connection refused, invalid
    /// URL, ...). Holds the error description.
    TransportError(String),
    /// A response was received.
    Response(HttpResponse),
}

/// The parts of an HTTP response the check looks at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    /// Raw value of the `Last-Modified` header, `None` when the header is
    /// absent or not valid visible ASCII.
    pub last_modified: Option<String>,
    pub body: Body,
}

/// The response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    /// The whole body was read.
    Received(Vec<u8>),
    /// Reading the body failed after the headers arrived. Holds the error
    /// description.
    Unreadable(String),
}

impl HttpResponse {
    #[must_use]
    pub fn new(status: u16) -> Self {
        Self {
            status,
            last_modified: None,
            body: Body::Received(Vec::new()),
        }
    }

    #[must_use]
    pub fn with_last_modified(mut self, value: &str) -> Self {
        self.last_modified = Some(value.to_owned());
        self
    }

    #[must_use]
    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Body::Received(body.into());
        self
    }
}

impl From<HttpResponse> for FetchOutcome {
    fn from(response: HttpResponse) -> Self {
        FetchOutcome::Response(response)
    }
}
