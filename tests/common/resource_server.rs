//! An HTTP server serving one canned resource, bound to an ephemeral port.
use std::net::SocketAddr;

use axum::http::{header, HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

pub const RESOURCE_PATH: &str = "/resource.json";
pub const REDIRECT_PATH: &str = "/moved.json";

/// What the server answers on [`RESOURCE_PATH`].
#[derive(Debug, Clone)]
pub struct Resource {
    pub status: StatusCode,
    pub last_modified: Option<String>,
    pub body: String,
}

impl Resource {
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            last_modified: None,
            body: String::new(),
        }
    }

    pub fn json(last_modified: &str, body: &str) -> Self {
        Self::new(StatusCode::OK).with_last_modified(last_modified).with_body(body)
    }

    pub fn with_last_modified(mut self, value: &str) -> Self {
        self.last_modified = Some(value.to_owned());
        self
    }

    pub fn with_body(mut self, body: &str) -> Self {
        self.body = body.to_owned();
        self
    }
}

impl IntoResponse for Resource {
    fn into_response(self) -> Response {
        let mut headers = HeaderMap::new();

        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(value) = self.last_modified {
            headers.insert(
                header::LAST_MODIFIED,
                HeaderValue::from_str(&value).expect("it should be a valid header value"),
            );
        }

        (self.status, headers, self.body).into_response()
    }
}

pub struct Environment {
    pub addr: SocketAddr,
    server: JoinHandle<()>,
}

impl Environment {
    /// Starts serving `resource`.
    ///
    /// # Panics
    ///
    /// Panics if the server cannot bind a local port.
    pub async fn start(resource: Resource) -> Self {
        let app = Router::new()
            .route(
                RESOURCE_PATH,
                get(move || {
                    let resource = resource.clone();
                    async move { resource }
                }),
            )
            .route(REDIRECT_PATH, get(|| async { Redirect::permanent(RESOURCE_PATH) }));

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("it should bind an ephemeral port");

        let addr = listener.local_addr().expect("it should have a local address");

        let server = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("the resource server should keep running");
        });

        Self { addr, server }
    }

    pub fn url(&self) -> String {
        self.url_for(RESOURCE_PATH)
    }

    pub fn url_for(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    pub fn stop(self) {
        self.server.abort();
    }
}

/// A URL on which nothing is listening.
pub async fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("it should bind an ephemeral port");

    let addr = listener.local_addr().expect("it should have a local address");

    drop(listener);

    format!("http://{addr}{RESOURCE_PATH}")
}
