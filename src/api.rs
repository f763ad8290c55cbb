// HTTP client for the remote minification service. One blocking POST per
// call; the response body is taken as the minified source.

use reqwest::blocking::Client;
use serde::Serialize;
use tracing::debug;

use crate::error::{MiniJsError, MiniJsResult};

/// Public endpoint that accepts `input=<source>` and answers with the
/// minified text.
pub const DEFAULT_ENDPOINT: &str = "https://www.toptal.com/developers/javascript-minifier/api/raw";

/// Anything that can turn JavaScript source into minified JavaScript.
pub trait Minifier {
    fn minify(&self, source: &str) -> MiniJsResult<String>;
}

/// Form body sent to the service.
#[derive(Serialize, Debug)]
struct MinifyForm<'a> {
    input: &'a str,
}

/// Blocking client bound to a single endpoint.
#[derive(Clone, Debug)]
pub struct MinifierClient {
    client: Client,
    endpoint: String,
}

impl MinifierClient {
    /// Build a client for `endpoint`. The transport's default timeout applies.
    pub fn new(endpoint: impl Into<String>) -> MiniJsResult<Self> {
        let client = Client::builder()
            .build()
            .map_err(|source| MiniJsError::ClientBuild { source })?;
        Ok(MinifierClient {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Minifier for MinifierClient {
    fn minify(&self, source: &str) -> MiniJsResult<String> {
        debug!(endpoint = %self.endpoint, bytes = source.len(), "posting source for minification");
        let res = self
            .client
            .post(&self.endpoint)
            .form(&MinifyForm { input: source })
            .send()
            .map_err(|source| MiniJsError::RequestFailed { source })?;

        let status = res.status();
        if status.as_u16() >= 400 {
            return Err(MiniJsError::BadStatus { status });
        }

        let body = res
            .text()
            .map_err(|source| MiniJsError::ReadFailed { source })?;
        debug!(%status, bytes = body.len(), "minification response received");
        Ok(body)
    }
}
