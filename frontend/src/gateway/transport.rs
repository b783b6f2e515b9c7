use crate::error::RemoteError;
use async_trait::async_trait;
use gloo_net::http::Request;

/// Status and raw body of a gateway reply.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Moves one JSON POST to the gateway and back.
///
/// Only failures that prevent an HTTP reply are errors here; non-2xx
/// statuses come back as a normal [`HttpReply`].
#[async_trait(?Send)]
pub trait Transport {
    async fn post_json(&self, url: &str, body: String) -> Result<HttpReply, RemoteError>;
}

/// `fetch`-backed transport used in the browser.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BrowserTransport;

#[async_trait(?Send)]
impl Transport for BrowserTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<HttpReply, RemoteError> {
        let response = Request::post(url)
            .header("Content-Type", "application/json")
            .body(body)
            .map_err(|e| RemoteError::InvalidRequest(format!("Request error: {e}")))?
            .send()
            .await
            .map_err(|e| RemoteError::NetworkFailure(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| RemoteError::NetworkFailure(format!("Failed to read body: {e}")))?;

        Ok(HttpReply { status, body })
    }
}

#[cfg(feature = "native")]
pub use native::ReqwestTransport;

#[cfg(feature = "native")]
mod native {
    use super::{HttpReply, Transport};
    use crate::error::RemoteError;
    use async_trait::async_trait;
    use reqwest::header::CONTENT_TYPE;

    /// Transport for running the client outside the browser.
    #[derive(Debug, Clone, Default)]
    pub struct ReqwestTransport {
        client: reqwest::Client,
    }

    impl ReqwestTransport {
        pub fn new(client: reqwest::Client) -> Self {
            Self { client }
        }
    }

    #[async_trait(?Send)]
    impl Transport for ReqwestTransport {
        async fn post_json(&self, url: &str, body: String) -> Result<HttpReply, RemoteError> {
            let response = self
                .client
                .post(url)
                .header(CONTENT_TYPE, "application/json")
                .body(body)
                .send()
                .await
                .map_err(|e| RemoteError::NetworkFailure(e.to_string()))?;

            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .map_err(|e| RemoteError::NetworkFailure(format!("Failed to read body: {e}")))?;

            Ok(HttpReply { status, body })
        }
    }
}
