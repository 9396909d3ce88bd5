//! HTTP client for the image-URL existence check.
//!
//! The probe is HEAD-only: the body of the remote image is never fetched,
//! only its status and `content-type` are inspected.

use anyhow::{Context, Result};

/// What a HEAD probe against a candidate image URL reported.
#[derive(Debug, Clone)]
pub struct ImageProbe {
    pub ok_status: bool,
    pub content_type: Option<String>,
}

#[derive(Clone)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    /// The client carries no request timeout on purpose: a hanging endpoint
    /// keeps the URL check pending until the remote side settles it.
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    pub async fn probe_image(&self, url: &str) -> Result<ImageProbe> {
        log::debug!("HEAD probe: {}", url);

        let response = self
            .client
            .head(url)
            .send()
            .await
            .with_context(|| format!("HEAD request to {} failed", url))?;

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string());

        log::debug!(
            "HEAD probe settled: status={}, content-type={:?}",
            response.status(),
            content_type
        );

        Ok(ImageProbe {
            ok_status: response.status().is_success(),
            content_type,
        })
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}
