//! # 📡 THE HTTP BACKEND
//!
//! *Previously, on bkx...*
//!
//! 🎬 The browser once did `fetch('/ebooks-data.json')` and hoped for the best.
//! We do the same thing, in Rust, with timeouts, and with an error message
//! that tells you which URL let you down.
//!
//! ⚠️ No retries. One shot. If it misses, the repository logs it and shows an
//! empty catalog. That's the deal the catalog has always had with its data.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::backends::Source;

/// 📡 Where the JSON lives on the web, and how long we're willing to wait for it.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct HttpSourceConfig {
    /// Full URL, scheme and all. Yes, all of it.
    pub url: String,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

// 🔧 10 second connect timeout: if the server can't handshake in 10 seconds, it's not having a good time.
fn default_connect_timeout_secs() -> u64 {
    10
}

// 🔧 30 seconds for the whole response. A big catalog is a few MB, not a feature film.
fn default_timeout_secs() -> u64 {
    30
}

impl HttpSourceConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            connect_timeout_secs: default_connect_timeout_secs(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// 📡 One GET, one body, done.
#[derive(Debug)]
pub(crate) struct HttpSource {
    client: reqwest::Client,
    source_config: HttpSourceConfig,
}

impl HttpSource {
    pub(crate) fn new(source_config: HttpSourceConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(source_config.connect_timeout_secs))
            .timeout(Duration::from_secs(source_config.timeout_secs))
            .build()
            .context("💀 The HTTP client refused to be born. The TLS stack wept. Probably a missing TLS cert or a cursed system config. Either way: tragic.")?;
        Ok(Self {
            client,
            source_config,
        })
    }
}

#[async_trait]
impl Source for HttpSource {
    async fn fetch(&mut self) -> Result<String> {
        let url = &self.source_config.url;
        debug!("📡 GET {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .context(format!("💀 Could not reach '{url}'. Is the server up? Is the URL right? Is the Wi-Fi just decorative?"))?
            .error_for_status()
            .context(format!("💀 '{url}' answered, but not with good news"))?;

        let body = response
            .text()
            .await
            .context(format!("💀 '{url}' started sending the catalog and then stopped mid-sentence"))?;
        debug!("📡 received {} bytes from {}", body.len(), url);
        Ok(body)
    }

    fn label(&self) -> String {
        self.source_config.url.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn the_one_where_the_server_hands_over_the_catalog() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ebooks-data.json"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(r#"[{"id":1,"title":"Zeta","author":"Adams"}]"#),
            )
            .expect(1)
            .mount(&server)
            .await;

        let url = format!("{}/ebooks-data.json", server.uri());
        let mut source = HttpSource::new(HttpSourceConfig::new(url.clone())).expect("💀 client");
        let body = source.fetch().await.expect("💀 the mock server is right there");
        assert!(body.contains("Adams"));
        assert_eq!(source.label(), url);
    }

    #[tokio::test]
    async fn the_one_where_the_server_has_a_bad_day() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let url = format!("{}/ebooks-data.json", server.uri());
        let mut source = HttpSource::new(HttpSourceConfig::new(url)).expect("💀 client");
        let err = source.fetch().await.expect_err("💀 a 500 is not a catalog");
        assert!(err.to_string().contains("not with good news"));
    }

    #[tokio::test]
    async fn the_one_where_the_server_takes_a_nap_and_we_stop_waiting() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("[]")
                    .set_delay(Duration::from_secs(5)),
            )
            .mount(&server)
            .await;

        let source_config = HttpSourceConfig {
            timeout_secs: 1,
            ..HttpSourceConfig::new(format!("{}/ebooks-data.json", server.uri()))
        };
        let mut source = HttpSource::new(source_config).expect("💀 client");
        let err = source
            .fetch()
            .await
            .expect_err("💀 a five second nap against a one second timeout is a miss");
        assert!(err.to_string().contains("Could not reach"));
    }
}
