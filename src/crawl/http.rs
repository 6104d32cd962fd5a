// src/crawl/http.rs
// =============================================================================
// The HTTP side of the crawler.
//
// HttpClient owns one reqwest::Client for the whole crawl. Everything about
// how we talk to servers is decided here, once, at construction:
// - per-request timeout (a hung server can't stall the crawl)
// - redirect limit
// - user agent
// - whether TLS certificates are checked (--insecure)
//
// Because the insecure flag lives on this client, it only affects the crawl
// that owns it. Nothing global is touched.
// =============================================================================

use reqwest::redirect::Policy;
use reqwest::Client;

use crate::config::CrawlConfig;
use crate::error::{CrawlError, FetchError};

const MAX_REDIRECTS: usize = 10;

#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: Client,
}

impl HttpClient {
    pub fn new(config: &CrawlConfig) -> Result<Self, CrawlError> {
        let inner = Client::builder()
            .timeout(config.timeout)
            .redirect(Policy::limited(MAX_REDIRECTS))
            .user_agent(config.user_agent.as_str())
            .danger_accept_invalid_certs(config.insecure)
            .build()
            .map_err(CrawlError::Client)?;
        Ok(Self { inner })
    }

    // Fetches a web page and returns its HTML content
    //
    // Anything but a 2xx response is a failure; the caller decides whether
    // that failure is fatal (seed page) or just logged (everything else).
    pub async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .inner
            .get(url)
            .send()
            .await
            .map_err(FetchError::from_request)?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }

        response.text().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout
            } else {
                FetchError::Body(e)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config() -> CrawlConfig {
        CrawlConfig {
            timeout: Duration::from_millis(500),
            ..CrawlConfig::default()
        }
    }

    #[tokio::test]
    async fn test_fetch_returns_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/page"))
            .and(header("user-agent", config().user_agent.as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_string("<a href='/x'>x</a>"))
            .mount(&server)
            .await;

        let client = HttpClient::new(&config()).unwrap();
        let body = client.fetch(&format!("{}/page", server.uri())).await.unwrap();
        assert_eq!(body, "<a href='/x'>x</a>");
    }

    #[tokio::test]
    async fn test_non_success_status_is_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = HttpClient::new(&config()).unwrap();
        let result = client.fetch(&format!("{}/missing", server.uri())).await;
        assert!(matches!(result, Err(FetchError::Status(s)) if s.as_u16() == 404));
    }

    #[tokio::test]
    async fn test_slow_server_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
            .mount(&server)
            .await;

        let client = HttpClient::new(&config()).unwrap();
        let result = client.fetch(&server.uri()).await;
        assert!(matches!(result, Err(FetchError::Timeout)));
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        let client = HttpClient::new(&config()).unwrap();
        // port 9 (discard) is essentially never listening on test machines
        let result = client.fetch("http://127.0.0.1:9/").await;
        assert!(matches!(
            result,
            Err(FetchError::Transport(_)) | Err(FetchError::Timeout)
        ));
    }

    #[test]
    fn test_insecure_client_builds() {
        let config = CrawlConfig {
            insecure: true,
            ..CrawlConfig::default()
        };
        assert!(HttpClient::new(&config).is_ok());
    }
}
