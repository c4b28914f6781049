// src/jobs/client.rs
use super::JobListing;
use anyhow::{Context, Result};
use reqwest::Client;
use thiserror::Error;
use tracing::{info, warn};

/// A page fetch that produced no usable data.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("job API returned HTTP {0}")]
    Status(u16),
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
}

impl FetchError {
    /// Upstream HTTP status code, when the server answered at all.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            FetchError::Status(code) => Some(*code),
            FetchError::Http(e) => e.status().map(|s| s.as_u16()),
        }
    }
}

/// Client for the job board's paginated `get-jobs` endpoint.
pub struct JobsClient {
    client: Client,
    base_url: String,
    api_key: String,
    limit: u32,
}

impl JobsClient {
    pub fn new(base_url: &str, api_key: String, limit: u32) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            limit,
        })
    }

    fn page_url(&self, page: u32) -> String {
        format!(
            "{}/api/get-jobs?limit={}&page={}",
            self.base_url, self.limit, page
        )
    }

    /// Fetches one page of listings. One request, no retry: a non-2xx
    /// answer or a transport failure comes back as a [`FetchError`] and
    /// the caller decides what the user sees.
    pub async fn fetch_page(&self, page: u32) -> Result<Vec<JobListing>, FetchError> {
        let url = self.page_url(page);
        info!("Fetching job listings page {}", page);

        let response = self
            .client
            .get(&url)
            .header("api-key", &self.api_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let listings = response.json::<Vec<JobListing>>().await?;
        info!("Page {} returned {} listings", page, listings.len());
        Ok(listings)
    }

    /// Fetches pages `1..=max_pages` sequentially and concatenates them.
    ///
    /// A failed page is logged and skipped, never fatal. Overlapping pages
    /// are concatenated as-is; there is no cross-page deduplication.
    pub async fn fetch_all(&self, max_pages: u32) -> Vec<JobListing> {
        let mut all = Vec::new();
        for page in 1..=max_pages {
            match self.fetch_page(page).await {
                Ok(mut listings) => all.append(&mut listings),
                Err(e) => warn!("Skipping page {}: {}", page, e),
            }
        }
        info!("Fetched {} listings across {} pages", all.len(), max_pages);
        all
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    fn test_client() -> JobsClient {
        JobsClient::new("https://api.example.com/", "k".to_string(), 30).unwrap()
    }

    /// Minimal job API stand-in: answers 503 for page 2, a one-listing
    /// JSON array for any other page.
    async fn serve_pages(listener: TcpListener) {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                return;
            };
            let mut request = String::new();
            let mut buf = [0u8; 1024];
            loop {
                let Ok(n) = socket.read(&mut buf).await else {
                    return;
                };
                if n == 0 {
                    break;
                }
                request.push_str(&String::from_utf8_lossy(&buf[..n]));
                if request.contains("\r\n\r\n") {
                    break;
                }
            }

            let response = if request.contains("page=2") {
                "HTTP/1.1 503 Service Unavailable\r\nContent-Length: 0\r\nConnection: close\r\n\r\n"
                    .to_string()
            } else {
                let body = if request.contains("page=1") {
                    r#"[{"id":1,"title":"Backend Developer","url":"https://example.com/1"}]"#
                } else {
                    r#"[{"id":3,"title":"Data Scientist","url":"https://example.com/3"}]"#
                };
                format!(
                    "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    body.len(),
                    body
                )
            };
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        }
    }

    async fn local_client() -> JobsClient {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(serve_pages(listener));
        JobsClient::new(&format!("http://{}", addr), "k".to_string(), 30).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_all_skips_failed_page_and_continues() {
        let client = local_client().await;
        let all = client.fetch_all(3).await;

        // Page 2 answered 503; pages 1 and 3 still land, in order.
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, 1);
        assert_eq!(all[1].id, 3);
    }

    #[tokio::test]
    async fn test_fetch_page_surfaces_upstream_status() {
        let client = local_client().await;
        let err = client.fetch_page(2).await.unwrap_err();
        assert!(matches!(err, FetchError::Status(503)));
    }

    #[test]
    fn test_page_url_carries_limit_and_page() {
        let client = test_client();
        assert_eq!(
            client.page_url(4),
            "https://api.example.com/api/get-jobs?limit=30&page=4"
        );
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = test_client();
        assert!(!client.page_url(1).contains("com//"));
    }

    #[test]
    fn test_status_code_of_http_error() {
        let err = FetchError::Status(503);
        assert_eq!(err.status_code(), Some(503));
    }
}
