use anyhow::{Context, Result};
use futures::stream::{FuturesOrdered, StreamExt};
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, warn};

use super::{placeholder_url, thumbnail_url};
use crate::config::ThumbnailConfig;

/// What a card should display in its image slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Thumbnail {
    Remote {
        url: String,
        content_type: String,
        size: usize,
    },
    Placeholder {
        url: String,
    },
}

impl Thumbnail {
    pub fn url(&self) -> &str {
        match self {
            Thumbnail::Remote { url, .. } | Thumbnail::Placeholder { url } => url,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Thumbnail::Placeholder { .. })
    }
}

/// Create the HTTP client used for screenshot requests
pub fn create_client(config: &ThumbnailConfig) -> Result<Client> {
    // rustls 0.23+ needs a process-wide provider; a second install is a no-op error
    let _ = rustls::crypto::ring::default_provider().install_default();

    Client::builder()
        .timeout(config.timeout_duration()?)
        .user_agent(concat!("showcase/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("Failed to create HTTP client")
}

/// Request a screenshot once; on any failure fall back to the placeholder.
///
/// No retry and no caching. Failures are logged, never returned.
pub async fn fetch_thumbnail(
    client: &Client,
    config: &ThumbnailConfig,
    title: &str,
    url: &str,
) -> Thumbnail {
    let remote = thumbnail_url(config, url);
    match try_fetch(client, &remote).await {
        Ok((content_type, size)) => {
            debug!(url = %remote, size, "fetched thumbnail");
            Thumbnail::Remote {
                url: remote,
                content_type,
                size,
            }
        }
        Err(e) => {
            warn!(url = %remote, error = %format!("{:#}", e), "thumbnail unavailable, using placeholder");
            Thumbnail::Placeholder {
                url: placeholder_url(config, title),
            }
        }
    }
}

/// Fetch thumbnails for many `(title, url)` cards concurrently, keeping order.
pub async fn fetch_thumbnails(
    client: &Client,
    config: &ThumbnailConfig,
    cards: &[(&str, &str)],
) -> Vec<Thumbnail> {
    let mut futures = FuturesOrdered::new();
    for (title, url) in cards {
        futures.push_back(fetch_thumbnail(client, config, title, url));
    }
    futures.collect().await
}

async fn try_fetch(client: &Client, url: &str) -> Result<(String, usize)> {
    let response = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("Request to {} failed", url))?
        .error_for_status()
        .context("Screenshot service returned an error status")?;

    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    if !content_type.starts_with("image/") {
        anyhow::bail!("Expected an image, got content type '{}'", content_type);
    }

    let body = response
        .bytes()
        .await
        .context("Failed to read screenshot body")?;
    Ok((content_type, body.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve a single canned HTTP response on a random local port
    async fn serve_once(content_type: &'static str, status: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            if let Ok((mut socket, _)) = listener.accept().await {
                let mut buf = [0u8; 1024];
                let _ = socket.read(&mut buf).await;
                let body = b"PNGDATA";
                let head = format!(
                    "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                    status,
                    content_type,
                    body.len()
                );
                let _ = socket.write_all(head.as_bytes()).await;
                let _ = socket.write_all(body).await;
            }
        });
        format!("http://{}", addr)
    }

    fn config_for(service: String) -> ThumbnailConfig {
        ThumbnailConfig {
            service,
            timeout: "5s".to_string(),
            ..ThumbnailConfig::default()
        }
    }

    #[tokio::test]
    async fn test_fetch_image_success() {
        let config = config_for(serve_once("image/png", "200 OK").await);
        let client = create_client(&config).unwrap();

        let thumb = fetch_thumbnail(&client, &config, "Demo", "https://vercel.com").await;
        match thumb {
            Thumbnail::Remote { url, content_type, size } => {
                assert!(url.ends_with("/noanimate/vercel.com"));
                assert_eq!(content_type, "image/png");
                assert_eq!(size, 7);
            }
            other => panic!("expected remote thumbnail, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_non_image_falls_back() {
        let config = config_for(serve_once("text/html", "200 OK").await);
        let client = create_client(&config).unwrap();

        let thumb = fetch_thumbnail(&client, &config, "Demo Card", "https://vercel.com").await;
        assert!(thumb.is_placeholder());
        assert_eq!(
            thumb.url(),
            "/placeholder.svg?height=600&width=800&text=Demo%20Card"
        );
    }

    #[tokio::test]
    async fn test_error_status_falls_back() {
        let config = config_for(serve_once("image/png", "500 Internal Server Error").await);
        let client = create_client(&config).unwrap();

        let thumb = fetch_thumbnail(&client, &config, "Demo", "https://vercel.com").await;
        assert!(thumb.is_placeholder());
    }

    #[tokio::test]
    async fn test_unreachable_service_falls_back() {
        // Bind then drop to get a port nothing listens on
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let config = config_for(format!("http://{}", addr));
        let client = create_client(&config).unwrap();
        let thumbs = fetch_thumbnails(
            &client,
            &config,
            &[("First", "https://a.dev"), ("Second", "https://b.dev")],
        )
        .await;

        assert_eq!(thumbs.len(), 2);
        assert!(thumbs.iter().all(Thumbnail::is_placeholder));
        assert!(thumbs[0].url().ends_with("text=First"));
        assert!(thumbs[1].url().ends_with("text=Second"));
    }
}
