//! [`ImageSource`] that downloads the image and sniffs its format.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

use crate::error::ImageLoadError;
use crate::traits::{Headers, HttpClient, ImageSource};

/// Loads images over any [`HttpClient`].
///
/// A load succeeds when the response is 2xx and the body starts with the
/// signature of a format the `image` crate recognizes.
#[derive(Clone)]
pub struct HttpImageSource {
    client: Arc<dyn HttpClient>,
}

impl HttpImageSource {
    pub fn new(client: Arc<dyn HttpClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ImageSource for HttpImageSource {
    async fn load(&self, url: &str) -> Result<(), ImageLoadError> {
        let response = self
            .client
            .get(url, &Headers::new())
            .await
            .map_err(|e| ImageLoadError::Transport {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        if !response.is_success() {
            return Err(ImageLoadError::Status {
                url: url.to_string(),
                status: response.status,
            });
        }

        let format = image::guess_format(&response.body).map_err(|_| {
            ImageLoadError::UnrecognizedFormat {
                url: url.to_string(),
            }
        })?;
        debug!(url, ?format, bytes = response.body.len(), "image preloaded");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse};
    use crate::traits::{HttpError, Response};
    use bytes::Bytes;

    const PNG_SIGNATURE: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0];

    fn source(response: MockResponse) -> HttpImageSource {
        let client = MockHttpClient::new();
        client.set_default_response(response);
        HttpImageSource::new(Arc::new(client))
    }

    #[tokio::test]
    async fn test_png_loads() {
        let src = source(MockResponse::Success(Response::new(
            200,
            Bytes::from_static(PNG_SIGNATURE),
        )));
        assert!(src.load("http://x/Background.png").await.is_ok());
    }

    #[tokio::test]
    async fn test_not_found() {
        let src = source(MockResponse::Success(Response::new(404, Bytes::new())));
        assert_eq!(
            src.load("http://x/Background.png").await,
            Err(ImageLoadError::Status {
                url: "http://x/Background.png".into(),
                status: 404
            })
        );
    }

    #[tokio::test]
    async fn test_html_body_is_not_an_image() {
        let src = source(MockResponse::Success(Response::new(
            200,
            Bytes::from("<!doctype html>"),
        )));
        assert!(matches!(
            src.load("http://x/Background.png").await,
            Err(ImageLoadError::UnrecognizedFormat { .. })
        ));
    }

    #[tokio::test]
    async fn test_transport_failure() {
        let src = source(MockResponse::Error(HttpError::ConnectionFailed(
            "refused".into(),
        )));
        assert!(matches!(
            src.load("http://x/Background.png").await,
            Err(ImageLoadError::Transport { .. })
        ));
    }
}
