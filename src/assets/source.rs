use std::sync::Arc;

use async_trait::async_trait;
#[cfg(feature = "tokio-runtime")]
use once_cell::sync::Lazy;

use crate::{ResortMapError, Result};

/// Shared async HTTP client for layer artwork and the hover cue.
///
/// No request timeout is set: a load that neither completes nor fails keeps
/// the preload pending.
#[cfg(feature = "tokio-runtime")]
pub(crate) static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(|| {
    reqwest::Client::builder()
        .user_agent(concat!("resortmap/", env!("CARGO_PKG_VERSION")))
        .tcp_keepalive(std::time::Duration::from_secs(30))
        .pool_idle_timeout(std::time::Duration::from_secs(90))
        .pool_max_idle_per_host(16)
        .build()
        .unwrap_or_else(|e| {
            log::warn!("falling back to default HTTP client: {}", e);
            reqwest::Client::new()
        })
});

/// A decoded RGBA8 image ready to be uploaded as a texture.
#[derive(Clone, PartialEq)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Arc<Vec<u8>>,
}

impl std::fmt::Debug for DecodedImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecodedImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.rgba.len())
            .finish()
    }
}

impl DecodedImage {
    /// Decode PNG/JPEG bytes. Fails the same way a browser image element
    /// raises `error` for undecodable content.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let img = image::load_from_memory(bytes).map_err(ResortMapError::from)?;
        let rgba_img = img.to_rgba8();
        let (width, height) = rgba_img.dimensions();

        Ok(Self {
            width,
            height,
            rgba: Arc::new(rgba_img.into_raw()),
        })
    }

    pub fn size(&self) -> [usize; 2] {
        [self.width as usize, self.height as usize]
    }
}

/// Where layer images and the hover cue come from.
///
/// Each call resolves exactly once, with the decoded asset or the reason it
/// could not be loaded.
#[async_trait]
pub trait AssetSource: Send + Sync {
    async fn load_image(&self, url: &str) -> Result<DecodedImage>;

    async fn load_audio(&self, url: &str) -> Result<Arc<Vec<u8>>>;
}

/// Fetches assets over HTTP(S) with the shared client.
///
/// reqwest needs a tokio reactor, so this source only exists with the
/// `tokio-runtime` feature and must be polled from inside a tokio runtime.
#[cfg(feature = "tokio-runtime")]
#[derive(Debug, Clone, Default)]
pub struct HttpAssetSource;

#[cfg(feature = "tokio-runtime")]

impl HttpAssetSource {
    pub fn new() -> Self {
        Self
    }

    async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let resp = HTTP_CLIENT.get(url).send().await.map_err(ResortMapError::from)?;
        if !resp.status().is_success() {
            return Err(
                ResortMapError::Asset(format!("HTTP {} for {}", resp.status(), url)).into(),
            );
        }
        let bytes = resp.bytes().await.map_err(ResortMapError::from)?;
        log::debug!("fetched {} ({} bytes)", url, bytes.len());
        Ok(bytes.to_vec())
    }
}

#[cfg(feature = "tokio-runtime")]
#[async_trait]
impl AssetSource for HttpAssetSource {
    async fn load_image(&self, url: &str) -> Result<DecodedImage> {
        let bytes = self.fetch(url).await?;
        tokio::task::spawn_blocking(move || DecodedImage::decode(&bytes))
            .await
            .map_err(|e| ResortMapError::Asset(format!("decode task failed: {e}")))?
    }

    async fn load_audio(&self, url: &str) -> Result<Arc<Vec<u8>>> {
        self.fetch(url).await.map(Arc::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny_png() -> Vec<u8> {
        let img = image::RgbaImage::from_pixel(3, 2, image::Rgba([23, 123, 97, 255]));
        let mut bytes = Vec::new();
        image::DynamicImage::ImageRgba8(img)
            .write_to(
                &mut std::io::Cursor::new(&mut bytes),
                image::ImageOutputFormat::Png,
            )
            .expect("encode png");
        bytes
    }

    #[test]
    fn test_decode_png() {
        let decoded = DecodedImage::decode(&tiny_png()).expect("valid png");
        assert_eq!(decoded.size(), [3, 2]);
        assert_eq!(decoded.rgba.len(), 3 * 2 * 4);
        assert_eq!(&decoded.rgba[..4], &[23, 123, 97, 255]);
    }

    #[test]
    fn test_decode_garbage_fails() {
        assert!(DecodedImage::decode(b"definitely not an image").is_err());
    }

    #[cfg(feature = "tokio-runtime")]
    #[tokio::test]
    async fn test_http_source_reports_bad_url_as_error() {
        let source = HttpAssetSource::new();
        assert!(source.load_image("not a url").await.is_err());
        assert!(source.load_audio("not a url").await.is_err());
    }
}
