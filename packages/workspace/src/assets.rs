//! Asset host contract with caller-side upload validation.
//!
//! Format and size constraints are enforced before any network call is
//! attempted, so a rejected upload never reaches the host.

use serde::{Deserialize, Serialize};
use softworks_content::ImageRef;
use thiserror::Error;
use tokio::sync::RwLock;

/// Upper bound on upload size: 10 MiB.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Image formats the storefront accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageFormat {
    Png,
    Jpeg,
    Gif,
    Webp,
}

impl ImageFormat {
    /// Sniff the format from magic bytes. `None` for anything outside the
    /// accepted set.
    pub fn detect(bytes: &[u8]) -> Option<Self> {
        if bytes.starts_with(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]) {
            Some(ImageFormat::Png)
        } else if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
            Some(ImageFormat::Jpeg)
        } else if bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a") {
            Some(ImageFormat::Gif)
        } else if bytes.len() >= 12 && bytes.starts_with(b"RIFF") && bytes[8..12] == *b"WEBP" {
            Some(ImageFormat::Webp)
        } else {
            None
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Jpeg => "jpg",
            ImageFormat::Gif => "gif",
            ImageFormat::Webp => "webp",
        }
    }
}

#[derive(Error, Debug)]
pub enum AssetError {
    #[error("Upload is {size} bytes, over the 10 MiB limit")]
    TooLarge { size: usize },

    #[error("Unsupported image format")]
    UnsupportedFormat,

    #[error("Host error: {0}")]
    Host(String),
}

/// Public result of a successful upload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadedAsset {
    pub url: String,
    pub width: u32,
    pub height: u32,
    pub format: ImageFormat,
}

impl UploadedAsset {
    /// Bridge into the content model's image reference.
    pub fn into_image_ref(self, alt: Option<String>) -> ImageRef {
        ImageRef {
            url: self.url,
            width: self.width,
            height: self.height,
            alt,
        }
    }
}

/// Check size and format before handing bytes to a host.
pub fn validate_upload(bytes: &[u8]) -> Result<ImageFormat, AssetError> {
    if bytes.len() > MAX_UPLOAD_BYTES {
        return Err(AssetError::TooLarge { size: bytes.len() });
    }
    ImageFormat::detect(bytes).ok_or(AssetError::UnsupportedFormat)
}

/// Accepts image bytes, returns a public URL plus metadata.
pub trait AssetHost {
    fn upload(
        &self,
        bytes: &[u8],
        folder: &str,
    ) -> impl std::future::Future<Output = Result<UploadedAsset, AssetError>> + Send;
}

/// In-memory asset host for tests. Validates like a real caller would,
/// then fabricates a URL. Dimension probing is the real host's concern,
/// so uploads report zero dimensions here.
#[derive(Debug, Default)]
pub struct MemoryAssetHost {
    uploaded: RwLock<Vec<String>>,
}

impl MemoryAssetHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// URLs handed out so far, in upload order.
    pub async fn uploaded(&self) -> Vec<String> {
        self.uploaded.read().await.clone()
    }
}

impl AssetHost for MemoryAssetHost {
    async fn upload(&self, bytes: &[u8], folder: &str) -> Result<UploadedAsset, AssetError> {
        let format = validate_upload(bytes)?;

        let mut uploaded = self.uploaded.write().await;
        let url = format!(
            "mem://{}/{}.{}",
            folder,
            uploaded.len() + 1,
            format.extension()
        );
        uploaded.push(url.clone());

        Ok(UploadedAsset {
            url,
            width: 0,
            height: 0,
            format,
        })
    }
}
