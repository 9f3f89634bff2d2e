//! Custom image upload for a collection entry.

use std::path::Path;

use image::ImageFormat;

use crate::api::CollectorApi;
use crate::error::{CollectorError, CollectorResult};
use crate::types::UploadedImage;

/// Extensions offered by the file picker
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp", "gif"];

/// A user-selected image file, read into memory.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalImage {
    pub file_name: String,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

impl LocalImage {
    /// Wrap picked file contents. The MIME type comes from the extension.
    pub fn from_bytes(file_name: impl Into<String>, bytes: Vec<u8>) -> CollectorResult<Self> {
        let file_name = file_name.into();
        let format = ImageFormat::from_path(&file_name)
            .map_err(|_| CollectorError::UnsupportedImage(file_name.clone()))?;

        Ok(Self {
            mime: format.to_mime_type(),
            file_name,
            bytes,
        })
    }

    /// Read an image from disk.
    pub fn from_path(path: &Path) -> CollectorResult<Self> {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| CollectorError::UnsupportedImage(path.display().to_string()))?
            .to_string();
        // Check the extension before touching the file
        ImageFormat::from_path(path).map_err(|_| CollectorError::UnsupportedImage(file_name.clone()))?;

        let bytes = std::fs::read(path)?;
        Self::from_bytes(file_name, bytes)
    }
}

/// Uploader state for one collection entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImageUpload {
    pub file: Option<LocalImage>,
    pub loading: bool,
}

impl ImageUpload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, file: Option<LocalImage>) {
        self.file = file;
    }

    /// Start an upload. `None` when no file is selected.
    pub fn begin(&mut self) -> Option<LocalImage> {
        let file = self.file.clone()?;
        self.loading = true;
        Some(file)
    }

    /// Complete an upload. On success the selection is cleared and the new
    /// custom image URL returned.
    pub fn finish(&mut self, result: CollectorResult<UploadedImage>) -> CollectorResult<String> {
        self.loading = false;
        let uploaded = result?;
        self.file = None;
        Ok(uploaded.custom_image_url)
    }

    /// Run a full upload cycle. `Ok(None)` when nothing was selected.
    pub async fn run<A: CollectorApi>(
        &mut self,
        api: &A,
        entry_id: &str,
    ) -> CollectorResult<Option<String>> {
        let Some(file) = self.begin() else {
            return Ok(None);
        };
        let result = api.upload_custom_image(entry_id, &file).await;
        self.finish(result).map(Some)
    }
}
