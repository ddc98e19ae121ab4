// SPDX-License-Identifier: MPL-2.0
//! Asynchronous media fetching.
//!
//! A media URL is one of:
//! - `http://` or `https://`: downloaded with `reqwest`
//! - `file://` or an absolute path: read from disk
//! - anything else: a path relative to the catalog data source
//!   (`images/sources/flea-plate.png`)

use super::image::{decode, ImageData};
use super::model::{self, ModelData};
use crate::catalog::{CatalogError, DataSource};
use crate::error::MediaError;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

/// Where the bytes for a media URL live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaLocation {
    Remote(String),
    File(PathBuf),
    Catalog(String),
}

impl MediaLocation {
    pub fn classify(url: &str) -> Self {
        let lower = url.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            MediaLocation::Remote(url.to_string())
        } else if let Some(path) = url.strip_prefix("file://") {
            MediaLocation::File(PathBuf::from(path))
        } else if Path::new(url).is_absolute() {
            MediaLocation::File(PathBuf::from(url))
        } else {
            MediaLocation::Catalog(url.trim_start_matches("./").to_string())
        }
    }
}

/// Cheap-to-clone handle that loads images and models off the UI thread.
#[derive(Clone)]
pub struct Fetcher {
    client: reqwest::Client,
    data: Arc<dyn DataSource>,
}

impl std::fmt::Debug for Fetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Fetcher")
            .field("data", &self.data.describe())
            .finish_non_exhaustive()
    }
}

impl Fetcher {
    pub fn new(data: Arc<dyn DataSource>, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(concat!("Cabinet/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .unwrap_or_else(|err| {
                tracing::warn!(error = %err, "falling back to default HTTP client");
                reqwest::Client::new()
            });
        Self { client, data }
    }

    /// Points relative URLs at a different data source (after a reload from
    /// another directory).
    pub fn set_data_source(&mut self, data: Arc<dyn DataSource>) {
        self.data = data;
    }

    async fn bytes(&self, url: &str) -> Result<Vec<u8>, MediaError> {
        match MediaLocation::classify(url) {
            MediaLocation::Remote(url) => {
                let response = self
                    .client
                    .get(&url)
                    .send()
                    .await
                    .map_err(|e| MediaError::Request(e.to_string()))?;

                let status = response.status();
                if !status.is_success() {
                    return Err(MediaError::Status(status.as_u16()));
                }

                let body = response
                    .bytes()
                    .await
                    .map_err(|e| MediaError::Request(e.to_string()))?;
                Ok(body.to_vec())
            }
            MediaLocation::File(path) => tokio::fs::read(&path)
                .await
                .map_err(|e| MediaError::Read(e.to_string())),
            MediaLocation::Catalog(path) => {
                let data = Arc::clone(&self.data);
                tokio::task::spawn_blocking(move || data.read(&path))
                    .await
                    .map_err(|e| MediaError::Read(e.to_string()))?
                    .map_err(|e: CatalogError| MediaError::Read(e.to_string()))
            }
        }
    }

    /// Fetches and decodes one image.
    pub async fn load(self, url: String) -> Result<ImageData, MediaError> {
        let bytes = self.bytes(&url).await?;
        tokio::task::spawn_blocking(move || decode(&url, &bytes))
            .await
            .map_err(|e| MediaError::Decode(e.to_string()))?
    }

    /// Fetches and decodes one glTF binary model.
    pub async fn load_model(self, url: String) -> Result<ModelData, MediaError> {
        let bytes = self.bytes(&url).await?;
        tokio::task::spawn_blocking(move || model::decode(&url, &bytes))
            .await
            .map_err(|e| MediaError::Decode(e.to_string()))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{DirectoryData, EmbeddedData};
    use tempfile::tempdir;

    #[test]
    fn classify_remote() {
        assert_eq!(
            MediaLocation::classify("HTTPS://example.org/a.jpg"),
            MediaLocation::Remote("HTTPS://example.org/a.jpg".into())
        );
    }

    #[test]
    fn classify_file_url_and_absolute_path() {
        assert_eq!(
            MediaLocation::classify("file:///tmp/a.png"),
            MediaLocation::File(PathBuf::from("/tmp/a.png"))
        );
        let absolute = std::env::temp_dir().join("a.png");
        assert_eq!(
            MediaLocation::classify(&absolute.to_string_lossy()),
            MediaLocation::File(absolute)
        );
    }

    #[test]
    fn classify_relative_goes_to_catalog() {
        assert_eq!(
            MediaLocation::classify("./images/a.png"),
            MediaLocation::Catalog("images/a.png".into())
        );
    }

    #[tokio::test]
    async fn loads_bundled_image() {
        let fetcher = Fetcher::new(Arc::new(EmbeddedData), Duration::from_secs(1));
        let image = fetcher
            .load("images/sources/flea-plate.png".into())
            .await
            .expect("bundled image should load");
        assert_eq!((image.width, image.height), (480, 360));
    }

    #[tokio::test]
    async fn loads_bundled_models() {
        for url in ["models/camera-obscura.glb", "models/statue-buddha.glb"] {
            let fetcher = Fetcher::new(Arc::new(EmbeddedData), Duration::from_secs(1));
            let model = fetcher
                .load_model(url.into())
                .await
                .expect("bundled model should load");
            assert!(model.triangle_count() > 0, "{url} has no triangles");
            let (min, max) = model.bounds();
            let extent = (0..3).map(|i| max[i] - min[i]).fold(0.0_f32, f32::max);
            assert!((extent - 1.0).abs() < 1e-4, "{url} is not fitted");
        }
    }

    #[tokio::test]
    async fn image_bytes_are_not_a_model() {
        let fetcher = Fetcher::new(Arc::new(EmbeddedData), Duration::from_secs(1));
        let result = fetcher.load_model("images/sources/flea-plate.png".into()).await;
        assert!(matches!(result, Err(MediaError::Decode(_))));
    }

    #[tokio::test]
    async fn missing_catalog_file_is_read_error() {
        let dir = tempdir().unwrap();
        let fetcher = Fetcher::new(Arc::new(DirectoryData::new(dir.path())), Duration::from_secs(1));
        let result = fetcher.load("images/none.png".into()).await;
        assert!(matches!(result, Err(MediaError::Read(_))));
    }

    #[tokio::test]
    async fn undecodable_file_is_decode_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.png");
        std::fs::write(&path, b"nope").unwrap();

        let fetcher = Fetcher::new(Arc::new(EmbeddedData), Duration::from_secs(1));
        let result = fetcher.load(path.to_string_lossy().into_owned()).await;
        assert!(matches!(result, Err(MediaError::Decode(_))));
    }
}
