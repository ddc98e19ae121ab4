// SPDX-License-Identifier: MPL-2.0
//! Where catalog data files come from.
//!
//! The bundled dataset is compiled into the binary; a directory on disk can
//! replace it (`--data-dir`, `CABINET_DATA_DIR` or `[catalog] data_dir`).

use super::CatalogError;
use rust_embed::RustEmbed;
use std::path::PathBuf;

#[derive(RustEmbed)]
#[folder = "assets/data/"]
struct BundledData;

/// Read-only access to the catalog data layout.
///
/// Paths are relative and `/`-separated (`sources/flea.json`).
pub trait DataSource: Send + Sync {
    /// Returns the raw bytes of a file, or [`CatalogError::MissingFile`].
    fn read(&self, path: &str) -> Result<Vec<u8>, CatalogError>;

    /// Lists the `.json` file names directly inside `dir`, sorted.
    /// A missing directory lists as empty.
    fn list_json(&self, dir: &str) -> Result<Vec<String>, CatalogError>;

    /// Human-readable origin, for logs.
    fn describe(&self) -> String;
}

/// The dataset shipped inside the binary.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbeddedData;

impl DataSource for EmbeddedData {
    fn read(&self, path: &str) -> Result<Vec<u8>, CatalogError> {
        BundledData::get(path)
            .map(|file| file.data.into_owned())
            .ok_or_else(|| CatalogError::MissingFile(path.to_string()))
    }

    fn list_json(&self, dir: &str) -> Result<Vec<String>, CatalogError> {
        let prefix = format!("{}/", dir.trim_end_matches('/'));
        let mut names: Vec<String> = BundledData::iter()
            .filter_map(|file| {
                let rest = file.strip_prefix(&prefix)?;
                (!rest.contains('/') && rest.ends_with(".json")).then(|| rest.to_string())
            })
            .collect();
        names.sort();
        Ok(names)
    }

    fn describe(&self) -> String {
        "bundled data".to_string()
    }
}

/// A data directory on disk with the same layout as the bundled dataset.
#[derive(Debug, Clone)]
pub struct DirectoryData {
    root: PathBuf,
}

impl DirectoryData {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        path.split('/')
            .filter(|segment| !segment.is_empty())
            .fold(self.root.clone(), |acc, segment| acc.join(segment))
    }
}

impl DataSource for DirectoryData {
    fn read(&self, path: &str) -> Result<Vec<u8>, CatalogError> {
        match std::fs::read(self.resolve(path)) {
            Ok(bytes) => Ok(bytes),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                Err(CatalogError::MissingFile(path.to_string()))
            }
            Err(err) => Err(CatalogError::read(path, &err)),
        }
    }

    fn list_json(&self, dir: &str) -> Result<Vec<String>, CatalogError> {
        let entries = match std::fs::read_dir(self.resolve(dir)) {
            Ok(entries) => entries,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(CatalogError::read(dir, &err)),
        };

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|err| CatalogError::read(dir, &err))?;
            let is_file = entry.file_type().map(|t| t.is_file()).unwrap_or(false);
            let name = entry.file_name().to_string_lossy().into_owned();
            if is_file && name.ends_with(".json") {
                names.push(name);
            }
        }
        names.sort();
        Ok(names)
    }

    fn describe(&self) -> String {
        self.root.display().to_string()
    }
}
