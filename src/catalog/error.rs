// SPDX-License-Identifier: MPL-2.0
//! Errors raised while loading a catalog snapshot.
//!
//! Lookups never fail: a missing slug is an empty result. These variants only
//! come out of [`Catalog::load`](super::Catalog::load) and
//! [`Catalog::reload`](super::Catalog::reload).

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// A data file exists but could not be read.
    #[error("cannot read {path}: {reason}")]
    Read { path: String, reason: String },

    /// A data file is not valid JSON for its record type.
    #[error("cannot parse {path}: {reason}")]
    Parse { path: String, reason: String },

    /// Two records in the same collection share a slug.
    #[error("duplicate slug '{slug}' in {collection}")]
    DuplicateSlug {
        collection: &'static str,
        slug: String,
    },

    /// Two records in the same collection share an id.
    #[error("duplicate id '{id}' in {collection}")]
    DuplicateId { collection: &'static str, id: String },

    /// An index lists a file that is not present in the data source.
    #[error("missing data file {0}")]
    MissingFile(String),
}

impl CatalogError {
    pub(crate) fn parse(path: &str, err: &serde_json::Error) -> Self {
        CatalogError::Parse {
            path: path.to_string(),
            reason: err.to_string(),
        }
    }

    pub(crate) fn read(path: &str, err: &std::io::Error) -> Self {
        CatalogError::Read {
            path: path.to_string(),
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_slug_names_collection_and_slug() {
        let err = CatalogError::DuplicateSlug {
            collection: "exhibition objects",
            slug: "gul-yaka".into(),
        };
        assert_eq!(
            err.to_string(),
            "duplicate slug 'gul-yaka' in exhibition objects"
        );
    }

    #[test]
    fn parse_error_keeps_path() {
        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err = CatalogError::parse("sources/flea.json", &json_err);
        assert!(err.to_string().starts_with("cannot parse sources/flea.json"));
    }
}
