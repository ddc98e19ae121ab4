// SPDX-License-Identifier: MPL-2.0
//! Catalog query layer.
//!
//! [`Catalog`] owns one immutable [`Snapshot`](loader::Snapshot) of sources,
//! exhibitions and exhibition objects and answers every lookup the screens
//! need. All queries are synchronous and never fail: a miss is `None` or an
//! empty `Vec`.
//!
//! # Example
//!
//! ```
//! use cabinet::catalog::{Catalog, EmbeddedData};
//!
//! let catalog = Catalog::load(EmbeddedData).unwrap();
//! let hits = catalog.search_sources("flea", Some("All"), None);
//! assert!(hits.iter().all(|s| catalog.source_by_slug(&s.slug).is_some()));
//! ```

mod error;
pub mod loader;
pub mod query;
pub mod records;
pub mod source;

pub use error::CatalogError;
pub use loader::Snapshot;
pub use query::{SourceQuery, ALL_TYPES};
pub use records::{
    CatalogItem, Exhibition, ExhibitionObject, ExhibitionPart, ExhibitionStatus,
    ExhibitionSummary, ImageData, Model3D, Paper, SiteData, Source,
};
pub use source::{DataSource, DirectoryData, EmbeddedData};

use std::sync::Arc;

/// Read-only repository over the current catalog snapshot.
pub struct Catalog {
    data: Arc<dyn DataSource>,
    snapshot: Snapshot,
}

impl std::fmt::Debug for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Catalog")
            .field("data", &self.data.describe())
            .field("sources", &self.snapshot.sources.len())
            .field("exhibitions", &self.snapshot.exhibitions.len())
            .field("objects", &self.snapshot.objects.len())
            .finish()
    }
}

impl Catalog {
    /// Loads and validates a catalog from `data`.
    pub fn load(data: impl DataSource + 'static) -> Result<Self, CatalogError> {
        let snapshot = loader::load(&data)?;
        tracing::info!(
            origin = %data.describe(),
            sources = snapshot.sources.len(),
            exhibitions = snapshot.exhibitions.len(),
            objects = snapshot.objects.len(),
            "catalog loaded"
        );
        Ok(Self {
            data: Arc::new(data),
            snapshot,
        })
    }

    /// A catalog with no content that still remembers where to reload from.
    ///
    /// Used when the start-up load fails so the UI can still come up.
    pub fn empty(data: impl DataSource + 'static) -> Self {
        Self {
            data: Arc::new(data),
            snapshot: Snapshot::default(),
        }
    }

    /// Re-reads the data source and swaps in the new snapshot.
    ///
    /// On failure the current snapshot stays in place.
    pub fn reload(&mut self) -> Result<(), CatalogError> {
        match loader::load(self.data.as_ref()) {
            Ok(snapshot) => {
                self.snapshot = snapshot;
                tracing::info!(origin = %self.data.describe(), "catalog reloaded");
                Ok(())
            }
            Err(err) => {
                tracing::error!(origin = %self.data.describe(), error = %err, "catalog reload failed");
                Err(err)
            }
        }
    }

    /// Shared handle to the data source, for resolving relative media paths
    /// off the UI thread.
    pub fn data_source(&self) -> Arc<dyn DataSource> {
        Arc::clone(&self.data)
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot.sources.is_empty() && self.snapshot.exhibitions.is_empty()
    }

    // -------------------------------------------------------------------------
    // Site and vocabularies
    // -------------------------------------------------------------------------

    pub fn site(&self) -> &SiteData {
        &self.snapshot.site
    }

    pub fn source_types(&self) -> &[String] {
        &self.snapshot.source_types
    }

    pub fn tags(&self) -> &[String] {
        &self.snapshot.tags
    }

    pub fn papers(&self) -> &[Paper] {
        &self.snapshot.papers
    }

    // -------------------------------------------------------------------------
    // Sources
    // -------------------------------------------------------------------------

    /// Every source, in the order `sources/index.json` lists them.
    pub fn all_sources(&self) -> &[Source] {
        &self.snapshot.sources
    }

    pub fn source_by_slug(&self, slug: &str) -> Option<&Source> {
        self.snapshot
            .source_by_slug
            .get(slug)
            .map(|&i| &self.snapshot.sources[i])
    }

    /// AND of the text, type and tag predicates, in catalog order.
    ///
    /// `source_type` equal to [`ALL_TYPES`] and an empty `tag` both disable
    /// their filter.
    pub fn search_sources(
        &self,
        query: &str,
        source_type: Option<&str>,
        tag: Option<&str>,
    ) -> Vec<&Source> {
        self.search(&SourceQuery::new(query, source_type, tag))
    }

    pub fn search(&self, query: &SourceQuery) -> Vec<&Source> {
        let matcher = query.matcher();
        self.snapshot
            .sources
            .iter()
            .filter(|s| matcher.matches(s))
            .collect()
    }

    pub fn sources_by_paper(&self, paper_title: &str) -> Vec<&Source> {
        self.snapshot
            .sources
            .iter()
            .filter(|s| s.paper == paper_title)
            .collect()
    }

    pub fn sources_by_unit(&self, unit: &str) -> Vec<&Source> {
        self.snapshot
            .sources
            .iter()
            .filter(|s| s.unit == unit)
            .collect()
    }

    // -------------------------------------------------------------------------
    // Exhibitions
    // -------------------------------------------------------------------------

    /// Summaries in `exhibitions/index.json` order.
    pub fn all_exhibitions(&self) -> &[ExhibitionSummary] {
        &self.snapshot.summaries
    }

    pub fn exhibition_by_slug(&self, slug: &str) -> Option<&Exhibition> {
        self.snapshot
            .exhibition_by_slug
            .get(slug)
            .map(|&i| &self.snapshot.exhibitions[i])
    }

    pub fn exhibition_by_id(&self, id: &str) -> Option<&Exhibition> {
        self.snapshot
            .exhibition_by_id
            .get(id)
            .map(|&i| &self.snapshot.exhibitions[i])
    }

    /// Objects whose `exhibitionId` is `exhibition_id`.
    pub fn exhibition_objects(&self, exhibition_id: &str) -> Vec<&ExhibitionObject> {
        self.snapshot
            .objects
            .iter()
            .filter(|o| o.exhibition_id == exhibition_id)
            .collect()
    }

    pub fn exhibition_object_by_slug(&self, slug: &str) -> Option<&ExhibitionObject> {
        self.snapshot
            .object_by_slug
            .get(slug)
            .map(|&i| &self.snapshot.objects[i])
    }

    /// Resolves a part's `objectIds` in declared order.
    ///
    /// Ids with no matching object are skipped. An unknown exhibition or part
    /// gives an empty list.
    pub fn exhibition_objects_by_part(
        &self,
        exhibition_id: &str,
        part_id: &str,
    ) -> Vec<&ExhibitionObject> {
        let Some(part) = self
            .exhibition_by_id(exhibition_id)
            .and_then(|e| e.part(part_id))
        else {
            return Vec::new();
        };

        part.object_ids
            .iter()
            .filter_map(|id| self.snapshot.object_by_id.get(id))
            .map(|&i| &self.snapshot.objects[i])
            .collect()
    }
}
