// SPDX-License-Identifier: MPL-2.0
//! Reads a [`DataSource`] into an immutable, indexed [`Snapshot`].

use super::records::{
    Exhibition, ExhibitionObject, ExhibitionSummary, ExhibitionsIndex, Paper, SiteData, Source,
    SourcesIndex,
};
use super::{CatalogError, DataSource};
use serde::de::DeserializeOwned;
use std::collections::HashMap;

/// One consistent view of the whole catalog.
///
/// Built in full before it replaces anything, so readers never observe a
/// half-loaded catalog.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub(crate) site: SiteData,
    pub(crate) sources: Vec<Source>,
    pub(crate) source_types: Vec<String>,
    pub(crate) tags: Vec<String>,
    pub(crate) papers: Vec<Paper>,
    pub(crate) summaries: Vec<ExhibitionSummary>,
    pub(crate) exhibitions: Vec<Exhibition>,
    pub(crate) objects: Vec<ExhibitionObject>,
    pub(crate) source_by_slug: HashMap<String, usize>,
    pub(crate) object_by_slug: HashMap<String, usize>,
    pub(crate) object_by_id: HashMap<String, usize>,
    pub(crate) exhibition_by_slug: HashMap<String, usize>,
    pub(crate) exhibition_by_id: HashMap<String, usize>,
}

fn read_json<T: DeserializeOwned>(data: &dyn DataSource, path: &str) -> Result<T, CatalogError> {
    let bytes = data.read(path)?;
    serde_json::from_slice(&bytes).map_err(|err| CatalogError::parse(path, &err))
}

/// Builds slug and id indices for one collection, rejecting duplicates.
fn index_unique<'a>(
    collection: &'static str,
    keys: impl Iterator<Item = (&'a str, &'a str)>,
) -> Result<(HashMap<String, usize>, HashMap<String, usize>), CatalogError> {
    let mut by_slug = HashMap::new();
    let mut by_id = HashMap::new();

    for (position, (id, slug)) in keys.enumerate() {
        if by_id.insert(id.to_string(), position).is_some() {
            return Err(CatalogError::DuplicateId {
                collection,
                id: id.to_string(),
            });
        }
        if by_slug.insert(slug.to_string(), position).is_some() {
            return Err(CatalogError::DuplicateSlug {
                collection,
                slug: slug.to_string(),
            });
        }
    }

    Ok((by_slug, by_id))
}

/// Loads and validates every file reachable from the two index files.
pub fn load(data: &dyn DataSource) -> Result<Snapshot, CatalogError> {
    let site: SiteData = read_json(data, "site.json")?;

    let index: SourcesIndex = read_json(data, "sources/index.json")?;
    let sources = index
        .sources
        .iter()
        .map(|id| read_json::<Source>(data, &format!("sources/{id}.json")))
        .collect::<Result<Vec<_>, _>>()?;
    let (source_by_slug, _) = index_unique(
        "sources",
        sources.iter().map(|s| (s.id.as_str(), s.slug.as_str())),
    )?;

    let ExhibitionsIndex {
        exhibitions: summaries,
    } = read_json(data, "exhibitions/index.json")?;

    let mut exhibitions = Vec::with_capacity(summaries.len());
    let mut objects = Vec::new();
    for summary in &summaries {
        let exhibition: Exhibition = read_json(data, &format!("exhibitions/{}.json", summary.id))?;

        let dir = format!("exhibitions/{}", summary.id);
        for name in data.list_json(&dir)? {
            objects.push(read_json::<ExhibitionObject>(data, &format!("{dir}/{name}"))?);
        }

        exhibitions.push(exhibition);
    }

    let (exhibition_by_slug, exhibition_by_id) = index_unique(
        "exhibitions",
        exhibitions.iter().map(|e| (e.id.as_str(), e.slug.as_str())),
    )?;
    let (object_by_slug, object_by_id) = index_unique(
        "exhibition objects",
        objects.iter().map(|o| (o.id.as_str(), o.slug.as_str())),
    )?;

    Ok(Snapshot {
        site,
        sources,
        source_types: index.source_types,
        tags: index.tags,
        papers: index.papers,
        summaries,
        exhibitions,
        objects,
        source_by_slug,
        object_by_slug,
        object_by_id,
        exhibition_by_slug,
        exhibition_by_id,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::EmbeddedData;

    #[test]
    fn bundled_data_loads() {
        let snapshot = load(&EmbeddedData).expect("bundled data must load");
        assert!(!snapshot.sources.is_empty());
        assert!(!snapshot.exhibitions.is_empty());
        assert!(!snapshot.objects.is_empty());
        assert_eq!(snapshot.source_by_slug.len(), snapshot.sources.len());
    }

    #[test]
    fn index_unique_rejects_duplicate_slug() {
        let keys = [("a", "same"), ("b", "same")];
        let err = index_unique("sources", keys.iter().copied()).unwrap_err();
        assert_eq!(
            err,
            CatalogError::DuplicateSlug {
                collection: "sources",
                slug: "same".into()
            }
        );
    }

    #[test]
    fn index_unique_rejects_duplicate_id() {
        let keys = [("a", "one"), ("a", "two")];
        let err = index_unique("sources", keys.iter().copied()).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId { .. }));
    }

    #[test]
    fn index_unique_keeps_positions() {
        let keys = [("a", "x"), ("b", "y")];
        let (by_slug, by_id) = index_unique("sources", keys.iter().copied()).unwrap();
        assert_eq!(by_slug["y"], 1);
        assert_eq!(by_id["a"], 0);
    }
}
