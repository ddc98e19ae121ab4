// SPDX-License-Identifier: MPL-2.0
//! Strongly typed catalog records.
//!
//! Every data file is deserialized straight into these structs; unknown
//! fields are ignored and optional fields default, so hand-authored JSON can
//! omit them.

use crate::domain::media::MediaItem;
use serde::{Deserialize, Serialize};

/// One image attached to a source or exhibition object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageData {
    pub url: String,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub credit: Option<String>,
}

/// Interactive 3D model attached to a source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model3D {
    pub url: String,
    #[serde(default)]
    pub caption: String,
    #[serde(default)]
    pub credit: String,
    #[serde(default)]
    pub poster: Option<String>,
}

/// A historical artifact in the main catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Source {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub source_type: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub primary_source: String,
    #[serde(default)]
    pub images: Vec<ImageData>,
    #[serde(default)]
    pub model3d: Option<Model3D>,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub paper: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub medium: Option<String>,
    #[serde(default)]
    pub dimensions: Option<String>,
    #[serde(default)]
    pub accession_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExhibitionAuthor {
    pub name: String,
    #[serde(default)]
    pub bio: String,
}

/// An item belonging to one exhibition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExhibitionObject {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub exhibition_id: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub object_type: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub commentary: String,
    #[serde(default)]
    pub author: ExhibitionAuthor,
    #[serde(default)]
    pub provenance: String,
    #[serde(default)]
    pub images: Vec<ImageData>,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub references: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExhibitionOrganizer {
    pub name: String,
    #[serde(default)]
    pub affiliation: String,
}

/// Ordered group of objects inside an exhibition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExhibitionPart {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub object_ids: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExhibitionStatus {
    Ongoing,
    Completed,
}

impl ExhibitionStatus {
    /// Returns the i18n message key for this status.
    pub fn i18n_key(self) -> &'static str {
        match self {
            ExhibitionStatus::Ongoing => "exhibition-status-ongoing",
            ExhibitionStatus::Completed => "exhibition-status-completed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translator {
    pub name: String,
    #[serde(default)]
    pub role: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExhibitionSupport {
    #[serde(default)]
    pub translators: Vec<Translator>,
    #[serde(default)]
    pub data_input: Vec<String>,
    #[serde(default)]
    pub sponsors: Vec<String>,
}

/// A curated exhibition with its ordered parts and credits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exhibition {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub description_russian: Option<String>,
    pub status: ExhibitionStatus,
    #[serde(default)]
    pub target_count: u32,
    #[serde(default)]
    pub current_count: u32,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub parts: Vec<ExhibitionPart>,
    #[serde(default)]
    pub organizers: Vec<ExhibitionOrganizer>,
    #[serde(default)]
    pub editorial_board: Vec<ExhibitionOrganizer>,
    #[serde(default)]
    pub support: ExhibitionSupport,
}

impl Exhibition {
    pub fn part(&self, part_id: &str) -> Option<&ExhibitionPart> {
        self.parts.iter().find(|p| p.id == part_id)
    }
}

/// Listing shape from `exhibitions/index.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExhibitionSummary {
    pub id: String,
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub short_description: String,
    pub status: ExhibitionStatus,
    #[serde(default)]
    pub object_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paper {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub units: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub affiliation: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    #[serde(default)]
    pub current: Vec<TeamMember>,
    #[serde(default)]
    pub past: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub path: String,
}

/// Site-wide metadata shown on the About page and in the header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteData {
    pub name: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub team: Team,
    #[serde(default)]
    pub partners: Vec<String>,
    #[serde(default)]
    pub navigation: Vec<NavLink>,
}

/// `sources/index.json`: definition order plus controlled vocabularies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourcesIndex {
    pub sources: Vec<String>,
    #[serde(default)]
    pub source_types: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub papers: Vec<Paper>,
}

/// `exhibitions/index.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExhibitionsIndex {
    pub exhibitions: Vec<ExhibitionSummary>,
}

// =============================================================================
// CatalogItem
// =============================================================================

/// Common view over sources and exhibition objects.
pub trait CatalogItem {
    fn id(&self) -> &str;
    fn slug(&self) -> &str;
    fn title(&self) -> &str;
    fn description(&self) -> &str;
    fn tags(&self) -> &[String];
    fn images(&self) -> &[ImageData];

    /// Classification from the controlled vocabulary.
    fn classification(&self) -> &str;

    fn model3d(&self) -> Option<&Model3D> {
        None
    }

    fn has_3d(&self) -> bool {
        self.model3d().is_some()
    }

    /// Flattens images, in order, followed by the 3D model if there is one.
    fn media_items(&self) -> Vec<MediaItem> {
        let mut items: Vec<MediaItem> = self
            .images()
            .iter()
            .map(|img| {
                MediaItem::image(img.url.clone())
                    .with_caption(img.caption.clone())
                    .with_credit(img.credit.clone())
            })
            .collect();

        if let Some(model) = self.model3d() {
            items.push(
                MediaItem::model(model.url.clone())
                    .with_caption(Some(model.caption.clone()))
                    .with_credit(Some(model.credit.clone()))
                    .with_poster(model.poster.clone()),
            );
        }

        items
    }
}

impl CatalogItem for Source {
    fn id(&self) -> &str {
        &self.id
    }
    fn slug(&self) -> &str {
        &self.slug
    }
    fn title(&self) -> &str {
        &self.title
    }
    fn description(&self) -> &str {
        &self.description
    }
    fn tags(&self) -> &[String] {
        &self.tags
    }
    fn images(&self) -> &[ImageData] {
        &self.images
    }
    fn classification(&self) -> &str {
        &self.source_type
    }
    fn model3d(&self) -> Option<&Model3D> {
        self.model3d.as_ref()
    }
}

impl CatalogItem for ExhibitionObject {
    fn id(&self) -> &str {
        &self.id
    }
    fn slug(&self) -> &str {
        &self.slug
    }
    fn title(&self) -> &str {
        &self.title
    }
    fn description(&self) -> &str {
        &self.description
    }
    fn tags(&self) -> &[String] {
        &self.tags
    }
    fn images(&self) -> &[ImageData] {
        &self.images
    }
    fn classification(&self) -> &str {
        &self.object_type
    }
}
