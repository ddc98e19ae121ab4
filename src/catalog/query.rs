// SPDX-License-Identifier: MPL-2.0
//! Search predicates for the Explore screen.
//!
//! Matching is plain substring containment; results keep catalog order.

use super::records::Source;

/// Type filter value meaning "no type filter".
pub const ALL_TYPES: &str = "All";

/// Explore filters, combined with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceQuery {
    /// Case-insensitive text; empty matches everything.
    pub text: String,
    /// Exact classification; `None` or [`ALL_TYPES`] matches everything.
    pub source_type: Option<String>,
    /// Exact tag; `None` or empty matches everything.
    pub tag: Option<String>,
}

impl SourceQuery {
    pub fn new(text: &str, source_type: Option<&str>, tag: Option<&str>) -> Self {
        Self {
            text: text.to_string(),
            source_type: source_type.map(str::to_string),
            tag: tag.map(str::to_string),
        }
    }

    /// Returns true when no predicate is active.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.type_filter().is_none() && self.tag_filter().is_none()
    }

    fn type_filter(&self) -> Option<&str> {
        self.source_type
            .as_deref()
            .filter(|t| *t != ALL_TYPES)
    }

    fn tag_filter(&self) -> Option<&str> {
        self.tag.as_deref().filter(|t| !t.is_empty())
    }

    /// Builds a matcher with the text lowercased once.
    pub fn matcher(&self) -> Matcher<'_> {
        Matcher {
            needle: self.text.to_lowercase(),
            source_type: self.type_filter(),
            tag: self.tag_filter(),
        }
    }
}

/// A prepared [`SourceQuery`].
#[derive(Debug)]
pub struct Matcher<'q> {
    needle: String,
    source_type: Option<&'q str>,
    tag: Option<&'q str>,
}

impl Matcher<'_> {
    pub fn matches(&self, source: &Source) -> bool {
        self.matches_text(source) && self.matches_type(source) && self.matches_tag(source)
    }

    fn matches_text(&self, source: &Source) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        let contains = |field: &str| field.to_lowercase().contains(&self.needle);
        contains(&source.title)
            || contains(&source.description)
            || source.tags.iter().any(|t| contains(t))
            || contains(&source.paper)
    }

    fn matches_type(&self, source: &Source) -> bool {
        self.source_type.is_none_or(|t| source.source_type == t)
    }

    fn matches_tag(&self, source: &Source) -> bool {
        self.tag.is_none_or(|tag| source.tags.iter().any(|t| t == tag))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(title: &str, tags: &[&str], source_type: &str, paper: &str) -> Source {
        Source {
            id: title.to_lowercase(),
            slug: title.to_lowercase(),
            title: title.to_string(),
            description: String::new(),
            source_type: source_type.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            primary_source: String::new(),
            images: Vec::new(),
            model3d: None,
            unit: String::new(),
            paper: paper.to_string(),
            date: String::new(),
            medium: None,
            dimensions: None,
            accession_id: None,
        }
    }

    #[test]
    fn empty_query_matches_everything() {
        let query = SourceQuery::new("", Some(ALL_TYPES), Some(""));
        assert!(query.is_empty());
        assert!(query.matcher().matches(&source("Diary", &[], "Document", "")));
    }

    #[test]
    fn text_is_case_insensitive_over_title() {
        let query = SourceQuery::new("ASTRO", None, None);
        assert!(query.matcher().matches(&source("Astrolabe", &[], "Object", "")));
    }

    #[test]
    fn text_matches_tag_substring_and_paper() {
        let item = source("Cup", &["Natural history"], "Object", "Collecting the World");
        assert!(SourceQuery::new("natural", None, None).matcher().matches(&item));
        assert!(SourceQuery::new("collecting", None, None).matcher().matches(&item));
        assert!(!SourceQuery::new("postcard", None, None).matcher().matches(&item));
    }

    #[test]
    fn type_filter_is_exact_and_case_sensitive() {
        let item = source("Diary", &[], "Document", "");
        assert!(SourceQuery::new("", Some("Document"), None).matcher().matches(&item));
        assert!(!SourceQuery::new("", Some("document"), None).matcher().matches(&item));
    }

    #[test]
    fn tag_filter_requires_exact_tag() {
        let item = source("Astrolabe", &["science"], "Object", "");
        assert!(SourceQuery::new("", None, Some("science")).matcher().matches(&item));
        assert!(!SourceQuery::new("", None, Some("sci")).matcher().matches(&item));
    }
}
