// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

/// Screens the user can navigate between.
///
/// Detail screens carry the slugs they were opened with; resolving them
/// against the catalog happens at render time so a reload never leaves a
/// dangling reference.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    Explore,
    Discover,
    Source(String),
    Exhibitions,
    Exhibition(String),
    ExhibitionPart {
        exhibition: String,
        part: String,
    },
    ExhibitionObject {
        exhibition: String,
        object: String,
    },
    About,
}

impl Screen {
    /// Maps a site navigation path (`/explore`, `/source/flea`) to a screen.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        let screen = match segments.as_slice() {
            [] => Screen::Home,
            ["explore"] => Screen::Explore,
            ["discover"] => Screen::Discover,
            ["about"] => Screen::About,
            ["exhibitions"] => Screen::Exhibitions,
            ["source", slug] => Screen::Source((*slug).to_string()),
            ["exhibitions", slug] => Screen::Exhibition((*slug).to_string()),
            ["exhibitions", exhibition, "part", part] => Screen::ExhibitionPart {
                exhibition: (*exhibition).to_string(),
                part: (*part).to_string(),
            },
            ["exhibitions", exhibition, "object", object] => Screen::ExhibitionObject {
                exhibition: (*exhibition).to_string(),
                object: (*object).to_string(),
            },
            _ => return None,
        };
        Some(screen)
    }

    /// The top-level section this screen belongs to, for highlighting the
    /// navbar entry.
    #[must_use]
    pub fn section(&self) -> Screen {
        match self {
            Screen::Source(_) => Screen::Explore,
            Screen::Exhibition(_)
            | Screen::ExhibitionPart { .. }
            | Screen::ExhibitionObject { .. } => Screen::Exhibitions,
            other => other.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_paths_resolve() {
        assert_eq!(Screen::from_path("/"), Some(Screen::Home));
        assert_eq!(Screen::from_path("/explore"), Some(Screen::Explore));
        assert_eq!(
            Screen::from_path("/source/flea"),
            Some(Screen::Source("flea".into()))
        );
        assert_eq!(
            Screen::from_path("/exhibitions/soviet-central-asia/part/part-1"),
            Some(Screen::ExhibitionPart {
                exhibition: "soviet-central-asia".into(),
                part: "part-1".into(),
            })
        );
    }

    #[test]
    fn contact_and_unknown_paths_are_rejected() {
        assert_eq!(Screen::from_path("/contact"), None);
        assert_eq!(Screen::from_path("/source"), None);
    }

    #[test]
    fn detail_screens_highlight_their_section() {
        assert_eq!(Screen::Source("flea".into()).section(), Screen::Explore);
        assert_eq!(
            Screen::ExhibitionObject {
                exhibition: "e".into(),
                object: "o".into()
            }
            .section(),
            Screen::Exhibitions
        );
        assert_eq!(Screen::About.section(), Screen::About);
    }
}
