//! Shared data structures exchanged between the core, the browser binding, and the renderers.

use std::fmt;
use std::str::FromStr;

/// Ordinal identifier of a volume inside the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VolumeId(pub u32);

/// Ordinal identifier of a chapter inside its volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChapterId(pub u32);

macro_rules! ordinal_id {
    ($name:ident) => {
        impl $name {
            pub fn get(self) -> u32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse::<u32>().map(Self)
            }
        }
    };
}

ordinal_id!(VolumeId);
ordinal_id!(ChapterId);

/// DOM id of the library view.
pub const SECTION_LIBRARY: &str = "manga";
/// DOM id of the chapter list view.
pub const SECTION_CHAPTER_LIST: &str = "chapters-list";
/// DOM id of the page viewer.
pub const SECTION_VIEWER: &str = "viewer";

/// Mutually exclusive top-level views.
///
/// Library, chapter list and viewer are the three sub-views of the manga feature; every other
/// id names a static informational page (author, materials, news, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Library,
    ChapterList,
    Viewer,
    Static(String),
}

impl Section {
    pub fn from_id(id: &str) -> Self {
        match id {
            SECTION_LIBRARY => Section::Library,
            SECTION_CHAPTER_LIST => Section::ChapterList,
            SECTION_VIEWER => Section::Viewer,
            other => Section::Static(other.to_string()),
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Section::Library => SECTION_LIBRARY,
            Section::ChapterList => SECTION_CHAPTER_LIST,
            Section::Viewer => SECTION_VIEWER,
            Section::Static(id) => id,
        }
    }

    /// True for the three views of the manga reading flow.
    pub fn is_manga_flow(&self) -> bool {
        !matches!(self, Section::Static(_))
    }
}

/// Attribute carrying the action name on rendered elements.
pub const ACTION_ATTR: &str = "data-action";

/// A user interaction the controller knows how to handle.
///
/// Renderers attach actions to elements as `data-*` attributes so a single delegated listener in
/// the embedding page can decode and dispatch them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Navigate(String),
    OpenVolume(VolumeId),
    LoadChapter(VolumeId, ChapterId),
    GoBack,
    SelectVolume(VolumeId),
    SelectChapter(ChapterId),
    OpenModal(String),
    CloseModal,
    ToggleHeader,
}

impl Action {
    /// Encode the action as `(attribute, value)` pairs.
    pub fn to_attrs(&self) -> Vec<(&'static str, String)> {
        let mut attrs = vec![(ACTION_ATTR, self.name().to_string())];
        match self {
            Action::Navigate(target) => attrs.push(("data-target", target.clone())),
            Action::OpenVolume(volume) | Action::SelectVolume(volume) => {
                attrs.push(("data-volume", volume.to_string()))
            }
            Action::LoadChapter(volume, chapter) => {
                attrs.push(("data-volume", volume.to_string()));
                attrs.push(("data-chapter", chapter.to_string()));
            }
            Action::SelectChapter(chapter) => attrs.push(("data-chapter", chapter.to_string())),
            Action::OpenModal(src) => attrs.push(("data-src", src.clone())),
            Action::GoBack | Action::CloseModal | Action::ToggleHeader => {}
        }
        attrs
    }

    /// Decode an action from element attributes. Returns `None` for unknown or incomplete data.
    pub fn from_attrs<F>(attr: F) -> Option<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let volume = || attr("data-volume").and_then(|v| v.parse::<VolumeId>().ok());
        let chapter = || attr("data-chapter").and_then(|c| c.parse::<ChapterId>().ok());

        let action = match attr(ACTION_ATTR)?.as_str() {
            "navigate" => Action::Navigate(attr("data-target")?),
            "open-volume" => Action::OpenVolume(volume()?),
            "load-chapter" => Action::LoadChapter(volume()?, chapter()?),
            "go-back" => Action::GoBack,
            "select-volume" => Action::SelectVolume(volume()?),
            "select-chapter" => Action::SelectChapter(chapter()?),
            "open-modal" => Action::OpenModal(attr("data-src")?),
            "close-modal" => Action::CloseModal,
            "toggle-header" => Action::ToggleHeader,
            _ => return None,
        };
        Some(action)
    }

    fn name(&self) -> &'static str {
        match self {
            Action::Navigate(_) => "navigate",
            Action::OpenVolume(_) => "open-volume",
            Action::LoadChapter(..) => "load-chapter",
            Action::GoBack => "go-back",
            Action::SelectVolume(_) => "select-volume",
            Action::SelectChapter(_) => "select-chapter",
            Action::OpenModal(_) => "open-modal",
            Action::CloseModal => "close-modal",
            Action::ToggleHeader => "toggle-header",
        }
    }
}

/// Result of a navigation that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// The view was re-rendered.
    Rendered,
    /// The request referred to data that does not exist and was dropped without rendering.
    Skipped,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn decode(attrs: Vec<(&'static str, String)>) -> Option<Action> {
        let map: HashMap<&str, String> = attrs.into_iter().collect();
        Action::from_attrs(|name| map.get(name).cloned())
    }

    #[test]
    fn load_chapter_survives_attribute_encoding() {
        let action = Action::LoadChapter(VolumeId(3), ChapterId(12));
        assert_eq!(decode(action.to_attrs()), Some(action));
    }

    #[test]
    fn incomplete_attributes_do_not_decode() {
        let attrs = vec![(ACTION_ATTR, "load-chapter".to_string()), ("data-volume", "1".into())];
        assert_eq!(decode(attrs), None);
        assert_eq!(decode(vec![(ACTION_ATTR, "explode".to_string())]), None);
    }

    #[test]
    fn static_back_control_decodes_without_ids() {
        assert_eq!(decode(vec![(ACTION_ATTR, "go-back".to_string())]), Some(Action::GoBack));
        assert_eq!(Action::GoBack.to_attrs(), vec![(ACTION_ATTR, "go-back".to_string())]);
    }

    #[test]
    fn sections_map_to_dom_ids() {
        assert_eq!(Section::from_id("viewer"), Section::Viewer);
        assert_eq!(Section::from_id("news"), Section::Static("news".into()));
        assert!(!Section::from_id("author").is_manga_flow());
        assert_eq!(Section::ChapterList.id(), "chapters-list");
    }
}
