//! The DOM contract: named regions and controls the embedding page must provide.
//!
//! Renderers never touch a document directly. They build [`Node`] trees which the controller
//! mounts through a [`Dom`] implementation: the browser binding in `manga-web`, or
//! [`MemoryDom`] for tests and headless use.
//!
//! Static markup reaches the controller through the same delegated listener as rendered
//! elements: any element with `data-action="<name>"` dispatches that [`Action`]. The viewer's
//! back control is `data-action="go-back"`, and navigation links are `.nav-links li` elements
//! with `data-target="<section id>"`.
//!
//! [`Action`]: crate::types::Action

pub mod memory;
pub mod node;

pub use memory::MemoryDom;
pub use node::Node;

pub type Result<T> = crate::Result<T>;

/// Class shared by every top-level section element.
pub const SECTION_CLASS: &str = "section";

/// Containers whose content is fully replaced on render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    VolumesGrid,
    SelectedVolumeTitle,
    ChaptersContainer,
    PagesContainer,
    MaterialsGallery,
}

impl Region {
    pub const ALL: [Region; 5] = [
        Region::VolumesGrid,
        Region::SelectedVolumeTitle,
        Region::ChaptersContainer,
        Region::PagesContainer,
        Region::MaterialsGallery,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Region::VolumesGrid => "volumes-grid",
            Region::SelectedVolumeTitle => "selected-volume-title",
            Region::ChaptersContainer => "chapters-container",
            Region::PagesContainer => "pages-container",
            Region::MaterialsGallery => "materials-gallery",
        }
    }
}

/// Selection controls in the viewer toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    VolumeSelect,
    ChapterSelect,
}

impl Control {
    pub fn id(self) -> &'static str {
        match self {
            Control::VolumeSelect => "volume-select",
            Control::ChapterSelect => "chapter-select",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

/// Element ids of the gallery modal.
pub const MODAL_ID: &str = "image-modal";
pub const MODAL_IMAGE_ID: &str = "modal-img";
pub const HEADER_TOGGLE_ID: &str = "header-toggle";

/// Operations the controller needs from a document.
pub trait Dom {
    /// Ids of every section element, in document order.
    fn section_ids(&self) -> Vec<String>;

    /// Whether an element with this id exists at all.
    fn has_element(&self, id: &str) -> bool;

    fn set_section_hidden(&mut self, id: &str, hidden: bool);

    fn replace_children(&mut self, region: Region, nodes: Vec<Node>) -> Result<()>;

    fn set_text(&mut self, region: Region, text: &str) -> Result<()>;

    /// Replace the full option list of a selector.
    fn set_options(&mut self, control: Control, options: Vec<SelectOption>) -> Result<()>;

    fn open_modal(&mut self, src: &str) -> Result<()>;

    fn close_modal(&mut self) -> Result<()>;

    /// Mark the navigation link pointing at `target` active and every other link inactive.
    fn set_nav_active(&mut self, target: &str);

    fn set_header_collapsed(&mut self, collapsed: bool, toggle_label: &str);

    fn scroll_to_top(&mut self);
}
