//! The single owner of catalog, view state and document.
//!
//! Every user interaction ends up in one of the methods below, either directly or through
//! [`Controller::dispatch`]. Failures are local to the interaction: they are reported through
//! `tracing`, returned as [`NavError`], and never leave the view state half-updated.

use tracing::{debug, error, info, warn};

use crate::catalog::Catalog;
use crate::config::SiteConfig;
use crate::dom::{Control, Dom, Node, Region, SelectOption};
use crate::error::NavError;
use crate::render::{chapters, gallery, library, viewer};
use crate::types::{
    Action, ChapterId, Navigation, SECTION_CHAPTER_LIST, SECTION_VIEWER, VolumeId,
};
use crate::view::{ViewState, select_section};

pub type NavResult = std::result::Result<Navigation, NavError>;

#[derive(Debug)]
pub struct Controller<D: Dom> {
    catalog: Catalog,
    config: SiteConfig,
    state: ViewState,
    dom: D,
}

impl<D: Dom> Controller<D> {
    pub fn new(catalog: Catalog, config: SiteConfig, dom: D) -> Self {
        Self { catalog, config, state: ViewState::default(), dom }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn dom(&self) -> &D {
        &self.dom
    }

    pub fn dom_mut(&mut self) -> &mut D {
        &mut self.dom
    }

    /// Render the library and gallery and show the initial section.
    pub fn init(&mut self) {
        self.state.current_volume = self.catalog.first_volume();

        mount(&mut self.dom, Region::VolumesGrid, library::render(&self.catalog, &self.config));

        if self.dom.has_element(Region::MaterialsGallery.id()) {
            let items = gallery::render(self.catalog.gallery(), &self.config);
            mount(&mut self.dom, Region::MaterialsGallery, items);
        } else {
            debug!("page has no gallery grid");
        }

        let initial = self.config.initial_section.clone();
        self.select_section(&initial);

        info!(
            volumes = self.catalog.volumes().len(),
            gallery = self.catalog.gallery().len(),
            "manga reader initialised"
        );
    }

    pub fn select_section(&mut self, id: &str) {
        select_section(&mut self.dom, &mut self.state, id);
    }

    /// Navigation menu click: highlight the link, then switch sections.
    pub fn navigate(&mut self, target: &str) {
        self.dom.set_nav_active(target);
        self.select_section(target);
    }

    /// Show the chapter list of `volume_id`.
    ///
    /// An unknown volume renders a "not found" notice in the chapter list and leaves the current
    /// volume untouched.
    pub fn open_volume(&mut self, volume_id: VolumeId) -> NavResult {
        let Some(volume) = self.catalog.volume(volume_id) else {
            warn!(volume = %volume_id, "volume not found");
            let title = self.config.messages.volume_not_found.clone();
            write_text(&mut self.dom, Region::SelectedVolumeTitle, &title);
            let fallback = chapters::not_found(volume_id, &self.config);
            mount(&mut self.dom, Region::ChaptersContainer, fallback);
            self.select_section(SECTION_CHAPTER_LIST);
            return Err(NavError::VolumeNotFound(volume_id));
        };

        self.state.current_volume = Some(volume_id);
        write_text(&mut self.dom, Region::SelectedVolumeTitle, &volume.title);
        mount(&mut self.dom, Region::ChaptersContainer, chapters::render(volume_id, volume));

        debug!(volume = %volume_id, chapters = volume.chapters.len(), "volume opened");
        self.select_section(SECTION_CHAPTER_LIST);
        Ok(Navigation::Rendered)
    }

    /// Render the pages of a chapter and switch to the viewer.
    ///
    /// A missing volume is dropped silently. A missing chapter is reported and leaves the
    /// current screen as it was.
    pub fn load_chapter(&mut self, volume_id: VolumeId, chapter_id: ChapterId) -> NavResult {
        let Some(volume) = self.catalog.volume(volume_id) else {
            debug!(volume = %volume_id, chapter = %chapter_id, "ignoring chapter of unknown volume");
            return Ok(Navigation::Skipped);
        };
        let Some(chapter) = volume.chapter(chapter_id) else {
            error!(volume = %volume_id, chapter = %chapter_id, "chapter not found");
            return Err(NavError::ChapterNotFound { volume: volume_id, chapter: chapter_id });
        };

        self.state.current_volume = Some(volume_id);
        self.state.current_chapter = Some(chapter_id);

        sync_control(
            &mut self.dom,
            Control::VolumeSelect,
            viewer::volume_options(&self.catalog, volume_id),
        );
        sync_control(
            &mut self.dom,
            Control::ChapterSelect,
            viewer::chapter_options(volume, chapter_id),
        );

        if chapter.pages.is_none() {
            warn!(volume = %volume_id, chapter = %chapter_id, "chapter has no page list");
        }
        let pages = viewer::render_pages(volume_id, chapter_id, chapter, &self.config);
        debug!(volume = %volume_id, chapter = %chapter_id, pages = pages.len(), "chapter loaded");
        mount(&mut self.dom, Region::PagesContainer, pages);

        self.select_section(SECTION_VIEWER);
        Ok(Navigation::Rendered)
    }

    /// Back from the viewer to the chapter list of the current volume.
    pub fn go_back(&mut self) -> NavResult {
        let volume = self.state.current_volume.ok_or(NavError::NoVolumeSelected)?;
        self.open_volume(volume)
    }

    /// Volume selector change: jump to the first chapter of the chosen volume.
    pub fn select_volume(&mut self, volume_id: VolumeId) -> NavResult {
        let Some(volume) = self.catalog.volume(volume_id) else {
            return self.load_chapter(volume_id, ChapterId(1));
        };
        let Some(first) = volume.first_chapter() else {
            warn!(volume = %volume_id, "selected volume has no chapters");
            return Err(NavError::EmptyVolume(volume_id));
        };
        self.load_chapter(volume_id, first)
    }

    /// Chapter selector change within the current volume.
    pub fn select_chapter(&mut self, chapter_id: ChapterId) -> NavResult {
        let volume = self.state.current_volume.ok_or(NavError::NoVolumeSelected)?;
        self.load_chapter(volume, chapter_id)
    }

    pub fn open_modal(&mut self, src: &str) {
        if let Err(err) = self.dom.open_modal(src) {
            warn!(error = %err, "cannot open image modal");
            return;
        }
        self.state.modal = Some(src.to_string());
    }

    pub fn close_modal(&mut self) {
        if let Err(err) = self.dom.close_modal() {
            warn!(error = %err, "cannot close image modal");
        }
        self.state.modal = None;
    }

    /// Click inside the modal. Only a click on the backdrop itself dismisses it.
    pub fn backdrop_click(&mut self, on_backdrop: bool) {
        if on_backdrop && self.state.modal.is_some() {
            self.close_modal();
        }
    }

    pub fn toggle_header(&mut self) {
        self.state.header_collapsed = !self.state.header_collapsed;
        let messages = &self.config.messages;
        let label = if self.state.header_collapsed {
            &messages.header_collapsed_label
        } else {
            &messages.header_open_label
        };
        self.dom.set_header_collapsed(self.state.header_collapsed, label);
    }

    pub fn dispatch(&mut self, action: Action) -> NavResult {
        debug!(?action, "dispatch");
        match action {
            Action::Navigate(target) => self.navigate(&target),
            Action::OpenVolume(volume) => return self.open_volume(volume),
            Action::LoadChapter(volume, chapter) => return self.load_chapter(volume, chapter),
            Action::GoBack => return self.go_back(),
            Action::SelectVolume(volume) => return self.select_volume(volume),
            Action::SelectChapter(chapter) => return self.select_chapter(chapter),
            Action::OpenModal(src) => self.open_modal(&src),
            Action::CloseModal => self.close_modal(),
            Action::ToggleHeader => self.toggle_header(),
        }
        Ok(Navigation::Rendered)
    }
}

fn mount<D: Dom>(dom: &mut D, region: Region, nodes: Vec<Node>) {
    if let Err(err) = dom.replace_children(region, nodes) {
        warn!(region = region.id(), error = %err, "region unavailable");
    }
}

fn write_text<D: Dom>(dom: &mut D, region: Region, text: &str) {
    if let Err(err) = dom.set_text(region, text) {
        warn!(region = region.id(), error = %err, "region unavailable");
    }
}

fn sync_control<D: Dom>(dom: &mut D, control: Control, options: Vec<SelectOption>) {
    if let Err(err) = dom.set_options(control, options) {
        warn!(control = control.id(), error = %err, "selector unavailable");
    }
}
