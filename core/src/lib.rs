//! Core of the manga reader: catalog, navigation state and rendering, independent of the page
//! that embeds it.

#![deny(missing_debug_implementations)]

pub mod catalog;
pub mod config;
pub mod controller;
pub mod dom;
pub mod error;
pub mod log;
pub mod render;
pub mod types;
pub mod view;

pub type Result<T> = std::result::Result<T, anyhow::Error>;

pub use catalog::{Catalog, Chapter, GalleryItem, Volume};
pub use config::SiteConfig;
pub use controller::{Controller, NavResult};
pub use dom::{Dom, MemoryDom};
pub use error::NavError;
pub use types::{Action, ChapterId, Navigation, Section, VolumeId};
pub use view::ViewState;

/// Returns the version of the core crate for diagnostics.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
