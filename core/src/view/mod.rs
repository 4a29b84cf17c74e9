//! Navigation state and the section switcher.

pub mod router;
pub mod state;

pub use router::select_section;
pub use state::ViewState;
