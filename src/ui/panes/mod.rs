//! TUI pane rendering modules
//!
//! - [`source`]: algorithm listing with the current step's line highlighted
//! - [`visual`]: bars, grid, graph canvas or linked list for the current step
//! - [`narration`]: step description, auxiliary state and algorithm metadata
//! - [`status`]: status bar with keybindings and playback state
//!
//! Each pane exposes one `render_*` function; the app owns all state.

mod utils;

pub mod narration;
pub mod source;
pub mod status;
pub mod visual;

pub use narration::render_narration_pane;
pub use source::{render_source_pane, SourceScrollState};
pub use status::{render_status_bar, StatusRenderData};
pub use visual::render_visual_pane;
