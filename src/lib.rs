//! # Introduction
//!
//! algotrace runs classic algorithms to completion while recording a
//! snapshot of their state at every decision point. The recorded steps are
//! then played back forward and backward, on a timer or by hand, through a
//! terminal UI built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! id + input → Registry → generator → StepSequence → PlaybackEngine → TUI
//! ```
//!
//! 1. [`step`]: the immutable [`step::Step`] snapshot, its validating
//!    builder and the role precedence renderers rely on.
//! 2. [`generators`]: instrumented sorting, searching, graph, linked-list,
//!    grid and pattern algorithms.
//! 3. [`fixtures`]: the fixed demonstration data the walkthroughs run on.
//! 4. [`registry`]: static descriptors keyed by id, with their listings.
//! 5. [`playback`]: the index, timer and speed over a loaded sequence.
//! 6. [`config`]: command-line arguments and run settings.
//! 7. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! ## Role precedence
//!
//! An element can hold several roles at once. Renderers colour it by the
//! highest one: pivot, comparing, swapping, current, found, visited. Graph
//! nodes and edges use current, comparing, in-path, part-of-result, visited,
//! start, end. Elements in a sorting step's sorted set are highlighted only
//! when they hold no role.

pub mod config;
pub mod errors;
pub mod fixtures;
pub mod generators;
pub mod playback;
pub mod registry;
pub mod step;
pub mod ui;

pub use errors::{VizError, VizResult};
