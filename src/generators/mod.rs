//! Instrumented algorithm implementations
//!
//! Every generator runs its algorithm to completion and returns the full
//! [`StepSequence`]. The shape is the same across families:
//!
//! - the first step shows the starting configuration
//! - each comparison, swap, pointer move or visit gets its own step
//! - the last step states the outcome
//!
//! Graph, list and grid generators rebuild their node, edge and cell
//! collections for every step, so no step shares state with another.
//!
//! Each generator keeps a private `line` module of constants that index into
//! its listing in [`crate::registry::listings`].

pub mod graph;
pub mod grid;
pub mod linked_list;
pub mod patterns;
pub mod searching;
pub mod sorting;

use crate::errors::VizError;
use crate::step::{Step, StepBuilder, StepSequence};

/// Collects validated steps for one generator run
pub(crate) struct Trace {
    steps: Vec<Step>,
}

impl Trace {
    pub(crate) fn new() -> Self {
        Trace { steps: Vec::new() }
    }

    /// Validate and append a step.
    ///
    /// A step that fails validation is a bug in the generator, so this panics
    /// with the index of the offending step.
    pub(crate) fn push(&mut self, builder: StepBuilder) {
        match builder.build() {
            Ok(step) => self.steps.push(step),
            Err(e) => panic!("generator emitted malformed step #{}: {}", self.steps.len(), e),
        }
    }

    pub(crate) fn finish(self) -> StepSequence {
        log::trace!("trace finished with {} steps", self.steps.len());
        StepSequence::from(self.steps)
    }
}

/// One-step sequence explaining why a fixture could not be walked
pub(crate) fn rejected(error: &VizError) -> StepSequence {
    log::warn!("refusing fixture: {error}");
    let mut trace = Trace::new();
    trace.push(StepBuilder::new(format!("Cannot run: {error}")));
    trace.finish()
}

/// `[a, b, c]` for narration
pub(crate) fn fmt_list<T: std::fmt::Display>(items: &[T]) -> String {
    let inner: Vec<String> = items.iter().map(|v| v.to_string()).collect();
    format!("[{}]", inner.join(", "))
}
