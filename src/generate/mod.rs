//! Artifact rendering and the final write step.

pub mod emitter;
pub mod writer;

pub use emitter::{Artifacts, render};
pub use writer::write_artifacts;
