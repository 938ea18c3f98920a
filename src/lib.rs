//! Script-forward bridge class generation.
//!
//! Parses a C++ class header, walks its inheritance chain for the unique
//! virtual method surface, and renders a bridge class whose methods
//! dispatch to scripting-side overrides with native fallback.

pub mod config;
pub mod error;
pub mod generate;
pub mod io;
pub mod parsing;
pub mod types;

// Explicit exports for better API clarity
pub use config::Settings;
pub use error::{BridgeError, BridgeResult, ParseError, ParseResult};
pub use generate::{Artifacts, render, write_artifacts};
pub use parsing::HeaderWalker;
pub use types::{ClassModel, FunctionInfo};
