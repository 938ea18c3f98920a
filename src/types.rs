//! Core data model shared between the parser and the emitter.

use serde::Serialize;

/// One virtual method signature extracted from a header.
///
/// The recognized grammar is deliberately narrow: exactly one return-type
/// token and exactly one argument. Identity is the function name; the
/// registry never holds two entries with the same name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionInfo {
    pub name: String,
    pub return_type: String,
    pub argument_type: String,
    pub argument_name: String,
}

impl FunctionInfo {
    pub fn new(
        name: impl Into<String>,
        return_type: impl Into<String>,
        argument_type: impl Into<String>,
        argument_name: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            return_type: return_type.into(),
            argument_type: argument_type.into(),
            argument_name: argument_name.into(),
        }
    }
}

/// The fully parsed model a generation run produces.
///
/// `functions` preserves registration order (depth-first, first seen wins),
/// which becomes the method order in the generated artifacts. `includes`
/// holds forward-declared class names in first-seen order, already
/// deduplicated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassModel {
    pub class_name: String,
    pub functions: Vec<FunctionInfo>,
    pub includes: Vec<String>,
}
