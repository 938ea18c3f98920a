//! Recursive header parsing.
//!
//! A [`HeaderWalker`] owns all state for one generation run: the function
//! registry, the include list, and the visited-set guarding against
//! repeated bases. It reads the root header, registers every eligible
//! virtual method, then visits each base header depth-first in declaration
//! order, resolving them next to the header that named them.

use crate::config::Settings;
use crate::error::{BridgeError, BridgeResult};
use crate::parsing::matcher::{self, ClassLine};
use crate::parsing::registry::{FunctionRegistry, IncludeSet};
use crate::parsing::signature;
use crate::parsing::statement::{StatementBuffer, strip_line_comment};
use crate::types::ClassModel;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct HeaderWalker<'a> {
    settings: &'a Settings,
    registry: FunctionRegistry,
    includes: IncludeSet,
    visited: HashSet<PathBuf>,
}

impl<'a> HeaderWalker<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self {
            settings,
            registry: FunctionRegistry::new(),
            includes: IncludeSet::new(),
            visited: HashSet::new(),
        }
    }

    /// Parse the root header and its inheritance chain into a [`ClassModel`].
    ///
    /// The generated class is named from the root header's file stem, as
    /// the build pipeline invokes the generator per header file.
    pub fn parse(mut self, root: &Path) -> BridgeResult<ClassModel> {
        let class_name = root
            .file_stem()
            .and_then(|stem| stem.to_str())
            .map(str::to_string)
            .ok_or_else(|| BridgeError::InvalidHeaderPath {
                path: root.to_path_buf(),
            })?;

        self.parse_file(root)?;

        debug!(
            class = %class_name,
            functions = self.registry.len(),
            "header chain parsed"
        );
        Ok(ClassModel {
            class_name,
            functions: self.registry.into_functions(),
            includes: self.includes.into_names(),
        })
    }

    fn parse_file(&mut self, path: &Path) -> BridgeResult<()> {
        let canonical = path
            .canonicalize()
            .map_err(|source| BridgeError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;
        if !self.visited.insert(canonical) {
            debug!(path = %path.display(), "header already visited, skipping");
            return Ok(());
        }

        let source = std::fs::read_to_string(path).map_err(|source| BridgeError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "parsing header");

        let mut buffer = StatementBuffer::new();
        let mut bases = Vec::new();

        for (index, raw) in source.lines().enumerate() {
            let line_number = index as u32 + 1;
            let line = strip_line_comment(raw).trim();

            if matcher::is_class_line(line) {
                match matcher::match_class_line(line, &self.settings.access_marker, path, line_number)? {
                    ClassLine::ForwardDecl { name } => {
                        if !self.includes.insert(name) {
                            debug!(path = %path.display(), line_number, "duplicate forward declaration");
                        }
                    }
                    ClassLine::Definition { bases: declared } => bases.extend(declared),
                }
            } else if let Some(statement) = buffer.feed(line_number, line) {
                if let Some(info) = signature::extract(&statement, path)? {
                    if !self.registry.insert_if_absent(info) {
                        debug!(
                            path = %path.display(),
                            line_number,
                            "method shadowed by a nearer declaration"
                        );
                    }
                }
            }
        }

        // Own methods are all registered; now walk the bases in
        // declaration order.
        let dir = path.parent().unwrap_or(Path::new("."));
        for base in bases {
            let base_path = dir.join(format!("{base}.{}", self.settings.header_extension));
            debug!(base = %base, path = %base_path.display(), "descending into base class");
            self.parse_file(&base_path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_header(dir: &Path, name: &str, contents: &str) {
        fs::write(dir.join(name), contents).unwrap();
    }

    #[test]
    fn test_single_header_surface() {
        let dir = tempfile::tempdir().unwrap();
        write_header(
            dir.path(),
            "Foo.h",
            r#"
class Foo : public ScriptAccess
{
public:
  virtual void Bar(int x);
};
"#,
        );

        let settings = Settings::default();
        let model = HeaderWalker::new(&settings)
            .parse(&dir.path().join("Foo.h"))
            .unwrap();
        assert_eq!(model.class_name, "Foo");
        assert_eq!(model.functions.len(), 1);
        assert_eq!(model.functions[0].name, "Bar");
        assert!(model.includes.is_empty());
    }

    #[test]
    fn test_missing_base_header_aborts() {
        let dir = tempfile::tempdir().unwrap();
        write_header(
            dir.path(),
            "Foo.h",
            "class Foo : public Missing\n{\npublic:\n  virtual void Bar(int x);\n};\n",
        );

        let settings = Settings::default();
        let err = HeaderWalker::new(&settings)
            .parse(&dir.path().join("Foo.h"))
            .unwrap_err();
        match err {
            BridgeError::FileRead { path, .. } => {
                assert!(path.ends_with("Missing.h"), "got {}", path.display());
            }
            other => panic!("expected FileRead, got {other:?}"),
        }
    }
}
