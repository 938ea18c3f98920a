//! Typed classification of `class` declaration lines.
//!
//! A line starting with the `class` keyword is either a forward
//! declaration (terminated by `;`, no body) or the head of a class
//! definition, possibly carrying a base-class list. Everything the
//! grammar does not recognize is a reported error, not a guess.

use crate::error::{ParseError, ParseResult};
use std::path::Path;

/// Classified `class` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassLine {
    /// `class Name;` — recorded for include generation, never recursed into
    ForwardDecl { name: String },
    /// A definition head; `bases` lists base classes in declaration order,
    /// with access specifiers and the bridging-capability marker dropped
    Definition { bases: Vec<String> },
}

/// True when the stripped line begins with the `class` keyword.
pub fn is_class_line(line: &str) -> bool {
    match line.strip_prefix("class") {
        Some(rest) => rest.is_empty() || rest.starts_with(char::is_whitespace),
        None => false,
    }
}

/// Classify a line already known to start with `class`.
///
/// `marker` is the sentinel bridging-capability base name to drop from
/// inheritance lists.
pub fn match_class_line(
    line: &str,
    marker: &str,
    path: &Path,
    line_number: u32,
) -> ParseResult<ClassLine> {
    let malformed = || ParseError::MalformedClassDecl {
        path: path.to_path_buf(),
        line: line_number,
        statement: line.to_string(),
    };

    let rest = line.strip_prefix("class").unwrap_or(line).trim();

    // Forward declaration: a statement terminator with no opening brace.
    if rest.contains(';') && !rest.contains('{') {
        let name = rest.trim_end_matches(';').trim();
        if !is_identifier(name) {
            return Err(malformed());
        }
        return Ok(ClassLine::ForwardDecl {
            name: name.to_string(),
        });
    }

    let mut words = rest.split_whitespace();
    let own_name = words.next().ok_or_else(|| malformed())?;
    // The class's own name may carry the base-list introducer glued on.
    let own_name = own_name.trim_end_matches(':');
    if !is_identifier(own_name) {
        return Err(malformed());
    }

    let mut bases = Vec::new();
    for word in words {
        if word == ":" || word == "public" {
            continue;
        }
        if word == "{" {
            break;
        }
        let base = word.trim_end_matches(',');
        if base == marker {
            continue;
        }
        if !is_identifier(base) {
            return Err(malformed());
        }
        bases.push(base.to_string());
    }

    Ok(ClassLine::Definition { bases })
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn classify(line: &str) -> ParseResult<ClassLine> {
        match_class_line(line, "ScriptAccess", &PathBuf::from("Test.h"), 1)
    }

    #[test]
    fn test_is_class_line() {
        assert!(is_class_line("class Foo"));
        assert!(is_class_line("class"));
        assert!(!is_class_line("classes are great"));
        assert!(!is_class_line("virtual void f(int x);"));
    }

    #[test]
    fn test_forward_declaration() {
        assert_eq!(
            classify("class ScriptObject;").unwrap(),
            ClassLine::ForwardDecl {
                name: "ScriptObject".to_string()
            }
        );
    }

    #[test]
    fn test_definition_without_bases() {
        assert_eq!(
            classify("class Foo").unwrap(),
            ClassLine::Definition { bases: vec![] }
        );
    }

    #[test]
    fn test_definition_with_single_base() {
        assert_eq!(
            classify("class Foo : public Base").unwrap(),
            ClassLine::Definition {
                bases: vec!["Base".to_string()]
            }
        );
    }

    #[test]
    fn test_definition_with_multiple_bases_in_order() {
        assert_eq!(
            classify("class Foo : public First, public Second").unwrap(),
            ClassLine::Definition {
                bases: vec!["First".to_string(), "Second".to_string()]
            }
        );
    }

    #[test]
    fn test_marker_base_is_dropped() {
        assert_eq!(
            classify("class Foo : public Base, public ScriptAccess").unwrap(),
            ClassLine::Definition {
                bases: vec!["Base".to_string()]
            }
        );
    }

    #[test]
    fn test_glued_colon_on_own_name() {
        assert_eq!(
            classify("class Foo: public Base").unwrap(),
            ClassLine::Definition {
                bases: vec!["Base".to_string()]
            }
        );
    }

    #[test]
    fn test_brace_on_same_line_is_not_a_base() {
        assert_eq!(
            classify("class Foo : public Base {").unwrap(),
            ClassLine::Definition {
                bases: vec!["Base".to_string()]
            }
        );
    }

    #[test]
    fn test_malformed_head_is_reported() {
        assert!(classify("class Foo : Base<int>").is_err());
        assert!(classify("class").is_err());
    }
}
