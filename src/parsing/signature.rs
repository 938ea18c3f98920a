//! Virtual method signature extraction.
//!
//! Decomposes a reconstructed statement under the generator's grammar:
//! one return-type token, one argument. The argument type may span
//! several tokens (`const Foo &`); the argument name is the last token.
//! Statements outside the grammar are reported with their source
//! position instead of yielding a corrupted descriptor.

use crate::error::{ParseError, ParseResult};
use crate::parsing::statement::Statement;
use crate::types::FunctionInfo;
use std::path::Path;

/// Extract a [`FunctionInfo`] from a complete statement.
///
/// Returns `Ok(None)` for statements the generator ignores: anything not
/// starting with the `virtual` qualifier, and virtual destructors.
pub fn extract(statement: &Statement, path: &Path) -> ParseResult<Option<FunctionInfo>> {
    let text = statement.text.trim();

    let Some(rest) = text.strip_prefix("virtual") else {
        return Ok(None);
    };
    if !rest.starts_with(char::is_whitespace) {
        return Ok(None);
    }
    // Destructors are never forwarded; the bridge class declares its own.
    if text.contains('~') {
        return Ok(None);
    }

    let err = |kind: fn(std::path::PathBuf, u32, String) -> ParseError| {
        kind(path.to_path_buf(), statement.line, text.to_string())
    };

    // Strip the terminator, an inline empty body, and a trailing
    // `override` qualifier.
    let mut signature = rest.trim();
    signature = signature.strip_suffix(';').unwrap_or(signature).trim_end();
    signature = signature.strip_suffix("{}").unwrap_or(signature).trim_end();
    signature = signature
        .strip_suffix("override")
        .map(str::trim_end)
        .unwrap_or(signature);

    // First token is the return type, the rest is name + parameter list.
    let Some((return_type, remainder)) = signature.split_once(char::is_whitespace) else {
        return Err(err(|path, line, statement| ParseError::MissingParameterList {
            path,
            line,
            statement,
        }));
    };
    let remainder = remainder.trim();

    let Some(open) = remainder.find('(') else {
        return Err(err(|path, line, statement| ParseError::MissingParameterList {
            path,
            line,
            statement,
        }));
    };
    let name = remainder[..open].trim_end();
    if name.is_empty() || name.contains(char::is_whitespace) {
        // A space before the parenthesis means the "function name" still
        // holds part of the return type.
        return Err(err(|path, line, statement| ParseError::MultiTokenReturnType {
            path,
            line,
            statement,
        }));
    }
    if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(err(|path, line, statement| ParseError::MalformedSignature {
            path,
            line,
            statement,
        }));
    }

    let Some(close) = remainder.rfind(')') else {
        return Err(err(
            |path, line, statement| ParseError::UnterminatedParameterList {
                path,
                line,
                statement,
            },
        ));
    };
    if close < open {
        return Err(err(|path, line, statement| ParseError::MalformedSignature {
            path,
            line,
            statement,
        }));
    }

    let parameters = remainder[open + 1..close].trim();
    if parameters.contains('(') || parameters.contains(')') {
        return Err(err(|path, line, statement| ParseError::MalformedSignature {
            path,
            line,
            statement,
        }));
    }
    if parameters.is_empty() || parameters == "void" {
        return Err(err(|path, line, statement| ParseError::ZeroArguments {
            path,
            line,
            statement,
        }));
    }
    if parameters.contains(',') {
        return Err(err(|path, line, statement| ParseError::MultipleArguments {
            path,
            line,
            statement,
        }));
    }
    if parameters.contains('=') {
        return Err(err(|path, line, statement| ParseError::DefaultArgument {
            path,
            line,
            statement,
        }));
    }

    // Argument name is the last whitespace-separated token; everything
    // before it is the argument type.
    let Some(split_at) = parameters.rfind(char::is_whitespace) else {
        return Err(err(|path, line, statement| ParseError::MissingArgumentName {
            path,
            line,
            statement,
        }));
    };
    let argument_name = parameters[split_at..].trim();
    let argument_type = parameters[..split_at].trim_end();
    if !argument_name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return Err(err(|path, line, statement| ParseError::MissingArgumentName {
            path,
            line,
            statement,
        }));
    }

    Ok(Some(FunctionInfo::new(
        name,
        return_type,
        argument_type,
        argument_name,
    )))
}
