//! Multi-line statement reconstruction.
//!
//! Header declarations may span lines; the buffer space-joins stripped
//! lines until a statement terminator (`;` or a block-close `}`) appears,
//! then hands the complete statement to the signature extractor.

/// Strip a trailing `//` comment from a line.
pub fn strip_line_comment(line: &str) -> &str {
    match line.find("//") {
        Some(pos) => &line[..pos],
        None => line,
    }
}

/// A complete reconstructed statement and the line it started on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub text: String,
    pub line: u32,
}

/// Accumulates stripped lines into complete statements.
///
/// Preprocessor lines, access-specifier labels, and a bare class-body
/// opening brace reset the buffer: none of them can be part of a method
/// declaration, and a statement interrupted by one was never valid.
#[derive(Debug, Default)]
pub struct StatementBuffer {
    pending: String,
    start_line: u32,
}

impl StatementBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one stripped line. Returns a statement once its terminator
    /// has been seen; the buffer clears itself either way.
    pub fn feed(&mut self, line_number: u32, line: &str) -> Option<Statement> {
        if line.is_empty() {
            return None;
        }
        if line.starts_with('#') || line.ends_with(':') || line == "{" {
            self.reset();
            return None;
        }

        if self.pending.is_empty() {
            self.start_line = line_number;
        } else {
            self.pending.push(' ');
        }
        self.pending.push_str(line);

        if self.pending.ends_with(';') || self.pending.ends_with('}') {
            let text = std::mem::take(&mut self.pending);
            return Some(Statement {
                text,
                line: self.start_line,
            });
        }
        None
    }

    /// Discard any partially accumulated statement.
    pub fn reset(&mut self) {
        self.pending.clear();
    }
}
