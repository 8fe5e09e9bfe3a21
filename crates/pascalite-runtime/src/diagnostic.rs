//! Diagnostic rendering for errors
//!
//! Every pipeline error converts into a [`Diagnostic`], which can be printed
//! for humans (with the offending source line and a caret underline) or
//! serialized as JSON for tools.

use crate::error::{Error, LexError, ParseError, RuntimeError, SyntaxError};
use crate::span::Span;
use serde::{Deserialize, Serialize};

/// Diagnostic schema version
pub const DIAG_VERSION: u32 = 1;

/// A rendered error
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Diagnostic schema version
    pub diag_version: u32,
    /// Error code (e.g., "PL2001")
    pub code: String,
    /// Main diagnostic message
    pub message: String,
    /// File path
    pub file: String,
    /// Line number (1-based)
    pub line: usize,
    /// Column number (1-based)
    pub column: usize,
    /// Length of error span on the snippet line
    pub length: usize,
    /// Source line string
    pub snippet: String,
    /// Short label for caret range
    pub label: String,
    /// Suggested fix (optional)
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub help: Option<String>,
}

impl Diagnostic {
    /// Create a diagnostic located at `span`
    pub fn new(code: impl Into<String>, message: impl Into<String>, span: Span) -> Self {
        Self {
            diag_version: DIAG_VERSION,
            code: code.into(),
            message: message.into(),
            file: "<input>".to_string(),
            line: span.line as usize,
            column: span.column as usize,
            length: span.len(),
            snippet: String::new(),
            label: String::new(),
            help: None,
        }
    }

    /// Build the diagnostic for any pipeline error
    ///
    /// `source` is the text that was being processed; it supplies the
    /// snippet line.
    pub fn from_error(err: &Error, file: &str, source: &str) -> Self {
        let diag = match err {
            Error::Parse(ParseError::Lex(e)) => Self::from_lex_error(e),
            Error::Parse(ParseError::Syntax(e)) => Self::from_syntax_error(e),
            Error::Runtime(e) => Self::from_runtime_error(e),
            Error::Io { .. } => {
                return Self::new(err.code(), err.to_string(), Span::dummy()).with_file(file)
            }
        };
        diag.with_file(file).with_source(source)
    }

    fn from_lex_error(err: &LexError) -> Self {
        let diag = Self::new(err.code(), err.to_string(), err.span());
        match err {
            LexError::UnexpectedCharacter { .. } => diag.with_label("not valid here"),
            LexError::UnterminatedString { .. } => diag
                .with_label("string starts here")
                .with_help("close the string with a matching '"),
            LexError::UnterminatedComment { .. } => diag
                .with_label("comment starts here")
                .with_help("close the comment with '}'"),
            LexError::NumberOutOfRange { .. } => diag.with_label("does not fit in 64 bits"),
        }
    }

    fn from_syntax_error(err: &SyntaxError) -> Self {
        let diag = Self::new(err.code(), err.to_string(), err.span());
        match err {
            SyntaxError::UnexpectedToken { expected, .. } => {
                diag.with_label(format!("expected {}", expected))
            }
            SyntaxError::TrailingInput { .. } => diag
                .with_label("unexpected input")
                .with_help("remove everything after the end of the program"),
            SyntaxError::NestingTooDeep { .. } => diag
                .with_label("nested too deeply")
                .with_help("raise max_nesting_depth in pascalite.toml"),
        }
    }

    fn from_runtime_error(err: &RuntimeError) -> Self {
        let diag = Self::new(err.code(), err.to_string(), err.span());
        match err {
            RuntimeError::UndefinedVariable { .. } => diag
                .with_label("not defined")
                .with_help("variables holding 0, 0.0, '' or false also read as undefined unless falsy_is_undefined = false"),
            RuntimeError::TypeMismatch { op, left, right, .. } => {
                diag.with_label(format!("{} {} {}", left, op, right))
            }
            RuntimeError::DivisionByZero { .. } => diag.with_label("divisor is zero"),
            RuntimeError::IntegerOverflow { .. } => {
                diag.with_label("result does not fit in 64 bits")
            }
        }
    }

    /// Set the file path
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = file.into();
        self
    }

    /// Fill in the snippet from the full source text
    ///
    /// The caret is clipped to the end of the snippet line.
    pub fn with_source(mut self, source: &str) -> Self {
        if let Some(line) = source.lines().nth(self.line.saturating_sub(1)) {
            let remaining = line
                .chars()
                .count()
                .saturating_sub(self.column.saturating_sub(1));
            self.length = self.length.min(remaining);
            self.snippet = line.to_string();
        }
        self
    }

    /// Set the label (caret description)
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Add a help message
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Format as human-readable string
    pub fn to_human_string(&self) -> String {
        let mut output = String::new();

        // Header: error[PL2001]: expected ...
        output.push_str(&format!("error[{}]: {}\n", self.code, self.message));

        // Location: --> path/to/file.pas:12:9
        output.push_str(&format!("  --> {}:{}:{}\n", self.file, self.line, self.column));

        // Snippet with caret
        if !self.snippet.is_empty() {
            output.push_str("   |\n");
            output.push_str(&format!("{:>2} | {}\n", self.line, self.snippet));

            if self.length > 0 {
                let padding = " ".repeat(self.column.saturating_sub(1));
                let carets = "^".repeat(self.length);
                output.push_str(&format!("   | {}{}", padding, carets));

                if !self.label.is_empty() {
                    output.push_str(&format!(" {}", self.label));
                }
                output.push('\n');
            }
        }

        if let Some(help) = &self.help {
            output.push_str(&format!("   = help: {}\n", help));
        }

        output
    }

    /// Format as JSON string
    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Format as single-line JSON
    pub fn to_json_compact(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
