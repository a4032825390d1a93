//! Parser state and entry points.
//!
//! [`Parser`] holds the token buffer and cursor; the grammar rules live in
//! [`super::grammar`] as `impl Parser` blocks grouped per area. The public
//! surface is [`RddlParser`] (carries the `verbose`/`debug` options) and the
//! [`parse_rddl`] convenience function.

use super::lexer::{Lexer, Token};
use super::token_kind::TokenKind;
use crate::error::RddlError;
use crate::model::Rddl;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

/// Check if the parse-trace log is enabled by the environment.
fn debug_enabled() -> bool {
    std::env::var("RDDL_PARSER_DEBUG").is_ok()
}

/// Configurable parser front end.
///
/// `verbose` prints a marker to standard error after each major section;
/// `debug` appends a best-effort parse trace to `rddl_parse.log` under the
/// system temporary directory. Parsing itself is a pure function of the
/// input text.
#[derive(Debug, Clone, Default)]
pub struct RddlParser {
    verbose: bool,
    debugging: bool,
}

impl RddlParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn debug(mut self, debugging: bool) -> Self {
        self.debugging = debugging;
        self
    }

    /// Location of the parse-trace log written in debug mode.
    pub fn trace_path() -> PathBuf {
        std::env::temp_dir().join("rddl_parse.log")
    }

    /// Parse a complete RDDL source into its semantic model.
    ///
    /// On failure the diagnostic is written to standard error and the same
    /// error is returned; no partial result exists.
    pub fn parse(&self, input: &str) -> Result<Rddl, RddlError> {
        let trace = if self.debugging || debug_enabled() {
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(Self::trace_path())
                .ok()
        } else {
            None
        };
        let mut parser = Parser::new(input, self.verbose, trace);
        parser.parse_file().inspect_err(|err| eprintln!("{err}"))
    }
}

/// Parse RDDL source text with default options.
pub fn parse_rddl(input: &str) -> Result<Rddl, RddlError> {
    RddlParser::new().parse(input)
}

/// The parser state.
pub(crate) struct Parser<'a> {
    tokens: Vec<Token<'a>>,
    pos: usize,
    verbose: bool,
    trace: Option<File>,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(input: &'a str, verbose: bool, trace: Option<File>) -> Self {
        Self {
            tokens: Lexer::new(input).collect(),
            pos: 0,
            verbose,
            trace,
        }
    }

    // =========================================================================
    // Token inspection
    // =========================================================================

    pub(crate) fn current(&self) -> Option<&Token<'a>> {
        self.tokens.get(self.pos)
    }

    pub(crate) fn current_kind(&self) -> Option<TokenKind> {
        self.current().map(|token| token.kind)
    }

    pub(crate) fn at(&self, kind: TokenKind) -> bool {
        self.current_kind() == Some(kind)
    }

    pub(crate) fn at_eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    // =========================================================================
    // Token consumption
    // =========================================================================

    pub(crate) fn bump(&mut self) -> Option<Token<'a>> {
        let token = self.current().copied();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    pub(crate) fn eat(&mut self, kind: TokenKind) -> bool {
        if self.at(kind) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    pub(crate) fn expect(&mut self, kind: TokenKind) -> Result<Token<'a>, RddlError> {
        match self.current() {
            Some(&token) if token.kind == kind => {
                self.pos += 1;
                Ok(token)
            }
            _ => Err(self.syntax_error()),
        }
    }

    // =========================================================================
    // Diagnostics
    // =========================================================================

    /// The non-recoverable syntax error at the current token.
    pub(crate) fn syntax_error(&self) -> RddlError {
        match self.current() {
            Some(token) => RddlError::Syntax {
                line: token.line,
                token: format!("{token:?}"),
            },
            None => RddlError::Syntax {
                line: self.tokens.last().map(|token| token.line).unwrap_or(1),
                token: "<end of input>".to_string(),
            },
        }
    }

    /// Marker emitted after a major section has been reduced.
    pub(crate) fn mark(&mut self, section: &str) {
        if self.verbose {
            eprintln!(">> Parsed `{section}` ...");
        }
        if let Some(file) = self.trace.as_mut() {
            let _ = writeln!(file, "reduced {section}");
        }
        tracing::debug!(section, "section parsed");
    }

    // =========================================================================
    // Literal decoding
    // =========================================================================

    pub(crate) fn int_value(&self, token: Token<'a>) -> Result<i64, RddlError> {
        token.text.parse().map_err(|_| RddlError::Syntax {
            line: token.line,
            token: format!("{token:?}"),
        })
    }

    pub(crate) fn real_value(&self, token: Token<'a>) -> Result<f64, RddlError> {
        token.text.parse().map_err(|_| RddlError::Syntax {
            line: token.line,
            token: format!("{token:?}"),
        })
    }
}
