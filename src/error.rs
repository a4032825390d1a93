//! Error types shared across the lexer, parser, and semantic model.

use thiserror::Error;

/// Errors surfaced by parsing and by the post-parse build step.
///
/// The parser aborts on the first syntax error; no partial result is
/// returned. Lexer diagnostics (illegal characters) are reported to
/// standard error and do not appear here.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RddlError {
    /// First offending token seen by the parser.
    #[error("Syntax error in input! Line: {line} failed token:\n{token}")]
    Syntax { line: u32, token: String },

    /// A source without one of the three top-level blocks.
    #[error("missing top-level `{0}` block")]
    MissingBlock(&'static str),

    /// A block without one of its required sections.
    #[error("missing `{section}` section in `{block}` block")]
    MissingSection {
        block: &'static str,
        section: &'static str,
    },

    /// An `object`-kind type with no object list in the non-fluents block.
    #[error("no objects declared for object type `{0}`")]
    MissingObjects(String),

    /// A canonical fluent name without the `/arity` separator.
    #[error("malformed fluent name `{0}`: missing `/` separator")]
    MalformedName(String),

    /// `current_of` applied to a name whose functor carries no prime.
    #[error("CPF head is not a primed state-fluent: `{0}`")]
    NotPrimed(String),

    /// `next_of` applied to a name whose functor is already primed.
    #[error("fluent name `{0}` is already primed")]
    AlreadyPrimed(String),
}
