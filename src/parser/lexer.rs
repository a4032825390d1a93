//! Logos-based lexer for RDDL.
//!
//! Whitespace and `//` comments are skipped by the token definitions; line
//! breaks surface as a trivia token so the wrapper can keep a 1-based line
//! counter, then disappear from the stream. Illegal characters are reported
//! on standard error and skipped, so a lexical error shows up downstream as
//! a parse error at the next token.

use super::token_kind::TokenKind;
use logos::Logos;

/// A token with its kind, lexeme, and 1-based source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub line: u32,
}

/// Lexer wrapping the logos-generated tokenizer.
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, TokenKind>,
    line: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: TokenKind::lexer(input),
            line: 1,
        }
    }

    /// Line number the lexer has advanced to.
    pub fn line(&self) -> u32 {
        self.line
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let result = self.inner.next()?;
            let text = self.inner.slice();
            match result {
                Ok(TokenKind::NEWLINE) => self.line += text.len() as u32,
                Ok(kind) => {
                    return Some(Token {
                        kind,
                        text,
                        line: self.line,
                    });
                }
                Err(()) => {
                    let c = text.chars().next().unwrap_or('\u{fffd}');
                    eprintln!("Illegal character: {} at line {}", c, self.line);
                }
            }
        }
    }
}

/// Tokenize an entire string into a Vec.
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}
