//! Top-level structure: a source file is any interleaving of `domain`,
//! `instance`, and `non-fluents` blocks; for repeated blocks of the same
//! kind the last one wins.

use crate::error::RddlError;
use crate::model::Rddl;
use crate::parser::parser::Parser;
use crate::parser::token_kind::TokenKind;

impl<'a> Parser<'a> {
    pub(crate) fn parse_file(&mut self) -> Result<Rddl, RddlError> {
        let mut domain = None;
        let mut non_fluents = None;
        let mut inline_non_fluents = None;
        let mut instance = None;

        while !self.at_eof() {
            match self.current_kind() {
                Some(TokenKind::DOMAIN_KW) => domain = Some(self.parse_domain_block()?),
                Some(TokenKind::NON_FLUENTS_KW) => {
                    non_fluents = Some(self.parse_nonfluents_block()?);
                }
                Some(TokenKind::INSTANCE_KW) => {
                    let (parsed, inline) = self.parse_instance_block()?;
                    instance = Some(parsed);
                    if inline.is_some() {
                        inline_non_fluents = inline;
                    }
                }
                _ => return Err(self.syntax_error()),
            }
        }

        // An inline anonymous non-fluents list only fills the slot when no
        // named block exists.
        let non_fluents = non_fluents.or(inline_non_fluents);

        let domain = domain.ok_or(RddlError::MissingBlock("domain"))?;
        let non_fluents = non_fluents.ok_or(RddlError::MissingBlock("non-fluents"))?;
        let instance = instance.ok_or(RddlError::MissingBlock("instance"))?;
        Ok(Rddl::new(domain, non_fluents, instance))
    }
}
