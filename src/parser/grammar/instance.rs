//! The `instance NAME { … }` and `non-fluents NAME { … }` blocks.

use crate::error::RddlError;
use crate::model::{Horizon, Instance, MaxNondefActions, NonFluents};
use crate::parser::parser::Parser;
use crate::parser::token_kind::TokenKind;
use smol_str::SmolStr;

impl<'a> Parser<'a> {
    /// Parses an instance block. When the block carries an inline
    /// `non-fluents { … }` list instead of a reference, the anonymous
    /// [`NonFluents`] is returned alongside so the file-level rule can fill
    /// the missing slot with it.
    pub(crate) fn parse_instance_block(
        &mut self,
    ) -> Result<(Instance, Option<NonFluents>), RddlError> {
        self.expect(TokenKind::INSTANCE_KW)?;
        let name = SmolStr::new(self.expect(TokenKind::IDENT)?.text);
        self.expect(TokenKind::L_BRACE)?;

        let mut domain = None;
        let mut non_fluents_name = None;
        let mut inline_non_fluents = None;
        let mut objects = None;
        let mut init_state = None;
        let mut max_nondef_actions = None;
        let mut horizon = None;
        let mut discount = None;

        while !self.at(TokenKind::R_BRACE) {
            match self.current_kind() {
                Some(TokenKind::DOMAIN_KW) => {
                    self.bump();
                    self.expect(TokenKind::EQ)?;
                    domain = Some(SmolStr::new(self.expect(TokenKind::IDENT)?.text));
                    self.expect(TokenKind::SEMICOLON)?;
                }
                Some(TokenKind::NON_FLUENTS_KW) => {
                    self.bump();
                    if self.eat(TokenKind::EQ) {
                        non_fluents_name = Some(SmolStr::new(self.expect(TokenKind::IDENT)?.text));
                        self.expect(TokenKind::SEMICOLON)?;
                    } else {
                        self.expect(TokenKind::L_BRACE)?;
                        let init_non_fluent = self.parse_pvar_inst_list()?;
                        self.expect(TokenKind::R_BRACE)?;
                        self.expect(TokenKind::SEMICOLON)?;
                        inline_non_fluents = Some(NonFluents {
                            name: SmolStr::new("anonymous"),
                            domain: None,
                            objects: Vec::new(),
                            init_non_fluent,
                        });
                    }
                    self.mark("non-fluents");
                }
                Some(TokenKind::OBJECTS_KW) => objects = Some(self.parse_objects_section()?),
                Some(TokenKind::INIT_STATE_KW) => {
                    self.bump();
                    self.expect(TokenKind::L_BRACE)?;
                    init_state = Some(self.parse_pvar_inst_list()?);
                    self.expect(TokenKind::R_BRACE)?;
                    self.expect(TokenKind::SEMICOLON)?;
                    self.mark("init-state");
                }
                Some(TokenKind::MAX_NONDEF_ACTIONS_KW) => {
                    self.bump();
                    self.expect(TokenKind::EQ)?;
                    let value = if self.eat(TokenKind::POS_INF_KW) {
                        MaxNondefActions::PosInf
                    } else {
                        let token = self.expect(TokenKind::INTEGER)?;
                        MaxNondefActions::Finite(self.int_value(token)?)
                    };
                    self.expect(TokenKind::SEMICOLON)?;
                    max_nondef_actions = Some(value);
                    self.mark("max-nondef-actions");
                }
                Some(TokenKind::HORIZON_KW) => {
                    self.bump();
                    self.expect(TokenKind::EQ)?;
                    let value = match self.current_kind() {
                        Some(TokenKind::POS_INF_KW) => {
                            self.bump();
                            self.expect(TokenKind::SEMICOLON)?;
                            Horizon::PosInf
                        }
                        Some(TokenKind::TERMINATE_WHEN_KW) => {
                            self.bump();
                            self.expect(TokenKind::L_PAREN)?;
                            let expr = self.parse_full_expr()?;
                            self.expect(TokenKind::R_PAREN)?;
                            // The terminating semicolon is optional here.
                            self.eat(TokenKind::SEMICOLON);
                            Horizon::TerminateWhen(expr)
                        }
                        _ => {
                            let token = self.expect(TokenKind::INTEGER)?;
                            let steps = self.int_value(token)?;
                            self.expect(TokenKind::SEMICOLON)?;
                            Horizon::Fixed(steps)
                        }
                    };
                    horizon = Some(value);
                    self.mark("horizon");
                }
                Some(TokenKind::DISCOUNT_KW) => {
                    self.bump();
                    self.expect(TokenKind::EQ)?;
                    let token = self.expect(TokenKind::DOUBLE)?;
                    discount = Some(self.real_value(token)?);
                    self.expect(TokenKind::SEMICOLON)?;
                    self.mark("discount");
                }
                _ => return Err(self.syntax_error()),
            }
        }
        self.expect(TokenKind::R_BRACE)?;
        tracing::debug!(instance = %name, "instance block parsed");

        let non_fluents = match (non_fluents_name, &inline_non_fluents) {
            (Some(referenced), _) => referenced,
            (None, Some(_)) => SmolStr::new("anonymous"),
            (None, None) => {
                return Err(RddlError::MissingSection {
                    block: "instance",
                    section: "non-fluents",
                });
            }
        };
        let instance = Instance {
            name,
            domain: domain.ok_or(RddlError::MissingSection {
                block: "instance",
                section: "domain",
            })?,
            non_fluents,
            objects,
            init_state: init_state.unwrap_or_default(),
            max_nondef_actions: max_nondef_actions.ok_or(RddlError::MissingSection {
                block: "instance",
                section: "max-nondef-actions",
            })?,
            horizon: horizon.ok_or(RddlError::MissingSection {
                block: "instance",
                section: "horizon",
            })?,
            discount: discount.ok_or(RddlError::MissingSection {
                block: "instance",
                section: "discount",
            })?,
        };
        Ok((instance, inline_non_fluents))
    }

    pub(crate) fn parse_nonfluents_block(&mut self) -> Result<NonFluents, RddlError> {
        self.expect(TokenKind::NON_FLUENTS_KW)?;
        let name = SmolStr::new(self.expect(TokenKind::IDENT)?.text);
        self.expect(TokenKind::L_BRACE)?;

        let mut domain = None;
        let mut objects = None;
        let mut init_non_fluent = None;

        while !self.at(TokenKind::R_BRACE) {
            match self.current_kind() {
                Some(TokenKind::DOMAIN_KW) => {
                    self.bump();
                    self.expect(TokenKind::EQ)?;
                    domain = Some(SmolStr::new(self.expect(TokenKind::IDENT)?.text));
                    self.expect(TokenKind::SEMICOLON)?;
                }
                Some(TokenKind::OBJECTS_KW) => objects = Some(self.parse_objects_section()?),
                Some(TokenKind::NON_FLUENTS_KW) => {
                    self.bump();
                    self.expect(TokenKind::L_BRACE)?;
                    init_non_fluent = Some(self.parse_pvar_inst_list()?);
                    self.expect(TokenKind::R_BRACE)?;
                    self.expect(TokenKind::SEMICOLON)?;
                    self.mark("init-non-fluent");
                }
                _ => return Err(self.syntax_error()),
            }
        }
        self.expect(TokenKind::R_BRACE)?;
        tracing::debug!(non_fluents = %name, "non-fluents block parsed");

        Ok(NonFluents {
            name,
            domain,
            objects: objects.unwrap_or_default(),
            init_non_fluent: init_non_fluent.unwrap_or_default(),
        })
    }
}
