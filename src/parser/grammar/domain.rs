//! The `domain { … }` block and its sections.
//!
//! Sections after the optional leading `requirements` may appear in any
//! order; a repeated section overwrites the earlier one. `pvariables`,
//! `cpfs` (or `cdfs`), and `reward` are required.

use crate::error::RddlError;
use crate::model::{Cpf, CpfHeader, Domain, FluentType, PVariable, RangeType, TypeDef};
use crate::parser::parser::Parser;
use crate::parser::token_kind::TokenKind;
use crate::syntax::Expression;
use smol_str::SmolStr;

impl<'a> Parser<'a> {
    pub(crate) fn parse_domain_block(&mut self) -> Result<Domain, RddlError> {
        self.expect(TokenKind::DOMAIN_KW)?;
        let name = SmolStr::new(self.expect(TokenKind::IDENT)?.text);
        self.expect(TokenKind::L_BRACE)?;

        let requirements = if self.at(TokenKind::REQUIREMENTS_KW) {
            self.parse_requirements_section()?
        } else {
            Vec::new()
        };

        let mut types = None;
        let mut pvariables = None;
        let mut cpfs = None;
        let mut reward = None;
        let mut preconds = None;
        let mut constraints = None;
        let mut invariants = None;

        while !self.at(TokenKind::R_BRACE) {
            match self.current_kind() {
                Some(TokenKind::TYPES_KW) => types = Some(self.parse_types_section()?),
                Some(TokenKind::PVARIABLES_KW) => {
                    pvariables = Some(self.parse_pvariables_section()?);
                }
                Some(TokenKind::CPFS_KW | TokenKind::CDFS_KW) => {
                    cpfs = Some(self.parse_cpfs_section()?);
                }
                Some(TokenKind::REWARD_KW) => reward = Some(self.parse_reward_section()?),
                Some(TokenKind::ACTION_PRECONDITIONS_KW) => {
                    preconds = Some(self.parse_expr_section(
                        TokenKind::ACTION_PRECONDITIONS_KW,
                        "action-preconditions",
                    )?);
                }
                Some(TokenKind::STATE_ACTION_CONSTRAINTS_KW) => {
                    constraints = Some(self.parse_expr_section(
                        TokenKind::STATE_ACTION_CONSTRAINTS_KW,
                        "state-action-constraints",
                    )?);
                }
                Some(TokenKind::STATE_INVARIANTS_KW) => {
                    invariants = Some(
                        self.parse_expr_section(TokenKind::STATE_INVARIANTS_KW, "state-invariants")?,
                    );
                }
                _ => return Err(self.syntax_error()),
            }
        }
        self.expect(TokenKind::R_BRACE)?;
        tracing::debug!(domain = %name, "domain block parsed");

        Ok(Domain {
            name,
            requirements,
            types: types.unwrap_or_default(),
            pvariables: pvariables.ok_or(RddlError::MissingSection {
                block: "domain",
                section: "pvariables",
            })?,
            cpfs: cpfs.ok_or(RddlError::MissingSection {
                block: "domain",
                section: "cpfs",
            })?,
            reward: reward.ok_or(RddlError::MissingSection {
                block: "domain",
                section: "reward",
            })?,
            preconds: preconds.unwrap_or_default(),
            constraints: constraints.unwrap_or_default(),
            invariants: invariants.unwrap_or_default(),
        })
    }

    /// `requirements = { id, … };`; the `=` is optional.
    fn parse_requirements_section(&mut self) -> Result<Vec<SmolStr>, RddlError> {
        self.expect(TokenKind::REQUIREMENTS_KW)?;
        self.eat(TokenKind::EQ);
        self.expect(TokenKind::L_BRACE)?;
        let requirements = self.parse_ident_list()?;
        self.expect(TokenKind::R_BRACE)?;
        self.expect(TokenKind::SEMICOLON)?;
        self.mark("requirements");
        Ok(requirements)
    }

    /// `types { t : object; u : {@a, @b}; … };`
    fn parse_types_section(&mut self) -> Result<Vec<(SmolStr, TypeDef)>, RddlError> {
        self.expect(TokenKind::TYPES_KW)?;
        self.expect(TokenKind::L_BRACE)?;
        let mut types = Vec::new();
        while self.at(TokenKind::IDENT) {
            let name = SmolStr::new(self.expect(TokenKind::IDENT)?.text);
            self.expect(TokenKind::COLON)?;
            let def = if self.eat(TokenKind::OBJECT_KW) {
                TypeDef::Object
            } else {
                self.expect(TokenKind::L_BRACE)?;
                let mut labels = Vec::new();
                if self.at(TokenKind::ENUM_VAL) {
                    labels.push(SmolStr::new(self.expect(TokenKind::ENUM_VAL)?.text));
                    while self.eat(TokenKind::COMMA) {
                        labels.push(SmolStr::new(self.expect(TokenKind::ENUM_VAL)?.text));
                    }
                }
                self.expect(TokenKind::R_BRACE)?;
                TypeDef::Enum(labels)
            };
            self.expect(TokenKind::SEMICOLON)?;
            types.push((name, def));
        }
        self.expect(TokenKind::R_BRACE)?;
        self.expect(TokenKind::SEMICOLON)?;
        self.mark("types");
        Ok(types)
    }

    fn parse_pvariables_section(&mut self) -> Result<Vec<PVariable>, RddlError> {
        self.expect(TokenKind::PVARIABLES_KW)?;
        self.expect(TokenKind::L_BRACE)?;
        let mut pvariables = Vec::new();
        while self.at(TokenKind::IDENT) {
            pvariables.push(self.parse_pvariable_def()?);
        }
        self.expect(TokenKind::R_BRACE)?;
        self.expect(TokenKind::SEMICOLON)?;
        self.mark("pvariables");
        Ok(pvariables)
    }

    /// `name(params?) : { <kind>, <range>, default = v };` (interm-fluents
    /// use `level = n` in the third slot instead).
    fn parse_pvariable_def(&mut self) -> Result<PVariable, RddlError> {
        let name = SmolStr::new(self.expect(TokenKind::IDENT)?.text);
        let param_types = if self.eat(TokenKind::L_PAREN) {
            let params = self.parse_ident_list()?;
            self.expect(TokenKind::R_PAREN)?;
            Some(params)
        } else {
            None
        };
        self.expect(TokenKind::COLON)?;
        self.expect(TokenKind::L_BRACE)?;
        let fluent_type = match self.current_kind() {
            Some(TokenKind::NON_FLUENT_KW) => FluentType::NonFluent,
            Some(TokenKind::STATE_FLUENT_KW) => FluentType::StateFluent,
            Some(TokenKind::ACTION_FLUENT_KW) => FluentType::ActionFluent,
            Some(TokenKind::INTERM_FLUENT_KW) => FluentType::IntermFluent,
            _ => return Err(self.syntax_error()),
        };
        self.bump();
        self.expect(TokenKind::COMMA)?;
        let range = self.parse_range_type()?;
        self.expect(TokenKind::COMMA)?;
        let (default, level) = if fluent_type == FluentType::IntermFluent {
            self.expect(TokenKind::LEVEL_KW)?;
            self.expect(TokenKind::EQ)?;
            (None, Some(self.parse_int_const()?))
        } else {
            self.expect(TokenKind::DEFAULT_KW)?;
            self.expect(TokenKind::EQ)?;
            (Some(self.parse_range_const()?), None)
        };
        self.expect(TokenKind::R_BRACE)?;
        self.expect(TokenKind::SEMICOLON)?;
        Ok(PVariable {
            name,
            fluent_type,
            range,
            param_types,
            default,
            level,
        })
    }

    fn parse_range_type(&mut self) -> Result<RangeType, RddlError> {
        match self.current_kind() {
            Some(TokenKind::BOOL_KW) => {
                self.bump();
                Ok(RangeType::Bool)
            }
            Some(TokenKind::INT_KW) => {
                self.bump();
                Ok(RangeType::Int)
            }
            Some(TokenKind::REAL_KW) => {
                self.bump();
                Ok(RangeType::Real)
            }
            Some(TokenKind::IDENT) => {
                let token = self.expect(TokenKind::IDENT)?;
                Ok(RangeType::Enum(SmolStr::new(token.text)))
            }
            _ => Err(self.syntax_error()),
        }
    }

    /// `cpfs { head = expr; … };`; `cdfs` introduces the same structure.
    fn parse_cpfs_section(&mut self) -> Result<(CpfHeader, Vec<Cpf>), RddlError> {
        let header = if self.eat(TokenKind::CPFS_KW) {
            CpfHeader::Cpfs
        } else {
            self.expect(TokenKind::CDFS_KW)?;
            CpfHeader::Cdfs
        };
        self.expect(TokenKind::L_BRACE)?;
        let mut cpfs = Vec::new();
        while self.at(TokenKind::IDENT) {
            let pvar = self.parse_pvar_head()?;
            self.expect(TokenKind::EQ)?;
            let expr = self.parse_full_expr()?;
            self.expect(TokenKind::SEMICOLON)?;
            cpfs.push(Cpf::new(pvar, expr));
        }
        self.expect(TokenKind::R_BRACE)?;
        self.expect(TokenKind::SEMICOLON)?;
        self.mark("cpfs");
        Ok((header, cpfs))
    }

    fn parse_reward_section(&mut self) -> Result<Expression, RddlError> {
        self.expect(TokenKind::REWARD_KW)?;
        self.expect(TokenKind::EQ)?;
        let reward = self.parse_full_expr()?;
        self.expect(TokenKind::SEMICOLON)?;
        self.mark("reward");
        Ok(reward)
    }

    /// The three constraint-flavored sections share one shape: a possibly
    /// empty braced list of `expr;` items.
    fn parse_expr_section(
        &mut self,
        keyword: TokenKind,
        section: &str,
    ) -> Result<Vec<Expression>, RddlError> {
        self.expect(keyword)?;
        self.expect(TokenKind::L_BRACE)?;
        let mut exprs = Vec::new();
        while !self.at(TokenKind::R_BRACE) {
            let expr = self.parse_full_expr()?;
            self.expect(TokenKind::SEMICOLON)?;
            exprs.push(expr);
        }
        self.expect(TokenKind::R_BRACE)?;
        self.expect(TokenKind::SEMICOLON)?;
        self.mark(section);
        Ok(exprs)
    }
}
