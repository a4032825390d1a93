//! Shared small rules: identifier lists, range constants, initializer
//! lists, and object declarations.

use crate::error::RddlError;
use crate::model::{Initializer, Value};
use crate::parser::parser::Parser;
use crate::parser::token_kind::TokenKind;
use smol_str::SmolStr;

impl<'a> Parser<'a> {
    /// Comma-separated identifiers; possibly empty.
    pub(crate) fn parse_ident_list(&mut self) -> Result<Vec<SmolStr>, RddlError> {
        let mut names = Vec::new();
        if self.at(TokenKind::IDENT) {
            names.push(SmolStr::new(self.expect(TokenKind::IDENT)?.text));
            while self.eat(TokenKind::COMMA) {
                names.push(SmolStr::new(self.expect(TokenKind::IDENT)?.text));
            }
        }
        Ok(names)
    }

    /// A signed integer literal.
    pub(crate) fn parse_int_const(&mut self) -> Result<i64, RddlError> {
        let negative = self.eat(TokenKind::MINUS);
        let token = self.expect(TokenKind::INTEGER)?;
        let value = self.int_value(token)?;
        Ok(if negative { -value } else { value })
    }

    /// A range constant: boolean, signed integer, signed double (including
    /// `pos-inf`/`neg-inf`), or a bare identifier for enum-typed values.
    pub(crate) fn parse_range_const(&mut self) -> Result<Value, RddlError> {
        match self.current_kind() {
            Some(TokenKind::TRUE_KW) => {
                self.bump();
                Ok(Value::Bool(true))
            }
            Some(TokenKind::FALSE_KW) => {
                self.bump();
                Ok(Value::Bool(false))
            }
            Some(TokenKind::POS_INF_KW) => {
                self.bump();
                Ok(Value::Real(f64::INFINITY))
            }
            Some(TokenKind::NEG_INF_KW) => {
                self.bump();
                Ok(Value::Real(f64::NEG_INFINITY))
            }
            Some(TokenKind::INTEGER) => {
                let token = self.expect(TokenKind::INTEGER)?;
                Ok(Value::Int(self.int_value(token)?))
            }
            Some(TokenKind::DOUBLE) => {
                let token = self.expect(TokenKind::DOUBLE)?;
                Ok(Value::Real(self.real_value(token)?))
            }
            Some(TokenKind::MINUS) => {
                self.bump();
                match self.current_kind() {
                    Some(TokenKind::INTEGER) => {
                        let token = self.expect(TokenKind::INTEGER)?;
                        Ok(Value::Int(-self.int_value(token)?))
                    }
                    Some(TokenKind::DOUBLE) => {
                        let token = self.expect(TokenKind::DOUBLE)?;
                        Ok(Value::Real(-self.real_value(token)?))
                    }
                    _ => Err(self.syntax_error()),
                }
            }
            Some(TokenKind::IDENT) => {
                let token = self.expect(TokenKind::IDENT)?;
                Ok(Value::Ident(SmolStr::new(token.text)))
            }
            _ => Err(self.syntax_error()),
        }
    }

    /// The body of `init-state` / inline `non-fluents` lists; items until
    /// the closing brace.
    pub(crate) fn parse_pvar_inst_list(&mut self) -> Result<Vec<Initializer>, RddlError> {
        let mut initializers = Vec::new();
        while !self.at(TokenKind::R_BRACE) {
            initializers.push(self.parse_pvar_inst_def()?);
        }
        Ok(initializers)
    }

    /// One initializer. Six shapes: `f(a,b);`, `f;`, `~f(a,b);`, `~f;`,
    /// `f(a,b) = v;`, `f = v;`. Bare atoms mean `true`, negated atoms
    /// `false`.
    fn parse_pvar_inst_def(&mut self) -> Result<Initializer, RddlError> {
        let negated = self.eat(TokenKind::TILDE);
        let name = SmolStr::new(self.expect(TokenKind::IDENT)?.text);
        let args = if self.eat(TokenKind::L_PAREN) {
            let mut labels = vec![self.parse_object_label()?];
            while self.eat(TokenKind::COMMA) {
                labels.push(self.parse_object_label()?);
            }
            self.expect(TokenKind::R_PAREN)?;
            Some(labels)
        } else {
            None
        };
        let value = if negated {
            Value::Bool(false)
        } else if self.eat(TokenKind::EQ) {
            self.parse_range_const()?
        } else {
            Value::Bool(true)
        };
        self.expect(TokenKind::SEMICOLON)?;
        Ok(Initializer { name, args, value })
    }

    /// An object constant or enum label inside initializer arguments.
    fn parse_object_label(&mut self) -> Result<SmolStr, RddlError> {
        match self.current_kind() {
            Some(TokenKind::IDENT | TokenKind::ENUM_VAL) => {
                let Some(token) = self.bump() else {
                    return Err(self.syntax_error());
                };
                Ok(SmolStr::new(token.text))
            }
            _ => Err(self.syntax_error()),
        }
    }

    /// `objects { ty : { a, b, … }; … };`
    pub(crate) fn parse_objects_section(
        &mut self,
    ) -> Result<Vec<(SmolStr, Vec<SmolStr>)>, RddlError> {
        self.expect(TokenKind::OBJECTS_KW)?;
        self.expect(TokenKind::L_BRACE)?;
        let mut objects = Vec::new();
        while self.at(TokenKind::IDENT) {
            let ty = SmolStr::new(self.expect(TokenKind::IDENT)?.text);
            self.expect(TokenKind::COLON)?;
            self.expect(TokenKind::L_BRACE)?;
            let mut names = vec![SmolStr::new(self.expect(TokenKind::IDENT)?.text)];
            while self.eat(TokenKind::COMMA) {
                names.push(SmolStr::new(self.expect(TokenKind::IDENT)?.text));
            }
            self.expect(TokenKind::R_BRACE)?;
            self.expect(TokenKind::SEMICOLON)?;
            objects.push((ty, names));
        }
        self.expect(TokenKind::R_BRACE)?;
        self.expect(TokenKind::SEMICOLON)?;
        self.mark("objects");
        Ok(objects)
    }
}
