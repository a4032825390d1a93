//! The unified expression grammar.
//!
//! A Pratt loop over one `expr` production covers every flavor. Binding
//! powers encode the RDDL operator table, lowest first:
//!
//! ```text
//!  1  if            8  |                12  + -
//!  2  = (cpf defs)  9  ^ &             13  * /
//!  3  exists       10  ~               14  unary + - ~
//!  4  forall       11  == ~= < <= > >=
//!  5  aggregation
//!  6  <=>
//!  7  =>
//! ```
//!
//! A left-associative operator at level `n` gets the pair `(2n, 2n + 1)`;
//! prefix constructs parse their body with the right power of their level.
//! Because every infix operator sits above level 5, a quantifier or
//! aggregation body keeps absorbing operators until a structural token
//! (`;`, `)`, `]`, `,`, `}`) stops it, which is exactly the shift-preferring
//! behavior of the operator table.

use crate::error::RddlError;
use crate::parser::parser::Parser;
use crate::parser::token_kind::TokenKind;
use crate::syntax::{
    BinaryOp, CaseArm, Expression, Number, PVarExpr, QuantKind, Term, TypedVar, UnaryOp,
};
use smol_str::SmolStr;

const IF_ELSE_RBP: u8 = 3;
const EXISTS_RBP: u8 = 7;
const FORALL_RBP: u8 = 9;
const AGG_RBP: u8 = 11;
const UNARY_RBP: u8 = 28;

fn infix_binding(kind: TokenKind) -> Option<(u8, u8, BinaryOp)> {
    let binding = match kind {
        TokenKind::EQUIV => (12, 13, BinaryOp::Equiv),
        TokenKind::IMPLY => (14, 15, BinaryOp::Implies),
        TokenKind::PIPE => (16, 17, BinaryOp::Or),
        TokenKind::CARET => (18, 19, BinaryOp::And),
        TokenKind::AMP => (18, 19, BinaryOp::Amp),
        TokenKind::EQ_EQ => (22, 23, BinaryOp::Eq),
        TokenKind::NEQ => (22, 23, BinaryOp::Neq),
        TokenKind::LT => (22, 23, BinaryOp::Lt),
        TokenKind::LT_EQ => (22, 23, BinaryOp::LtEq),
        TokenKind::GT => (22, 23, BinaryOp::Gt),
        TokenKind::GT_EQ => (22, 23, BinaryOp::GtEq),
        TokenKind::PLUS => (24, 25, BinaryOp::Add),
        TokenKind::MINUS => (24, 25, BinaryOp::Sub),
        TokenKind::STAR => (26, 27, BinaryOp::Mul),
        TokenKind::SLASH => (26, 27, BinaryOp::Div),
        _ => return None,
    };
    Some(binding)
}

impl<'a> Parser<'a> {
    /// Entry point: a complete expression.
    pub(crate) fn parse_full_expr(&mut self) -> Result<Expression, RddlError> {
        self.parse_expr_bp(0)
    }

    fn parse_expr_bp(&mut self, min_bp: u8) -> Result<Expression, RddlError> {
        let mut lhs = self.parse_prefix()?;
        while let Some(kind) = self.current_kind() {
            let Some((l_bp, r_bp, op)) = infix_binding(kind) else {
                break;
            };
            if l_bp < min_bp {
                break;
            }
            self.bump();
            let rhs = self.parse_expr_bp(r_bp)?;
            lhs = Expression::binary(op, lhs, rhs);
        }
        Ok(lhs)
    }

    fn parse_prefix(&mut self) -> Result<Expression, RddlError> {
        match self.current_kind() {
            Some(TokenKind::INTEGER) => {
                let token = self.expect(TokenKind::INTEGER)?;
                Ok(Expression::Number(Number::Int(self.int_value(token)?)))
            }
            Some(TokenKind::DOUBLE) => {
                let token = self.expect(TokenKind::DOUBLE)?;
                Ok(Expression::Number(Number::Real(self.real_value(token)?)))
            }
            Some(TokenKind::TRUE_KW) => {
                self.bump();
                Ok(Expression::Boolean(true))
            }
            Some(TokenKind::FALSE_KW) => {
                self.bump();
                Ok(Expression::Boolean(false))
            }
            Some(TokenKind::MINUS) => {
                self.bump();
                let operand = self.parse_expr_bp(UNARY_RBP)?;
                Ok(Expression::unary(UnaryOp::Neg, operand))
            }
            Some(TokenKind::PLUS) => {
                self.bump();
                let operand = self.parse_expr_bp(UNARY_RBP)?;
                Ok(Expression::unary(UnaryOp::Pos, operand))
            }
            Some(TokenKind::TILDE) => {
                self.bump();
                let operand = self.parse_expr_bp(UNARY_RBP)?;
                Ok(Expression::unary(UnaryOp::Not, operand))
            }
            // Parentheses and brackets both group; the inner expression
            // passes through unchanged.
            Some(TokenKind::L_PAREN) => {
                self.bump();
                let inner = self.parse_full_expr()?;
                self.expect(TokenKind::R_PAREN)?;
                Ok(inner)
            }
            Some(TokenKind::L_BRACKET) => {
                self.bump();
                let inner = self.parse_full_expr()?;
                self.expect(TokenKind::R_BRACKET)?;
                Ok(inner)
            }
            Some(TokenKind::IF_KW) => self.parse_if_expr(),
            Some(TokenKind::SWITCH_KW) => self.parse_switch_expr(),
            Some(TokenKind::FORALL_KW) => self.parse_quantifier(QuantKind::Forall, FORALL_RBP),
            Some(TokenKind::EXISTS_KW) => self.parse_quantifier(QuantKind::Exists, EXISTS_RBP),
            Some(TokenKind::IDENT) => self.parse_ident_expr(),
            Some(
                TokenKind::KRON_DELTA_KW
                | TokenKind::DIRAC_DELTA_KW
                | TokenKind::UNIFORM_KW
                | TokenKind::BERNOULLI_KW
                | TokenKind::DISCRETE_KW
                | TokenKind::NORMAL_KW
                | TokenKind::POISSON_KW
                | TokenKind::EXPONENTIAL_KW
                | TokenKind::WEIBULL_KW
                | TokenKind::GAMMA_KW
                | TokenKind::DIRICHLET_KW,
            ) => self.parse_randomvar(),
            _ => Err(self.syntax_error()),
        }
    }

    /// An identifier starts a fluent reference, a bracketed function call,
    /// or (followed by `_ {`) an aggregation with that identifier as the
    /// operator. The operator is not validated here.
    fn parse_ident_expr(&mut self) -> Result<Expression, RddlError> {
        let name = SmolStr::new(self.expect(TokenKind::IDENT)?.text);
        match self.current_kind() {
            Some(TokenKind::L_PAREN) => {
                self.bump();
                let args = self.parse_term_list()?;
                self.expect(TokenKind::R_PAREN)?;
                Ok(Expression::PVar(PVarExpr::new(name, Some(args))))
            }
            Some(TokenKind::L_BRACKET) => {
                self.bump();
                let mut args = vec![self.parse_full_expr()?];
                while self.eat(TokenKind::COMMA) {
                    args.push(self.parse_full_expr()?);
                }
                self.expect(TokenKind::R_BRACKET)?;
                Ok(Expression::Func(name, args))
            }
            Some(TokenKind::UNDERSCORE) => {
                self.bump();
                let vars = self.parse_typed_var_list()?;
                let body = self.parse_expr_bp(AGG_RBP)?;
                Ok(Expression::Aggregation(name, vars, Box::new(body)))
            }
            _ => Ok(Expression::PVar(PVarExpr::new(name, None))),
        }
    }

    fn parse_quantifier(&mut self, kind: QuantKind, r_bp: u8) -> Result<Expression, RddlError> {
        self.bump();
        self.expect(TokenKind::UNDERSCORE)?;
        let vars = self.parse_typed_var_list()?;
        let body = self.parse_expr_bp(r_bp)?;
        Ok(Expression::Quantifier(kind, vars, Box::new(body)))
    }

    /// `{ ?x : T, ?y : U, … }`, non-empty.
    fn parse_typed_var_list(&mut self) -> Result<Vec<TypedVar>, RddlError> {
        self.expect(TokenKind::L_BRACE)?;
        let mut vars = vec![self.parse_typed_var()?];
        while self.eat(TokenKind::COMMA) {
            vars.push(self.parse_typed_var()?);
        }
        self.expect(TokenKind::R_BRACE)?;
        Ok(vars)
    }

    fn parse_typed_var(&mut self) -> Result<TypedVar, RddlError> {
        let var = SmolStr::new(self.expect(TokenKind::VAR)?.text);
        self.expect(TokenKind::COLON)?;
        let ty = SmolStr::new(self.expect(TokenKind::IDENT)?.text);
        Ok(TypedVar { var, ty })
    }

    /// `if (cond) then e1 else e2`. The else branch extends as far to the
    /// right as the operator table allows.
    fn parse_if_expr(&mut self) -> Result<Expression, RddlError> {
        self.expect(TokenKind::IF_KW)?;
        self.expect(TokenKind::L_PAREN)?;
        let cond = self.parse_full_expr()?;
        self.expect(TokenKind::R_PAREN)?;
        self.expect(TokenKind::THEN_KW)?;
        let then = self.parse_full_expr()?;
        self.expect(TokenKind::ELSE_KW)?;
        let otherwise = self.parse_expr_bp(IF_ELSE_RBP)?;
        Ok(Expression::If(
            Box::new(cond),
            Box::new(then),
            Box::new(otherwise),
        ))
    }

    /// `switch (term) { case t : e, …, default : e }`
    fn parse_switch_expr(&mut self) -> Result<Expression, RddlError> {
        self.expect(TokenKind::SWITCH_KW)?;
        self.expect(TokenKind::L_PAREN)?;
        let scrutinee = self.parse_term()?;
        self.expect(TokenKind::R_PAREN)?;
        self.expect(TokenKind::L_BRACE)?;
        let mut arms = vec![self.parse_case_arm()?];
        while self.eat(TokenKind::COMMA) {
            arms.push(self.parse_case_arm()?);
        }
        self.expect(TokenKind::R_BRACE)?;
        Ok(Expression::Switch(scrutinee, arms))
    }

    fn parse_case_arm(&mut self) -> Result<CaseArm, RddlError> {
        if self.eat(TokenKind::DEFAULT_KW) {
            self.expect(TokenKind::COLON)?;
            Ok(CaseArm::Default(self.parse_full_expr()?))
        } else {
            self.expect(TokenKind::CASE_KW)?;
            let term = self.parse_term()?;
            self.expect(TokenKind::COLON)?;
            Ok(CaseArm::Case(term, self.parse_full_expr()?))
        }
    }

    /// Distribution terms have fixed shapes; `Discrete` and `Dirichlet`
    /// take the enum type first, distinct from the value arguments.
    fn parse_randomvar(&mut self) -> Result<Expression, RddlError> {
        let Some(token) = self.bump() else {
            return Err(self.syntax_error());
        };
        let name = SmolStr::new(token.text);
        self.expect(TokenKind::L_PAREN)?;
        let args = match token.kind {
            TokenKind::KRON_DELTA_KW
            | TokenKind::DIRAC_DELTA_KW
            | TokenKind::BERNOULLI_KW
            | TokenKind::EXPONENTIAL_KW
            | TokenKind::POISSON_KW => vec![self.parse_full_expr()?],
            TokenKind::UNIFORM_KW
            | TokenKind::NORMAL_KW
            | TokenKind::WEIBULL_KW
            | TokenKind::GAMMA_KW => {
                let first = self.parse_full_expr()?;
                self.expect(TokenKind::COMMA)?;
                let second = self.parse_full_expr()?;
                vec![first, second]
            }
            TokenKind::DISCRETE_KW => {
                let ty = SmolStr::new(self.expect(TokenKind::IDENT)?.text);
                self.expect(TokenKind::COMMA)?;
                let mut args = vec![Expression::EnumType(ty), self.parse_lconst_clause()?];
                while self.eat(TokenKind::COMMA) {
                    args.push(self.parse_lconst_clause()?);
                }
                args
            }
            TokenKind::DIRICHLET_KW => {
                let ty = SmolStr::new(self.expect(TokenKind::IDENT)?.text);
                self.expect(TokenKind::COMMA)?;
                vec![Expression::EnumType(ty), self.parse_full_expr()?]
            }
            _ => return Err(self.syntax_error()),
        };
        self.expect(TokenKind::R_PAREN)?;
        Ok(Expression::RandomVar(name, args))
    }

    /// `label : expr` clause inside `Discrete`.
    fn parse_lconst_clause(&mut self) -> Result<Expression, RddlError> {
        let label = match self.current_kind() {
            Some(TokenKind::IDENT | TokenKind::ENUM_VAL) => {
                let Some(token) = self.bump() else {
                    return Err(self.syntax_error());
                };
                SmolStr::new(token.text)
            }
            _ => return Err(self.syntax_error()),
        };
        self.expect(TokenKind::COLON)?;
        let expr = self.parse_full_expr()?;
        Ok(Expression::LConst(label, Box::new(expr)))
    }

    // =========================================================================
    // Terms
    // =========================================================================

    /// Comma-separated terms; possibly empty (stops at `)`).
    pub(crate) fn parse_term_list(&mut self) -> Result<Vec<Term>, RddlError> {
        let mut terms = Vec::new();
        if !self.at(TokenKind::R_PAREN) {
            terms.push(self.parse_term()?);
            while self.eat(TokenKind::COMMA) {
                terms.push(self.parse_term()?);
            }
        }
        Ok(terms)
    }

    /// A term: variable, enum value, or (possibly nullary) fluent
    /// reference.
    fn parse_term(&mut self) -> Result<Term, RddlError> {
        match self.current_kind() {
            Some(TokenKind::VAR) => {
                let token = self.expect(TokenKind::VAR)?;
                Ok(Term::Var(SmolStr::new(token.text)))
            }
            Some(TokenKind::ENUM_VAL) => {
                let token = self.expect(TokenKind::ENUM_VAL)?;
                Ok(Term::Enum(SmolStr::new(token.text)))
            }
            Some(TokenKind::IDENT) => Ok(Term::PVar(self.parse_pvar_head()?)),
            _ => Err(self.syntax_error()),
        }
    }

    /// A fluent reference head: `name` or `name(term, …)`. Shared between
    /// terms and CPF definitions.
    pub(crate) fn parse_pvar_head(&mut self) -> Result<PVarExpr, RddlError> {
        let name = SmolStr::new(self.expect(TokenKind::IDENT)?.text);
        let args = if self.eat(TokenKind::L_PAREN) {
            let args = self.parse_term_list()?;
            self.expect(TokenKind::R_PAREN)?;
            Some(args)
        } else {
            None
        };
        Ok(PVarExpr::new(name, args))
    }
}
