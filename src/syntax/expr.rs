//! The unified expression tree.
//!
//! Every RDDL expression flavor (logical, arithmetic, relational,
//! quantified, aggregated, conditional, and random-variable) parses into
//! the single [`Expression`] sum type. Children are owned subtrees; terms
//! (the restricted argument language of fluent references) are the small
//! [`Term`] enum. Pattern matching on the variant drives every traversal.

use smol_str::SmolStr;
use std::fmt;

/// A numeric literal. Integers and doubles stay distinct all the way from
/// the lexer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Real(f64),
}

/// An argument term of a fluent reference: a variable, an enum value, or a
/// nested fluent reference (nullary fluents appear as bare names).
#[derive(Debug, Clone, PartialEq)]
pub enum Term {
    /// `?r`; the lexeme keeps its leading `?`.
    Var(SmolStr),
    /// `@low`; the lexeme keeps its leading `@`.
    Enum(SmolStr),
    /// `rlevel(?r)` or `xPos`.
    PVar(PVarExpr),
}

/// A parameterized-variable reference: functor plus optional argument list.
///
/// `args` distinguishes `f` (`None`) from `f()` (`Some(vec![])`); both have
/// arity 0.
#[derive(Debug, Clone, PartialEq)]
pub struct PVarExpr {
    pub name: SmolStr,
    pub args: Option<Vec<Term>>,
}

impl PVarExpr {
    pub fn new(name: impl Into<SmolStr>, args: Option<Vec<Term>>) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }

    /// Number of arguments; 0 when the argument list is absent.
    pub fn arity(&self) -> usize {
        self.args.as_ref().map_or(0, Vec::len)
    }

    /// Canonical `functor/arity` form, primes included.
    pub fn canonical_name(&self) -> String {
        format!("{}/{}", self.name, self.arity())
    }
}

/// Unary operators. Negation of numbers and logical negation both bind at
/// the top (unary) precedence level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    /// `+e`
    Pos,
    /// `-e`
    Neg,
    /// `~e`
    Not,
}

/// Binary operators. `And` and `Amp` are both conjunction; the tree
/// records which lexeme (`^` or `&`) the source used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Eq,
    Neq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    /// `^`
    And,
    /// `&`
    Amp,
    /// `|`
    Or,
    /// `=>`
    Implies,
    /// `<=>`
    Equiv,
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Eq => "==",
            BinaryOp::Neq => "~=",
            BinaryOp::Lt => "<",
            BinaryOp::LtEq => "<=",
            BinaryOp::Gt => ">",
            BinaryOp::GtEq => ">=",
            BinaryOp::And => "^",
            BinaryOp::Amp => "&",
            BinaryOp::Or => "|",
            BinaryOp::Implies => "=>",
            BinaryOp::Equiv => "<=>",
        };
        f.write_str(s)
    }
}

/// `forall` or `exists`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantKind {
    Forall,
    Exists,
}

/// `?x : type` inside a quantifier or aggregation binder list.
#[derive(Debug, Clone, PartialEq)]
pub struct TypedVar {
    pub var: SmolStr,
    pub ty: SmolStr,
}

impl TypedVar {
    pub fn new(var: impl Into<SmolStr>, ty: impl Into<SmolStr>) -> Self {
        Self {
            var: var.into(),
            ty: ty.into(),
        }
    }
}

/// One arm of a `switch` expression.
#[derive(Debug, Clone, PartialEq)]
pub enum CaseArm {
    /// `case t : e`
    Case(Term, Expression),
    /// `default : e`
    Default(Expression),
}

/// An RDDL expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// A fluent reference, possibly with argument terms.
    PVar(PVarExpr),
    Number(Number),
    Boolean(bool),
    Unary(UnaryOp, Box<Expression>),
    Binary(BinaryOp, Box<Expression>, Box<Expression>),
    /// Named function in brackets: `max[e, …]`, `abs[e]`. The name is not
    /// validated at parse time.
    Func(SmolStr, Vec<Expression>),
    /// `forall_{?x : T, …} body` / `exists_{…} body`.
    Quantifier(QuantKind, Vec<TypedVar>, Box<Expression>),
    /// `op_{?x : T, …} body` for any identifier `op` (`sum`, `prod`, `max`,
    /// `min`, …); semantic validity of `op` is a later concern.
    Aggregation(SmolStr, Vec<TypedVar>, Box<Expression>),
    /// `if (cond) then e1 else e2`
    If(Box<Expression>, Box<Expression>, Box<Expression>),
    /// `switch (term) { case …, default : … }`
    Switch(Term, Vec<CaseArm>),
    /// A distribution term. For `Discrete` and `Dirichlet` the first
    /// argument is an [`Expression::EnumType`]; `Discrete` follows it with
    /// [`Expression::LConst`] probability clauses.
    RandomVar(SmolStr, Vec<Expression>),
    /// The enum-type scrutinee of `Discrete`/`Dirichlet`.
    EnumType(SmolStr),
    /// `label : expr` clause inside `Discrete`.
    LConst(SmolStr, Box<Expression>),
}

impl Expression {
    /// A bare fluent reference without an argument list.
    pub fn pvar(name: impl Into<SmolStr>) -> Self {
        Expression::PVar(PVarExpr::new(name, None))
    }

    /// A fluent reference applied to argument terms.
    pub fn pvar_with(name: impl Into<SmolStr>, args: Vec<Term>) -> Self {
        Expression::PVar(PVarExpr::new(name, Some(args)))
    }

    pub fn int(value: i64) -> Self {
        Expression::Number(Number::Int(value))
    }

    pub fn real(value: f64) -> Self {
        Expression::Number(Number::Real(value))
    }

    pub fn unary(op: UnaryOp, operand: Expression) -> Self {
        Expression::Unary(op, Box::new(operand))
    }

    pub fn binary(op: BinaryOp, lhs: Expression, rhs: Expression) -> Self {
        Expression::Binary(op, Box::new(lhs), Box::new(rhs))
    }
}
