//! Owned AST types produced by the parser.

pub mod expr;

pub use expr::{
    BinaryOp, CaseArm, Expression, Number, PVarExpr, QuantKind, Term, TypedVar, UnaryOp,
};
