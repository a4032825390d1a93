//! # rddl-base
//!
//! Core library for RDDL (Relational Dynamic Influence Diagram Language)
//! parsing: lexer, AST, and semantic model for factored MDP descriptions.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! model   → semantic model (Rddl, Domain, NonFluents, Instance, queries)
//!   ↓
//! syntax  → owned AST types (Expression tree, terms, typed vars)
//!   ↓
//! parser  → logos lexer, recursive-descent + Pratt parser
//!   ↓
//! base    → fluent-name primitives (canonical `functor/arity`, priming)
//! ```
//!
//! Parsing is a pure transformation `&str → Rddl | RddlError`, strictly
//! single-threaded; callers wanting concurrent parses instantiate
//! independent [`RddlParser`] values.
//!
//! ```no_run
//! let source = std::fs::read_to_string("reservoir.rddl").unwrap();
//! let mut rddl = rddl::parse_rddl(&source).unwrap();
//! rddl.build().unwrap();
//! for (name, _pvar) in rddl.domain.state_fluents() {
//!     println!("state fluent {name}");
//! }
//! ```

/// Foundation: canonical fluent naming and prime rewriting
pub mod base;

/// Errors for parsing and the post-parse build step
pub mod error;

/// Semantic model: blocks, pvariable catalog, CPFs, object table
pub mod model;

/// Parser: logos lexer, recursive-descent parser, expression grammar
pub mod parser;

/// Syntax: owned AST types
pub mod syntax;

pub use base::naming;
pub use error::RddlError;
pub use model::{
    Cpf, CpfHeader, Domain, FluentType, Horizon, Initializer, Instance, MaxNondefActions,
    NonFluents, ObjectTable, PVariable, RangeType, Rddl, TypeDef, TypeObjects, Value,
};
pub use parser::{Lexer, RddlParser, Token, TokenKind, parse_rddl, tokenize};
pub use syntax::{
    BinaryOp, CaseArm, Expression, Number, PVarExpr, QuantKind, Term, TypedVar, UnaryOp,
};
