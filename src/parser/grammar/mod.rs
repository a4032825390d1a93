//! Grammar rules, grouped per area.
//!
//! Each file extends [`super::parser::Parser`] with the rules for one slice
//! of the language: top-level blocks, domain sections, instance and
//! non-fluents sections, shared atoms, and the unified expression grammar.

mod atoms;
mod blocks;
mod domain;
mod expressions;
mod instance;
