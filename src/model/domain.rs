//! The domain block and its classification queries.

use super::cpf::Cpf;
use super::pvariable::PVariable;
use crate::base::naming;
use crate::syntax::Expression;
use rustc_hash::FxHashMap;
use smol_str::SmolStr;
use std::fmt;

/// Right-hand side of a `types` entry: the literal `object`, or an
/// enumeration of `@`-labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeDef {
    Object,
    Enum(Vec<SmolStr>),
}

/// Which header introduced the CPF section; both spell the same structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CpfHeader {
    Cpfs,
    Cdfs,
}

impl fmt::Display for CpfHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CpfHeader::Cpfs => "cpfs",
            CpfHeader::Cdfs => "cdfs",
        })
    }
}

/// A parsed `domain { … }` block.
#[derive(Debug, Clone, PartialEq)]
pub struct Domain {
    pub name: SmolStr,
    pub requirements: Vec<SmolStr>,
    pub types: Vec<(SmolStr, TypeDef)>,
    pub pvariables: Vec<PVariable>,
    pub cpfs: (CpfHeader, Vec<Cpf>),
    pub reward: Expression,
    pub preconds: Vec<Expression>,
    pub constraints: Vec<Expression>,
    pub invariants: Vec<Expression>,
}

impl Domain {
    fn classified(&self, pred: fn(&PVariable) -> bool) -> FxHashMap<String, &PVariable> {
        self.pvariables
            .iter()
            .filter(|pvar| pred(pvar))
            .map(|pvar| (pvar.to_string(), pvar))
            .collect()
    }

    /// Non-fluent pvariables keyed by `name/arity`.
    pub fn non_fluents(&self) -> FxHashMap<String, &PVariable> {
        self.classified(PVariable::is_non_fluent)
    }

    /// State-fluent pvariables keyed by `name/arity`.
    pub fn state_fluents(&self) -> FxHashMap<String, &PVariable> {
        self.classified(PVariable::is_state_fluent)
    }

    /// Action-fluent pvariables keyed by `name/arity`.
    pub fn action_fluents(&self) -> FxHashMap<String, &PVariable> {
        self.classified(PVariable::is_action_fluent)
    }

    /// Interm-fluent pvariables keyed by `name/arity`.
    pub fn intermediate_fluents(&self) -> FxHashMap<String, &PVariable> {
        self.classified(PVariable::is_intermediate_fluent)
    }

    /// CPFs whose head names an interm-fluent, ascending by
    /// `(level, name)`.
    pub fn intermediate_cpfs(&self) -> Vec<&Cpf> {
        let interm = self.intermediate_fluents();
        let mut cpfs: Vec<&Cpf> = self
            .cpfs
            .1
            .iter()
            .filter(|cpf| interm.contains_key(&cpf.name()))
            .collect();
        cpfs.sort_by_key(|cpf| {
            let level = interm[&cpf.name()].level.unwrap_or(0);
            (level, cpf.name())
        });
        cpfs
    }

    /// CPFs whose primed head corresponds to a declared state-fluent,
    /// ascending by name. Heads without a prime never qualify.
    pub fn state_cpfs(&self) -> Vec<&Cpf> {
        let states = self.state_fluents();
        let mut cpfs: Vec<&Cpf> = self
            .cpfs
            .1
            .iter()
            .filter(|cpf| {
                naming::current_of(&cpf.name())
                    .map(|current| states.contains_key(&current))
                    .unwrap_or(false)
            })
            .collect();
        cpfs.sort_by_key(|cpf| cpf.name());
        cpfs
    }
}
