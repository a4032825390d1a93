//! Canonical fluent naming.
//!
//! A fluent is identified by `functor/arity`, e.g. `rlevel/1`. A trailing
//! prime on the functor marks the next-state reading of a state-fluent:
//! `rlevel'/1` is the value of `rlevel/1` after one transition. The two
//! rewriting functions below act only on the functor portion, preserve the
//! arity, and are inverses on their respective domains.

use crate::error::RddlError;

/// Splits `functor/arity`, rejecting names without the separator.
fn split(name: &str) -> Result<(&str, &str), RddlError> {
    name.split_once('/')
        .ok_or_else(|| RddlError::MalformedName(name.to_string()))
}

/// Rewrites a next-state fluent name to its current-state counterpart:
/// `rlevel'/1` becomes `rlevel/1`.
///
/// Fails if the functor carries no prime; a CPF head that reaches this
/// function unprimed is not a next-state assignment.
pub fn current_of(name: &str) -> Result<String, RddlError> {
    let (functor, arity) = split(name)?;
    match functor.strip_suffix('\'') {
        Some(base) => Ok(format!("{base}/{arity}")),
        None => Err(RddlError::NotPrimed(name.to_string())),
    }
}

/// Rewrites a current-state fluent name to its next-state counterpart:
/// `rlevel/1` becomes `rlevel'/1`.
///
/// Fails if the functor is already primed, so the rewrite never stacks
/// primes.
pub fn next_of(name: &str) -> Result<String, RddlError> {
    let (functor, arity) = split(name)?;
    if functor.ends_with('\'') {
        return Err(RddlError::AlreadyPrimed(name.to_string()));
    }
    Ok(format!("{functor}'/{arity}"))
}
