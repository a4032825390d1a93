//! The instance block.

use super::nonfluents::Initializer;
use crate::syntax::Expression;
use smol_str::SmolStr;

/// `max-nondef-actions = <n | pos-inf>;`
#[derive(Debug, Clone, PartialEq)]
pub enum MaxNondefActions {
    Finite(i64),
    PosInf,
}

/// `horizon = <n | pos-inf>;` or `horizon = terminate-when(expr)`.
#[derive(Debug, Clone, PartialEq)]
pub enum Horizon {
    Fixed(i64),
    PosInf,
    TerminateWhen(Expression),
}

/// A parsed `instance NAME { … }` block.
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    pub name: SmolStr,
    pub domain: SmolStr,
    /// Name of the referenced non-fluents block; `anonymous` when the
    /// instance carried an inline `non-fluents { … }` list instead.
    pub non_fluents: SmolStr,
    pub objects: Option<Vec<(SmolStr, Vec<SmolStr>)>>,
    pub init_state: Vec<Initializer>,
    pub max_nondef_actions: MaxNondefActions,
    pub horizon: Horizon,
    pub discount: f64,
}
