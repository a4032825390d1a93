//! Parameterized variables (fluents).

use smol_str::SmolStr;
use std::fmt;

/// The four fluent kinds a pvariable definition may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FluentType {
    NonFluent,
    StateFluent,
    ActionFluent,
    IntermFluent,
}

impl fmt::Display for FluentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FluentType::NonFluent => "non-fluent",
            FluentType::StateFluent => "state-fluent",
            FluentType::ActionFluent => "action-fluent",
            FluentType::IntermFluent => "interm-fluent",
        };
        f.write_str(s)
    }
}

/// Range of a fluent: one of the built-in scalar ranges or the name of an
/// enumerated type declared in the `types` section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeType {
    Bool,
    Int,
    Real,
    Enum(SmolStr),
}

impl fmt::Display for RangeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeType::Bool => f.write_str("bool"),
            RangeType::Int => f.write_str("int"),
            RangeType::Real => f.write_str("real"),
            RangeType::Enum(name) => f.write_str(name),
        }
    }
}

/// A literal constant: default values and initializer right-hand sides.
///
/// `pos-inf` / `neg-inf` decode to the IEEE infinities. `Ident` carries an
/// enum-typed default such as `@low` written without the sigil, or an
/// object constant.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Real(f64),
    Ident(SmolStr),
}

/// A parameterized variable declared in the `pvariables` section.
///
/// `param_types` distinguishes `f: {…}` (`None`) from `f(): {…}`
/// (`Some(vec![])`); both have arity 0. Interm-fluents carry a `level` and
/// never a `default`; the other kinds carry a `default` and never a
/// `level`.
#[derive(Debug, Clone, PartialEq)]
pub struct PVariable {
    pub name: SmolStr,
    pub fluent_type: FluentType,
    pub range: RangeType,
    pub param_types: Option<Vec<SmolStr>>,
    pub default: Option<Value>,
    pub level: Option<i64>,
}

impl PVariable {
    /// Number of parameters (0 when the parameter list is absent).
    pub fn arity(&self) -> usize {
        self.param_types.as_ref().map_or(0, Vec::len)
    }

    pub fn is_non_fluent(&self) -> bool {
        self.fluent_type == FluentType::NonFluent
    }

    pub fn is_state_fluent(&self) -> bool {
        self.fluent_type == FluentType::StateFluent
    }

    pub fn is_action_fluent(&self) -> bool {
        self.fluent_type == FluentType::ActionFluent
    }

    pub fn is_intermediate_fluent(&self) -> bool {
        self.fluent_type == FluentType::IntermFluent
    }

    /// Applied form for diagnostics: `name` for arity 0, else
    /// `name(param,…)`.
    pub fn applied_form(&self) -> String {
        match &self.param_types {
            Some(params) if !params.is_empty() => {
                let params: Vec<&str> = params.iter().map(SmolStr::as_str).collect();
                format!("{}({})", self.name, params.join(","))
            }
            _ => self.name.to_string(),
        }
    }
}

/// Canonical textual form: `name/arity`.
impl fmt::Display for PVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.name, self.arity())
    }
}
