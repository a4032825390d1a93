//! The non-fluents block.

use super::pvariable::Value;
use smol_str::SmolStr;

/// One initializer from `init-state` or an inline `non-fluents` list.
///
/// The bare form `f(a,b);` means `true`, the negated form `~f;` means
/// `false`, and `f = v;` carries an explicit value. `args` is `None` for
/// the argument-free forms.
#[derive(Debug, Clone, PartialEq)]
pub struct Initializer {
    pub name: SmolStr,
    pub args: Option<Vec<SmolStr>>,
    pub value: Value,
}

impl Initializer {
    pub fn new(name: impl Into<SmolStr>, args: Option<Vec<SmolStr>>, value: Value) -> Self {
        Self {
            name: name.into(),
            args,
            value,
        }
    }
}

/// A parsed `non-fluents NAME { … }` block.
///
/// `domain` is absent only for the anonymous block written inline in an
/// instance. Objects keep declaration order; the object table built later
/// assigns indices from it.
#[derive(Debug, Clone, PartialEq)]
pub struct NonFluents {
    pub name: SmolStr,
    pub domain: Option<SmolStr>,
    pub objects: Vec<(SmolStr, Vec<SmolStr>)>,
    pub init_non_fluent: Vec<Initializer>,
}

impl NonFluents {
    /// The object names declared for `type_name`, if any.
    pub fn objects_of(&self, type_name: &str) -> Option<&[SmolStr]> {
        self.objects
            .iter()
            .find(|(ty, _)| ty == type_name)
            .map(|(_, objects)| objects.as_slice())
    }
}
