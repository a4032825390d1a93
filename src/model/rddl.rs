//! The root model object and the post-parse build step.

use super::domain::{Domain, TypeDef};
use super::instance::Instance;
use super::nonfluents::NonFluents;
use crate::error::RddlError;
use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use smol_str::SmolStr;

/// Objects of one `object`-kind type, indexed in declaration order.
///
/// `idx` and `objects` are two views of the same bijection:
/// `idx[objects[i]] == i` for every `i < size`.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeObjects {
    pub size: usize,
    pub idx: FxHashMap<SmolStr, usize>,
    pub objects: Vec<SmolStr>,
}

/// Per-type object indices, keyed by type name in declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectTable {
    types: IndexMap<SmolStr, TypeObjects>,
}

impl ObjectTable {
    pub fn get(&self, type_name: &str) -> Option<&TypeObjects> {
        self.types.get(type_name)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&SmolStr, &TypeObjects)> {
        self.types.iter()
    }
}

/// The root of a parsed source: one domain, one non-fluents block, one
/// instance. [`Rddl::build`] additionally derives the object table.
#[derive(Debug, Clone, PartialEq)]
pub struct Rddl {
    pub domain: Domain,
    pub non_fluents: NonFluents,
    pub instance: Instance,
    pub object_table: ObjectTable,
}

impl Rddl {
    pub fn new(domain: Domain, non_fluents: NonFluents, instance: Instance) -> Self {
        Self {
            domain,
            non_fluents,
            instance,
            object_table: ObjectTable::default(),
        }
    }

    /// Populates the object table: for every type declared as `object` in
    /// the domain, the objects listed for it in the non-fluents block get
    /// 0-based indices in declaration order.
    ///
    /// A declared `object` type with no object list is an error in the
    /// input and is not recovered.
    pub fn build(&mut self) -> Result<(), RddlError> {
        let mut types = IndexMap::new();
        for (type_name, def) in &self.domain.types {
            if *def != TypeDef::Object {
                continue;
            }
            let objects: Vec<SmolStr> = self
                .non_fluents
                .objects_of(type_name)
                .ok_or_else(|| RddlError::MissingObjects(type_name.to_string()))?
                .to_vec();
            tracing::trace!(ty = %type_name, count = objects.len(), "object table entry");
            let idx = objects
                .iter()
                .enumerate()
                .map(|(i, object)| (object.clone(), i))
                .collect();
            types.insert(
                type_name.clone(),
                TypeObjects {
                    size: objects.len(),
                    idx,
                    objects,
                },
            );
        }
        self.object_table = ObjectTable { types };
        Ok(())
    }
}
