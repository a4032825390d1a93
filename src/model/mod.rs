//! Semantic model for a parsed RDDL source.
//!
//! The parser returns a single [`Rddl`] owning one [`Domain`], one
//! [`NonFluents`], and one [`Instance`]. The model is a plain object graph:
//! expressions are trees, pvariables live in the domain's canonical list,
//! and the classification views over them are regenerated on demand.

mod cpf;
mod domain;
mod instance;
mod nonfluents;
mod pvariable;
mod rddl;

pub use cpf::Cpf;
pub use domain::{CpfHeader, Domain, TypeDef};
pub use instance::{Horizon, Instance, MaxNondefActions};
pub use nonfluents::{Initializer, NonFluents};
pub use pvariable::{FluentType, PVariable, RangeType, Value};
pub use rddl::{ObjectTable, Rddl, TypeObjects};
