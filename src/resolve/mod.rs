//! Shared value/object resolution consumed by every opcode.
//!
//! - [`ValueResolver`]: typed argument slot resolution (variables, math,
//!   silent defaults)
//! - [`ObjectIndex`]: tag and prefab-scoped object lookup

mod object_index;
mod value_resolver;

pub use object_index::{ObjectIndex, TargetSet};
pub use value_resolver::ValueResolver;
