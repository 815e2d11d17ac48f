//! Built-in function library
//!
//! Replicates the legacy application's function semantics: conditional
//! selection, type casts with their per-target range rules, and type
//! introspection. Null handling is declared per function, never
//! inherited; see each family module for the specific policies.

pub mod conditional;
pub mod conversion;
pub mod inspection;

use crate::error::EvalResult;
use crate::registry::FunctionRegistry;

/// Register every built-in, one family at a time in a fixed order
pub(crate) fn register_builtins(registry: &mut FunctionRegistry) -> EvalResult<()> {
    conditional::register(registry)?;
    conversion::register(registry)?;
    inspection::register(registry)?;
    Ok(())
}
