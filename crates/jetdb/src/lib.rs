//! Expression evaluation for the Jet desktop-database file format
//!
//! This crate bundles the expression value model and the evaluation
//! engine used to compute stored formulas (default values, validation
//! rules, calculated columns) with the legacy application's exact
//! dynamic-typing semantics.
//!
//! # Example
//!
//! ```
//! use jetdb::eval::{EvaluationContext, Function, default_registry};
//! use jetdb::types::Value;
//!
//! let ctx = EvaluationContext::new();
//! let iif = default_registry().lookup("IIf").unwrap();
//! let result = iif
//!     .eval(&ctx, &[Value::TRUE, Value::from("yes"), Value::from("no")])
//!     .unwrap();
//! assert_eq!(result, Value::from("yes"));
//! ```

// Re-export all public APIs from internal crates
pub use jetdb_eval as eval;
pub use jetdb_types as types;

// Convenience re-exports
pub use jetdb_eval::{
    CoerceValue, EvalContext, EvalError, EvalResult, EvaluationContext, Function,
    FunctionRegistry, default_registry,
};
pub use jetdb_types::{TemporalConfig, TemporalType, Value, ValueType};
