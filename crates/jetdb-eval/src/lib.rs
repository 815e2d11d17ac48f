//! Expression evaluation engine for jetdb
//!
//! This crate evaluates stored formula expressions (default values,
//! validation rules, calculated columns) with the legacy desktop
//! application's exact semantics. It provides:
//!
//! - **Coercion**: on-demand [`Value`](jetdb_types::Value) conversion via
//!   [`CoerceValue`], including the boolean-as-integer convention,
//!   per-target numeric range rules and locale-aware string parsing
//! - **Serialized dates**: the bridge between the on-disk floating point
//!   day-count encoding and the temporal value kinds
//! - **Function framework**: the [`Function`] contract, arity-checked
//!   wrappers and the case-insensitive [`FunctionRegistry`]
//! - **Built-in functions**: conditional, cast and introspection
//!   functions replicating legacy behavior bit for bit
//!
//! # Example
//!
//! ```
//! use jetdb_eval::{EvaluationContext, Function, default_registry};
//! use jetdb_types::Value;
//!
//! let ctx = EvaluationContext::new();
//! let hex = default_registry().lookup("hex").unwrap();
//! let result = hex.eval(&ctx, &[Value::LongInt(255)]).unwrap();
//! assert_eq!(result, Value::Text("FF".to_string()));
//! ```
//!
//! # Concurrency
//!
//! Everything here is immutable after construction: values, contexts in
//! typical use, and the registry. Evaluation is pure and synchronous;
//! threads share one registry and one temporal configuration with no
//! locking.

pub mod coerce;
pub mod context;
pub mod error;
pub mod functions;
pub mod registry;
pub mod temporal;

// Re-export main types
pub use coerce::CoerceValue;
pub use context::{EvalContext, EvaluationContext, LocaleContext};
pub use error::{EvalError, EvalResult};
pub use registry::{
    Func1, Func1NullIsNull, Func3, FuncVar, Function, FunctionRegistry, StringFuncWrapper,
    default_registry,
};
pub use temporal::{
    date_format_for_type, from_serialized_date, number_to_temporal, parse_temporal,
    to_date_double,
};
