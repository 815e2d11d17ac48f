//! Value model and temporal configuration for jetdb expression evaluation
//!
//! This crate defines the data types shared by the expression evaluation
//! engine and its embedders:
//!
//! - [`Value`]: the immutable tagged scalar produced by expression
//!   evaluation, with the legacy boolean-as-integer convention
//! - [`ValueType`]: the value type tags with numeric/temporal predicates
//! - [`TemporalConfig`]: locale-scoped date/time format patterns and
//!   symbols, parameterized by [`TemporalType`] shapes
//!
//! Coercing accessors (which require an evaluation context) live in the
//! `jetdb-eval` crate; this crate holds only context-free data.

pub mod temporal;
pub mod value;

pub use temporal::{DateFormatSymbols, TemporalConfig, TemporalType, us_temporal_config};
pub use value::{Value, ValueType, normalize_decimal};
