//! Evaluation errors for the expression engine

use jetdb_types::ValueType;
use thiserror::Error;

/// Result type for evaluation operations
pub type EvalResult<T> = Result<T, EvalError>;

/// Errors that can occur during expression evaluation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EvalError {
    /// Wrong argument count for a function call
    #[error("Invalid number of arguments for {function}: expected {min}..{}",
            match .max { Some(m) => m.to_string(), None => "*".to_string() })]
    Arity {
        function: String,
        min: usize,
        max: Option<usize>,
    },

    /// A value's type or lexical form cannot produce the demanded type
    #[error("Cannot convert {from} '{value}' to {to}")]
    Conversion {
        from: String,
        to: String,
        value: String,
    },

    /// A numeric cast target cannot represent the source value
    #[error("{function} value '{value}' out of range [{min}, {max}]")]
    Range {
        function: String,
        value: String,
        min: String,
        max: String,
    },

    /// A function was called in a structurally invalid way
    #[error("Invalid call to {function}: {message}")]
    InvalidFunctionCall { function: String, message: String },

    /// Two functions registered under the same normalized name
    #[error("Duplicate function {name}")]
    DuplicateFunction { name: String },

    /// Formatting/parsing requested for a type with no defined pattern
    #[error("Unexpected date/time type {}", .value_type.name())]
    UnsupportedTemporalType { value_type: ValueType },

    /// Internal error (should not happen)
    #[error("Internal evaluation error: {message}")]
    Internal { message: String },
}

impl EvalError {
    /// Create an arity error
    pub fn arity(function: impl Into<String>, min: usize, max: Option<usize>) -> Self {
        Self::Arity {
            function: function.into(),
            min,
            max,
        }
    }

    /// Create a conversion error
    pub fn conversion(
        from: impl Into<String>,
        to: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::Conversion {
            from: from.into(),
            to: to.into(),
            value: value.into(),
        }
    }

    /// Create a range error
    pub fn range(
        function: impl Into<String>,
        value: impl ToString,
        min: impl ToString,
        max: impl ToString,
    ) -> Self {
        Self::Range {
            function: function.into(),
            value: value.to_string(),
            min: min.to_string(),
            max: max.to_string(),
        }
    }

    /// Create an invalid-call error
    pub fn invalid_call(function: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidFunctionCall {
            function: function.into(),
            message: message.into(),
        }
    }

    /// Create a duplicate-registration error
    pub fn duplicate_function(name: impl Into<String>) -> Self {
        Self::DuplicateFunction { name: name.into() }
    }

    /// Create an unsupported temporal type error
    pub fn unsupported_temporal(value_type: ValueType) -> Self {
        Self::UnsupportedTemporalType { value_type }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}
