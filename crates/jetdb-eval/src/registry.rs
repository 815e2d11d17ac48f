//! Function capability contract and name registry
//!
//! Every built-in is a stateless [`Function`] keyed by its
//! case-insensitive name. Arity validation lives in the wrapper structs
//! ([`Func1`], [`Func3`], [`FuncVar`]) and runs before the transform sees
//! any argument, so an arity error is never masked by a type error in an
//! argument the function would not have used.
//!
//! The registry is built once ([`default_registry`]) and never mutated
//! afterwards; multiple evaluation threads share it freely.

use jetdb_types::Value;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::Arc;

use crate::coerce::CoerceValue;
use crate::context::EvalContext;
use crate::error::{EvalError, EvalResult};

/// Type alias for single-argument transforms
pub type Eval1Fn = fn(&dyn EvalContext, &Value) -> EvalResult<Value>;

/// Type alias for three-argument transforms
pub type Eval3Fn = fn(&dyn EvalContext, &Value, &Value, &Value) -> EvalResult<Value>;

/// Type alias for variable-arity transforms
pub type EvalVarFn = fn(&dyn EvalContext, &[Value]) -> EvalResult<Value>;

/// A named, stateless, arity-constrained transform over evaluated values.
///
/// Implementations are immutable after registration and identified by
/// their case-insensitive name.
pub trait Function: Send + Sync {
    /// The function's declared name
    fn name(&self) -> &str;

    /// Apply the function to already-evaluated arguments
    fn eval(&self, ctx: &dyn EvalContext, args: &[Value]) -> EvalResult<Value>;
}

/// Fixed one-argument function
pub struct Func1 {
    name: &'static str,
    eval1: Eval1Fn,
}

impl Func1 {
    pub fn new(name: &'static str, eval1: Eval1Fn) -> Self {
        Self { name, eval1 }
    }
}

impl Function for Func1 {
    fn name(&self) -> &str {
        self.name
    }

    fn eval(&self, ctx: &dyn EvalContext, args: &[Value]) -> EvalResult<Value> {
        if args.len() != 1 {
            return Err(EvalError::arity(self.name, 1, Some(1)));
        }
        (self.eval1)(ctx, &args[0])
    }
}

/// Fixed one-argument function that propagates null unconditionally:
/// a null argument returns null without invoking the transform.
pub struct Func1NullIsNull {
    name: &'static str,
    eval1: Eval1Fn,
}

impl Func1NullIsNull {
    pub fn new(name: &'static str, eval1: Eval1Fn) -> Self {
        Self { name, eval1 }
    }
}

impl Function for Func1NullIsNull {
    fn name(&self) -> &str {
        self.name
    }

    fn eval(&self, ctx: &dyn EvalContext, args: &[Value]) -> EvalResult<Value> {
        if args.len() != 1 {
            return Err(EvalError::arity(self.name, 1, Some(1)));
        }
        if args[0].is_null() {
            return Ok(Value::Null);
        }
        (self.eval1)(ctx, &args[0])
    }
}

/// Fixed three-argument function
pub struct Func3 {
    name: &'static str,
    eval3: Eval3Fn,
}

impl Func3 {
    pub fn new(name: &'static str, eval3: Eval3Fn) -> Self {
        Self { name, eval3 }
    }
}

impl Function for Func3 {
    fn name(&self) -> &str {
        self.name
    }

    fn eval(&self, ctx: &dyn EvalContext, args: &[Value]) -> EvalResult<Value> {
        if args.len() != 3 {
            return Err(EvalError::arity(self.name, 3, Some(3)));
        }
        (self.eval3)(ctx, &args[0], &args[1], &args[2])
    }
}

/// Variable-arity function with an inclusive `[min, max]` argument count
/// range; `max = None` is unbounded.
pub struct FuncVar {
    name: &'static str,
    min: usize,
    max: Option<usize>,
    eval_var: EvalVarFn,
}

impl FuncVar {
    pub fn new(name: &'static str, min: usize, max: Option<usize>, eval_var: EvalVarFn) -> Self {
        Self {
            name,
            min,
            max,
            eval_var,
        }
    }
}

impl Function for FuncVar {
    fn name(&self) -> &str {
        self.name
    }

    fn eval(&self, ctx: &dyn EvalContext, args: &[Value]) -> EvalResult<Value> {
        let count = args.len();
        if count < self.min || self.max.is_some_and(|max| count > max) {
            return Err(EvalError::arity(self.name, self.min, self.max));
        }
        (self.eval_var)(ctx, args)
    }
}

/// Wrapper registered under `<name>$` that forces every argument through
/// string coercion before the inner transform runs.
///
/// This reproduces the legacy dual numeric/string call convention for
/// string-returning functions: the `$` form rejects null arguments, while
/// the plain form propagates them.
pub struct StringFuncWrapper {
    name: String,
    inner: Arc<dyn Function>,
}

impl StringFuncWrapper {
    pub fn new(inner: Arc<dyn Function>) -> Self {
        Self {
            name: format!("{}$", inner.name()),
            inner,
        }
    }
}

impl Function for StringFuncWrapper {
    fn name(&self) -> &str {
        &self.name
    }

    fn eval(&self, ctx: &dyn EvalContext, args: &[Value]) -> EvalResult<Value> {
        let forced = args
            .iter()
            .map(|arg| arg.to_text(ctx).map(Value::Text))
            .collect::<EvalResult<Vec<_>>>()?;
        self.inner.eval(ctx, &forced)
    }
}

/// Case-insensitive name-to-function mapping.
///
/// Built once at startup; registering two functions whose names normalize
/// to the same key is a configuration error, not a runtime data error.
#[derive(Default)]
pub struct FunctionRegistry {
    functions: HashMap<String, Arc<dyn Function>>,
}

impl FunctionRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a function under its own name
    pub fn register(&mut self, func: Arc<dyn Function>) -> EvalResult<()> {
        let name = func.name().to_string();
        self.register_as(&name, func)
    }

    /// Register a function under an additional name (alias)
    pub fn register_as(&mut self, name: &str, func: Arc<dyn Function>) -> EvalResult<()> {
        let key = lookup_name(name);
        if self.functions.contains_key(&key) {
            return Err(EvalError::duplicate_function(name));
        }
        self.functions.insert(key, func);
        Ok(())
    }

    /// Register a string-returning function twice: under its own name and
    /// under `<name>$` with argument string coercion forced.
    pub fn register_string_func(&mut self, func: Arc<dyn Function>) -> EvalResult<()> {
        self.register(Arc::clone(&func))?;
        self.register(Arc::new(StringFuncWrapper::new(func)))
    }

    /// Look up a function by case-insensitive name
    pub fn lookup(&self, name: &str) -> Option<&dyn Function> {
        self.functions.get(&lookup_name(name)).map(Arc::as_ref)
    }

    /// Number of registered names
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

fn lookup_name(name: &str) -> String {
    name.trim().to_lowercase()
}

static DEFAULT_REGISTRY: Lazy<FunctionRegistry> = Lazy::new(|| {
    let mut registry = FunctionRegistry::new();
    match crate::functions::register_builtins(&mut registry) {
        Ok(()) => registry,
        // a colliding builtin is a packaging defect; fail before any lookup
        Err(e) => panic!("builtin function registry: {e}"),
    }
});

/// The immutable registry of every built-in function, built on first use
pub fn default_registry() -> &'static FunctionRegistry {
    &DEFAULT_REGISTRY
}
