use serde_json::{Map, Value};

use crate::errors::ExecutionError;

/// Named arguments handed to a procedure, already resolved from bindings.
pub type Arguments = Map<String, Value>;

/// Lazily produced procedure results.
pub type ValueStream = Box<dyn Iterator<Item = Result<Value, ExecutionError>> + Send>;

/// What a procedure hands back: one value, or a stream consumed on demand.
pub enum Yielded {
    Value(Value),
    Stream(ValueStream),
}

impl Yielded {
    /// Normalize to a stream; a single value becomes a one-element stream.
    pub fn into_stream(self) -> ValueStream {
        match self {
            Yielded::Value(value) => Box::new(std::iter::once(Ok(value))),
            Yielded::Stream(stream) => stream,
        }
    }
}

impl From<Value> for Yielded {
    fn from(value: Value) -> Self {
        Yielded::Value(value)
    }
}

impl std::fmt::Debug for Yielded {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Yielded::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Yielded::Stream(_) => f.write_str("Stream(..)"),
        }
    }
}

/// The function a component runs.
pub trait Procedure: Send + Sync {
    fn invoke(&self, args: Arguments) -> Result<Yielded, ExecutionError>;

    fn name(&self) -> &str;
}

/// A procedure backed by a closure.
pub struct FnProcedure<F> {
    name: String,
    func: F,
}

impl<F> Procedure for FnProcedure<F>
where
    F: Fn(Arguments) -> Result<Yielded, ExecutionError> + Send + Sync,
{
    fn invoke(&self, args: Arguments) -> Result<Yielded, ExecutionError> {
        (self.func)(args)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Wrap a closure as a [`Procedure`].
///
/// # Example
/// ```
/// use serde_json::json;
/// use switchyard::traits::{procedure_fn, Arguments, Procedure, Yielded};
///
/// let double = procedure_fn("double", |args: Arguments| {
///     let n = args.get("n").and_then(|v| v.as_i64()).unwrap_or(0);
///     Ok(Yielded::Value(json!(n * 2)))
/// });
///
/// let mut args = Arguments::new();
/// args.insert("n".to_string(), json!(21));
/// let result: Vec<_> = double.invoke(args).unwrap().into_stream().collect();
/// assert_eq!(result[0].as_ref().unwrap(), &json!(42));
/// ```
pub fn procedure_fn<F>(name: impl Into<String>, func: F) -> FnProcedure<F>
where
    F: Fn(Arguments) -> Result<Yielded, ExecutionError> + Send + Sync,
{
    FnProcedure {
        name: name.into(),
        func,
    }
}
