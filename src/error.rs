//! Error types for the iteration primitives

use thiserror::Error;

use crate::value::Value;

/// Main error type for the library.
///
/// Only two failure kinds exist: a bad primary operand and a missing or
/// non-invocable callable. Anything a caller-supplied callback raises is
/// propagated through the in-progress operation unchanged, never wrapped
/// or retried.
#[derive(Debug, Error)]
pub enum Error {
    /// The primary collection/mapping argument is null, undefined, or not
    /// of a shape the operation can work with.
    #[error("TypeError: {operation} {message}")]
    InvalidOperand { operation: String, message: String },

    /// A required callable (callback argument or dispatched method) is not
    /// invocable.
    #[error("TypeError: {operation} {message}")]
    NotCallable { operation: String, message: String },

    /// An arbitrary value raised from inside a caller-supplied callback.
    /// Carried so callbacks can abort an operation with their own payload.
    #[error("uncaught: {value:?}")]
    Thrown { value: Value },
}

impl Error {
    pub fn invalid_operand(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Error::InvalidOperand {
            operation: operation.into(),
            message: message.into(),
        }
    }

    /// The standard complaint for a callback argument that is not a function.
    pub fn not_callable(operation: impl Into<String>) -> Self {
        Error::NotCallable {
            operation: operation.into(),
            message: "callback is not a function".into(),
        }
    }

    /// Dispatch failure: no method is bound under `name`.
    pub fn no_such_method(name: impl Into<String>) -> Self {
        Error::NotCallable {
            operation: name.into(),
            message: "is not a function".into(),
        }
    }

    /// Create an error that carries a thrown value out of a callback.
    pub fn thrown(value: Value) -> Self {
        Error::Thrown { value }
    }
}
