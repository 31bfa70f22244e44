//! Dynamic value representation
//!
//! The core `Value` type shared by the four iteration primitives, plus the
//! callable wrapper used for callbacks and registry methods.

use std::fmt;
use std::rc::Rc;

use crate::error::Error;
use crate::mapping::MappingRef;
use crate::sequence::SequenceRef;

/// Calling convention shared by callbacks and realm methods: the bound
/// receiver first, then the positional arguments.
pub type NativeFn = Rc<dyn Fn(&Value, &[Value]) -> Result<Value, Error>>;

/// A named, reference-counted callable.
#[derive(Clone)]
pub struct NativeFunction {
    name: Rc<str>,
    func: NativeFn,
}

impl NativeFunction {
    pub fn new(
        name: &str,
        func: impl Fn(&Value, &[Value]) -> Result<Value, Error> + 'static,
    ) -> Self {
        NativeFunction {
            name: Rc::from(name),
            func: Rc::new(func),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn call(&self, receiver: &Value, args: &[Value]) -> Result<Value, Error> {
        (self.func)(receiver, args)
    }

    /// Identity comparison; two functions are the same only if they share
    /// the underlying closure allocation.
    pub fn ptr_eq(&self, other: &NativeFunction) -> bool {
        Rc::ptr_eq(&self.func, &other.func)
    }
}

impl fmt::Debug for NativeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Function: {}]", self.name)
    }
}

/// A dynamic value
#[derive(Clone, Default)]
pub enum Value {
    #[default]
    Undefined,
    Null,
    Boolean(bool),
    Number(f64),
    String(Rc<str>),
    Function(NativeFunction),
    Sequence(SequenceRef),
    Mapping(MappingRef),
}

impl Value {
    /// Check if this value is null or undefined
    pub fn is_null_or_undefined(&self) -> bool {
        matches!(self, Value::Null | Value::Undefined)
    }

    /// Check if this value is callable (a function)
    pub fn is_callable(&self) -> bool {
        matches!(self, Value::Function(_))
    }

    /// Short name for the value's shape, used in error messages
    pub fn type_of(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "null",
            Value::Boolean(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Function(_) => "function",
            Value::Sequence(_) => "sequence",
            Value::Mapping(_) => "mapping",
        }
    }

    /// Numeric coercion, used for optional offset arguments
    pub fn to_number(&self) -> f64 {
        match self {
            Value::Undefined => f64::NAN,
            Value::Null => 0.0,
            Value::Boolean(true) => 1.0,
            Value::Boolean(false) => 0.0,
            Value::Number(n) => *n,
            Value::String(s) => s.parse::<f64>().unwrap_or(f64::NAN),
            Value::Function(_) | Value::Sequence(_) | Value::Mapping(_) => f64::NAN,
        }
    }

    /// Strict equality: value and type must match, `NaN != NaN`, and
    /// sequences, mappings and functions compare by identity.
    pub fn strict_equals(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) => true,
            (Value::Null, Value::Null) => true,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => {
                if a.is_nan() || b.is_nan() {
                    false
                } else {
                    a == b
                }
            }
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => a.ptr_eq(b),
            (Value::Sequence(a), Value::Sequence(b)) => Rc::ptr_eq(a, b),
            (Value::Mapping(a), Value::Mapping(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }

    pub fn as_sequence(&self) -> Option<&SequenceRef> {
        match self {
            Value::Sequence(seq) => Some(seq),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&MappingRef> {
        match self {
            Value::Mapping(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&NativeFunction> {
        match self {
            Value::Function(func) => Some(func),
            _ => None,
        }
    }

    /// Convenience constructor for callback values
    pub fn function(
        name: &str,
        func: impl Fn(&Value, &[Value]) -> Result<Value, Error> + 'static,
    ) -> Self {
        Value::Function(NativeFunction::new(name, func))
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "undefined"),
            Value::Null => write!(f, "null"),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", n),
            Value::String(s) => write!(f, "\"{}\"", s),
            Value::Function(func) => write!(f, "{:?}", func),
            Value::Sequence(seq) => write!(f, "[sequence length {}]", seq.borrow().length()),
            Value::Mapping(_) => write!(f, "{{...}}"),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.strict_equals(other)
    }
}

// Conversions from Rust types

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(Rc::from(s))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(Rc::from(s.as_str()))
    }
}

impl From<SequenceRef> for Value {
    fn from(seq: SequenceRef) -> Self {
        Value::Sequence(seq)
    }
}

impl From<MappingRef> for Value {
    fn from(map: MappingRef) -> Self {
        Value::Mapping(map)
    }
}

impl From<NativeFunction> for Value {
    fn from(func: NativeFunction) -> Self {
        Value::Function(func)
    }
}
