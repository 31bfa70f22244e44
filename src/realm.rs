//! Method registry with install-only-if-absent semantics
//!
//! A [`Realm`] stands in for the host environment's method table. The four
//! iteration primitives are installed through the if-absent path, so a
//! pre-existing ("native") registration is never replaced and repeated
//! installation is a no-op.

use indexmap::IndexMap;

use crate::error::Error;
use crate::ops;
use crate::value::{NativeFunction, Value};

#[derive(Default)]
pub struct Realm {
    methods: IndexMap<String, NativeFunction>,
}

impl Realm {
    pub fn new() -> Self {
        Realm::default()
    }

    /// Bind a method unconditionally, replacing any existing binding.
    /// Models a host-native implementation.
    pub fn register_method(
        &mut self,
        name: &str,
        func: impl Fn(&Value, &[Value]) -> Result<Value, Error> + 'static,
    ) {
        self.methods
            .insert(name.to_string(), NativeFunction::new(name, func));
    }

    /// Bind a method only when the name is unbound. Returns whether the
    /// binding was installed.
    pub fn register_method_if_absent(
        &mut self,
        name: &str,
        func: impl Fn(&Value, &[Value]) -> Result<Value, Error> + 'static,
    ) -> bool {
        if self.methods.contains_key(name) {
            return false;
        }
        self.methods
            .insert(name.to_string(), NativeFunction::new(name, func));
        true
    }

    pub fn method(&self, name: &str) -> Option<&NativeFunction> {
        self.methods.get(name)
    }

    pub fn has_method(&self, name: &str) -> bool {
        self.methods.contains_key(name)
    }

    /// Registered method names, in registration order.
    pub fn method_names(&self) -> impl Iterator<Item = &str> {
        self.methods.keys().map(String::as_str)
    }

    /// Dispatch a method by name; an unbound name fails as not callable.
    pub fn call_method(&self, name: &str, this: &Value, args: &[Value]) -> Result<Value, Error> {
        let Some(method) = self.methods.get(name) else {
            return Err(Error::no_such_method(name));
        };
        method.call(this, args)
    }

    /// Install the four iteration primitives under their conventional
    /// names, skipping any that already have a binding. Idempotent.
    pub fn install_polyfills(&mut self) {
        self.register_method_if_absent("forEach", method_for_each);
        self.register_method_if_absent("map", method_map);
        self.register_method_if_absent("includes", method_includes);
        self.register_method_if_absent("keys", method_keys);
    }
}

// Adapters from the `(this, args)` calling convention to the typed free
// functions. Missing arguments default to `Undefined`, matching how a host
// would pass them.

fn method_for_each(this: &Value, args: &[Value]) -> Result<Value, Error> {
    let callback = args.first().cloned().unwrap_or_default();
    let receiver = args.get(1);
    ops::for_each(this, &callback, receiver)?;
    Ok(Value::Undefined)
}

fn method_map(this: &Value, args: &[Value]) -> Result<Value, Error> {
    let callback = args.first().cloned().unwrap_or_default();
    let receiver = args.get(1);
    let result = ops::map(this, &callback, receiver)?;
    Ok(Value::Sequence(result))
}

fn method_includes(this: &Value, args: &[Value]) -> Result<Value, Error> {
    let search = args.first().cloned().unwrap_or_default();
    let from_index = args.get(1).map(Value::to_number);
    Ok(Value::Boolean(ops::includes(this, &search, from_index)?))
}

// Static-style method: the operand is the first argument, not the receiver.
fn method_keys(_this: &Value, args: &[Value]) -> Result<Value, Error> {
    let operand = args.first().cloned().unwrap_or_default();
    Ok(Value::Sequence(ops::keys_of(&operand)?))
}
