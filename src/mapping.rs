//! String-keyed mapping with insertion-ordered own properties
//!
//! Own properties are kept in insertion order and carry an `enumerable`
//! flag. A mapping may link to a prototype mapping; lookups through `get`
//! walk that chain, while key enumeration only ever sees own properties.

use std::cell::RefCell;
use std::rc::Rc;

use indexmap::IndexMap;

use crate::value::Value;

/// Shared, mutable handle to a mapping.
pub type MappingRef = Rc<RefCell<Mapping>>;

#[derive(Debug, Clone)]
pub struct Property {
    pub value: Value,
    pub enumerable: bool,
}

#[derive(Debug, Default)]
pub struct Mapping {
    properties: IndexMap<Rc<str>, Property>,
    proto: Option<MappingRef>,
}

impl Mapping {
    pub fn new() -> Self {
        Mapping::default()
    }

    pub fn with_proto(proto: MappingRef) -> Self {
        Mapping {
            properties: IndexMap::new(),
            proto: Some(proto),
        }
    }

    /// Wrap in a shared handle.
    pub fn shared(self) -> MappingRef {
        Rc::new(RefCell::new(self))
    }

    /// Set an own, enumerable property.
    pub fn insert(&mut self, key: &str, value: Value) {
        self.define(key, value, true);
    }

    /// Set an own property with an explicit enumerable flag.
    pub fn define(&mut self, key: &str, value: Value, enumerable: bool) {
        self.properties
            .insert(Rc::from(key), Property { value, enumerable });
    }

    /// Own-property lookup; never consults the prototype chain.
    pub fn get_own(&self, key: &str) -> Option<Value> {
        self.properties.get(key).map(|prop| prop.value.clone())
    }

    /// Lookup walking the prototype chain.
    pub fn get(&self, key: &str) -> Option<Value> {
        if let Some(value) = self.get_own(key) {
            return Some(value);
        }
        self.proto.as_ref().and_then(|proto| proto.borrow().get(key))
    }

    pub fn has_own(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }

    /// Remove an own property, preserving the order of the rest.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.properties
            .shift_remove(key)
            .map(|prop| prop.value)
    }

    /// Own properties in insertion order.
    pub fn own_properties(&self) -> impl Iterator<Item = (&Rc<str>, &Property)> {
        self.properties.iter()
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}
