//! Mapping-key enumeration

use rustc_hash::FxHashSet;
use std::rc::Rc;

use crate::error::Error;
use crate::sequence::{Sequence, SequenceRef};
use crate::value::Value;

/// Property names legacy engines leave non-enumerable even when shadowed
/// by an own definition. Probed explicitly after the ordered walk so an
/// own definition under one of these names is still reported.
const SHADOWED_BUILTIN_NAMES: [&str; 7] = [
    "constructor",
    "toString",
    "toLocaleString",
    "valueOf",
    "hasOwnProperty",
    "isPrototypeOf",
    "propertyIsEnumerable",
];

/// Collect the operand's own enumerable string keys into a fresh sequence,
/// in insertion order. Inherited keys are never included.
///
/// Mappings and functions are valid operands (functions own no enumerable
/// keys in this model and yield an empty sequence); everything else fails
/// with an invalid-operand error.
pub fn keys_of(operand: &Value) -> Result<SequenceRef, Error> {
    let mapping = match operand {
        Value::Mapping(map) => map.clone(),
        Value::Function(_) => return Ok(Sequence::new().shared()),
        Value::Null | Value::Undefined => {
            return Err(Error::invalid_operand(
                "keys",
                "called on null or undefined",
            ));
        }
        other => {
            return Err(Error::invalid_operand(
                "keys",
                format!("called on a {}", other.type_of()),
            ));
        }
    };

    let mapping = mapping.borrow();
    let mut collected: FxHashSet<Rc<str>> = FxHashSet::default();
    let mut keys = Sequence::new();

    for (key, property) in mapping.own_properties() {
        if property.enumerable && collected.insert(key.clone()) {
            keys.push(Value::String(key.clone()));
        }
    }

    for name in SHADOWED_BUILTIN_NAMES {
        if mapping.has_own(name) && !collected.contains(name) {
            keys.push(Value::from(name));
        }
    }

    Ok(keys.shared())
}
