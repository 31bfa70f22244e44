//! Sequence iteration, mapping and membership
//!
//! All three operations snapshot `length` once before iterating and then
//! recheck index presence against the live sequence at every step, so a
//! callback may mutate the collection mid-iteration: values written below
//! the snapshot before their turn are visited, deleted indices are skipped,
//! and indices at or beyond the snapshot are never visited.
//!
//! `RefCell` borrows are never held across a callback invocation, which
//! also makes nested and recursive calls on the same sequence well-defined.

use crate::error::Error;
use crate::sequence::{Sequence, SequenceRef};
use crate::value::{NativeFunction, Value};

fn require_sequence(operation: &str, operand: &Value) -> Result<SequenceRef, Error> {
    match operand {
        Value::Null | Value::Undefined => Err(Error::invalid_operand(
            operation,
            "called on null or undefined",
        )),
        Value::Sequence(seq) => Ok(seq.clone()),
        other => Err(Error::invalid_operand(
            operation,
            format!("called on a {}", other.type_of()),
        )),
    }
}

fn require_callback(operation: &str, callback: &Value) -> Result<NativeFunction, Error> {
    match callback {
        Value::Function(func) => Ok(func.clone()),
        _ => Err(Error::not_callable(operation)),
    }
}

/// Invoke `callback` once for each present index in `[0, length)`,
/// ascending, as `callback(receiver, [element, index, operand])`.
///
/// The receiver defaults to `Undefined`. Callback errors propagate
/// immediately and stop the iteration.
pub fn for_each(operand: &Value, callback: &Value, receiver: Option<&Value>) -> Result<(), Error> {
    let seq = require_sequence("forEach", operand)?;
    let callback = require_callback("forEach", callback)?;
    let this_arg = receiver.cloned().unwrap_or_default();

    let length = seq.borrow().length();

    for i in 0..length {
        // Presence is rechecked live; the borrow must be released before
        // the callback runs so it can mutate the sequence.
        let Some(element) = seq.borrow().get(i) else {
            continue;
        };
        callback.call(
            &this_arg,
            &[element, Value::Number(f64::from(i)), operand.clone()],
        )?;
    }

    Ok(())
}

/// Produce a fresh sequence of the snapshotted length where each present
/// input index holds the callback's return value and each hole stays a
/// hole (the callback is not invoked for holes).
pub fn map(
    operand: &Value,
    callback: &Value,
    receiver: Option<&Value>,
) -> Result<SequenceRef, Error> {
    let seq = require_sequence("map", operand)?;
    let callback = require_callback("map", callback)?;
    let this_arg = receiver.cloned().unwrap_or_default();

    let length = seq.borrow().length();
    let mut result = Sequence::with_length(length);

    for i in 0..length {
        let Some(element) = seq.borrow().get(i) else {
            continue;
        };
        let mapped = callback.call(
            &this_arg,
            &[element, Value::Number(f64::from(i)), operand.clone()],
        )?;
        result.set(i, mapped);
    }

    Ok(result.shared())
}

/// Whether `search` occurs at or after `from_index` under strict equality.
///
/// A negative offset counts from the end and clamps to zero; an offset at
/// or past the length scans nothing. Strict equality only: searching for
/// `NaN` returns `false` even when present, and holes match nothing.
pub fn includes(operand: &Value, search: &Value, from_index: Option<f64>) -> Result<bool, Error> {
    let seq = require_sequence("includes", operand)?;

    let length = i64::from(seq.borrow().length());
    if length == 0 {
        return Ok(false);
    }

    // Saturating float-to-int cast: NaN resolves to 0, infinities clamp.
    let from = from_index.map(|n| n as i64).unwrap_or(0);
    let start = if from < 0 {
        (length + from).max(0)
    } else {
        from.min(length)
    };

    for i in start..length {
        let Some(element) = seq.borrow().get(i as u32) else {
            continue;
        };
        if element.strict_equals(search) {
            return Ok(true);
        }
    }

    Ok(false)
}
