//! Sparse array-like storage
//!
//! A `Sequence` models an array-like value: a non-negative 32-bit `length`
//! plus integer-keyed slots that may be absent ("holes") even within range.
//! A hole is distinct from a slot that holds `Undefined`, so presence and
//! value are tracked separately via `Option`.
//!
//! Sequences are shared by handle (`SequenceRef`) so a callback running
//! inside an iteration can mutate the collection it is iterating.

use std::cell::RefCell;
use std::rc::Rc;

use crate::value::Value;

/// Shared, mutable handle to a sequence.
pub type SequenceRef = Rc<RefCell<Sequence>>;

#[derive(Debug, Default)]
pub struct Sequence {
    slots: Vec<Option<Value>>,
    length: u32,
}

impl Sequence {
    pub fn new() -> Self {
        Sequence::default()
    }

    /// A sequence of the given length with every index a hole.
    pub fn with_length(length: u32) -> Self {
        Sequence {
            slots: Vec::new(),
            length,
        }
    }

    /// A dense sequence holding the given values at indices `0..n`.
    pub fn from_values(values: impl IntoIterator<Item = Value>) -> Self {
        let slots: Vec<Option<Value>> = values.into_iter().map(Some).collect();
        let length = u32::try_from(slots.len()).unwrap_or(u32::MAX);
        Sequence { slots, length }
    }

    /// A possibly-sparse sequence built directly from slots; `None` slots
    /// become holes.
    pub fn from_slots(slots: Vec<Option<Value>>) -> Self {
        let length = u32::try_from(slots.len()).unwrap_or(u32::MAX);
        Sequence { slots, length }
    }

    /// Wrap in a shared handle.
    pub fn shared(self) -> SequenceRef {
        Rc::new(RefCell::new(self))
    }

    pub fn length(&self) -> u32 {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Resize; shrinking drops the slots beyond the new length.
    pub fn set_length(&mut self, length: u32) {
        let len = length as usize;
        if self.slots.len() > len {
            self.slots.truncate(len);
        }
        self.length = length;
    }

    /// The value at `index`, or `None` when the index is a hole or out of
    /// range.
    pub fn get(&self, index: u32) -> Option<Value> {
        self.slots.get(index as usize).and_then(|slot| slot.clone())
    }

    /// Whether `index` holds a value (holes and out-of-range are absent).
    pub fn has(&self, index: u32) -> bool {
        self.slots
            .get(index as usize)
            .is_some_and(|slot| slot.is_some())
    }

    /// Store a value, growing the sequence (with holes) as needed and
    /// extending `length` to cover the index.
    pub fn set(&mut self, index: u32, value: Value) {
        let idx = index as usize;
        if idx >= self.slots.len() {
            self.slots.resize(idx + 1, None);
        }
        if let Some(slot) = self.slots.get_mut(idx) {
            *slot = Some(value);
        }
        self.length = self.length.max(index.saturating_add(1));
    }

    /// Remove the value at `index`, leaving a hole. `length` is unchanged.
    pub fn delete(&mut self, index: u32) {
        if let Some(slot) = self.slots.get_mut(index as usize) {
            *slot = None;
        }
    }

    /// Append a value at the current length.
    pub fn push(&mut self, value: Value) {
        let index = self.length;
        self.set(index, value);
    }
}

/// Coerce a numeric length to the non-negative 32-bit range used as an
/// iteration bound.
pub fn to_length(n: f64) -> u32 {
    if n.is_nan() || n <= 0.0 {
        0
    } else if n >= f64::from(u32::MAX) {
        u32::MAX
    } else {
        n as u32
    }
}
