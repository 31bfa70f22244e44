//! Spec-faithful reimplementations of the ECMAScript iteration primitives
//! `forEach`, `map`, `includes` and `Object.keys`, redesigned as free
//! functions over an explicit sparse-sequence value model instead of
//! global prototype augmentation.
//!
//! Holes (absent indices) are first-class and distinct from `Undefined`,
//! `length` is snapshotted once per operation, and index presence is
//! rechecked live at every step so callbacks may mutate the collection
//! they are iterating.
//!
//! # Example
//!
//! ```
//! use arraylike::{ops, Sequence, Value};
//!
//! let seq = Value::from(Sequence::from_values([1.0.into(), 2.0.into(), 3.0.into()]).shared());
//! assert!(ops::includes(&seq, &Value::Number(2.0), None).unwrap());
//! assert!(!ops::includes(&seq, &Value::Number(2.0), Some(2.0)).unwrap());
//!
//! let doubled = ops::map(&seq, &Value::function("double", |_, args| {
//!     Ok(Value::Number(args.first().map(Value::to_number).unwrap_or(f64::NAN) * 2.0))
//! }), None).unwrap();
//! assert_eq!(doubled.borrow().get(2), Some(Value::Number(6.0)));
//! ```

pub mod error;
pub mod mapping;
pub mod ops;
pub mod realm;
pub mod sequence;
pub mod value;

pub use error::Error;
pub use mapping::Mapping;
pub use mapping::MappingRef;
pub use realm::Realm;
pub use sequence::Sequence;
pub use sequence::SequenceRef;
pub use value::NativeFunction;
pub use value::Value;
