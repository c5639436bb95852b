#![forbid(unsafe_code)]
#![deny(clippy::all)]

//! Object iteration utilities over a minimal JavaScript-style value model.
//!
//! The [ware] module holds the point of the crate: object-shaped versions
//! of the familiar array helpers ([assign], [clone], [filter], [map],
//! [map_keys], [keys], [values], [is_empty]), all of which walk an object's
//! enumerable properties *including inherited ones*. The [Object] type
//! supplies the substrate: an insertion-ordered mapping with an optional
//! prototype chain and per-property visibility, enumerated as a single
//! deterministic merge over the layers.
//!
//! ```
//! use petitware::{ware, Object};
//!
//! let parent = Object::new().insert("a", 1).insert("b", 2);
//! let child = Object::create(parent).insert("c", 3);
//!
//! // Inherited properties are part of the enumerable view
//! let doubled = ware::map(&child, |value, _, _| value.clone() * 2.into());
//! assert_eq!(
//!     doubled,
//!     Object::new().insert("c", 6).insert("a", 2).insert("b", 4),
//! );
//! ```
//!
//! All values are cheap to clone: compound values are refcounted and
//! copy-on-write, so nothing here ever mutates a caller's data in place
//! behind its back.

pub mod error;
mod value;
pub mod ware;

pub use crate::{
    error::ValueError,
    value::{Array, Number, Object, PetitString, Value, ValueType},
    ware::{assign, clone, filter, is_empty, keys, map, map_keys, values},
};
