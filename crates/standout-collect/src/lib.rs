//! Collect - Uniform traversal utilities over sequences and mappings.
//!
//! Collect provides small, generic functions that work the same way whether
//! the input is an ordered sequence or a key-value mapping:
//!
//! - Traversal over either shape: [`each`], [`map`], [`reduce`], [`fold`],
//!   [`find`], [`filter`], [`size`]
//! - Sequence helpers: [`first`], [`last`], [`first_n`], [`last_n`],
//!   [`sort_by`], [`flatten`]
//! - Mapping helpers: [`keys`], [`values`], [`entries`]
//! - Runtime-checked variants for `serde_json::Value` in [`json`] (feature
//!   `json`, on by default)
//!
//! # Quick Start
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use standout_collect::{filter, keys, map, reduce, size};
//!
//! let prices = vec![12, 7, 30];
//! let stock = BTreeMap::from([("apples", 4), ("pears", 0), ("plums", 9)]);
//!
//! // The same functions accept both shapes.
//! assert_eq!(map(&prices, |p| p * 2), vec![24, 14, 60]);
//! assert_eq!(filter(&stock, |n| *n > 0), vec![&4, &9]);
//! assert_eq!(reduce(&stock, |acc, n, _| acc + n, None), Some(13));
//! assert_eq!(size(&stock), 3);
//!
//! // Mapping-only helpers keep keys and values aligned.
//! assert_eq!(keys(&stock), vec![&"apples", &"pears", &"plums"]);
//! ```
//!
//! # Normalization
//!
//! Every shape-polymorphic function first builds a normalized view of its
//! input: a new `Vec<&T>` holding the sequence elements in order, or the
//! mapping values in enumeration order. The view shares elements with the
//! input by reference and never modifies it.
//!
//! # Absent results
//!
//! Nothing here fails on empty input. "No result" is `None`: [`find`] without
//! a match, [`first`] and [`last`] on an empty sequence, and [`reduce`] over
//! an empty collection without a seed. Errors ([`CollectError`]) only arise
//! where the shape is checked at runtime.

mod collection;
mod error;
mod flatten;
mod mapping;
mod ordering;
mod sequence;
mod traverse;

#[cfg(feature = "json")]
pub mod json;

// Re-export public API
pub use collection::{normalize, Collection, Shape};
pub use error::{CollectError, Result};
pub use flatten::{flatten, flatten_depth, flatten_into, flatten_leaves, Nest, Nested};
pub use mapping::{entries, keys, values};
pub use ordering::Dir;
pub use sequence::{
    first, first_n, last, last_n, sort_by, sort_by_dir, take_first, take_last, Taken,
};
pub use traverse::{each, filter, find, fold, map, reduce, size};
