//! Collection shapes and normalization.
//!
//! A [`Collection`] is either an ordered sequence or a key-value mapping.
//! Every shape-polymorphic operation in this crate first turns its input into
//! a normalized view, an ordered `Vec<&T>`, and then walks that view.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use crate::error::{CollectError, Result};

/// The two shapes a [`Collection`] can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// An ordered sequence of elements.
    Sequence,
    /// A mapping from string keys to values.
    Mapping,
}

impl Shape {
    /// Returns the display name of this shape.
    pub fn as_str(self) -> &'static str {
        match self {
            Shape::Sequence => "sequence",
            Shape::Mapping => "mapping",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A borrowed collection of `T`, either ordered or keyed.
///
/// Mapping entries keep the order in which the source map yielded them, so a
/// `BTreeMap` enumerates by key and a `HashMap` in its own iteration order.
///
/// # Example
///
/// ```
/// use std::collections::BTreeMap;
/// use standout_collect::{Collection, Shape};
///
/// let seq = vec![1, 2, 3];
/// let map = BTreeMap::from([("a", 1), ("b", 2)]);
///
/// assert_eq!(Collection::from(&seq).shape(), Shape::Sequence);
/// assert_eq!(Collection::from(&map).view(), vec![&1, &2]);
/// ```
#[derive(Debug, PartialEq)]
pub enum Collection<'a, T> {
    /// Elements in index order.
    Sequence(&'a [T]),
    /// Key-value entries in enumeration order.
    Mapping(Vec<(&'a str, &'a T)>),
}

impl<'a, T> Clone for Collection<'a, T> {
    fn clone(&self) -> Self {
        match self {
            Collection::Sequence(items) => Collection::Sequence(*items),
            Collection::Mapping(entries) => Collection::Mapping(entries.clone()),
        }
    }
}

impl<'a, T> Collection<'a, T> {
    /// Builds a mapping collection from any iterator of borrowed entries.
    pub fn from_entries<K, I>(entries: I) -> Self
    where
        K: AsRef<str> + ?Sized + 'a,
        I: IntoIterator<Item = (&'a K, &'a T)>,
    {
        Collection::Mapping(
            entries
                .into_iter()
                .map(|(key, value)| (key.as_ref(), value))
                .collect(),
        )
    }

    /// Returns the shape of this collection.
    pub fn shape(&self) -> Shape {
        match self {
            Collection::Sequence(_) => Shape::Sequence,
            Collection::Mapping(_) => Shape::Mapping,
        }
    }

    /// Returns the number of elements (or entries).
    pub fn len(&self) -> usize {
        match self {
            Collection::Sequence(items) => items.len(),
            Collection::Mapping(entries) => entries.len(),
        }
    }

    /// Returns `true` if the collection holds nothing.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the normalized view: elements in order, or mapping values in
    /// enumeration order with the keys dropped.
    ///
    /// The returned vector is new storage; the elements are shared with the
    /// source by reference.
    pub fn view(&self) -> Vec<&'a T> {
        tracing::trace!(shape = %self.shape(), len = self.len(), "normalizing collection");
        match self {
            Collection::Sequence(items) => items.iter().collect(),
            Collection::Mapping(entries) => entries.iter().map(|(_, value)| *value).collect(),
        }
    }

    /// Returns the underlying slice, or an error for a mapping.
    pub fn as_sequence(&self) -> Result<&'a [T]> {
        match self {
            Collection::Sequence(items) => Ok(*items),
            Collection::Mapping(_) => Err(CollectError::wrong_shape(
                Shape::Sequence,
                Shape::Mapping.as_str(),
            )),
        }
    }

    /// Returns the mapping entries, or an error for a sequence.
    pub fn entries(&self) -> Result<&[(&'a str, &'a T)]> {
        match self {
            Collection::Mapping(entries) => Ok(entries),
            Collection::Sequence(_) => Err(CollectError::wrong_shape(
                Shape::Mapping,
                Shape::Sequence.as_str(),
            )),
        }
    }

    /// Returns the mapping keys in enumeration order, or an error for a sequence.
    pub fn keys(&self) -> Result<Vec<&'a str>> {
        Ok(self.entries()?.iter().map(|(key, _)| *key).collect())
    }
}

impl<'a, T> From<&'a [T]> for Collection<'a, T> {
    fn from(items: &'a [T]) -> Self {
        Collection::Sequence(items)
    }
}

impl<'a, T, const N: usize> From<&'a [T; N]> for Collection<'a, T> {
    fn from(items: &'a [T; N]) -> Self {
        Collection::Sequence(items)
    }
}

impl<'a, T> From<&'a Vec<T>> for Collection<'a, T> {
    fn from(items: &'a Vec<T>) -> Self {
        Collection::Sequence(items)
    }
}

impl<'a, K, T, S> From<&'a HashMap<K, T, S>> for Collection<'a, T>
where
    K: AsRef<str>,
{
    fn from(map: &'a HashMap<K, T, S>) -> Self {
        Collection::from_entries(map)
    }
}

impl<'a, K, T> From<&'a BTreeMap<K, T>> for Collection<'a, T>
where
    K: AsRef<str>,
{
    fn from(map: &'a BTreeMap<K, T>) -> Self {
        Collection::from_entries(map)
    }
}

/// Normalizes any collection into an ordered view of its elements.
///
/// Sequences are shallow-copied. Mappings contribute their values in
/// enumeration order. The input is never modified, and an empty input yields
/// an empty view.
pub fn normalize<'a, T: 'a>(collection: impl Into<Collection<'a, T>>) -> Vec<&'a T> {
    collection.into().view()
}
