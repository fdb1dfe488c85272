//! Key and value extraction for mappings.
//!
//! These accept anything that iterates as borrowed `(key, value)` pairs:
//! `&HashMap`, `&BTreeMap`, `&serde_json::Map` and the like. Only the
//! mapping's own entries are visited, and all three functions walk them in
//! the same order, so index `i` of [`keys`] and [`values`] always belong to
//! the same entry.

/// Returns the keys of a mapping in enumeration order.
///
/// ```
/// use std::collections::BTreeMap;
/// use standout_collect::{keys, values};
///
/// let ages = BTreeMap::from([("tom", 31), ("ann", 28)]);
/// assert_eq!(keys(&ages), vec![&"ann", &"tom"]);
/// assert_eq!(values(&ages), vec![&28, &31]);
/// ```
pub fn keys<'a, K, T, M>(mapping: M) -> Vec<&'a K>
where
    K: 'a,
    T: 'a,
    M: IntoIterator<Item = (&'a K, &'a T)>,
{
    mapping.into_iter().map(|(key, _)| key).collect()
}

/// Returns the values of a mapping in enumeration order.
pub fn values<'a, K, T, M>(mapping: M) -> Vec<&'a T>
where
    K: 'a,
    T: 'a,
    M: IntoIterator<Item = (&'a K, &'a T)>,
{
    mapping.into_iter().map(|(_, value)| value).collect()
}

/// Returns the key-value pairs of a mapping in enumeration order.
pub fn entries<'a, K, T, M>(mapping: M) -> Vec<(&'a K, &'a T)>
where
    K: 'a,
    T: 'a,
    M: IntoIterator<Item = (&'a K, &'a T)>,
{
    mapping.into_iter().collect()
}
