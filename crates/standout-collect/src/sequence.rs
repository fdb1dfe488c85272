//! Operations that only make sense on ordered sequences.
//!
//! These take slices directly, so passing a mapping is a compile-time error.
//! For dynamic input, check the shape first with
//! [`Collection::as_sequence`](crate::Collection::as_sequence).

use crate::ordering::Dir;

/// Result of [`take_first`] or [`take_last`].
///
/// Without a count the caller gets a single element (or nothing for an empty
/// sequence); with a count, a sub-slice.
#[derive(Debug, PartialEq)]
pub enum Taken<'a, T> {
    /// A single element, absent when the sequence is empty.
    One(Option<&'a T>),
    /// A run of elements, clipped to the sequence bounds.
    Many(&'a [T]),
}

impl<'a, T> Taken<'a, T> {
    /// Returns the single element, if this is `One` and it is present.
    pub fn one(self) -> Option<&'a T> {
        match self {
            Taken::One(item) => item,
            Taken::Many(_) => None,
        }
    }

    /// Returns the slice, if this is `Many`.
    pub fn many(self) -> Option<&'a [T]> {
        match self {
            Taken::One(_) => None,
            Taken::Many(items) => Some(items),
        }
    }
}

/// Returns the first element, or `None` when empty.
pub fn first<T>(sequence: &[T]) -> Option<&T> {
    sequence.first()
}

/// Returns the first `count` elements.
///
/// A count larger than the sequence returns the whole sequence. A count of
/// zero returns an empty slice.
pub fn first_n<T>(sequence: &[T], count: usize) -> &[T] {
    &sequence[..count.min(sequence.len())]
}

/// Returns the last element, or `None` when empty.
pub fn last<T>(sequence: &[T]) -> Option<&T> {
    sequence.last()
}

/// Returns the last `count` elements.
///
/// The start index is clipped at zero, so a count larger than the sequence
/// returns the whole sequence in order.
///
/// ```
/// use standout_collect::last_n;
///
/// assert_eq!(last_n(&[1, 2, 3, 4], 2), &[3, 4]);
/// assert_eq!(last_n(&[1, 2], 5), &[1, 2]);
/// ```
pub fn last_n<T>(sequence: &[T], count: usize) -> &[T] {
    &sequence[sequence.len().saturating_sub(count)..]
}

/// Takes from the front: one element without a count, a slice with one.
pub fn take_first<T>(sequence: &[T], count: Option<usize>) -> Taken<'_, T> {
    match count {
        Some(count) => Taken::Many(first_n(sequence, count)),
        None => Taken::One(first(sequence)),
    }
}

/// Takes from the back: one element without a count, a slice with one.
pub fn take_last<T>(sequence: &[T], count: Option<usize>) -> Taken<'_, T> {
    match count {
        Some(count) => Taken::Many(last_n(sequence, count)),
        None => Taken::One(last(sequence)),
    }
}

/// Returns the elements sorted ascending by `key`.
///
/// The sort is stable: elements with equal keys keep their input order.
/// `key` is called once per element and the input is left untouched.
///
/// Keys must be `Ord`. Wrap `f64` keys in a newtype whose `Ord` delegates to
/// [`f64::total_cmp`].
///
/// ```
/// use standout_collect::sort_by;
///
/// let words = ["pear", "fig", "apple", "kiwi"];
/// let sorted = sort_by(&words, |w| w.len());
/// assert_eq!(sorted, vec![&"fig", &"pear", &"kiwi", &"apple"]);
/// ```
pub fn sort_by<'a, T, K, F>(sequence: &'a [T], key: F) -> Vec<&'a T>
where
    K: Ord,
    F: FnMut(&'a T) -> K,
{
    sort_by_dir(sequence, key, Dir::Asc)
}

/// Like [`sort_by`], in the given direction.
///
/// Ties keep their input order in both directions.
pub fn sort_by_dir<'a, T, K, F>(sequence: &'a [T], mut key: F, dir: Dir) -> Vec<&'a T>
where
    K: Ord,
    F: FnMut(&'a T) -> K,
{
    tracing::trace!(len = sequence.len(), dir = %dir, "sorting sequence");
    let mut keyed: Vec<(K, &'a T)> = sequence.iter().map(|item| (key(item), item)).collect();
    keyed.sort_by(|(a, _), (b, _)| dir.apply(a.cmp(b)));
    keyed.into_iter().map(|(_, item)| item).collect()
}
