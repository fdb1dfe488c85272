//! Traversals that accept either collection shape.
//!
//! Each function normalizes its input once into an ordered view (see
//! [`normalize`]) and then walks that view from the first element to the
//! last. Mapping inputs are traversed by value in enumeration order.

use crate::collection::{normalize, Collection};

/// Calls `visitor` once for every element, in order.
///
/// Returns the input exactly as it was passed in, not the normalized view.
///
/// ```
/// use standout_collect::each;
///
/// let items = vec![1, 2, 3];
/// let mut total = 0;
/// let returned = each(&items, |n| total += n);
///
/// assert_eq!(total, 6);
/// assert!(std::ptr::eq(returned, &items));
/// ```
pub fn each<'a, C, T, F>(collection: C, mut visitor: F) -> C
where
    C: Into<Collection<'a, T>> + Clone,
    T: 'a,
    F: FnMut(&'a T),
{
    for element in normalize(collection.clone()) {
        visitor(element);
    }
    collection
}

/// Applies `mapper` to every element and collects the results in order.
pub fn map<'a, T, U, F>(collection: impl Into<Collection<'a, T>>, mapper: F) -> Vec<U>
where
    T: 'a,
    F: FnMut(&'a T) -> U,
{
    normalize(collection).into_iter().map(mapper).collect()
}

/// Combines the elements into a single value.
///
/// With `Some(seed)` the walk starts at the first element. With `None` the
/// first element is cloned as the seed and the walk starts at the second.
/// The combiner receives the accumulator, the current element and the part
/// of the view being walked.
///
/// Returns `None` only when there is no seed and nothing to take one from.
/// A one-element collection without a seed returns that element without
/// calling the combiner.
///
/// ```
/// use standout_collect::reduce;
///
/// let items = [1, 2, 3, 4];
/// assert_eq!(reduce(&items, |acc, n, _| acc + n, None), Some(10));
/// assert_eq!(reduce(&items, |acc, n, _| acc + n, Some(10)), Some(20));
///
/// let empty: [i32; 0] = [];
/// assert_eq!(reduce(&empty, |acc, n, _| acc + n, None), None);
/// ```
pub fn reduce<'a, T, F>(
    collection: impl Into<Collection<'a, T>>,
    mut combiner: F,
    seed: Option<T>,
) -> Option<T>
where
    T: Clone + 'a,
    F: FnMut(T, &'a T, &[&'a T]) -> T,
{
    let view = normalize(collection);
    let (mut accumulator, rest) = match seed {
        Some(seed) => (seed, view.as_slice()),
        None => {
            let (first, rest) = view.split_first()?;
            ((*first).clone(), rest)
        }
    };

    for &element in rest {
        accumulator = combiner(accumulator, element, rest);
    }
    Some(accumulator)
}

/// Folds every element into an accumulator of any type.
///
/// Unlike [`reduce`], the seed is always provided, so the accumulator type is
/// free to differ from the element type. An accumulator that is itself a
/// reference, such as `&mut Vec<_>`, is mutated in place.
pub fn fold<'a, T, A, F>(collection: impl Into<Collection<'a, T>>, seed: A, combiner: F) -> A
where
    T: 'a,
    F: FnMut(A, &'a T) -> A,
{
    normalize(collection).into_iter().fold(seed, combiner)
}

/// Returns the first element matching `predicate`.
///
/// Scanning stops at the first match.
pub fn find<'a, T, F>(collection: impl Into<Collection<'a, T>>, mut predicate: F) -> Option<&'a T>
where
    T: 'a,
    F: FnMut(&'a T) -> bool,
{
    normalize(collection)
        .into_iter()
        .find(|element| predicate(*element))
}

/// Returns the elements matching `predicate`, in view order.
pub fn filter<'a, T, F>(collection: impl Into<Collection<'a, T>>, mut predicate: F) -> Vec<&'a T>
where
    T: 'a,
    F: FnMut(&'a T) -> bool,
{
    normalize(collection)
        .into_iter()
        .filter(|element| predicate(*element))
        .collect()
}

/// Returns the number of elements in the normalized view.
pub fn size<'a, T: 'a>(collection: impl Into<Collection<'a, T>>) -> usize {
    normalize(collection).len()
}
