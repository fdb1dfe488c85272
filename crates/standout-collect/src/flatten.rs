//! Flattening of nested sequences.
//!
//! Anything that can expose its children as a slice implements [`Nest`]:
//! the [`Nested`] tree type here, and `serde_json::Value` arrays when the
//! `json` feature is on. Flattening walks with an explicit stack, so deeply
//! nested input cannot overflow the call stack.

/// A value that is either a leaf or a list of further values.
pub trait Nest: Sized {
    /// Returns the nested items if this value is a list, `None` for a leaf.
    fn children(&self) -> Option<&[Self]>;
}

/// A tree of leaves and lists.
///
/// Use the [`nested!`](crate::nested) macro to write literals.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Nested<T> {
    Leaf(T),
    List(Vec<Nested<T>>),
}

impl<T> Nested<T> {
    /// Returns `true` if this is a list.
    pub fn is_list(&self) -> bool {
        matches!(self, Nested::List(_))
    }

    /// Returns the leaf value, if this is a leaf.
    pub fn as_leaf(&self) -> Option<&T> {
        match self {
            Nested::Leaf(value) => Some(value),
            Nested::List(_) => None,
        }
    }

    /// Returns the list items, if this is a list.
    pub fn as_list(&self) -> Option<&[Nested<T>]> {
        match self {
            Nested::Leaf(_) => None,
            Nested::List(items) => Some(items),
        }
    }
}

impl<T> From<T> for Nested<T> {
    fn from(value: T) -> Self {
        Nested::Leaf(value)
    }
}

impl<T> Nest for Nested<T> {
    fn children(&self) -> Option<&[Self]> {
        self.as_list()
    }
}

/// Builds a `Vec<Nested<_>>` from a bracketed literal.
///
/// Brackets open a nested list; anything else becomes a leaf. Each leaf must
/// be a single token, so wrap compound expressions in parentheses.
///
/// ```
/// use standout_collect::{nested, Nested};
///
/// let tree = nested![1, [2, (1 + 2)]];
/// assert_eq!(
///     tree,
///     vec![
///         Nested::Leaf(1),
///         Nested::List(vec![Nested::Leaf(2), Nested::Leaf(3)]),
///     ]
/// );
/// ```
#[macro_export]
macro_rules! nested {
    (@item [$($inner:tt)*]) => {
        $crate::Nested::List($crate::nested![$($inner)*])
    };
    (@item $leaf:expr) => {
        $crate::Nested::Leaf($leaf)
    };
    ($($item:tt),* $(,)?) => {
        ::std::vec![$($crate::nested!(@item $item)),*]
    };
}

/// Flattens one level (`shallow`) or every level of nesting.
///
/// Shallow flattening appends the members of each top-level list
/// individually and keeps deeper lists intact. Deep flattening expands lists
/// at any depth, leaving only leaves.
///
/// ```
/// use standout_collect::{flatten, nested};
///
/// let tree = nested![1, [2, [3, [4]]]];
///
/// assert_eq!(flatten(&tree, false), nested![1, 2, 3, 4].iter().collect::<Vec<_>>());
/// assert_eq!(flatten(&tree, true), nested![1, 2, [3, [4]]].iter().collect::<Vec<_>>());
/// ```
pub fn flatten<N: Nest>(sequence: &[N], shallow: bool) -> Vec<&N> {
    let mut flat = Vec::new();
    flatten_into(sequence, shallow, &mut flat);
    flat
}

/// Like [`flatten`], appending into an existing accumulator.
pub fn flatten_into<'a, N: Nest>(sequence: &'a [N], shallow: bool, acc: &mut Vec<&'a N>) {
    let max_depth = if shallow { Some(1) } else { None };
    flatten_depth_into(sequence, max_depth, acc);
}

/// Flattens up to `max_depth` levels of nesting; `None` means no limit.
///
/// `Some(0)` copies the top level unchanged and `Some(1)` matches a shallow
/// [`flatten`].
pub fn flatten_depth<N: Nest>(sequence: &[N], max_depth: Option<usize>) -> Vec<&N> {
    let mut flat = Vec::new();
    flatten_depth_into(sequence, max_depth, &mut flat);
    flat
}

fn flatten_depth_into<'a, N: Nest>(
    sequence: &'a [N],
    max_depth: Option<usize>,
    acc: &mut Vec<&'a N>,
) {
    // Each frame is a partially consumed list and the depth of its items.
    let mut stack = vec![(sequence.iter(), 0usize)];
    let mut deepest = 0;

    while let Some((items, depth)) = stack.last_mut() {
        let depth = *depth;
        match items.next() {
            Some(item) => match item.children() {
                Some(children) if max_depth.map_or(true, |max| depth < max) => {
                    deepest = deepest.max(depth + 1);
                    stack.push((children.iter(), depth + 1));
                }
                _ => acc.push(item),
            },
            None => {
                stack.pop();
            }
        }
    }

    tracing::trace!(levels = deepest, len = acc.len(), "flattened sequence");
}

/// Flattens every level and unwraps the leaves.
///
/// Empty lists contribute nothing.
pub fn flatten_leaves<T>(sequence: &[Nested<T>]) -> Vec<&T> {
    flatten(sequence, false)
        .into_iter()
        .filter_map(Nested::as_leaf)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn macro_builds_nested_lists() {
        let tree: Vec<Nested<i32>> = nested![[], [1], 2];
        assert_eq!(
            tree,
            vec![
                Nested::List(vec![]),
                Nested::List(vec![Nested::Leaf(1)]),
                Nested::Leaf(2),
            ]
        );
    }

    #[test]
    fn deep_flatten_expands_every_level() {
        let tree = nested![1, [2, [3, [4]]]];
        assert_eq!(flatten_leaves(&tree), vec![&1, &2, &3, &4]);
        assert!(flatten(&tree, false).iter().all(|n| !n.is_list()));
    }

    #[test]
    fn shallow_flatten_expands_one_level() {
        let tree = nested![1, [2, [3, [4]]]];
        let flat = flatten(&tree, true);
        assert_eq!(flat.len(), 3);
        assert_eq!(flat[0], &Nested::Leaf(1));
        assert_eq!(flat[1], &Nested::Leaf(2));
        assert_eq!(flat[2], &nested![[3, [4]]][0]);
    }

    #[test]
    fn flat_input_is_unchanged() {
        let tree = nested!["a", "b", "c"];
        let expected: Vec<_> = tree.iter().collect();
        assert_eq!(flatten(&tree, true), expected);
        assert_eq!(flatten(&tree, false), expected);
    }

    #[test]
    fn empty_lists_vanish() {
        let tree: Vec<Nested<u8>> = nested![[], [[]], [[], []]];
        assert!(flatten(&tree, false).is_empty());
        assert_eq!(flatten(&tree, true).len(), 3);
    }

    #[test]
    fn flatten_into_appends_to_accumulator() {
        let first = nested![1, [2]];
        let second = nested![[3, [4]]];

        let mut acc = Vec::new();
        flatten_into(&first, false, &mut acc);
        flatten_into(&second, false, &mut acc);

        let leaves: Vec<i32> = acc.iter().filter_map(|n| n.as_leaf().copied()).collect();
        assert_eq!(leaves, vec![1, 2, 3, 4]);
    }

    #[test]
    fn depth_limits() {
        let tree = nested![1, [2, [3, [4]]]];
        assert_eq!(flatten_depth(&tree, Some(0)), tree.iter().collect::<Vec<_>>());
        assert_eq!(flatten_depth(&tree, Some(1)), flatten(&tree, true));
        assert_eq!(flatten_depth(&tree, Some(2)).len(), 4);
        assert_eq!(flatten_depth(&tree, None), flatten(&tree, false));
    }

    #[test]
    fn deep_nesting_does_not_overflow() {
        let mut tree = Nested::Leaf(7u32);
        for _ in 0..100_000 {
            tree = Nested::List(vec![tree]);
        }
        let input = vec![tree];
        assert_eq!(flatten_leaves(&input), vec![&7]);

        // Unwind iteratively so the drop glue does not recurse 100k deep.
        let mut pending = input;
        while let Some(node) = pending.pop() {
            if let Nested::List(items) = node {
                pending.extend(items);
            }
        }
    }

    #[test]
    fn leaf_from_value() {
        let leaf: Nested<&str> = "x".into();
        assert_eq!(leaf.as_leaf(), Some(&"x"));
        assert!(leaf.as_list().is_none());
    }
}
