use std::{collections::HashSet, hash::Hash};

#[macro_export]
macro_rules! assert_unique {
    ($slice:expr) => {{
        let slice = &$slice;
        assert!(
            $crate::slice::is_unique(&slice[..]),
            "expected `{}` to be unique, but it wasn't; actual={:?}",
            stringify!($slice),
            slice,
        );
    }};
}

#[macro_export]
macro_rules! assert_empty {
    ($slice:expr) => {{
        match &$slice[..] {
            [] => {}
            actual => panic!(
                "expected `{}` to be empty; actual={:?}",
                stringify!($slice),
                actual
            ),
        }
    }};
}

/// Returns `true` if no two elements of `slice` are equal.
pub fn is_unique<T: Eq + Hash>(slice: &[T]) -> bool {
    let mut seen = HashSet::with_capacity(slice.len());
    slice.iter().all(|el| seen.insert(el))
}
