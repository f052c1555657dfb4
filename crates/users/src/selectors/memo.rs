//! Single-slot memo cells backing the selectors.

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use storefront_auth::UserId;
use tracing::trace;

/// Decides whether two selector inputs count as "unchanged".
///
/// Shared slices compare by pointer, parameters by value.
pub trait InputKey {
    fn same_input(&self, other: &Self) -> bool;
}

impl<T: ?Sized> InputKey for Arc<T> {
    fn same_input(&self, other: &Self) -> bool {
        Arc::ptr_eq(self, other)
    }
}

impl<T: InputKey> InputKey for Option<T> {
    fn same_input(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(left), Some(right)) => left.same_input(right),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<A: InputKey, B: InputKey> InputKey for (A, B) {
    fn same_input(&self, other: &Self) -> bool {
        self.0.same_input(&other.0) && self.1.same_input(&other.1)
    }
}

impl InputKey for String {
    fn same_input(&self, other: &Self) -> bool {
        self == other
    }
}

impl InputKey for UserId {
    fn same_input(&self, other: &Self) -> bool {
        self == other
    }
}

/// Remembers the last input and its result.
///
/// The cached key is held by value, so a pointer it compares against cannot
/// be freed and reused while cached.
pub struct Memo<K, V> {
    name: &'static str,
    slot: Mutex<Option<(K, V)>>,
}

impl<K: InputKey, V: Clone> Memo<K, V> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            slot: Mutex::new(None),
        }
    }

    /// Return the cached value when `key` matches the last input, otherwise
    /// run `compute` and cache its result.
    pub fn get_or_compute(&self, key: K, compute: impl FnOnce(&K) -> V) -> V {
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some((cached_key, value)) = slot.as_ref() {
            if cached_key.same_input(&key) {
                return value.clone();
            }
        }

        trace!(selector = self.name, "recomputing");
        let value = compute(&key);
        *slot = Some((key, value.clone()));
        value
    }

    pub fn clear(&self) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

impl<K, V> fmt::Debug for Memo<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cached = self
            .slot
            .lock()
            .map(|slot| slot.is_some())
            .unwrap_or(false);
        f.debug_struct("Memo")
            .field("name", &self.name)
            .field("cached", &cached)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn same_pointer_hits_cache() {
        let memo: Memo<Arc<Vec<u8>>, usize> = Memo::new("len");
        let calls = Cell::new(0);
        let input = Arc::new(vec![1, 2, 3]);

        for _ in 0..3 {
            let len = memo.get_or_compute(input.clone(), |v| {
                calls.set(calls.get() + 1);
                v.len()
            });
            assert_eq!(len, 3);
        }
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn equal_but_distinct_pointer_recomputes() {
        let memo: Memo<Arc<Vec<u8>>, usize> = Memo::new("len");
        let calls = Cell::new(0);
        let count = |v: &Arc<Vec<u8>>| {
            calls.set(calls.get() + 1);
            v.len()
        };

        memo.get_or_compute(Arc::new(vec![1]), count);
        memo.get_or_compute(Arc::new(vec![1]), count);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn parameter_change_recomputes_and_clear_forgets() {
        let memo: Memo<(Arc<str>, String), String> = Memo::new("concat");
        let base: Arc<str> = Arc::from("ab");
        let calls = Cell::new(0);
        let join = |(base, suffix): &(Arc<str>, String)| {
            calls.set(calls.get() + 1);
            format!("{base}{suffix}")
        };

        assert_eq!(memo.get_or_compute((base.clone(), "c".into()), join), "abc");
        assert_eq!(memo.get_or_compute((base.clone(), "c".into()), join), "abc");
        assert_eq!(memo.get_or_compute((base.clone(), "d".into()), join), "abd");
        assert_eq!(calls.get(), 2);

        memo.clear();
        memo.get_or_compute((base, "d".into()), join);
        assert_eq!(calls.get(), 3);
        assert!(format!("{memo:?}").contains("cached: true"));
    }
}
