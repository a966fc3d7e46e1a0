use std::cell::{Cell, RefCell};

/// Single-entry cache for a derived value.
///
/// Holds the last key and the value computed for it. A lookup with an equal
/// key returns the cached value; any other key recomputes and replaces it.
#[derive(Debug)]
pub struct Memo<K, V> {
    entry: RefCell<Option<(K, V)>>,
    computations: Cell<usize>,
}

impl<K, V> Default for Memo<K, V> {
    fn default() -> Self {
        Memo {
            entry: RefCell::new(None),
            computations: Cell::new(0),
        }
    }
}

impl<K: PartialEq + Clone, V: Clone> Memo<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_compute(&self, key: &K, compute: impl FnOnce() -> V) -> V {
        if let Some((cached_key, value)) = self.entry.borrow().as_ref() {
            if cached_key == key {
                return value.clone();
            }
        }
        let value = compute();
        self.computations.set(self.computations.get() + 1);
        *self.entry.borrow_mut() = Some((key.clone(), value.clone()));
        value
    }

    pub fn invalidate(&self) {
        self.entry.borrow_mut().take();
    }

    /// How many times a value has been computed.
    pub fn computations(&self) -> usize {
        self.computations.get()
    }
}

#[cfg(test)]
mod tests {
    use super::Memo;

    #[test]
    fn test_computes_once_per_key() {
        let memo: Memo<u32, String> = Memo::new();
        assert_eq!(memo.get_or_compute(&1, || "one".to_string()), "one");
        assert_eq!(memo.get_or_compute(&1, || "uno".to_string()), "one");
        assert_eq!(memo.computations(), 1);

        assert_eq!(memo.get_or_compute(&2, || "two".to_string()), "two");
        assert_eq!(memo.computations(), 2);
        // only the last key is kept
        assert_eq!(memo.get_or_compute(&1, || "uno".to_string()), "uno");
        assert_eq!(memo.computations(), 3);
    }

    #[test]
    fn test_invalidate() {
        let memo: Memo<u32, u32> = Memo::new();
        memo.get_or_compute(&1, || 10);
        memo.invalidate();
        assert_eq!(memo.get_or_compute(&1, || 11), 11);
        assert_eq!(memo.computations(), 2);
    }

    #[test]
    fn test_compute_may_read_another_memo() {
        let inner: Memo<u32, u32> = Memo::new();
        let outer: Memo<u32, u32> = Memo::new();
        let value = outer.get_or_compute(&1, || inner.get_or_compute(&1, || 2) * 10);
        assert_eq!(value, 20);
    }
}
