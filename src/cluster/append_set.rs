//! Insert-only collection shared by the neighborhood builder's workers.
//!
//! Many writers, one barrier, one reader: workers call [`AppendOnlySet::add`]
//! concurrently, and only after every writer has returned does anyone read the
//! contents back. The set does not synchronize readers against writers; the
//! caller's join provides that ordering.

use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;

/// Thread-safe, append-only collection of point positions.
///
/// Values are not de-duplicated. Per-writer insertion order is preserved in
/// the read-out; the interleaving across writers is unspecified.
#[derive(Debug, Default)]
pub struct AppendOnlySet {
    items: Mutex<Vec<usize>>,
    len: AtomicUsize,
}

impl AppendOnlySet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty set with room for `capacity` values before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Mutex::new(Vec::with_capacity(capacity)),
            len: AtomicUsize::new(0),
        }
    }

    /// Append a value. Safe to call from any number of threads at once.
    pub fn add(&self, value: usize) {
        let mut items = self.items.lock();
        items.push(value);
        self.len.fetch_add(1, Ordering::Release);
    }

    /// Number of values added so far.
    pub fn len(&self) -> usize {
        self.len.load(Ordering::Acquire)
    }

    /// Whether nothing has been added yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copy of every value added so far.
    ///
    /// Only meaningful once all writers have finished; the returned length then
    /// equals [`len`](Self::len).
    pub fn snapshot(&self) -> Vec<usize> {
        self.items.lock().clone()
    }

    /// Consume the set and return its values without copying.
    pub fn into_vec(self) -> Vec<usize> {
        self.items.into_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_concurrent_adds_are_not_lost() {
        let set = AppendOnlySet::new();
        let writers = 10;
        let per_writer = 100;

        std::thread::scope(|s| {
            for _ in 0..writers {
                s.spawn(|| {
                    for i in 0..per_writer {
                        set.add(i);
                    }
                });
            }
        });

        assert_eq!(set.len(), writers * per_writer);

        let values = set.snapshot();
        assert_eq!(values.len(), writers * per_writer);

        let mut counter: HashMap<usize, usize> = HashMap::new();
        for v in values {
            *counter.entry(v).or_default() += 1;
        }
        assert_eq!(counter.len(), per_writer);
        for (value, count) in counter {
            assert_eq!(count, writers, "value {value} seen {count} times");
        }
    }

    #[test]
    fn test_single_writer_keeps_insertion_order() {
        let set = AppendOnlySet::with_capacity(2);
        for v in [5, 3, 9, 3] {
            set.add(v);
        }
        assert_eq!(set.snapshot(), vec![5, 3, 9, 3]);
        assert_eq!(set.into_vec(), vec![5, 3, 9, 3]);
    }

    #[test]
    fn test_empty() {
        let set = AppendOnlySet::new();
        assert!(set.is_empty());
        assert!(set.snapshot().is_empty());
    }
}
