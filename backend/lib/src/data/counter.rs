//! Durable integer register
//!
//! A [`Counter`] keeps its value in memory and mirrors every mutation to its
//! storage backend. All operations take the instance lock for their whole
//! duration, storage I/O included, so mutations on one counter never interleave.
//! Storage failures never reach the caller: a failed load resets the value to 0,
//! a failed save keeps the in-memory value authoritative. Both are logged.

use std::{path::PathBuf, sync::Arc};

use parking_lot::Mutex;
use tracing::{debug, info, warn};

use crate::constants::counter::DEFAULT_STEP;
use crate::data::storage::{boxed, BoxedStorage, JsonFileStorage};

pub struct Counter {
    value: Mutex<i64>,
    storage: Arc<dyn BoxedStorage>,
}

impl Counter {
    /// Open a counter backed by the JSON file at `path`
    ///
    /// The file does not need to exist; it is created together with its parent
    /// directories on the first mutation.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::with_storage(boxed(JsonFileStorage::new(path)))
    }

    pub fn with_storage(storage: Arc<dyn BoxedStorage>) -> Self {
        let counter = Self {
            value: Mutex::new(0),
            storage,
        };

        {
            let mut value = counter.value.lock();
            counter.reload(&mut value);
        }

        counter
    }

    /// Current value, re-read from storage to pick up writes from other processes
    pub fn get(&self) -> i64 {
        let mut value = self.value.lock();
        self.reload(&mut value);
        *value
    }

    pub fn increment(&self) -> i64 {
        self.update(|value| value.saturating_add(DEFAULT_STEP))
    }

    /// No floor: the counter happily goes negative
    pub fn decrement(&self) -> i64 {
        self.update(|value| value.saturating_sub(DEFAULT_STEP))
    }

    pub fn set(&self, new_value: i64) -> i64 {
        self.update(|_| new_value)
    }

    pub fn storage(&self) -> &Arc<dyn BoxedStorage> {
        &self.storage
    }

    fn update(&self, f: impl FnOnce(i64) -> i64) -> i64 {
        let mut value = self.value.lock();
        *value = f(*value);
        self.persist(*value);
        *value
    }

    // A missing record leaves the in-memory value alone, so a counter whose
    // saves keep failing still reports what it holds.
    fn reload(&self, value: &mut i64) {
        match self.storage.load() {
            Ok(Some(stored)) => {
                debug!(location = %self.storage.location(), value = stored, "Loaded counter");
                *value = stored;
            }
            Ok(None) => {}
            Err(e) => {
                warn!(
                    location = %self.storage.location(),
                    error = %e,
                    "Failed to load counter, starting from 0"
                );
                *value = 0;
            }
        }
    }

    fn persist(&self, value: i64) {
        match self.storage.save(value) {
            Ok(()) => info!(location = %self.storage.location(), value, "Saved counter"),
            Err(e) => warn!(
                location = %self.storage.location(),
                value,
                error = %e,
                "Failed to save counter, keeping in-memory value"
            ),
        }
    }
}

impl std::fmt::Debug for Counter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Counter")
            .field("value", &*self.value.lock())
            .field("location", &self.storage.location())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::constants::test::{values, GARBAGE};
    use crate::data::storage::InMemoryStorage;

    #[test]
    fn test_counter_scenario() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("counter.json");
        let counter = Counter::open(&path);

        assert_eq!(counter.increment(), 1);
        assert_eq!(fs::read_to_string(&path).unwrap(), r#"{"count":1}"#);

        assert_eq!(counter.decrement(), 0);

        assert_eq!(counter.set(42), 42);
        assert_eq!(fs::read_to_string(&path).unwrap(), r#"{"count":42}"#);
    }

    #[test]
    fn test_set_then_get() {
        let counter = Counter::with_storage(crate::data::storage::test_storage());

        for value in [values::POSITIVE, values::NEGATIVE, 0] {
            assert_eq!(counter.set(value), value);
            assert_eq!(counter.get(), value);
        }
    }

    #[test]
    fn test_repeated_steps() {
        let counter = Counter::with_storage(crate::data::storage::test_storage());
        for i in 1..=10 {
            assert_eq!(counter.increment(), i);
        }

        let counter = Counter::with_storage(crate::data::storage::test_storage());
        for i in 1..=10 {
            assert_eq!(counter.decrement(), -i);
        }
    }

    #[test]
    fn test_reopen_sees_saved_value() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("counter.json");

        Counter::open(&path).set(5);

        assert_eq!(Counter::open(&path).get(), 5);
    }

    #[test]
    fn test_garbage_file_starts_at_zero() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("counter.json");
        fs::write(&path, GARBAGE).unwrap();

        let counter = Counter::open(&path);
        assert_eq!(counter.get(), 0);

        // The next mutation repairs the file
        assert_eq!(counter.increment(), 1);
        assert_eq!(fs::read_to_string(&path).unwrap(), r#"{"count":1}"#);
    }

    #[test]
    fn test_missing_file_and_parents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a").join("b").join("counter.json");

        let counter = Counter::open(&path);
        assert_eq!(counter.get(), 0);
        assert!(!path.exists());

        assert_eq!(counter.set(values::NEGATIVE), values::NEGATIVE);
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            format!(r#"{{"count":{}}}"#, values::NEGATIVE)
        );
    }

    #[test]
    fn test_get_picks_up_external_writes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("counter.json");
        let counter = Counter::open(&path);
        counter.set(1);

        fs::write(&path, r#"{"count":100}"#).unwrap();

        assert_eq!(counter.get(), 100);
        assert_eq!(counter.increment(), 101);
    }

    #[test]
    fn test_corruption_after_start_resets_to_zero() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("counter.json");
        let counter = Counter::open(&path);
        counter.set(10);

        fs::write(&path, GARBAGE).unwrap();

        assert_eq!(counter.get(), 0);
    }

    #[test]
    fn test_failed_save_keeps_memory_value() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();

        let counter = Counter::open(blocker.join("counter.json"));
        assert_eq!(counter.increment(), 1);
        assert_eq!(counter.increment(), 2);
        assert_eq!(counter.get(), 2);
    }

    #[test]
    fn test_shared_storage_behaves_like_restart() {
        let storage = InMemoryStorage::new();

        let first = Counter::with_storage(boxed(storage.clone()));
        first.set(values::POSITIVE);

        let second = Counter::with_storage(boxed(storage));
        assert_eq!(second.get(), values::POSITIVE);
    }

    #[test]
    fn test_saturates_at_bounds() {
        let counter = Counter::with_storage(crate::data::storage::test_storage());

        counter.set(i64::MAX);
        assert_eq!(counter.increment(), i64::MAX);

        counter.set(i64::MIN);
        assert_eq!(counter.decrement(), i64::MIN);
    }

    #[test]
    fn test_concurrent_mutations_are_not_lost() {
        const THREADS: i64 = 8;
        const ROUNDS: i64 = 50;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("counter.json");
        let counter = Counter::open(&path);

        std::thread::scope(|s| {
            for t in 0..THREADS {
                let counter = &counter;
                s.spawn(move || {
                    for _ in 0..ROUNDS {
                        // Even threads add two and remove one, odd threads only add
                        counter.increment();
                        if t % 2 == 0 {
                            counter.increment();
                            counter.decrement();
                        }
                    }
                });
            }
        });

        let expected = THREADS * ROUNDS;
        assert_eq!(counter.get(), expected);
        assert_eq!(Counter::open(&path).get(), expected);
    }

    #[test]
    fn test_concurrent_set_and_steps_are_serialized() {
        const TARGET: i64 = 1_000_000;
        const STEPPERS: usize = 6;
        const ROUNDS: usize = 50;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("counter.json");
        let counter = Counter::open(&path);

        // Every step returns the value it produced. Values near TARGET can only
        // come from steps ordered after the set, small ones from steps before it.
        let steps_after_set: i64 = std::thread::scope(|s| {
            let steppers: Vec<_> = (0..STEPPERS)
                .map(|t| {
                    let counter = &counter;
                    s.spawn(move || {
                        let mut after = 0;
                        for _ in 0..ROUNDS {
                            let (value, delta) = if t % 2 == 0 {
                                (counter.increment(), 1)
                            } else {
                                (counter.decrement(), -1)
                            };
                            if value > TARGET / 2 {
                                after += delta;
                            }
                        }
                        after
                    })
                })
                .collect();

            let setter = s.spawn(|| {
                std::thread::sleep(std::time::Duration::from_millis(1));
                counter.set(TARGET)
            });
            assert_eq!(setter.join().unwrap(), TARGET);

            steppers.into_iter().map(|h| h.join().unwrap()).sum()
        });

        let expected = TARGET + steps_after_set;
        assert_eq!(counter.get(), expected);
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            format!(r#"{{"count":{}}}"#, expected)
        );
    }
}
