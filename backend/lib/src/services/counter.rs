use std::path::Path;
use std::sync::Arc;

use crate::data::{storage, Counter};
use crate::models::{CounterKind, CountersSnapshot};

/// Owns one [`Counter`] per [`CounterKind`]
pub struct CounterService {
    seufz: Arc<Counter>,
    stoehn: Arc<Counter>,
}

impl CounterService {
    pub fn new(seufz: Counter, stoehn: Counter) -> Self {
        Self {
            seufz: Arc::new(seufz),
            stoehn: Arc::new(stoehn),
        }
    }

    /// Open both counters as JSON files inside `data_dir`
    pub fn open(data_dir: &Path) -> Self {
        Self::new(
            Counter::open(data_dir.join(CounterKind::Seufz.file_name())),
            Counter::open(data_dir.join(CounterKind::Stoehn.file_name())),
        )
    }

    /// Counters that live only as long as the process
    pub fn in_memory() -> Self {
        Self::new(
            Counter::with_storage(storage::boxed(storage::InMemoryStorage::new())),
            Counter::with_storage(storage::boxed(storage::InMemoryStorage::new())),
        )
    }

    pub fn counter(&self, kind: CounterKind) -> &Arc<Counter> {
        match kind {
            CounterKind::Seufz => &self.seufz,
            CounterKind::Stoehn => &self.stoehn,
        }
    }

    pub fn get(&self, kind: CounterKind) -> i64 {
        self.counter(kind).get()
    }

    pub fn increment(&self, kind: CounterKind) -> i64 {
        self.counter(kind).increment()
    }

    pub fn decrement(&self, kind: CounterKind) -> i64 {
        self.counter(kind).decrement()
    }

    pub fn set(&self, kind: CounterKind, value: i64) -> i64 {
        self.counter(kind).set(value)
    }

    pub fn snapshot(&self) -> CountersSnapshot {
        CountersSnapshot {
            seufz: self.seufz.get(),
            stoehn: self.stoehn.get(),
        }
    }
}
