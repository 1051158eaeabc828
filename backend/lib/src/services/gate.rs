//! Per-counter cooldown enforcement
//!
//! The gate remembers when each counter last accepted a mutation and rejects
//! further mutations until the cooldown has passed. The counters themselves know
//! nothing about rate limiting.

use std::time::Duration;

use parking_lot::Mutex;
use thiserror::Error;
use tokio::time::Instant;
use tracing::debug;

use crate::models::CounterKind;

/// Message shown to users whose action was rejected
pub fn cooldown_message(kind: CounterKind, cooldown: Duration) -> String {
    format!(
        "Bitte warte {} Sekunden zwischen den {}-Klicks!",
        cooldown.as_secs(),
        kind.label()
    )
}

#[derive(Debug, Error)]
#[error("{message}")]
pub struct CooldownActive {
    pub kind: CounterKind,
    pub remaining: Duration,
    message: String,
}

pub struct RequestGate {
    cooldown: Duration,
    seufz: Mutex<Option<Instant>>,
    stoehn: Mutex<Option<Instant>>,
}

impl RequestGate {
    pub fn new(cooldown: Duration) -> Self {
        Self {
            cooldown,
            seufz: Mutex::new(None),
            stoehn: Mutex::new(None),
        }
    }

    pub fn cooldown(&self) -> Duration {
        self.cooldown
    }

    /// Time left until `kind` accepts the next mutation, if any
    pub fn remaining(&self, kind: CounterKind) -> Option<Duration> {
        let last = *self.slot(kind).lock();
        self.remaining_since(last, Instant::now())
    }

    pub fn is_cooling_down(&self, kind: CounterKind) -> bool {
        self.remaining(kind).is_some()
    }

    /// Run `action` unless `kind` is cooling down
    ///
    /// The slot stays locked while `action` runs, so two concurrent requests for
    /// the same counter cannot both pass. The cooldown starts when `action`
    /// returns.
    pub fn admit<T>(
        &self,
        kind: CounterKind,
        action: impl FnOnce() -> T,
    ) -> Result<T, CooldownActive> {
        let mut last = self.slot(kind).lock();

        if let Some(remaining) = self.remaining_since(*last, Instant::now()) {
            debug!(counter = %kind, ?remaining, "Rejected mutation during cooldown");
            return Err(CooldownActive {
                kind,
                remaining,
                message: cooldown_message(kind, self.cooldown),
            });
        }

        let result = action();
        *last = Some(Instant::now());
        Ok(result)
    }

    fn slot(&self, kind: CounterKind) -> &Mutex<Option<Instant>> {
        match kind {
            CounterKind::Seufz => &self.seufz,
            CounterKind::Stoehn => &self.stoehn,
        }
    }

    fn remaining_since(&self, last: Option<Instant>, now: Instant) -> Option<Duration> {
        let elapsed = now.saturating_duration_since(last?);
        (elapsed < self.cooldown).then(|| self.cooldown - elapsed)
    }
}
