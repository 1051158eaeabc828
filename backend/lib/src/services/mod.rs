//! Services module for the Seufz backend

pub mod counter;
pub mod gate;
pub mod health;

use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::models::{CounterAction, Step};

#[derive(Clone)]
pub struct Services {
    pub counters: Arc<counter::CounterService>,
    pub gate: Arc<gate::RequestGate>,
    pub health: Arc<health::HealthService>,
}

impl Services {
    pub fn new(counters: Arc<counter::CounterService>, cooldown: Duration) -> Self {
        let gate = Arc::new(gate::RequestGate::new(cooldown));
        let health = Arc::new(health::HealthService::new(counters.clone()));
        Self {
            counters,
            gate,
            health,
        }
    }

    /// Services backed by the counter files in the configured data directory
    pub fn from_config(config: &Config) -> Self {
        let counters = Arc::new(counter::CounterService::open(&config.data_dir));
        Self::new(counters, config.cooldown())
    }

    /// Services whose counters are lost when the process exits
    pub fn in_memory(cooldown: Duration) -> Self {
        Self::new(Arc::new(counter::CounterService::in_memory()), cooldown)
    }

    /// Apply a user action to its counter if the gate lets it through
    pub fn apply(&self, action: CounterAction) -> Result<i64, gate::CooldownActive> {
        self.gate.admit(action.kind, || match action.step {
            Step::Increment => self.counters.increment(action.kind),
            Step::Decrement => self.counters.decrement(action.kind),
        })
    }
}
