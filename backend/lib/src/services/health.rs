use std::sync::Arc;

use serde::Serialize;

use crate::constants::server::SERVICE_NAME;
use crate::models::CounterKind;
use crate::services::counter::CounterService;

const HEALTHY: &str = "healthy";
const UNHEALTHY: &str = "unhealthy";

#[derive(Serialize)]
pub struct DetailedHealthStatus {
    pub status: String,
    pub version: String,
    pub service: String,
    pub components: HealthComponents,
}

#[derive(Serialize)]
pub struct HealthComponents {
    pub seufz: ComponentHealth,
    pub stoehn: ComponentHealth,
}

#[derive(Serialize)]
pub struct ComponentHealth {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ComponentHealth {
    fn is_healthy(&self) -> bool {
        self.status == HEALTHY
    }
}

pub struct HealthService {
    counters: Arc<CounterService>,
}

impl HealthService {
    pub fn new(counters: Arc<CounterService>) -> Self {
        Self { counters }
    }

    pub fn check_health(&self) -> DetailedHealthStatus {
        let seufz_health = self.check_storage(CounterKind::Seufz);
        let stoehn_health = self.check_storage(CounterKind::Stoehn);

        let overall_status = if seufz_health.is_healthy() && stoehn_health.is_healthy() {
            HEALTHY
        } else {
            UNHEALTHY
        };

        DetailedHealthStatus {
            status: overall_status.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            service: SERVICE_NAME.to_string(),
            components: HealthComponents {
                seufz: seufz_health,
                stoehn: stoehn_health,
            },
        }
    }

    fn check_storage(&self, kind: CounterKind) -> ComponentHealth {
        let storage = self.counters.counter(kind).storage();
        match storage.health_check() {
            Ok(true) => ComponentHealth {
                status: HEALTHY.to_string(),
                message: None,
            },
            Ok(false) => ComponentHealth {
                status: UNHEALTHY.to_string(),
                message: Some(format!("Storage not writable: {}", storage.location())),
            },
            Err(e) => ComponentHealth {
                status: UNHEALTHY.to_string(),
                message: Some(format!("Storage error: {}", e)),
            },
        }
    }
}
