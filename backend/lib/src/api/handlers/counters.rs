//! JSON counter endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::{Error, Result},
    models::{CounterAction, CounterKind, CounterValue, CountersSnapshot, Step},
    services::Services,
};

fn parse_kind(name: &str) -> Result<CounterKind> {
    name.parse()
        .map_err(|_| Error::NotFound(format!("Unknown counter: {}", name)))
}

pub async fn get_counters(State(services): State<Services>) -> Json<CountersSnapshot> {
    Json(services.counters.snapshot())
}

pub async fn get_counter(
    State(services): State<Services>,
    Path(name): Path<String>,
) -> Result<Json<CounterValue>> {
    let kind = parse_kind(&name)?;
    Ok(Json(CounterValue {
        name: kind,
        value: services.counters.get(kind),
    }))
}

pub async fn increment_counter(
    State(services): State<Services>,
    Path(name): Path<String>,
) -> Result<Json<CounterValue>> {
    step_counter(&services, &name, Step::Increment)
}

pub async fn decrement_counter(
    State(services): State<Services>,
    Path(name): Path<String>,
) -> Result<Json<CounterValue>> {
    step_counter(&services, &name, Step::Decrement)
}

fn step_counter(services: &Services, name: &str, step: Step) -> Result<Json<CounterValue>> {
    let kind = parse_kind(name)?;
    let value = services.apply(CounterAction::new(kind, step))?;
    Ok(Json(CounterValue { name: kind, value }))
}
