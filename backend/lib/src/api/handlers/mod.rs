use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect},
    Json,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use tracing::info;

use crate::{
    constants::cookies::{ANIMATION, ANIMATION_GRACE_SECS, FLASH},
    models::{CounterAction, CounterKind, IndexPage, Step},
    services::{gate::cooldown_message, Services},
};

pub mod counters;

// ==================== Health Handler ====================

pub async fn health_check(State(services): State<Services>) -> impl IntoResponse {
    Json(services.health.check_health())
}

// ==================== Page Handlers ====================

pub async fn index(State(services): State<Services>, jar: CookieJar) -> (CookieJar, Html<String>) {
    let cooldown = services.gate.cooldown();

    let flash = jar
        .get(FLASH)
        .and_then(|cookie| cookie.value().parse::<CounterKind>().ok())
        .map(|kind| cooldown_message(kind, cooldown));
    let animation = jar
        .get(ANIMATION)
        .and_then(|cookie| CounterAction::from_animation(cookie.value()));

    let page = IndexPage {
        counts: services.counters.snapshot(),
        seufz_disabled: services.gate.is_cooling_down(CounterKind::Seufz),
        stoehn_disabled: services.gate.is_cooling_down(CounterKind::Stoehn),
        cooldown_secs: cooldown.as_secs(),
        flash,
        animation,
    };

    // The flash message is shown exactly once
    let jar = jar.remove(Cookie::build(FLASH).path("/"));

    (jar, Html(page.render()))
}

pub async fn seufz_increment(State(services): State<Services>, jar: CookieJar) -> (CookieJar, Redirect) {
    apply_action(&services, jar, CounterAction::new(CounterKind::Seufz, Step::Increment))
}

pub async fn seufz_decrement(State(services): State<Services>, jar: CookieJar) -> (CookieJar, Redirect) {
    apply_action(&services, jar, CounterAction::new(CounterKind::Seufz, Step::Decrement))
}

pub async fn stoehn_increment(State(services): State<Services>, jar: CookieJar) -> (CookieJar, Redirect) {
    apply_action(&services, jar, CounterAction::new(CounterKind::Stoehn, Step::Increment))
}

pub async fn stoehn_decrement(State(services): State<Services>, jar: CookieJar) -> (CookieJar, Redirect) {
    apply_action(&services, jar, CounterAction::new(CounterKind::Stoehn, Step::Decrement))
}

fn apply_action(services: &Services, jar: CookieJar, action: CounterAction) -> (CookieJar, Redirect) {
    let jar = match services.apply(action) {
        Ok(value) => {
            info!(counter = %action.kind, value, "Counter updated");
            jar.add(animation_cookie(action, services.gate.cooldown().as_secs()))
        }
        Err(rejected) => {
            info!(counter = %action.kind, remaining = ?rejected.remaining, "Action rejected during cooldown");
            jar.add(Cookie::build((FLASH, action.kind.to_string())).path("/"))
        }
    };

    (jar, Redirect::to("/"))
}

/// Lives slightly longer than the cooldown so it survives until the page reloads
fn animation_cookie(action: CounterAction, cooldown_secs: u64) -> Cookie<'static> {
    let max_age =
        i64::try_from(cooldown_secs.saturating_add(ANIMATION_GRACE_SECS)).unwrap_or(i64::MAX);

    Cookie::build((ANIMATION, action.animation()))
        .path("/")
        .max_age(time::Duration::seconds(max_age))
        .same_site(SameSite::Lax)
        .build()
}
