//! Configuration constants for the Seufz backend

/// Test constants for use across all backend tests
#[cfg(test)]
pub mod test;

/// Default server configuration
pub mod server {
    /// Default HTTP listening host
    pub const DEFAULT_HOST: &str = "0.0.0.0";

    /// Default HTTP server port
    pub const DEFAULT_PORT: u16 = 5000;

    /// Service name reported by the health endpoint and the JSON log layer
    pub const SERVICE_NAME: &str = "seufz-backend";
}

/// Filesystem layout
pub mod paths {
    /// Directory holding one JSON file per counter
    pub const DEFAULT_DATA_DIR: &str = "data";

    /// Directory served under `/sounds` and `/static`
    pub const DEFAULT_STATIC_DIR: &str = "static";

    /// Directory sound files used to live in before they moved to the static dir
    pub const DEFAULT_TEMPLATES_DIR: &str = "templates";

    /// Audio assets migrated from the templates directory on startup
    pub const LEGACY_ASSETS: [&str; 3] = ["seufzer.mp3", "stöhner.mp3", "sad_sound.mp3"];
}

/// Counter and request gate configuration
pub mod counter {
    /// Step applied by a single increment or decrement
    pub const DEFAULT_STEP: i64 = 1;

    /// Seconds that must pass between two accepted mutations of one counter
    pub const DEFAULT_COOLDOWN_SECS: u64 = 3;
}

/// Cookies set by the HTML surface
pub mod cookies {
    /// Carries the animation hint for the next page render
    pub const ANIMATION: &str = "animation";

    /// Carries the name of the counter whose action was rejected
    pub const FLASH: &str = "flash";

    /// The animation cookie outlives the cooldown by this many seconds
    pub const ANIMATION_GRACE_SECS: u64 = 2;
}
