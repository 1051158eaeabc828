//! Test constants for use across all backend tests

/// Cooldown used by route tests that need a second action to be rejected
pub const TEST_COOLDOWN_SECS: u64 = 3;

/// Arbitrary values written with `set`
pub mod values {
    pub const POSITIVE: i64 = 42;
    pub const NEGATIVE: i64 = -17;
}

/// Content no JSON parser accepts
pub const GARBAGE: &str = "this is {not json";
