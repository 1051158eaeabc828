use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// The two counters exposed by the application
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum CounterKind {
    Seufz,
    Stoehn,
}

impl CounterKind {
    pub const ALL: [CounterKind; 2] = [CounterKind::Seufz, CounterKind::Stoehn];

    /// Name of the JSON file backing this counter inside the data directory
    pub fn file_name(self) -> &'static str {
        match self {
            CounterKind::Seufz => "seufz.json",
            CounterKind::Stoehn => "stoehn.json",
        }
    }

    /// Label shown to users
    pub fn label(self) -> &'static str {
        match self {
            CounterKind::Seufz => "Seufz",
            CounterKind::Stoehn => "Stöhn",
        }
    }

    /// Sound played by the page after a successful action
    pub fn sound(self) -> &'static str {
        match self {
            CounterKind::Seufz => "seufzer.mp3",
            CounterKind::Stoehn => "stöhner.mp3",
        }
    }
}

/// Direction of a counter mutation triggered by a user action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Increment,
    Decrement,
}

/// A user action on one counter, e.g. `seufz_increment`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterAction {
    pub kind: CounterKind,
    pub step: Step,
}

impl CounterAction {
    pub fn new(kind: CounterKind, step: Step) -> Self {
        Self { kind, step }
    }

    /// Value of the animation cookie set after this action succeeded
    pub fn animation(&self) -> String {
        let suffix = match self.step {
            Step::Increment => "plus",
            Step::Decrement => "minus",
        };
        format!("{}_{}", self.kind, suffix)
    }

    /// Inverse of [`CounterAction::animation`]; unknown values yield `None`
    pub fn from_animation(value: &str) -> Option<Self> {
        let (kind, suffix) = value.split_once('_')?;
        let step = match suffix {
            "plus" => Step::Increment,
            "minus" => Step::Decrement,
            _ => return None,
        };
        Some(Self::new(kind.parse().ok()?, step))
    }

    /// Sound file the page plays for this action
    pub fn sound(&self) -> &'static str {
        match self.step {
            Step::Increment => self.kind.sound(),
            Step::Decrement => "sad_sound.mp3",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CounterValue {
    pub name: CounterKind,
    pub value: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountersSnapshot {
    pub seufz: i64,
    pub stoehn: i64,
}

impl CountersSnapshot {
    pub fn get(&self, kind: CounterKind) -> i64 {
        match kind {
            CounterKind::Seufz => self.seufz,
            CounterKind::Stoehn => self.stoehn,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_kind_parsing() {
        assert_eq!(CounterKind::from_str("seufz").unwrap(), CounterKind::Seufz);
        assert_eq!(CounterKind::from_str("Stoehn").unwrap(), CounterKind::Stoehn);
        assert!(CounterKind::from_str("gaehn").is_err());
    }

    #[test]
    fn test_animation_values() {
        let action = CounterAction::new(CounterKind::Seufz, Step::Increment);
        assert_eq!(action.animation(), "seufz_plus");

        let action = CounterAction::new(CounterKind::Stoehn, Step::Decrement);
        assert_eq!(action.animation(), "stoehn_minus");
        assert_eq!(CounterAction::from_animation("stoehn_minus"), Some(action));
    }

    #[test]
    fn test_unknown_animation_is_rejected() {
        assert_eq!(CounterAction::from_animation("seufz_twice"), None);
        assert_eq!(CounterAction::from_animation("gaehn_plus"), None);
        assert_eq!(CounterAction::from_animation("<script>"), None);
    }

    #[test]
    fn test_snapshot_serialization() {
        let snapshot = CountersSnapshot { seufz: 3, stoehn: -1 };
        let json = serde_json::to_value(snapshot).unwrap();
        assert_eq!(json, serde_json::json!({"seufz": 3, "stoehn": -1}));
    }
}
