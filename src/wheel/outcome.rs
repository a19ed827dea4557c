use chrono::Utc;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use super::color::{color_for_value, RouletteColor, MAX_WHEEL_VALUE};

/// A manual entry carried a value outside the wheel.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("value {0} is outside the wheel range 0-{MAX_WHEEL_VALUE}")]
pub struct ValueOutOfRange(pub u32);

/// One resolved roulette spin. `color` is always derived from `value`,
/// never stored independently.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SpinOutcome {
    pub id: String,
    /// Milliseconds since epoch.
    pub timestamp: i64,
    pub value: u32,
    pub color: RouletteColor,
}

impl SpinOutcome {
    /// Callers must guarantee `value <= MAX_WHEEL_VALUE`; the wheel draw
    /// does by construction, everything else goes through `from_value`.
    pub(crate) fn new(value: u32) -> Self {
        debug_assert!(value <= MAX_WHEEL_VALUE);
        Self {
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now().timestamp_millis(),
            value,
            color: color_for_value(value),
        }
    }

    /// Build an outcome from a user-supplied value, deriving the color.
    pub fn from_value(value: u32) -> Result<Self, ValueOutOfRange> {
        if value > MAX_WHEEL_VALUE {
            return Err(ValueOutOfRange(value));
        }
        Ok(Self::new(value))
    }
}

/// Placeholder default for manual entries that pick a color without a
/// number. Not game logic: 0/1/2 are simply the lowest slots of each
/// color, and each maps back to the chosen color.
pub fn default_value_for(color: RouletteColor) -> u32 {
    match color {
        RouletteColor::Green => 0,
        RouletteColor::Red => 1,
        RouletteColor::Black => 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_value_rejects_out_of_range() {
        assert_eq!(SpinOutcome::from_value(37).unwrap_err(), ValueOutOfRange(37));
        assert!(SpinOutcome::from_value(36).is_ok());
    }

    #[test]
    fn from_value_derives_the_color() {
        assert_eq!(SpinOutcome::from_value(0).unwrap().color, RouletteColor::Green);
        assert_eq!(SpinOutcome::from_value(1).unwrap().color, RouletteColor::Red);
        assert_eq!(SpinOutcome::from_value(2).unwrap().color, RouletteColor::Black);
    }

    #[test]
    fn manual_defaults_are_self_consistent() {
        for color in [
            RouletteColor::Red,
            RouletteColor::Black,
            RouletteColor::Green,
        ] {
            let value = default_value_for(color);
            assert_eq!(color_for_value(value), color);
        }
        assert_eq!(default_value_for(RouletteColor::Green), 0);
        assert_eq!(default_value_for(RouletteColor::Red), 1);
        assert_eq!(default_value_for(RouletteColor::Black), 2);
    }

    #[test]
    fn serializes_with_the_frontend_field_names() {
        let outcome = SpinOutcome::from_value(12).unwrap();
        let json = serde_json::to_value(&outcome).unwrap();
        assert!(json.get("id").is_some());
        assert!(json.get("timestamp").is_some());
        assert_eq!(json.get("value").unwrap(), 12);
        assert_eq!(json.get("color").unwrap(), "RED");
    }
}
