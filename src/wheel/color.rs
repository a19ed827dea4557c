use serde::{Deserialize, Serialize};

/// Highest slot on a European wheel (37 slots, 0 through 36).
pub const MAX_WHEEL_VALUE: u32 = 36;

/// The 18 red numbers of the European wheel. BLACK is the complement
/// within 1..=36; GREEN is exactly {0}.
pub const RED_NUMBERS: [u32; 18] = [
    1, 3, 5, 7, 9, 12, 14, 16, 18, 19, 21, 23, 25, 27, 30, 32, 34, 36,
];

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum RouletteColor {
    Red,
    Black,
    Green,
}

impl RouletteColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            RouletteColor::Red => "RED",
            RouletteColor::Black => "BLACK",
            RouletteColor::Green => "GREEN",
        }
    }
}

/// Derive the wheel color for a slot value. Total over 0..=36.
pub fn color_for_value(value: u32) -> RouletteColor {
    if value == 0 {
        RouletteColor::Green
    } else if RED_NUMBERS.contains(&value) {
        RouletteColor::Red
    } else {
        RouletteColor::Black
    }
}
