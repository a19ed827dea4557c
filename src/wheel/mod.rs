pub mod color;
pub mod outcome;
pub mod rng;

pub use color::{color_for_value, RouletteColor};
pub use outcome::{default_value_for, SpinOutcome, ValueOutOfRange};
pub use rng::{draw_slot, RandomSourceUnavailable};

/// Resolve one simulated spin: draw a slot from the secure random source
/// and stamp it with a fresh id, timestamp, and derived color.
pub fn spin() -> Result<SpinOutcome, RandomSourceUnavailable> {
    let value = draw_slot()?;
    Ok(SpinOutcome::new(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spin_produces_in_range_consistent_outcomes() {
        for _ in 0..200 {
            let outcome = spin().expect("OS random source available");
            assert!(outcome.value <= color::MAX_WHEEL_VALUE);
            assert_eq!(outcome.color, color_for_value(outcome.value));
            assert!(!outcome.id.is_empty());
            assert!(outcome.timestamp > 0);
        }
    }

    #[test]
    fn spin_ids_are_distinct() {
        let a = spin().expect("OS random source available");
        let b = spin().expect("OS random source available");
        assert_ne!(a.id, b.id);
    }
}
