use rand::rngs::OsRng;
use rand::RngCore;
use thiserror::Error;

use super::color::MAX_WHEEL_VALUE;

const WHEEL_SLOTS: u32 = MAX_WHEEL_VALUE + 1;

// Draws at or above this bound are rejected so that `raw % WHEEL_SLOTS`
// stays uniform; the bound is the largest multiple of WHEEL_SLOTS that
// fits in a u32.
const REJECTION_BOUND: u32 = u32::MAX - (u32::MAX % WHEEL_SLOTS);

/// The OS secure random source could not be read. Fatal to the spin that
/// triggered it; callers must not substitute a weaker source.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("secure random source unavailable: {0}")]
pub struct RandomSourceUnavailable(pub String);

/// Draw one slot value uniformly from 0..=36 using the OS CSPRNG.
pub fn draw_slot() -> Result<u32, RandomSourceUnavailable> {
    let mut buf = [0u8; 4];
    loop {
        OsRng
            .try_fill_bytes(&mut buf)
            .map_err(|err| RandomSourceUnavailable(err.to_string()))?;
        let raw = u32::from_le_bytes(buf);
        if raw < REJECTION_BOUND {
            return Ok(raw % WHEEL_SLOTS);
        }
    }
}
