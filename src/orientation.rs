//! Orientation normalization.

/// Degrees in one full turn.
pub const FULL_TURN_DEGREES: i64 = 360;

/// Folds an adjusted reading into `[0, 360)` degrees.
///
/// Negative readings wrap around, so `-10` becomes `350`.
#[inline]
pub fn normalize(adjusted: i64) -> u16 {
    // rem_euclid on a positive modulus is always in [0, 360).
    adjusted.rem_euclid(FULL_TURN_DEGREES) as u16
}

/// Adds `offset` to a raw register value and normalizes the sum.
#[inline]
pub fn adjust(raw: i32, offset: i64) -> u16 {
    normalize(i64::from(raw) + offset)
}
