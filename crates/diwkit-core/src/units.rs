//! Numeric helpers
//!
//! Positions are reported with two decimals, extruded volume and inlet
//! diameters with three. Values are rounded half away from zero.

/// Decimals kept for x, y and z positions.
pub const POSITION_DECIMALS: i32 = 2;

/// Decimals kept for cumulative extruded volume and travel distances.
pub const VOLUME_DECIMALS: i32 = 3;

/// Decimals kept for interpolated inlet diameters.
pub const DIAMETER_DECIMALS: i32 = 3;

/// Round `value` to `decimals` places.
///
/// Non-finite values are returned unchanged.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
