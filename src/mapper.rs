//! Wheel geometry and the rotation -> slice mapping.
//!
//! Screen convention: y grows downward and angles grow clockwise from the
//! positive x axis. Slice `i` covers `[rotation + i*arc, rotation + (i+1)*arc)`
//! and the pointer is fixed at the top of the wheel.

use std::f64::consts::{PI, TAU};

/// Pointer position in screen angle (straight up)
pub const POINTER_ANGLE: f64 = 1.5 * PI;

/// Angle covered by one slice, `None` for an empty wheel
pub fn slice_angle(count: usize) -> Option<f64> {
    if count == 0 {
        None
    } else {
        Some(TAU / count as f64)
    }
}

/// Index of the slice sitting under the pointer for a given rotation.
///
/// Always in `[0, count)`. `count` must be at least 1.
pub fn select_index(rotation: f64, count: usize) -> usize {
    debug_assert!(count > 0, "select_index on an empty wheel");
    if count == 0 {
        return 0;
    }
    // +90 because slice angle 0 points right while the pointer is on top
    let degrees = rotation.to_degrees() + 90.0;
    let normalized = (360.0 - degrees.rem_euclid(360.0)).rem_euclid(360.0);
    let slice_degrees = 360.0 / count as f64;
    // NaN and infinities saturate to 0 in the cast
    (normalized / slice_degrees).floor() as usize % count
}

/// Index of the slice drawn at screen angle `angle`.
pub fn slice_at(angle: f64, rotation: f64, count: usize) -> usize {
    match slice_angle(count) {
        Some(arc) => ((angle - rotation).rem_euclid(TAU) / arc).floor() as usize % count,
        None => 0,
    }
}

/// Screen angle through the middle of slice `index`
pub fn slice_center(index: usize, rotation: f64, count: usize) -> f64 {
    let arc = slice_angle(count).unwrap_or(TAU);
    rotation + (index as f64 + 0.5) * arc
}

/// Cubic ease-out: cumulative progress at time `t` for start `b`, total
/// change `c` and duration `d`.
#[inline]
pub fn ease_out(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let u = t / d - 1.0;
    c * (u * u * u + 1.0) + b
}
