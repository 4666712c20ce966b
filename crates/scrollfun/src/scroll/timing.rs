//! L4 Atomic Layer: Time calculation utilities for eased scroll animations
//!
//! Provides pure functions for calculating animation progress and scroll
//! offset interpolation from host clock readings.

use std::time::Duration;

/// Elapsed-time ratio of an animation, clamped to [0.0, 1.0]
///
/// # Arguments
/// * `start` - Host clock reading when the animation started
/// * `now` - Current host clock reading
/// * `duration` - Total animation duration
#[inline]
pub fn progress(start: Duration, now: Duration, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_sub(start);
    let ratio = elapsed.as_nanos() as f64 / duration.as_nanos() as f64;
    ratio.clamp(0.0, 1.0)
}

/// Linear interpolation between two values
///
/// # Arguments
/// * `from` - Start value
/// * `to` - End value
/// * `t` - Interpolation factor [0.0, 1.0]
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Interpolated scroll offset, rounded to a whole pixel
#[inline]
pub fn lerp_offset(from: f64, to: f64, t: f64) -> f64 {
    lerp(from, to, t).round()
}
