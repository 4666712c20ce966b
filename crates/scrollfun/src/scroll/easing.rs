//! L4 Atomic Layer: Pure easing functions for eased scroll animations
//!
//! Maps an elapsed-time ratio in [0, 1] to a progress ratio in [0, 1]. The
//! catalog covers linear plus ease-in, ease-out and ease-in-out variants of
//! the quadratic, cubic, quartic and quintic polynomials.

// Re-export EasingType from core
pub use scrollfun_core::config::EASING_CATALOG;
pub use scrollfun_core::EasingType;

/// Extension trait for EasingType with calculation methods
pub trait EasingTypeExt {
    /// Apply the easing function to a progress value
    ///
    /// # Arguments
    /// * `t` - Progress value in range [0, 1]
    ///
    /// # Returns
    /// Eased value in range [0, 1]
    fn apply(&self, t: f64) -> f64;
}

impl EasingTypeExt for EasingType {
    #[inline]
    fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingType::Linear => t,
            EasingType::EaseInQuad => t * t,
            EasingType::EaseOutQuad => t * (2.0 - t),
            EasingType::EaseInOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
            EasingType::EaseInCubic => t * t * t,
            EasingType::EaseOutCubic => {
                let inv = t - 1.0;
                inv * inv * inv + 1.0
            }
            EasingType::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    (t - 1.0) * (2.0 * t - 2.0) * (2.0 * t - 2.0) + 1.0
                }
            }
            EasingType::EaseInQuart => t * t * t * t,
            EasingType::EaseOutQuart => {
                let inv = t - 1.0;
                1.0 - inv * inv * inv * inv
            }
            EasingType::EaseInOutQuart => {
                if t < 0.5 {
                    8.0 * t * t * t * t
                } else {
                    let inv = t - 1.0;
                    1.0 - 8.0 * inv * inv * inv * inv
                }
            }
            EasingType::EaseInQuint => t * t * t * t * t,
            EasingType::EaseOutQuint => {
                let inv = t - 1.0;
                1.0 + inv * inv * inv * inv * inv
            }
            EasingType::EaseInOutQuint => {
                if t < 0.5 {
                    16.0 * t * t * t * t * t
                } else {
                    let inv = t - 1.0;
                    1.0 + 16.0 * inv * inv * inv * inv * inv
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all() -> impl Iterator<Item = EasingType> {
        EASING_CATALOG.into_iter().map(|(_, easing)| easing)
    }

    #[test]
    fn test_easing_boundaries() {
        for easing in all() {
            assert!((easing.apply(0.0) - 0.0).abs() < 1e-12, "{:?} at t=0", easing);
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-12, "{:?} at t=1", easing);
        }
    }

    #[test]
    fn test_in_out_midpoint() {
        for easing in [
            EasingType::Linear,
            EasingType::EaseInOutQuad,
            EasingType::EaseInOutCubic,
            EasingType::EaseInOutQuart,
            EasingType::EaseInOutQuint,
        ] {
            assert!((easing.apply(0.5) - 0.5).abs() < 1e-12, "{:?} at t=0.5", easing);
        }
    }

    #[test]
    fn test_known_values() {
        assert!((EasingType::EaseInQuad.apply(0.5) - 0.25).abs() < 1e-12);
        assert!((EasingType::EaseOutQuad.apply(0.5) - 0.75).abs() < 1e-12);
        assert!((EasingType::EaseInCubic.apply(0.5) - 0.125).abs() < 1e-12);
        assert!((EasingType::EaseOutCubic.apply(0.5) - 0.875).abs() < 1e-12);
        assert!((EasingType::EaseInOutCubic.apply(0.25) - 0.0625).abs() < 1e-12);
        assert!((EasingType::EaseInOutCubic.apply(0.75) - 0.9375).abs() < 1e-12);
        assert!((EasingType::EaseInQuart.apply(0.5) - 0.0625).abs() < 1e-12);
        assert!((EasingType::EaseOutQuint.apply(0.5) - 0.96875).abs() < 1e-12);
    }

    #[test]
    fn test_in_and_out_are_mirrored() {
        let pairs = [
            (EasingType::EaseInQuad, EasingType::EaseOutQuad),
            (EasingType::EaseInCubic, EasingType::EaseOutCubic),
            (EasingType::EaseInQuart, EasingType::EaseOutQuart),
            (EasingType::EaseInQuint, EasingType::EaseOutQuint),
        ];
        for (ease_in, ease_out) in pairs {
            for i in 0..=10 {
                let t = i as f64 / 10.0;
                let mirrored = 1.0 - ease_in.apply(1.0 - t);
                assert!((ease_out.apply(t) - mirrored).abs() < 1e-9, "{:?} at t={}", ease_out, t);
            }
        }
    }

    #[test]
    fn test_easing_monotonic() {
        for easing in all() {
            let mut prev = 0.0;
            for i in 0..=20 {
                let t = i as f64 / 20.0;
                let v = easing.apply(t);
                assert!(v >= prev, "{:?} not monotonic at t={}", easing, t);
                assert!((0.0..=1.0).contains(&v), "{:?} out of range at t={}", easing, t);
                prev = v;
            }
        }
    }
}
