//! L4 Atomic Layer: Configuration types for eased scroll animations
//!
//! Re-exports configuration from scrollfun-core and provides additional utilities.

use std::time::Duration;

// Re-export config types from core
pub use scrollfun_core::{AnimationConfig, EasingType};

/// Extension trait for AnimationConfig with utility methods
pub trait AnimationConfigExt {
    /// Get animation duration as Duration
    fn animation_duration(&self) -> Duration;
}

impl AnimationConfigExt for AnimationConfig {
    #[inline]
    fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AnimationConfig::default();
        assert_eq!(config.duration_ms, 200);
        assert_eq!(config.easing, EasingType::Linear);
    }

    #[test]
    fn test_animation_duration() {
        let config = AnimationConfig {
            duration_ms: 350,
            ..Default::default()
        };
        assert_eq!(config.animation_duration(), Duration::from_millis(350));
    }
}
