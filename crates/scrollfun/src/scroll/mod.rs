//! Eased scroll animation for scrollfun
//!
//! Moves the host's scroll offset toward a destination over a fixed duration,
//! shaped by a named easing curve, advancing once per host animation frame.
//!
//! # Architecture
//!
//! ## L4 Atomic Layer
//! - `easing` - Pure easing functions (quad, cubic, quart, quint in/out/in-out)
//! - `timing` - Time calculation utilities (progress, interpolation)
//! - `config` - Configuration types and defaults (re-exported from scrollfun-core)
//!
//! ## L3 Molecular Layer
//! - `animation` - Animation controller combining atoms
//!
//! # Usage
//!
//! ```ignore
//! use scrollfun::scroll::ScrollAnimator;
//!
//! let mut animator = ScrollAnimator::with_defaults();
//!
//! // Start a scroll animation (fails on an unknown easing name)
//! animator.animate_scroll_to(&mut host, 500, 200, "easeInOutCubic", None)?;
//!
//! // On every host animation frame
//! animator.tick(&mut host);
//! ```

// L4 Atomic Layer
pub mod config;
pub mod easing;
pub mod timing;

// L3 Molecular Layer
pub mod animation;

// Re-exports for convenient access
pub use animation::{
    target_offset, CompletionCallback, ScrollAnimator, ScrollDestination, ScrollOutcome,
    ScrollTaskId,
};
pub use config::{AnimationConfig, AnimationConfigExt};
pub use easing::{EasingType, EasingTypeExt};
