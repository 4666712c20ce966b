//! L3 Molecular Layer: Eased scroll animation controller
//!
//! Combines easing functions and timing utilities to move the host's scroll
//! offset toward a destination, one host animation frame at a time.

use std::fmt;
use std::time::Duration;

use scrollfun_core::{Host, Result};

use super::config::{AnimationConfig, AnimationConfigExt};
use super::easing::{EasingType, EasingTypeExt};
use super::timing::{lerp_offset, progress};

/// Callback invoked once when a scroll animation arrives
pub type CompletionCallback = Box<dyn FnOnce()>;

/// Where an eased scroll should go
#[derive(Debug, Clone)]
pub enum ScrollDestination<E> {
    /// Literal document offset
    Offset(f64),
    /// Element whose top offset is the destination
    Element(E),
}

impl<E> From<f64> for ScrollDestination<E> {
    fn from(offset: f64) -> Self {
        ScrollDestination::Offset(offset)
    }
}

impl<E> From<i32> for ScrollDestination<E> {
    fn from(offset: i32) -> Self {
        ScrollDestination::Offset(offset as f64)
    }
}

/// Identifier of one in-flight scroll animation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScrollTaskId(u64);

/// How a scroll request was carried out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollOutcome {
    /// An animation task was spawned and runs on subsequent frames
    Started(ScrollTaskId),
    /// The host has no frame scheduling; the offset was set immediately
    Jumped,
}

/// One in-flight eased scroll
struct EasedScrollTask {
    id: ScrollTaskId,
    /// Scroll offset when the animation started
    from: f64,
    /// Clamped, rounded destination
    to: f64,
    /// Host clock reading at start
    start: Duration,
    duration: Duration,
    easing: EasingType,
    on_complete: Option<CompletionCallback>,
}

/// Eased scroll animation controller
///
/// Every request spawns an independent task. Tasks are not coordinated: when
/// two are running they both write the scroll offset each frame, in the order
/// they were started, so the most recent one wins the frame. Call `tick()`
/// once per host animation frame.
pub struct ScrollAnimator {
    tasks: Vec<EasedScrollTask>,
    config: AnimationConfig,
    next_id: u64,
}

impl Default for ScrollAnimator {
    fn default() -> Self {
        Self::new(AnimationConfig::default())
    }
}

impl fmt::Debug for ScrollAnimator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollAnimator")
            .field("running", &self.tasks.len())
            .field("config", &self.config)
            .finish()
    }
}

/// Destination clamped so the animation never scrolls past the document end
///
/// When the destination is within one viewport height of the document end,
/// the target becomes the maximum reachable offset. The result is rounded to
/// a whole pixel, never past the maximum reachable offset and never negative.
pub fn target_offset<H: Host>(host: &H, destination: f64) -> f64 {
    let document_height = host.document_height();
    let viewport_height = host.viewport_height();
    let max_reachable = (document_height - viewport_height).max(0.0).floor();

    let target = if document_height - destination < viewport_height {
        document_height - viewport_height
    } else {
        destination
    };

    target.round().min(max_reachable).max(0.0)
}

impl ScrollAnimator {
    /// Create a new scroll animator with configuration
    pub fn new(config: AnimationConfig) -> Self {
        Self {
            tasks: Vec::new(),
            config,
            next_id: 0,
        }
    }

    /// Create with default configuration
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Get current configuration
    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    /// Check if any animation is currently running
    #[inline]
    pub fn is_animating(&self) -> bool {
        !self.tasks.is_empty()
    }

    /// Check if a specific animation is still running
    pub fn is_running(&self, id: ScrollTaskId) -> bool {
        self.tasks.iter().any(|task| task.id == id)
    }

    /// Number of running animations
    pub fn running(&self) -> usize {
        self.tasks.len()
    }

    /// Animate to `destination` over `duration_ms` using the named easing
    ///
    /// Fails with [`scrollfun_core::Error::UnknownEasing`] before touching the
    /// host if `easing` is not in the catalog.
    pub fn animate_scroll_to<H: Host>(
        &mut self,
        host: &mut H,
        destination: impl Into<ScrollDestination<H::Element>>,
        duration_ms: u64,
        easing: &str,
        on_complete: Option<CompletionCallback>,
    ) -> Result<ScrollOutcome> {
        let easing: EasingType = easing.parse()?;
        Ok(self.start(
            host,
            destination,
            Duration::from_millis(duration_ms),
            easing,
            on_complete,
        ))
    }

    /// Animate to `destination` with the configured duration and easing
    pub fn scroll_to<H: Host>(
        &mut self,
        host: &mut H,
        destination: impl Into<ScrollDestination<H::Element>>,
    ) -> ScrollOutcome {
        let duration = self.config.animation_duration();
        let easing = self.config.easing;
        self.start(host, destination, duration, easing, None)
    }

    /// Spawn an animation task
    ///
    /// If the host cannot schedule frames the offset is set immediately and
    /// `on_complete` runs before this returns.
    pub fn start<H: Host>(
        &mut self,
        host: &mut H,
        destination: impl Into<ScrollDestination<H::Element>>,
        duration: Duration,
        easing: EasingType,
        on_complete: Option<CompletionCallback>,
    ) -> ScrollOutcome {
        let destination = match destination.into() {
            ScrollDestination::Offset(offset) => offset,
            ScrollDestination::Element(element) => host.offset_top(&element),
        };
        let to = target_offset(host, destination);

        if !host.supports_animation_frames() {
            tracing::debug!(target = to, "No frame scheduling, jumping to scroll target");
            host.scroll_to(to);
            if let Some(callback) = on_complete {
                callback();
            }
            return ScrollOutcome::Jumped;
        }

        let id = ScrollTaskId(self.next_id);
        self.next_id += 1;

        let from = host.scroll_top();
        tracing::debug!(
            task = id.0,
            from,
            to,
            duration_ms = duration.as_millis() as u64,
            easing = easing.name(),
            "Starting eased scroll"
        );

        self.tasks.push(EasedScrollTask {
            id,
            from,
            to,
            start: host.now(),
            duration,
            easing,
            on_complete,
        });

        ScrollOutcome::Started(id)
    }

    /// Advance every running animation by one frame
    ///
    /// Each task writes its eased offset, then checks whether the host now
    /// reports exactly the target offset. Arrived tasks fire their completion
    /// callback and are dropped; the rest stay running even past their
    /// nominal duration. Returns the number of tasks that arrived.
    pub fn tick<H: Host>(&mut self, host: &mut H) -> usize {
        let now = host.now();
        let mut arrived = 0;

        self.tasks.retain_mut(|task| {
            let t = progress(task.start, now, task.duration);
            let eased = task.easing.apply(t);
            let offset = lerp_offset(task.from, task.to, eased);
            host.scroll_to(offset);

            tracing::trace!(task = task.id.0, t, offset, "Eased scroll frame");

            if host.scroll_top() != task.to {
                return true;
            }

            tracing::debug!(task = task.id.0, target = task.to, "Eased scroll arrived");
            arrived += 1;
            if let Some(callback) = task.on_complete.take() {
                callback();
            }
            false
        });

        arrived
    }
}
