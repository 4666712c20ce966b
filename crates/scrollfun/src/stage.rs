//! Listener registry and frame driver
//!
//! A [`Stage`] owns the host together with everything that reacts to it:
//! scroll bindings and class togglers registered as listeners, and the eased
//! scroll animator. The embedding host forwards its scroll and resize
//! notifications to [`Stage::dispatch`] and calls [`Stage::frame`] once per
//! animation frame.

use scrollfun_core::{Host, HostEvent, Result, ScrollFunConfig};

use crate::binding::ScrollBinding;
use crate::scroll::{AnimationConfig, CompletionCallback, ScrollAnimator, ScrollDestination, ScrollOutcome};
use crate::toggle::{StickyToggle, VisibilityToggle};

/// Something that re-derives element state from the current scroll position
pub trait ScrollListener<H: Host> {
    fn update(&mut self, host: &mut H);
}

impl<H: Host> ScrollListener<H> for ScrollBinding<H::Element> {
    fn update(&mut self, host: &mut H) {
        self.recompute(host);
    }
}

impl<H: Host> ScrollListener<H> for VisibilityToggle {
    fn update(&mut self, host: &mut H) {
        VisibilityToggle::update(self, host);
    }
}

impl<H: Host> ScrollListener<H> for StickyToggle<H::Element> {
    fn update(&mut self, host: &mut H) {
        StickyToggle::update(self, host);
    }
}

/// Registration handle returned by [`Stage::listen`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

pub struct Stage<H: Host> {
    host: H,
    listeners: Vec<(ListenerId, Box<dyn ScrollListener<H>>)>,
    animator: ScrollAnimator,
    next_id: u64,
}

impl<H> Stage<H>
where
    H: Host + 'static,
    H::Element: 'static,
{
    pub fn new(host: H, config: AnimationConfig) -> Self {
        Self {
            host,
            listeners: Vec::new(),
            animator: ScrollAnimator::new(config),
            next_id: 0,
        }
    }

    /// Build a stage with every binding and toggler from `config` registered
    pub fn from_config(host: H, config: &ScrollFunConfig) -> Self {
        let mut stage = Self::new(host, config.animation.clone());

        for binding in &config.bindings {
            stage.listen(ScrollBinding::from_config(binding));
        }
        for visibility in &config.visibility {
            stage.listen(VisibilityToggle::from_config(visibility));
        }
        for sticky in &config.sticky {
            stage.listen(StickyToggle::from_config(sticky));
        }

        stage
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    pub fn animator(&self) -> &ScrollAnimator {
        &self.animator
    }

    /// Number of registered listeners
    pub fn listeners(&self) -> usize {
        self.listeners.len()
    }

    /// Register a listener and run its initial update
    pub fn listen<L>(&mut self, mut listener: L) -> ListenerId
    where
        L: ScrollListener<H> + 'static,
    {
        listener.update(&mut self.host);

        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));

        tracing::debug!(listener = id.0, total = self.listeners.len(), "Listener attached");
        id
    }

    /// Remove a listener; returns false if it was already gone
    ///
    /// Styles and classes it wrote stay as they are.
    pub fn dispose(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        let removed = self.listeners.len() != before;

        if removed {
            tracing::debug!(listener = id.0, total = self.listeners.len(), "Listener disposed");
        }
        removed
    }

    /// Deliver a host notification to every listener, in registration order
    pub fn dispatch(&mut self, event: HostEvent) {
        tracing::trace!(?event, listeners = self.listeners.len(), "Dispatching host event");
        for (_, listener) in &mut self.listeners {
            listener.update(&mut self.host);
        }
    }

    /// Start an eased scroll, see [`ScrollAnimator::animate_scroll_to`]
    pub fn animate_scroll_to(
        &mut self,
        destination: impl Into<ScrollDestination<H::Element>>,
        duration_ms: u64,
        easing: &str,
        on_complete: Option<CompletionCallback>,
    ) -> Result<ScrollOutcome> {
        let before = self.host.scroll_top();
        let outcome = self.animator.animate_scroll_to(
            &mut self.host,
            destination,
            duration_ms,
            easing,
            on_complete,
        )?;
        self.notify_scrolled(before);
        Ok(outcome)
    }

    /// Start an eased scroll with the configured duration and easing
    pub fn scroll_to(&mut self, destination: impl Into<ScrollDestination<H::Element>>) -> ScrollOutcome {
        let before = self.host.scroll_top();
        let outcome = self.animator.scroll_to(&mut self.host, destination);
        self.notify_scrolled(before);
        outcome
    }

    /// Run one host animation frame
    ///
    /// Advances every running scroll animation and, if the offset moved,
    /// dispatches a scroll event. Returns the number of animations that
    /// arrived on this frame.
    pub fn frame(&mut self) -> usize {
        if !self.animator.is_animating() {
            return 0;
        }

        let before = self.host.scroll_top();
        let arrived = self.animator.tick(&mut self.host);
        self.notify_scrolled(before);
        arrived
    }

    fn notify_scrolled(&mut self, before: f64) {
        if self.host.scroll_top() != before {
            self.dispatch(HostEvent::Scroll);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{ElementId, SimElement, SimulatedPage};
    use std::cell::Cell;
    use std::rc::Rc;
    use std::time::Duration;

    fn page() -> (SimulatedPage, ElementId, ElementId) {
        let mut page = SimulatedPage::new(4000.0, 1000.0);
        let hero = page.add_element(SimElement::new("div").with_class("hero").with_height(600.0));
        let header = page.add_element(SimElement::new("header"));
        (page, hero, header)
    }

    fn run_frames(stage: &mut Stage<SimulatedPage>) {
        for _ in 0..200 {
            if !stage.animator().is_animating() {
                break;
            }
            stage.host_mut().advance(Duration::from_millis(16));
            stage.frame();
        }
    }

    #[test]
    fn test_listen_runs_initial_update() {
        let (page, hero, _) = page();
        let mut stage = Stage::new(page, AnimationConfig::default());

        stage.listen(ScrollBinding::new(".hero").range(0, 100).style("opacity", 1, 0));
        assert_eq!(stage.host().style(hero, "opacity"), Some("1"));
        assert_eq!(stage.listeners(), 1);
    }

    #[test]
    fn test_dispatch_recomputes_on_scroll_and_resize() {
        let (page, hero, _) = page();
        let mut stage = Stage::new(page, AnimationConfig::default());
        stage.listen(
            ScrollBinding::new(".hero")
                .range(0, scrollfun_core::Resolvable::computed(|_: &ElementId, _| {
                    scrollfun_core::Scalar::from(200.0)
                }))
                .style("opacity", 1, 0),
        );

        stage.host_mut().scroll_to(50.0);
        stage.dispatch(HostEvent::Scroll);
        assert_eq!(stage.host().style(hero, "opacity"), Some("0.75"));

        stage.host_mut().scroll_to(100.0);
        stage.dispatch(HostEvent::Resize);
        assert_eq!(stage.host().style(hero, "opacity"), Some("0.5"));
    }

    #[test]
    fn test_dispose_stops_updates() {
        let (page, hero, _) = page();
        let mut stage = Stage::new(page, AnimationConfig::default());
        let id = stage.listen(ScrollBinding::new(".hero").range(0, 100).style("opacity", 1, 0));

        assert!(stage.dispose(id));
        assert!(!stage.dispose(id));
        assert_eq!(stage.listeners(), 0);

        stage.host_mut().scroll_to(50.0);
        stage.dispatch(HostEvent::Scroll);
        assert_eq!(stage.host().style(hero, "opacity"), Some("1"));
    }

    #[test]
    fn test_animation_frames_drive_listeners() {
        let (page, hero, header) = page();
        let mut stage = Stage::new(page, AnimationConfig::default());
        stage.listen(
            ScrollBinding::new(".hero")
                .range(0, 1000)
                .clamp_to_range(true)
                .style_with_unit("translateY", 0, -500, "px"),
        );
        stage.listen(StickyToggle::new("header", "sticky", 100));

        let done = Rc::new(Cell::new(0));
        let counter = Rc::clone(&done);
        let outcome = stage
            .animate_scroll_to(500, 200, "linear", Some(Box::new(move || counter.set(counter.get() + 1))))
            .unwrap();
        assert!(matches!(outcome, ScrollOutcome::Started(_)));
        assert!(!stage.host().has_class(header, "sticky"));

        run_frames(&mut stage);

        assert_eq!(stage.host().scroll_top(), 500.0);
        assert_eq!(done.get(), 1);
        assert_eq!(stage.host().style(hero, "transform"), Some("translateY(-250px)"));
        assert!(stage.host().has_class(header, "sticky"));
        assert_eq!(stage.frame(), 0);
    }

    #[test]
    fn test_jump_dispatches_scroll() {
        let (mut page, hero, _) = page();
        page.set_frames_supported(false);
        let mut stage = Stage::new(page, AnimationConfig::default());
        stage.listen(ScrollBinding::new(".hero").range(0, 1000).style("opacity", 1, 0));

        let outcome = stage.scroll_to(4000);
        assert_eq!(outcome, ScrollOutcome::Jumped);
        assert_eq!(stage.host().scroll_top(), 3000.0);
        assert_eq!(stage.host().style(hero, "opacity"), Some("-2"));
    }

    #[test]
    fn test_unknown_easing_leaves_stage_untouched() {
        let (page, ..) = page();
        let mut stage = Stage::new(page, AnimationConfig::default());
        assert!(stage.animate_scroll_to(300, 100, "spring", None).is_err());
        assert!(!stage.animator().is_animating());
        assert_eq!(stage.host().scroll_top(), 0.0);
    }

    #[test]
    fn test_from_config() {
        let (page, hero, header) = page();
        let config = ScrollFunConfig::from_toml_str(
            r#"
            [animation]
            duration_ms = 100
            easing = "easeInOutQuad"

            [[bindings]]
            selector = ".hero"
            end = 600
            limit_within = true

            [[bindings.styles]]
            property = "scale"
            from = 1
            to = 1.5

            [[bindings.styles]]
            property = "brightness"
            from = 1
            to = 10

            [[sticky]]
            selector = "header"
            start = 300
            "#,
        )
        .unwrap();

        let mut stage = Stage::from_config(page, &config);
        assert_eq!(stage.listeners(), 2);
        assert_eq!(stage.host().style(hero, "transform"), Some("scale(1)"));
        assert_eq!(stage.host().style(hero, "filter"), Some("brightness(1)"));

        stage.scroll_to(300);
        run_frames(&mut stage);

        assert_eq!(stage.host().scroll_top(), 300.0);
        assert_eq!(stage.host().style(hero, "transform"), Some("scale(1.25)"));
        assert_eq!(stage.host().style(hero, "filter"), Some("brightness(5.5)"));
        assert!(stage.host().has_class(header, "sticky"));
    }
}
