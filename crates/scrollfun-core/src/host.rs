use std::time::Duration;

/// The page environment the scroll engine runs against
///
/// The host owns layout and rendering. It hands out element handles, reports
/// already-computed geometry and scroll position, accepts style and class
/// writes, and provides a monotonic clock and (optionally) per-frame
/// callbacks. Everything is single-threaded.
pub trait Host {
    /// Handle to a matched element
    type Element: Clone;

    /// Elements matching `selector`, in document order
    ///
    /// A selector the host does not understand matches nothing.
    fn query_selector_all(&self, selector: &str) -> Vec<Self::Element>;

    /// Current vertical scroll offset of the document
    fn scroll_top(&self) -> f64;

    /// Request a vertical scroll offset; the host may clamp it
    fn scroll_to(&mut self, offset: f64);

    /// Height of the visible viewport
    fn viewport_height(&self) -> f64;

    /// Full scrollable height of the document
    fn document_height(&self) -> f64;

    /// Top offset of an element relative to its positioning parent
    fn offset_top(&self, element: &Self::Element) -> f64;

    /// Left offset of an element relative to its positioning parent
    fn offset_left(&self, element: &Self::Element) -> f64;

    /// Rendered height of an element
    fn offset_height(&self, element: &Self::Element) -> f64;

    /// Nearest positioned ancestor, `None` at the document root
    fn offset_parent(&self, element: &Self::Element) -> Option<Self::Element>;

    /// Write a named style property
    fn set_style(&mut self, element: &Self::Element, property: &str, value: &str);

    /// Add (`enabled`) or remove a class on an element
    fn set_class(&mut self, element: &Self::Element, class_name: &str, enabled: bool);

    /// Whether the host can run per-frame callbacks
    fn supports_animation_frames(&self) -> bool;

    /// Monotonic time since the host's clock origin
    fn now(&self) -> Duration;
}

/// Notifications the host delivers to registered listeners
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    /// The document scroll offset changed
    Scroll,
    /// The viewport was resized
    Resize,
}
