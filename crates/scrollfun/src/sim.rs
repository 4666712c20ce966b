//! In-memory host for headless runs and tests
//!
//! `SimulatedPage` keeps a flat list of elements with fixed geometry, a
//! manually advanced clock and a scroll offset clamped like a browser
//! document. Selector support is deliberately small: `*`, `.class`, `#id`,
//! a tag name, or a comma-separated list of those.

use std::collections::HashMap;
use std::time::Duration;

use scrollfun_core::Host;

/// Handle to an element of a [`SimulatedPage`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(usize);

#[derive(Debug, Clone, Default)]
pub struct SimElement {
    pub tag: String,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub offset_top: f64,
    pub offset_left: f64,
    pub offset_height: f64,
    pub parent: Option<ElementId>,
    styles: HashMap<String, String>,
}

impl SimElement {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn with_class(mut self, class_name: &str) -> Self {
        if !self.has_class(class_name) {
            self.classes.push(class_name.to_string());
        }
        self
    }

    pub fn with_offset_top(mut self, top: f64) -> Self {
        self.offset_top = top;
        self
    }

    pub fn with_offset_left(mut self, left: f64) -> Self {
        self.offset_left = left;
        self
    }

    pub fn with_height(mut self, height: f64) -> Self {
        self.offset_height = height;
        self
    }

    pub fn with_parent(mut self, parent: ElementId) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn has_class(&self, class_name: &str) -> bool {
        self.classes.iter().any(|c| c == class_name)
    }

    /// Last value written to a style property
    pub fn style(&self, property: &str) -> Option<&str> {
        self.styles.get(property).map(String::as_str)
    }

    fn matches(&self, selector: &str) -> bool {
        if selector == "*" {
            true
        } else if let Some(class_name) = selector.strip_prefix('.') {
            !class_name.is_empty() && self.has_class(class_name)
        } else if let Some(id) = selector.strip_prefix('#') {
            !id.is_empty() && self.id.as_deref() == Some(id)
        } else {
            is_tag_name(selector) && self.tag.eq_ignore_ascii_case(selector)
        }
    }
}

fn is_tag_name(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

/// A simulated document
#[derive(Debug, Clone)]
pub struct SimulatedPage {
    elements: Vec<SimElement>,
    scroll_top: f64,
    document_height: f64,
    viewport_height: f64,
    clock: Duration,
    frames_supported: bool,
    max_scroll_step: Option<f64>,
    style_writes: usize,
}

impl SimulatedPage {
    pub fn new(document_height: f64, viewport_height: f64) -> Self {
        Self {
            elements: Vec::new(),
            scroll_top: 0.0,
            document_height,
            viewport_height,
            clock: Duration::ZERO,
            frames_supported: true,
            max_scroll_step: None,
            style_writes: 0,
        }
    }

    pub fn add_element(&mut self, element: SimElement) -> ElementId {
        self.elements.push(element);
        ElementId(self.elements.len() - 1)
    }

    pub fn element(&self, id: ElementId) -> &SimElement {
        &self.elements[id.0]
    }

    /// Last value written to `property` on `id`
    pub fn style(&self, id: ElementId, property: &str) -> Option<&str> {
        self.element(id).style(property)
    }

    pub fn has_class(&self, id: ElementId, class_name: &str) -> bool {
        self.element(id).has_class(class_name)
    }

    /// Total number of style writes so far
    pub fn style_writes(&self) -> usize {
        self.style_writes
    }

    /// Largest reachable scroll offset
    pub fn max_scroll(&self) -> f64 {
        (self.document_height - self.viewport_height).max(0.0)
    }

    /// Move the clock forward
    pub fn advance(&mut self, elapsed: Duration) {
        self.clock += elapsed;
    }

    pub fn set_frames_supported(&mut self, supported: bool) {
        self.frames_supported = supported;
    }

    /// Limit how far a single scroll write can move, `None` for instant writes
    pub fn set_max_scroll_step(&mut self, step: Option<f64>) {
        self.max_scroll_step = step;
    }

    /// Change the viewport height, re-clamping the scroll offset
    pub fn resize(&mut self, viewport_height: f64) {
        self.viewport_height = viewport_height;
        self.scroll_top = self.scroll_top.min(self.max_scroll());
    }
}

impl Host for SimulatedPage {
    type Element = ElementId;

    fn query_selector_all(&self, selector: &str) -> Vec<ElementId> {
        let parts: Vec<&str> = selector.split(',').map(str::trim).collect();
        if parts.iter().any(|part| part.is_empty()) {
            return Vec::new();
        }

        self.elements
            .iter()
            .enumerate()
            .filter(|(_, element)| parts.iter().any(|part| element.matches(part)))
            .map(|(index, _)| ElementId(index))
            .collect()
    }

    fn scroll_top(&self) -> f64 {
        self.scroll_top
    }

    fn scroll_to(&mut self, offset: f64) {
        if offset.is_nan() {
            return;
        }
        let requested = offset.clamp(0.0, self.max_scroll());
        self.scroll_top = match self.max_scroll_step {
            Some(step) => {
                let delta = (requested - self.scroll_top).clamp(-step, step);
                self.scroll_top + delta
            }
            None => requested,
        };
    }

    fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    fn document_height(&self) -> f64 {
        self.document_height
    }

    fn offset_top(&self, element: &ElementId) -> f64 {
        self.element(*element).offset_top
    }

    fn offset_left(&self, element: &ElementId) -> f64 {
        self.element(*element).offset_left
    }

    fn offset_height(&self, element: &ElementId) -> f64 {
        self.element(*element).offset_height
    }

    fn offset_parent(&self, element: &ElementId) -> Option<ElementId> {
        self.element(*element).parent
    }

    fn set_style(&mut self, element: &ElementId, property: &str, value: &str) {
        self.style_writes += 1;
        self.elements[element.0]
            .styles
            .insert(property.to_string(), value.to_string());
    }

    fn set_class(&mut self, element: &ElementId, class_name: &str, enabled: bool) {
        let element = &mut self.elements[element.0];
        if enabled {
            if !element.has_class(class_name) {
                element.classes.push(class_name.to_string());
            }
        } else {
            element.classes.retain(|c| c != class_name);
        }
    }

    fn supports_animation_frames(&self) -> bool {
        self.frames_supported
    }

    fn now(&self) -> Duration {
        self.clock
    }
}
