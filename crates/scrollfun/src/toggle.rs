//! Class togglers driven by scroll position
//!
//! - [`VisibilityToggle`] marks elements whose box sits across two viewport
//!   thresholds.
//! - [`StickyToggle`] marks elements once the document has scrolled past an
//!   offset.

use scrollfun_core::{Host, Resolvable, StickyConfig, VisibilityConfig};

use crate::geometry::document_offset;

/// Adds a class while an element sits across the viewport thresholds
///
/// With `top` the element's top edge and `bottom` its distance above the
/// viewport bottom, both as fractions of the viewport height, the class is
/// present when `bottom > start && top > end`.
#[derive(Debug, Clone)]
pub struct VisibilityToggle {
    selector: String,
    class_name: String,
    start: f64,
    end: f64,
}

impl VisibilityToggle {
    pub fn new(selector: impl Into<String>, class_name: impl Into<String>) -> Self {
        let defaults = VisibilityConfig::default();
        Self {
            selector: selector.into(),
            class_name: class_name.into(),
            start: defaults.start,
            end: defaults.end,
        }
    }

    pub fn from_config(config: &VisibilityConfig) -> Self {
        Self {
            selector: config.selector.clone(),
            class_name: config.class_name.clone(),
            start: config.start,
            end: config.end,
        }
    }

    pub fn thresholds(mut self, start: f64, end: f64) -> Self {
        self.start = start;
        self.end = end;
        self
    }

    pub fn update<H: Host>(&self, host: &mut H) {
        let scroll = host.scroll_top();
        let viewport_height = host.viewport_height();

        for element in host.query_selector_all(&self.selector) {
            let offset_top = document_offset(host, &element).top;
            let top = (offset_top - scroll) / viewport_height;
            let bottom = 1.0 - (offset_top + host.offset_height(&element) - scroll) / viewport_height;
            let visible = bottom > self.start && top > self.end;
            host.set_class(&element, &self.class_name, visible);
        }
    }
}

/// Adds a class once the scroll offset reaches `start`
#[derive(Debug, Clone)]
pub struct StickyToggle<E> {
    selector: String,
    class_name: String,
    start: Resolvable<E>,
}

impl<E> StickyToggle<E> {
    pub fn new(selector: impl Into<String>, class_name: impl Into<String>, start: impl Into<Resolvable<E>>) -> Self {
        Self {
            selector: selector.into(),
            class_name: class_name.into(),
            start: start.into(),
        }
    }

    pub fn from_config(config: &StickyConfig) -> Self {
        Self::new(config.selector.clone(), config.class_name.clone(), config.start.clone())
    }

    pub fn update<H>(&self, host: &mut H)
    where
        H: Host<Element = E>,
    {
        let scroll = host.scroll_top();
        for (index, element) in host.query_selector_all(&self.selector).iter().enumerate() {
            let stuck = scroll >= self.start.resolve_f64(element, index);
            host.set_class(element, &self.class_name, stuck);
        }
    }
}
