//! Scroll-driven style interpolation
//!
//! A [`ScrollBinding`] maps the document scroll offset onto style values for
//! every element matching its selector. For each element the scroll offset is
//! turned into a progress ratio over the binding's `[start, end]` range, and
//! every style rule linearly interpolates between its `from` and `to` values
//! at that ratio.
//!
//! Transform functions (`translateY`, `scale`, ...) and filter functions
//! (`blur`, `grayscale`, ...) are composed into one `transform` and one
//! `filter` value per element, in rule order. Other styles are written
//! directly.

use scrollfun_core::value::format_number;
use scrollfun_core::{classify, BindingConfig, Host, Resolvable, StyleKind};

/// One interpolated style of a binding
#[derive(Debug, Clone)]
pub struct StyleRule<E> {
    /// Style property or transform/filter function name
    pub property: String,
    /// Value at progress 0
    pub from: Resolvable<E>,
    /// Value at progress 1
    pub to: Resolvable<E>,
    /// Suffix appended to the interpolated number
    pub unit: Option<String>,
    kind: StyleKind,
}

impl<E> StyleRule<E> {
    pub fn new(
        property: impl Into<String>,
        from: impl Into<Resolvable<E>>,
        to: impl Into<Resolvable<E>>,
        unit: Option<String>,
    ) -> Self {
        let property = property.into();
        let kind = classify(&property);
        Self {
            property,
            from: from.into(),
            to: to.into(),
            unit,
            kind,
        }
    }

    pub fn kind(&self) -> StyleKind {
        self.kind
    }

    /// Interpolated value with its unit, e.g. `-120px`
    fn formatted(&self, element: &E, index: usize, progress: f64) -> String {
        let from = self.from.resolve_f64(element, index);
        let to = self.to.resolve_f64(element, index);
        let value = interpolate(from, to, progress);
        format!("{}{}", format_number(value), self.unit.as_deref().unwrap_or(""))
    }
}

/// Progress of `scroll` through `[start, end]`
///
/// Unclamped progress extrapolates below 0 and above 1. A zero-width range
/// yields a non-finite result, which is passed through unchanged.
#[inline]
pub fn progress(scroll: f64, start: f64, end: f64, clamp: bool) -> f64 {
    let ratio = (scroll - start) / (end - start);
    if clamp {
        ratio.clamp(0.0, 1.0)
    } else {
        ratio
    }
}

/// Linear interpolation from `from` to `to`
#[inline]
pub fn interpolate(from: f64, to: f64, progress: f64) -> f64 {
    (to - from) * progress + from
}

/// Style writes computed for one element in one pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StylePatch {
    /// Direct property writes, in rule order
    pub direct: Vec<(String, String)>,
    /// Composite transform, `None` when the binding has no transform rules
    pub transform: Option<String>,
    /// Composite filter, `None` when the binding has no filter rules
    pub filter: Option<String>,
}

impl StylePatch {
    /// Write the patch to an element
    ///
    /// Composite properties without tokens are left as they are.
    pub fn apply<H: Host>(&self, host: &mut H, element: &H::Element) {
        for (property, value) in &self.direct {
            host.set_style(element, property, value);
        }
        let composites = [
            (StyleKind::Transform, &self.transform),
            (StyleKind::Filter, &self.filter),
        ];
        for (kind, value) in composites {
            if let (Some(property), Some(value)) = (kind.composite_property(), value) {
                host.set_style(element, property, value);
            }
        }
    }
}

/// Maps scroll position to styles on matched elements
#[derive(Debug, Clone)]
pub struct ScrollBinding<E> {
    selector: String,
    start: Resolvable<E>,
    end: Resolvable<E>,
    clamp_to_range: bool,
    styles: Vec<StyleRule<E>>,
}

impl<E> ScrollBinding<E> {
    /// Binding over `selector` with the default `[0, 1000]` range
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            start: Resolvable::from(0),
            end: Resolvable::from(1000),
            clamp_to_range: false,
            styles: Vec::new(),
        }
    }

    /// Build from file configuration
    pub fn from_config(config: &BindingConfig) -> Self {
        let styles = config
            .styles
            .iter()
            .map(|style| {
                StyleRule::new(
                    style.property.clone(),
                    style.from.clone(),
                    style.to.clone(),
                    style.unit.clone(),
                )
            })
            .collect();

        Self {
            selector: config.selector.clone(),
            start: config.start.clone().into(),
            end: config.end.clone().into(),
            clamp_to_range: config.limit_within,
            styles,
        }
    }

    /// Set the scroll range mapped to progress 0..1
    pub fn range(mut self, start: impl Into<Resolvable<E>>, end: impl Into<Resolvable<E>>) -> Self {
        self.start = start.into();
        self.end = end.into();
        self
    }

    /// Clamp progress to [0, 1] instead of extrapolating
    pub fn clamp_to_range(mut self, clamp: bool) -> Self {
        self.clamp_to_range = clamp;
        self
    }

    /// Add a unitless style rule
    pub fn style(
        self,
        property: impl Into<String>,
        from: impl Into<Resolvable<E>>,
        to: impl Into<Resolvable<E>>,
    ) -> Self {
        self.rule(StyleRule::new(property, from, to, None))
    }

    /// Add a style rule with a unit suffix
    pub fn style_with_unit(
        self,
        property: impl Into<String>,
        from: impl Into<Resolvable<E>>,
        to: impl Into<Resolvable<E>>,
        unit: &str,
    ) -> Self {
        self.rule(StyleRule::new(property, from, to, Some(unit.to_string())))
    }

    /// Add a prepared style rule
    pub fn rule(mut self, rule: StyleRule<E>) -> Self {
        self.styles.push(rule);
        self
    }

    pub fn selector(&self) -> &str {
        &self.selector
    }

    pub fn styles(&self) -> &[StyleRule<E>] {
        &self.styles
    }

    /// Progress of `scroll` for one element
    pub fn progress_for(&self, element: &E, index: usize, scroll: f64) -> f64 {
        let start = self.start.resolve_f64(element, index);
        let end = self.end.resolve_f64(element, index);
        progress(scroll, start, end, self.clamp_to_range)
    }

    /// Compute the style writes for one element at `scroll`
    pub fn evaluate(&self, element: &E, index: usize, scroll: f64) -> StylePatch {
        let progress = self.progress_for(element, index, scroll);
        self.patch_at(element, index, progress)
    }

    fn patch_at(&self, element: &E, index: usize, progress: f64) -> StylePatch {
        let mut patch = StylePatch::default();
        let mut transform = Vec::new();
        let mut filter = Vec::new();

        for rule in &self.styles {
            let value = rule.formatted(element, index, progress);
            match rule.kind {
                StyleKind::Transform => transform.push(format!("{}({})", rule.property, value)),
                StyleKind::Filter => filter.push(format!("{}({})", rule.property, value)),
                StyleKind::Direct => patch.direct.push((rule.property.clone(), value)),
            }
        }

        if !transform.is_empty() {
            patch.transform = Some(transform.join(" "));
        }
        if !filter.is_empty() {
            patch.filter = Some(filter.join(" "));
        }
        patch
    }

    /// Recompute and write styles for every matched element
    pub fn recompute<H>(&self, host: &mut H)
    where
        H: Host<Element = E>,
    {
        let scroll = host.scroll_top();
        let elements = host.query_selector_all(&self.selector);

        tracing::trace!(
            selector = %self.selector,
            scroll,
            matched = elements.len(),
            "Recomputing scroll binding"
        );

        for (index, element) in elements.iter().enumerate() {
            let progress = self.progress_for(element, index, scroll);
            if !progress.is_finite() {
                tracing::warn!(
                    selector = %self.selector,
                    index,
                    progress,
                    "Scroll progress is not finite, check the binding range"
                );
            }
            self.patch_at(element, index, progress).apply(host, element);
        }
    }
}
