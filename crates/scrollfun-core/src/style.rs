//! Style property classification
//!
//! A style name is either a transform function, a filter function, or a plain
//! style property. Transform and filter functions are composed into a single
//! `transform` / `filter` value per element; everything else is written as-is.

/// Transform function names composed into the `transform` property
pub const TRANSFORM_FUNCTIONS: [&str; 14] = [
    "perspective",
    "rotate",
    "rotateX",
    "rotateY",
    "rotateZ",
    "translateX",
    "translateY",
    "translateZ",
    "scale",
    "scaleX",
    "scaleY",
    "scaleZ",
    "skewX",
    "skewY",
];

/// Filter function names composed into the `filter` property
pub const FILTER_FUNCTIONS: [&str; 8] = [
    "blur",
    "brightness",
    "contrast",
    "grayscale",
    "hue-rotate",
    "invert",
    "saturate",
    "sepia",
];

/// How an interpolated style value is written to an element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleKind {
    /// Token in the composite `transform` value
    Transform,
    /// Token in the composite `filter` value
    Filter,
    /// Plain style property write
    Direct,
}

impl StyleKind {
    /// Composite property name, `None` for direct writes
    pub fn composite_property(self) -> Option<&'static str> {
        match self {
            StyleKind::Transform => Some("transform"),
            StyleKind::Filter => Some("filter"),
            StyleKind::Direct => None,
        }
    }
}

/// Classify a style name. Matching is exact and case-sensitive.
pub fn classify(name: &str) -> StyleKind {
    if TRANSFORM_FUNCTIONS.contains(&name) {
        StyleKind::Transform
    } else if FILTER_FUNCTIONS.contains(&name) {
        StyleKind::Filter
    } else {
        StyleKind::Direct
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_names() {
        for name in TRANSFORM_FUNCTIONS {
            assert_eq!(classify(name), StyleKind::Transform, "{}", name);
        }
    }

    #[test]
    fn test_filter_names() {
        for name in FILTER_FUNCTIONS {
            assert_eq!(classify(name), StyleKind::Filter, "{}", name);
        }
    }

    #[test]
    fn test_everything_else_is_direct() {
        for name in ["opacity", "top", "backgroundColor", "translate", "hueRotate", "Scale", ""] {
            assert_eq!(classify(name), StyleKind::Direct, "{}", name);
        }
    }

    #[test]
    fn test_composite_property() {
        assert_eq!(StyleKind::Transform.composite_property(), Some("transform"));
        assert_eq!(StyleKind::Filter.composite_property(), Some("filter"));
        assert_eq!(StyleKind::Direct.composite_property(), None);
    }
}
