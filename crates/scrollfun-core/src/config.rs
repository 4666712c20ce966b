use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

use crate::value::Scalar;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScrollFunConfig {
    /// Defaults for eased scroll animations
    #[serde(default)]
    pub animation: AnimationConfig,
    /// Scroll-driven style bindings
    #[serde(default)]
    pub bindings: Vec<BindingConfig>,
    /// Viewport visibility class togglers
    #[serde(default)]
    pub visibility: Vec<VisibilityConfig>,
    /// Scroll threshold class togglers
    #[serde(default)]
    pub sticky: Vec<StickyConfig>,
}

/// Easing curve applied to eased scroll animations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EasingType {
    #[default]
    Linear,
    EaseInQuad,
    EaseOutQuad,
    EaseInOutQuad,
    EaseInCubic,
    EaseOutCubic,
    EaseInOutCubic,
    EaseInQuart,
    EaseOutQuart,
    EaseInOutQuart,
    EaseInQuint,
    EaseOutQuint,
    EaseInOutQuint,
}

/// Every easing curve by name
pub const EASING_CATALOG: [(&str, EasingType); 13] = [
    ("linear", EasingType::Linear),
    ("easeInQuad", EasingType::EaseInQuad),
    ("easeOutQuad", EasingType::EaseOutQuad),
    ("easeInOutQuad", EasingType::EaseInOutQuad),
    ("easeInCubic", EasingType::EaseInCubic),
    ("easeOutCubic", EasingType::EaseOutCubic),
    ("easeInOutCubic", EasingType::EaseInOutCubic),
    ("easeInQuart", EasingType::EaseInQuart),
    ("easeOutQuart", EasingType::EaseOutQuart),
    ("easeInOutQuart", EasingType::EaseInOutQuart),
    ("easeInQuint", EasingType::EaseInQuint),
    ("easeOutQuint", EasingType::EaseOutQuint),
    ("easeInOutQuint", EasingType::EaseInOutQuint),
];

impl EasingType {
    /// Catalog name of this curve
    pub fn name(self) -> &'static str {
        EASING_CATALOG
            .iter()
            .find(|(_, easing)| *easing == self)
            .map(|(name, _)| *name)
            .unwrap_or("linear")
    }
}

impl FromStr for EasingType {
    type Err = crate::Error;

    fn from_str(name: &str) -> crate::Result<Self> {
        EASING_CATALOG
            .iter()
            .find(|(known, _)| *known == name)
            .map(|(_, easing)| *easing)
            .ok_or_else(|| crate::Error::UnknownEasing(name.to_string()))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Scroll animation duration in milliseconds
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,
    /// Easing curve
    #[serde(default)]
    pub easing: EasingType,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_duration_ms(),
            easing: EasingType::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BindingConfig {
    /// Selector for the animated elements
    #[serde(default = "default_selector")]
    pub selector: String,
    /// Scroll offset where progress is 0
    #[serde(default = "default_binding_start")]
    pub start: Scalar,
    /// Scroll offset where progress is 1
    #[serde(default = "default_binding_end")]
    pub end: Scalar,
    /// Clamp progress to [0, 1] instead of extrapolating
    #[serde(default, alias = "limitWithin", alias = "clamp_to_range", alias = "clampToRange")]
    pub limit_within: bool,
    /// Interpolated styles, in composition order
    #[serde(default)]
    pub styles: Vec<StyleConfig>,
}

impl Default for BindingConfig {
    fn default() -> Self {
        Self {
            selector: default_selector(),
            start: default_binding_start(),
            end: default_binding_end(),
            limit_within: false,
            styles: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleConfig {
    /// Style property or transform/filter function name
    pub property: String,
    /// Value at progress 0
    pub from: Scalar,
    /// Value at progress 1
    pub to: Scalar,
    /// Unit appended to the interpolated number (e.g. "px", "deg")
    #[serde(default)]
    pub unit: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisibilityConfig {
    #[serde(default = "default_selector")]
    pub selector: String,
    #[serde(default = "default_active_class", alias = "className")]
    pub class_name: String,
    /// Viewport fraction the element bottom must rise above
    #[serde(default = "default_viewport_threshold")]
    pub start: f64,
    /// Viewport fraction the element top must stay below
    #[serde(default = "default_viewport_threshold")]
    pub end: f64,
}

impl Default for VisibilityConfig {
    fn default() -> Self {
        Self {
            selector: default_selector(),
            class_name: default_active_class(),
            start: default_viewport_threshold(),
            end: default_viewport_threshold(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StickyConfig {
    #[serde(default = "default_selector")]
    pub selector: String,
    #[serde(default = "default_sticky_class", alias = "className")]
    pub class_name: String,
    /// Scroll offset at which the class is added
    #[serde(default = "default_sticky_start")]
    pub start: Scalar,
}

impl Default for StickyConfig {
    fn default() -> Self {
        Self {
            selector: default_selector(),
            class_name: default_sticky_class(),
            start: default_sticky_start(),
        }
    }
}

fn default_duration_ms() -> u64 {
    200
}

fn default_selector() -> String {
    ".element".to_string()
}

fn default_binding_start() -> Scalar {
    Scalar::Number(0.0)
}

fn default_binding_end() -> Scalar {
    Scalar::Number(1000.0)
}

fn default_active_class() -> String {
    "active".to_string()
}

fn default_viewport_threshold() -> f64 {
    0.5
}

fn default_sticky_class() -> String {
    "sticky".to_string()
}

fn default_sticky_start() -> Scalar {
    Scalar::Number(100.0)
}

impl ScrollFunConfig {
    /// Parse a TOML document
    pub fn from_toml_str(content: &str) -> crate::Result<Self> {
        toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Parse a JSON document
    pub fn from_json_str(content: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load configuration from a file
    /// `.json` files are read as JSON, anything else as TOML
    pub fn load(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_str(&content)?,
            _ => Self::from_toml_str(&content)?,
        };

        tracing::debug!(
            path = %path.display(),
            bindings = config.bindings.len(),
            visibility = config.visibility.len(),
            sticky = config.sticky.len(),
            "Loaded scroll configuration"
        );

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ScrollFunConfig::default();
        assert_eq!(config.animation.duration_ms, 200);
        assert_eq!(config.animation.easing, EasingType::Linear);
        assert!(config.bindings.is_empty());

        let binding = BindingConfig::default();
        assert_eq!(binding.selector, ".element");
        assert_eq!(binding.start, Scalar::Number(0.0));
        assert_eq!(binding.end, Scalar::Number(1000.0));
        assert!(!binding.limit_within);

        let visibility = VisibilityConfig::default();
        assert_eq!(visibility.class_name, "active");
        assert_eq!(visibility.start, 0.5);
        assert_eq!(visibility.end, 0.5);

        let sticky = StickyConfig::default();
        assert_eq!(sticky.class_name, "sticky");
        assert_eq!(sticky.start, Scalar::Number(100.0));
    }

    #[test]
    fn test_easing_from_name() {
        assert_eq!("easeInOutCubic".parse::<EasingType>().unwrap(), EasingType::EaseInOutCubic);
        assert_eq!("linear".parse::<EasingType>().unwrap(), EasingType::Linear);
        for (name, easing) in EASING_CATALOG {
            assert_eq!(name.parse::<EasingType>().unwrap(), easing);
            assert_eq!(easing.name(), name);
        }
    }

    #[test]
    fn test_unknown_easing_fails() {
        let err = "bounce".parse::<EasingType>().unwrap_err();
        assert!(matches!(err, crate::Error::UnknownEasing(ref name) if name == "bounce"));
        assert!("EaseInCubic".parse::<EasingType>().is_err());
    }

    #[test]
    fn test_parse_toml() {
        let config = ScrollFunConfig::from_toml_str(
            r#"
            [animation]
            duration_ms = 400
            easing = "easeOutQuart"

            [[bindings]]
            selector = ".hero"
            end = 600
            clamp_to_range = true

            [[bindings.styles]]
            property = "translateY"
            from = 0
            to = -300
            unit = "px"

            [[bindings.styles]]
            property = "opacity"
            from = 1
            to = 0.6

            [[sticky]]
            selector = "header"
            start = "80"
            "#,
        )
        .unwrap();

        assert_eq!(config.animation.duration_ms, 400);
        assert_eq!(config.animation.easing, EasingType::EaseOutQuart);

        let binding = &config.bindings[0];
        assert_eq!(binding.selector, ".hero");
        assert_eq!(binding.start, Scalar::Number(0.0));
        assert_eq!(binding.end, Scalar::Number(600.0));
        assert!(binding.limit_within);
        assert_eq!(binding.styles.len(), 2);
        assert_eq!(binding.styles[0].property, "translateY");
        assert_eq!(binding.styles[0].unit.as_deref(), Some("px"));
        assert_eq!(binding.styles[1].to, Scalar::Number(0.6));
        assert_eq!(binding.styles[1].unit, None);

        assert_eq!(config.sticky[0].class_name, "sticky");
        assert_eq!(config.sticky[0].start, Scalar::Text("80".to_string()));
    }

    #[test]
    fn test_parse_json() {
        let config = ScrollFunConfig::from_json_str(
            r#"{"bindings": [{"selector": ".card", "limitWithin": true,
                "styles": [{"property": "blur", "from": 0, "to": 30, "unit": "px"}]}]}"#,
        )
        .unwrap();
        assert!(config.bindings[0].limit_within);
        assert_eq!(config.bindings[0].end, Scalar::Number(1000.0));
        assert_eq!(config.animation.duration_ms, 200);
    }

    #[test]
    fn test_invalid_easing_in_config() {
        let err = ScrollFunConfig::from_toml_str("[animation]\neasing = \"wobble\"\n").unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = ScrollFunConfig::load(Path::new("/nonexistent/scrollfun.toml")).unwrap_err();
        assert!(matches!(err, crate::Error::Io(_)));
    }
}
