//! Configuration values that are either constant or computed per element
//!
//! Every binding option that depends on the element it is applied to (a
//! scroll range bound, a style endpoint) is a [`Resolvable`]. Computed values
//! are re-evaluated on every pass and never cached, so they may track things
//! like the current viewport size.

use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// A concrete configuration value: a number or a string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Number(f64),
    Text(String),
}

impl Scalar {
    /// Numeric reading of the value
    ///
    /// Text is trimmed and parsed; blank text reads as 0 and anything that
    /// does not parse reads as NaN.
    pub fn as_f64(&self) -> f64 {
        match self {
            Scalar::Number(n) => *n,
            Scalar::Text(s) => {
                let s = s.trim();
                if s.is_empty() {
                    0.0
                } else {
                    s.parse().unwrap_or(f64::NAN)
                }
            }
        }
    }
}

impl Default for Scalar {
    fn default() -> Self {
        Scalar::Number(0.0)
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Number(n) => f.write_str(&format_number(*n)),
            Scalar::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for Scalar {
    fn from(n: f64) -> Self {
        Scalar::Number(n)
    }
}

impl From<i32> for Scalar {
    fn from(n: i32) -> Self {
        Scalar::Number(n as f64)
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Text(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::Text(s)
    }
}

/// Format a number the way it is written into a style value
///
/// Integral values have no fractional part, negative zero prints as `0`,
/// and non-finite values print as `NaN`, `Infinity` or `-Infinity`.
/// Magnitudes below 1e-6 or from 1e21 up use exponent notation (`5.55e-17`,
/// `1e+21`), matching how style values are usually stringified.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        let text = if n > 0.0 { "Infinity" } else { "-Infinity" };
        text.to_string()
    } else if n == 0.0 {
        "0".to_string()
    } else if n.abs() < 1e-6 || n.abs() >= 1e21 {
        let text = format!("{:e}", n);
        match text.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => text,
        }
    } else {
        n.to_string()
    }
}

/// A value that is either fixed or computed from `(element, index)`
pub enum Resolvable<E, T = Scalar> {
    Constant(T),
    Computed(Rc<dyn Fn(&E, usize) -> T>),
}

impl<E, T> Resolvable<E, T> {
    /// Wrap a per-element function
    pub fn computed<F>(f: F) -> Self
    where
        F: Fn(&E, usize) -> T + 'static,
    {
        Resolvable::Computed(Rc::new(f))
    }
}

impl<E, T: Clone> Resolvable<E, T> {
    /// Resolve against an element and its index in the match set
    pub fn resolve(&self, element: &E, index: usize) -> T {
        match self {
            Resolvable::Constant(value) => value.clone(),
            Resolvable::Computed(f) => f(element, index),
        }
    }
}

impl<E> Resolvable<E, Scalar> {
    /// Resolve and read the result as a number
    pub fn resolve_f64(&self, element: &E, index: usize) -> f64 {
        self.resolve(element, index).as_f64()
    }
}

impl<E, T: Clone> Clone for Resolvable<E, T> {
    fn clone(&self) -> Self {
        match self {
            Resolvable::Constant(value) => Resolvable::Constant(value.clone()),
            Resolvable::Computed(f) => Resolvable::Computed(Rc::clone(f)),
        }
    }
}

impl<E, T: fmt::Debug> fmt::Debug for Resolvable<E, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resolvable::Constant(value) => f.debug_tuple("Constant").field(value).finish(),
            Resolvable::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

impl<E> From<Scalar> for Resolvable<E> {
    fn from(value: Scalar) -> Self {
        Resolvable::Constant(value)
    }
}

impl<E> From<f64> for Resolvable<E> {
    fn from(n: f64) -> Self {
        Resolvable::Constant(Scalar::Number(n))
    }
}

impl<E> From<i32> for Resolvable<E> {
    fn from(n: i32) -> Self {
        Resolvable::Constant(Scalar::from(n))
    }
}

impl<E> From<&str> for Resolvable<E> {
    fn from(s: &str) -> Self {
        Resolvable::Constant(Scalar::from(s))
    }
}
