pub mod config;
pub mod error;
pub mod host;
pub mod style;
pub mod value;

pub use config::{
    AnimationConfig, BindingConfig, EasingType, ScrollFunConfig, StickyConfig, StyleConfig,
    VisibilityConfig,
};
pub use error::{Error, Result};
pub use host::{Host, HostEvent};
pub use style::{classify, StyleKind};
pub use value::{Resolvable, Scalar};
