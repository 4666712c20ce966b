pub mod binding;
pub mod geometry;
pub mod scroll;
pub mod sim;
pub mod stage;
pub mod toggle;

pub use binding::{ScrollBinding, StylePatch, StyleRule};
pub use geometry::{document_offset, Offset};
pub use scroll::{ScrollAnimator, ScrollDestination, ScrollOutcome};
pub use stage::{ListenerId, ScrollListener, Stage};
pub use toggle::{StickyToggle, VisibilityToggle};

pub use scrollfun_core::{Error, Host, HostEvent, Resolvable, Result, Scalar, ScrollFunConfig};
