//! The "In Descendant Of Group Type" profile badge.

pub mod fragment;
pub mod registry;
pub mod render;
pub mod settings;

pub use fragment::{BadgeFragment, MembershipState};
pub use registry::{BadgeRegistry, RegisteredBadge};
pub use render::{COMPONENT_DESCRIPTION, COMPONENT_NAME, InDescendantOfGroupType};
pub use settings::{DEFAULT_BADGE_COLOR, InDescendantSettings};
