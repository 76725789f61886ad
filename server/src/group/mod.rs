pub mod db;
pub mod hierarchy;
pub mod models;
pub mod store;

pub use hierarchy::{TraversalLimits, expand_descendants};
pub use models::{GroupMemberStatus, GroupTypeRecord, MembershipMatch};
pub use store::MembershipStore;
