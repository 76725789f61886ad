#[derive(Clone, Debug, sqlx::FromRow)]
pub struct GroupTypeRecord {
    pub id: i64,
    pub guid: String,
    pub name: String,
    pub icon_css_class: Option<String>,
}

/// Status of a person's membership in a group.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GroupMemberStatus {
    Inactive,
    Active,
    Pending,
}

impl GroupMemberStatus {
    /// Value stored in `group_members.status`.
    pub fn as_str(&self) -> &'static str {
        match self {
            GroupMemberStatus::Inactive => "inactive",
            GroupMemberStatus::Active => "active",
            GroupMemberStatus::Pending => "pending",
        }
    }
}

/// The membership chosen for a person: the one with the lowest role order.
#[derive(Clone, Debug, PartialEq, Eq, sqlx::FromRow)]
pub struct MembershipMatch {
    pub member_id: i64,
    pub group_id: i64,
    pub group_role_id: i64,
    pub role_order: i64,
}
