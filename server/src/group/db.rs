use super::models::{GroupMemberStatus, GroupTypeRecord, MembershipMatch};
use sqlx::SqlitePool;
use sqlx::types::Json;
use uuid::Uuid;

pub async fn fetch_group_type_by_guid(
    pool: &SqlitePool,
    guid: &Uuid,
) -> Result<Option<GroupTypeRecord>, sqlx::Error> {
    sqlx::query_as::<_, GroupTypeRecord>(
        "SELECT id, guid, name, icon_css_class FROM group_types WHERE guid = ?",
    )
    .bind(guid.hyphenated().to_string())
    .fetch_optional(pool)
    .await
}

/// Ids of every group of the given type, active or not.
pub async fn fetch_group_ids_of_type(
    pool: &SqlitePool,
    group_type_id: i64,
) -> Result<Vec<i64>, sqlx::Error> {
    sqlx::query_scalar("SELECT id FROM groups WHERE group_type_id = ? ORDER BY id")
        .bind(group_type_id)
        .fetch_all(pool)
        .await
}

/// Ids of the direct children of any of `parent_ids`.
pub async fn fetch_child_group_ids(
    pool: &SqlitePool,
    parent_ids: &[i64],
) -> Result<Vec<i64>, sqlx::Error> {
    if parent_ids.is_empty() {
        return Ok(Vec::new());
    }

    sqlx::query_scalar(
        "SELECT id FROM groups \
         WHERE parent_group_id IN (SELECT value FROM json_each(?)) \
         ORDER BY id",
    )
    .bind(Json(parent_ids))
    .fetch_all(pool)
    .await
}

/// First active membership of `person_id` in an active group among `group_ids`,
/// ordered by role order and then by membership id.
pub async fn fetch_first_active_membership(
    pool: &SqlitePool,
    person_id: i64,
    group_ids: &[i64],
) -> Result<Option<MembershipMatch>, sqlx::Error> {
    if group_ids.is_empty() {
        return Ok(None);
    }

    sqlx::query_as::<_, MembershipMatch>(
        "SELECT gm.id AS member_id, gm.group_id, gm.group_role_id, r.\"order\" AS role_order \
         FROM group_members gm \
         JOIN groups g ON g.id = gm.group_id \
         JOIN group_type_roles r ON r.id = gm.group_role_id \
         WHERE gm.person_id = ? \
           AND gm.status = ? \
           AND g.is_active = 1 \
           AND gm.group_id IN (SELECT value FROM json_each(?)) \
         ORDER BY r.\"order\", gm.id \
         LIMIT 1",
    )
    .bind(person_id)
    .bind(GroupMemberStatus::Active.as_str())
    .bind(Json(group_ids))
    .fetch_optional(pool)
    .await
}
