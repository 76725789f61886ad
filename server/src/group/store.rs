use async_trait::async_trait;
use sqlx::SqlitePool;
use uuid::Uuid;

use super::db;
use super::models::{GroupTypeRecord, MembershipMatch};

/// Read-only lookups the badge issues while rendering.
#[async_trait]
pub trait MembershipStore: Send + Sync {
    async fn group_type_by_guid(&self, guid: &Uuid)
    -> Result<Option<GroupTypeRecord>, sqlx::Error>;

    async fn group_ids_of_type(&self, group_type_id: i64) -> Result<Vec<i64>, sqlx::Error>;

    async fn child_group_ids(&self, parent_ids: &[i64]) -> Result<Vec<i64>, sqlx::Error>;

    async fn first_active_membership(
        &self,
        person_id: i64,
        group_ids: &[i64],
    ) -> Result<Option<MembershipMatch>, sqlx::Error>;
}

#[async_trait]
impl MembershipStore for SqlitePool {
    async fn group_type_by_guid(
        &self,
        guid: &Uuid,
    ) -> Result<Option<GroupTypeRecord>, sqlx::Error> {
        db::fetch_group_type_by_guid(self, guid).await
    }

    async fn group_ids_of_type(&self, group_type_id: i64) -> Result<Vec<i64>, sqlx::Error> {
        db::fetch_group_ids_of_type(self, group_type_id).await
    }

    async fn child_group_ids(&self, parent_ids: &[i64]) -> Result<Vec<i64>, sqlx::Error> {
        db::fetch_child_group_ids(self, parent_ids).await
    }

    async fn first_active_membership(
        &self,
        person_id: i64,
        group_ids: &[i64],
    ) -> Result<Option<MembershipMatch>, sqlx::Error> {
        db::fetch_first_active_membership(self, person_id, group_ids).await
    }
}
