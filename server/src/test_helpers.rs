use anyhow::Result;
use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions},
};
use std::str::FromStr;
use uuid::Uuid;

use crate::group::GroupMemberStatus;
use crate::person::PersonRecord;

/// Creates an in-memory SQLite pool for testing
pub async fn create_test_pool() -> Result<SqlitePool> {
    let connect_options = SqliteConnectOptions::from_str("sqlite::memory:")?
        .journal_mode(SqliteJournalMode::Wal)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory databases should use a single connection
        .connect_with(connect_options)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    Ok(pool)
}

/// Inserts membership data for tests.
pub struct Fixture<'a> {
    pool: &'a SqlitePool,
}

impl<'a> Fixture<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Group type with a random GUID.
    pub async fn group_type(&self, name: &str) -> Result<i64> {
        self.group_type_with_guid(&Uuid::new_v4().to_string(), name)
            .await
    }

    pub async fn group_type_with_guid(&self, guid: &str, name: &str) -> Result<i64> {
        let result = sqlx::query(
            "INSERT INTO group_types (guid, name, icon_css_class) VALUES (?, ?, 'fa fa-sitemap')",
        )
        .bind(guid)
        .bind(name)
        .execute(self.pool)
        .await?;
        Ok(result.last_insert_rowid())
    }

    pub async fn role(&self, group_type_id: i64, name: &str, order: i64) -> Result<i64> {
        let result = sqlx::query(
            "INSERT INTO group_type_roles (group_type_id, name, \"order\") VALUES (?, ?, ?)",
        )
        .bind(group_type_id)
        .bind(name)
        .bind(order)
        .execute(self.pool)
        .await?;
        Ok(result.last_insert_rowid())
    }

    pub async fn group(&self, group_type_id: i64, parent: Option<i64>, name: &str) -> Result<i64> {
        self.insert_group(group_type_id, parent, name, true).await
    }

    pub async fn inactive_group(
        &self,
        group_type_id: i64,
        parent: Option<i64>,
        name: &str,
    ) -> Result<i64> {
        self.insert_group(group_type_id, parent, name, false).await
    }

    async fn insert_group(
        &self,
        group_type_id: i64,
        parent: Option<i64>,
        name: &str,
        is_active: bool,
    ) -> Result<i64> {
        let result = sqlx::query(
            "INSERT INTO groups (group_type_id, parent_group_id, name, is_active) VALUES (?, ?, ?, ?)",
        )
        .bind(group_type_id)
        .bind(parent)
        .bind(name)
        .bind(is_active)
        .execute(self.pool)
        .await?;
        Ok(result.last_insert_rowid())
    }

    /// Points `group_id` at a new parent; used to build cycles.
    pub async fn reparent(&self, group_id: i64, parent: Option<i64>) -> Result<()> {
        sqlx::query("UPDATE groups SET parent_group_id = ? WHERE id = ?")
            .bind(parent)
            .bind(group_id)
            .execute(self.pool)
            .await?;
        Ok(())
    }

    pub async fn person(&self, nick_name: &str, last_name: &str) -> Result<PersonRecord> {
        let result = sqlx::query("INSERT INTO people (nick_name, last_name) VALUES (?, ?)")
            .bind(nick_name)
            .bind(last_name)
            .execute(self.pool)
            .await?;

        Ok(PersonRecord {
            id: result.last_insert_rowid(),
            nick_name: nick_name.to_string(),
            last_name: last_name.to_string(),
        })
    }

    pub async fn member(
        &self,
        group_id: i64,
        person_id: i64,
        group_role_id: i64,
        status: GroupMemberStatus,
    ) -> Result<i64> {
        let result = sqlx::query(
            "INSERT INTO group_members (group_id, person_id, group_role_id, status) VALUES (?, ?, ?, ?)",
        )
        .bind(group_id)
        .bind(person_id)
        .bind(group_role_id)
        .bind(status.as_str())
        .execute(self.pool)
        .await?;
        Ok(result.last_insert_rowid())
    }
}
