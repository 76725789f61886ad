use super::models::PersonRecord;
use sqlx::SqlitePool;

pub async fn fetch_person_by_id(
    pool: &SqlitePool,
    id: i64,
) -> Result<Option<PersonRecord>, sqlx::Error> {
    sqlx::query_as::<_, PersonRecord>("SELECT id, nick_name, last_name FROM people WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
}
