//! List and list-member reads and writes.

use pmboard_id::{ColumnCodec, UuidArray};
use sqlx::PgPool;
use tracing::{debug, instrument};
use uuid::Uuid;

use super::DbError;
use crate::models::{List, ListMembers};

/// Queries against the `lists` and `list_members` tables.
#[derive(Clone)]
pub struct ListStore {
    pool: PgPool,
}

impl ListStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Fetch a list by its public ID.
    #[instrument(skip(self))]
    pub async fn get(&self, public_id: Uuid) -> Result<Option<List>, DbError> {
        let list = sqlx::query_as::<_, List>(
            r#"
            SELECT internal_id, public_id, board_public_id, title, created_at, board_internal_id
            FROM lists
            WHERE public_id = $1
            "#,
        )
        .bind(public_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(list)
    }

    /// Fetch the members of a list.
    ///
    /// A stored array that fails to decode fails the read.
    #[instrument(skip(self))]
    pub async fn members(&self, list_public_id: Uuid) -> Result<Option<ListMembers>, DbError> {
        let members = sqlx::query_as::<_, ListMembers>(
            r#"
            SELECT list_public_id, member_ids
            FROM list_members
            WHERE list_public_id = $1
            "#,
        )
        .bind(list_public_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(members)
    }

    /// Replace the members of a list.
    #[instrument(skip(self, member_ids), fields(count = member_ids.len()))]
    pub async fn set_members(
        &self,
        list_public_id: Uuid,
        member_ids: &UuidArray,
    ) -> Result<(), DbError> {
        sqlx::query(
            r#"
            INSERT INTO list_members (list_public_id, member_ids)
            VALUES ($1, $2)
            ON CONFLICT (list_public_id) DO UPDATE SET member_ids = EXCLUDED.member_ids
            "#,
        )
        .bind(list_public_id)
        .bind(member_ids)
        .execute(&self.pool)
        .await
        .map_err(DbError::Query)?;

        debug!("List members updated");
        Ok(())
    }

    /// Append members using the array literal form.
    ///
    /// The literal from [`ColumnCodec::encode`] is bound as text and cast to
    /// `uuid[]` by Postgres.
    #[instrument(skip(self, member_ids), fields(count = member_ids.len()))]
    pub async fn append_members(
        &self,
        list_public_id: Uuid,
        member_ids: &UuidArray,
    ) -> Result<(), DbError> {
        sqlx::query(
            r#"
            INSERT INTO list_members (list_public_id, member_ids)
            VALUES ($1, $2::uuid[])
            ON CONFLICT (list_public_id)
            DO UPDATE SET member_ids = list_members.member_ids || EXCLUDED.member_ids
            "#,
        )
        .bind(list_public_id)
        .bind(member_ids.encode())
        .execute(&self.pool)
        .await
        .map_err(DbError::Query)?;

        Ok(())
    }
}
