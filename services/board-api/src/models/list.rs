//! Board lists and their member arrays.

use chrono::{DateTime, Utc};
use pmboard_id::UuidArray;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A list on a board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct List {
    pub internal_id: i64,
    pub public_id: Uuid,
    pub board_public_id: Uuid,
    pub title: String,
    pub created_at: DateTime<Utc>,
    #[serde(skip)]
    pub board_internal_id: i64,
}

impl<'r> sqlx::FromRow<'r, sqlx::postgres::PgRow> for List {
    fn from_row(row: &'r sqlx::postgres::PgRow) -> Result<Self, sqlx::Error> {
        use sqlx::Row;
        Ok(Self {
            internal_id: row.try_get("internal_id")?,
            public_id: row.try_get("public_id")?,
            board_public_id: row.try_get("board_public_id")?,
            title: row.try_get("title")?,
            created_at: row.try_get("created_at")?,
            board_internal_id: row.try_get("board_internal_id")?,
        })
    }
}

/// Members assigned to a list, stored in a `uuid[]` column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListMembers {
    pub list_public_id: Uuid,
    pub member_ids: UuidArray,
}

impl<'r> sqlx::FromRow<'r, sqlx::postgres::PgRow> for ListMembers {
    fn from_row(row: &'r sqlx::postgres::PgRow) -> Result<Self, sqlx::Error> {
        use sqlx::Row;
        Ok(Self {
            list_public_id: row.try_get("list_public_id")?,
            member_ids: row.try_get("member_ids")?,
        })
    }
}
