//! Database error types.

use thiserror::Error;

/// Database operation errors.
#[derive(Debug, Error)]
pub enum DbError {
    /// Failed to connect to the database.
    #[error("failed to connect to database: {0}")]
    Connect(#[source] sqlx::Error),

    /// Failed to execute a query.
    #[error("query failed: {0}")]
    Query(#[source] sqlx::Error),

    /// A column held a value its codec could not decode.
    #[error("failed to decode column '{column}': {source}")]
    Decode {
        column: String,
        #[source]
        source: sqlx::Error,
    },
}

impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::ColumnDecode { index, .. } = &err {
            // sqlx records the index in its Debug form, quotes included.
            let column = index.trim_matches('"').to_string();
            return DbError::Decode { column, source: err };
        }
        DbError::Query(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pmboard_id::UuidArray;

    #[test]
    fn test_column_decode_maps_to_decode() {
        let source = UuidArray::parse("{\"not-a-uuid\"}").unwrap_err();
        let err = DbError::from(sqlx::Error::ColumnDecode {
            index: "\"member_ids\"".to_string(),
            source: Box::new(source),
        });
        match err {
            DbError::Decode { column, .. } => assert_eq!(column, "member_ids"),
            other => panic!("expected decode error, got {other:?}"),
        }
    }

    #[test]
    fn test_other_errors_map_to_query() {
        let err = DbError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, DbError::Query(_)));
    }
}
