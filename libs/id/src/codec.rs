//! The pluggable column codec interface.

use crate::RawValue;

/// Storage-side type a codec binds to.
///
/// The data-access layer uses this to pick a native binding path instead of
/// treating the value as generic text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SqlType {
    Text,
    Uuid,
    UuidArray,
}

impl SqlType {
    /// Type name as written in DDL, e.g. `uuid[]`.
    pub const fn as_str(&self) -> &'static str {
        match self {
            SqlType::Text => "text",
            SqlType::Uuid => "uuid",
            SqlType::UuidArray => "uuid[]",
        }
    }

    /// Type name as stored in `pg_type.typname`, e.g. `_uuid`.
    pub const fn pg_name(&self) -> &'static str {
        match self {
            SqlType::Text => "text",
            SqlType::Uuid => "uuid",
            SqlType::UuidArray => "_uuid",
        }
    }

    /// Returns true for array types.
    pub const fn is_array(&self) -> bool {
        matches!(self, SqlType::UuidArray)
    }
}

impl std::fmt::Display for SqlType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A custom column type: a paired transform between an in-memory value and
/// its stored text, plus the storage type it declares.
pub trait ColumnCodec: Sized {
    /// Decode failure.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Storage type of the column.
    const SQL_TYPE: SqlType;

    /// Decodes a value read from the store.
    fn decode(raw: RawValue<'_>) -> Result<Self, Self::Error>;

    /// Encodes a value for writing to the store.
    fn encode(&self) -> String;
}
