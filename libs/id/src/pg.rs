//! sqlx bindings for Postgres `uuid[]` columns.
//!
//! Reads accept both the native `uuid[]` type and any text-like column holding
//! an array literal. Text-format values and text columns go through
//! [`ColumnCodec::decode`]; binary `uuid[]` values use the Postgres binary
//! array format and are handed to sqlx's own array decoder.
//!
//! Writes always bind as `uuid[]`. sqlx sends parameters in binary format, so
//! the array is encoded natively; the text literal from
//! [`ColumnCodec::encode`] is for SQL text and `$1::uuid[]` casts.

use sqlx::encode::IsNull;
use sqlx::error::BoxDynError;
use sqlx::postgres::{PgArgumentBuffer, PgTypeInfo, PgValueFormat, PgValueRef, Postgres};
use sqlx::{Decode, Encode, Type, ValueRef};
use tracing::debug;
use uuid::Uuid;

use crate::{ColumnCodec, RawValue, UuidArray};

impl Type<Postgres> for UuidArray {
    fn type_info() -> PgTypeInfo {
        <Vec<Uuid> as Type<Postgres>>::type_info()
    }

    fn compatible(ty: &PgTypeInfo) -> bool {
        <Vec<Uuid> as Type<Postgres>>::compatible(ty) || <&str as Type<Postgres>>::compatible(ty)
    }
}

impl<'r> Decode<'r, Postgres> for UuidArray {
    fn decode(value: PgValueRef<'r>) -> Result<Self, BoxDynError> {
        let textual = <&str as Type<Postgres>>::compatible(&value.type_info());

        let raw = match value.format() {
            PgValueFormat::Text => RawValue::Text(value.as_str()?),
            PgValueFormat::Binary if textual => RawValue::Bytes(value.as_bytes()?),
            PgValueFormat::Binary => {
                let ids = <Vec<Uuid> as Decode<'r, Postgres>>::decode(value)?;
                return Ok(Self::from(ids));
            }
        };

        <Self as ColumnCodec>::decode(raw).map_err(|e| {
            debug!(error = %e, token = ?e.token(), "Failed to decode uuid array column");
            e.into()
        })
    }
}

impl Encode<'_, Postgres> for UuidArray {
    fn encode_by_ref(&self, buf: &mut PgArgumentBuffer) -> Result<IsNull, BoxDynError> {
        <&[Uuid] as Encode<'_, Postgres>>::encode_by_ref(&self.as_slice(), buf)
    }

    fn size_hint(&self) -> usize {
        <&[Uuid] as Encode<'_, Postgres>>::size_hint(&self.as_slice())
    }
}
