//! # pmboard-id
//!
//! Identifier column types for the project board service.
//!
//! ## Design Principles
//!
//! - Identifiers are RFC 4122 UUIDs in their canonical hyphenated form
//! - Column types are explicit [`ColumnCodec`] implementations with a declared
//!   [`SqlType`], never generic text
//! - Decoding is tolerant of legacy formatting but never returns a partial
//!   result
//! - Codecs are stateless and safe to call from any thread
//!
//! ## UUID arrays
//!
//! [`UuidArray`] maps a `Vec<Uuid>` to a Postgres `uuid[]` column:
//!
//! ```text
//! {}
//! {"11111111-1111-1111-1111-111111111111","22222222-2222-2222-2222-222222222222"}
//! ```

mod codec;
mod error;
mod pg;
mod raw;
mod uuid_array;

pub use codec::{ColumnCodec, SqlType};
pub use error::UuidArrayError;
pub use raw::RawValue;
pub use uuid_array::UuidArray;

/// Re-export uuid for consumers that need raw UUID operations
pub use uuid::Uuid;
