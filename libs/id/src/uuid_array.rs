//! `UuidArray`: a list of UUIDs stored as a Postgres array literal.
//!
//! ## Format
//!
//! Encoding always produces the canonical form:
//!
//! ```text
//! {}
//! {"67e55044-10b1-426f-9247-bb680e5fe0c8","2f1c3a8e-5b7d-4e6f-8a9b-0c1d2e3f4a5b"}
//! ```
//!
//! Decoding is deliberately looser so that older rows keep reading:
//! elements may be unquoted and may carry whitespace around commas and
//! braces, and empty elements are dropped (`{ }` and `{,}` decode to an
//! empty list).
//!
//! Elements are split on every `,` without regard to quoting, so a quoted
//! element containing a comma is read as two tokens. Canonical UUIDs never
//! contain a comma.

use std::borrow::Cow;
use std::ops::Deref;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{ColumnCodec, RawValue, SqlType, UuidArrayError};

/// An ordered list of UUIDs. Duplicates are kept and order is preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UuidArray(Vec<Uuid>);

impl UuidArray {
    /// Creates an empty array.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Uuid] {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> Vec<Uuid> {
        self.0
    }

    pub fn push(&mut self, id: Uuid) {
        self.0.push(id);
    }

    /// Parses a stored array literal.
    pub fn parse(s: &str) -> Result<Self, UuidArrayError> {
        <Self as ColumnCodec>::decode(RawValue::Text(s))
    }

    /// Renders the canonical array literal.
    #[must_use]
    pub fn to_literal(&self) -> String {
        <Self as ColumnCodec>::encode(self)
    }
}

impl ColumnCodec for UuidArray {
    type Error = UuidArrayError;

    const SQL_TYPE: SqlType = SqlType::UuidArray;

    fn decode(raw: RawValue<'_>) -> Result<Self, Self::Error> {
        let text: Cow<'_, str> = match raw {
            RawValue::Text(s) => Cow::Borrowed(s),
            // Invalid UTF-8 is kept as replacement characters so the bad
            // element is reported with its position in the literal.
            RawValue::Bytes(b) => String::from_utf8_lossy(b),
            other => {
                return Err(UuidArrayError::UnsupportedInputType {
                    found: other.kind(),
                })
            }
        };

        let text: &str = &text;
        let inner = text.strip_prefix('{').unwrap_or(text);
        let inner = inner.strip_suffix('}').unwrap_or(inner);

        let mut ids = Vec::new();
        for part in inner.split(',') {
            let token = trim_element(part);
            if token.is_empty() {
                continue;
            }

            let id = Uuid::parse_str(token).map_err(|source| UuidArrayError::InvalidElement {
                token: token.to_string(),
                source,
            })?;
            ids.push(id);
        }

        Ok(Self(ids))
    }

    fn encode(&self) -> String {
        if self.0.is_empty() {
            return "{}".to_string();
        }

        // `{` + `}` plus a quoted 36-char UUID and a comma per element.
        let mut out = String::with_capacity(2 + self.0.len() * 39);
        out.push('{');
        for (i, id) in self.0.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            out.push('"');
            out.push_str(id.hyphenated().encode_lower(&mut Uuid::encode_buffer()));
            out.push('"');
        }
        out.push('}');
        out
    }
}

/// Whitespace, then at most one quote on each side, then whitespace again.
fn trim_element(part: &str) -> &str {
    let s = part.trim();
    let s = s.strip_prefix('"').unwrap_or(s);
    let s = s.strip_suffix('"').unwrap_or(s);
    s.trim()
}

impl Deref for UuidArray {
    type Target = [Uuid];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<[Uuid]> for UuidArray {
    fn as_ref(&self) -> &[Uuid] {
        &self.0
    }
}

impl From<Vec<Uuid>> for UuidArray {
    fn from(ids: Vec<Uuid>) -> Self {
        Self(ids)
    }
}

impl From<UuidArray> for Vec<Uuid> {
    fn from(arr: UuidArray) -> Self {
        arr.0
    }
}

impl FromIterator<Uuid> for UuidArray {
    fn from_iter<I: IntoIterator<Item = Uuid>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for UuidArray {
    type Item = Uuid;
    type IntoIter = std::vec::IntoIter<Uuid>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a UuidArray {
    type Item = &'a Uuid;
    type IntoIter = std::slice::Iter<'a, Uuid>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl std::fmt::Display for UuidArray {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_literal())
    }
}

impl FromStr for UuidArray {
    type Err = UuidArrayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// =============================================================================
// Tests
// =============================================================================
