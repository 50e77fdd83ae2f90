//! Record types read from and written to Postgres.

mod list;

pub use list::{List, ListMembers};
