//! pmboard API service.
//!
//! Holds the service plumbing around the identifier column types: env-driven
//! configuration, the Postgres pool, and the record types read through it.

pub mod config;
pub mod db;
pub mod models;
