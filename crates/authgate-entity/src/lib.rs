//! # authgate-entity
//!
//! Domain entity models for AuthGate. Every struct in this crate represents
//! a database table row or the data needed to insert one. Row types derive
//! `sqlx::FromRow`.

pub mod blacklist;
pub mod user;
