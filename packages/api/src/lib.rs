//! # API crate: server-side services for SharedNotes
//!
//! Everything the HTTP layer needs that is not HTTP itself.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | Argon2id password hashing, registration rules, session keys and the session identity type |
//! | [`config`] | [`Settings`] loaded from defaults, `config.toml` and `SHAREDNOTES_*` environment variables |
//! | [`db`] | PostgreSQL pool, embedded migrations and [`PgStore`], the production [`store::Store`] |
//!
//! The note visibility rules, search filter and lifecycle operations live in the
//! `store` crate, which has no database or HTTP dependency.

pub mod auth;
pub mod config;
pub mod db;

pub use crate::config::Settings;
pub use crate::db::PgStore;
