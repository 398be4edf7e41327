//! # Database module: PostgreSQL pool, migrations and the [`PgStore`] backend
//!
//! - [`connect`] opens a [`sqlx::PgPool`] from [`crate::config::Database`].
//! - [`migrate`] applies the embedded migrations in `packages/api/migrations`,
//!   creating the `users`, `user_settings` and `notes` tables on first start.
//! - [`PgStore`] implements [`store::NoteStore`] and [`store::UserStore`] with plain
//!   parameterised queries.

mod pg_store;
mod pool;

pub use pg_store::PgStore;
pub use pool::{connect, migrate};
