//! # Storage traits: the seam between the web layer and its backends
//!
//! Handlers never talk to a database directly. They go through the two traits
//! defined here, which `api::db::PgStore` implements for PostgreSQL and
//! [`crate::MemoryStore`] implements in memory for tests.
//!
//! ## [`NoteStore`]
//!
//! | Method | Description |
//! |--------|-------------|
//! | [`list_notes`](NoteStore::list_notes) | Every note, most recent first. The visibility filter runs on the result. |
//! | [`note_exists`](NoteStore::note_exists) | Plain name lookup. Names are not unique at the storage layer. |
//! | [`insert_note`](NoteStore::insert_note) | Append a note. |
//! | [`update_notes_named`](NoteStore::update_notes_named) | Overwrite every note carrying a name; returns the row count. |
//! | [`delete_notes_named`](NoteStore::delete_notes_named) | Delete the notes with a name that belong to one owner; returns the row count. |
//!
//! ## [`UserStore`]
//!
//! Users and their [`UserSettings`]. `create_user` inserts the user together with
//! an empty settings row.
//!
//! Both traits use `async_trait` so that handlers can hold a `dyn` [`Store`].

use async_trait::async_trait;

use crate::models::{Note, NoteUpdate, User, UserId, UserSettings};

/// Errors raised by a storage backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("no settings for user {0}")]
    MissingSettings(UserId),

    #[error("username {0:?} is taken")]
    UsernameTaken(String),

    #[error(transparent)]
    Backend(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl StoreError {
    pub fn backend<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Backend(Box::new(err))
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait]
pub trait NoteStore: Send + Sync {
    async fn list_notes(&self) -> StoreResult<Vec<Note>>;

    async fn note_exists(&self, name: &str) -> StoreResult<bool>;

    async fn insert_note(&self, note: Note) -> StoreResult<()>;

    async fn update_notes_named(&self, name: &str, update: NoteUpdate) -> StoreResult<u64>;

    async fn delete_notes_named(&self, name: &str, owner: UserId) -> StoreResult<u64>;
}

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_user(&self, username: &str) -> StoreResult<Option<User>>;

    /// Insert a user and their empty settings row.
    async fn create_user(&self, username: &str, password_hash: &str) -> StoreResult<User>;

    /// Every user except `username`, ordered by id.
    async fn list_users_except(&self, username: &str) -> StoreResult<Vec<User>>;

    async fn settings(&self, user: UserId) -> StoreResult<UserSettings>;

    async fn set_colleagues(&self, settings_id: i32, colleagues: Vec<UserId>) -> StoreResult<()>;
}

/// A backend that stores both notes and users.
pub trait Store: NoteStore + UserStore {}

impl<T: NoteStore + UserStore> Store for T {}
