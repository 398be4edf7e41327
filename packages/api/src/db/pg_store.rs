use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use store::models::{InvalidFlag, NoteUpdate};
use store::repo::StoreResult;
use store::{Note, NoteFlag, NoteStore, StoreError, User, UserId, UserSettings, UserStore};

/// [`NoteStore`] and [`UserStore`] over PostgreSQL.
#[derive(Clone, Debug)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Row of the `notes` table.
#[derive(Debug, Clone, FromRow)]
struct NoteRow {
    note_owner: i32,
    note_share: Vec<i32>,
    note_name: String,
    note_date: DateTime<Utc>,
    note_completion_date: DateTime<Utc>,
    note_flag: i32,
    note_content: String,
}

impl TryFrom<NoteRow> for Note {
    type Error = InvalidFlag;

    fn try_from(row: NoteRow) -> Result<Self, Self::Error> {
        Ok(Note {
            owner: row.note_owner,
            share: row.note_share,
            name: row.note_name,
            created_at: row.note_date,
            completed_at: row.note_completion_date,
            flag: NoteFlag::try_from(row.note_flag)?,
            content: row.note_content,
        })
    }
}

/// Row of the `users` table.
#[derive(Debug, Clone, FromRow)]
struct UserRow {
    user_id: i32,
    username: String,
    pass: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.user_id,
            username: row.username,
            password_hash: row.pass,
        }
    }
}

/// Row of the `user_settings` table.
#[derive(Debug, Clone, FromRow)]
struct SettingsRow {
    setting_id: i32,
    user_id: i32,
    colleagues: Vec<i32>,
}

impl From<SettingsRow> for UserSettings {
    fn from(row: SettingsRow) -> Self {
        UserSettings {
            id: row.setting_id,
            user_id: row.user_id,
            colleagues: row.colleagues,
        }
    }
}

#[async_trait]
impl NoteStore for PgStore {
    async fn list_notes(&self) -> StoreResult<Vec<Note>> {
        let rows: Vec<NoteRow> = sqlx::query_as(
            "SELECT note_owner, note_share, note_name, note_date, note_completion_date, note_flag, note_content
             FROM notes ORDER BY note_id DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(StoreError::backend)?;

        rows.into_iter()
            .map(|row| Note::try_from(row).map_err(StoreError::backend))
            .collect()
    }

    async fn note_exists(&self, name: &str) -> StoreResult<bool> {
        let row: Option<(i32,)> = sqlx::query_as("SELECT note_id FROM notes WHERE note_name = $1 LIMIT 1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(StoreError::backend)?;
        Ok(row.is_some())
    }

    async fn insert_note(&self, note: Note) -> StoreResult<()> {
        sqlx::query(
            "INSERT INTO notes (note_owner, note_share, note_name, note_date, note_completion_date, note_flag, note_content)
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(note.owner)
        .bind(&note.share)
        .bind(&note.name)
        .bind(note.created_at)
        .bind(note.completed_at)
        .bind(note.flag.as_i32())
        .bind(&note.content)
        .execute(&self.pool)
        .await
        .map_err(StoreError::backend)?;
        Ok(())
    }

    async fn update_notes_named(&self, name: &str, update: NoteUpdate) -> StoreResult<u64> {
        let result = sqlx::query(
            "UPDATE notes
             SET note_share = $1, note_name = $2, note_completion_date = $3, note_flag = $4, note_content = $5
             WHERE note_name = $6",
        )
        .bind(&update.share)
        .bind(&update.name)
        .bind(update.completed_at)
        .bind(update.flag.as_i32())
        .bind(&update.content)
        .bind(name)
        .execute(&self.pool)
        .await
        .map_err(StoreError::backend)?;
        Ok(result.rows_affected())
    }

    async fn delete_notes_named(&self, name: &str, owner: UserId) -> StoreResult<u64> {
        let result = sqlx::query("DELETE FROM notes WHERE note_name = $1 AND note_owner = $2")
            .bind(name)
            .bind(owner)
            .execute(&self.pool)
            .await
            .map_err(StoreError::backend)?;
        Ok(result.rows_affected())
    }
}

#[async_trait]
impl UserStore for PgStore {
    async fn find_user(&self, username: &str) -> StoreResult<Option<User>> {
        let row: Option<UserRow> =
            sqlx::query_as("SELECT user_id, username, pass FROM users WHERE username = $1")
                .bind(username)
                .fetch_optional(&self.pool)
                .await
                .map_err(StoreError::backend)?;
        Ok(row.map(User::from))
    }

    async fn create_user(&self, username: &str, password_hash: &str) -> StoreResult<User> {
        let mut tx = self.pool.begin().await.map_err(StoreError::backend)?;

        let row: UserRow = sqlx::query_as(
            "INSERT INTO users (username, pass) VALUES ($1, $2) RETURNING user_id, username, pass",
        )
        .bind(username)
        .bind(password_hash)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            let taken = e
                .as_database_error()
                .is_some_and(|db| db.is_unique_violation());
            if taken {
                StoreError::UsernameTaken(username.to_string())
            } else {
                StoreError::backend(e)
            }
        })?;

        sqlx::query("INSERT INTO user_settings (user_id, colleagues) VALUES ($1, ARRAY[]::INTEGER[])")
            .bind(row.user_id)
            .execute(&mut *tx)
            .await
            .map_err(StoreError::backend)?;

        tx.commit().await.map_err(StoreError::backend)?;
        Ok(row.into())
    }

    async fn list_users_except(&self, username: &str) -> StoreResult<Vec<User>> {
        let rows: Vec<UserRow> = sqlx::query_as(
            "SELECT user_id, username, pass FROM users WHERE username != $1 ORDER BY user_id",
        )
        .bind(username)
        .fetch_all(&self.pool)
        .await
        .map_err(StoreError::backend)?;
        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn settings(&self, user: UserId) -> StoreResult<UserSettings> {
        let row: Option<SettingsRow> = sqlx::query_as(
            "SELECT setting_id, user_id, colleagues FROM user_settings WHERE user_id = $1",
        )
        .bind(user)
        .fetch_optional(&self.pool)
        .await
        .map_err(StoreError::backend)?;
        row.map(UserSettings::from)
            .ok_or(StoreError::MissingSettings(user))
    }

    async fn set_colleagues(&self, settings_id: i32, colleagues: Vec<UserId>) -> StoreResult<()> {
        sqlx::query("UPDATE user_settings SET colleagues = $1 WHERE setting_id = $2")
            .bind(&colleagues)
            .bind(settings_id)
            .execute(&self.pool)
            .await
            .map_err(StoreError::backend)?;
        Ok(())
    }
}
