use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use crate::models::{Note, NoteUpdate, User, UserId, UserSettings};
use crate::repo::{NoteStore, StoreError, StoreResult, UserStore};

/// In-memory store for tests and local runs.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    users: Vec<User>,
    settings: Vec<UserSettings>,
    /// Insertion order; listed in reverse.
    notes: Vec<Note>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Notes in insertion order, for assertions.
    pub fn snapshot(&self) -> Vec<Note> {
        self.lock().notes.clone()
    }
}

#[async_trait]
impl NoteStore for MemoryStore {
    async fn list_notes(&self) -> StoreResult<Vec<Note>> {
        Ok(self.lock().notes.iter().rev().cloned().collect())
    }

    async fn note_exists(&self, name: &str) -> StoreResult<bool> {
        Ok(self.lock().notes.iter().any(|n| n.name == name))
    }

    async fn insert_note(&self, note: Note) -> StoreResult<()> {
        self.lock().notes.push(note);
        Ok(())
    }

    async fn update_notes_named(&self, name: &str, update: NoteUpdate) -> StoreResult<u64> {
        let mut inner = self.lock();
        let mut count = 0;
        for note in inner.notes.iter_mut().filter(|n| n.name == name) {
            note.share = update.share.clone();
            note.name = update.name.clone();
            note.completed_at = update.completed_at;
            note.flag = update.flag;
            note.content = update.content.clone();
            count += 1;
        }
        Ok(count)
    }

    async fn delete_notes_named(&self, name: &str, owner: UserId) -> StoreResult<u64> {
        let mut inner = self.lock();
        let before = inner.notes.len();
        inner.notes.retain(|n| !(n.name == name && n.owner == owner));
        Ok((before - inner.notes.len()) as u64)
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn find_user(&self, username: &str) -> StoreResult<Option<User>> {
        Ok(self.lock().users.iter().find(|u| u.username == username).cloned())
    }

    async fn create_user(&self, username: &str, password_hash: &str) -> StoreResult<User> {
        let mut inner = self.lock();
        if inner.users.iter().any(|u| u.username == username) {
            return Err(StoreError::UsernameTaken(username.to_string()));
        }
        let user = User {
            id: inner.users.len() as UserId + 1,
            username: username.to_string(),
            password_hash: password_hash.to_string(),
        };
        let settings = UserSettings {
            id: inner.settings.len() as i32 + 1,
            user_id: user.id,
            colleagues: Vec::new(),
        };
        inner.users.push(user.clone());
        inner.settings.push(settings);
        Ok(user)
    }

    async fn list_users_except(&self, username: &str) -> StoreResult<Vec<User>> {
        Ok(self
            .lock()
            .users
            .iter()
            .filter(|u| u.username != username)
            .cloned()
            .collect())
    }

    async fn settings(&self, user: UserId) -> StoreResult<UserSettings> {
        self.lock()
            .settings
            .iter()
            .find(|s| s.user_id == user)
            .cloned()
            .ok_or(StoreError::MissingSettings(user))
    }

    async fn set_colleagues(&self, settings_id: i32, colleagues: Vec<UserId>) -> StoreResult<()> {
        if let Some(settings) = self.lock().settings.iter_mut().find(|s| s.id == settings_id) {
            settings.colleagues = colleagues;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NoteFlag;
    use chrono::Utc;

    fn note(owner: UserId, name: &str) -> Note {
        Note {
            owner,
            share: Vec::new(),
            name: name.to_string(),
            created_at: Utc::now(),
            completed_at: Utc::now(),
            flag: NoteFlag::Note,
            content: String::new(),
        }
    }

    #[tokio::test]
    async fn test_notes_listed_most_recent_first() {
        let store = MemoryStore::new();
        store.insert_note(note(1, "first")).await.unwrap();
        store.insert_note(note(1, "second")).await.unwrap();

        let notes = store.list_notes().await.unwrap();
        let names: Vec<_> = notes.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, ["second", "first"]);
        assert!(store.note_exists("first").await.unwrap());
        assert!(!store.note_exists("third").await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_respects_owner() {
        let store = MemoryStore::new();
        store.insert_note(note(1, "mine")).await.unwrap();

        assert_eq!(store.delete_notes_named("mine", 2).await.unwrap(), 0);
        assert_eq!(store.list_notes().await.unwrap().len(), 1);

        assert_eq!(store.delete_notes_named("mine", 1).await.unwrap(), 1);
        assert!(store.list_notes().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_user_creates_settings() {
        let store = MemoryStore::new();
        let alice = store.create_user("alice", "hash").await.unwrap();
        let bob = store.create_user("bob", "hash").await.unwrap();
        assert_ne!(alice.id, bob.id);

        let settings = store.settings(alice.id).await.unwrap();
        assert!(settings.colleagues.is_empty());

        store.set_colleagues(settings.id, vec![bob.id]).await.unwrap();
        assert!(store.settings(alice.id).await.unwrap().colleagues.contains(&bob.id));

        let others = store.list_users_except("alice").await.unwrap();
        assert_eq!(others, vec![bob]);

        assert!(matches!(
            store.create_user("alice", "x").await,
            Err(StoreError::UsernameTaken(_))
        ));
    }
}
