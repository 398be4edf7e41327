//! # Note lifecycle: create, edit and delete by name
//!
//! Thin rules on top of [`NoteStore`]. Notes are addressed by name, which the
//! storage layer does not keep unique:
//!
//! - [`create_note`] refuses a name that already exists and reports
//!   [`Created::Duplicate`] instead of failing.
//! - [`edit_note`] rewrites every note carrying the selected name, regardless of
//!   who owns it. A missing name is a no-op.
//! - [`delete_note`] only removes notes the requester owns. Anything else is a no-op.
//!
//! The current time is passed in so callers (and tests) control timestamps.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::models::{truncate_name, InvalidFlag, Note, NoteFlag, NoteUpdate, UserId, OWNER_ONLY};
use crate::repo::{NoteStore, StoreError};

#[derive(Debug, thiserror::Error)]
pub enum LifecycleError {
    #[error(transparent)]
    InvalidFlag(#[from] InvalidFlag),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Fields submitted by the create and edit forms.
#[derive(Clone, Debug, PartialEq)]
pub struct NoteDraft {
    pub name: String,
    pub content: String,
    pub flag: i32,
    /// Selected user ids; empty means "share with nobody".
    pub share: Vec<UserId>,
}

impl NoteDraft {
    fn flag(&self) -> Result<NoteFlag, InvalidFlag> {
        NoteFlag::try_from(self.flag)
    }

    fn share_list(&self) -> Vec<UserId> {
        share_list(self.share.clone())
    }
}

/// Share-list to store for a set of selected users.
pub fn share_list(selected: Vec<UserId>) -> Vec<UserId> {
    if selected.is_empty() {
        vec![OWNER_ONLY]
    } else {
        selected
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Created {
    Inserted,
    /// A note with the same name exists; nothing was written.
    Duplicate,
}

pub async fn create_note<S: NoteStore + ?Sized>(
    store: &S,
    owner: UserId,
    draft: NoteDraft,
    now: DateTime<Utc>,
) -> Result<Created, LifecycleError> {
    let flag = draft.flag()?;
    let name = truncate_name(&draft.name);

    if store.note_exists(&name).await? {
        debug!("note {name:?} exists");
        return Ok(Created::Duplicate);
    }

    let share = draft.share_list();
    store
        .insert_note(Note {
            owner,
            share,
            name,
            created_at: now,
            completed_at: now,
            flag,
            content: draft.content,
        })
        .await?;
    Ok(Created::Inserted)
}

/// Rewrite the note(s) named `target`. Returns how many notes changed.
pub async fn edit_note<S: NoteStore + ?Sized>(
    store: &S,
    target: &str,
    draft: NoteDraft,
    now: DateTime<Utc>,
) -> Result<u64, LifecycleError> {
    let flag = draft.flag()?;

    if !store.note_exists(target).await? {
        debug!("no note named {target:?} to edit");
        return Ok(0);
    }

    let update = NoteUpdate {
        share: draft.share_list(),
        name: truncate_name(&draft.name),
        completed_at: now,
        flag,
        content: draft.content,
    };
    Ok(store.update_notes_named(target, update).await?)
}

/// Delete the notes named `name` owned by `requester`. Returns how many were removed.
pub async fn delete_note<S: NoteStore + ?Sized>(
    store: &S,
    requester: UserId,
    name: &str,
) -> Result<u64, LifecycleError> {
    if !store.note_exists(name).await? {
        return Ok(0);
    }
    Ok(store.delete_notes_named(name, requester).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::accessible_notes;
    use crate::MemoryStore;
    use chrono::{Duration, TimeZone};

    fn draft(name: &str, flag: i32, share: &[UserId]) -> NoteDraft {
        NoteDraft {
            name: name.to_string(),
            content: format!("{name} content"),
            flag,
            share: share.to_vec(),
        }
    }

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap()
    }

    #[tokio::test]
    async fn test_create_note() {
        let store = MemoryStore::new();
        let created = create_note(&store, 7, draft("X", 1, &[3, 4]), t0())
            .await
            .unwrap();
        assert_eq!(created, Created::Inserted);

        let notes = store.snapshot();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].owner, 7);
        assert_eq!(notes[0].share, vec![3, 4]);
        assert_eq!(notes[0].flag, NoteFlag::InProgress);
        assert_eq!(notes[0].created_at, t0());
        assert_eq!(notes[0].completed_at, t0());
        assert_eq!(notes[0].content, "X content");
    }

    #[tokio::test]
    async fn test_create_duplicate_name_leaves_store_unchanged() {
        let store = MemoryStore::new();
        create_note(&store, 1, draft("X", 0, &[]), t0()).await.unwrap();
        let before = store.snapshot();

        let created = create_note(&store, 2, draft("X", 2, &[1]), t0() + Duration::days(1))
            .await
            .unwrap();
        assert_eq!(created, Created::Duplicate);
        assert_eq!(store.snapshot(), before);
    }

    #[tokio::test]
    async fn test_create_rejects_unknown_flag() {
        let store = MemoryStore::new();
        for flag in [5, -1, 99] {
            let err = create_note(&store, 1, draft("X", flag, &[]), t0())
                .await
                .unwrap_err();
            assert!(matches!(err, LifecycleError::InvalidFlag(InvalidFlag(f)) if f == flag));
        }
        assert!(store.snapshot().is_empty());
    }

    #[tokio::test]
    async fn test_create_truncates_name() {
        let store = MemoryStore::new();
        let long = "n".repeat(400);
        create_note(&store, 1, draft(&long, 0, &[]), t0()).await.unwrap();
        assert_eq!(store.snapshot()[0].name.len(), 255);

        // The truncated name is what duplicates are checked against.
        let created = create_note(&store, 1, draft(&"n".repeat(300), 0, &[]), t0())
            .await
            .unwrap();
        assert_eq!(created, Created::Duplicate);
    }

    #[tokio::test]
    async fn test_unshared_note_is_private_to_owner() {
        let store = MemoryStore::new();
        create_note(&store, 1, draft("mine", 0, &[]), t0()).await.unwrap();
        assert_eq!(store.snapshot()[0].share, vec![OWNER_ONLY]);

        let notes = store.list_notes().await.unwrap();
        assert_eq!(accessible_notes(1, notes.clone()).len(), 1);
        assert!(accessible_notes(2, notes).is_empty());
    }

    #[tokio::test]
    async fn test_edit_note() {
        let store = MemoryStore::new();
        create_note(&store, 1, draft("X", 0, &[]), t0()).await.unwrap();

        let later = t0() + Duration::hours(3);
        let changed = edit_note(&store, "X", draft("Y", 2, &[5]), later).await.unwrap();
        assert_eq!(changed, 1);

        let note = &store.snapshot()[0];
        assert_eq!(note.name, "Y");
        assert_eq!(note.share, vec![5]);
        assert_eq!(note.flag, NoteFlag::Completed);
        assert_eq!(note.created_at, t0());
        assert_eq!(note.completed_at, later);
        assert_eq!(note.owner, 1);
    }

    #[tokio::test]
    async fn test_edit_missing_note_is_noop() {
        let store = MemoryStore::new();
        create_note(&store, 1, draft("X", 0, &[]), t0()).await.unwrap();
        let before = store.snapshot();

        let changed = edit_note(&store, "nope", draft("Y", 1, &[]), t0()).await.unwrap();
        assert_eq!(changed, 0);
        assert_eq!(store.snapshot(), before);
    }

    #[tokio::test]
    async fn test_edit_has_no_ownership_check() {
        let store = MemoryStore::new();
        create_note(&store, 1, draft("X", 0, &[]), t0()).await.unwrap();

        // Nothing identifies the editor: any caller can rewrite any note by name.
        edit_note(&store, "X", draft("X", 3, &[]), t0()).await.unwrap();
        assert_eq!(store.snapshot()[0].flag, NoteFlag::Cancelled);
    }

    #[tokio::test]
    async fn test_edit_touches_every_note_with_the_name() {
        let store = MemoryStore::new();
        let dup = |owner| Note {
            owner,
            share: Vec::new(),
            name: "dup".into(),
            created_at: t0(),
            completed_at: t0(),
            flag: NoteFlag::Note,
            content: String::new(),
        };
        store.insert_note(dup(1)).await.unwrap();
        store.insert_note(dup(2)).await.unwrap();

        let changed = edit_note(&store, "dup", draft("dup", 4, &[]), t0()).await.unwrap();
        assert_eq!(changed, 2);
        assert!(store.snapshot().iter().all(|n| n.flag == NoteFlag::Delegated));
    }

    #[tokio::test]
    async fn test_delete_only_by_owner() {
        let store = MemoryStore::new();
        create_note(&store, 1, draft("X", 0, &[2]), t0()).await.unwrap();

        assert_eq!(delete_note(&store, 2, "X").await.unwrap(), 0);
        assert_eq!(store.snapshot().len(), 1);

        assert_eq!(delete_note(&store, 1, "missing").await.unwrap(), 0);
        assert_eq!(delete_note(&store, 1, "X").await.unwrap(), 1);
        assert!(store.snapshot().is_empty());
    }
}
