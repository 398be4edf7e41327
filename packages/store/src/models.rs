//! # Domain models for users, settings and notes
//!
//! These are the storage-agnostic shapes every other crate in the workspace works
//! with. The PostgreSQL layer in `api` maps its rows onto them, the in-memory
//! [`crate::MemoryStore`] keeps them as-is, and the `ui` crate renders them.
//!
//! ## Types
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`User`] | A registered account: integer id, unique username, Argon2 PHC hash. |
//! | [`UserSettings`] | One row per user holding the colleague list shown as pre-checked share boxes. |
//! | [`Note`] | A short text note with owner, share-list, timestamps and a [`NoteFlag`]. |
//! | [`NoteFlag`] | The five note states. Stored as an integer `0..=4`. |
//!
//! ## Share-lists
//!
//! A note's share-list holds the ids of users allowed to read it besides the owner.
//! An empty share-list makes the note visible to everybody. Forms that select no
//! colleague store [`OWNER_ONLY`] instead, which no real user id can match.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Integer primary key of a user.
pub type UserId = i32;

/// Share-list entry written when a note is shared with nobody.
pub const OWNER_ONLY: UserId = -1;

/// Upper bound on note name length, in characters.
pub const NOTE_NAME_MAX_LENGTH: usize = 255;

/// A registered user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    /// PHC-format password hash. Cleared with [`User::without_password`] before rendering.
    pub password_hash: String,
}

impl User {
    /// Copy of this user with the password hash blanked out.
    pub fn without_password(&self) -> Self {
        Self {
            password_hash: String::new(),
            ..self.clone()
        }
    }
}

/// Per-user settings.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserSettings {
    pub id: i32,
    pub user_id: UserId,
    pub colleagues: Vec<UserId>,
}

/// Status flag of a note.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum NoteFlag {
    Note = 0,
    InProgress = 1,
    Completed = 2,
    Cancelled = 3,
    Delegated = 4,
}

impl NoteFlag {
    pub const ALL: [NoteFlag; 5] = [
        NoteFlag::Note,
        NoteFlag::InProgress,
        NoteFlag::Completed,
        NoteFlag::Cancelled,
        NoteFlag::Delegated,
    ];

    /// Human readable label used by the dashboard.
    pub fn label(self) -> &'static str {
        match self {
            NoteFlag::Note => "Note",
            NoteFlag::InProgress => "In Progress",
            NoteFlag::Completed => "Completed",
            NoteFlag::Cancelled => "Cancelled",
            NoteFlag::Delegated => "Delegated",
        }
    }

    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for NoteFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when an integer does not name a [`NoteFlag`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid note flag {0}")]
pub struct InvalidFlag(pub i32);

impl TryFrom<i32> for NoteFlag {
    type Error = InvalidFlag;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        NoteFlag::ALL
            .into_iter()
            .find(|flag| flag.as_i32() == value)
            .ok_or(InvalidFlag(value))
    }
}

impl From<NoteFlag> for i32 {
    fn from(flag: NoteFlag) -> Self {
        flag.as_i32()
    }
}

/// A note as stored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub owner: UserId,
    pub share: Vec<UserId>,
    pub name: String,
    pub created_at: DateTime<Utc>,
    /// Only meaningful when `flag` is [`NoteFlag::Completed`].
    pub completed_at: DateTime<Utc>,
    pub flag: NoteFlag,
    pub content: String,
}

impl Note {
    pub fn is_owned_by(&self, user: UserId) -> bool {
        self.owner == user
    }

    /// Share-list without the [`OWNER_ONLY`] marker.
    pub fn shared_with(&self) -> impl Iterator<Item = UserId> + '_ {
        self.share.iter().copied().filter(|id| *id != OWNER_ONLY)
    }
}

/// Replacement values written by an edit.
#[derive(Clone, Debug, PartialEq)]
pub struct NoteUpdate {
    pub share: Vec<UserId>,
    pub name: String,
    pub completed_at: DateTime<Utc>,
    pub flag: NoteFlag,
    pub content: String,
}

/// Truncate a note name to [`NOTE_NAME_MAX_LENGTH`] characters.
pub fn truncate_name(name: &str) -> String {
    name.chars().take(NOTE_NAME_MAX_LENGTH).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_from_i32() {
        assert_eq!(NoteFlag::try_from(0), Ok(NoteFlag::Note));
        assert_eq!(NoteFlag::try_from(2), Ok(NoteFlag::Completed));
        assert_eq!(NoteFlag::try_from(4), Ok(NoteFlag::Delegated));
        assert_eq!(NoteFlag::try_from(5), Err(InvalidFlag(5)));
        assert_eq!(NoteFlag::try_from(-1), Err(InvalidFlag(-1)));
    }

    #[test]
    fn test_flag_labels() {
        let labels: Vec<_> = NoteFlag::ALL.iter().map(|f| f.label()).collect();
        assert_eq!(
            labels,
            ["Note", "In Progress", "Completed", "Cancelled", "Delegated"]
        );
    }

    #[test]
    fn test_truncate_name_counts_characters() {
        let long = "é".repeat(300);
        let truncated = truncate_name(&long);
        assert_eq!(truncated.chars().count(), NOTE_NAME_MAX_LENGTH);
        assert_eq!(truncate_name("short"), "short");
    }

    #[test]
    fn test_shared_with_hides_owner_only_marker() {
        let note = Note {
            owner: 1,
            share: vec![OWNER_ONLY],
            name: "n".into(),
            created_at: Utc::now(),
            completed_at: Utc::now(),
            flag: NoteFlag::Note,
            content: String::new(),
        };
        assert_eq!(note.shared_with().count(), 0);
    }
}
