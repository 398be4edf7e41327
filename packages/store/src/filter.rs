//! Note visibility and dashboard search.
//!
//! Both passes are pure and keep the input order, which the stores deliver most
//! recent first.

use serde::{Deserialize, Serialize};

use crate::models::{Note, NoteFlag, UserId};

/// Form value meaning "this criterion is unset".
pub const UNSET: &str = "-1";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Notes `user` may read: owned by them, shared with them, or shared with nobody.
pub fn accessible_notes(user: UserId, notes: Vec<Note>) -> Vec<Note> {
    notes
        .into_iter()
        .filter(|note| is_accessible(user, note))
        .collect()
}

pub fn is_accessible(user: UserId, note: &Note) -> bool {
    note.share.is_empty() || note.share.contains(&user) || note.owner == user
}

/// Dashboard search criteria. Every field left at its default matches all notes.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub keyword: String,
    pub owner: Option<UserId>,
    /// `YYYY-MM-DD`, compared textually.
    pub date: Option<String>,
    pub flag: Option<NoteFlag>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    #[error("invalid owner filter {0:?}")]
    Owner(String),
    #[error("invalid flag filter {0:?}")]
    Flag(String),
}

impl SearchQuery {
    /// Decode the raw search form fields. Empty and `-1` both mean unset.
    pub fn from_form(keyword: &str, owner: &str, date: &str, flag: &str) -> Result<Self, QueryError> {
        let owner = match owner.trim() {
            "" | UNSET => None,
            raw => Some(
                raw.parse::<UserId>()
                    .map_err(|_| QueryError::Owner(raw.to_string()))?,
            ),
        };

        let flag = match flag.trim() {
            "" | UNSET => None,
            raw => {
                let value = raw
                    .parse::<i32>()
                    .map_err(|_| QueryError::Flag(raw.to_string()))?;
                Some(NoteFlag::try_from(value).map_err(|_| QueryError::Flag(raw.to_string()))?)
            }
        };

        let date = Some(date.trim().to_string()).filter(|d| !d.is_empty());

        Ok(Self {
            keyword: keyword.to_string(),
            owner,
            date,
            flag,
        })
    }

    pub fn is_unset(&self) -> bool {
        *self == Self::default()
    }

    pub fn matches(&self, note: &Note) -> bool {
        self.matches_keyword(note)
            && self.owner.map_or(true, |owner| note.owner == owner)
            && self.matches_date(note)
            && self.flag.map_or(true, |flag| note.flag == flag)
    }

    fn matches_keyword(&self, note: &Note) -> bool {
        if self.keyword.is_empty() {
            return true;
        }
        let keyword = self.keyword.to_lowercase();
        note.name.to_lowercase().contains(&keyword) || note.content.to_lowercase().contains(&keyword)
    }

    fn matches_date(&self, note: &Note) -> bool {
        let Some(date) = self.date.as_deref() else {
            return true;
        };
        note.created_at.format(DATE_FORMAT).to_string() == date
            || (note.flag == NoteFlag::Completed
                && note.completed_at.format(DATE_FORMAT).to_string() == date)
    }
}

/// Narrow `notes` to the ones matching every criterion of `query`.
pub fn search_notes(notes: Vec<Note>, query: &SearchQuery) -> Vec<Note> {
    notes.into_iter().filter(|note| query.matches(note)).collect()
}
