//! Decoding of the dashboard forms.
//!
//! The note and settings forms carry one checkbox per user, named
//! `<prefix>-<username>` with the user id as value, so they are read as a
//! plain field map.

use std::collections::HashMap;

use serde::Deserialize;
use store::{NoteDraft, User, UserId};

use crate::error::AppError;

pub type Fields = HashMap<String, String>;

/// `username` / `password` pair posted by the login and register forms.
#[derive(Debug, Deserialize)]
pub struct Credentials {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Raw `search-by-*` fields.
#[derive(Debug, Deserialize)]
pub struct SearchForm {
    #[serde(rename = "search-by-keyword", default)]
    pub keyword: String,
    #[serde(rename = "search-by-user", default)]
    pub user: String,
    #[serde(rename = "search-by-date", default)]
    pub date: String,
    #[serde(rename = "search-by-flags", default)]
    pub flag: String,
}

/// Value of `name`, or an empty string when it was not submitted.
pub fn field<'a>(fields: &'a Fields, name: &str) -> &'a str {
    fields.get(name).map(String::as_str).unwrap_or("")
}

/// User ids ticked among the `<prefix>-<username>` checkboxes.
pub fn selected_users(prefix: &str, users: &[User], fields: &Fields) -> Result<Vec<UserId>, AppError> {
    let mut selected = Vec::new();
    for user in users {
        let name = format!("{prefix}-{}", user.username);
        let Some(value) = fields.get(&name) else {
            continue;
        };
        let id = value
            .trim()
            .parse::<UserId>()
            .map_err(|_| AppError::bad_request(format!("invalid user id {value:?} in {name}")))?;
        selected.push(id);
    }
    Ok(selected)
}

/// Build a [`NoteDraft`] from the `<prefix>-note-*` fields and share checkboxes.
pub fn note_draft(prefix: &str, users: &[User], fields: &Fields) -> Result<NoteDraft, AppError> {
    let raw_flag = field(fields, &format!("{prefix}-note-flags"));
    let flag = raw_flag
        .trim()
        .parse::<i32>()
        .map_err(|_| AppError::bad_request(format!("invalid note flag {raw_flag:?}")))?;

    Ok(NoteDraft {
        name: field(fields, &format!("{prefix}-note-name")).to_string(),
        content: field(fields, &format!("{prefix}-note-content")).to_string(),
        flag,
        share: selected_users(prefix, users, fields)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn users() -> Vec<User> {
        ["bob", "carol", "dave"]
            .into_iter()
            .enumerate()
            .map(|(i, name)| User {
                id: i as UserId + 2,
                username: name.to_string(),
                password_hash: String::new(),
            })
            .collect()
    }

    fn fields(pairs: &[(&str, &str)]) -> Fields {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_selected_users() {
        let form = fields(&[("create-bob", "2"), ("create-dave", "4"), ("edit-carol", "3")]);
        assert_eq!(selected_users("create", &users(), &form).unwrap(), vec![2, 4]);
        assert_eq!(selected_users("edit", &users(), &form).unwrap(), vec![3]);
        assert!(selected_users("settings", &users(), &form).unwrap().is_empty());
    }

    #[test]
    fn test_selected_users_rejects_non_numeric() {
        let form = fields(&[("settings-bob", "bob")]);
        let err = selected_users("settings", &users(), &form).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn test_note_draft() {
        let form = fields(&[
            ("create-note-name", "weekly report"),
            ("create-note-content", "numbers"),
            ("create-note-flags", "1"),
            ("create-carol", "3"),
        ]);
        let draft = note_draft("create", &users(), &form).unwrap();
        assert_eq!(draft.name, "weekly report");
        assert_eq!(draft.content, "numbers");
        assert_eq!(draft.flag, 1);
        assert_eq!(draft.share, vec![3]);
    }

    #[test]
    fn test_note_draft_requires_numeric_flag() {
        let form = fields(&[("edit-note-name", "x"), ("edit-note-flags", "done")]);
        assert!(note_draft("edit", &users(), &form).is_err());

        let form = fields(&[("edit-note-name", "x")]);
        assert!(note_draft("edit", &users(), &form).is_err());
    }
}
