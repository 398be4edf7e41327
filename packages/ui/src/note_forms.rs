//! Create, edit, delete and settings forms. Field names match what the `web`
//! crate's handlers read.

use dioxus::prelude::*;
use store::{NoteFlag, User, UserId};

use crate::DashboardView;

/// One checkbox per user, named `<prefix>-<username>` with the user id as value.
#[component]
pub fn ShareBoxes(#[props(into)] prefix: String, users: Vec<User>, checked: Vec<UserId>) -> Element {
    rsx! {
        if users.is_empty() {
            p { class: "hint", "No other users yet." }
        }
        for user in users.iter() {
            label {
                class: "share-box",
                input {
                    r#type: "checkbox",
                    name: format!("{prefix}-{}", user.username),
                    value: user.id.to_string(),
                    checked: checked.contains(&user.id),
                }
                {user.username.clone()}
            }
        }
    }
}

#[component]
fn FlagSelect(#[props(into)] name: String, selected: NoteFlag) -> Element {
    rsx! {
        select {
            name: name,
            for flag in NoteFlag::ALL {
                option {
                    value: flag.as_i32().to_string(),
                    selected: flag == selected,
                    {flag.label()}
                }
            }
        }
    }
}

#[component]
pub fn CreateNoteForm(view: DashboardView) -> Element {
    rsx! {
        form {
            class: "note-form",
            method: "post",
            action: "/create",
            h3 { "New note" }
            input {
                r#type: "text",
                name: "create-note-name",
                placeholder: "Name",
                maxlength: "255",
                required: true,
            }
            FlagSelect { name: "create-note-flags", selected: NoteFlag::Note }
            textarea { name: "create-note-content", rows: "4", placeholder: "Content" }
            fieldset {
                legend { "Share with" }
                ShareBoxes {
                    prefix: "create",
                    users: view.users.clone(),
                    checked: view.settings.colleagues.clone(),
                }
            }
            button { r#type: "submit", "Create" }
        }
    }
}

#[component]
pub fn EditNoteForm(view: DashboardView) -> Element {
    rsx! {
        form {
            class: "note-form",
            method: "post",
            action: "/edit",
            h3 { "Edit note" }
            select {
                name: "edit-select-note",
                required: true,
                for note in view.notes.iter() {
                    option { value: note.name.clone(), {note.name.clone()} }
                }
            }
            input {
                r#type: "text",
                name: "edit-note-name",
                placeholder: "New name",
                maxlength: "255",
                required: true,
            }
            FlagSelect { name: "edit-note-flags", selected: NoteFlag::Note }
            textarea { name: "edit-note-content", rows: "4", placeholder: "Content" }
            fieldset {
                legend { "Share with" }
                ShareBoxes {
                    prefix: "edit",
                    users: view.users.clone(),
                    checked: view.settings.colleagues.clone(),
                }
            }
            button { r#type: "submit", "Save" }
        }
    }
}

#[component]
pub fn DeleteNoteForm(view: DashboardView) -> Element {
    rsx! {
        form {
            class: "note-form",
            method: "post",
            action: "/delete",
            h3 { "Delete note" }
            select {
                name: "delete-select-note",
                required: true,
                for note in view.owned_notes() {
                    option { value: note.name.clone(), {note.name.clone()} }
                }
            }
            button { r#type: "submit", class: "danger", "Delete" }
        }
    }
}

#[component]
pub fn SettingsForm(view: DashboardView) -> Element {
    rsx! {
        form {
            class: "note-form",
            method: "post",
            action: "/editsettings",
            h3 { "Colleagues" }
            p { class: "hint", "Colleagues are pre-selected when sharing a new note." }
            ShareBoxes {
                prefix: "settings",
                users: view.users.clone(),
                checked: view.settings.colleagues.clone(),
            }
            button { r#type: "submit", "Save colleagues" }
        }
    }
}
