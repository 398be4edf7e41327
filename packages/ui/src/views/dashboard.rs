//! Dashboard: search, note list, note forms and colleague settings on one page.

use dioxus::prelude::*;
use store::NoteFlag;

use super::Layout;
use crate::note_forms::{CreateNoteForm, DeleteNoteForm, EditNoteForm, SettingsForm};
use crate::note_table::NoteTable;
use crate::{DashboardView, Navbar};

#[component]
pub fn Dashboard(view: DashboardView) -> Element {
    rsx! {
        Layout {
            title: "Dashboard",
            Navbar { username: view.user.username.clone() }
            main {
                class: "dashboard",
                section {
                    class: "panel",
                    h2 { "Search" }
                    SearchForm { view: view.clone() }
                }
                section {
                    class: "panel",
                    h2 { "Notes" }
                    NoteTable { view: view.clone() }
                }
                section {
                    class: "panel forms",
                    CreateNoteForm { view: view.clone() }
                    EditNoteForm { view: view.clone() }
                    DeleteNoteForm { view: view.clone() }
                    SettingsForm { view: view.clone() }
                }
            }
        }
    }
}

/// Search criteria form, prefilled with the session's current query.
#[component]
fn SearchForm(view: DashboardView) -> Element {
    let query = view.query.clone();
    let date = query.date.clone().unwrap_or_default();

    rsx! {
        form {
            class: "search-form",
            method: "post",
            action: "/search",
            input {
                r#type: "text",
                name: "search-by-keyword",
                placeholder: "Keyword",
                value: query.keyword.clone(),
            }
            select {
                name: "search-by-user",
                option { value: "-1", selected: query.owner.is_none(), "Any owner" }
                for user in view.all_users() {
                    option {
                        value: user.id.to_string(),
                        selected: query.owner == Some(user.id),
                        {user.username.clone()}
                    }
                }
            }
            input { r#type: "date", name: "search-by-date", value: date }
            select {
                name: "search-by-flags",
                option { value: "-1", selected: query.flag.is_none(), "Any status" }
                for flag in NoteFlag::ALL {
                    option {
                        value: flag.as_i32().to_string(),
                        selected: query.flag == Some(flag),
                        {flag.label()}
                    }
                }
            }
            button { r#type: "submit", "Search" }
        }
        if !query.is_unset() {
            form {
                class: "search-reset",
                method: "post",
                action: "/search",
                input { r#type: "hidden", name: "search-by-keyword", value: "" }
                input { r#type: "hidden", name: "search-by-user", value: "-1" }
                input { r#type: "hidden", name: "search-by-date", value: "" }
                input { r#type: "hidden", name: "search-by-flags", value: "-1" }
                button { r#type: "submit", "Clear search" }
            }
        }
    }
}
