use dioxus::prelude::*;
use store::{Note, UserId};

use crate::{completed_date, short_date, DashboardView};

fn row_class(note: &Note, user: UserId) -> &'static str {
    if note.is_owned_by(user) {
        "note owned"
    } else {
        "note"
    }
}

/// The filtered notes, most recent first.
#[component]
pub fn NoteTable(view: DashboardView) -> Element {
    if view.notes.is_empty() {
        return rsx! {
            p { class: "empty", "No notes to show." }
        };
    }

    rsx! {
        table {
            class: "notes",
            thead {
                tr {
                    th { "#" }
                    th { "Name" }
                    th { "Owner" }
                    th { "Shared with" }
                    th { "Status" }
                    th { "Created" }
                    th { "Completed" }
                    th { "Content" }
                }
            }
            tbody {
                for (index, note) in view.notes.iter().enumerate() {
                    tr {
                        key: "{index}",
                        class: row_class(note, view.user.id),
                        td { {(index + 1).to_string()} }
                        td { {note.name.clone()} }
                        td { {view.username(note.owner).to_string()} }
                        td { {view.share_summary(note)} }
                        td { {note.flag.label()} }
                        td { {short_date(note.created_at)} }
                        td { {completed_date(note)} }
                        td { class: "content", {note.content.clone()} }
                    }
                }
            }
        }
    }
}
