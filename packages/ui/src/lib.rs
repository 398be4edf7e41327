//! Server-rendered pages for SharedNotes.
//!
//! Pages are Dioxus components rendered once per request with `dioxus-ssr`; there
//! is no client-side runtime. Every `render_*` function returns a complete HTML
//! document.

use chrono::{DateTime, Utc};
use dioxus::prelude::*;
use store::{Note, NoteFlag, SearchQuery, User, UserId, UserSettings};

mod navbar;
pub use navbar::Navbar;

mod note_forms;
mod note_table;

pub mod views;
use views::{Dashboard, DashboardProps, Login, LoginProps, Register, RegisterProps};

/// Everything the dashboard shows.
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardView {
    /// The signed-in user. The password hash is cleared.
    pub user: User,
    pub settings: UserSettings,
    /// Every other user, password hashes cleared.
    pub users: Vec<User>,
    /// Visible notes after the search filter, most recent first.
    pub notes: Vec<Note>,
    pub query: SearchQuery,
}

impl DashboardView {
    pub fn new(
        user: &User,
        settings: UserSettings,
        users: &[User],
        notes: Vec<Note>,
        query: SearchQuery,
    ) -> Self {
        Self {
            user: user.without_password(),
            settings,
            users: users.iter().map(User::without_password).collect(),
            notes,
            query,
        }
    }

    /// The current user followed by everyone else, by id.
    pub fn all_users(&self) -> Vec<User> {
        let mut all = Vec::with_capacity(self.users.len() + 1);
        all.push(self.user.clone());
        all.extend(self.users.iter().cloned());
        all.sort_by_key(|u| u.id);
        all
    }

    /// Username for an id, or an empty string for unknown ids.
    pub fn username(&self, id: UserId) -> &str {
        if id == self.user.id {
            return &self.user.username;
        }
        self.users
            .iter()
            .find(|u| u.id == id)
            .map(|u| u.username.as_str())
            .unwrap_or("")
    }

    /// Who besides the owner can read `note`.
    pub fn share_summary(&self, note: &Note) -> String {
        if note.share.is_empty() {
            return "Everyone".to_string();
        }
        let names: Vec<&str> = note
            .shared_with()
            .map(|id| self.username(id))
            .filter(|name| !name.is_empty())
            .collect();
        if names.is_empty() {
            "Only owner".to_string()
        } else {
            names.join(", ")
        }
    }

    pub fn owned_notes(&self) -> impl Iterator<Item = &Note> {
        self.notes.iter().filter(|n| n.is_owned_by(self.user.id))
    }
}

/// `DD/MM/YYYY`.
pub fn short_date(date: DateTime<Utc>) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Completion date for completed notes, `N/A` otherwise.
pub fn completed_date(note: &Note) -> String {
    if note.flag == NoteFlag::Completed {
        short_date(note.completed_at)
    } else {
        "N/A".to_string()
    }
}

fn render<P: Clone + 'static>(page: fn(P) -> Element, props: P) -> String {
    let mut dom = VirtualDom::new_with_props(page, props);
    dom.rebuild_in_place();
    format!(
        "<!DOCTYPE html><html lang=\"en\">{}</html>",
        dioxus_ssr::render(&dom)
    )
}

pub fn render_login(error: String) -> String {
    render(Login, LoginProps { error })
}

pub fn render_register(error: String) -> String {
    render(Register, RegisterProps { error })
}

pub fn render_dashboard(view: DashboardView) -> String {
    render(Dashboard, DashboardProps { view })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use store::OWNER_ONLY;

    fn user(id: UserId, name: &str) -> User {
        User {
            id,
            username: name.to_string(),
            password_hash: format!("$argon2id$secret-{id}"),
        }
    }

    fn note(owner: UserId, share: &[UserId], name: &str, flag: NoteFlag) -> Note {
        Note {
            owner,
            share: share.to_vec(),
            name: name.to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap(),
            completed_at: Utc.with_ymd_and_hms(2024, 3, 9, 10, 0, 0).unwrap(),
            flag,
            content: format!("{name} body"),
        }
    }

    fn view() -> DashboardView {
        let alice = user(1, "alice");
        let others = [user(2, "bob"), user(3, "carol")];
        let settings = UserSettings {
            id: 1,
            user_id: 1,
            colleagues: vec![3],
        };
        let notes = vec![
            note(1, &[OWNER_ONLY], "private plan", NoteFlag::InProgress),
            note(2, &[1, 3], "team sync", NoteFlag::Completed),
            note(3, &[], "lunch menu", NoteFlag::Note),
        ];
        DashboardView::new(&alice, settings, &others, notes, SearchQuery::default())
    }

    #[test]
    fn test_view_strips_password_hashes() {
        let view = view();
        assert!(view.user.password_hash.is_empty());
        assert!(view.users.iter().all(|u| u.password_hash.is_empty()));
    }

    #[test]
    fn test_share_summary() {
        let view = view();
        assert_eq!(view.share_summary(&view.notes[0]), "Only owner");
        assert_eq!(view.share_summary(&view.notes[1]), "alice, carol");
        assert_eq!(view.share_summary(&view.notes[2]), "Everyone");
    }

    #[test]
    fn test_dates() {
        let view = view();
        assert_eq!(short_date(view.notes[0].created_at), "01/03/2024");
        assert_eq!(completed_date(&view.notes[0]), "N/A");
        assert_eq!(completed_date(&view.notes[1]), "09/03/2024");
    }

    #[test]
    fn test_render_dashboard() {
        let html = render_dashboard(view());
        assert!(html.starts_with("<!DOCTYPE html>"));
        for name in ["private plan", "team sync", "lunch menu", "In Progress", "N/A"] {
            assert!(html.contains(name), "missing {name}");
        }
        assert!(html.contains("create-bob"));
        assert!(html.contains("settings-carol"));
        assert!(html.contains("search-by-keyword"));
        assert!(!html.contains("secret-"));
    }

    #[test]
    fn test_delete_form_lists_owned_notes_only() {
        let view = view();
        let owned: Vec<_> = view.owned_notes().map(|n| n.name.as_str()).collect();
        assert_eq!(owned, ["private plan"]);
    }

    #[test]
    fn test_render_escapes_content() {
        let mut view = view();
        view.notes[0].content = "<script>alert(1)</script>".into();
        let html = render_dashboard(view);
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_pages_share_the_document_shell() {
        for html in [
            render_login(String::new()),
            render_register(String::new()),
            render_dashboard(view()),
        ] {
            assert!(html.starts_with("<!DOCTYPE html><html lang=\"en\">"));
            assert!(html.ends_with("</html>"));
            assert!(html.contains("<head>"));
            assert!(html.contains("href=\"/statics/style.css\""));
            assert_eq!(html.matches("<html").count(), 1);
        }
    }

    #[test]
    fn test_render_login_error() {
        let html = render_login("Incorrect Password".into());
        assert!(html.contains("Incorrect Password"));
        assert!(html.contains("action=\"/login\""));

        let html = render_login(String::new());
        assert!(!html.contains("class=\"error\""));
    }

    #[test]
    fn test_render_register() {
        let html = render_register("User Already Exists.".into());
        assert!(html.contains("User Already Exists."));
        assert!(html.contains("action=\"/register\""));
    }
}
