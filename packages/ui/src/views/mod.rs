mod layout;
pub use layout::Layout;

mod login;
pub use login::{Login, LoginProps};

mod register;
pub use register::{Register, RegisterProps};

mod dashboard;
pub use dashboard::{Dashboard, DashboardProps};

use dioxus::prelude::*;

/// Flash message above a form; renders nothing when `message` is empty.
#[component]
pub fn ErrorMessage(message: String) -> Element {
    if message.is_empty() {
        return rsx! {};
    }
    rsx! {
        p { class: "error", role: "alert", {message} }
    }
}
