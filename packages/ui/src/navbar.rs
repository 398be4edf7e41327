use dioxus::prelude::*;

/// Top bar with the signed-in user and a logout link.
#[component]
pub fn Navbar(username: String) -> Element {
    rsx! {
        div {
            class: "navbar",
            span { class: "brand", "SharedNotes" }
            span {
                class: "navbar-user",
                "Signed in as "
                strong { {username} }
            }
            a { class: "navbar-logout", href: "/logout", "Log out" }
        }
    }
}
