//! Login page.

use dioxus::prelude::*;

use super::{ErrorMessage, Layout};

#[component]
pub fn Login(error: String) -> Element {
    rsx! {
        Layout {
            title: "Log in",
            div {
                class: "auth-container",
                h1 { "SharedNotes" }
                ErrorMessage { message: error }
                form {
                    class: "auth-form",
                    method: "post",
                    action: "/login",
                    label { r#for: "username", "Username" }
                    input { id: "username", name: "username", r#type: "text", required: true }
                    label { r#for: "password", "Password" }
                    input { id: "password", name: "password", r#type: "password", required: true }
                    button { r#type: "submit", "Log in" }
                }
                p {
                    "No account yet? "
                    a { href: "/register", "Register" }
                }
            }
        }
    }
}
