//! Registration page.

use dioxus::prelude::*;

use super::{ErrorMessage, Layout};

#[component]
pub fn Register(error: String) -> Element {
    rsx! {
        Layout {
            title: "Register",
            div {
                class: "auth-container",
                h1 { "Create an account" }
                ErrorMessage { message: error }
                form {
                    class: "auth-form",
                    method: "post",
                    action: "/register",
                    label { r#for: "username", "Username" }
                    input { id: "username", name: "username", r#type: "text", required: true }
                    label { r#for: "password", "Password" }
                    input { id: "password", name: "password", r#type: "password", required: true }
                    p {
                        class: "hint",
                        "No spaces, at least two numbers and one special character."
                    }
                    button { r#type: "submit", "Register" }
                }
                p {
                    "Already registered? "
                    a { href: "/login", "Log in" }
                }
            }
        }
    }
}
