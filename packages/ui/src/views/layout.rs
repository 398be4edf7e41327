use dioxus::prelude::*;

const STYLESHEET: &str = "/statics/style.css";

/// `<head>` and `<body>` shared by every page. The `<html>` element is added by
/// [`crate::render`].
#[component]
pub fn Layout(#[props(into)] title: String, children: Element) -> Element {
    rsx! {
        head {
            meta { charset: "utf-8" }
            meta { name: "viewport", content: "width=device-width, initial-scale=1" }
            title { {title} }
            link { rel: "stylesheet", href: STYLESHEET }
        }
        body {
            {children}
        }
    }
}
