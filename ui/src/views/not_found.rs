use dioxus::prelude::*;

#[component]
pub fn PageNotFound(route: Vec<String>) -> Element {
    let attempted = route.join("/");

    rsx! {
        section { class: "page page-not-found",
            h1 { "Page not found" }
            p { "There is nothing at /{attempted}." }
            Link { class: "button button--primary", to: "/", "Back to home" }
        }
    }
}
