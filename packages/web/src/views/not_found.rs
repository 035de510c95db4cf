use dioxus::prelude::*;

use crate::Route;

/// Target of failed lookups.
#[component]
pub fn NotFound() -> Element {
    rsx! {
        section {
            class: "not-found page",
            div {
                class: "container",
                h2 { "Page not found" }
                p { "The page you were looking for doesn't exist or is no longer available." }
                Link { to: Route::Home {}, "Return to Home Page" }
            }
        }
    }
}

/// Any path no other route matches.
#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    tracing::warn!("No route for /{}", segments.join("/"));

    rsx! {
        NotFound {}
    }
}
