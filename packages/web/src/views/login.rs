//! Login landing page. Signing in itself is handled by the account service.

use dioxus::prelude::*;

use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    rsx! {
        section {
            class: "auth-page",
            div {
                class: "container",
                div {
                    class: "header",
                    h1 { class: "brand", "JobZee" }
                    h3 { "Login to your account" }
                }
                p { "You need to be signed in to view job details." }
                Link { to: Route::Register {}, "Register Now" }
            }
        }
    }
}
