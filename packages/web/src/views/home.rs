use dioxus::prelude::*;
use ui::use_session;

use crate::Route;

#[component]
pub fn Home() -> Element {
    let session = use_session();
    let state = session();

    rsx! {
        section {
            class: "home page",
            div {
                class: "container",
                h1 { "JobZee" }
                if let Some(user) = state.user().cloned() {
                    p { "Signed in as {user.name} ({user.role})" }
                } else if state.is_authorized() {
                    p { "You are signed in." }
                } else {
                    p { "Create an account to browse and apply for jobs." }
                    div {
                        class: "home__actions",
                        Link { to: Route::Register {}, "Register" }
                        Link { to: Route::Login {}, "Login" }
                    }
                }
            }
        }
    }
}
