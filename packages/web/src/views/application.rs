use dioxus::prelude::*;

use crate::Route;

/// Landing point of the "Apply Now" action.
#[component]
pub fn Application(id: String) -> Element {
    rsx! {
        section {
            class: "application page",
            div {
                class: "container",
                h3 { "Application Form" }
                p { "Applying for job {id}." }
                Link { to: Route::JobDetails { id: id.clone() }, "Back to job" }
            }
        }
    }
}
