use api::Destination;
use dioxus::prelude::*;

use ui::{SessionProvider, ToastProvider};
use views::{Application, Home, JobDetails, Login, NotFound, PageNotFound, Register};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/register")]
    Register {},
    #[route("/login")]
    Login {},
    #[route("/job/:id")]
    JobDetails { id: String },
    #[route("/application/:id")]
    Application { id: String },
    #[route("/notfound")]
    NotFound {},
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

impl From<Destination> for Route {
    fn from(destination: Destination) -> Self {
        match destination {
            Destination::Home => Route::Home {},
            Destination::Login => Route::Login {},
            Destination::NotFound => Route::NotFound {},
            Destination::Application { job_id } => Route::Application { id: job_id },
        }
    }
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::init(tracing::Level::INFO).ok();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider {
            ToastProvider {
                Router::<Route> {}
            }
        }
    }
}
