mod home;
pub use home::Home;

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod job_details;
pub use job_details::JobDetails;

mod application;
pub use application::Application;

mod not_found;
pub use not_found::{NotFound, PageNotFound};
