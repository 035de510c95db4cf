//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod session;
pub use session::{use_api, use_session, SessionProvider, SignalSession};

pub mod toast;
pub use toast::{notify, use_toasts, ToastKind, ToastProvider};

mod form_field;
pub use form_field::FormField;
