//! Toast notifications.
//!
//! Toasts live in a `Signal<Toasts>` provided by [`ToastProvider`]. Pages push
//! through [`notify`]; each toast removes itself after [`TOAST_DURATION`] or when
//! clicked.

use std::time::Duration;

use api::Notice;
use dioxus::core::spawn_forever;
use dioxus::prelude::*;

const TOAST_CSS: Asset = asset!("/assets/styling/toast.css");

pub const TOAST_DURATION: Duration = Duration::from_secs(4);

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct Toasts {
    pub entries: Vec<Toast>,
    next_id: u64,
}

impl Toasts {
    /// Queue a toast and return its id.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Toast {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|toast| toast.id != id);
    }
}

pub fn use_toasts() -> Signal<Toasts> {
    use_context::<Signal<Toasts>>()
}

/// Show `notice` as a toast and schedule its removal.
pub fn notify(toasts: &mut Signal<Toasts>, notice: &Notice) {
    let kind = if notice.is_success() {
        ToastKind::Success
    } else {
        ToastKind::Error
    };
    let id = toasts.write().push(kind, notice.text());

    // Outlives the page that raised it
    let mut toasts = *toasts;
    spawn_forever(async move {
        #[cfg(target_arch = "wasm32")]
        gloo_timers::future::sleep(TOAST_DURATION).await;
        #[cfg(not(target_arch = "wasm32"))]
        tokio::time::sleep(TOAST_DURATION).await;

        toasts.write().dismiss(id);
    });
}

/// Provides the toast queue and renders it above the page.
#[component]
pub fn ToastProvider(children: Element) -> Element {
    let mut toasts = use_context_provider(|| Signal::new(Toasts::default()));
    let entries = toasts().entries.clone();

    rsx! {
        document::Stylesheet { href: TOAST_CSS }

        {children}

        div {
            class: "toast-stack",
            for toast in entries {
                div {
                    key: "{toast.id}",
                    class: match toast.kind {
                        ToastKind::Success => "toast toast--success",
                        ToastKind::Error => "toast toast--error",
                    },
                    role: "status",
                    onclick: move |_| toasts.write().dismiss(toast.id),
                    "{toast.message}"
                }
            }
        }
    }
}
