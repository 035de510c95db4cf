//! Session context and API client hooks for the UI.

use api::{HttpApi, SessionState, SessionStore};
use dioxus::prelude::*;

/// Get the current session.
/// Returns a signal that updates when the user registers or signs out.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// Get the client for the remote API.
pub fn use_api() -> HttpApi {
    use_context::<HttpApi>()
}

/// Provider component that owns the session and the API client.
/// Wrap your app with this component so every page sees the same session.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let session = use_signal(SessionState::default);
    use_context_provider(|| session);
    use_context_provider(|| {
        let api = HttpApi::from_env();
        tracing::info!("Using API at {}", api.config().base_url());
        api
    });

    rsx! {
        {children}
    }
}

/// [`SessionStore`] backed by the session signal, so controllers write straight
/// into the reactive state.
#[derive(Clone, Copy)]
pub struct SignalSession(Signal<SessionState>);

impl SignalSession {
    pub fn new(signal: Signal<SessionState>) -> Self {
        Self(signal)
    }
}

impl SessionStore for SignalSession {
    fn get(&self) -> SessionState {
        self.0.read().clone()
    }

    fn set(&mut self, next: SessionState) {
        self.0.set(next);
    }
}
