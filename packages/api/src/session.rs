//! # Session context — who is signed in
//!
//! [`SessionState`] is the one piece of state shared between screens: whether the
//! client is authorized and, if so, which user it is. It is created unauthorized at
//! start-up and lives for as long as the app does.
//!
//! Controllers never hold the state directly. They receive something implementing
//! [`SessionStore`], so the same logic runs against a plain value in tests and a
//! reactive signal in the UI. All writes go through [`SessionStore::set`].

use crate::models::{Role, UserInfo};

/// Authorization snapshot.
///
/// Fields are private: the only states that can be built are signed out,
/// authorized with a user, and authorized without one. A user is never attached
/// to a signed-out session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    is_authorized: bool,
    user: Option<UserInfo>,
}

impl SessionState {
    /// The start-up state.
    pub fn signed_out() -> Self {
        Self::default()
    }

    /// An authorized session for `user`.
    pub fn authorized(user: UserInfo) -> Self {
        Self {
            is_authorized: true,
            user: Some(user),
        }
    }

    /// Authorized by a flow that did not hand over a profile.
    pub fn authorized_without_user() -> Self {
        Self {
            is_authorized: true,
            user: None,
        }
    }

    pub fn is_authorized(&self) -> bool {
        self.is_authorized
    }

    pub fn user(&self) -> Option<&UserInfo> {
        self.user.as_ref()
    }

    /// Role of the signed-in user, if any.
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|user| user.role)
    }
}

/// A cell holding the current [`SessionState`].
pub trait SessionStore {
    fn get(&self) -> SessionState;
    fn set(&mut self, next: SessionState);

    /// Mark the session authorized for `user`.
    fn authorize(&mut self, user: UserInfo) {
        self.set(SessionState::authorized(user));
    }

    /// Back to the signed-out state.
    fn clear(&mut self) {
        self.set(SessionState::signed_out());
    }
}

impl SessionStore for SessionState {
    fn get(&self) -> SessionState {
        self.clone()
    }

    fn set(&mut self, next: SessionState) {
        *self = next;
    }
}

impl<S: SessionStore + ?Sized> SessionStore for &mut S {
    fn get(&self) -> SessionState {
        (**self).get()
    }

    fn set(&mut self, next: SessionState) {
        (**self).set(next);
    }
}
