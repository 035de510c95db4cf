//! # Registration — form state, validation and submission
//!
//! [`RegistrationForm`] mirrors the five inputs of the sign-up page as raw strings.
//! [`RegistrationController::submit`] validates them locally, sends a single
//! registration request when they pass, and reports the outcome as a [`Notice`]
//! for the page to show as a toast.
//!
//! ## Validation order
//!
//! Checks short-circuit on the first failure, and a failure never touches the
//! network:
//!
//! 1. every field non-empty ([`ValidationError::MissingField`])
//! 2. phone is exactly ten ASCII digits ([`ValidationError::BadPhone`])
//! 3. password has at least six UTF-16 code units ([`ValidationError::WeakPassword`])
//! 4. role is one of the known [`Role`]s ([`ValidationError::UnknownRole`])
//!
//! ## Outcome
//!
//! | Result | Form | Session | Notice |
//! |--------|------|---------|--------|
//! | invalid input | kept | untouched | validation message |
//! | request failed | kept | untouched | [`ApiError::notification_text`] |
//! | registered | cleared | authorized with the new user | server message |

use tracing::{error, info, warn};

use crate::client::JobBoardApi;
use crate::error::{ApiError, ValidationError};
use crate::models::{Registration, Role};
use crate::routes::Destination;
use crate::session::SessionStore;

const PHONE_DIGITS: usize = 10;
const MIN_PASSWORD_LEN: usize = 6;

/// Raw contents of the registration form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    /// Label of the selected role; empty until one is picked.
    pub role: String,
}

impl RegistrationForm {
    /// Run the client-side checks and build the request body.
    pub fn validate(&self) -> Result<Registration, ValidationError> {
        let fields = [
            &self.name,
            &self.email,
            &self.phone,
            &self.password,
            &self.role,
        ];
        if fields.iter().any(|field| field.is_empty()) {
            return Err(ValidationError::MissingField);
        }
        if !is_phone_number(&self.phone) {
            return Err(ValidationError::BadPhone);
        }
        // Counted in UTF-16 units, as browsers measure input length
        if self.password.encode_utf16().count() < MIN_PASSWORD_LEN {
            return Err(ValidationError::WeakPassword);
        }
        let role: Role = self
            .role
            .parse()
            .map_err(|()| ValidationError::UnknownRole)?;

        Ok(Registration {
            name: self.name.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            role,
            password: self.password.clone(),
        })
    }

    /// Reset every field to empty.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

fn is_phone_number(phone: &str) -> bool {
    phone.len() == PHONE_DIGITS && phone.bytes().all(|b| b.is_ascii_digit())
}

/// User-facing result of a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

impl Notice {
    pub fn text(&self) -> &str {
        match self {
            Notice::Success(text) | Notice::Error(text) => text,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Notice::Success(_))
    }
}

impl From<ValidationError> for Notice {
    fn from(err: ValidationError) -> Self {
        Notice::Error(err.to_string())
    }
}

impl From<ApiError> for Notice {
    fn from(err: ApiError) -> Self {
        Notice::Error(err.notification_text())
    }
}

/// Drives the sign-up page.
pub struct RegistrationController<A, S> {
    api: A,
    session: S,
}

impl<A: JobBoardApi, S: SessionStore> RegistrationController<A, S> {
    pub fn new(api: A, session: S) -> Self {
        Self { api, session }
    }

    /// Where to go instead of showing the form, if anywhere.
    ///
    /// An authorized visitor is sent home, so entering the page never submits
    /// anything on its own.
    pub fn guard(&self) -> Option<Destination> {
        self.session
            .get()
            .is_authorized()
            .then_some(Destination::Home)
    }

    /// Validate `form` and, if it passes, register the account.
    ///
    /// `form` is cleared only when the server accepts the registration.
    pub async fn submit(&mut self, form: &mut RegistrationForm) -> Notice {
        let registration = match form.validate() {
            Ok(registration) => registration,
            Err(e) => {
                warn!("Registration rejected before submit: {}", e);
                return e.into();
            }
        };

        match self.api.register(&registration).await {
            Ok(reply) => {
                info!("Registered {} as {}", registration.email, registration.role);
                let user = reply.user.unwrap_or_else(|| registration.into_user());
                form.clear();
                self.session.authorize(user);
                Notice::Success(reply.message)
            }
            Err(e) => {
                error!("Registration failed: {:?}", e);
                e.into()
            }
        }
    }

    pub fn session(&self) -> &S {
        &self.session
    }
}
