//! # Account models
//!
//! Two representations of a job-board account:
//!
//! ## [`Registration`]
//!
//! The validated payload sent once to the registration endpoint. It is the only
//! type that carries the password, it is `Serialize` only, and it is consumed by
//! [`Registration::into_user`] so the password cannot outlive the request.
//!
//! ## [`UserInfo`]
//!
//! What the client keeps in the session: name, email, phone and [`Role`]. It is
//! `Deserialize` so it can be read back from the server's `user` object, which
//! carries extra fields (`_id`, timestamps) that are ignored.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Kind of account. Employers post jobs, job seekers apply to them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Employer,
    #[serde(rename = "Job Seeker")]
    JobSeeker,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::Employer, Role::JobSeeker];

    /// Wire and display label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Employer => "Employer",
            Role::JobSeeker => "Job Seeker",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL.into_iter().find(|role| role.as_str() == s).ok_or(())
    }
}

/// Validated registration request body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Registration {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub role: Role,
    pub password: String,
}

impl Registration {
    /// Drop the password and keep what the session needs.
    pub fn into_user(self) -> UserInfo {
        UserInfo {
            name: self.name,
            email: self.email,
            phone: self.phone,
            role: self.role,
        }
    }
}

/// Account information held client-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub name: String,
    pub email: String,
    #[serde(default, deserialize_with = "phone_from_json")]
    pub phone: String,
    pub role: Role,
}

/// The server stores phone numbers as numbers; accept either form.
fn phone_from_json<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => s,
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_labels() {
        assert_eq!("Employer".parse::<Role>(), Ok(Role::Employer));
        assert_eq!("Job Seeker".parse::<Role>(), Ok(Role::JobSeeker));
        assert!("Recruiter".parse::<Role>().is_err());
        assert!("".parse::<Role>().is_err());
        assert_eq!(
            serde_json::to_string(&Role::JobSeeker).unwrap(),
            "\"Job Seeker\""
        );
    }

    #[test]
    fn test_registration_body_shape() {
        let registration = Registration {
            name: "Ada".into(),
            phone: "0123456789".into(),
            email: "ada@example.com".into(),
            role: Role::Employer,
            password: "secret1".into(),
        };
        let body = serde_json::to_value(&registration).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "name": "Ada",
                "phone": "0123456789",
                "email": "ada@example.com",
                "role": "Employer",
                "password": "secret1",
            })
        );

        let user = registration.into_user();
        assert_eq!(user.name, "Ada");
        assert_eq!(user.role, Role::Employer);
    }

    #[test]
    fn test_user_from_server_json() {
        let user: UserInfo = serde_json::from_value(serde_json::json!({
            "_id": "65f0c1",
            "name": "Grace",
            "email": "grace@example.com",
            "phone": 9876543210u64,
            "role": "Job Seeker",
            "createdAt": "2024-03-01T10:00:00.000Z",
        }))
        .unwrap();
        assert_eq!(user.phone, "9876543210");
        assert_eq!(user.role, Role::JobSeeker);
    }
}
