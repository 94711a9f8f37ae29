//! Viewer session
//!
//! The viewer's identity and auth token travel as an explicit value instead of
//! being read from ambient storage inside the core logic.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::config::Config;
use crate::error::{Error, Result};

/// Dashboard role of the viewer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    Student,
    Teacher,
    Admin,
}

impl FromStr for UserRole {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "student" => Ok(UserRole::Student),
            "teacher" => Ok(UserRole::Teacher),
            "admin" => Ok(UserRole::Admin),
            other => Err(Error::Validation(format!("Unknown user role: {}", other))),
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Student => write!(f, "student"),
            UserRole::Teacher => write!(f, "teacher"),
            UserRole::Admin => write!(f, "admin"),
        }
    }
}

/// Authenticated (or anonymous) viewer
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: Option<String>,
    pub user_id: Option<String>,
    pub role: UserRole,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("user_id", &self.user_id)
            .field("role", &self.role)
            .finish()
    }
}

impl Session {
    /// Create a session, treating blank strings as absent
    pub fn new(token: Option<String>, user_id: Option<String>, role: UserRole) -> Self {
        Self {
            token: non_blank(token),
            user_id: non_blank(user_id),
            role,
        }
    }

    /// Anonymous session with no token and no identity
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Build the session from the session values in configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        let role = match config.user_role.as_deref() {
            Some(label) => label.parse()?,
            None => UserRole::default(),
        };
        Ok(Self::new(
            config.user_token.clone(),
            config.user_id.clone(),
            role,
        ))
    }

    /// Copy of this session with the viewer identity replaced
    pub fn with_user_id(&self, user_id: impl Into<String>) -> Self {
        Self {
            user_id: non_blank(Some(user_id.into())),
            ..self.clone()
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
