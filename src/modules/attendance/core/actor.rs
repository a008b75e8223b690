// The authenticated caller, as handed over by the identity provider.
//
// Boundaries
// - Identity and session handling live outside this service. The pair
//   (user_id, role) is taken as given.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Employee,
    Admin,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown role {0:?}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "employee" | "user" => Ok(Role::Employee),
            "admin" => Ok(Role::Admin),
            _ => Err(UnknownRole(value.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub user_id: String,
    pub role: Role,
}

impl Actor {
    pub fn new(user_id: impl Into<String>, role: Role) -> Self {
        Self {
            user_id: user_id.into(),
            role,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Users act for themselves; admins act for anyone.
    pub fn can_act_for(&self, user_id: &str) -> bool {
        self.is_admin() || self.user_id == user_id
    }
}
