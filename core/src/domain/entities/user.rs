//! User entity representing a registered TaskDeck account.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role assigned to every account at registration
pub const DEFAULT_ROLE: &str = "User";

/// User entity representing a registered account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier, immutable after creation
    pub id: Uuid,

    /// Unique display name
    pub username: String,

    /// Unique email address used as the login identifier
    pub email: String,

    /// Password hash produced by the configured hasher
    pub password_hash: String,

    /// Roles granted to this account
    pub roles: Vec<String>,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new user with the default role
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            username: username.into(),
            email: email.into(),
            password_hash: password_hash.into(),
            roles: vec![DEFAULT_ROLE.to_string()],
            created_at: now,
            updated_at: now,
        }
    }

    /// Grants a role if the user does not already hold it
    pub fn assign_role(&mut self, role: impl Into<String>) {
        let role = role.into();
        if !self.roles.contains(&role) {
            self.roles.push(role);
            self.updated_at = Utc::now();
        }
    }

    /// Checks whether the user holds a role
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}
