//! User fixtures for creating in-memory test data.

use chrono::{DateTime, Utc};
use entity::user;

pub const DEFAULT_NAME: &str = "Test User";
pub const DEFAULT_EMAIL: &str = "test.user@example.com";

/// Creates a user model with default values and a zero balance.
pub fn entity() -> user::Model {
    entity_builder().build()
}

/// Creates a user entity builder for customization.
///
/// # Example
///
/// ```rust,ignore
/// let user = fixture::user::entity_builder().id(7).exp(320).build();
/// ```
pub fn entity_builder() -> UserEntityBuilder {
    UserEntityBuilder {
        id: 1,
        name: DEFAULT_NAME.to_string(),
        email: DEFAULT_EMAIL.to_string(),
        admin: false,
        exp: 0,
        created_at: DateTime::<Utc>::UNIX_EPOCH,
    }
}

/// Builder for in-memory user models.
pub struct UserEntityBuilder {
    id: i32,
    name: String,
    email: String,
    admin: bool,
    exp: i64,
    created_at: DateTime<Utc>,
}

impl UserEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn admin(mut self, admin: bool) -> Self {
        self.admin = admin;
        self
    }

    pub fn exp(mut self, exp: i64) -> Self {
        self.exp = exp;
        self
    }

    pub fn build(self) -> user::Model {
        user::Model {
            id: self.id,
            name: self.name,
            email: self.email,
            admin: self.admin,
            exp: self.exp,
            created_at: self.created_at,
        }
    }
}
