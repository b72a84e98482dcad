use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A directory record.
///
/// `id` is `None` until storage assigns one; on input it is ignored by
/// create and update. Missing text fields deserialize as empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = 1)]
    pub id: Option<i64>,
    #[serde(default)]
    #[schema(example = "alice")]
    pub username: String,
    #[serde(default)]
    #[schema(example = "a@x.com")]
    pub email: String,
    #[serde(default)]
    #[schema(example = "student")]
    pub role: String,
}

impl User {
    pub fn new(username: impl Into<String>, email: impl Into<String>, role: impl Into<String>) -> Self {
        Self { id: None, username: username.into(), email: email.into(), role: role.into() }
    }

    /// Replace the mutable fields with those of `other`, keeping `self.id`.
    pub fn replace_fields(&mut self, other: User) {
        self.username = other.username;
        self.email = other.email;
        self.role = other.role;
    }
}

impl From<models::user::Model> for User {
    fn from(m: models::user::Model) -> Self {
        Self { id: Some(m.id), username: m.username, email: m.email, role: m.role }
    }
}

/// Result of an update: either the stored record or an explicit absence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    Updated(User),
    NotFound,
}

impl UpdateOutcome {
    pub fn into_option(self) -> Option<User> {
        match self {
            UpdateOutcome::Updated(u) => Some(u),
            UpdateOutcome::NotFound => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_is_omitted_until_assigned() {
        let v = serde_json::to_value(User::new("alice", "a@x.com", "student")).unwrap();
        assert_eq!(v, serde_json::json!({"username": "alice", "email": "a@x.com", "role": "student"}));
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let u: User = serde_json::from_str(r#"{"username":"bob"}"#).unwrap();
        assert_eq!(u.id, None);
        assert_eq!(u.username, "bob");
        assert!(u.email.is_empty() && u.role.is_empty());
    }

    #[test]
    fn replace_fields_keeps_id() {
        let mut stored = User { id: Some(7), ..User::new("a", "a@x.com", "student") };
        stored.replace_fields(User { id: Some(99), ..User::new("b", "b@x.com", "admin") });
        assert_eq!(stored, User { id: Some(7), ..User::new("b", "b@x.com", "admin") });
    }
}
