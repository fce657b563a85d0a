use crate::errors::{RegistryError, RegistryResult};
use crate::models::User;

/// In-memory store of users, in insertion order.
///
/// Ids are assigned as `len() + 1` at creation time. Deleting a user shrinks
/// the sequence, so a later create can hand out an id that was previously
/// freed. Callers that need the id-assignment formula to hold must serialize
/// access (the server wraps the registry in a single lock).
#[derive(Debug, Clone)]
pub struct UserRegistry {
    users: Vec<User>,
}

impl UserRegistry {
    /// Create a registry seeded with the two default users.
    pub fn new() -> Self {
        Self {
            users: vec![
                User::new(1, "Alice", "alice@example.com"),
                User::new(2, "Bob", "bob@example.com"),
            ],
        }
    }

    /// Create an empty registry with no seed users.
    pub fn empty() -> Self {
        Self { users: Vec::new() }
    }

    /// All users in insertion order.
    pub fn list(&self) -> &[User] {
        &self.users
    }

    /// Look up a user by id. At most one user can match since ids are unique.
    pub fn get(&self, id: i64) -> RegistryResult<&User> {
        self.users
            .iter()
            .find(|user| user.id == id)
            .ok_or(RegistryError::NotFound { id })
    }

    /// Add a new user with a server-assigned id and return it.
    pub fn create(&mut self, name: impl Into<String>, email: impl Into<String>) -> User {
        let user = User::new(self.users.len() as i64 + 1, name, email);
        self.users.push(user.clone());
        user
    }

    /// Remove the user with the given id, shifting later users left.
    pub fn delete(&mut self, id: i64) -> RegistryResult<()> {
        let index = self
            .users
            .iter()
            .position(|user| user.id == id)
            .ok_or(RegistryError::NotFound { id })?;
        self.users.remove(index);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl Default for UserRegistry {
    fn default() -> Self {
        Self::new()
    }
}
