//! In-memory user repository

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use taskgate_domain::error::{Error, Result};
use taskgate_domain::ports::UserRepository;
use taskgate_domain::{NewUser, User};

use super::IdSequence;

/// User repository keeping records in a concurrent map
///
/// A secondary email index enforces uniqueness atomically.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    ids: IdSequence,
    users: DashMap<i64, User>,
    by_email: DashMap<String, i64>,
}

impl InMemoryUserRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let Some(id) = self.by_email.get(email).map(|entry| *entry.value()) else {
            return Ok(None);
        };
        Ok(self.users.get(&id).map(|entry| entry.value().clone()))
    }

    async fn find_user_by_id(&self, id: i64) -> Result<Option<User>> {
        Ok(self.users.get(&id).map(|entry| entry.value().clone()))
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        let mut users: Vec<User> = self
            .users
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        users.sort_by_key(|user| user.id);
        Ok(users)
    }

    async fn create_user(&self, user: NewUser) -> Result<User> {
        match self.by_email.entry(user.email.clone()) {
            Entry::Occupied(_) => Err(Error::invalid_argument(format!(
                "Email already registered: {}",
                user.email
            ))),
            Entry::Vacant(slot) => {
                let id = self.ids.next();
                let created = User {
                    id,
                    first_name: user.first_name,
                    last_name: user.last_name,
                    email: user.email,
                    password_hash: user.password_hash,
                    role: user.role,
                    created_at: Utc::now(),
                };
                self.users.insert(id, created.clone());
                slot.insert(id);
                Ok(created)
            }
        }
    }

    async fn update_user(&self, user: User) -> Result<User> {
        let Some(previous_email) = self.users.get(&user.id).map(|entry| entry.email.clone()) else {
            return Err(Error::not_found(format!("User {}", user.id)));
        };
        if previous_email != user.email {
            match self.by_email.entry(user.email.clone()) {
                Entry::Occupied(_) => {
                    return Err(Error::invalid_argument(format!(
                        "Email already registered: {}",
                        user.email
                    )));
                }
                Entry::Vacant(slot) => {
                    slot.insert(user.id);
                }
            }
            self.by_email.remove(&previous_email);
        }
        self.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn delete_user(&self, id: i64) -> Result<bool> {
        let Some((_, user)) = self.users.remove(&id) else {
            return Ok(false);
        };
        self.by_email.remove(&user.email);
        Ok(true)
    }
}
