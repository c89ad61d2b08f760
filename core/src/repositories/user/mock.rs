//! In-memory implementation of UserRepository for tests and local runs

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::user::{NewUserCredentials, UserCredentials};
use crate::errors::{AuthError, DomainError, PersistenceError};

use super::UserRepository;

/// Mock user repository keyed by email
pub struct MockUserRepository {
    users: Arc<RwLock<HashMap<String, UserCredentials>>>,
    next_id: AtomicU64,
    healthy: AtomicBool,
    reject_writes: AtomicBool,
}

impl MockUserRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
            next_id: AtomicU64::new(1),
            healthy: AtomicBool::new(true),
            reject_writes: AtomicBool::new(false),
        }
    }

    /// Set the value reported by `is_healthy`
    pub fn set_healthy(&self, healthy: bool) {
        self.healthy.store(healthy, Ordering::SeqCst);
    }

    /// Make every write come back unacknowledged
    pub fn set_reject_writes(&self, reject: bool) {
        self.reject_writes.store(reject, Ordering::SeqCst);
    }

    /// Current token version of `email`, if registered
    pub async fn token_version_of(&self, email: &str) -> Option<i64> {
        self.users.read().await.get(email).map(|u| u.token_version)
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

impl Default for MockUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserCredentials>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(email).cloned())
    }

    async fn create_user_credentials(&self, user: NewUserCredentials) -> Result<(), DomainError> {
        if self.reject_writes.load(Ordering::SeqCst) {
            return Err(PersistenceError::NotAcknowledged {
                operation: format!("Creating user credentials for {}", user.email),
            }
            .into());
        }

        let mut users = self.users.write().await;
        if users.contains_key(&user.email) {
            return Err(AuthError::UserAlreadyExists.into());
        }

        let id = format!("{:024x}", self.next_id.fetch_add(1, Ordering::SeqCst));
        users.insert(
            user.email.clone(),
            UserCredentials {
                id,
                email: user.email,
                password: user.password,
                token_version: user.token_version,
            },
        );
        Ok(())
    }

    async fn increment_token_version(&self, user_id: &str) -> Result<i64, DomainError> {
        if self.reject_writes.load(Ordering::SeqCst) {
            return Err(PersistenceError::NotAcknowledged {
                operation: "Incrementing token version".to_string(),
            }
            .into());
        }

        let mut users = self.users.write().await;
        match users.values_mut().find(|u| u.id == user_id) {
            Some(user) => {
                user.token_version += 1;
                Ok(user.token_version)
            }
            None => Err(PersistenceError::NoMatch {
                operation: format!("Incrementing token version of {}", user_id),
            }
            .into()),
        }
    }

    async fn is_healthy(&self) -> bool {
        self.healthy.load(Ordering::SeqCst)
    }
}
