//! MongoDB implementation of the UserRepository trait.

use async_trait::async_trait;
use bson::doc;
use bson::oid::ObjectId;
use mongodb::options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument};
use mongodb::{Collection, Database, IndexModel};

use gavel_core::domain::entities::user::{NewUserCredentials, UserCredentials};
use gavel_core::errors::{AuthError, DomainError, PersistenceError};
use gavel_core::repositories::UserRepository;

use super::documents::UserCredentialsDocument;
use super::errors::{is_duplicate_key, read_error, write_error};
use crate::database::connection::ping;
use crate::database::AUTH_COLLECTION_NAME;
use crate::InfrastructureError;

/// MongoDB implementation of UserRepository
pub struct MongoUserRepository {
    database: Database,
    collection: Collection<UserCredentialsDocument>,
}

impl MongoUserRepository {
    /// Create a repository over the `user_credentials` collection of `database`
    pub fn new(database: Database) -> Self {
        let collection = database.collection::<UserCredentialsDocument>(AUTH_COLLECTION_NAME);
        Self {
            database,
            collection,
        }
    }

    /// Create the unique index on `email`
    ///
    /// Closes the window between the existence check and the insert during
    /// concurrent registrations.
    pub async fn ensure_indexes(&self) -> Result<(), InfrastructureError> {
        let index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        self.collection.create_index(index, None).await?;
        Ok(())
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserCredentials>, DomainError> {
        let document = self
            .collection
            .find_one(doc! { "email": email }, None)
            .await
            .map_err(|e| read_error("Finding user credentials", e))?;

        Ok(document.map(UserCredentialsDocument::into_entity))
    }

    async fn create_user_credentials(&self, user: NewUserCredentials) -> Result<(), DomainError> {
        let email = user.email.clone();
        let document = UserCredentialsDocument::new_account(user);

        match self.collection.insert_one(&document, None).await {
            Ok(_) => Ok(()),
            Err(e) if is_duplicate_key(&e) => Err(AuthError::UserAlreadyExists.into()),
            Err(e) => {
                tracing::error!(email = %email, error = %e, "Failed to create user credentials");
                Err(write_error(
                    &format!("Creating user credentials for {}", email),
                    e,
                ))
            }
        }
    }

    async fn increment_token_version(&self, user_id: &str) -> Result<i64, DomainError> {
        let operation = format!("Incrementing token version of {}", user_id);
        let object_id = ObjectId::parse_str(user_id).map_err(|_| PersistenceError::NoMatch {
            operation: operation.clone(),
        })?;

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        let updated = self
            .collection
            .find_one_and_update(
                doc! { "_id": object_id },
                doc! { "$inc": { "tokenVersion": 1 } },
                options,
            )
            .await
            .map_err(|e| write_error(&operation, e))?
            .ok_or(PersistenceError::NoMatch { operation })?;

        Ok(updated.token_version)
    }

    async fn is_healthy(&self) -> bool {
        ping(&self.database).await
    }
}
