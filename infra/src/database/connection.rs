//! MongoDB client management

use bson::{doc, Bson, Document};
use gavel_shared::DatabaseConfig;
use mongodb::{Client, Database};

use crate::InfrastructureError;

/// Connected client plus the database a service works in
#[derive(Clone, Debug)]
pub struct MongoConnection {
    client: Client,
    database: Database,
}

impl MongoConnection {
    /// Connect and verify the server answers a `ping`
    ///
    /// # Errors
    /// Returns `InfrastructureError::Database` if the URL is invalid or the
    /// server cannot be reached.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, InfrastructureError> {
        let client = Client::with_uri_str(&config.url).await?;
        let database = client.database(&config.database_name);

        database.run_command(doc! { "ping": 1 }, None).await?;
        tracing::debug!(database = %config.database_name, "Connected to MongoDB");

        Ok(Self { client, database })
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn database(&self) -> Database {
        self.database.clone()
    }
}

/// Liveness probe shared by the repositories
///
/// Errors are logged and reported as unhealthy.
pub async fn ping(database: &Database) -> bool {
    match database.run_command(doc! { "ping": 1 }, None).await {
        Ok(reply) => ping_ok(&reply),
        Err(e) => {
            tracing::error!(error = %e, "Health check failed");
            false
        }
    }
}

/// Whether a command reply carries `ok: 1`, in any numeric encoding
pub(crate) fn ping_ok(reply: &Document) -> bool {
    match reply.get("ok") {
        Some(Bson::Double(v)) => *v == 1.0,
        Some(Bson::Int32(v)) => *v == 1,
        Some(Bson::Int64(v)) => *v == 1,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ping_ok_accepts_numeric_encodings() {
        assert!(ping_ok(&doc! { "ok": 1.0 }));
        assert!(ping_ok(&doc! { "ok": 1 }));
        assert!(ping_ok(&doc! { "ok": 1_i64 }));
    }

    #[test]
    fn test_ping_ok_rejects_failures() {
        assert!(!ping_ok(&doc! { "ok": 0.0 }));
        assert!(!ping_ok(&doc! { "errmsg": "unauthorized" }));
    }

    #[tokio::test]
    async fn test_connect_with_invalid_url() {
        let config = DatabaseConfig::new("invalid://url", "authdb");
        assert!(MongoConnection::connect(&config).await.is_err());
    }
}
