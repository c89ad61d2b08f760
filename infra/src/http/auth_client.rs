//! Client for the auth API, used by the auction API's bearer-token guard

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use gavel_core::errors::DomainError;
use gavel_core::services::transport::{AuthServiceHealth, TokenValidator};
use gavel_shared::AuthClientConfig;

use crate::InfrastructureError;

#[derive(Debug, Serialize)]
struct ValidateRequest<'a> {
    token: &'a str,
}

#[derive(Debug, Deserialize)]
struct ValidateReply {
    #[serde(rename = "isValid", default)]
    is_valid: bool,
}

#[derive(Debug, Deserialize)]
struct MonitorReply {
    #[serde(default)]
    status: String,
}

/// reqwest-backed client for `/auth/validate` and `/monitor`
#[derive(Debug, Clone)]
pub struct RemoteAuthClient {
    http: reqwest::Client,
    config: AuthClientConfig,
}

impl RemoteAuthClient {
    pub fn new(config: AuthClientConfig) -> Result<Self, InfrastructureError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { http, config })
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }
}

fn transport_error(context: &str, err: reqwest::Error) -> DomainError {
    DomainError::Internal {
        message: format!("{}: {}", context, err),
    }
}

#[async_trait]
impl TokenValidator for RemoteAuthClient {
    async fn validate_token(&self, token: &str) -> Result<bool, DomainError> {
        let response = self
            .http
            .post(self.config.validate_url())
            .json(&ValidateRequest { token })
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Token validation failed");
                transport_error("Token validation request failed", e)
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Ok(false);
        }
        if !status.is_success() {
            tracing::error!(%status, "Token validation failed");
            return Err(DomainError::Internal {
                message: format!("Auth service answered {}", status),
            });
        }

        let reply: ValidateReply = response
            .json()
            .await
            .map_err(|e| transport_error("Unreadable token validation reply", e))?;
        Ok(reply.is_valid)
    }
}

#[async_trait]
impl AuthServiceHealth for RemoteAuthClient {
    async fn is_healthy(&self) -> bool {
        let response = match self.http.get(self.config.monitor_url()).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(error = %e, "Auth API health check failed");
                return false;
            }
        };

        match response.json::<MonitorReply>().await {
            Ok(reply) => reply.status == "ok",
            Err(e) => {
                tracing::error!(error = %e, "Auth API health check failed");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unreachable_client() -> RemoteAuthClient {
        // Port 9 (discard) is closed on test hosts, so connects fail fast
        RemoteAuthClient::new(AuthClientConfig::new("http://127.0.0.1:9")).unwrap()
    }

    #[test]
    fn test_reply_parsing() {
        let reply: ValidateReply =
            serde_json::from_str(r#"{"isValid":true,"user":{"sub":"x"}}"#).unwrap();
        assert!(reply.is_valid);

        let reply: ValidateReply = serde_json::from_str("{}").unwrap();
        assert!(!reply.is_valid);

        let reply: MonitorReply = serde_json::from_str(r#"{"status":"fail"}"#).unwrap();
        assert_eq!(reply.status, "fail");
    }

    #[test]
    fn test_request_body_shape() {
        let body = serde_json::to_value(ValidateRequest { token: "abc" }).unwrap();
        assert_eq!(body, serde_json::json!({ "token": "abc" }));
    }

    #[tokio::test]
    async fn test_stalled_service_times_out() {
        // Accepts connections but never answers
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let accept = tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((socket, _)) = listener.accept().await {
                held.push(socket);
            }
        });

        let client = RemoteAuthClient::new(
            AuthClientConfig::new(format!("http://{}", addr)).with_timeout_secs(1),
        )
        .unwrap();

        let bound = Duration::from_secs(5);
        let result = tokio::time::timeout(bound, client.validate_token("abc"))
            .await
            .expect("validation did not time out");
        assert!(result.is_err());

        let healthy = tokio::time::timeout(bound, client.is_healthy())
            .await
            .expect("health check did not time out");
        assert!(!healthy);

        accept.abort();
    }

    #[tokio::test]
    async fn test_unreachable_service() {
        let client = unreachable_client();
        assert_eq!(client.base_url(), "http://127.0.0.1:9");
        assert!(client.validate_token("abc").await.is_err());
        assert!(!client.is_healthy().await);
    }
}
