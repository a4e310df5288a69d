//! Authentication client

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;
use serde::Serialize;
use uuid::Uuid;

use threadtalk_core::User;

use crate::client::RestClient;
use crate::{Result, StoreError};

/// Sign-in/sign-up/sign-out against the identity service. Each call
/// returns a user identity or an error; session persistence across app
/// restarts is the service's concern, not this client's.
#[async_trait]
pub trait AuthClient: Send + Sync + 'static {
    async fn sign_up(&self, email: &str, password: &str) -> Result<User>;
    async fn sign_in(&self, email: &str, password: &str) -> Result<User>;
    async fn sign_out(&self) -> Result<()>;
}

#[derive(Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

/// REST-backed auth client
pub struct RestAuthClient {
    client: RestClient,
}

impl RestAuthClient {
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuthClient for RestAuthClient {
    async fn sign_up(&self, email: &str, password: &str) -> Result<User> {
        self.client
            .post_json("/auth/sign_up", &Credentials { email, password })
            .await
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<User> {
        self.client
            .post_json("/auth/sign_in", &Credentials { email, password })
            .await
            .map_err(|e| match e {
                StoreError::Api { status: 401, message } => StoreError::Auth(message),
                other => other,
            })
    }

    async fn sign_out(&self) -> Result<()> {
        let _: serde_json::Value = self
            .client
            .post_json("/auth/sign_out", &serde_json::json!({}))
            .await?;
        Ok(())
    }
}

/// In-memory auth client for tests
#[derive(Default)]
pub struct MemoryAuthClient {
    accounts: Mutex<HashMap<String, (String, User)>>,
}

impl MemoryAuthClient {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AuthClient for MemoryAuthClient {
    async fn sign_up(&self, email: &str, password: &str) -> Result<User> {
        let mut accounts = self.accounts.lock();
        if accounts.contains_key(email) {
            return Err(StoreError::Auth(format!("account exists: {email}")));
        }

        let user = User {
            id: Uuid::new_v4().to_string(),
            email: email.to_string(),
            created_at: Utc::now(),
        };
        accounts.insert(email.to_string(), (password.to_string(), user.clone()));
        Ok(user)
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<User> {
        let accounts = self.accounts.lock();
        match accounts.get(email) {
            Some((stored, user)) if stored == password => Ok(user.clone()),
            _ => Err(StoreError::Auth("invalid credentials".to_string())),
        }
    }

    async fn sign_out(&self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_sign_up_then_in() {
        let auth = MemoryAuthClient::new();

        let user = auth.sign_up("a@example.com", "hunter2").await.unwrap();
        let again = auth.sign_in("a@example.com", "hunter2").await.unwrap();
        assert_eq!(user.id, again.id);
    }

    #[tokio::test]
    async fn test_bad_credentials_rejected() {
        let auth = MemoryAuthClient::new();
        auth.sign_up("a@example.com", "hunter2").await.unwrap();

        assert!(matches!(
            auth.sign_in("a@example.com", "wrong").await,
            Err(StoreError::Auth(_))
        ));
        assert!(matches!(
            auth.sign_in("missing@example.com", "x").await,
            Err(StoreError::Auth(_))
        ));
        assert!(matches!(
            auth.sign_up("a@example.com", "other").await,
            Err(StoreError::Auth(_))
        ));
    }
}
