//! Read-only access to the remote user directory.
//!
//! The response body is treated as untrusted: it is decoded into transport
//! DTOs first and then mapped into domain records, so a payload of the wrong
//! shape surfaces as [`DirectoryError::MalformedResponse`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;
use serde_json::{Map, Value};
use shared::{Address, UserId, UserRecord};
use thiserror::Error;
use tracing::{debug, info};

const MAX_ERROR_BODY_CHARS: usize = 256;

#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("failed to reach user directory: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("user directory returned {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("malformed user directory response: {0}")]
    MalformedResponse(String),
}

#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn fetch_users(&self) -> Result<Vec<UserRecord>, DirectoryError>;
}

pub struct HttpUserDirectory {
    http: Client,
    endpoint: Url,
}

impl HttpUserDirectory {
    pub fn new(endpoint: Url, timeout: Duration) -> Result<Self, DirectoryError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl UserDirectory for HttpUserDirectory {
    async fn fetch_users(&self) -> Result<Vec<UserRecord>, DirectoryError> {
        debug!(endpoint = %self.endpoint, "fetching user directory");
        let response = self
            .http
            .get(self.endpoint.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;
        if !status.is_success() {
            let text = String::from_utf8_lossy(&body);
            return Err(DirectoryError::Status {
                status,
                body: text.chars().take(MAX_ERROR_BODY_CHARS).collect(),
            });
        }

        let records = decode_users(&body)?;
        info!(count = records.len(), endpoint = %self.endpoint, "user directory loaded");
        Ok(records)
    }
}

/// Decodes a directory payload: a JSON array of user objects.
pub fn decode_users(body: &[u8]) -> Result<Vec<UserRecord>, DirectoryError> {
    let users: Vec<UserDto> = serde_json::from_slice(body)
        .map_err(|err| DirectoryError::MalformedResponse(err.to_string()))?;
    Ok(users.into_iter().map(UserDto::into_domain).collect())
}

#[derive(Debug, Deserialize)]
struct UserDto {
    id: i64,
    name: String,
    username: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    address: AddressDto,
    #[serde(default)]
    phone: String,
    #[serde(default)]
    website: String,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

#[derive(Debug, Default, Deserialize)]
struct AddressDto {
    #[serde(default)]
    street: String,
    #[serde(default)]
    suite: String,
    #[serde(default)]
    city: String,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl UserDto {
    fn into_domain(self) -> UserRecord {
        UserRecord {
            id: UserId(self.id),
            name: self.name,
            username: self.username,
            email: self.email,
            address: Address {
                street: self.address.street,
                suite: self.address.suite,
                city: self.address.city,
                extra: self.address.extra,
            },
            phone: self.phone,
            website: self.website,
            extra: self.extra,
        }
    }
}

#[cfg(test)]
#[path = "tests/directory_tests.rs"]
mod tests;
