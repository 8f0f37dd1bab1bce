//! Credential verification against the user list file.
//!
//! The user list is a JSON file of the form
//! `{"users": [{"username": "...", "password": "..."}]}` and is re-read
//! from disk on every login attempt, so edits take effect without a
//! restart. Comparison is plain string equality - no hashing, no lockout,
//! no rate limiting.

use std::path::Path;

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur during credential verification.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The user list file could not be read.
    #[error("failed to read user list: {0}")]
    CredentialRead(#[from] std::io::Error),

    /// The user list file is not valid JSON of the expected shape.
    #[error("failed to parse user list: {0}")]
    CredentialParse(#[from] serde_json::Error),

    /// No credential in the list matched.
    #[error("invalid credentials")]
    InvalidCredentials,
}

/// One entry in the user list file.
///
/// The password is held as a [`SecretString`] so it is redacted from any
/// `Debug` output.
#[derive(Debug, Deserialize)]
struct UserCredential {
    username: String,
    password: SecretString,
}

/// Wire shape of the user list file.
#[derive(Debug, Deserialize)]
struct UserFile {
    users: Vec<UserCredential>,
}

/// Service for verifying login credentials.
pub struct AuthService<'a> {
    users_file: &'a Path,
}

impl<'a> AuthService<'a> {
    /// Create a new auth service over the given user list file.
    #[must_use]
    pub const fn new(users_file: &'a Path) -> Self {
        Self { users_file }
    }

    /// Verify a username/password pair against the user list.
    ///
    /// The file is read fresh for this attempt. The first matching entry
    /// wins.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::CredentialRead` / `AuthError::CredentialParse`
    /// if the file is unreadable or malformed, and
    /// `AuthError::InvalidCredentials` if no entry matches.
    pub async fn verify(&self, username: &str, password: &str) -> Result<(), AuthError> {
        let raw = tokio::fs::read_to_string(self.users_file).await?;
        let file: UserFile = serde_json::from_str(&raw)?;

        file.users
            .iter()
            .find(|user| {
                user.username == username && user.password.expose_secret() == password
            })
            .map(|_| ())
            .ok_or(AuthError::InvalidCredentials)
    }
}
