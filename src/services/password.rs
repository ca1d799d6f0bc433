use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, SaltString},
    Argon2, PasswordHasher, PasswordVerifier,
};

use crate::error::{AppError, AppResult};

/// One-way salted hashing and verification of passwords.
///
/// Argon2id in PHC string format. Each hash uses a fresh random salt, so the
/// same plaintext produces a different string on every call; comparison must
/// go through [`CredentialHasher::verify`], never string equality.
#[derive(Clone, Default)]
pub struct CredentialHasher {
    argon2: Argon2<'static>,
}

impl CredentialHasher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hashes a plaintext password into a storable PHC string
    pub fn hash(&self, plaintext: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon2
            .hash_password(plaintext.as_bytes(), &salt)
            .map_err(|e| AppError::Internal(format!("Password hashing failed: {}", e)))?;

        Ok(hash.to_string())
    }

    /// Verifies a plaintext password against a stored PHC string.
    ///
    /// Returns `Ok(false)` on a credential mismatch. An error means the stored
    /// credential is malformed or the hashing primitive failed, not that the
    /// password was wrong.
    pub fn verify(&self, plaintext: &str, stored: &str) -> AppResult<bool> {
        let parsed = PasswordHash::new(stored)
            .map_err(|e| AppError::Internal(format!("Stored credential is malformed: {}", e)))?;

        match self.argon2.verify_password(plaintext.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(AppError::Internal(format!(
                "Password verification failed: {}",
                e
            ))),
        }
    }
}
