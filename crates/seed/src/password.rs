//! Demo password hashing.
//!
//! The product verifies logins against PHC-format pbkdf2-sha256 hashes, so
//! the seeder must store the same shape.

use pbkdf2::password_hash::rand_core::OsRng;
use pbkdf2::password_hash::{PasswordHasher, SaltString};
use pbkdf2::Pbkdf2;

use crate::error::SeedError;

/// Hash a password into a PHC `$pbkdf2-sha256$…` string with a fresh salt.
pub fn hash_password(password: &str) -> Result<String, SeedError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Pbkdf2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| SeedError::PasswordHash(e.to_string()))?;
    Ok(hash.to_string())
}

// ============================================================
// Unit tests
// ============================================================
#[cfg(test)]
mod tests {
    use super::*;
    use pbkdf2::password_hash::{PasswordHash, PasswordVerifier};

    #[test]
    fn hash_is_phc_pbkdf2_sha256() {
        let hash = hash_password("Demo1234!").unwrap();
        assert!(hash.starts_with("$pbkdf2-sha256$"), "got {hash}");
    }

    #[test]
    fn hash_verifies_against_original_password() {
        let hash = hash_password("Demo1234!").unwrap();
        let parsed = PasswordHash::new(&hash).unwrap();
        assert!(Pbkdf2.verify_password(b"Demo1234!", &parsed).is_ok());
        assert!(Pbkdf2.verify_password(b"wrong", &parsed).is_err());
    }

    #[test]
    fn salts_differ_between_hashes() {
        let a = hash_password("Demo1234!").unwrap();
        let b = hash_password("Demo1234!").unwrap();
        assert_ne!(a, b);
    }
}
