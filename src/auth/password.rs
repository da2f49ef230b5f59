use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::rngs::OsRng;
use tracing::error;

pub fn hash_password(plain: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let hash = argon2
        .hash_password(plain.as_bytes(), &salt)
        .map_err(|e| {
            error!(error = %e, "argon2 hash_password error");
            anyhow::anyhow!(e.to_string())
        })?
        .to_string();
    Ok(hash)
}

pub fn verify_password(plain: &str, hash: &str) -> anyhow::Result<bool> {
    let parsed = PasswordHash::new(hash).map_err(|e| {
        error!(error = %e, "argon2 parse hash error");
        anyhow::anyhow!(e.to_string())
    })?;
    Ok(Argon2::default()
        .verify_password(plain.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_the_password_it_was_hashed_from() {
        let hash = hash_password("quattro-stagioni-91").unwrap();
        assert!(verify_password("quattro-stagioni-91", &hash).unwrap());
    }

    #[test]
    fn rejects_a_near_miss() {
        let hash = hash_password("margherita2024!").unwrap();
        assert!(!verify_password("margherita2024", &hash).unwrap());
    }

    #[test]
    fn same_password_hashes_differently_each_time() {
        let first = hash_password("diavola-extra-hot").unwrap();
        let second = hash_password("diavola-extra-hot").unwrap();
        assert_ne!(first, second);
        assert!(verify_password("diavola-extra-hot", &second).unwrap());
    }

    #[test]
    fn malformed_hash_is_an_error_not_a_mismatch() {
        assert!(verify_password("anything", "not-a-phc-string").is_err());
    }
}
