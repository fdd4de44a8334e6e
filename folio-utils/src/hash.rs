use bcrypt::{hash, verify};

/// Hash a password using bcrypt
///
/// # Arguments
/// * `password` - The plaintext password to hash
///
/// # Returns
/// * `String` - The hashed password
///
/// # Example
/// ```
/// use folio_utils::hash::bcrypt_hash;
///
/// let hashed = bcrypt_hash("my_password");
/// ```
pub fn bcrypt_hash(password: &str) -> String {
    // Using unwrap here since bcrypt errors are very rare with valid input
    hash(password.as_bytes(), 8).unwrap()
}

/// Compare a plaintext password against a hashed password
///
/// # Arguments
/// * `password` - The plaintext password to check
/// * `hash` - The hashed password to compare against
///
/// # Returns
/// * `bool` - True if the passwords match, false otherwise
///
/// # Example
/// ```
/// use folio_utils::hash::{bcrypt_hash, bcrypt_check};
///
/// let hash = bcrypt_hash("my_password");
/// assert!(bcrypt_check("my_password", &hash));
/// assert!(!bcrypt_check("wrong_password", &hash));
/// ```
pub fn bcrypt_check(password: &str, hash: &str) -> bool {
    verify(password.as_bytes(), hash).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bcrypt_hash_and_check() {
        let password = "test_password";
        let hash = bcrypt_hash(password);

        assert!(bcrypt_check(password, &hash));
        assert!(!bcrypt_check("wrong_password", &hash));
    }

    #[test]
    fn test_bcrypt_check_rejects_malformed_hash() {
        assert!(!bcrypt_check("anything", "not-a-bcrypt-hash"));
    }
}
