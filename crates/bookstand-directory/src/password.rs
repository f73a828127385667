use crate::error::{DirectoryError, DirectoryResult};

/// Fixed bcrypt work factor for all stored hashes.
pub const BCRYPT_COST: u32 = 12;

/// Hash a plaintext password with the fixed cost.
pub fn hash_password(plain: &str) -> DirectoryResult<String> {
    bcrypt::hash(plain, BCRYPT_COST).map_err(|err| DirectoryError::Hash(err.to_string()))
}

/// Verify a plaintext password against a stored hash.
///
/// A malformed stored hash verifies as `false` rather than erroring, so a
/// corrupt record degrades to a failed login instead of a 500.
pub fn verify_password(plain: &str, hash: &str) -> bool {
    bcrypt::verify(plain, hash).unwrap_or(false)
}
