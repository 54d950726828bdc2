use argon2::password_hash::{PasswordHasher, SaltString};
use argon2::Argon2;
use password_hash::rand_core::OsRng;

/// Hashes a plaintext password into a PHC string with a fresh random salt.
pub fn hash_password(password: &str) -> Result<String, password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    Ok(Argon2::default().hash_password(password.as_bytes(), &salt)?.to_string())
}
