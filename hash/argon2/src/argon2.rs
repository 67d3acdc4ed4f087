use argon2::{
    password_hash::{self, SaltString},
    Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version,
};
use ep_config::hash::{Argon2Algorithm, Argon2HashConfig, Argon2Version};

pub struct Argon2Hash {
    argon2: Argon2<'static>,
    salt: SaltString,
}

impl Argon2Hash {
    pub fn new(config: &Argon2HashConfig) -> Result<Self, password_hash::Error> {
        ep_log::info(Some("⚡"), "[Argon2Hash] Initializing component");

        let algorithm = match config.algorithm() {
            Argon2Algorithm::Argon2d => Algorithm::Argon2d,
            Argon2Algorithm::Argon2i => Algorithm::Argon2i,
            Argon2Algorithm::Argon2id => Algorithm::Argon2id,
        };

        let version = match config.version() {
            Argon2Version::V0x10 => Version::V0x10,
            Argon2Version::V0x13 => Version::V0x13,
        };

        Ok(Self {
            argon2: Argon2::new(algorithm, version, Params::DEFAULT),
            salt: SaltString::from_b64(config.salt())?,
        })
    }

    /// Returns the PHC string of `password`.
    pub fn hash_password(&self, password: &[u8]) -> Result<String, password_hash::Error> {
        Ok(self.argon2.hash_password(password, &self.salt)?.to_string())
    }

    pub fn verify_password(&self, password: &str, hash: &str) -> Result<(), password_hash::Error> {
        let hash = PasswordHash::new(hash)?;
        self.argon2.verify_password(password.as_bytes(), &hash)
    }
}
