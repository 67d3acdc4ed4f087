use serde::Deserialize;

#[derive(Deserialize)]
pub struct HashConfig {
    argon2: Argon2HashConfig,
}

impl HashConfig {
    pub fn argon2(&self) -> &Argon2HashConfig {
        &self.argon2
    }
}

#[derive(Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum Argon2Algorithm {
    Argon2d,
    Argon2i,
    Argon2id,
}

#[derive(Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum Argon2Version {
    V0x10,
    V0x13,
}

#[derive(Deserialize)]
pub struct Argon2HashConfig {
    algorithm: Argon2Algorithm,
    version: Argon2Version,
    /// B64-encoded salt without padding.
    salt: String,
}

impl Argon2HashConfig {
    pub fn new(algorithm: Argon2Algorithm, version: Argon2Version, salt: &str) -> Self {
        Self {
            algorithm,
            version,
            salt: salt.to_owned(),
        }
    }

    pub fn algorithm(&self) -> &Argon2Algorithm {
        &self.algorithm
    }

    pub fn version(&self) -> &Argon2Version {
        &self.version
    }

    pub fn salt(&self) -> &str {
        &self.salt
    }
}
