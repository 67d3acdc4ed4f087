use actix_web::{dev::ServiceRequest, web, Error};
use actix_web_httpauth::extractors::{
    basic::{BasicAuth, Config},
    AuthenticationError,
};
use ahash::{HashMap, HashMapExt};
use anyhow::{anyhow, Result};
use ep_hash_argon2::argon2::Argon2Hash;

use crate::context::ApiWebCtx;

pub const EDITOR_REALM: &str = "Editor";

/// Checks HTTP Basic credentials against a fixed set of users.
///
/// The set is built once from configuration and never changes afterwards;
/// only password hashes are kept.
pub struct AuthGate {
    hash: Argon2Hash,
    users: HashMap<String, String>,
}

impl AuthGate {
    pub fn new(hash: Argon2Hash, admin_username: &str, admin_password: &str) -> Result<Self> {
        ep_log::info(Some("⚡"), "[AuthGate] Initializing component");

        let admin_hash = hash
            .hash_password(admin_password.as_bytes())
            .map_err(|err| anyhow!("Failed to hash admin password: {err}"))?;

        let mut users = HashMap::with_capacity(1);
        users.insert(admin_username.to_owned(), admin_hash);

        Ok(Self { hash, users })
    }

    /// Returns the username when it is known and `password` matches its hash.
    pub fn verify<'a>(&self, username: &'a str, password: &str) -> Option<&'a str> {
        let hash = self.users.get(username)?;
        match self.hash.verify_password(password, hash) {
            Ok(_) => Some(username),
            Err(_) => None,
        }
    }
}

pub async fn editor_validator(
    req: ServiceRequest,
    credentials: BasicAuth,
) -> Result<ServiceRequest, (Error, ServiceRequest)> {
    let verified = match req.app_data::<web::Data<ApiWebCtx>>() {
        Some(ctx) => ctx
            .auth()
            .verify(credentials.user_id(), credentials.password().unwrap_or_default())
            .is_some(),
        None => {
            ep_log::error(None, "[AuthGate] Context is missing from app data");
            false
        }
    };

    if verified {
        return Ok(req);
    }

    ep_log::warn(
        None,
        format!(
            "[AuthGate] Rejected credentials for user '{}'",
            credentials.user_id()
        ),
    );

    let config = req
        .app_data::<Config>()
        .cloned()
        .unwrap_or_default()
        .realm(EDITOR_REALM);
    Err((AuthenticationError::from(config).into(), req))
}

#[cfg(test)]
mod tests {
    use ep_config::hash::{Argon2Algorithm, Argon2HashConfig, Argon2Version};

    use super::*;

    fn gate() -> AuthGate {
        let hash = Argon2Hash::new(&Argon2HashConfig::new(
            Argon2Algorithm::Argon2id,
            Argon2Version::V0x13,
            "ZWR1cHJvamVjdHNzYWx0",
        ))
        .unwrap();
        AuthGate::new(hash, "admin", "secret").unwrap()
    }

    #[test]
    fn accepts_admin_credentials() {
        assert_eq!(gate().verify("admin", "secret"), Some("admin"));
    }

    #[test]
    fn rejects_wrong_password() {
        let gate = gate();
        assert_eq!(gate.verify("admin", "Secret"), None);
        assert_eq!(gate.verify("admin", ""), None);
    }

    #[test]
    fn rejects_unknown_user() {
        assert_eq!(gate().verify("root", "secret"), None);
    }

    #[test]
    fn keeps_only_the_hash() {
        let gate = gate();
        let stored = gate.users.get("admin").unwrap();
        assert_ne!(stored, "secret");
        assert!(stored.starts_with("$argon2id$"));
    }
}
