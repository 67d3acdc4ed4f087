use serde::Deserialize;

/// The single credential pair allowed into the editor.
#[derive(Deserialize)]
pub struct AdminConfig {
    username: String,
    password: String,
}

impl AdminConfig {
    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}
