use serde::Deserialize;

#[derive(Deserialize)]
pub struct DbPostgresConfig {
    user: String,
    password: String,
    host: String,
    port: u16,
    db_name: String,
    max_connections: u32,
}

impl DbPostgresConfig {
    pub fn url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.user, self.password, self.host, self.port, self.db_name
        )
    }

    pub fn max_connections(&self) -> &u32 {
        &self.max_connections
    }
}
