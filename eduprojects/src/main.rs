use std::sync::Arc;

use ep_api_web::{
    auth::AuthGate,
    context::{ApiWebCtx, ApiWebDaoCtx},
    template::Templates,
    ApiWebServer,
};
use ep_dao::Db;
use ep_db_postgresql::db::PostgresDb;
use ep_db_sqlite::db::SqliteDb;
use ep_hash_argon2::argon2::Argon2Hash;

mod config_path;

#[tokio::main]
async fn main() {
    let config_path = config_path::get();
    let config = match ep_config::from_path(&config_path) {
        Ok(config) => config,
        Err(err) => ep_log::panic(None, format!("[EduProjects] {err:#}")),
    };

    ep_log::init(config.log().display_level(), config.log().level_filter());

    ep_log::info(Some("🚀"), "[EduProjects] Starting");

    let argon2_hash = match Argon2Hash::new(config.hash().argon2()) {
        Ok(hash) => hash,
        Err(err) => ep_log::panic(
            None,
            format!("[EduProjects] Invalid argon2 configuration: {err}"),
        ),
    };

    let auth_gate = match AuthGate::new(
        argon2_hash,
        config.admin().username(),
        config.admin().password(),
    ) {
        Ok(gate) => gate,
        Err(err) => ep_log::panic(None, format!("[EduProjects] {err:#}")),
    };

    let db = if let Some(postgres) = config.db().postgres() {
        PostgresDb::new(&postgres.url(), postgres.max_connections())
            .await
            .map(Db::PostgresqlDb)
    } else if let Some(sqlite) = config.db().sqlite() {
        SqliteDb::new(sqlite.path(), sqlite.max_connections())
            .await
            .map(Db::SqliteDb)
    } else {
        ep_log::panic(None, "[EduProjects] No database configuration is specified");
    };
    let db = match db {
        Ok(db) => Arc::new(db),
        Err(err) => ep_log::panic(
            None,
            format!("[EduProjects] Initializing database failed: {err:#}"),
        ),
    };

    let templates = match Templates::new() {
        Ok(templates) => templates,
        Err(err) => ep_log::panic(
            None,
            format!("[EduProjects] Loading templates failed: {err:#}"),
        ),
    };

    let api_web_server = ApiWebServer::new(
        config.api().web().host(),
        config.api().web().port(),
        ApiWebCtx::new(auth_gate, ApiWebDaoCtx::new(db), templates),
    );

    match api_web_server.run().await {
        Ok(_) => ep_log::info(Some("👋"), "[EduProjects] Turned off"),
        Err(err) => ep_log::error(
            Some("👋"),
            format!("[EduProjects] Turned off with error: {err:#}"),
        ),
    }
}
