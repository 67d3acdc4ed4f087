use std::fs::File;

use admin::AdminConfig;
use anyhow::{Context, Result};
use api::ApiConfig;
use db::DbConfig;
use hash::HashConfig;
use log::LogConfig;
use serde::Deserialize;

pub mod admin;
pub mod api;
pub mod db;
pub mod hash;
pub mod log;

#[derive(Deserialize)]
pub struct Config {
    log: LogConfig,
    hash: HashConfig,
    db: DbConfig,
    admin: AdminConfig,
    api: ApiConfig,
}

impl Config {
    pub fn log(&self) -> &LogConfig {
        &self.log
    }

    pub fn hash(&self) -> &HashConfig {
        &self.hash
    }

    pub fn db(&self) -> &DbConfig {
        &self.db
    }

    pub fn admin(&self) -> &AdminConfig {
        &self.admin
    }

    pub fn api(&self) -> &ApiConfig {
        &self.api
    }
}

pub fn from_path(path: &str) -> Result<Config> {
    let file = File::open(path).with_context(|| format!("Failed to open config file {path}"))?;
    serde_yaml::from_reader(file).with_context(|| format!("Failed to parse config file {path}"))
}

pub fn from_str(config: &str) -> Result<Config> {
    Ok(serde_yaml::from_str(config)?)
}
