use super::{
    cors_config, database_config::DatabaseSettings, media_config::MediaConfig,
    server_config::ServerConfig,
};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub database: DatabaseSettings,
    pub media: MediaConfig,
}

impl AppConfig {
    /// Reads every setting up front so a misconfigured process fails before binding.
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            server: ServerConfig::from_env()?,
            cors: cors_config::init_cors(),
            database: DatabaseSettings::from_env()?,
            media: MediaConfig::from_env()?,
        })
    }
}
