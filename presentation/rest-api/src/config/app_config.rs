use super::{
    cors_config, database_config::DatabaseSettings, jwt_config::JwtConfig,
    marketplace_config::MarketplaceConfig, server_config::ServerConfig,
};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub database: DatabaseSettings,
    pub jwt: JwtConfig,
    pub marketplace: MarketplaceConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            database: DatabaseSettings::from_env()?,
            jwt: JwtConfig::from_env()?,
            marketplace: MarketplaceConfig::from_env(),
        })
    }
}
