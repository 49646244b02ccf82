use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub server: Server,
    pub db: Db,
    pub delivery: Delivery,
    pub balance_sweep: BalanceSweep,
    pub observability: Observability,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Server {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Db {
    pub url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Delivery {
    pub request_timeout_ms: u64,
    pub response_body_max_chars: usize,
    pub log_default_limit: u32,
    pub log_max_limit: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BalanceSweep {
    pub enabled: bool,
    pub poll_interval_ms: u64,
    pub window_days: i64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Observability {
    pub service_name: String,
    pub enable_metrics: bool,
}

/// Load settings from `config/default.toml`, `config/<env>.toml`, and env overrides.
pub fn load() -> Result<Settings, config::ConfigError> {
    let env_name = std::env::var("APP_ENV").unwrap_or_else(|_| "dev".to_string());
    config::Config::builder()
        .add_source(config::File::with_name("config/default"))
        .add_source(config::File::with_name(&format!("config/{env_name}")).required(false))
        .add_source(config::Environment::with_prefix("CLINICRELAY").separator("__"))
        .build()?
        .try_deserialize()
}
