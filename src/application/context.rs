use crate::config::Settings;
use crate::infrastructure::db::repositories::Repositories;

/// Shared application resources used by use cases and background loops.
pub struct AppContext {
    pub repos: Repositories,
    pub settings: Settings,
}

impl AppContext {
    /// Build a new application context with shared repositories and settings.
    pub fn new(repos: Repositories, settings: Settings) -> Self {
        Self { repos, settings }
    }
}

#[cfg(test)]
pub mod test_support {
    use super::AppContext;
    use crate::config::{BalanceSweep, Db, Delivery, Observability, Server, Settings};
    use crate::infrastructure::db::repositories::Repositories;

    pub fn test_settings() -> Settings {
        Settings {
            server: Server {
                host: "127.0.0.1".to_string(),
                port: 0,
            },
            db: Db {
                url: "postgres://unused".to_string(),
            },
            delivery: Delivery {
                request_timeout_ms: 2000,
                response_body_max_chars: 1000,
                log_default_limit: 50,
                log_max_limit: 200,
            },
            balance_sweep: BalanceSweep {
                enabled: false,
                poll_interval_ms: 1000,
                window_days: 30,
            },
            observability: Observability {
                service_name: "clinic-relay".to_string(),
                enable_metrics: false,
            },
        }
    }

    /// A context backed by empty in-memory stores; tests seed as needed.
    pub fn test_context() -> AppContext {
        AppContext::new(Repositories::in_memory(), test_settings())
    }
}
