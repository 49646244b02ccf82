use clinic_relay::application::context::AppContext;
use clinic_relay::application::usecases::balance_reminder_sweep::BalanceReminderSweepUseCase;
use clinic_relay::config;
use clinic_relay::infrastructure::db::postgres::PostgresDatabase;
use clinic_relay::infrastructure::db::repositories::Repositories;
use clinic_relay::interface::http;
use clinic_relay::interface::http::state::AppState;
use metrics_exporter_prometheus::PrometheusBuilder;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Step 1: Load configuration and initialize structured logging.
    let settings = config::load().expect("load config");
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Step 2: Install the metrics recorder when enabled.
    let metrics_handle = if settings.observability.enable_metrics {
        Some(
            PrometheusBuilder::new()
                .install_recorder()
                .expect("install metrics recorder"),
        )
    } else {
        None
    };

    // Step 3: Connect to the database and build repositories.
    let db = Arc::new(
        PostgresDatabase::connect(&settings.db.url)
            .await
            .expect("connect database"),
    );
    let repos = Repositories::postgres(db);

    // Step 4: Assemble shared application context and HTTP state.
    let ctx = Arc::new(AppContext::new(repos, settings.clone()));
    let state = AppState {
        ctx: ctx.clone(),
        metrics: metrics_handle,
    };

    // Step 5: Start the balance reminder sweep in the background.
    let (shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);
    let sweep_handle = if settings.balance_sweep.enabled {
        let sweep_ctx = ctx.clone();
        Some(tokio::spawn(async move {
            if let Err(err) = BalanceReminderSweepUseCase::run_loop(&sweep_ctx, shutdown_rx).await {
                tracing::error!(error = ?err, "balance reminder sweep stopped");
            }
        }))
    } else {
        None
    };

    // Step 6: Bind and serve, shutting the sweep down on ctrl-c.
    let app = http::app(state);
    let bind_addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .expect("bind server");
    info!(addr = %bind_addr, "serving");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await
        .expect("serve");

    let _ = shutdown_tx.send(true);
    if let Some(handle) = sweep_handle {
        let _ = handle.await;
    }
}
