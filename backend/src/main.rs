mod bot;
mod config;
mod midwares;
mod route_handlers;
mod telegram;

use std::sync::Arc;
use axum::{http::Method, middleware, routing::{get, post}, Router};
use tokio::{net::TcpListener, sync::watch};
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use config::{BotMode, Config, WEBHOOK_PATH};
use midwares::{app_state::AppState, auth::{derive_webhook_secret, webhook_auth}};
use route_handlers::{manifest::{health_handler, manifest_handler}, webhook::webhook_handler};
use telegram::client::BotApi;

#[tokio::main]
async fn main() {
  let _ = dotenvy::dotenv();
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .init();

  if let Err(e) = run().await {
    error!("bot service stopped: {}", e);
    std::process::exit(1);
  }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
  let config = Config::from_env()?;
  info!("starting with {:?}", config);

  let api = BotApi::new(&config.bot_token, config.poll_timeout)?;
  let webhook_secret = derive_webhook_secret(&config.bot_token).map_err(|e| format!("{:?}", e))?;
  let state = AppState { config: Arc::new(config.clone()), api: api.clone(), webhook_secret: Arc::new(webhook_secret) };

  let (shutdown_tx, shutdown_rx) = watch::channel(false);

  let poller = match config.mode {
    BotMode::Polling => Some(tokio::spawn(bot::polling::run(api.clone(), config.web_app_url.clone(), config.poll_timeout, shutdown_rx))),
    BotMode::Webhook => {
      // from_env guarantees a public url in webhook mode
      if let Some(url) = config.webhook_url() {
        api.set_webhook(&url, &state.webhook_secret).await?;
        info!("webhook registered at {}", url);
      }
      None
    }
  };

  let app = router(state, config.mode);
  let listener = TcpListener::bind(config.listen_addr).await?;
  info!("listening on {}", config.listen_addr);

  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal(shutdown_tx))
    .await?;

  if let Some(handle) = poller {
    if let Err(e) = handle.await {
      error!("polling task ended abnormally: {}", e);
    }
  }
  Ok(())
}

// without a signal handler the server keeps running until killed
async fn shutdown_signal(shutdown_tx: watch::Sender<bool>) {
  if let Err(e) = tokio::signal::ctrl_c().await {
    error!("failed to listen for ctrl-c, graceful shutdown disabled: {}", e);
    std::future::pending::<()>().await;
  }
  info!("shutdown requested");
  let _ = shutdown_tx.send(true);
}

fn router(state: AppState, mode: BotMode) -> Router {
  let cors = CorsLayer::new()
    .allow_origin(Any)
    .allow_methods([Method::GET, Method::OPTIONS]);

  let manifest: Router<AppState> = Router::new()
    .route("/tonconnect-manifest.json", get(manifest_handler))
    .layer(cors);

  let mut app: Router<AppState> = Router::new()
    .route("/health", get(health_handler))
    .merge(manifest);

  if mode == BotMode::Webhook {
    let webhook: Router<AppState> = Router::new()
      .route(WEBHOOK_PATH, post(webhook_handler))
      .route_layer(middleware::from_fn_with_state(state.clone(), webhook_auth));
    app = app.merge(webhook);
  }

  app.with_state(state)
}
