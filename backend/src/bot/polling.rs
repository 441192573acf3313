use std::time::Duration;
use tokio::sync::watch;
use tracing::{error, info};

use crate::telegram::{client::BotApi, types::Update};
use super::handle_update;

pub const ERROR_BACKOFF: Duration = Duration::from_secs(5);

/// Offset that acknowledges every update in the batch.
pub fn next_offset(current: i64, updates: &[Update]) -> i64 {
  updates.iter()
    .map(|u| u.update_id + 1)
    .max()
    .map_or(current, |next| next.max(current))
}

/// Long polls `getUpdates` until `shutdown` flips to true.
pub async fn run(api: BotApi, web_app_url: String, poll_timeout: Duration, mut shutdown: watch::Receiver<bool>) {
  if let Err(e) = api.delete_webhook().await {
    error!("could not clear webhook before polling: {}", e);
  }
  info!("polling for updates (timeout {:?})", poll_timeout);

  let mut offset = 0_i64;
  loop {
    let batch = tokio::select! {
      _ = shutdown.changed() => break,
      res = api.get_updates(offset, poll_timeout) => res,
    };

    match batch {
      Ok(updates) => {
        for update in &updates {
          handle_update(&api, update, &web_app_url).await;
        }
        offset = next_offset(offset, &updates);
      },
      Err(e) => {
        error!("getUpdates failed, retrying in {:?}: {}", ERROR_BACKOFF, e);
        tokio::select! {
          _ = shutdown.changed() => break,
          _ = tokio::time::sleep(ERROR_BACKOFF) => {}
        }
      }
    }
  }
  info!("polling stopped");
}
