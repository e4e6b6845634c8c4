//! Runs wizard fetch requests in the background.
//!
//! Every request becomes a detached task that reports back through the event
//! channel. There is no retry and no cancellation; answers that arrive after
//! the wizard has moved on are filtered out by their request token.

use crate::api::client::ApiClient;
use crate::api::error::ApiError;
use crate::app::event::AppEvent;
use crate::app::wizard::{FetchRequest, RequestToken};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

pub struct FetchManager {
    client: Arc<ApiClient>,
    event_tx: mpsc::UnboundedSender<AppEvent>,
}

impl FetchManager {
    pub fn new(client: ApiClient, event_tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self {
            client: Arc::new(client),
            event_tx,
        }
    }

    /// Fire and forget: the result arrives later as an [`AppEvent`].
    pub fn spawn(&self, request: FetchRequest) {
        debug!(token = %request.token(), "spawning fetch task");
        let client = Arc::clone(&self.client);
        let event_tx = self.event_tx.clone();
        tokio::spawn(async move {
            let event = run(&client, request).await;
            let _ = event_tx.send(event);
        });
    }
}

async fn run(client: &ApiClient, request: FetchRequest) -> AppEvent {
    match request {
        FetchRequest::States { token } => {
            info!(%token, "fetching states");
            let result = client.fetch_states().await;
            log_outcome("states", token, &result);
            AppEvent::StatesFetched { token, result }
        }
        FetchRequest::Cities { token, iso_code } => {
            info!(%token, state = %iso_code, "fetching cities");
            let result = client.fetch_cities(&iso_code).await;
            log_outcome("cities", token, &result);
            AppEvent::CitiesFetched { token, result }
        }
        FetchRequest::Breweries { token, city } => {
            info!(%token, %city, "fetching breweries");
            let result = client.fetch_breweries(&city).await;
            log_outcome("breweries", token, &result);
            AppEvent::BreweriesFetched { token, result }
        }
    }
}

fn log_outcome<T>(what: &str, token: RequestToken, result: &Result<Vec<T>, ApiError>) {
    match result {
        Ok(items) => info!(%token, count = items.len(), "{} fetched", what),
        Err(e) => warn!(%token, error = %e, "{} fetch failed", what),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;

    fn unreachable_config() -> ApiConfig {
        // Port 9 on localhost is the discard service; nothing answers HTTP there.
        ApiConfig {
            state_city_base_url: "http://127.0.0.1:9/v1".to_string(),
            brewery_base_url: "http://127.0.0.1:9".to_string(),
            api_key: Some("test".to_string()),
            request_timeout_secs: Some(5),
            ..ApiConfig::default()
        }
    }

    #[tokio::test]
    async fn test_spawned_fetch_reports_failure_with_its_token() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let manager = FetchManager::new(ApiClient::new(unreachable_config()).unwrap(), tx);
        let mut wizard = crate::app::wizard::Wizard::new(Default::default());
        let request = wizard.mount().unwrap();
        let token = request.token();
        manager.spawn(request);

        match rx.recv().await {
            Some(AppEvent::StatesFetched { token: got, result }) => {
                assert_eq!(got, token);
                assert!(matches!(result, Err(ApiError::Transport(_))));
            }
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_invalid_base_url_fails_without_network() {
        let config = ApiConfig {
            brewery_base_url: "not a url".to_string(),
            ..ApiConfig::default()
        };
        let client = ApiClient::new(config).unwrap();
        let mut wizard = crate::app::wizard::Wizard::new(Default::default());
        let token = wizard.mount().unwrap().token();
        let event = run(
            &client,
            FetchRequest::Breweries {
                token,
                city: "Bend".to_string(),
            },
        )
        .await;
        match event {
            AppEvent::BreweriesFetched { result, .. } => {
                assert!(matches!(result, Err(ApiError::InvalidUrl(_))))
            }
            other => panic!("unexpected event {:?}", other),
        }
    }
}
