//! HTTP client for the Home Assistant REST API
//!
//! One blocking GET against `/api/states`, authenticated with a bearer
//! token. The request lifetime is fully contained in [`HubClient::fetch_states`];
//! there is no retry and no state kept between calls.

use console::style;
use reqwest::blocking::{Client, ClientBuilder};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::StatusCode;
use thiserror::Error;
use url::Url;

use crate::config::Config;
use crate::entity::EntityState;

/// API path serving the full entity state list.
const STATES_PATH: &str = "/api/states";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("authentication rejected (HTTP {0})")]
    Auth(StatusCode),

    #[error("hub returned HTTP {0}")]
    Status(StatusCode),

    #[error("malformed states response: {0}")]
    Body(String),

    #[error("token is not a valid header value: {0}")]
    Token(#[from] reqwest::header::InvalidHeaderValue),
}

/// Blocking client bound to one Home Assistant instance.
pub struct HubClient {
    http: Client,
    base_url: Url,
}

impl HubClient {
    /// Build a client with the configured timeout and auth headers baked in.
    pub fn new(config: &Config) -> Result<Self, ClientError> {
        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.token))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = ClientBuilder::new()
            .timeout(config.timeout)
            .user_agent(concat!("hafind/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    /// Fetch every entity state the hub reports.
    ///
    /// Records that are not objects with a `<domain>.<object_id>` entity id
    /// and a state are skipped with a warning rather than failing the run.
    pub fn fetch_states(&self) -> Result<Vec<EntityState>, ClientError> {
        let response = self.http.get(self.states_url()).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ClientError::Auth(status),
                _ => ClientError::Status(status),
            });
        }

        let body = response.text()?;
        let records: Vec<serde_json::Value> =
            serde_json::from_str(&body).map_err(|e| ClientError::Body(e.to_string()))?;

        let mut entities = Vec::with_capacity(records.len());
        for record in records {
            match serde_json::from_value::<EntityState>(record) {
                Ok(entity) if entity.has_domain() => entities.push(entity),
                Ok(entity) => {
                    eprintln!(
                        "{} Skipping entity with malformed id: {}",
                        style("!").yellow(),
                        entity.entity_id
                    );
                }
                Err(e) => {
                    eprintln!(
                        "{} Skipping malformed state record: {}",
                        style("!").yellow(),
                        e
                    );
                }
            }
        }

        Ok(entities)
    }

    fn states_url(&self) -> String {
        format!(
            "{}{}",
            self.base_url.as_str().trim_end_matches('/'),
            STATES_PATH
        )
    }
}
