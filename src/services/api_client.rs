// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio ni estado: no reintenta, no cancela, no cachea
// ============================================================================

use gloo_net::http::{Request, Response};

use crate::config::CONFIG;
use crate::models::Event;
use crate::services::error::ApiError;
use crate::utils::constants::{EVENTS_ENDPOINT, EVENT_ENDPOINT_PREFIX};

#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(CONFIG.backend_url())
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn events_url(&self) -> String {
        format!("{}{}", self.base_url, EVENTS_ENDPOINT)
    }

    pub fn like_url(&self, event_id: &str) -> String {
        format!("{}{}/{}", self.base_url, EVENT_ENDPOINT_PREFIX, event_id)
    }

    /// Listar todos los eventos, en el orden que devuelve el backend
    pub async fn list_events(&self) -> Result<Vec<Event>, ApiError> {
        let url = self.events_url();
        log::debug!("📋 GET {}", url);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = ensure_ok(response)?;

        response
            .json::<Vec<Event>>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    /// Sumar un like en el backend. El cuerpo de la respuesta no se lee:
    /// el contador se incrementa localmente.
    pub async fn like_event(&self, event_id: &str) -> Result<(), ApiError> {
        let url = self.like_url(event_id);
        log::debug!("👍 POST {}", url);

        let response = Request::post(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        ensure_ok(response).map(|_| ())
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

fn ensure_ok(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        Ok(response)
    } else {
        Err(ApiError::Http {
            status: response.status(),
            status_text: response.status_text(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls() {
        let client = ApiClient::with_base_url("http://localhost:4000/");
        assert_eq!(client.events_url(), "http://localhost:4000/createEvent");
        assert_eq!(client.like_url("abc123"), "http://localhost:4000/event/abc123");
    }

    #[test]
    fn test_relative_base_url() {
        let client = ApiClient::with_base_url("");
        assert_eq!(client.events_url(), "/createEvent");
        assert_eq!(client.like_url("x"), "/event/x");
    }
}
