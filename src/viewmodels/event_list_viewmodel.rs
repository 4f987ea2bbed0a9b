// ============================================================================
// EVENT LIST VIEWMODEL - LÓGICA DEL LISTADO
// ============================================================================
// Devuelve acciones; el hook es quien las aplica al estado.
// `None` = la petición falló, ya se registró en el log y el estado no cambia.
// ============================================================================

use crate::models::Event;
use crate::services::{ApiClient, ApiError};
use crate::stores::EventAction;

#[derive(Clone, Default)]
pub struct EventListViewModel {
    api_client: ApiClient,
}

impl EventListViewModel {
    pub fn new() -> Self {
        Self::with_client(ApiClient::new())
    }

    pub fn with_client(api_client: ApiClient) -> Self {
        Self { api_client }
    }

    /// Cargar el listado completo (una vez por montaje)
    pub async fn load_events(&self) -> Option<EventAction> {
        log::info!("📋 Cargando eventos...");
        fetch_outcome(self.api_client.list_events().await)
    }

    /// Dar like. Sin deduplicación: cada click es una petición independiente.
    pub async fn like_event(&self, event_id: String) -> Option<EventAction> {
        let result = self.api_client.like_event(&event_id).await;
        like_outcome(event_id, result)
    }
}

pub fn fetch_outcome(result: Result<Vec<Event>, ApiError>) -> Option<EventAction> {
    match result {
        Ok(events) => {
            log::info!("✅ Eventos cargados: {}", events.len());
            Some(EventAction::Loaded(events))
        }
        Err(e) => {
            log::error!("❌ Error fetching events: {}", e);
            None
        }
    }
}

pub fn like_outcome(event_id: String, result: Result<(), ApiError>) -> Option<EventAction> {
    match result {
        Ok(()) => {
            log::info!("👍 Like successful: {}", event_id);
            Some(EventAction::Liked(event_id))
        }
        Err(e) => {
            log::error!("❌ Error liking event {}: {}", event_id, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stores::EventStore;
    use chrono::{TimeZone, Utc};
    use std::rc::Rc;
    use yew::Reducible;

    fn event(id: &str, likes: u64) -> Event {
        Event {
            id: id.to_string(),
            title: "t".to_string(),
            description: String::new(),
            event_date: Utc.with_ymd_and_hms(2026, 11, 1, 0, 0, 0).unwrap().fixed_offset(),
            event_time: "20:00".to_string(),
            ticket_price: 100.0,
            organized_by: "org".to_string(),
            owner: "me".to_string(),
            image: Some("img.png".to_string()),
            likes,
        }
    }

    fn apply(store: Rc<EventStore>, action: Option<EventAction>) -> Rc<EventStore> {
        match action {
            Some(action) => store.reduce(action),
            None => store,
        }
    }

    #[test]
    fn test_with_client_uses_given_backend() {
        let vm = EventListViewModel::with_client(ApiClient::with_base_url("http://events.local"));
        assert_eq!(vm.api_client.events_url(), "http://events.local/createEvent");
        assert_eq!(vm.api_client.like_url("e1"), "http://events.local/event/e1");
    }

    #[test]
    fn test_fetch_success_replaces_state() {
        let action = fetch_outcome(Ok(vec![event("a", 1), event("b", 2)]));
        let store = apply(Rc::new(EventStore::default()), action);
        assert!(store.is_fetched());
        assert_eq!(store.events.len(), 2);
    }

    #[test]
    fn test_fetch_failure_leaves_state_empty() {
        let action = fetch_outcome(Err(ApiError::Network("offline".to_string())));
        assert!(action.is_none());
        let store = apply(Rc::new(EventStore::default()), action);
        assert_eq!(*store, EventStore::default());
    }

    #[test]
    fn test_like_success_is_local_increment() {
        let store = Rc::new(EventStore::default().with_events(vec![event("a", 4), event("b", 9)]));
        let action = like_outcome("a".to_string(), Ok(()));
        assert_eq!(action, Some(EventAction::Liked("a".to_string())));

        let store = apply(store, action);
        assert_eq!(store.find("a").unwrap().likes, 5);
        assert_eq!(store.find("b").unwrap().likes, 9);
    }

    #[test]
    fn test_like_failure_leaves_collection_identical() {
        let before = Rc::new(EventStore::default().with_events(vec![event("a", 4), event("b", 9)]));
        let action = like_outcome(
            "a".to_string(),
            Err(ApiError::Http {
                status: 500,
                status_text: "Internal Server Error".to_string(),
            }),
        );
        assert!(action.is_none());

        let after = apply(before.clone(), action);
        assert_eq!(*after, *before);
    }
}
