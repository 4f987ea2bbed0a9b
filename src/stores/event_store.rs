// ============================================================================
// EVENT STORE - SNAPSHOT INMUTABLE DE LOS EVENTOS
// ============================================================================
// Cada cambio produce un snapshot nuevo; nunca se muta el anterior.
// Como `Reducible`, las acciones se aplican siempre sobre el último estado,
// así dos likes que terminan a la vez suman los dos.
// ============================================================================

use std::rc::Rc;

use chrono::{DateTime, TimeZone};
use yew::Reducible;

use crate::models::Event;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    NotFetched,
    Fetched,
}

#[derive(Clone, Debug, PartialEq)]
pub enum EventAction {
    /// Respuesta completa del listado: reemplaza todo
    Loaded(Vec<Event>),
    /// Like aceptado por el backend para ese id
    Liked(String),
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct EventStore {
    pub events: Rc<Vec<Event>>,
    pub status: LoadStatus,
}

impl EventStore {
    pub fn is_fetched(&self) -> bool {
        self.status == LoadStatus::Fetched
    }

    pub fn with_events(&self, events: Vec<Event>) -> Self {
        Self {
            events: Rc::new(events),
            status: LoadStatus::Fetched,
        }
    }

    /// +1 like al evento con ese id; el resto queda igual.
    /// Un id desconocido devuelve el mismo snapshot.
    pub fn with_like(&self, event_id: &str) -> Self {
        if !self.events.iter().any(|e| e.id == event_id) {
            return self.clone();
        }

        let events = self
            .events
            .iter()
            .map(|event| {
                if event.id == event_id {
                    Event {
                        likes: event.likes.saturating_add(1),
                        ..event.clone()
                    }
                } else {
                    event.clone()
                }
            })
            .collect();

        Self {
            events: Rc::new(events),
            status: self.status,
        }
    }

    /// Eventos a mostrar: futuros o de hoy, en el orden del backend
    pub fn upcoming<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> Vec<Event> {
        self.events
            .iter()
            .filter(|event| event.is_upcoming(now))
            .cloned()
            .collect()
    }

    #[cfg(test)]
    pub fn find(&self, event_id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == event_id)
    }
}

impl Reducible for EventStore {
    type Action = EventAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            EventAction::Loaded(events) => Rc::new(self.with_events(events)),
            EventAction::Liked(event_id) => Rc::new(self.with_like(&event_id)),
        }
    }
}
