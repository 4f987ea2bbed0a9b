pub mod use_events;

pub use use_events::{use_events, UseEventsHandle};
