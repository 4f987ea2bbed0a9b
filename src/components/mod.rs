pub mod app;
pub mod event_card;
pub mod event_list;

pub use app::{App, Route};
pub use event_card::EventCard;
pub use event_list::EventList;
