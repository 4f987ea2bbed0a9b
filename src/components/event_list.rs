use chrono::Local;
use yew::prelude::*;

use super::EventCard;
use crate::config::CONFIG;
use crate::hooks::use_events;

/// Página principal: cabecera + grid de eventos próximos
#[function_component(EventList)]
pub fn event_list() -> Html {
    let events = use_events();

    // Filtro de fecha en cada render; el estado conserva también los pasados
    let upcoming = events.state.upcoming(&Local::now());
    // Un fetch fallido deja el grid vacío, sin mensaje de error
    let busy = (!events.state.is_fetched()).to_string();

    html! {
        <div class="event-page mt-1 flex flex-col">
            if let Some(hero) = CONFIG.hero_image.clone() {
                <div class="hero hidden sm:block">
                    <img src={hero} alt="" class="w-full" />
                </div>
            }

            <div class="event-grid mx-10 my-5 grid gap-x-6 gap-y-8 grid-cols-1 sm:grid-cols-2 md:grid-cols-3 lg:grid-cols-4" aria-busy={busy}>
                { for upcoming.into_iter().map(|event| {
                    let key = event.id.clone();
                    html! {
                        <EventCard
                            key={key}
                            event={event}
                            on_like={events.like.clone()}
                        />
                    }
                })}
            </div>
        </div>
    }
}
