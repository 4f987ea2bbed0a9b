use yew::prelude::*;

use crate::config::CONFIG;
use crate::models::Event;

#[derive(Properties, PartialEq, Clone)]
pub struct EventCardProps {
    pub event: Event,
    pub on_like: Callback<String>, // emite el id del evento
}

#[function_component(EventCard)]
pub fn event_card(props: &EventCardProps) -> Html {
    let e = &props.event;
    let image_src = e.image_url(CONFIG.backend_url(), CONFIG.asset_path());

    let on_like_click = {
        let id = e.id.clone();
        let cb = props.on_like.clone();
        Callback::from(move |ev: MouseEvent| {
            ev.stop_propagation();
            cb.emit(id.clone());
        })
    };

    html! {
        <div class="event-card bg-white rounded-xl relative" data-event-id={e.id.clone()}>
            <div class="event-image rounded-t-xl object-fill aspect-16:9">
                // Sin imagen no se pinta <img> (ni placeholder)
                if let Some(src) = image_src {
                    <img
                        src={src}
                        alt={e.title.clone()}
                        width="300"
                        height="200"
                        class="w-full h-full"
                    />
                }

                <div class="event-like absolute flex gap-4">
                    <button class="btn-like" onclick={on_like_click}>
                        {"👍"}
                    </button>
                </div>
            </div>

            <div class="event-details m-2 grid gap-2">
                <div class="flex justify-between items-center">
                    <h1 class="event-title font-bold text-lg mt-2">{e.display_title()}</h1>
                    <div class="event-likes flex gap-2 items-center mr-4">
                        {format!("👍 {}", e.likes)}
                    </div>
                </div>

                <div class="event-meta flex text-sm flex-nowrap justify-between font-bold mr-4">
                    <div class="event-date">{e.date_label()}</div>
                    <div class="event-price">{e.price_label()}</div>
                </div>

                <div class="event-description text-xs truncate-text">
                    {e.description.clone()}
                </div>

                <div class="flex justify-between items-center my-2 mr-4">
                    <div class="text-sm">
                        {"Organized By:"}<br />
                        <span class="event-organizer font-bold">{e.organized_by.clone()}</span>
                    </div>
                    <div class="text-sm">
                        {"Created By:"}<br />
                        <span class="event-owner font-semibold">{e.display_owner()}</span>
                    </div>
                </div>

                // La página de reserva la sirve otra parte de la app
                <a href={e.booking_path()} class="flex justify-center">
                    <button class="primary flex items-center gap-2">
                        {"Book Ticket →"}
                    </button>
                </a>
            </div>
        </div>
    }
}
