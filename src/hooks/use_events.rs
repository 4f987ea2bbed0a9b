// ============================================================================
// USE EVENTS HOOK - ESTADO DEL LISTADO + LIKE
// ============================================================================
// Fetch una sola vez al montar. Las peticiones no se cancelan si el
// componente se desmonta antes de que terminen.
// ============================================================================

use yew::prelude::*;

use crate::stores::EventStore;
use crate::viewmodels::EventListViewModel;

#[derive(Clone)]
pub struct UseEventsHandle {
    pub state: UseReducerHandle<EventStore>,
    pub like: Callback<String>,
}

#[hook]
pub fn use_events() -> UseEventsHandle {
    let state = use_reducer(EventStore::default);

    // Fetch on mount
    {
        let dispatcher = state.dispatcher();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let vm = EventListViewModel::new();
                if let Some(action) = vm.load_events().await {
                    dispatcher.dispatch(action);
                }
            });
            || ()
        });
    }

    // Like (optimista: solo se aplica si el backend responde 2xx)
    let like = {
        let dispatcher = state.dispatcher();
        Callback::from(move |event_id: String| {
            let dispatcher = dispatcher.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let vm = EventListViewModel::new();
                if let Some(action) = vm.like_event(event_id).await {
                    dispatcher.dispatch(action);
                }
            });
        })
    };

    UseEventsHandle { state, like }
}
