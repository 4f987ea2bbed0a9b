use yew::prelude::*;
use yew_router::prelude::*;

use super::EventList;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <EventList /> },
        Route::NotFound => html! { <div class="not-found">{"404 - Page not found"}</div> },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Home.to_path(), "/");
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(Route::not_found_route(), Some(Route::NotFound));
    }
}
