use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{Home, NotFound};

/// Every path the application recognizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Routable)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Maps a pathname to its route. Unknown paths resolve to `Route::NotFound`.
pub fn resolve(path: &str) -> Route {
    Route::recognize(path).unwrap_or(Route::NotFound)
}

/// Route table: which view handles which route.
pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Home /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

/// Renders the view for the current location of the surrounding router.
#[function_component(AppRoutes)]
pub fn app_routes() -> Html {
    html! { <Switch<Route> render={switch} /> }
}
