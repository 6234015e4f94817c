use yew::prelude::*;
use yew_router::prelude::Link;

use crate::routes::Route;

/// Rendered for every path the route table does not know.
#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <section class="not-found">
            <h1>{"404"}</h1>
            <p>{"Page not found"}</p>
            <Link<Route> to={Route::Home}>{"Back to Roombook"}</Link<Route>>
        </section>
    }
}
