use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::StrictMode;
use crate::query::QueryClient;
use crate::routes::AppRoutes;

/// Application root: browser-history routing around the route table.
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <div class="app-container">
                <main class="app-main">
                    <AppRoutes />
                </main>

                <style>
                    {include_str!("style.css")}
                </style>
            </div>
        </BrowserRouter>
    }
}

#[derive(Properties, PartialEq)]
pub struct RootProps {
    pub client: QueryClient,
}

/// What the bootstrap mounts: diagnostics, the shared query client, then the app.
#[function_component(Root)]
pub fn root(props: &RootProps) -> Html {
    html! {
        <StrictMode>
            <ContextProvider<QueryClient> context={props.client.clone()}>
                <App />
            </ContextProvider<QueryClient>>
        </StrictMode>
    }
}
