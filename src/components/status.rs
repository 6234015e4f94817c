use crate::hooks::use_query::QueryState;
use crate::models::health::HealthStatus;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatusProps {
    pub state: QueryState<HealthStatus>,
}

#[function_component(Status)]
pub fn status(props: &StatusProps) -> Html {
    match &props.state {
        QueryState::Loading => html! {
            <div class="status loading">
                <div class="spinner"></div>
                <p>{"Checking API..."}</p>
            </div>
        },
        QueryState::Loaded(health) if health.is_ok() => html! {
            <div class="status success">
                <p>{"✅ API online"}</p>
            </div>
        },
        QueryState::Loaded(health) => html! {
            <div class="status degraded">
                <p>{format!("⚠️ API reports {}", health.status)}</p>
            </div>
        },
        QueryState::Error(msg) => html! {
            <div class="status error">
                <p>{"❌ Error: "}{msg}</p>
            </div>
        },
    }
}
