use yew::prelude::*;

use crate::components::status::Status;
use crate::hooks::use_health::use_health;

#[function_component(Home)]
pub fn home() -> Html {
    let health = use_health();

    html! {
        <section class="home">
            <h1>{"Roombook - 회의실 예약 시스템"}</h1>
            <Status state={(*health).clone()} />
        </section>
    }
}
