use yew::prelude::*;
use yew_router::prelude::*;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found-page">
            <h1>{"Siden findes ikke"}</h1>
            <p>{"Den side du leder efter er flyttet eller findes ikke længere."}</p>
            <Link<Route> to={Route::Home} classes="accent-button">
                {"Til forsiden"}
            </Link<Route>>
        </div>
    }
}
