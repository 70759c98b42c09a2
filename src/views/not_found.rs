use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

#[function_component(NotFoundView)]
pub fn not_found_view() -> Html {
    html! {
        <div class="not-found">
            <h1>{"404"}</h1>
            <p class="muted">{"Oops! Page not found"}</p>
            <Link<Route> to={Route::Home} classes="btn btn-primary">
                {"Return to Home"}
            </Link<Route>>
        </div>
    }
}
