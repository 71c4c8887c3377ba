use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <div class="hero py-24">
            <div class="hero-content text-center">
                <div class="max-w-md">
                    <h1 class="text-5xl font-bold">{"404"}</h1>
                    <p class="py-6">{"This page does not exist."}</p>
                    <Link<Route> to={Route::Overview} classes="btn btn-primary">
                        {"Back to overview"}
                    </Link<Route>>
                </div>
            </div>
        </div>
    }
}
