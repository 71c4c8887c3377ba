use yew::prelude::*;
use yew_router::prelude::*;
use crate::router::Route;

/// Top bar links, in display order
pub const NAV_LINKS: [Route; 6] = [
    Route::Overview,
    Route::Bills,
    Route::BankAccounts,
    Route::Categories,
    Route::Recurrences,
    Route::Statuses,
];

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let current = use_route::<Route>();

    html! {
        <div class="navbar bg-primary text-primary-content shadow-sm sticky top-0 z-40">
            <div class="flex-1 px-2">
                <Link<Route> to={Route::Overview} classes="btn btn-ghost text-xl">{"Budg"}</Link<Route>>
            </div>
            <div class="flex-none">
                <ul class="menu menu-horizontal gap-1 px-1">
                    { for NAV_LINKS.iter().map(|&route| {
                        let active = current == Some(route);
                        html! {
                            <li>
                                <Link<Route>
                                    to={route}
                                    classes={classes!("btn", "btn-ghost", "btn-sm", active.then_some("btn-active"))}
                                >
                                    <i class={route.icon()}></i>
                                    {" "}{route.label()}
                                </Link<Route>>
                            </li>
                        }
                    })}
                </ul>
            </div>
        </div>
    }
}
