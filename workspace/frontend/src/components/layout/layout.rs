use yew::prelude::*;
use yew_router::prelude::*;
use web_sys::window;
use super::navbar::Navbar;
use crate::router::Route;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub children: Children,
}

/// Application frame: navigation bar on top, the routed page below.
#[function_component(Layout)]
pub fn layout(props: &Props) -> Html {
    let route = use_route::<Route>().unwrap_or(Route::NotFound);

    use_effect_with(route, |route| {
        if let Some(document) = window().and_then(|w| w.document()) {
            document.set_title(&page_title(*route));
        }
        || ()
    });

    html! {
        <div class="flex flex-col min-h-screen bg-base-200">
            <Navbar />
            <main class="container mx-auto flex-1 px-4 py-8">
                { for props.children.iter() }
            </main>
        </div>
    }
}

pub fn page_title(route: Route) -> String {
    match route {
        Route::Overview => "Budg".to_string(),
        _ => format!("{} | Budg", route.label()),
    }
}
