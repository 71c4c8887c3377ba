use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod mock_data;
mod pages;
pub mod router;
pub mod settings;

use components::layout::layout::Layout;
use router::{switch, Route};

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Layout>
                <Switch<Route> render={switch} />
            </Layout>
        </BrowserRouter>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    settings::init_settings();

    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== Budg Frontend Application Starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("Debug mode: {}", settings.debug_mode);

    log::trace!("Initializing Yew renderer");
    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
