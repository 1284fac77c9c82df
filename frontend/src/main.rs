mod components;
mod env_variable_utils;
mod error;
mod landing;
mod logging;
mod models;
mod router;
mod tool;
mod utils;

use crate::env_variable_utils::{get_app_name, is_debug_mode, AI_API_URL, SEARCH_API_URL};
use crate::router::{switch, Route};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <div class="antialiased text-gray-900 bg-white">
                <Switch<Route> render={switch} />
            </div>
        </BrowserRouter>
    }
}

fn main() {
    let debug = is_debug_mode();
    logging::init_logger(debug);

    yew::Renderer::<App>::new().render();

    log::info!(
        "NAME: \"{}\", SEARCH API: \"{}\", AI API: \"{}\", DEBUG: \"{}\"",
        get_app_name(),
        &*SEARCH_API_URL,
        &*AI_API_URL,
        debug
    );
}
