use log::{info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod funnel {
    pub mod catalog;
    pub mod lead;
    pub mod progress;
    pub mod state;
    pub mod validate;
}
mod components {
    pub mod footer;
    pub mod hero;
    pub mod lead_form;
    pub mod progress;
    pub mod quiz;
    pub mod quiz_card;
}
mod pages {
    pub mod home;
}

use pages::home::Home;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home | Route::NotFound => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
