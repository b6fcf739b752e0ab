use log::{error, info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod catalog;
mod config;
mod contact;
mod navigation;
mod site;
mod components {
    pub mod background;
    pub mod typewriter;
}
mod pages {
    pub mod contact;
    pub mod intro;
    pub mod not_found;
    pub mod packages;
    pub mod services;
}

use site::Site;

/// Everything lives on `/`; the section travels in the `?section=` query.
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
        Route::Home => {
            info!("Rendering site");
            html! { <Site /> }
        }
        Route::NotFound => {
            info!("Unknown path, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
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

    let email = config::email_config();
    if !email.is_complete() {
        error!("EmailJS configuration is missing: {}", email.missing().join(", "));
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
