use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod analytics;
mod celebration;
mod config;
mod countdown;
mod services;
mod waitlist;

mod components {
    pub mod countdown_timer;
    pub mod faq;
    pub mod footer;
    pub mod loading_screen;
    pub mod waitlist_counter;
    pub mod waitlist_form;
}
mod pages {
    pub mod coming_soon;
}

use pages::coming_soon::ComingSoon;
use services::Services;


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    ComingSoon,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::ComingSoon => {
            info!("Rendering Coming Soon page");
            html! { <ComingSoon /> }
        },
        Route::NotFound => {
            info!("Unknown route, redirecting to Coming Soon");
            html! { <Redirect<Route> to={Route::ComingSoon} /> }
        },
    }
}


#[function_component]
fn App() -> Html {
    let services = use_memo(|_| Services::default(), ());

    html! {
        <ContextProvider<Services> context={(*services).clone()}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<Services>>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting 21Goals waitlist");
    yew::Renderer::<App>::new().render();
}
