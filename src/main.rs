mod components;
mod config;
mod pages;
mod utils;

use yew::prelude::*;
use yew_router::prelude::*;

use components::toast::ToastProvider;
use pages::landing::Landing;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Landing /> },
        Route::NotFound => html! {
            <div class="not-found">
                <h1>{"404"}</h1>
                <p>{"This page doesn't exist."}</p>
                <Link<Route> to={Route::Home}>{"Back to the home page"}</Link<Route>>
            </div>
        },
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <ToastProvider>
                <Switch<Route> render={switch} />
            </ToastProvider>
        </BrowserRouter>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("QuantLens landing page starting");
    yew::Renderer::<App>::new().render();
}
