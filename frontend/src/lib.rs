pub mod audio;
pub mod components;
pub mod config;
pub mod hooks;
pub mod pages;
pub mod storage;
pub mod styles;

use yew::prelude::*;
use yew_router::prelude::*;
use crate::pages::{roulette::Roulette, setup::Setup};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
   #[at("/")] Home,
   #[at("/setup")] Setup,
   #[at("/roulette")] Roulette,
   #[not_found]
   #[at("/404")] NotFound,
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <div class="min-h-screen w-full">
                <div class="mx-auto">
                    <Switch<Route> render={switch} />
                </div>
            </div>
        </BrowserRouter>
    }
}

pub fn switch(route: Route) -> Html {
   match route {
       // Returning players go straight to the draw
       Route::Home => {
           if storage::repository().load_config().is_empty() {
               html! { <Redirect<Route> to={Route::Setup} /> }
           } else {
               html! { <Redirect<Route> to={Route::Roulette} /> }
           }
       }
       Route::Setup => html! { <Setup /> },
       Route::Roulette => html! { <Roulette /> },
       Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
   }
}
