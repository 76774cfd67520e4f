use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod catalog {
    pub mod products;
}
mod components {
    pub mod floating_card;
    pub mod footer;
    pub mod lazy_image;
    pub mod loading_screen;
    pub mod magnetic_button;
    pub mod morphing_shapes;
    pub mod navbar;
    pub mod parallax_hero;
    pub mod reveal;
    pub mod scroll_progress;
}
mod motion {
    pub mod loading;
    pub mod pointer;
    pub mod scroll;
    pub mod visibility;
}
mod pages {
    pub mod about;
    pub mod contact;
    pub mod home;
    pub mod industries;
    pub mod products;
}
mod state {
    pub mod preference;
}
mod utils {
    pub mod storage;
}

use components::footer::Footer;
use components::loading_screen::LoadingScreen;
use components::navbar::Navbar;
use components::scroll_progress::ScrollProgress;
use pages::about::About;
use pages::contact::Contact;
use pages::home::Home;
use pages::industries::Industries;
use pages::products::Products;
use state::preference::PreferenceStore;
use utils::storage::default_storage;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/products")]
    Products,
    #[at("/industries")]
    Industries,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route, dark_mode: bool) -> Html {
    match route {
        Route::Home | Route::NotFound => html! { <Home {dark_mode} /> },
        Route::About => html! { <About {dark_mode} /> },
        Route::Products => html! { <Products {dark_mode} /> },
        Route::Industries => html! { <Industries {dark_mode} /> },
        Route::Contact => html! { <Contact {dark_mode} /> },
    }
}

#[function_component]
fn ScrollToTop() -> Html {
    let route = use_route::<Route>();
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        route,
    );
    html! {}
}

#[function_component]
fn App() -> Html {
    let store = use_memo(|_| PreferenceStore::load(default_storage()), ());
    let dark_mode = use_state(|| store.get());
    let loading = use_state(|| true);

    // Mirror store changes into component state for re-rendering.
    {
        let store = store.clone();
        let dark_mode = dark_mode.clone();
        use_effect_with_deps(
            move |_| {
                let id = store.subscribe(move |value| dark_mode.set(value));
                move || store.unsubscribe(id)
            },
            (),
        );
    }

    let on_toggle_dark_mode = {
        let store = store.clone();
        Callback::from(move |_: ()| {
            let value = store.toggle();
            log::info!("Dark mode toggled: {}", value);
        })
    };
    let on_loading_complete = {
        let loading = loading.clone();
        Callback::from(move |_: ()| loading.set(false))
    };

    let dark = *dark_mode;

    html! {
        <BrowserRouter>
            if *loading {
                <LoadingScreen on_complete={on_loading_complete} />
            } else {
                <div class={classes!("app", if dark { "theme-dark" } else { "theme-light" })}>
                    <ScrollToTop />
                    <ScrollProgress />
                    <Navbar dark_mode={dark} {on_toggle_dark_mode} />
                    <main>
                        <Switch<Route> render={move |route: Route| switch(route, dark)} />
                    </main>
                    <Footer dark_mode={dark} />
                </div>
            }
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::error_1(&format!("logger init failed: {e}").into());
    }
    log::info!("Starting HiPurity site");
    yew::Renderer::<App>::new().render();
}
