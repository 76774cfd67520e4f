use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::motion::scroll::use_scroll_state;
use crate::Route;

static NAV_LINKS: [(&str, Route); 5] = [
    ("Home", Route::Home),
    ("About", Route::About),
    ("Products", Route::Products),
    ("Industries", Route::Industries),
    ("Contact", Route::Contact),
];

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub dark_mode: bool,
    pub on_toggle_dark_mode: Callback<()>,
}

#[function_component]
pub fn Navbar(props: &NavbarProps) -> Html {
    let menu_open = use_state(|| false);
    let current = use_route::<Route>();
    let scroll = use_scroll_state();

    let toggle_theme = {
        let on_toggle = props.on_toggle_dark_mode.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(()))
    };
    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let theme_icon = if props.dark_mode { "fa-sun" } else { "fa-moon" };
    // Keep the bar visible while the mobile menu is open.
    let hidden = scroll.hide_nav && !*menu_open;

    let links = |mobile: bool| {
        NAV_LINKS
            .iter()
            .map(|(label, route)| {
                let active = current.as_ref() == Some(route);
                let class = if mobile {
                    classes!("mobile-link", active.then_some("mobile-link-active"))
                } else {
                    classes!("nav-link", active.then_some("nav-link-active"))
                };
                html! {
                    <span onclick={if mobile { Some(close_menu.clone()) } else { None }}>
                        <Link<Route> to={route.clone()} classes={class}>
                            {*label}
                        </Link<Route>>
                    </span>
                }
            })
            .collect::<Html>()
    };

    html! {
        <nav class={classes!(
            "navbar",
            if props.dark_mode { "navbar-dark" } else { "navbar-light" },
            scroll.is_past_threshold.then_some("navbar-scrolled"),
            hidden.then_some("navbar-hidden")
        )}>
            <div class="navbar-inner">
                <Link<Route> to={Route::Home} classes="nav-brand">
                    <img src={config::logo_url()} alt="BIOSPN HiPurity Systems" class="nav-logo" />
                    <div class="nav-brand-text">
                        <span class="nav-brand-name">{"BIOSPN HiPurity"}</span>
                        <p class="nav-brand-tagline">{"Advanced Purification Systems"}</p>
                    </div>
                </Link<Route>>

                <div class="nav-links">
                    { links(false) }
                    <button class="theme-toggle" onclick={toggle_theme.clone()} aria-label="Toggle dark mode">
                        <i class={classes!("fas", theme_icon)}></i>
                    </button>
                </div>

                <div class="nav-mobile-controls">
                    <button class="theme-toggle" onclick={toggle_theme} aria-label="Toggle dark mode">
                        <i class={classes!("fas", theme_icon)}></i>
                    </button>
                    <button class="menu-toggle" onclick={toggle_menu} aria-label="Toggle menu">
                        <i class={classes!("fas", if *menu_open { "fa-xmark" } else { "fa-bars" })}></i>
                    </button>
                </div>
            </div>

            if *menu_open {
                <div class="mobile-menu">
                    { links(true) }
                </div>
            }
        </nav>
    }
}
