use chrono::Datelike;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub dark_mode: bool,
}

#[function_component]
pub fn Footer(props: &FooterProps) -> Html {
    let year = chrono::Utc::now().year();

    html! {
        <footer class={classes!("footer", props.dark_mode.then_some("footer-dark"))}>
            <div class="footer-inner">
                <div class="footer-grid">
                    <div>
                        <img src={config::logo_url()} alt="BIOSPN HiPurity Systems" class="footer-logo" />
                        <p class="footer-blurb">
                            {"Leading provider of advanced purification systems for pharmaceutical, biotech, and research industries."}
                        </p>
                    </div>
                    <div>
                        <h3>{"Quick Links"}</h3>
                        <ul class="footer-links">
                            <li><Link<Route> to={Route::About}>{"About Us"}</Link<Route>></li>
                            <li><Link<Route> to={Route::Products}>{"Products"}</Link<Route>></li>
                            <li><Link<Route> to={Route::Industries}>{"Industries"}</Link<Route>></li>
                            <li><Link<Route> to={Route::Contact}>{"Contact"}</Link<Route>></li>
                        </ul>
                    </div>
                    <div>
                        <h3>{"Contact Info"}</h3>
                        <div class="footer-contact">
                            <div><i class="fas fa-envelope"></i><span>{"info@biospnhipurity.com"}</span></div>
                            <div><i class="fas fa-phone"></i><span>{"+91 XXX XXX XXXX"}</span></div>
                            <div><i class="fas fa-location-dot"></i><span>{"India"}</span></div>
                        </div>
                    </div>
                </div>
                <div class="footer-bottom">
                    <p>{format!("© {} BIOSPN HiPurity. All Rights Reserved.", year)}</p>
                </div>
            </div>
        </footer>
    }
}
