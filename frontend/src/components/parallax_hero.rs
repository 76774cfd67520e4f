use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::motion::pointer::pointer_drift;
use crate::motion::scroll::{report_listener, use_scroll_state, ListenerAction, ParallaxRange};
use crate::Route;

struct FloatingElement {
    icon: &'static str,
    left: &'static str,
    top: &'static str,
    delay: f64,
    scale: f64,
}

static FLOATING_ELEMENTS: [FloatingElement; 4] = [
    FloatingElement { icon: "fa-droplet", left: "10%", top: "20%", delay: 0.0, scale: 1.2 },
    FloatingElement { icon: "fa-bolt", left: "85%", top: "15%", delay: 0.5, scale: 1.0 },
    FloatingElement { icon: "fa-shield-halved", left: "15%", top: "70%", delay: 1.0, scale: 0.8 },
    FloatingElement { icon: "fa-award", left: "80%", top: "75%", delay: 1.5, scale: 1.1 },
];

#[derive(Properties, PartialEq)]
pub struct ParallaxHeroProps {
    pub dark_mode: bool,
}

/// Full-height hero whose layers move at different rates while scrolling.
#[function_component]
pub fn ParallaxHero(props: &ParallaxHeroProps) -> Html {
    let scroll = use_scroll_state();
    let drift = use_state(|| (0.0_f64, 0.0_f64));

    {
        let drift = drift.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn(MouseEvent)>::new({
                        let drift = drift.clone();
                        move |e: MouseEvent| {
                            if let Some(win) = web_sys::window() {
                                let width = win.inner_width().ok().and_then(|w| w.as_f64()).unwrap_or(0.0);
                                let height = win.inner_height().ok().and_then(|h| h.as_f64()).unwrap_or(0.0);
                                drift.set(pointer_drift(
                                    (e.client_x() as f64, e.client_y() as f64),
                                    (width, height),
                                ));
                            }
                        }
                    });
                    report_listener(
                        ListenerAction::Attach,
                        "mousemove",
                        window.add_event_listener_with_callback("mousemove", callback.as_ref().unchecked_ref()),
                    );
                    Box::new(move || {
                        if let Some(win) = web_sys::window() {
                            report_listener(
                                ListenerAction::Detach,
                                "mousemove",
                                win.remove_event_listener_with_callback(
                                    "mousemove",
                                    callback.as_ref().unchecked_ref(),
                                ),
                            );
                        }
                    })
                } else {
                    Box::new(|| ())
                };
                move || {
                    destructor();
                }
            },
            (),
        );
    }

    let offset = scroll.offset_y;
    let background_y = ParallaxRange::HERO_BACKGROUND.map(offset);
    let text_y = ParallaxRange::HERO_TEXT.map(offset);
    let floating_y = ParallaxRange::HERO_FLOATING.map(offset);
    let (drift_x, drift_y) = *drift;

    html! {
        <div class={classes!("parallax-hero", props.dark_mode.then_some("parallax-hero-dark"))}>
            <div class="hero-layer-background" style={format!("transform: translateY({background_y:.1}px);")}>
                <div class="hero-gradient"></div>
                <div class="hero-shade"></div>
                <div class="hero-mesh"></div>
            </div>

            {
                for FLOATING_ELEMENTS.iter().enumerate().map(|(index, element)| {
                    let sign = if index % 2 == 0 { 1.0 } else { -1.0 };
                    html! {
                        <div
                            key={index}
                            class="hero-floating"
                            style={format!(
                                "left: {}; top: {}; animation-delay: {}s; transform: translate({:.1}px, {:.1}px) scale({});",
                                element.left,
                                element.top,
                                element.delay,
                                drift_x * sign,
                                floating_y + drift_y * sign,
                                element.scale
                            )}
                        >
                            <div class="hero-floating-badge">
                                <i class={classes!("fas", element.icon)}></i>
                            </div>
                        </div>
                    }
                })
            }

            <div class="hero-content" style={format!("transform: translateY({text_y:.1}px);")}>
                <div class="hero-copy">
                    <h1 class="hero-title">
                        <span class="hero-title-glow">{"HiPurity"}</span>
                        <br />
                        <span class="hero-title-gradient">{"Systems"}</span>
                    </h1>
                    <p class="hero-subtitle">
                        {"Revolutionary water purification technology that transforms industries through"}
                        <span class="hero-accent-cyan">{" innovation"}</span>
                        {" and"}
                        <span class="hero-accent-blue">{" precision"}</span>
                    </p>
                    <div class="hero-actions">
                        <Link<Route> to={Route::Products} classes="hero-cta">
                            <span>{"Explore Products"}</span>
                            <i class="fas fa-arrow-right hero-cta-arrow"></i>
                        </Link<Route>>
                        <Link<Route> to={Route::Industries} classes="hero-secondary">
                            {"See Applications"}
                        </Link<Route>>
                    </div>
                </div>
            </div>

            <div class="hero-scroll-indicator">
                <div class="hero-scroll-mouse">
                    <div class="hero-scroll-wheel"></div>
                </div>
            </div>
        </div>
    }
}
