use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use wasm_bindgen::closure::Closure;
use yew::prelude::*;

use crate::motion::loading::{LoadingEvent, LoadingSequence, RandomIncrements};

#[derive(Properties, PartialEq)]
pub struct LoadingScreenProps {
    pub on_complete: Callback<()>,
}

#[derive(Default)]
struct Timers {
    interval: Option<Interval>,
    // A cancelled interval's callback, freed on teardown rather than while it runs.
    retired: Option<Closure<dyn FnMut()>>,
    grace: Option<Timeout>,
}

/// Branded splash shown until the simulated progress completes.
#[function_component]
pub fn LoadingScreen(props: &LoadingScreenProps) -> Html {
    let percent = use_state(|| 0_u32);

    {
        let percent = percent.clone();
        let on_complete = props.on_complete.clone();
        use_effect_with_deps(
            move |_| {
                let sequence = Rc::new(RefCell::new(LoadingSequence::new(
                    RandomIncrements::from_entropy(),
                )));
                let timers = Rc::new(RefCell::new(Timers::default()));
                let tick_ms = sequence.borrow().tick_ms();

                let interval = Interval::new(tick_ms, {
                    let sequence = sequence.clone();
                    let timers = timers.clone();
                    move || {
                        let event = sequence.borrow_mut().tick();
                        percent.set(sequence.borrow().progress().display_percent());
                        if event != LoadingEvent::Finished {
                            return;
                        }

                        let Some(delay_ms) = sequence.borrow().grace_remaining_ms() else {
                            return;
                        };
                        let grace = Timeout::new(delay_ms, {
                            let sequence = sequence.clone();
                            let on_complete = on_complete.clone();
                            move || {
                                if sequence.borrow_mut().complete() {
                                    log::info!("Loading screen complete");
                                    on_complete.emit(());
                                }
                            }
                        });
                        let mut timers = timers.borrow_mut();
                        if let Some(interval) = timers.interval.take() {
                            timers.retired = Some(interval.cancel());
                        }
                        timers.grace = Some(grace);
                    }
                });
                timers.borrow_mut().interval = Some(interval);

                move || {
                    if !sequence.borrow().is_completed() {
                        log::debug!("Loading screen removed before completion");
                    }
                    let mut timers = timers.borrow_mut();
                    timers.interval.take();
                    timers.grace.take();
                    timers.retired.take();
                }
            },
            (),
        );
    }

    let particles = (0..20).map(|i| {
        // Deterministic scatter so re-renders do not jump.
        let left = (i * 37 + 11) % 100;
        let top = (i * 53 + 29) % 100;
        let duration = 3.0 + (i % 5) as f64 * 0.4;
        let delay = (i % 7) as f64 * 0.3;
        html! {
            <div
                key={i}
                class="loading-particle"
                style={format!(
                    "left: {left}%; top: {top}%; animation-duration: {duration}s; animation-delay: {delay}s;"
                )}
            ></div>
        }
    });

    html! {
        <div class="loading-screen">
            { for particles }
            <div class="loading-content">
                <div class="loading-logo">
                    <div class="loading-logo-mark">{"B"}</div>
                </div>
                <h1 class="loading-title">{"BIOSPN HiPurity"}</h1>
                <p class="loading-subtitle">{"Advanced Purification Systems"}</p>
                <div class="loading-bar">
                    <div class="loading-bar-track">
                        <div class="loading-bar-fill" style={format!("width: {}%;", *percent)}></div>
                    </div>
                    <div class="loading-percent">{format!("Loading... {}%", *percent)}</div>
                </div>
                <div class="loading-dots">
                    <span style="animation-delay: 0s;"></span>
                    <span style="animation-delay: 0.2s;"></span>
                    <span style="animation-delay: 0.4s;"></span>
                </div>
            </div>
        </div>
    }
}
