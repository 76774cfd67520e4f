use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::AddEventListenerOptions;
use yew::prelude::*;

use crate::config::{NAV_HIDE_THRESHOLD_PX, SCROLLED_THRESHOLD_PX};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollState {
    pub offset_y: f64,
    /// `None` until a second distinct offset has been seen.
    pub direction: Option<ScrollDirection>,
    pub is_past_threshold: bool,
    pub hide_nav: bool,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self {
            offset_y: 0.0,
            direction: None,
            is_past_threshold: false,
            hide_nav: false,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ScrollTracker {
    scrolled_threshold: f64,
    hide_threshold: f64,
    previous: Option<f64>,
    direction: Option<ScrollDirection>,
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new(SCROLLED_THRESHOLD_PX, NAV_HIDE_THRESHOLD_PX)
    }
}

impl ScrollTracker {
    pub fn new(scrolled_threshold: f64, hide_threshold: f64) -> Self {
        Self {
            scrolled_threshold,
            hide_threshold,
            previous: None,
            direction: None,
        }
    }

    pub fn update(&mut self, offset_y: f64) -> ScrollState {
        if let Some(previous) = self.previous {
            let delta = offset_y - previous;
            if delta > 0.0 {
                self.direction = Some(ScrollDirection::Down);
            } else if delta < 0.0 {
                self.direction = Some(ScrollDirection::Up);
            }
        }
        self.previous = Some(offset_y);

        ScrollState {
            offset_y,
            direction: self.direction,
            is_past_threshold: offset_y > self.scrolled_threshold,
            hide_nav: self.direction == Some(ScrollDirection::Down)
                && offset_y > self.hide_threshold,
        }
    }
}

/// Linear scroll-to-transform mapping, clamped to the output range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxRange {
    pub input: (f64, f64),
    pub output: (f64, f64),
}

impl ParallaxRange {
    pub const HERO_BACKGROUND: Self = Self::new((0.0, 800.0), (0.0, 400.0));
    pub const HERO_TEXT: Self = Self::new((0.0, 800.0), (0.0, 200.0));
    pub const HERO_FLOATING: Self = Self::new((0.0, 800.0), (0.0, -100.0));

    pub const fn new(input: (f64, f64), output: (f64, f64)) -> Self {
        Self { input, output }
    }

    pub fn map(&self, value: f64) -> f64 {
        let (in_start, in_end) = self.input;
        let (out_start, out_end) = self.output;
        if in_end == in_start {
            return out_start;
        }
        let t = ((value - in_start) / (in_end - in_start)).clamp(0.0, 1.0);
        out_start + t * (out_end - out_start)
    }
}

/// Fraction of the document scrolled past, in `[0, 1]`.
pub fn scroll_progress(offset_y: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (offset_y / scrollable).clamp(0.0, 1.0)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListenerAction {
    Attach,
    Detach,
}

impl ListenerAction {
    fn verb(&self) -> &'static str {
        match self {
            ListenerAction::Attach => "attach",
            ListenerAction::Detach => "detach",
        }
    }
}

/// Logs a failed (un)registration of a window listener. Returns `true` when
/// the call succeeded.
pub fn report_listener<E: std::fmt::Debug>(
    action: ListenerAction,
    event: &str,
    result: Result<(), E>,
) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            log::error!("Failed to {} {} listener: {:?}", action.verb(), event, e);
            false
        }
    }
}

fn current_offset() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Document height and viewport height for [`scroll_progress`].
pub fn page_extent() -> (f64, f64) {
    let Some(window) = web_sys::window() else {
        return (0.0, 0.0);
    };
    let viewport = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    let document = window
        .document()
        .and_then(|d| d.document_element())
        .map(|el| el.scroll_height() as f64)
        .unwrap_or(viewport);
    (document, viewport)
}

/// Subscribes to window scroll events for the lifetime of the component.
///
/// The listener is registered passive and is removed on unmount.
#[hook]
pub fn use_scroll_state() -> ScrollState {
    let state = use_state(ScrollState::default);

    {
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                let tracker = Rc::new(RefCell::new(ScrollTracker::default()));
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new({
                        let tracker = tracker.clone();
                        let state = state.clone();
                        move || {
                            let next = tracker.borrow_mut().update(current_offset());
                            state.set(next);
                        }
                    });

                    let options = AddEventListenerOptions::new();
                    options.set_passive(true);
                    report_listener(
                        ListenerAction::Attach,
                        "scroll",
                        window.add_event_listener_with_callback_and_add_event_listener_options(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                            &options,
                        ),
                    );

                    // Initial sample so a restored scroll position is reflected.
                    state.set(tracker.borrow_mut().update(current_offset()));

                    Box::new(move || {
                        if let Some(win) = web_sys::window() {
                            report_listener(
                                ListenerAction::Detach,
                                "scroll",
                                win.remove_event_listener_with_callback(
                                    "scroll",
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

    *state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_and_threshold_sequence() {
        let mut tracker = ScrollTracker::new(20.0, 100.0);
        let states: Vec<ScrollState> = [0.0, 50.0, 150.0, 90.0]
            .iter()
            .map(|offset| tracker.update(*offset))
            .collect();

        let directions: Vec<_> = states.iter().map(|s| s.direction).collect();
        assert_eq!(
            directions,
            vec![
                None,
                Some(ScrollDirection::Down),
                Some(ScrollDirection::Down),
                Some(ScrollDirection::Up)
            ]
        );

        let scrolled: Vec<bool> = states.iter().map(|s| s.is_past_threshold).collect();
        assert_eq!(scrolled, vec![false, true, true, true]);

        let hidden: Vec<bool> = states.iter().map(|s| s.hide_nav).collect();
        assert_eq!(hidden, vec![false, false, true, false]);
    }

    #[test]
    fn unchanged_offset_keeps_direction() {
        let mut tracker = ScrollTracker::default();
        tracker.update(200.0);
        tracker.update(300.0);
        let state = tracker.update(300.0);
        assert_eq!(state.direction, Some(ScrollDirection::Down));
        assert!(state.hide_nav);
    }

    #[test]
    fn threshold_is_exclusive() {
        let mut tracker = ScrollTracker::new(20.0, 100.0);
        assert!(!tracker.update(20.0).is_past_threshold);
        assert!(tracker.update(21.0).is_past_threshold);
    }

    #[test]
    fn parallax_maps_and_clamps() {
        let range = ParallaxRange::HERO_BACKGROUND;
        assert_eq!(range.map(0.0), 0.0);
        assert_eq!(range.map(400.0), 200.0);
        assert_eq!(range.map(800.0), 400.0);
        assert_eq!(range.map(2_000.0), 400.0);
        assert_eq!(range.map(-50.0), 0.0);
        assert_eq!(ParallaxRange::HERO_FLOATING.map(400.0), -50.0);
    }

    #[test]
    fn degenerate_parallax_range_returns_start() {
        let range = ParallaxRange::new((100.0, 100.0), (5.0, 10.0));
        assert_eq!(range.map(100.0), 5.0);
    }

    #[test]
    fn listener_failures_are_reported_for_both_directions() {
        assert!(report_listener::<&str>(ListenerAction::Attach, "scroll", Ok(())));
        assert!(!report_listener(ListenerAction::Attach, "scroll", Err("denied")));
        assert!(report_listener::<&str>(ListenerAction::Detach, "mousemove", Ok(())));
        assert!(!report_listener(ListenerAction::Detach, "mousemove", Err("not registered")));
        assert_eq!(ListenerAction::Detach.verb(), "detach");
    }

    #[test]
    fn progress_fraction() {
        assert_eq!(scroll_progress(0.0, 2_000.0, 1_000.0), 0.0);
        assert_eq!(scroll_progress(500.0, 2_000.0, 1_000.0), 0.5);
        assert_eq!(scroll_progress(1_500.0, 2_000.0, 1_000.0), 1.0);
        assert_eq!(scroll_progress(300.0, 800.0, 1_000.0), 0.0);
    }
}
