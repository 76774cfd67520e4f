use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config::REVEAL_THRESHOLD;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealOptions {
    /// Fraction of the element that must intersect the viewport.
    pub threshold: f64,
    /// Stop observing after the first reveal.
    pub once: bool,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: REVEAL_THRESHOLD,
            once: true,
        }
    }
}

impl RevealOptions {
    pub fn with_threshold(threshold: f64) -> Self {
        Self {
            threshold,
            ..Self::default()
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ObserverPhase {
    Unobserved,
    Observing,
    Triggered,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VisibilityChange {
    pub visible: bool,
    /// The underlying watch should be dropped; no further samples matter.
    pub detach: bool,
}

/// Reveal-on-scroll state for a single element, independent of the DOM.
#[derive(Clone, Debug)]
pub struct VisibilityTracker {
    options: RevealOptions,
    phase: ObserverPhase,
    visible: bool,
}

impl VisibilityTracker {
    pub fn new(options: RevealOptions) -> Self {
        Self {
            options,
            phase: ObserverPhase::Unobserved,
            visible: false,
        }
    }

    pub fn start(&mut self) {
        if self.phase == ObserverPhase::Unobserved {
            self.phase = ObserverPhase::Observing;
        }
    }

    pub fn cancel(&mut self) {
        if self.phase == ObserverPhase::Observing {
            self.phase = ObserverPhase::Unobserved;
        }
    }

    #[cfg(test)]
    pub fn phase(&self) -> ObserverPhase {
        self.phase
    }

    #[cfg(test)]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    fn crosses(&self, ratio: f64) -> bool {
        if self.options.threshold <= 0.0 {
            ratio > 0.0
        } else {
            ratio >= self.options.threshold
        }
    }

    /// Feeds one intersection sample. Returns the change to apply, if any.
    pub fn evaluate(&mut self, ratio: f64) -> Option<VisibilityChange> {
        if self.phase != ObserverPhase::Observing {
            return None;
        }

        let in_view = self.crosses(ratio);
        if in_view {
            let detach = self.options.once;
            if detach {
                self.phase = ObserverPhase::Triggered;
            }
            if self.visible && !detach {
                return None;
            }
            self.visible = true;
            Some(VisibilityChange {
                visible: true,
                detach,
            })
        } else if self.visible && !self.options.once {
            self.visible = false;
            Some(VisibilityChange {
                visible: false,
                detach: false,
            })
        } else {
            None
        }
    }
}

/// Observes `node` and returns whether it has been revealed.
///
/// If the observer cannot be created the content is shown immediately, so a
/// missing browser capability never leaves a block invisible.
#[hook]
pub fn use_reveal(node: NodeRef, options: RevealOptions) -> bool {
    let visible = use_state(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |(node, threshold, once)| {
                let tracker = Rc::new(RefCell::new(VisibilityTracker::new(RevealOptions {
                    threshold: *threshold,
                    once: *once,
                })));

                let destructor: Box<dyn FnOnce()> = match node.cast::<web_sys::Element>() {
                    Some(element) => {
                        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new({
                            let tracker = tracker.clone();
                            let visible = visible.clone();
                            move |entries: js_sys::Array, observer: IntersectionObserver| {
                                for entry in entries.iter() {
                                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                                    let ratio = if entry.is_intersecting() {
                                        entry.intersection_ratio()
                                    } else {
                                        0.0
                                    };
                                    let change = tracker.borrow_mut().evaluate(ratio);
                                    if let Some(change) = change {
                                        visible.set(change.visible);
                                        if change.detach {
                                            observer.unobserve(&entry.target());
                                        }
                                    }
                                }
                            }
                        });

                        let init = IntersectionObserverInit::new();
                        init.set_threshold(&JsValue::from_f64(*threshold));
                        match IntersectionObserver::new_with_options(
                            callback.as_ref().unchecked_ref(),
                            &init,
                        ) {
                            Ok(observer) => {
                                tracker.borrow_mut().start();
                                observer.observe(&element);
                                Box::new(move || {
                                    tracker.borrow_mut().cancel();
                                    observer.disconnect();
                                    drop(callback);
                                })
                            }
                            Err(e) => {
                                log::warn!("IntersectionObserver unavailable: {:?}", e);
                                visible.set(true);
                                Box::new(|| ())
                            }
                        }
                    }
                    None => {
                        log::warn!("Reveal target is not mounted, showing content");
                        visible.set(true);
                        Box::new(|| ())
                    }
                };
                move || {
                    destructor();
                }
            },
            (node, options.threshold, options.once),
        );
    }

    *visible
}

#[cfg(test)]
mod tests {
    use super::*;

    fn observing(threshold: f64, once: bool) -> VisibilityTracker {
        let mut tracker = VisibilityTracker::new(RevealOptions { threshold, once });
        tracker.start();
        tracker
    }

    #[test]
    fn defaults_match_reveal_component() {
        let options = RevealOptions::default();
        assert_eq!(options.threshold, 0.15);
        assert!(options.once);
    }

    #[test]
    fn region_already_in_view_reveals_on_first_sample() {
        let mut tracker = observing(0.1, true);
        assert!(!tracker.is_visible());
        let change = tracker.evaluate(1.0);
        assert_eq!(
            change,
            Some(VisibilityChange {
                visible: true,
                detach: true
            })
        );
        assert!(tracker.is_visible());
        assert_eq!(tracker.phase(), ObserverPhase::Triggered);
    }

    #[test]
    fn once_stays_visible_after_leaving_view() {
        let mut tracker = observing(0.1, true);
        tracker.evaluate(0.5);
        assert_eq!(tracker.evaluate(0.0), None);
        assert_eq!(tracker.evaluate(0.3), None);
        assert!(tracker.is_visible());
    }

    #[test]
    fn below_threshold_does_not_reveal() {
        let mut tracker = observing(0.15, true);
        assert_eq!(tracker.evaluate(0.05), None);
        assert!(!tracker.is_visible());
        assert_eq!(tracker.phase(), ObserverPhase::Observing);
    }

    #[test]
    fn repeating_observer_toggles() {
        let mut tracker = observing(0.1, false);
        let visibility: Vec<Option<bool>> = [0.5, 0.8, 0.0, 0.0, 0.2]
            .iter()
            .map(|ratio| tracker.evaluate(*ratio).map(|c| c.visible))
            .collect();
        assert_eq!(
            visibility,
            vec![Some(true), None, Some(false), None, Some(true)]
        );
        assert_eq!(tracker.phase(), ObserverPhase::Observing);
    }

    #[test]
    fn unstarted_or_cancelled_tracker_ignores_samples() {
        let mut tracker = VisibilityTracker::new(RevealOptions::default());
        assert_eq!(tracker.evaluate(1.0), None);

        tracker.start();
        tracker.cancel();
        assert_eq!(tracker.phase(), ObserverPhase::Unobserved);
        assert_eq!(tracker.evaluate(1.0), None);
        assert!(!tracker.is_visible());
    }

    #[test]
    fn zero_threshold_needs_some_intersection() {
        let mut tracker = observing(0.0, true);
        assert_eq!(tracker.evaluate(0.0), None);
        assert!(tracker.evaluate(0.01).is_some());
    }
}
