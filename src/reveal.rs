//! Scroll-triggered reveal support.
//!
//! Every section of the page fades/slides in the first time it scrolls into
//! view. Instead of each component wiring up its own IntersectionObserver and
//! matchMedia query, they all go through [`use_reveal`]: give it a node and a
//! [`RevealConfig`], get back a boolean that flips to `true` exactly once.
//!
//! The decision logic lives in [`RevealMachine`], which is plain Rust so the
//! one-shot semantics can be unit tested without a browser. The hook only
//! wires the machine to the observer and the reduced-motion preference.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealConfig {
    /// Fraction of the element that must be visible before it reveals.
    /// Taller sections want lower values so the reveal fires before the
    /// reader has scrolled most of the way past them.
    pub threshold: f64,
    /// Margin applied around the viewport when measuring intersection.
    pub root_margin: &'static str,
    /// Skip observation and reveal immediately. Used for above-the-fold
    /// content that should never wait on a visibility event.
    pub eager: bool,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.15,
            root_margin: "0px",
            eager: false,
        }
    }
}

impl RevealConfig {
    pub fn with_threshold(threshold: f64) -> Self {
        Self {
            threshold,
            ..Self::default()
        }
    }

    pub fn eager() -> Self {
        Self {
            eager: true,
            ..Self::default()
        }
    }
}

/// One-shot visibility latch for a single watched element.
///
/// Starts unrevealed (unless eager or reduced motion applies), latches to
/// revealed the first time a reported intersection ratio reaches the
/// threshold, and ignores everything after `detach`.
#[derive(Debug)]
pub struct RevealMachine {
    threshold: f64,
    revealed: bool,
    detached: bool,
}

impl RevealMachine {
    pub fn new(config: &RevealConfig, reduced_motion: bool) -> Self {
        let revealed = config.eager || reduced_motion;
        Self {
            threshold: config.threshold,
            revealed,
            // A machine born revealed never needs an observer.
            detached: revealed,
        }
    }

    /// Whether an observation should be (or still is) registered.
    pub fn needs_observation(&self) -> bool {
        !self.detached
    }

    /// Feed one intersection report into the machine. Returns `true` when
    /// this report is the one that flipped the state, so the caller knows to
    /// release the observer.
    pub fn report_ratio(&mut self, ratio: f64) -> bool {
        if self.detached {
            return false;
        }
        if ratio >= self.threshold {
            self.revealed = true;
            self.detached = true;
            return true;
        }
        false
    }

    /// Tear down: the owning element is gone or the observer was released.
    /// Whatever state we are in is final.
    pub fn detach(&mut self) {
        self.detached = true;
    }

    pub fn revealed(&self) -> bool {
        self.revealed
    }
}

/// Transition delay for the `index`-th item of a staggered list, in ms.
pub fn stagger_delay(index: usize, base: u64, step: u64) -> u64 {
    base + index as u64 * step
}

/// Inline `transition-delay` style for a revealed element. Unrevealed
/// elements get no delay so they hide instantly if styles are recomputed.
pub fn delay_style(revealed: bool, delay_ms: u64) -> String {
    if revealed {
        format!("transition-delay: {delay_ms}ms")
    } else {
        "transition-delay: 0ms".to_string()
    }
}

thread_local! {
    static REDUCED_MOTION: Cell<Option<bool>> = Cell::new(None);
}

/// Whether the user asked the platform to minimize animation. Queried from
/// `matchMedia` once per page load and cached, so the dozens of reveal
/// controllers on the page share one answer instead of one subscription each.
pub fn prefers_reduced_motion() -> bool {
    REDUCED_MOTION.with(|cache| {
        if let Some(cached) = cache.get() {
            return cached;
        }
        let matches = web_sys::window()
            .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok())
            .flatten()
            .map(|mq| mq.matches())
            .unwrap_or(false);
        cache.set(Some(matches));
        matches
    })
}

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

fn attach_observer(
    element: &web_sys::Element,
    config: &RevealConfig,
    machine: Rc<RefCell<RevealMachine>>,
    revealed: UseStateHandle<bool>,
) -> Result<(IntersectionObserver, ObserverCallback), JsValue> {
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            let entry = match entries.get(0).dyn_into::<IntersectionObserverEntry>() {
                Ok(entry) => entry,
                Err(_) => return,
            };
            if !entry.is_intersecting() {
                return;
            }
            if machine.borrow_mut().report_ratio(entry.intersection_ratio()) {
                revealed.set(true);
                observer.disconnect();
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.threshold));
    options.set_root_margin(config.root_margin);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    observer.observe(element);
    Ok((observer, callback))
}

/// Track whether `node` has scrolled into view. Returns `false` until the
/// element first satisfies `config.threshold`, then `true` forever after.
///
/// Reveals immediately when `config.eager` is set, when the user prefers
/// reduced motion, or when IntersectionObserver is unavailable — hidden
/// content is never an acceptable failure mode for a cosmetic effect.
#[hook]
pub fn use_reveal(node: NodeRef, config: RevealConfig) -> bool {
    let revealed = use_state(|| false);

    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let machine = Rc::new(RefCell::new(RevealMachine::new(
                    &config,
                    prefers_reduced_motion(),
                )));
                if machine.borrow().revealed() {
                    revealed.set(true);
                }

                let mut observation: Option<(IntersectionObserver, ObserverCallback)> = None;
                if machine.borrow().needs_observation() {
                    // A node that never mounted stays unrevealed; the owner
                    // is being discarded along with this controller.
                    if let Some(element) = node.cast::<web_sys::Element>() {
                        match attach_observer(&element, &config, machine.clone(), revealed.clone())
                        {
                            Ok(obs) => observation = Some(obs),
                            Err(err) => {
                                warn!("intersection observer unavailable, revealing: {:?}", err);
                                machine.borrow_mut().detach();
                                revealed.set(true);
                            }
                        }
                    }
                }

                move || {
                    machine.borrow_mut().detach();
                    if let Some((observer, callback)) = observation {
                        observer.disconnect();
                        drop(callback);
                    }
                }
            },
            node,
        );
    }

    *revealed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(threshold: f64) -> RevealConfig {
        RevealConfig::with_threshold(threshold)
    }

    #[test]
    fn eager_reveals_immediately_without_observation() {
        let machine = RevealMachine::new(&RevealConfig::eager(), false);
        assert!(machine.revealed());
        assert!(!machine.needs_observation());
    }

    #[test]
    fn eager_wins_over_high_threshold() {
        let cfg = RevealConfig {
            threshold: 0.5,
            eager: true,
            ..RevealConfig::default()
        };
        let machine = RevealMachine::new(&cfg, false);
        assert!(machine.revealed());
    }

    #[test]
    fn reduced_motion_reveals_immediately() {
        let machine = RevealMachine::new(&config(0.2), true);
        assert!(machine.revealed());
        assert!(!machine.needs_observation());
    }

    #[test]
    fn starts_hidden_and_latches_at_threshold() {
        let mut machine = RevealMachine::new(&config(0.2), false);
        assert!(!machine.revealed());
        assert!(machine.needs_observation());

        assert!(!machine.report_ratio(0.1));
        assert!(!machine.revealed());

        assert!(machine.report_ratio(0.25));
        assert!(machine.revealed());

        // Scrolling away never re-hides.
        assert!(!machine.report_ratio(0.0));
        assert!(machine.revealed());
    }

    #[test]
    fn ratio_exactly_at_threshold_reveals() {
        let mut machine = RevealMachine::new(&config(0.15), false);
        assert!(machine.report_ratio(0.15));
        assert!(machine.revealed());
    }

    #[test]
    fn flip_is_reported_exactly_once() {
        let mut machine = RevealMachine::new(&config(0.1), false);
        assert!(machine.report_ratio(0.5));
        assert!(!machine.report_ratio(0.9));
        assert!(!machine.needs_observation());
    }

    #[test]
    fn stale_reports_after_detach_are_noops() {
        let mut machine = RevealMachine::new(&config(0.1), false);
        machine.detach();
        assert!(!machine.report_ratio(1.0));
        assert!(!machine.revealed());
        assert!(!machine.needs_observation());
    }

    #[test]
    fn stagger_is_monotone_in_index() {
        for (base, step) in [(0, 0), (40, 90), (80, 80), (200, 120)] {
            let mut last = 0;
            for i in 0..32 {
                let delay = stagger_delay(i, base, step);
                assert!(delay >= last, "delay regressed at index {i}");
                last = delay;
            }
        }
    }

    #[test]
    fn stagger_matches_base_plus_step() {
        assert_eq!(stagger_delay(0, 160, 90), 160);
        assert_eq!(stagger_delay(3, 160, 90), 430);
    }

    #[test]
    fn delay_style_applies_only_once_revealed() {
        assert_eq!(delay_style(true, 120), "transition-delay: 120ms");
        assert_eq!(delay_style(false, 120), "transition-delay: 0ms");
    }
}
