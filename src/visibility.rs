use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

pub const DEFAULT_THRESHOLD: f64 = 0.3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edge {
    Enter,
    Exit,
}

/// Edge-triggered view state for one scene instance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibilityGate {
    threshold: f64,
    in_view: bool,
}

impl VisibilityGate {
    pub fn new(threshold: f64) -> Self {
        let threshold = if threshold.is_nan() { DEFAULT_THRESHOLD } else { threshold.clamp(0.0, 1.0) };
        Self { threshold, in_view: false }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    #[cfg(test)]
    pub fn in_view(&self) -> bool {
        self.in_view
    }

    /// Feed one observation. Returns the edge when the view state flips.
    pub fn observe(&mut self, intersection_ratio: f64, is_intersecting: bool) -> Option<Edge> {
        let now = is_intersecting && intersection_ratio >= self.threshold;
        if now == self.in_view {
            return None;
        }
        self.in_view = now;
        Some(if now { Edge::Enter } else { Edge::Exit })
    }
}

impl Default for VisibilityGate {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

/// Whether the element behind `node` is at least `threshold` visible.
///
/// Fires on every enter and exit, not only the first entry.
#[hook]
pub fn use_in_view(node: NodeRef, threshold: f64, label: &'static str) -> bool {
    let in_view = use_state_eq(|| false);

    {
        let in_view = in_view.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let mut gate = VisibilityGate::new(threshold);
                let threshold = gate.threshold();
                let callback = Closure::wrap(Box::new(move |entries: Array, _observer: JsValue| {
                    for entry in entries.iter() {
                        let entry: IntersectionObserverEntry = entry.unchecked_into();
                        match gate.observe(entry.intersection_ratio(), entry.is_intersecting()) {
                            Some(Edge::Enter) => {
                                debug!("{} entered view", label);
                                in_view.set(true);
                            }
                            Some(Edge::Exit) => {
                                debug!("{} left view", label);
                                in_view.set(false);
                            }
                            None => {}
                        }
                    }
                }) as Box<dyn FnMut(Array, JsValue)>);

                let options = IntersectionObserverInit::new();
                options.set_threshold(&JsValue::from_f64(threshold));

                let observer = match IntersectionObserver::new_with_options(
                    callback.as_ref().unchecked_ref(),
                    &options,
                ) {
                    Ok(observer) => {
                        match node.cast::<web_sys::Element>() {
                            Some(element) => observer.observe(&element),
                            None => warn!("{} has no element to observe", label),
                        }
                        Some(observer)
                    }
                    Err(_) => {
                        warn!("IntersectionObserver unavailable for {}", label);
                        None
                    }
                };

                move || {
                    if let Some(observer) = observer {
                        observer.disconnect();
                    }
                    drop(callback);
                }
            },
            node,
        );
    }

    *in_view
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_out_of_view() {
        assert!(!VisibilityGate::new(0.3).in_view());
    }

    #[test]
    fn enter_requires_threshold() {
        let mut gate = VisibilityGate::new(0.4);
        assert_eq!(gate.observe(0.2, true), None);
        assert_eq!(gate.observe(0.4, true), Some(Edge::Enter));
        assert!(gate.in_view());
    }

    #[test]
    fn edges_fire_once_per_transition() {
        let mut gate = VisibilityGate::new(0.3);
        assert_eq!(gate.observe(0.5, true), Some(Edge::Enter));
        assert_eq!(gate.observe(0.9, true), None);
        assert_eq!(gate.observe(0.1, true), Some(Edge::Exit));
        assert_eq!(gate.observe(0.0, false), None);
        assert_eq!(gate.observe(0.6, true), Some(Edge::Enter));
    }

    #[test]
    fn not_intersecting_is_out_of_view_regardless_of_ratio() {
        let mut gate = VisibilityGate::new(0.0);
        assert_eq!(gate.observe(0.0, false), None);
        assert_eq!(gate.observe(0.0, true), Some(Edge::Enter));
        assert_eq!(gate.observe(1.0, false), Some(Edge::Exit));
    }

    #[test]
    fn threshold_is_clamped() {
        assert_eq!(VisibilityGate::new(1.7).threshold(), 1.0);
        assert_eq!(VisibilityGate::new(-0.2).threshold(), 0.0);
        assert_eq!(VisibilityGate::new(f64::NAN).threshold(), DEFAULT_THRESHOLD);
    }
}
