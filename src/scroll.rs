use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

/// One full-viewport section of the page, in scroll order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scene {
    Intro,
    Welcome,
    About,
    Skills,
    Projects,
    Contact,
}

impl Scene {
    pub const ALL: [Scene; 6] = [
        Scene::Intro,
        Scene::Welcome,
        Scene::About,
        Scene::Skills,
        Scene::Projects,
        Scene::Contact,
    ];

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    pub fn label(self) -> &'static str {
        match self {
            Scene::Intro => "Home",
            Scene::Welcome => "Welcome",
            Scene::About => "About",
            Scene::Skills => "Skills",
            Scene::Projects => "Projects",
            Scene::Contact => "Contact",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Scene::Intro => "⌂",
            Scene::Welcome => "🕯",
            Scene::About => "☺",
            Scene::Skills => "⌨",
            Scene::Projects => "✦",
            Scene::Contact => "✉",
        }
    }
}

pub const SCENE_COUNT: usize = Scene::ALL.len();

/// Bucket a vertical scroll offset into a scene index.
///
/// Each scene occupies exactly one viewport height. Degenerate input (zero,
/// negative or NaN height, negative or NaN offset) maps to the first scene and
/// the result never exceeds `scene_count - 1`.
pub fn scene_index(offset_px: f64, viewport_height_px: f64, scene_count: usize) -> usize {
    if scene_count == 0 {
        return 0;
    }
    if !(viewport_height_px > 0.0) || !(offset_px > 0.0) {
        return 0;
    }
    let bucket = (offset_px / viewport_height_px).floor();
    if !bucket.is_finite() {
        return scene_count - 1;
    }
    (bucket as usize).min(scene_count - 1)
}

/// Pixel offset at which the scene with `index` starts.
pub fn scene_offset(index: usize, viewport_height_px: f64) -> f64 {
    if !(viewport_height_px > 0.0) {
        return 0.0;
    }
    index as f64 * viewport_height_px
}

/// Anything that can carry out a scroll command.
pub trait Scroller {
    fn viewport_height(&self) -> f64;
    fn scroll_to(&self, top_px: f64);
}

/// Smooth-scrolls the browser window.
pub struct WindowScroller;

impl Scroller for WindowScroller {
    fn viewport_height(&self) -> f64 {
        web_sys::window()
            .and_then(|w| w.inner_height().ok())
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0)
    }

    fn scroll_to(&self, top_px: f64) {
        match web_sys::window() {
            Some(window) => {
                let options = ScrollToOptions::new();
                options.set_top(top_px);
                options.set_behavior(ScrollBehavior::Smooth);
                window.scroll_to_with_scroll_to_options(&options);
            }
            None => warn!("No window to scroll"),
        }
    }
}

/// Scroll so that `scene` fills the viewport. Issues exactly one command.
pub fn jump_to<S: Scroller>(scroller: &S, scene: Scene) {
    let top = scene_offset(scene.index(), scroller.viewport_height());
    debug!("Jumping to {:?} at {}px", scene, top);
    scroller.scroll_to(top);
}

/// Warns when the scroll listener could not be attached or detached.
fn listener_changed<E>(result: Result<(), E>, action: &str) -> bool {
    if result.is_err() {
        warn!("Could not {} scroll listener", action);
        return false;
    }
    true
}

fn read_scene_index(window: &web_sys::Window) -> usize {
    let offset = window.scroll_y().unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    scene_index(offset, height, SCENE_COUNT)
}

/// Page-wide scene index, updated from the window's scroll events.
#[hook]
pub fn use_scene_index() -> usize {
    let current = use_state_eq(|| 0usize);

    {
        let current = current.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let listener = window.as_ref().map(|window| {
                    current.set(read_scene_index(window));

                    let window_clone = window.clone();
                    let scroll_callback = Closure::wrap(Box::new(move || {
                        current.set(read_scene_index(&window_clone));
                    }) as Box<dyn FnMut()>);

                    listener_changed(
                        window.add_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        ),
                        "attach",
                    );
                    (window.clone(), scroll_callback)
                });

                move || {
                    if let Some((window, scroll_callback)) = listener {
                        listener_changed(
                            window.remove_event_listener_with_callback(
                                "scroll",
                                scroll_callback.as_ref().unchecked_ref(),
                            ),
                            "detach",
                        );
                    }
                }
            },
            (),
        );
    }

    *current
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    const H: f64 = 800.0;

    #[test]
    fn scene_index_buckets_by_viewport_height() {
        assert_eq!(scene_index(0.0, H, SCENE_COUNT), 0);
        assert_eq!(scene_index(H - 1.0, H, SCENE_COUNT), 0);
        assert_eq!(scene_index(H, H, SCENE_COUNT), 1);
        assert_eq!(scene_index(H * 3.5, H, SCENE_COUNT), 3);
    }

    #[test]
    fn scene_index_clamps_to_last_scene() {
        assert_eq!(scene_index(H * 10.0, H, SCENE_COUNT), 5);
        assert_eq!(scene_index(f64::INFINITY, H, SCENE_COUNT), 5);
        assert_eq!(scene_index(f64::MAX, 1e-300, SCENE_COUNT), 5);
    }

    #[test]
    fn degenerate_viewport_maps_to_first_scene() {
        assert_eq!(scene_index(1200.0, 0.0, SCENE_COUNT), 0);
        assert_eq!(scene_index(1200.0, -10.0, SCENE_COUNT), 0);
        assert_eq!(scene_index(1200.0, f64::NAN, SCENE_COUNT), 0);
        assert_eq!(scene_index(f64::NAN, H, SCENE_COUNT), 0);
        assert_eq!(scene_index(-50.0, H, SCENE_COUNT), 0);
        assert_eq!(scene_index(H * 2.0, H, 0), 0);
    }

    #[test]
    fn scene_index_is_monotonic_in_offset() {
        let mut last = 0;
        for step in 0..200 {
            let idx = scene_index(step as f64 * 37.0, H, SCENE_COUNT);
            assert!(idx >= last);
            assert!(idx < SCENE_COUNT);
            last = idx;
        }
    }

    #[test]
    fn scene_count_follows_scene_list() {
        assert_eq!(SCENE_COUNT, 6);
        for (i, scene) in Scene::ALL.iter().enumerate() {
            assert_eq!(scene.index(), i);
        }
    }

    struct RecordingScroller {
        height: f64,
        commands: RefCell<Vec<f64>>,
    }

    impl Scroller for RecordingScroller {
        fn viewport_height(&self) -> f64 {
            self.height
        }

        fn scroll_to(&self, top_px: f64) {
            self.commands.borrow_mut().push(top_px);
        }
    }

    #[test]
    fn jump_issues_one_command_per_click() {
        let scroller = RecordingScroller {
            height: H,
            commands: RefCell::new(Vec::new()),
        };
        jump_to(&scroller, Scene::Skills);
        assert_eq!(*scroller.commands.borrow(), vec![3.0 * H]);

        jump_to(&scroller, Scene::Intro);
        assert_eq!(*scroller.commands.borrow(), vec![3.0 * H, 0.0]);
    }

    #[test]
    fn jump_with_zero_viewport_scrolls_to_top() {
        let scroller = RecordingScroller {
            height: 0.0,
            commands: RefCell::new(Vec::new()),
        };
        jump_to(&scroller, Scene::Contact);
        assert_eq!(*scroller.commands.borrow(), vec![0.0]);
    }

    #[test]
    fn listener_failures_are_reported_both_ways() {
        assert!(listener_changed(Ok::<(), ()>(()), "attach"));
        assert!(!listener_changed(Err::<(), _>("no window"), "attach"));
        assert!(!listener_changed(Err::<(), _>("no window"), "detach"));
    }
}
