use gloo_timers::callback::Timeout;
use yew::prelude::*;

use super::pose::{Easing, Pose};
use crate::visibility::Edge;

/// Re-render period while a choreography is running.
pub const FRAME_MS: u32 = 16;

/// Reading-order group of a cue. Earlier layers start first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Layer {
    Backdrop,
    Heading,
    Body,
    Interactive,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Keyframe {
    /// Offset within the cue's duration, 0.0..=1.0.
    pub at: f64,
    pub pose: Pose,
}

/// One row of a choreography table.
#[derive(Clone, Debug, PartialEq)]
pub struct Cue {
    pub element: String,
    pub layer: Layer,
    pub frames: Vec<Keyframe>,
    pub delay_ms: u32,
    pub duration_ms: u32,
    pub easing: Easing,
}

impl Cue {
    pub fn tween(element: impl Into<String>, layer: Layer, initial: Pose, target: Pose) -> Self {
        Self {
            element: element.into(),
            layer,
            frames: vec![
                Keyframe { at: 0.0, pose: initial },
                Keyframe { at: 1.0, pose: target },
            ],
            delay_ms: 0,
            duration_ms: 1000,
            easing: Easing::default(),
        }
    }

    /// A multi-stop cue. Offsets are sorted and the first and last are pinned
    /// to 0.0 and 1.0.
    pub fn keyframes(element: impl Into<String>, layer: Layer, stops: &[(f64, Pose)]) -> Self {
        let mut frames: Vec<Keyframe> = stops
            .iter()
            .map(|(at, pose)| Keyframe { at: at.clamp(0.0, 1.0), pose: *pose })
            .collect();
        frames.sort_by(|a, b| a.at.total_cmp(&b.at));
        if frames.is_empty() {
            frames.push(Keyframe { at: 0.0, pose: Pose::REST });
        }
        if let Some(first) = frames.first_mut() {
            first.at = 0.0;
        }
        if frames.len() == 1 {
            let only = frames[0].pose;
            frames.push(Keyframe { at: 1.0, pose: only });
        }
        if let Some(last) = frames.last_mut() {
            last.at = 1.0;
        }
        Self {
            element: element.into(),
            layer,
            frames,
            delay_ms: 0,
            duration_ms: 1000,
            easing: Easing::default(),
        }
    }

    pub fn delay(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn duration(mut self, duration_ms: u32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn initial(&self) -> Pose {
        self.frames[0].pose
    }

    pub fn target(&self) -> Pose {
        self.frames[self.frames.len() - 1].pose
    }

    pub fn end_ms(&self) -> u32 {
        self.delay_ms.saturating_add(self.duration_ms)
    }

    /// Pose `elapsed_ms` after the gate opened.
    pub fn pose_at(&self, elapsed_ms: f64) -> Pose {
        let local = elapsed_ms - self.delay_ms as f64;
        if !(local > 0.0) {
            return self.initial();
        }
        if self.duration_ms == 0 || local >= self.duration_ms as f64 {
            return self.target();
        }
        let progress = local / self.duration_ms as f64;
        for pair in self.frames.windows(2) {
            let (from, to) = (pair[0], pair[1]);
            if progress <= to.at {
                let span = to.at - from.at;
                let t = if span > 0.0 { (progress - from.at) / span } else { 1.0 };
                return from.pose.lerp(to.pose, self.easing.apply(t));
            }
        }
        self.target()
    }
}

/// `base + step * index`, for cards that enter one after another.
pub fn stagger(base_ms: u32, step_ms: u32, index: usize) -> u32 {
    base_ms.saturating_add(step_ms.saturating_mul(index as u32))
}

/// The choreography of one scene.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Timeline {
    cues: Vec<Cue>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cue(mut self, cue: Cue) -> Self {
        self.cues.push(cue);
        self
    }

    #[cfg(test)]
    pub fn cues(&self) -> &[Cue] {
        &self.cues
    }

    pub fn find(&self, element: &str) -> Option<&Cue> {
        self.cues.iter().find(|c| c.element == element)
    }

    pub fn total_ms(&self) -> u32 {
        self.cues.iter().map(Cue::end_ms).max().unwrap_or(0)
    }

    /// Pose of `element` `elapsed_ms` after the gate opened, or its initial
    /// pose while the gate is shut.
    pub fn sample(&self, element: &str, elapsed_ms: Option<f64>) -> Option<Pose> {
        let cue = self.find(element)?;
        Some(match elapsed_ms {
            Some(elapsed) => cue.pose_at(elapsed),
            None => cue.initial(),
        })
    }

    /// Inline style for `element` at the given point of the playback.
    /// Unknown elements get no style.
    pub fn style(&self, element: &str, elapsed_ms: Option<f64>) -> String {
        self.sample(element, elapsed_ms)
            .map(|pose| pose.css())
            .unwrap_or_default()
    }

    /// Layers appear in reading order: no cue of a later layer starts before
    /// a cue of an earlier layer.
    #[cfg(test)]
    pub fn respects_reading_order(&self) -> bool {
        self.cues.iter().all(|earlier| {
            self.cues
                .iter()
                .filter(|later| later.layer > earlier.layer)
                .all(|later| later.delay_ms >= earlier.delay_ms)
        })
    }
}

/// When the scene's gate last opened. `None` while out of view.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Playback {
    triggered_at_ms: Option<f64>,
}

impl Playback {
    pub fn on_edge(&mut self, edge: Edge, now_ms: f64) {
        self.triggered_at_ms = match edge {
            Edge::Enter => Some(now_ms),
            Edge::Exit => None,
        };
    }

    #[cfg(test)]
    pub fn is_playing(&self) -> bool {
        self.triggered_at_ms.is_some()
    }

    pub fn elapsed(&self, now_ms: f64) -> Option<f64> {
        self.triggered_at_ms.map(|t| (now_ms - t).max(0.0))
    }
}

fn now_ms() -> f64 {
    web_sys::js_sys::Date::now()
}

/// Milliseconds since the scene last entered view, `None` while it is out of
/// view. Re-renders every [`FRAME_MS`] until `total_ms` has passed, then
/// holds still until the next edge.
#[hook]
pub fn use_elapsed(in_view: bool, total_ms: u32) -> Option<f64> {
    let playback = use_mut_ref(Playback::default);
    let clock = use_state(now_ms);

    {
        let playback = playback.clone();
        let clock = clock.clone();
        use_effect_with_deps(
            move |&in_view: &bool| {
                let now = now_ms();
                let edge = if in_view { Edge::Enter } else { Edge::Exit };
                playback.borrow_mut().on_edge(edge, now);
                clock.set(now);
                || ()
            },
            in_view,
        );
    }

    {
        let deps = *clock;
        let playback = playback.clone();
        let clock = clock.clone();
        use_effect_with_deps(
            move |&now: &f64| {
                let running = playback
                    .borrow()
                    .elapsed(now)
                    .map_or(false, |elapsed| elapsed < total_ms as f64);
                let frame = running.then(|| Timeout::new(FRAME_MS, move || clock.set(now_ms())));
                move || drop(frame)
            },
            deps,
        );
    }

    let elapsed = playback.borrow().elapsed(*clock);
    elapsed
}

/// Expanded card in a grid. Only user clicks change it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Selection(Option<usize>);

impl Selection {
    pub fn toggle(self, index: usize) -> Self {
        if self.0 == Some(index) {
            Selection(None)
        } else {
            Selection(Some(index))
        }
    }

    pub fn is_selected(self, index: usize) -> bool {
        self.0 == Some(index)
    }

    #[cfg(test)]
    pub fn get(self) -> Option<usize> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_timeline() -> Timeline {
        Timeline::new()
            .cue(
                Cue::tween("glow", Layer::Backdrop, Pose::HIDDEN.scale(0.0), Pose::REST)
                    .delay(500),
            )
            .cue(
                Cue::tween("heading", Layer::Heading, Pose::HIDDEN.y(30.0), Pose::REST)
                    .delay(1200),
            )
            .cue(
                Cue::tween("lede", Layer::Body, Pose::HIDDEN.y(30.0), Pose::REST)
                    .delay(1400)
                    .easing(Easing::Linear),
            )
            .cue(
                Cue::keyframes(
                    "burst",
                    Layer::Interactive,
                    &[
                        (0.0, Pose::HIDDEN.scale(0.0)),
                        (0.5, Pose::REST.opacity(0.6).scale(4.0)),
                        (1.0, Pose::HIDDEN.scale(0.0)),
                    ],
                )
                .delay(2000)
                .duration(2000),
            )
    }

    #[test]
    fn pose_is_initial_before_delay_and_target_after() {
        let tl = sample_timeline();
        let heading = tl.find("heading").unwrap();
        assert_eq!(heading.pose_at(0.0), heading.initial());
        assert_eq!(heading.pose_at(1200.0), heading.initial());
        assert_eq!(heading.pose_at(2200.0), heading.target());
        assert_eq!(heading.pose_at(90_000.0), Pose::REST);
    }

    #[test]
    fn linear_cue_interpolates_midway() {
        let tl = sample_timeline();
        let lede = tl.find("lede").unwrap().pose_at(1900.0);
        assert!((lede.opacity - 0.5).abs() < 1e-9);
        assert!((lede.y - 15.0).abs() < 1e-9);
    }

    #[test]
    fn keyframed_cue_passes_through_middle_stop() {
        let tl = sample_timeline();
        let burst = tl.find("burst").unwrap();
        assert_eq!(tl.sample("burst", None), Some(burst.initial()));
        assert!(burst.pose_at(3000.0).approx_eq(&Pose::REST.opacity(0.6).scale(4.0), 1e-9));
        assert_eq!(burst.pose_at(4000.0), Pose::HIDDEN.scale(0.0));
    }

    #[test]
    fn keyframes_are_normalised() {
        let cue = Cue::keyframes("k", Layer::Backdrop, &[(0.7, Pose::REST), (0.2, Pose::HIDDEN)]);
        assert_eq!(cue.frames[0].at, 0.0);
        assert_eq!(cue.frames[0].pose, Pose::HIDDEN);
        assert_eq!(cue.frames[1].at, 1.0);

        let single = Cue::keyframes("s", Layer::Backdrop, &[(0.5, Pose::HIDDEN)]);
        assert_eq!(single.frames.len(), 2);
        assert_eq!(single.initial(), single.target());
    }

    #[test]
    fn exit_resets_and_reentry_replays_identically() {
        let tl = sample_timeline();
        let mut playback = Playback::default();
        let offsets = [0.0, 250.0, 700.0, 1300.0, 1700.0, 1900.0, 2600.0, 3300.0, 5000.0];
        // The inline styles a scene renders on each frame after `start`.
        let frames = |playback: &Playback, start: f64| -> Vec<String> {
            tl.cues()
                .iter()
                .flat_map(|cue| {
                    offsets
                        .iter()
                        .map(|o| tl.style(&cue.element, playback.elapsed(start + o)))
                        .collect::<Vec<_>>()
                })
                .collect()
        };

        playback.on_edge(Edge::Enter, 10_000.0);
        let first = frames(&playback, 10_000.0);

        playback.on_edge(Edge::Exit, 12_000.0);
        for cue in tl.cues() {
            assert_eq!(
                tl.style(&cue.element, playback.elapsed(12_500.0)),
                cue.initial().css()
            );
        }

        playback.on_edge(Edge::Enter, 40_000.0);
        let second = frames(&playback, 40_000.0);
        assert_eq!(first, second);
    }

    #[test]
    fn style_runs_from_initial_to_target() {
        let tl = sample_timeline();
        assert_eq!(tl.style("heading", None), "opacity: 0; transform: translate(0px, 30px);");
        assert_eq!(tl.style("heading", Some(1000.0)), tl.style("heading", None));
        assert_eq!(tl.style("heading", Some(2500.0)), Pose::REST.css());
        assert_eq!(tl.style("missing", Some(0.0)), "");
    }

    #[test]
    fn inline_style_follows_the_easing_curve() {
        let tl = sample_timeline();
        // Halfway through the ease-out heading: 1 - 0.5^3 of the way there.
        assert_eq!(
            tl.style("heading", Some(1700.0)),
            "opacity: 0.875; transform: translate(0px, 3.75px);"
        );
        // The linear lede at the same point of its own tween.
        assert_eq!(
            tl.style("lede", Some(1900.0)),
            "opacity: 0.5; transform: translate(0px, 15px);"
        );
    }

    #[test]
    fn reading_order_detects_inversions() {
        assert!(sample_timeline().respects_reading_order());
        let inverted = Timeline::new()
            .cue(Cue::tween("h", Layer::Heading, Pose::HIDDEN, Pose::REST).delay(100))
            .cue(Cue::tween("bg", Layer::Backdrop, Pose::HIDDEN, Pose::REST).delay(900));
        assert!(!inverted.respects_reading_order());
    }

    #[test]
    fn stagger_adds_fixed_increment() {
        assert_eq!(stagger(2800, 200, 0), 2800);
        assert_eq!(stagger(2800, 200, 3), 3400);
    }

    #[test]
    fn total_duration_covers_last_cue() {
        assert_eq!(sample_timeline().total_ms(), 4000);
        assert_eq!(Timeline::new().total_ms(), 0);
    }

    #[test]
    fn selection_toggles_and_collapses() {
        let none = Selection::default();
        let second = none.toggle(1);
        assert!(second.is_selected(1));
        assert_eq!(second.toggle(3).get(), Some(3));
        assert_eq!(second.toggle(1).get(), None);
    }

    #[test]
    fn selection_survives_visibility_edges() {
        let selection = Selection::default().toggle(2);
        let mut playback = Playback::default();
        playback.on_edge(Edge::Enter, 0.0);
        playback.on_edge(Edge::Exit, 500.0);
        assert!(!playback.is_playing());
        assert_eq!(selection.get(), Some(2));
    }
}
