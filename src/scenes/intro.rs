use yew::prelude::*;

use crate::motion::ambient::{inbound_particles, star_streaks, twinkles};
use crate::motion::pose::Pose;
use crate::motion::timeline::{use_elapsed, Cue, Layer, Timeline};
use crate::visibility::use_in_view;

pub const THRESHOLD: f64 = 0.3;

/// The tunnel runs on its own; only the title card is gated.
pub fn timeline() -> Timeline {
    Timeline::new()
        .cue(
            Cue::tween("content", Layer::Heading, Pose::HIDDEN.y(100.0), Pose::REST)
                .duration(1500)
                .delay(2000),
        )
        .cue(
            Cue::tween("title", Layer::Heading, Pose::HIDDEN.scale(0.8), Pose::REST)
                .duration(1500)
                .delay(2500),
        )
        .cue(Cue::tween("lede", Layer::Body, Pose::HIDDEN.y(30.0), Pose::REST).delay(3000))
        .cue(Cue::tween("hint", Layer::Body, Pose::HIDDEN, Pose::REST).delay(3500))
}

#[function_component(IntroScene)]
pub fn intro_scene() -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), THRESHOLD, "intro");
    let timeline = use_memo(|_| timeline(), ());
    let stars = use_state(|| twinkles(&mut rand::thread_rng(), 200));
    let streaks = use_state(|| star_streaks(&mut rand::thread_rng(), 150));
    let particles = use_state(|| inbound_particles(&mut rand::thread_rng(), 50));

    let elapsed = use_elapsed(in_view, timeline.total_ms());

    let style = |element: &str| timeline.style(element, elapsed);

    html! {
        <section ref={node} class="scene intro-scene">
            <style>
                {r#"
                    .intro-scene {
                        background: #000;
                    }
                    .tunnel {
                        position: absolute;
                        inset: 0;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .vanishing-glow {
                        position: absolute;
                        width: 8rem;
                        height: 8rem;
                        border-radius: 50%;
                        background: rgba(168, 85, 247, 0.2);
                        filter: blur(64px);
                        animation: pulse-glow 4s ease-in-out infinite;
                    }
                    .streak {
                        position: absolute;
                        left: 50%;
                        top: 50%;
                        height: 1px;
                        transform-origin: left center;
                    }
                    .streak-line {
                        width: 100%;
                        height: 100%;
                        border-radius: 9999px;
                        background: linear-gradient(90deg, transparent, #bfdbfe, transparent);
                        transform-origin: left center;
                        animation: streak 2s linear infinite;
                        animation-delay: inherit;
                    }
                    .radial-ray {
                        position: absolute;
                        left: 50%;
                        bottom: 50%;
                        width: 4px;
                        height: 60vh;
                        transform-origin: bottom center;
                    }
                    .radial-ray-beam {
                        width: 100%;
                        height: 100%;
                        background: linear-gradient(0deg, transparent, rgba(216, 180, 254, 0.5), transparent);
                        transform-origin: bottom center;
                        animation: ray-flash 3s ease-in-out infinite;
                    }
                    .depth-ring {
                        position: absolute;
                        border-radius: 50%;
                        border: 1px solid rgba(192, 132, 252, 0.2);
                        animation: ring-pulse 4s ease-in-out infinite;
                    }
                    .inbound {
                        position: absolute;
                        left: 50%;
                        top: 50%;
                        width: 4px;
                        height: 4px;
                        border-radius: 50%;
                        background: #93c5fd;
                        animation: inbound cubic-bezier(0.42, 0, 1, 1) infinite;
                    }
                    .intro-copy {
                        position: relative;
                        z-index: 10;
                        text-align: center;
                        padding: 0 2rem;
                    }
                    .intro-title {
                        font-family: 'Space Grotesk', sans-serif;
                        font-weight: 300;
                        font-size: clamp(3.5rem, 9vw, 6rem);
                        letter-spacing: 0.05em;
                        color: #fff;
                        margin: 0 0 2rem;
                    }
                    .intro-title .glow-word {
                        display: block;
                        position: relative;
                    }
                    .intro-title .glow-echo {
                        position: absolute;
                        inset: 0;
                        filter: blur(4px);
                        animation: echo 2s ease-in-out infinite;
                    }
                    .intro-lede {
                        font-size: clamp(1.25rem, 2.5vw, 1.5rem);
                        font-weight: 300;
                        color: #d1d5db;
                        max-width: 42rem;
                        margin: 0 auto 2rem;
                        line-height: 1.6;
                    }
                    .intro-hint {
                        color: #9ca3af;
                        font-size: 1.125rem;
                        font-weight: 300;
                    }
                    .intro-hint span {
                        display: inline-block;
                        animation: bob 2s ease-in-out infinite;
                    }
                    .vignette {
                        position: absolute;
                        inset: 0;
                        pointer-events: none;
                        background: radial-gradient(circle, transparent 40%, rgba(0, 0, 0, 0.6));
                    }
                    .fade-bottom {
                        position: absolute;
                        left: 0;
                        right: 0;
                        bottom: 0;
                        height: 8rem;
                        pointer-events: none;
                        background: linear-gradient(0deg, #000, transparent);
                    }
                "#}
            </style>
            <div class="scene-layer">
                { for stars.iter().map(|star| html! {
                    <div class="twinkle" style={star.style()}></div>
                }) }
            </div>
            <div class="tunnel">
                <div class="vanishing-glow"></div>
                { for streaks.iter().map(|streak| html! {
                    <div class="streak" style={streak.style()}>
                        <div class="streak-line"></div>
                    </div>
                }) }
                { for (0..8).map(|i| html! {
                    <div class="radial-ray" style={format!("transform: translateX(-50%) rotate({}deg);", i * 45)}>
                        <div class="radial-ray-beam" style={format!("animation-delay: {:.1}s;", i as f64 * 0.2)}></div>
                    </div>
                }) }
                { for (0..5).map(|i| {
                    let size = (i + 1) * 100;
                    html! {
                        <div
                            class="depth-ring"
                            style={format!("width: {size}px; height: {size}px; animation-delay: {:.1}s;", i as f64 * 0.5)}
                        ></div>
                    }
                }) }
            </div>
            <div class="scene-layer">
                { for particles.iter().map(|p| html! {
                    <div class="inbound" style={p.style()}></div>
                }) }
            </div>
            <div class="intro-copy">
                <div style={style("content")}>
                    <h1 class="intro-title" style={style("title")}>
                        {"Into the"}
                        <span class="glow-word gradient-text">
                            {"Glow"}
                            <span class="glow-echo gradient-text">{"Glow"}</span>
                        </span>
                    </h1>
                    <p class="intro-lede" style={style("lede")}>
                        {"A journey through the cosmos, where each scroll unveils a new chapter of discovery, dreams, and the endless pursuit of light in the darkness."}
                    </p>
                    <div class="intro-hint" style={style("hint")}>
                        <span>{"Scroll to begin your descent through the stars ↓"}</span>
                    </div>
                </div>
            </div>
            <div class="vignette"></div>
            <div class="fade-bottom"></div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_card_follows_the_tunnel() {
        let tl = timeline();
        assert!(tl.respects_reading_order());
        let delays: Vec<u32> = tl.cues().iter().map(|c| c.delay_ms).collect();
        assert_eq!(delays, vec![2000, 2500, 3000, 3500]);
        assert_eq!(tl.total_ms(), 4500);
    }
}
