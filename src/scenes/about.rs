use yew::prelude::*;

use crate::components::silhouette::Silhouette;
use crate::motion::pose::Pose;
use crate::motion::timeline::{stagger, use_elapsed, Cue, Layer, Timeline};
use crate::visibility::use_in_view;

pub const THRESHOLD: f64 = 0.3;

pub struct Trait {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const TRAITS: [Trait; 4] = [
    Trait {
        icon: "✨",
        title: "Curious Explorer",
        description: "Always seeking new technologies and creative solutions to complex problems.",
    },
    Trait {
        icon: "♥",
        title: "Passionate Creator",
        description: "Driven by the desire to build meaningful experiences that make a difference.",
    },
    Trait {
        icon: "◎",
        title: "Detail-Oriented",
        description: "Committed to excellence in every pixel, every line of code, every interaction.",
    },
    Trait {
        icon: "🚀",
        title: "Future-Focused",
        description: "Embracing emerging technologies while building for tomorrow's possibilities.",
    },
];

fn card(index: usize) -> String {
    format!("trait-{}", index)
}

pub fn timeline() -> Timeline {
    let mut tl = Timeline::new()
        .cue(Cue::tween("light", Layer::Backdrop, Pose::HIDDEN.scale(0.0), Pose::REST).delay(500))
        .cue(
            Cue::tween("rays", Layer::Backdrop, Pose::HIDDEN.scale_x(0.0), Pose::REST)
                .duration(2000)
                .delay(1000),
        )
        .cue(
            Cue::tween("figure", Layer::Backdrop, Pose::HIDDEN.x(-200.0), Pose::REST.x(50.0))
                .duration(2000)
                .delay(1500),
        )
        .cue(Cue::tween("content", Layer::Heading, Pose::HIDDEN.y(50.0), Pose::REST).delay(2000))
        .cue(Cue::tween("heading", Layer::Heading, Pose::HIDDEN.y(30.0), Pose::REST).delay(2200))
        .cue(Cue::tween("lede", Layer::Body, Pose::HIDDEN.y(30.0), Pose::REST).delay(2400))
        .cue(Cue::tween("grid", Layer::Interactive, Pose::HIDDEN.y(50.0), Pose::REST).delay(2600));
    for i in 0..TRAITS.len() {
        tl = tl.cue(
            Cue::tween(card(i), Layer::Interactive, Pose::HIDDEN.y(30.0), Pose::REST)
                .delay(stagger(2800, 200, i)),
        );
    }
    tl
}

#[function_component(AboutScene)]
pub fn about_scene() -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), THRESHOLD, "about");
    let timeline = use_memo(|_| timeline(), ());

    let elapsed = use_elapsed(in_view, timeline.total_ms());

    let style = |element: &str| timeline.style(element, elapsed);

    html! {
        <section ref={node} class="scene about-scene">
            <style>
                {r#"
                    .distant-light {
                        position: absolute;
                        right: 25%;
                        top: 33%;
                    }
                    .light-core {
                        position: relative;
                        width: 1rem;
                        height: 1rem;
                        border-radius: 50%;
                        background: #fff;
                    }
                    .light-halo {
                        position: absolute;
                        inset: 0;
                        border-radius: 50%;
                        background: #fff;
                        filter: blur(12px);
                        animation: halo 4s ease-in-out infinite;
                    }
                    .light-rays {
                        position: absolute;
                        right: 25%;
                        top: 33%;
                        width: 24rem;
                        height: 4px;
                    }
                    .light-rays > div {
                        width: 100%;
                        height: 100%;
                        background: linear-gradient(270deg, rgba(255, 255, 255, 0.5), transparent);
                        transform-origin: right center;
                    }
                    .about-figure {
                        position: absolute;
                        left: 50%;
                        top: 50%;
                        transform: translate(-50%, -50%);
                    }
                    .about-copy {
                        position: relative;
                        z-index: 10;
                        max-width: 56rem;
                        margin: 0 auto;
                        text-align: center;
                    }
                    .trait-grid {
                        display: grid;
                        grid-template-columns: repeat(2, minmax(0, 1fr));
                        gap: 1.5rem;
                        margin-top: 3rem;
                    }
                    .trait-card {
                        display: flex;
                        gap: 1rem;
                        text-align: left;
                        padding: 1.5rem;
                        border-radius: 0.5rem;
                        background: rgba(0, 0, 0, 0.2);
                        backdrop-filter: blur(4px);
                        border: 1px solid rgba(168, 85, 247, 0.2);
                        transition: all 0.3s ease;
                    }
                    .trait-card:hover {
                        border-color: rgba(168, 85, 247, 0.4);
                        transform: translateY(-5px) scale(1.05);
                    }
                    .trait-icon {
                        padding: 0.5rem;
                        height: fit-content;
                        border-radius: 0.5rem;
                        background: rgba(168, 85, 247, 0.2);
                    }
                    .trait-card h3 {
                        color: #fff;
                        font-size: 1.125rem;
                        font-weight: 500;
                        margin: 0 0 0.5rem;
                    }
                    .trait-card p {
                        color: #9ca3af;
                        font-size: 0.875rem;
                        line-height: 1.6;
                        margin: 0;
                    }
                    @media (max-width: 768px) {
                        .trait-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
            <div class="distant-light">
                <div style={style("light")}>
                    <div class="light-core">
                        <div class="light-halo"></div>
                    </div>
                </div>
            </div>
            <div class="light-rays">
                <div style={style("rays")}></div>
            </div>
            <div class="about-figure">
                <div style={style("figure")}>
                    <Silhouette />
                </div>
            </div>
            <div class="about-copy">
                <div style={style("content")}>
                    <h2 class="scene-heading" style={style("heading")}>
                        {"I'm "}<span class="accent">{"Sparkles"}</span>
                    </h2>
                    <p class="scene-lede" style={style("lede")}>
                        {"A developer who believes that every line of code is a step toward illuminating the digital universe. In the distance, I see hope, a guiding light that pulls me forward through challenges and inspires me to create experiences that matter."}
                    </p>
                    <div class="trait-grid" style={style("grid")}>
                        { for TRAITS.iter().enumerate().map(|(i, t)| html! {
                            <div style={style(card(i).as_str())}>
                                <div class="trait-card">
                                    <div class="trait-icon">{t.icon}</div>
                                    <div>
                                        <h3>{t.title}</h3>
                                        <p>{t.description}</p>
                                    </div>
                                </div>
                            </div>
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trait_cards_stagger_after_the_copy() {
        let tl = timeline();
        assert!(tl.respects_reading_order());
        let delays: Vec<u32> = (0..TRAITS.len())
            .map(|i| tl.find(&card(i)).unwrap().delay_ms)
            .collect();
        assert_eq!(delays, vec![2800, 3000, 3200, 3400]);
    }

    #[test]
    fn figure_walks_toward_the_light() {
        let figure = timeline().find("figure").unwrap().clone();
        assert_eq!(figure.initial().x, -200.0);
        assert_eq!(figure.target().x, 50.0);
        assert_eq!(figure.end_ms(), 3500);
    }
}
