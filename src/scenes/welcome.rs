use yew::prelude::*;

use crate::components::silhouette::Silhouette;
use crate::motion::ambient::trail;
use crate::motion::pose::Pose;
use crate::motion::timeline::{use_elapsed, Cue, Layer, Timeline};
use crate::visibility::use_in_view;

pub const THRESHOLD: f64 = 0.4;

pub fn timeline() -> Timeline {
    Timeline::new()
        .cue(
            Cue::tween("figure", Layer::Backdrop, Pose::HIDDEN.x(-100.0), Pose::REST)
                .duration(1500)
                .delay(500),
        )
        .cue(Cue::tween("text", Layer::Heading, Pose::HIDDEN.x(100.0), Pose::REST).delay(1000))
        .cue(Cue::tween("heading", Layer::Heading, Pose::HIDDEN.y(30.0), Pose::REST).delay(1200))
        .cue(Cue::tween("lede", Layer::Body, Pose::HIDDEN.y(30.0), Pose::REST).delay(1400))
        .cue(Cue::tween("quote", Layer::Body, Pose::HIDDEN.y(30.0), Pose::REST).delay(1600))
}

#[function_component(WelcomeScene)]
pub fn welcome_scene() -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), THRESHOLD, "welcome");
    let timeline = use_memo(|_| timeline(), ());
    let sparks = use_memo(|_| trail(20, 2.0, 0.1), ());

    let elapsed = use_elapsed(in_view, timeline.total_ms());

    let style = |element: &str| timeline.style(element, elapsed);

    html! {
        <section ref={node} class="scene welcome-scene">
            <style>
                {r#"
                    .candle-glow {
                        position: absolute;
                        left: 25%;
                        top: 50%;
                        width: 8rem;
                        height: 8rem;
                        margin-top: -4rem;
                        border-radius: 50%;
                        background: rgba(234, 179, 8, 0.3);
                        filter: blur(64px);
                        animation: pulse-glow 3s ease-in-out infinite;
                    }
                    .welcome-figure {
                        position: absolute;
                        left: 25%;
                        top: 50%;
                        transform: translate(-50%, -50%);
                    }
                    .welcome-copy {
                        position: relative;
                        z-index: 10;
                        max-width: 42rem;
                        padding: 0 2rem;
                        margin-left: auto;
                        margin-right: 8rem;
                    }
                    .welcome-quote {
                        color: #9ca3af;
                        font-style: italic;
                        font-weight: 300;
                    }
                    .trail {
                        position: absolute;
                        left: 25%;
                        top: 50%;
                    }
                    .trail-spark {
                        position: absolute;
                        width: 4px;
                        height: 4px;
                        border-radius: 50%;
                        background: #fde047;
                        opacity: 0;
                        animation: spark-burst 5s ease-in-out infinite;
                    }
                    @media (max-width: 768px) {
                        .welcome-copy {
                            margin: 0 auto;
                            text-align: center;
                        }
                    }
                "#}
            </style>
            <div class="candle-glow"></div>
            <div class="welcome-figure">
                <div style={style("figure")}>
                    <Silhouette />
                </div>
            </div>
            <div class="welcome-copy">
                <div style={style("text")}>
                    <h2 class="scene-heading" style={style("heading")}>{"Welcome, traveler"}</h2>
                    <p class="scene-lede" style={style("lede")}>
                        {"In the vast darkness of space, I carry a small flame, a beacon of curiosity, ambition, and hope. This journey is my story, each step illuminated by the glow of dreams yet to be realized."}
                    </p>
                    <p class="welcome-quote" style={style("quote")}>
                        {"\"The light we carry within is stronger than any darkness we may encounter.\""}
                    </p>
                </div>
            </div>
            if in_view {
                <div class="trail">
                    { for sparks.iter().map(|spark| html! {
                        <div class="trail-spark" style={spark.style()}></div>
                    }) }
                </div>
            }
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_enters_after_the_figure() {
        let tl = timeline();
        assert!(tl.respects_reading_order());
        assert_eq!(tl.find("figure").unwrap().delay_ms, 500);
        assert_eq!(tl.find("quote").unwrap().delay_ms, 1600);
        assert_eq!(tl.find("text").unwrap().initial(), Pose::HIDDEN.x(100.0));
    }
}
