use yew::prelude::*;

use crate::components::silhouette::Silhouette;
use crate::motion::pose::Pose;
use crate::motion::timeline::{stagger, use_elapsed, Cue, Layer, Selection, Timeline};
use crate::visibility::use_in_view;

pub const THRESHOLD: f64 = 0.3;

pub struct Skill {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub details: &'static str,
    pub gradient: &'static str,
}

pub const SKILLS: [Skill; 6] = [
    Skill {
        icon: "</>",
        title: "Frontend Development",
        description: "React, TypeScript, Next.js, Vue.js, Angular",
        details: "Building responsive, accessible, and performant user interfaces with modern frameworks and best practices.",
        gradient: "linear-gradient(90deg, #3b82f6, #06b6d4)",
    },
    Skill {
        icon: "🎨",
        title: "UI/UX Design",
        description: "Figma, Adobe Creative Suite, Prototyping",
        details: "Creating intuitive and beautiful user experiences through thoughtful design and user research.",
        gradient: "linear-gradient(90deg, #a855f7, #ec4899)",
    },
    Skill {
        icon: "🗄",
        title: "Backend Development",
        description: "Node.js, Python, PostgreSQL, MongoDB",
        details: "Developing scalable server-side applications and robust database architectures.",
        gradient: "linear-gradient(90deg, #22c55e, #10b981)",
    },
    Skill {
        icon: "🌐",
        title: "Web Technologies",
        description: "HTML5, CSS3, JavaScript, WebGL, Three.js",
        details: "Leveraging cutting-edge web technologies to create immersive digital experiences.",
        gradient: "linear-gradient(90deg, #f97316, #ef4444)",
    },
    Skill {
        icon: "📱",
        title: "Mobile Development",
        description: "React Native, Flutter, iOS, Android",
        details: "Building cross-platform mobile applications with native performance and feel.",
        gradient: "linear-gradient(90deg, #6366f1, #a855f7)",
    },
    Skill {
        icon: "⚡",
        title: "Performance & Optimization",
        description: "Webpack, Vite, PWA, Performance Auditing",
        details: "Optimizing applications for speed, accessibility, and user experience across all devices.",
        gradient: "linear-gradient(90deg, #eab308, #f97316)",
    },
];

fn card(index: usize) -> String {
    format!("skill-{}", index)
}

pub fn timeline() -> Timeline {
    let mut tl = Timeline::new()
        .cue(Cue::tween("astronaut", Layer::Backdrop, Pose::HIDDEN.scale(0.8), Pose::REST).delay(500))
        .cue(
            Cue::tween("figure", Layer::Backdrop, Pose::HIDDEN.x(-100.0), Pose::REST)
                .duration(1500)
                .delay(1000),
        )
        .cue(
            Cue::keyframes(
                "ripple",
                Layer::Backdrop,
                &[
                    (0.0, Pose::HIDDEN.scale(0.0)),
                    (0.5, Pose::REST.opacity(0.6).scale(4.0)),
                    (1.0, Pose::HIDDEN.scale(0.0)),
                ],
            )
            .duration(2000)
            .delay(2500),
        )
        .cue(Cue::tween("content", Layer::Heading, Pose::HIDDEN.y(50.0), Pose::REST).delay(3000))
        .cue(Cue::tween("heading", Layer::Heading, Pose::HIDDEN.y(30.0), Pose::REST).delay(3200))
        .cue(Cue::tween("lede", Layer::Body, Pose::HIDDEN.y(30.0), Pose::REST).delay(3400))
        .cue(Cue::tween("grid", Layer::Interactive, Pose::HIDDEN.scale(0.8), Pose::REST).delay(3600));
    for i in 0..SKILLS.len() {
        tl = tl.cue(
            Cue::tween(card(i), Layer::Interactive, Pose::HIDDEN.y(30.0).scale(0.8), Pose::REST)
                .delay(stagger(3800, 100, i)),
        );
    }
    tl
}

#[function_component(SkillsScene)]
pub fn skills_scene() -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), THRESHOLD, "skills");
    let timeline = use_memo(|_| timeline(), ());
    let selected = use_state(Selection::default);

    let elapsed = use_elapsed(in_view, timeline.total_ms());

    let style = |element: &str| timeline.style(element, elapsed);

    html! {
        <section ref={node} class="scene skills-scene">
            <style>
                {r#"
                    .skills-astronaut {
                        position: absolute;
                        right: 33%;
                        top: 50%;
                        transform: translateY(-50%);
                    }
                    .skills-figure {
                        position: absolute;
                        left: 33%;
                        top: 50%;
                        transform: translateY(-50%);
                    }
                    .skills-ripple {
                        position: absolute;
                        right: 33%;
                        top: 50%;
                        transform: translate(-2rem, -50%);
                    }
                    .skills-ripple .ring {
                        width: 8rem;
                        height: 8rem;
                        border-radius: 50%;
                        border: 2px solid #c084fc;
                    }
                    .skills-copy {
                        position: relative;
                        z-index: 10;
                        max-width: 72rem;
                        margin: 0 auto;
                        text-align: center;
                    }
                    .skill-grid {
                        display: grid;
                        grid-template-columns: repeat(3, minmax(0, 1fr));
                        gap: 1.5rem;
                    }
                    .skill-card {
                        position: relative;
                        padding: 1.5rem;
                        border-radius: 0.75rem;
                        cursor: pointer;
                        border: 1px solid rgba(255, 255, 255, 0.2);
                        background: rgba(0, 0, 0, 0.2);
                        transition: all 0.3s ease;
                    }
                    .skill-card:hover {
                        border-color: rgba(192, 132, 252, 0.5);
                        background: rgba(0, 0, 0, 0.3);
                        transform: translateY(-5px);
                    }
                    .skill-card.selected {
                        border-color: #c084fc;
                        background: rgba(0, 0, 0, 0.4);
                        transform: scale(1.05);
                    }
                    .skill-icon {
                        width: 3rem;
                        height: 3rem;
                        margin: 0 auto 1rem;
                        border-radius: 0.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        color: #fff;
                        font-weight: 600;
                    }
                    .skill-card h3 {
                        color: #fff;
                        font-size: 1.125rem;
                        font-weight: 500;
                        margin: 0 0 0.5rem;
                    }
                    .skill-card p {
                        color: #9ca3af;
                        font-size: 0.875rem;
                        line-height: 1.6;
                        margin: 0;
                    }
                    .skill-details {
                        position: absolute;
                        left: 1.5rem;
                        right: 1.5rem;
                        bottom: 1.5rem;
                        padding: 1rem;
                        border-radius: 0.5rem;
                        background: rgba(168, 85, 247, 0.1);
                        border: 1px solid rgba(168, 85, 247, 0.2);
                        animation: unfold 0.3s ease-out both;
                    }
                    .skill-details p {
                        color: #d1d5db;
                    }
                    @media (max-width: 768px) {
                        .skill-grid {
                            grid-template-columns: repeat(2, minmax(0, 1fr));
                        }
                    }
                "#}
            </style>
            <div class="skills-astronaut">
                <div style={style("astronaut")}>
                    <div class="astronaut">
                        <div class="astronaut-helmet">
                            <div class="astronaut-visor"></div>
                        </div>
                        <div class="astronaut-panel"></div>
                    </div>
                </div>
            </div>
            <div class="skills-figure">
                <div style={style("figure")}>
                    <Silhouette reaching=true />
                </div>
            </div>
            <div class="skills-ripple">
                <div style={style("ripple")}>
                    <div class="ring"></div>
                </div>
            </div>
            <div class="skills-copy">
                <div style={style("content")}>
                    <h2 class="scene-heading" style={style("heading")}>
                        {"Skills & "}<span class="accent">{"Expertise"}</span>
                    </h2>
                    <p class="scene-lede" style={style("lede")}>
                        {"Through years of exploration in the digital cosmos, I've gathered knowledge across the full spectrum of web development and design."}
                    </p>
                    <div class="skill-grid" style={style("grid")}>
                        { for SKILLS.iter().enumerate().map(|(i, skill)| {
                            let is_selected = selected.is_selected(i);
                            let onclick = {
                                let selected = selected.clone();
                                Callback::from(move |_: MouseEvent| selected.set(selected.toggle(i)))
                            };
                            html! {
                                <div style={style(card(i).as_str())}>
                                    <div class={classes!("skill-card", is_selected.then(|| "selected"))} {onclick}>
                                        <div class="skill-icon" style={format!("background: {};", skill.gradient)}>
                                            {skill.icon}
                                        </div>
                                        <h3>{skill.title}</h3>
                                        <p>{skill.description}</p>
                                        if is_selected {
                                            <div class="skill-details">
                                                <p>{skill.details}</p>
                                            </div>
                                        }
                                    </div>
                                </div>
                            }
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
    fn skill_cards_stagger_by_a_tenth() {
        let tl = timeline();
        assert!(tl.respects_reading_order());
        let delays: Vec<u32> = (0..SKILLS.len())
            .map(|i| tl.find(card(i).as_str()).unwrap().delay_ms)
            .collect();
        assert_eq!(delays, vec![3800, 3900, 4000, 4100, 4200, 4300]);
    }

    #[test]
    fn ripple_fires_before_the_heading() {
        let tl = timeline();
        let ripple = tl.find("ripple").unwrap();
        assert!(ripple.delay_ms < tl.find("heading").unwrap().delay_ms);
        assert_eq!(ripple.frames.len(), 3);
        assert_eq!(ripple.initial(), ripple.target());
    }
}
