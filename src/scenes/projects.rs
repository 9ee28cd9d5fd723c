use yew::prelude::*;

use crate::components::silhouette::Silhouette;
use crate::motion::pose::{Easing, Pose};
use crate::motion::timeline::{stagger, use_elapsed, Cue, Layer, Selection, Timeline};
use crate::visibility::use_in_view;

pub const THRESHOLD: f64 = 0.3;

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub image: &'static str,
    pub icon: &'static str,
    pub details: &'static str,
    pub live_url: &'static str,
    pub github_url: &'static str,
    pub featured: bool,
}

pub const PROJECTS: [Project; 4] = [
    Project {
        title: "Stellar UI Framework",
        description: "A comprehensive React component library with space-themed design system",
        tags: &["React", "TypeScript", "Storybook", "CSS-in-JS"],
        image: "https://images.pexels.com/photos/998641/pexels-photo-998641.jpeg?auto=compress&cs=tinysrgb&w=800",
        icon: "★",
        details: "Built a complete design system with 50+ components, used by 10+ companies. Features dark/light themes, full accessibility compliance, and comprehensive documentation.",
        live_url: "#",
        github_url: "#",
        featured: true,
    },
    Project {
        title: "Cosmic Dashboard",
        description: "Real-time analytics dashboard with interactive data visualizations",
        tags: &["Next.js", "D3.js", "PostgreSQL", "Redis"],
        image: "https://images.pexels.com/photos/355948/pexels-photo-355948.jpeg?auto=compress&cs=tinysrgb&w=800",
        icon: "⚡",
        details: "Created a high-performance dashboard handling 1M+ data points with real-time updates, custom charts, and advanced filtering capabilities.",
        live_url: "#",
        github_url: "#",
        featured: true,
    },
    Project {
        title: "Nebula E-commerce",
        description: "Full-stack e-commerce platform with advanced search and recommendations",
        tags: &["Vue.js", "Node.js", "MongoDB", "Stripe"],
        image: "https://images.pexels.com/photos/57043/pexels-photo-57043.jpeg?auto=compress&cs=tinysrgb&w=800",
        icon: "🌐",
        details: "Developed a complete e-commerce solution with AI-powered recommendations, secure payments, and inventory management.",
        live_url: "#",
        github_url: "#",
        featured: false,
    },
    Project {
        title: "Galaxy Mobile App",
        description: "Cross-platform mobile app for space exploration and education",
        tags: &["React Native", "Expo", "Firebase", "AR"],
        image: "https://images.pexels.com/photos/87651/earth-blue-planet-globe-planet-87651.jpeg?auto=compress&cs=tinysrgb&w=800",
        icon: "📱",
        details: "Built an educational app with AR features, 3D models, and interactive learning modules, downloaded by 50K+ users.",
        live_url: "#",
        github_url: "#",
        featured: false,
    },
];

fn card(index: usize) -> String {
    format!("project-{}", index)
}

pub fn timeline() -> Timeline {
    let mut tl = Timeline::new()
        // She is thrown back by the blast and tumbles a full turn.
        .cue(
            Cue::keyframes(
                "figure",
                Layer::Backdrop,
                &[
                    (0.0, Pose::REST),
                    (0.3, Pose::REST.x(-100.0).y(-200.0).rotate(180.0)),
                    (0.7, Pose::REST.x(100.0).y(100.0).rotate(300.0)),
                    (1.0, Pose::REST.rotate(360.0)),
                ],
            )
            .duration(3000)
            .delay(500)
            .easing(Easing::EaseInOut),
        )
        .cue(
            Cue::keyframes(
                "explosion",
                Layer::Backdrop,
                &[
                    (0.0, Pose::HIDDEN.scale(0.0)),
                    (0.5, Pose::REST.opacity(0.8).scale(10.0)),
                    (1.0, Pose::HIDDEN.scale(0.0)),
                ],
            )
            .duration(1500)
            .delay(1000),
        )
        .cue(Cue::tween("content", Layer::Heading, Pose::HIDDEN.y(100.0), Pose::REST).delay(4000))
        .cue(Cue::tween("heading", Layer::Heading, Pose::HIDDEN.y(30.0), Pose::REST).delay(4200))
        .cue(Cue::tween("lede", Layer::Body, Pose::HIDDEN.y(30.0), Pose::REST).delay(4400))
        .cue(Cue::tween("grid", Layer::Interactive, Pose::HIDDEN.scale(0.8), Pose::REST).delay(4600));
    for i in 0..PROJECTS.len() {
        tl = tl.cue(
            Cue::tween(card(i), Layer::Interactive, Pose::HIDDEN.y(50.0).rotate_x(15.0), Pose::REST)
                .delay(stagger(4800, 200, i)),
        );
    }
    tl
}

#[function_component(ProjectsScene)]
pub fn projects_scene() -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), THRESHOLD, "projects");
    let timeline = use_memo(|_| timeline(), ());
    let selected = use_state(Selection::default);

    let elapsed = use_elapsed(in_view, timeline.total_ms());

    let style = |element: &str| timeline.style(element, elapsed);

    html! {
        <section ref={node} class="scene projects-scene">
            <style>
                {r#"
                    .projects-figure,
                    .projects-explosion {
                        position: absolute;
                        left: 50%;
                        top: 50%;
                        transform: translate(-50%, -50%);
                    }
                    .projects-explosion .blast {
                        width: 8rem;
                        height: 8rem;
                        border-radius: 50%;
                        background: #a855f7;
                        filter: blur(64px);
                    }
                    .projects-copy {
                        position: relative;
                        z-index: 10;
                        max-width: 80rem;
                        margin: 0 auto;
                        text-align: center;
                    }
                    .project-grid {
                        display: grid;
                        grid-template-columns: repeat(2, minmax(0, 1fr));
                        gap: 2rem;
                        perspective: 1000px;
                    }
                    .project-card {
                        position: relative;
                        cursor: pointer;
                        border-radius: 0.75rem;
                        overflow: hidden;
                        border: 1px solid rgba(255, 255, 255, 0.2);
                        transition: all 0.5s ease;
                        text-align: left;
                    }
                    .project-card:hover {
                        border-color: rgba(192, 132, 252, 0.5);
                        transform: translateY(-10px);
                    }
                    .project-card.selected {
                        border-color: #c084fc;
                        transform: scale(1.05);
                        z-index: 20;
                    }
                    .project-image {
                        position: relative;
                        height: 16rem;
                        overflow: hidden;
                    }
                    .project-image img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        transition: transform 0.5s ease;
                    }
                    .project-card:hover .project-image img {
                        transform: scale(1.1);
                    }
                    .project-image::after {
                        content: '';
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(0deg, rgba(0, 0, 0, 0.6), transparent);
                    }
                    .project-icon {
                        position: absolute;
                        top: 1rem;
                        right: 1rem;
                        z-index: 1;
                        padding: 0.5rem;
                        border-radius: 0.5rem;
                        color: #c084fc;
                        background: rgba(0, 0, 0, 0.5);
                    }
                    .project-badge {
                        position: absolute;
                        top: 1rem;
                        left: 1rem;
                        z-index: 1;
                        padding: 0.25rem 0.5rem;
                        border-radius: 9999px;
                        font-size: 0.75rem;
                        font-weight: 500;
                        color: #fff;
                        background: rgba(168, 85, 247, 0.8);
                    }
                    .project-body {
                        padding: 1.5rem;
                        background: rgba(0, 0, 0, 0.4);
                        backdrop-filter: blur(4px);
                    }
                    .project-body h3 {
                        color: #fff;
                        font-size: 1.25rem;
                        font-weight: 600;
                        margin: 0 0 0.5rem;
                    }
                    .project-body p {
                        color: #d1d5db;
                        font-size: 0.875rem;
                        line-height: 1.6;
                        margin: 0 0 1rem;
                    }
                    .project-tags {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 0.5rem;
                        margin-bottom: 1rem;
                    }
                    .project-tag {
                        padding: 0.25rem 0.5rem;
                        border-radius: 9999px;
                        font-size: 0.75rem;
                        color: #d8b4fe;
                        background: rgba(168, 85, 247, 0.2);
                    }
                    .project-links {
                        display: flex;
                        gap: 1rem;
                        font-size: 0.875rem;
                    }
                    .project-links a {
                        color: #c084fc;
                        text-decoration: none;
                    }
                    .project-links a.code {
                        color: #9ca3af;
                    }
                    .project-details {
                        position: absolute;
                        left: 0;
                        right: 0;
                        bottom: 0;
                        padding: 1.5rem;
                        color: #d1d5db;
                        font-size: 0.875rem;
                        line-height: 1.6;
                        background: rgba(0, 0, 0, 0.9);
                        border-top: 1px solid rgba(168, 85, 247, 0.3);
                        animation: unfold 0.3s ease-out both;
                    }
                    @media (max-width: 768px) {
                        .project-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
            <div class="projects-figure">
                <div style={style("figure")}>
                    <Silhouette />
                </div>
            </div>
            <div class="projects-explosion">
                <div style={style("explosion")}>
                    <div class="blast"></div>
                </div>
            </div>
            <div class="projects-copy">
                <div style={style("content")}>
                    <h2 class="scene-heading" style={style("heading")}>
                        {"Stellar "}<span class="accent">{"Projects"}</span>
                    </h2>
                    <p class="scene-lede" style={style("lede")}>
                        {"Each project is a constellation of ideas, brought to life through code, creativity, and countless hours of passionate development."}
                    </p>
                    <div class="project-grid" style={style("grid")}>
                        { for PROJECTS.iter().enumerate().map(|(i, project)| {
                            let is_selected = selected.is_selected(i);
                            let onclick = {
                                let selected = selected.clone();
                                Callback::from(move |_: MouseEvent| selected.set(selected.toggle(i)))
                            };
                            // Links must not toggle the card they sit in.
                            let stop = Callback::from(|e: MouseEvent| e.stop_propagation());
                            html! {
                                <div style={style(card(i).as_str())}>
                                    <div class={classes!("project-card", is_selected.then(|| "selected"))} {onclick}>
                                        <div class="project-image">
                                            <img src={project.image} alt={project.title} loading="lazy" />
                                            <div class="project-icon">{project.icon}</div>
                                            if project.featured {
                                                <div class="project-badge">{"Featured"}</div>
                                            }
                                        </div>
                                        <div class="project-body">
                                            <h3>{project.title}</h3>
                                            <p>{project.description}</p>
                                            <div class="project-tags">
                                                { for project.tags.iter().map(|tag| html! {
                                                    <span class="project-tag">{*tag}</span>
                                                }) }
                                            </div>
                                            <div class="project-links">
                                                <a href={project.live_url} onclick={stop.clone()}>{"↗ Live Demo"}</a>
                                                <a href={project.github_url} class="code" onclick={stop}>{"</> Code"}</a>
                                            </div>
                                        </div>
                                        if is_selected {
                                            <div class="project-details">{project.details}</div>
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
    fn project_cards_wait_for_the_blast() {
        let tl = timeline();
        assert!(tl.respects_reading_order());
        let figure_end = tl.find("figure").unwrap().end_ms();
        assert!(figure_end <= tl.find("content").unwrap().delay_ms);
        let delays: Vec<u32> = (0..PROJECTS.len())
            .map(|i| tl.find(card(i).as_str()).unwrap().delay_ms)
            .collect();
        assert_eq!(delays, vec![4800, 5000, 5200, 5400]);
    }

    #[test]
    fn tumble_lands_upright_after_a_full_turn() {
        let figure = timeline().find("figure").unwrap().clone();
        assert_eq!(figure.initial(), Pose::REST);
        assert_eq!(figure.target().rotate, 360.0);
        let apex = figure.pose_at(500.0 + 900.0);
        assert!(apex.approx_eq(&Pose::REST.x(-100.0).y(-200.0).rotate(180.0), 1e-9));
    }

    #[test]
    fn every_project_has_an_image() {
        assert!(PROJECTS.iter().all(|p| p.image.starts_with("https://")));
    }
}
