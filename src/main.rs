use log::info;
use yew::prelude::*;

mod config;
mod contact_form;
mod email;
mod loading;
mod scroll;
mod visibility;
mod motion {
    pub mod ambient;
    pub mod pose;
    pub mod timeline;
}
mod components {
    pub mod audio_controls;
    pub mod loading_screen;
    pub mod navigation;
    pub mod silhouette;
    pub mod star_field;
}
mod scenes {
    pub mod about;
    pub mod contact;
    pub mod intro;
    pub mod projects;
    pub mod skills;
    pub mod welcome;
}

use components::{
    audio_controls::AudioControls,
    loading_screen::LoadingScreen,
    navigation::Navigation,
    silhouette::CAST_CSS,
    star_field::StarField,
};
use scenes::{
    about::AboutScene,
    contact::ContactScene,
    intro::IntroScene,
    projects::ProjectsScene,
    skills::SkillsScene,
    welcome::WelcomeScene,
};
use scroll::use_scene_index;

/// Shared classes and the keyframes every ambient loop runs on. Mounted for
/// the whole session, loading screen included.
const GLOBAL_CSS: &str = r#"
    * {
        box-sizing: border-box;
    }
    html {
        scroll-behavior: smooth;
    }
    body {
        margin: 0;
        background: #000;
        color: #fff;
        font-family: 'Inter', system-ui, sans-serif;
        overflow-x: hidden;
    }
    .journey {
        position: relative;
        animation: fade-in 1s ease-out both;
    }
    .scene {
        position: relative;
        height: 100vh;
        overflow: hidden;
        display: flex;
        align-items: center;
        justify-content: center;
        padding: 0 2rem;
    }
    .scene-layer {
        position: absolute;
        inset: 0;
        pointer-events: none;
    }
    .twinkle {
        position: absolute;
        border-radius: 50%;
        background: #fff;
        animation: twinkle ease-in-out infinite;
    }
    .scene-heading {
        font-family: 'Space Grotesk', sans-serif;
        font-size: clamp(2.5rem, 6vw, 3.75rem);
        font-weight: 300;
        color: #fff;
        margin: 0 0 2rem;
    }
    .scene-lede {
        font-size: 1.25rem;
        font-weight: 300;
        line-height: 1.7;
        color: #d1d5db;
        margin: 0 0 2rem;
    }
    .accent {
        color: #c084fc;
    }
    .gradient-text {
        background: linear-gradient(90deg, #c084fc, #f472b6, #60a5fa);
        -webkit-background-clip: text;
        background-clip: text;
        color: transparent;
    }
    @keyframes twinkle {
        0%, 100% { opacity: 0.2; transform: scale(1); }
        50% { opacity: var(--glow, 1); transform: scale(1.5); }
    }
    @keyframes pulse-glow {
        0%, 100% { opacity: 0.5; transform: scale(1); }
        50% { opacity: 1; transform: scale(1.2); }
    }
    @keyframes orb-breathe {
        0%, 100% { transform: scale(1); box-shadow: 0 0 40px rgba(168, 85, 247, 0.6); }
        50% { transform: scale(1.1); box-shadow: 0 0 80px rgba(236, 72, 153, 0.8); }
    }
    @keyframes orbit {
        from { transform: rotate(0deg); }
        to { transform: rotate(360deg); }
    }
    @keyframes fall {
        0% { transform: translateY(-20px); opacity: 0; }
        10% { opacity: 1; }
        100% { transform: translateY(100vh); opacity: 0; }
    }
    @keyframes rise-in {
        from { opacity: 0; transform: translateY(20px); }
        to { opacity: 1; transform: none; }
    }
    @keyframes fade-in {
        from { opacity: 0; }
        to { opacity: 1; }
    }
    @keyframes slide-in-right {
        from { opacity: 0; transform: translateX(50px); }
        to { opacity: 1; transform: none; }
    }
    @keyframes unfold {
        from { opacity: 0; transform: translateY(10px); }
        to { opacity: 1; transform: none; }
    }
    @keyframes flicker {
        0%, 100% { transform: scaleY(1) rotate(-2deg); opacity: 1; }
        25% { transform: scaleY(1.1) rotate(2deg); opacity: 0.9; }
        50% { transform: scaleY(0.95) rotate(-1deg); opacity: 1; }
        75% { transform: scaleY(1.05) rotate(1deg); opacity: 0.85; }
    }
    @keyframes streak {
        0% { transform: translateX(0) scaleX(0); opacity: 0; }
        50% { opacity: var(--glow, 1); }
        100% { transform: translateX(var(--travel, 200px)) scaleX(1); opacity: 0; }
    }
    @keyframes ray-flash {
        0%, 100% { opacity: 0; transform: scaleY(0); }
        50% { opacity: 0.3; transform: scaleY(1); }
    }
    @keyframes ring-pulse {
        0%, 100% { opacity: 0.1; transform: scale(1); }
        50% { opacity: 0.3; transform: scale(1.1); }
    }
    @keyframes inbound {
        0% { transform: translate(var(--from-x), var(--from-y)) scale(0.5); opacity: 0; }
        50% { opacity: 1; }
        100% { transform: translate(0, 0) scale(0); opacity: 0; }
    }
    @keyframes echo {
        0%, 100% { opacity: 0.3; }
        50% { opacity: 0.7; }
    }
    @keyframes bob {
        0%, 100% { transform: translateY(0); }
        50% { transform: translateY(10px); }
    }
    @keyframes spark-burst {
        0% { opacity: 0; transform: scale(0); }
        10% { opacity: 1; transform: scale(1); }
        100% { opacity: 0; transform: translate(100px, -50px) scale(0); }
    }
    @keyframes halo {
        0%, 100% { transform: scale(1); opacity: 0.5; }
        50% { transform: scale(1.5); opacity: 0.8; }
    }
    @keyframes wriggle {
        0%, 100% { transform: scaleX(1) skewX(0deg); }
        25% { transform: scaleX(1.1) skewX(5deg); }
        75% { transform: scaleX(0.9) skewX(-5deg); }
    }
    @keyframes sparkle {
        0%, 100% { opacity: 0; transform: scale(0) rotate(0deg); }
        50% { opacity: 1; transform: scale(1) rotate(180deg); }
    }
    @keyframes spin {
        to { transform: rotate(360deg); }
    }
    @media (prefers-reduced-motion: reduce) {
        html {
            scroll-behavior: auto;
        }
    }
"#;

#[function_component(App)]
pub fn app() -> Html {
    let loading = use_state(|| true);
    let audio_enabled = use_state(|| false);
    let current = use_scene_index();

    let on_loaded = {
        let loading = loading.clone();
        Callback::from(move |_| {
            info!("Loading finished, starting the journey");
            loading.set(false);
        })
    };

    let on_audio_toggle = {
        let audio_enabled = audio_enabled.clone();
        Callback::from(move |enabled: bool| audio_enabled.set(enabled))
    };

    html! {
        <>
            <style>{GLOBAL_CSS}</style>
            <style>{CAST_CSS}</style>
            if *loading {
                <LoadingScreen on_complete={on_loaded} />
            } else {
                <StarField />
                <Navigation current={current} />
                <AudioControls enabled={*audio_enabled} on_toggle={on_audio_toggle} />
                <main class="journey">
                    <IntroScene />
                    <WelcomeScene />
                    <AboutScene />
                    <SkillsScene />
                    <ProjectsScene />
                    <ContactScene />
                </main>
            }
        </>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(config::log_level()) {
        gloo_console::error!(format!("error initializing log: {}", e));
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule<'a>(css: &'a str, selector: &str) -> &'a str {
        let open = format!("\n    {} {{", selector);
        let start = css.find(&open).unwrap() + open.len();
        let end = start + css[start..].find('}').unwrap();
        &css[start..end]
    }

    #[test]
    fn every_scene_is_exactly_one_viewport_tall() {
        let scene = rule(GLOBAL_CSS, ".scene");
        assert!(scene.contains("height: 100vh;"));
        assert!(!scene.contains("min-height"));
        assert!(scene.contains("overflow: hidden;"));
        assert!(!scene.contains("padding: 4rem"));
    }
}
