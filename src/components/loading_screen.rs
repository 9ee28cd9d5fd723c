use gloo_timers::callback::Timeout;
use log::info;
use yew::prelude::*;

use crate::loading::{LoadingPhase, LoadingSequencer, TickOutcome};
use crate::motion::ambient::{falling_stars, orbiters, twinkles};

#[derive(Properties, PartialEq)]
pub struct LoadingScreenProps {
    pub on_complete: Callback<()>,
}

#[function_component(LoadingScreen)]
pub fn loading_screen(props: &LoadingScreenProps) -> Html {
    let sequencer = use_mut_ref(LoadingSequencer::new);
    let progress = use_state(|| 0u8);
    let stars = use_state(|| twinkles(&mut rand::thread_rng(), 100));
    let falling = use_state(|| falling_stars(&mut rand::thread_rng(), 20));
    let orbit = use_memo(|_| orbiters(8), ());

    // One pending timer at a time: the next tick while running, the settle
    // delay once progress hits 100. Dropping the handle on cleanup cancels it.
    {
        let deps = *progress;
        let sequencer = sequencer.clone();
        let progress = progress.clone();
        let on_complete = props.on_complete.clone();
        use_effect_with_deps(
            move |_| {
                let delay = sequencer.borrow().pending_delay_ms();
                let pending = delay.map(|delay| {
                    Timeout::new(delay, move || {
                        let phase = sequencer.borrow().phase();
                        match phase {
                            LoadingPhase::Running => {
                                let outcome = sequencer.borrow_mut().tick();
                                match outcome {
                                    TickOutcome::Progressed(p) => progress.set(p),
                                    TickOutcome::Reached100 => progress.set(100),
                                    TickOutcome::Ignored => {}
                                }
                            }
                            LoadingPhase::Settling => {
                                if sequencer.borrow_mut().settle() {
                                    info!("Loading sequence complete");
                                    on_complete.emit(());
                                }
                            }
                            LoadingPhase::Complete => {}
                        }
                    })
                });
                move || drop(pending)
            },
            deps,
        );
    }

    html! {
        <div class="loading-screen">
            <style>
                {r#"
                    .loading-screen {
                        position: fixed;
                        inset: 0;
                        background: #000;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        z-index: 50;
                    }
                    .loading-stars {
                        position: absolute;
                        inset: 0;
                    }
                    .loading-orb {
                        position: relative;
                        width: 16rem;
                        height: 16rem;
                        margin-bottom: 2rem;
                    }
                    .orb-ring {
                        position: absolute;
                        border-radius: 50%;
                        animation: pulse-glow ease-in-out infinite;
                    }
                    .orb-ring.outer {
                        inset: 0;
                        background: rgba(168, 85, 247, 0.2);
                        filter: blur(64px);
                        animation-duration: 4s;
                    }
                    .orb-ring.inner {
                        inset: 2rem;
                        background: rgba(192, 132, 252, 0.3);
                        filter: blur(40px);
                        animation-duration: 3s;
                        animation-delay: 0.5s;
                    }
                    .orb-core {
                        position: absolute;
                        inset: 4rem;
                        border-radius: 50%;
                        background: linear-gradient(90deg, #a855f7, #ec4899, #9333ea);
                        animation: orb-breathe 2s ease-in-out infinite;
                    }
                    .orb-heart {
                        position: absolute;
                        inset: 5rem;
                        border-radius: 50%;
                        background: rgba(255, 255, 255, 0.8);
                        filter: blur(4px);
                        animation: pulse-glow 1.5s ease-in-out infinite;
                    }
                    .orbiter {
                        position: absolute;
                        left: 50%;
                        top: 50%;
                        width: 0.5rem;
                        height: 0.5rem;
                        border-radius: 50%;
                        background: #d8b4fe;
                        filter: blur(2px);
                        animation: orbit linear infinite;
                    }
                    .falling-star {
                        position: absolute;
                        top: -10px;
                        width: 4px;
                        height: 4px;
                        border-radius: 50%;
                        background: #bfdbfe;
                        animation: fall linear infinite;
                    }
                    .loading-title {
                        font-family: 'Space Grotesk', sans-serif;
                        font-weight: 300;
                        font-size: 1.5rem;
                        color: #fff;
                        margin-bottom: 1rem;
                        animation: rise-in 0.6s ease-out 0.5s both;
                    }
                    .loading-track {
                        width: 12rem;
                        height: 4px;
                        background: #1f2937;
                        border-radius: 9999px;
                        overflow: hidden;
                    }
                    .loading-bar {
                        height: 100%;
                        background: linear-gradient(90deg, #a855f7, #f472b6);
                        transition: width 0.1s linear;
                    }
                    .loading-caption {
                        color: #9ca3af;
                        font-size: 0.875rem;
                        margin-top: 1rem;
                        font-weight: 300;
                        animation: fade-in 0.6s ease-out 1s both;
                    }
                "#}
            </style>
            <div class="loading-stars">
                { for stars.iter().map(|star| html! {
                    <div class="twinkle" style={star.style()}></div>
                }) }
            </div>
            <div class="loading-orb">
                <div class="orb-ring outer"></div>
                <div class="orb-ring inner"></div>
                <div class="orb-core"></div>
                <div class="orb-heart"></div>
                { for orbit.iter().map(|o| html! {
                    <div class="orbiter" style={o.style()}></div>
                }) }
                { for falling.iter().map(|f| html! {
                    <div class="falling-star" style={f.style()}></div>
                }) }
            </div>
            <h1 class="loading-title">{"Into the Glow"}</h1>
            <div class="loading-track">
                <div class="loading-bar" style={format!("width: {}%;", *progress)}></div>
            </div>
            <p class="loading-caption">{"Preparing your journey through the stars..."}</p>
        </div>
    }
}
