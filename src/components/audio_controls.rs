use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AudioControlsProps {
    pub enabled: bool,
    pub on_toggle: Callback<bool>,
}

/// Session-only sound toggle. Nothing is persisted across reloads.
#[function_component(AudioControls)]
pub fn audio_controls(props: &AudioControlsProps) -> Html {
    let onclick = {
        let enabled = props.enabled;
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(!enabled))
    };

    html! {
        <div class="audio-controls">
            <style>
                {r#"
                    .audio-controls {
                        position: fixed;
                        bottom: 2rem;
                        left: 2rem;
                        z-index: 40;
                        animation: rise-in 0.6s ease-out 2s both;
                    }
                    .audio-toggle {
                        width: 2.75rem;
                        height: 2.75rem;
                        border: none;
                        border-radius: 50%;
                        cursor: pointer;
                        font-size: 1.1rem;
                        color: #9ca3af;
                        background: rgba(0, 0, 0, 0.2);
                        backdrop-filter: blur(4px);
                        transition: all 0.3s ease;
                    }
                    .audio-toggle:hover {
                        color: #fff;
                        background: rgba(255, 255, 255, 0.1);
                        transform: scale(1.1);
                    }
                    .audio-toggle.on {
                        color: #d8b4fe;
                        background: rgba(168, 85, 247, 0.2);
                    }
                "#}
            </style>
            <button
                class={classes!("audio-toggle", props.enabled.then(|| "on"))}
                aria-pressed={props.enabled.to_string()}
                {onclick}
            >
                { if props.enabled { "🔊" } else { "🔇" } }
            </button>
        </div>
    }
}
