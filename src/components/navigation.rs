use yew::prelude::*;

use crate::scroll::{jump_to, Scene, WindowScroller};

#[derive(Properties, PartialEq)]
pub struct NavigationProps {
    /// Index from the scroll mapper, not from scene visibility.
    pub current: usize,
}

#[function_component(Navigation)]
pub fn navigation(props: &NavigationProps) -> Html {
    html! {
        <nav class="scene-nav">
            <style>
                {r#"
                    .scene-nav {
                        position: fixed;
                        right: 2rem;
                        top: 50%;
                        transform: translateY(-50%);
                        z-index: 40;
                        animation: slide-in-right 0.6s ease-out 1s both;
                    }
                    .scene-nav-list {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                    }
                    .scene-nav-item {
                        position: relative;
                        width: 2.75rem;
                        height: 2.75rem;
                        border: none;
                        border-radius: 50%;
                        cursor: pointer;
                        font-size: 1.1rem;
                        color: #9ca3af;
                        background: rgba(0, 0, 0, 0.2);
                        transition: all 0.3s ease;
                    }
                    .scene-nav-item:hover {
                        color: #fff;
                        background: rgba(255, 255, 255, 0.1);
                        transform: scale(1.1);
                    }
                    .scene-nav-item:active {
                        transform: scale(0.95);
                    }
                    .scene-nav-item.active {
                        color: #d8b4fe;
                        background: rgba(168, 85, 247, 0.2);
                    }
                    .scene-nav-tooltip {
                        position: absolute;
                        right: 100%;
                        margin-right: 0.75rem;
                        top: 50%;
                        transform: translateY(-50%);
                        padding: 0.25rem 0.5rem;
                        border-radius: 0.25rem;
                        font-size: 0.875rem;
                        white-space: nowrap;
                        color: #fff;
                        background: rgba(0, 0, 0, 0.8);
                        opacity: 0;
                        pointer-events: none;
                        transition: opacity 0.3s ease;
                    }
                    .scene-nav-item:hover .scene-nav-tooltip {
                        opacity: 1;
                    }
                    .scene-nav-indicator {
                        position: absolute;
                        right: -0.5rem;
                        top: 50%;
                        transform: translateY(-50%);
                        width: 4px;
                        height: 1.5rem;
                        border-radius: 9999px;
                        background: #c084fc;
                    }
                    @media (max-width: 768px) {
                        .scene-nav {
                            display: none;
                        }
                    }
                "#}
            </style>
            <div class="scene-nav-list">
                { for Scene::ALL.iter().map(|&scene| {
                    let active = scene.index() == props.current;
                    let onclick = Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        jump_to(&WindowScroller, scene);
                    });
                    html! {
                        <button
                            class={classes!("scene-nav-item", active.then(|| "active"))}
                            aria-label={scene.label()}
                            {onclick}
                        >
                            <span>{scene.icon()}</span>
                            <span class="scene-nav-tooltip">{scene.label()}</span>
                            if active {
                                <span class="scene-nav-indicator"></span>
                            }
                        </button>
                    }
                }) }
            </div>
        </nav>
    }
}
