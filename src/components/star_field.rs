use yew::prelude::*;

use crate::motion::ambient::twinkles;

/// Page-wide twinkling backdrop behind every scene.
#[function_component(StarField)]
pub fn star_field() -> Html {
    let stars = use_state(|| twinkles(&mut rand::thread_rng(), 150));

    html! {
        <div class="star-field">
            <style>
                {r#"
                    .star-field {
                        position: fixed;
                        inset: 0;
                        pointer-events: none;
                        z-index: 0;
                        background: radial-gradient(ellipse at center, rgba(147, 51, 234, 0.15) 0%, transparent 70%);
                    }
                "#}
            </style>
            { for stars.iter().map(|star| html! {
                <div class="twinkle" style={star.style()}></div>
            }) }
        </div>
    }
}
