use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SilhouetteProps {
    /// Arm stretched toward something on the right.
    #[prop_or_default]
    pub reaching: bool,
}

/// The recurring candle bearer. Her flame flickers on its own loop.
#[function_component(Silhouette)]
pub fn silhouette(props: &SilhouetteProps) -> Html {
    html! {
        <div class="silhouette">
            <div class="silhouette-head"></div>
            if props.reaching {
                <div class="silhouette-arm"></div>
            }
            <div class="candle">
                <div class="candle-flame"></div>
            </div>
        </div>
    }
}

/// Shared styles for the cast, mounted once by the app shell.
pub const CAST_CSS: &str = r#"
    .silhouette {
        position: relative;
        width: 3rem;
        height: 5rem;
        border-radius: 9999px;
        background: linear-gradient(180deg, #4b5563, #1f2937);
    }
    .silhouette-head {
        position: absolute;
        top: -1rem;
        left: 50%;
        transform: translateX(-50%);
        width: 1.5rem;
        height: 1.5rem;
        border-radius: 50%;
        background: inherit;
    }
    .silhouette-arm {
        position: absolute;
        right: -1.5rem;
        top: 1rem;
        width: 2rem;
        height: 0.5rem;
        border-radius: 9999px;
        background: #374151;
        transform: rotate(12deg);
    }
    .candle {
        position: absolute;
        right: -1rem;
        top: 0.5rem;
        width: 4px;
        height: 2rem;
        border-radius: 9999px;
        background: #fef08a;
    }
    .candle-flame {
        position: absolute;
        top: -0.5rem;
        left: 50%;
        width: 0.75rem;
        height: 0.75rem;
        margin-left: -0.375rem;
        border-radius: 50%;
        background: #facc15;
        filter: blur(2px);
        animation: flicker 1.5s ease-in-out infinite;
    }
    .astronaut {
        position: relative;
        width: 4rem;
        height: 6rem;
        border-radius: 1rem;
        background: linear-gradient(180deg, #d1d5db, #6b7280);
    }
    .astronaut-helmet {
        position: absolute;
        top: -1.5rem;
        left: 50%;
        transform: translateX(-50%);
        width: 3.5rem;
        height: 3.5rem;
        border-radius: 50%;
        background: #e5e7eb;
        border: 4px solid #9ca3af;
    }
    .astronaut-visor {
        position: absolute;
        inset: 0.5rem;
        border-radius: 50%;
        background: rgba(0, 0, 0, 0.2);
    }
    .astronaut-panel {
        position: absolute;
        top: 1rem;
        left: 50%;
        transform: translateX(-50%);
        width: 2rem;
        height: 1rem;
        border-radius: 0.25rem;
        background: #60a5fa;
        box-shadow: inset 0 0 0 4px #93c5fd;
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cast_css_styles_every_rendered_part_and_nothing_else() {
        for class in [".silhouette ", ".silhouette-head", ".silhouette-arm", ".candle ", ".candle-flame"] {
            assert!(CAST_CSS.contains(class), "missing {}", class);
        }
        assert!(!CAST_CSS.contains(".dim"));
    }
}
