use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::contact_form::{whatsapp_link, ContactState, Field, SubmitStatus};
use crate::email;
use crate::motion::ambient::WormNudge;
use crate::motion::pose::Pose;
use crate::motion::timeline::{use_elapsed, Cue, Layer, Timeline};
use crate::scroll::{jump_to, Scene, WindowScroller};
use crate::visibility::use_in_view;

pub const THRESHOLD: f64 = 0.3;

pub fn timeline() -> Timeline {
    Timeline::new()
        .cue(Cue::tween("content", Layer::Heading, Pose::HIDDEN.y(50.0), Pose::REST).delay(500))
        .cue(Cue::tween("heading", Layer::Heading, Pose::HIDDEN.y(30.0), Pose::REST).delay(700))
        .cue(Cue::tween("lede", Layer::Body, Pose::HIDDEN.y(30.0), Pose::REST).delay(900))
        .cue(Cue::tween("form", Layer::Interactive, Pose::HIDDEN.scale(0.9), Pose::REST).delay(1100))
}

fn open_in_new_tab(url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.open_with_url_and_target(url, "_blank") {
        log::warn!("could not open {}: {:?}", url, e);
    }
}

#[function_component(ContactScene)]
pub fn contact_scene() -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), THRESHOLD, "contact");
    let timeline = use_memo(|_| timeline(), ());
    // Kept outside `use_state` so the submit guard flips before the next
    // event can read it.
    let state = use_mut_ref(ContactState::default);
    let redraw = use_force_update();
    let worm = use_state(WormNudge::default);

    let elapsed = use_elapsed(in_view, timeline.total_ms());

    let style = |element: &str| timeline.style(element, elapsed);

    let edit = |field: Field| {
        let state = state.clone();
        let redraw = redraw.clone();
        let worm = worm.clone();
        move |value: String| {
            state.borrow_mut().edit(field, value);
            worm.set(WormNudge::random(&mut rand::thread_rng()));
            redraw.force_update();
        }
    };

    let on_name = {
        let edit = edit(Field::Name);
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            edit(input.value());
        })
    };
    let on_email = {
        let edit = edit(Field::Email);
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            edit(input.value());
        })
    };
    let on_message = {
        let edit = edit(Field::Message);
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            edit(input.value());
        })
    };

    let onsubmit = {
        let state = state.clone();
        let redraw = redraw.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(form) = state.borrow_mut().begin_submit() else {
                return;
            };
            redraw.force_update();

            let state = state.clone();
            let redraw = redraw.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let settings = config::email_config();
                let outcome = email::send(&settings, &form.email_params(settings.to_email)).await;
                match &outcome {
                    Ok(()) => {
                        log::info!("contact message from {} delivered", form.email);
                        open_in_new_tab(&whatsapp_link(config::whatsapp_number(), &form.whatsapp_text()));
                    }
                    Err(e) => {
                        log::error!("contact message failed: {}", e);
                        gloo_console::error!(format!("Failed to send message: {}", e));
                    }
                }
                state.borrow_mut().finish(&outcome);
                redraw.force_update();
            });
        })
    };

    let on_dismiss = {
        let state = state.clone();
        let redraw = redraw.clone();
        Callback::from(move |_: MouseEvent| {
            let was_success = state.borrow().status == SubmitStatus::Success;
            state.borrow_mut().dismiss();
            redraw.force_update();
            if was_success {
                jump_to(&WindowScroller, Scene::Intro);
            }
        })
    };

    let current = state.borrow().clone();

    html! {
        <section ref={node} class="scene contact-scene">
            <style>
                {r#"
                    .contact-copy {
                        position: relative;
                        z-index: 10;
                        width: 100%;
                        max-width: 32rem;
                        margin: 0 auto;
                        text-align: center;
                    }
                    .contact-worm {
                        position: absolute;
                        left: 15%;
                        bottom: 20%;
                        transition: transform 0.3s ease;
                    }
                    .contact-worm .body {
                        width: 4rem;
                        height: 1rem;
                        border-radius: 9999px;
                        background: linear-gradient(90deg, #f472b6, #c084fc);
                        animation: wriggle 2s ease-in-out infinite;
                    }
                    .contact-worm .eye {
                        position: absolute;
                        right: 0.5rem;
                        top: 0.25rem;
                        width: 0.25rem;
                        height: 0.25rem;
                        border-radius: 50%;
                        background: #000;
                    }
                    .sparkle {
                        position: absolute;
                        width: 6px;
                        height: 6px;
                        border-radius: 50%;
                        background: #fde68a;
                        animation: sparkle 3s ease-in-out infinite;
                    }
                    .contact-form {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                        padding: 2rem;
                        border-radius: 1rem;
                        background: rgba(0, 0, 0, 0.3);
                        backdrop-filter: blur(8px);
                        border: 1px solid rgba(168, 85, 247, 0.2);
                    }
                    .contact-form input,
                    .contact-form textarea {
                        padding: 0.75rem 1rem;
                        border-radius: 0.5rem;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        background: rgba(255, 255, 255, 0.05);
                        color: #fff;
                        font: inherit;
                        transition: border-color 0.3s ease;
                    }
                    .contact-form input:focus,
                    .contact-form textarea:focus {
                        outline: none;
                        border-color: #a855f7;
                    }
                    .contact-form textarea {
                        min-height: 8rem;
                        resize: vertical;
                    }
                    .contact-submit {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 0.5rem;
                        padding: 0.875rem;
                        border: none;
                        border-radius: 0.5rem;
                        color: #fff;
                        font-weight: 500;
                        cursor: pointer;
                        background: linear-gradient(90deg, #9333ea, #db2777);
                        transition: opacity 0.3s ease, transform 0.3s ease;
                    }
                    .contact-submit:hover:not(:disabled) {
                        transform: translateY(-2px);
                    }
                    .contact-submit:disabled {
                        opacity: 0.6;
                        cursor: not-allowed;
                    }
                    .spinner {
                        width: 1rem;
                        height: 1rem;
                        border-radius: 50%;
                        border: 2px solid rgba(255, 255, 255, 0.3);
                        border-top-color: #fff;
                        animation: spin 1s linear infinite;
                    }
                    .contact-modal {
                        position: fixed;
                        inset: 0;
                        z-index: 100;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: rgba(0, 0, 0, 0.7);
                        animation: fade-in 0.3s ease-out both;
                    }
                    .contact-modal-card {
                        max-width: 24rem;
                        padding: 2rem;
                        border-radius: 1rem;
                        text-align: center;
                        background: #0f0a1e;
                        border: 1px solid rgba(168, 85, 247, 0.3);
                        animation: rise-in 0.4s ease-out both;
                    }
                    .contact-modal-card.error {
                        border-color: rgba(239, 68, 68, 0.5);
                    }
                    .contact-modal-card h3 {
                        color: #fff;
                        margin: 0 0 0.75rem;
                    }
                    .contact-modal-card p {
                        color: #d1d5db;
                        line-height: 1.6;
                        margin: 0 0 1.5rem;
                    }
                    .contact-modal-card button {
                        padding: 0.5rem 1.5rem;
                        border: 1px solid #a855f7;
                        border-radius: 9999px;
                        background: transparent;
                        color: #fff;
                        cursor: pointer;
                    }
                "#}
            </style>
            <div class="contact-worm" style={worm.style()}>
                <div class="body"></div>
                <div class="eye"></div>
            </div>
            { for (0..6).map(|i| html! {
                <div
                    class="sparkle"
                    style={format!(
                        "left: {}%; top: {}%; animation-delay: {:.1}s;",
                        10 + i * 15,
                        20 + (i % 3) * 25,
                        i as f64 * 0.5
                    )}
                ></div>
            }) }
            <div class="contact-copy">
                <div style={style("content")}>
                    <h2 class="scene-heading" style={style("heading")}>
                        {"Send a "}<span class="accent">{"Signal"}</span>
                    </h2>
                    <p class="scene-lede" style={style("lede")}>
                        {"Every journey is better with company. Reach out across the stars and let's create something luminous together."}
                    </p>
                    <form class="contact-form" style={style("form")} {onsubmit}>
                        <input
                            type="text"
                            placeholder="Your name"
                            required=true
                            value={current.form.name.clone()}
                            oninput={on_name}
                        />
                        <input
                            type="email"
                            placeholder="Your email"
                            required=true
                            value={current.form.email.clone()}
                            oninput={on_email}
                        />
                        <textarea
                            placeholder="Your message"
                            required=true
                            value={current.form.message.clone()}
                            oninput={on_message}
                        />
                        <button type="submit" class="contact-submit" disabled={current.is_submitting}>
                            if current.is_submitting {
                                <span class="spinner"></span>
                                {"Sending..."}
                            } else {
                                {"Send Message ✦"}
                            }
                        </button>
                    </form>
                </div>
            </div>
            {
                match current.status {
                    SubmitStatus::Idle => html! {},
                    SubmitStatus::Success => html! {
                        <div class="contact-modal">
                            <div class="contact-modal-card">
                                <h3>{"Message sent ✨"}</h3>
                                <p>{"Your signal is on its way. A WhatsApp chat has opened in a new tab if you'd like to talk sooner."}</p>
                                <button onclick={on_dismiss}>{"Back to the beginning"}</button>
                            </div>
                        </div>
                    },
                    SubmitStatus::Error => html! {
                        <div class="contact-modal">
                            <div class="contact-modal-card error">
                                <h3>{"Signal lost"}</h3>
                                <p>{"Your message couldn't be delivered. Your words are still in the form, so please try again."}</p>
                                <button onclick={on_dismiss}>{"Close"}</button>
                            </div>
                        </div>
                    },
                }
            }
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_is_the_last_thing_to_appear() {
        let tl = timeline();
        assert!(tl.respects_reading_order());
        let delays: Vec<u32> = tl.cues().iter().map(|c| c.delay_ms).collect();
        assert_eq!(delays, vec![500, 700, 900, 1100]);
        assert_eq!(tl.find("form").unwrap().initial(), Pose::HIDDEN.scale(0.9));
    }
}
