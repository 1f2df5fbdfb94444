use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::notification::use_notifier;
use crate::config;
use crate::forms::{self, NEWSLETTER_SUCCESS, SIGNUP_SUCCESS};
use crate::notification::Severity;

fn bind(state: &UseStateHandle<String>) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        state.set(input.value());
    })
}

#[function_component(NewsletterForm)]
pub fn newsletter_form() -> Html {
    let notifier = use_notifier();
    let email = use_state(String::new);
    let submitting = use_state(|| false);

    let onsubmit = {
        let email = email.clone();
        let submitting = submitting.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Err(err) = forms::validate_newsletter(&email) {
                notifier.notify(err.to_string(), Severity::Error);
                return;
            }
            submitting.set(true);
            let email = email.clone();
            let submitting = submitting.clone();
            let notifier = notifier.clone();
            spawn_local(async move {
                TimeoutFuture::new(config::ui().newsletter_submit_ms).await;
                submitting.set(false);
                email.set(String::new());
                notifier.notify(NEWSLETTER_SUCCESS, Severity::Success);
            });
        })
    };

    html! {
        <section id="newsletter" class="newsletter">
            <h2>{"Get new products in your inbox"}</h2>
            <p>{"One email a week with the latest additions to the catalog. No spam."}</p>
            <form id="newsletter-form" {onsubmit}>
                <input
                    type="email"
                    placeholder="you@example.com"
                    value={(*email).clone()}
                    oninput={bind(&email)}
                />
                <button type="submit" disabled={*submitting}>
                    { if *submitting { html! { <i class="loading"></i> } } else { html! { "Subscribe" } } }
                </button>
            </form>
        </section>
    }
}

#[function_component(TrialSignupForm)]
pub fn trial_signup_form() -> Html {
    let notifier = use_notifier();
    let name = use_state(String::new);
    let email = use_state(String::new);
    let submitting = use_state(|| false);

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let submitting = submitting.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Err(err) = forms::validate_signup(&name, &email) {
                notifier.notify(err.to_string(), Severity::Error);
                return;
            }
            submitting.set(true);
            let name = name.clone();
            let email = email.clone();
            let submitting = submitting.clone();
            let notifier = notifier.clone();
            spawn_local(async move {
                TimeoutFuture::new(config::ui().signup_submit_ms).await;
                submitting.set(false);
                name.set(String::new());
                email.set(String::new());
                notifier.notify(SIGNUP_SUCCESS, Severity::Success);
            });
        })
    };

    html! {
        <section id="signup" class="signup">
            <h2>{"Start your free trial"}</h2>
            <form id="signup-form" {onsubmit}>
                <input
                    id="name"
                    type="text"
                    placeholder="Your name"
                    value={(*name).clone()}
                    oninput={bind(&name)}
                />
                <input
                    id="email"
                    type="email"
                    placeholder="you@example.com"
                    value={(*email).clone()}
                    oninput={bind(&email)}
                />
                <button type="submit" class="signup-button" disabled={*submitting}>
                    { if *submitting {
                        html! { <><i class="loading"></i>{" Processing..."}</> }
                    } else {
                        html! { "Start Free Trial" }
                    } }
                </button>
            </form>
            <style>
                {r#"
                    .newsletter, .signup {
                        max-width: 640px;
                        margin: 0 auto;
                        padding: 4rem 1.5rem;
                        text-align: center;
                    }
                    .newsletter form, .signup form {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 0.75rem;
                        justify-content: center;
                        margin-top: 1.5rem;
                    }
                    .newsletter input, .signup input {
                        flex: 1 1 220px;
                        padding: 0.75rem 1rem;
                        border-radius: 0.5rem;
                        border: 1px solid var(--border);
                        background: var(--surface);
                        color: var(--text);
                    }
                    .newsletter button, .signup button {
                        padding: 0.75rem 1.5rem;
                        border: none;
                        border-radius: 0.5rem;
                        background: var(--accent);
                        color: #fff;
                        cursor: pointer;
                    }
                    .newsletter button:disabled, .signup button:disabled {
                        opacity: 0.7;
                        cursor: wait;
                    }
                    .loading {
                        display: inline-block;
                        width: 1rem;
                        height: 1rem;
                        border: 2px solid rgba(255, 255, 255, 0.4);
                        border-top-color: #fff;
                        border-radius: 50%;
                        animation: spin 0.8s linear infinite;
                    }
                    @keyframes spin {
                        to { transform: rotate(360deg); }
                    }
                "#}
            </style>
        </section>
    }
}
