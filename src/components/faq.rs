use yew::prelude::*;

use crate::config;
use crate::disclosure::{DisclosureAction, Disclosures, IconPair, FAQ_GROUP};
use crate::hooks::use_disclosures;

const QUESTIONS: &[(&str, &str)] = &[
    (
        "How does a trial work?",
        "Pick the products you want to try, we ship them to you, and you keep them for the length of your plan's trial window. Return what you don't love with the prepaid label.",
    ),
    (
        "What happens if I want to keep a product?",
        "Buy it straight from your dashboard at a member discount. The trial fee is credited towards the purchase.",
    ),
    (
        "Can I cancel anytime?",
        "Yes. Cancel from your account settings and you won't be charged for the next billing period.",
    ),
    (
        "Do you ship internationally?",
        "We currently ship to the US, Canada, the UK and most of the EU.",
    ),
];

fn region_id(index: usize) -> String {
    format!("faq-{index}")
}

/// Accordion where opening one answer collapses the others.
#[function_component(Faq)]
pub fn faq() -> Html {
    let answers = use_disclosures(
        || {
            (0..QUESTIONS.len()).fold(Disclosures::default(), |set, i| {
                set.with_region(region_id(i), Some(FAQ_GROUP), IconPair::Faq)
            })
        },
        config::ui().disclosure_slide_ms,
    );

    html! {
        <section id="faq" class="faq-section">
            <h2>{"Frequently Asked Questions"}</h2>
            <div class="faq-list">
                { for QUESTIONS.iter().enumerate().map(|(i, (question, answer))| {
                    let id = region_id(i);
                    let state = answers.state(&id);
                    let icon = answers.get(&id).map_or("fa-plus", |region| region.icon());
                    let onclick = {
                        let answers = answers.clone();
                        let id = id.clone();
                        Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            answers.dispatch(DisclosureAction::Click(id.clone()));
                        })
                    };
                    html! {
                        <div class="faq-item" key={id.clone()}>
                            <button class="faq-question" {onclick}>
                                <span class="question-text">{ *question }</span>
                                <i class={classes!("faq-icon", "fas", icon)}></i>
                            </button>
                            <div class={classes!("faq-answer", "disclosure-panel", state.class(), (!state.is_rendered()).then_some("hidden"))}>
                                <p>{ *answer }</p>
                            </div>
                        </div>
                    }
                }) }
            </div>
            <style>
                {r#"
                    .faq-section {
                        max-width: 800px;
                        margin: 0 auto;
                        padding: 4rem 1.5rem;
                    }
                    .faq-item {
                        border-bottom: 1px solid var(--border);
                    }
                    .faq-question {
                        width: 100%;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        padding: 1.25rem 0;
                        background: none;
                        border: none;
                        color: var(--text);
                        font-size: 1.1rem;
                        text-align: left;
                        cursor: pointer;
                    }
                    .faq-answer p {
                        color: var(--muted);
                        line-height: 1.6;
                        padding-bottom: 1.25rem;
                    }
                "#}
            </style>
        </section>
    }
}
