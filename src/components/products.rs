use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::analytics::{self, TrackedEvent};
use crate::components::notification::use_notifier;
use crate::config;
use crate::notification::Severity;

pub struct Product {
    pub name: &'static str,
    pub blurb: &'static str,
    pub icon: &'static str,
}

pub const PRODUCTS: &[Product] = &[
    Product {
        name: "Noise Cancelling Headphones",
        blurb: "Three flagship models side by side in your own living room.",
        icon: "fa-headphones",
    },
    Product {
        name: "Standing Desk",
        blurb: "Find out if standing all day is really for you.",
        icon: "fa-desktop",
    },
    Product {
        name: "Espresso Machine",
        blurb: "Pull a week of shots before spending hundreds.",
        icon: "fa-mug-hot",
    },
];

#[derive(Properties, PartialEq)]
struct ProductCardProps {
    name: &'static str,
    blurb: &'static str,
    icon: &'static str,
}

#[function_component(ProductCard)]
fn product_card(props: &ProductCardProps) -> Html {
    let notifier = use_notifier();
    let pulsing = use_state(|| false);

    let on_try = {
        let pulsing = pulsing.clone();
        let name = props.name;
        Callback::from(move |_: MouseEvent| {
            notifier.notify(format!("Added \"{}\" to your trial cart!", name), Severity::Success);
            analytics::track(TrackedEvent::ProductTrialClick {
                product_name: name.to_string(),
            });

            pulsing.set(true);
            let pulsing = pulsing.clone();
            Timeout::new(config::ui().pulse_ms, move || pulsing.set(false)).forget();
        })
    };

    html! {
        <div class="product-card">
            <i class={classes!("fas", props.icon, "hero-icon", "floating")}></i>
            <h3 class="product-name">{ props.name }</h3>
            <p>{ props.blurb }</p>
            <button class={classes!("product-try-button", (*pulsing).then_some("animate-pulse"))} onclick={on_try}>
                {"Try it"}
            </button>
        </div>
    }
}

#[function_component(Products)]
pub fn products() -> Html {
    html! {
        <section id="products" class="products">
            <h2>{"Popular Trials"}</h2>
            <div class="product-grid">
                { for PRODUCTS.iter().map(|p| html! {
                    <ProductCard name={p.name} blurb={p.blurb} icon={p.icon} />
                }) }
            </div>
            <style>
                {r#"
                    .products {
                        padding: 4rem 1.5rem;
                        text-align: center;
                    }
                    .product-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                        gap: 1.5rem;
                        max-width: 1100px;
                        margin: 2rem auto 0;
                    }
                    .product-card {
                        background: var(--surface);
                        border: 1px solid var(--border);
                        border-radius: 1rem;
                        padding: 2rem;
                    }
                    .product-card .fas {
                        font-size: 2rem;
                        color: var(--accent);
                    }
                    .product-try-button {
                        margin-top: 1rem;
                        padding: 0.6rem 1.4rem;
                        border: 1px solid var(--accent);
                        border-radius: 0.5rem;
                        background: none;
                        color: var(--accent);
                        cursor: pointer;
                    }
                    .animate-pulse {
                        animation: pulse 1s cubic-bezier(0.4, 0, 0.6, 1) infinite;
                    }
                    @keyframes pulse {
                        50% { opacity: 0.5; }
                    }
                "#}
            </style>
        </section>
    }
}
