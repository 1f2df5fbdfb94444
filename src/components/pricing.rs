use yew::prelude::*;

use crate::pricing::{PricingPeriod, PLANS};

#[function_component(PricingSection)]
pub fn pricing_section() -> Html {
    let period = use_state(PricingPeriod::default);

    let select = |target: PricingPeriod| {
        let period = period.clone();
        Callback::from(move |_: MouseEvent| period.set(target))
    };

    let toggle_class = |target: PricingPeriod, name: &'static str| {
        classes!("pricing-toggle", name, (*period == target).then_some("selected"))
    };

    html! {
        <section id="pricing" class="pricing">
            <h2>{"Simple Pricing"}</h2>
            <div class="pricing-toggles">
                <button class={toggle_class(PricingPeriod::Monthly, "monthly")} onclick={select(PricingPeriod::Monthly)}>
                    {"Monthly"}
                </button>
                <button class={toggle_class(PricingPeriod::Annual, "annual")} onclick={select(PricingPeriod::Annual)}>
                    {"Annual"}
                </button>
            </div>
            <div class="pricing-grid">
                { for PLANS.iter().map(|plan| html! {
                    <div class="pricing-card" data-monthly={plan.monthly.to_string()} data-annual={plan.annual.to_string()}>
                        <h3>{ plan.name }</h3>
                        <p class="price">{ plan.price_label(*period) }</p>
                        <ul>
                            { for plan.features.iter().map(|f| html! { <li>{ *f }</li> }) }
                        </ul>
                    </div>
                }) }
            </div>
            <style>
                {r#"
                    .pricing {
                        padding: 4rem 1.5rem;
                        text-align: center;
                    }
                    .pricing-toggles {
                        display: inline-flex;
                        gap: 0.5rem;
                        margin: 1.5rem 0;
                    }
                    .pricing-toggle {
                        padding: 0.5rem 1.25rem;
                        border-radius: 9999px;
                        border: 1px solid var(--accent);
                        background: none;
                        color: var(--accent);
                        cursor: pointer;
                    }
                    .pricing-toggle.selected {
                        background: var(--accent);
                        color: #fff;
                    }
                    .pricing-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                        gap: 1.5rem;
                        max-width: 1100px;
                        margin: 0 auto;
                    }
                    .pricing-card {
                        background: var(--surface);
                        border: 1px solid var(--border);
                        border-radius: 1rem;
                        padding: 2rem;
                    }
                    .pricing-card .price {
                        font-size: 2rem;
                        font-weight: 700;
                    }
                    .pricing-card ul {
                        list-style: none;
                        padding: 0;
                        color: var(--muted);
                    }
                "#}
            </style>
        </section>
    }
}
