use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::actions::{self, ActionRegistry};
use crate::components::{
    cta::CtaButton,
    faq::Faq,
    forms::{NewsletterForm, TrialSignupForm},
    nav::Nav,
    pricing::PricingSection,
    products::Products,
    scroll_to_top::ScrollToTop,
    testimonials::TestimonialSlider,
    video::VideoPlayer,
};
use crate::config;
use crate::hooks::{use_fade_in, use_lazy_images, use_page_visibility, use_scroll_reactor, use_theme};
use crate::scroll;

fn scroll_to_section(id: &'static str) -> impl Fn() {
    move || {
        let cfg = config::ui();
        if let Some(offset) = scroll::anchor_offset(id, cfg.header_offset) {
            spawn_local(scroll::smooth_scroll_to(offset, cfg.smooth_scroll_ms));
        }
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let cfg = config::ui();
    let (theme, toggle_theme) = use_theme();
    let scroll_state = use_scroll_reactor(cfg.clone());
    use_fade_in();
    use_lazy_images();
    use_page_visibility();

    let registry = {
        let toggle_theme = toggle_theme.clone();
        let duration = cfg.smooth_scroll_ms;
        ActionRegistry::default()
            .register("toggle-theme", move || toggle_theme.emit(()))
            .register("scroll-to-top", move || spawn_local(scroll::smooth_scroll_to(0.0, duration)))
            .register("open-signup", scroll_to_section("signup"))
            .register("show-newsletter", scroll_to_section("newsletter"))
    };

    {
        let names: Vec<&'static str> = registry.names().collect();
        use_effect_with_deps(
            move |_| {
                log::debug!("registered actions: {:?}", names);
                gloo_console::log!("TryFirst homepage initialized");
                || ()
            },
            (),
        );
    }

    // Delegated handler for every element tagged with `data-action`.
    let on_action = Callback::from(move |e: MouseEvent| {
        if let Some(name) = actions::action_of(&e) {
            let _ = registry.dispatch(&name);
        }
    });

    html! {
        <div class="landing-page" onclick={on_action}>
            <Nav
                theme={theme}
                on_toggle_theme={toggle_theme}
                background_active={scroll_state.nav_background_active}
            />

            <header id="top" class="hero">
                <div class="hero-bg" style={scroll_state.parallax_transform()}></div>
                <div class="hero-content">
                    <h1>{"Try before you buy. At home."}</h1>
                    <p class="hero-subtitle">
                        {"TryFirst ships the products you're curious about straight to your door. Keep what you love, send back the rest."}
                    </p>
                    <div class="hero-cta-group">
                        <CtaButton label="Start Free Trial" action="open-signup" />
                        <a class="hero-secondary" data-action="show-newsletter">{"Get product updates"}</a>
                    </div>
                </div>
            </header>

            <Products />
            <VideoPlayer />
            <TestimonialSlider />
            <PricingSection />
            <Faq />

            <section id="get-started" class="footer-cta">
                <h2>{"Ready to stop guessing?"}</h2>
                <p>{"Join thousands of members who try first and buy with confidence."}</p>
                <CtaButton label="Create My Account" action="open-signup" />
            </section>

            <TrialSignupForm />
            <NewsletterForm />

            <footer class="site-footer">
                <p>{"© TryFirst"}</p>
                <a class="footer-link" data-action="toggle-theme">{"Switch theme"}</a>
                {" | "}
                <a class="footer-link" data-action="scroll-to-top">{"Back to top"}</a>
                <div class="lazy-banner">
                    <img class="lazy" data-src="/assets/trial-box.webp" alt="A TryFirst trial box" />
                </div>
            </footer>

            <ScrollToTop visible={scroll_state.floating_control_visible} />

            <style>
                {r#"
                    .hero {
                        position: relative;
                        min-height: 90vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        overflow: hidden;
                        padding: 6rem 1.5rem 4rem;
                        text-align: center;
                    }
                    .hero-bg {
                        position: absolute;
                        inset: 0;
                        z-index: -1;
                        background: radial-gradient(circle at 30% 20%, var(--accent-soft), transparent 60%);
                        will-change: transform;
                    }
                    .hero h1 {
                        font-size: 3.5rem;
                        margin-bottom: 1.5rem;
                    }
                    .hero-subtitle {
                        max-width: 640px;
                        margin: 0 auto 2rem;
                        font-size: 1.2rem;
                        color: var(--muted);
                    }
                    .hero-cta-group {
                        display: flex;
                        gap: 1.5rem;
                        justify-content: center;
                        align-items: center;
                    }
                    .cta-button {
                        padding: 0.9rem 2rem;
                        border: none;
                        border-radius: 0.75rem;
                        background: var(--accent);
                        color: #fff;
                        font-size: 1.1rem;
                        cursor: pointer;
                    }
                    .hero-secondary, .footer-link {
                        color: var(--accent);
                        cursor: pointer;
                    }
                    .footer-cta, .site-footer {
                        padding: 4rem 1.5rem;
                        text-align: center;
                    }
                    .site-footer {
                        border-top: 1px solid var(--border);
                        color: var(--muted);
                    }
                    .lazy-banner img {
                        max-width: 320px;
                        margin-top: 2rem;
                    }
                    .fade-in {
                        opacity: 0;
                        transform: translateY(24px);
                        transition: opacity 0.6s ease, transform 0.6s ease;
                    }
                    .fade-in.visible {
                        opacity: 1;
                        transform: none;
                    }
                    .floating {
                        animation: floating 3s ease-in-out infinite;
                    }
                    @keyframes floating {
                        50% { transform: translateY(-8px); }
                    }
                    .disclosure-panel.opening {
                        animation: slideDown 300ms ease forwards;
                        overflow: hidden;
                    }
                    .disclosure-panel.closing {
                        animation: slideUp 300ms ease forwards;
                        overflow: hidden;
                    }
                    @keyframes slideDown {
                        from { max-height: 0; opacity: 0; }
                        to { max-height: 600px; opacity: 1; }
                    }
                    @keyframes slideUp {
                        from { max-height: 600px; opacity: 1; }
                        to { max-height: 0; opacity: 0; }
                    }
                "#}
            </style>
        </div>
    }
}
