use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;
use crate::rotator::Rotator;

pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "I tried three standing desks before committing to one. No more expensive mistakes.",
        author: "Maya R.",
        role: "Product designer",
    },
    Testimonial {
        quote: "The headphones I was sure I wanted ended up going back. The ones I kept are perfect.",
        author: "Jonas K.",
        role: "Audio engineer",
    },
    Testimonial {
        quote: "Returning things is painless. The prepaid label is already in the box.",
        author: "Priya S.",
        role: "Teacher",
    },
];

#[derive(Properties, PartialEq)]
pub struct TestimonialSliderProps {
    #[prop_or(TESTIMONIALS.len())]
    pub count: usize,
}

/// Cycles the active testimonial on a fixed interval. With no slides the
/// interval is never armed.
#[function_component(TestimonialSlider)]
pub fn testimonial_slider(props: &TestimonialSliderProps) -> Html {
    let count = props.count.min(TESTIMONIALS.len());
    let rotator = use_state(|| Rotator::start(count));

    {
        let rotator = rotator.clone();
        let millis = if rotator.is_some() {
            config::ui().rotator_interval_ms
        } else {
            0 // use_interval treats 0 as paused
        };
        use_interval(
            move || {
                if let Some(mut next) = *rotator {
                    next.tick();
                    rotator.set(Some(next));
                }
            },
            millis,
        );
    }

    html! {
        <section id="testimonials" class="testimonials">
            <h2>{"What Our Members Say"}</h2>
            <div class="testimonial-track">
                { for TESTIMONIALS.iter().take(count).enumerate().map(|(i, t)| {
                    let active = rotator.map_or(false, |r| r.is_active(i));
                    html! {
                        <blockquote class={classes!("testimonial-slide", active.then_some("active"))}>
                            <p class="quote">{ t.quote }</p>
                            <footer>
                                <strong>{ t.author }</strong>
                                <span class="role">{ t.role }</span>
                            </footer>
                        </blockquote>
                    }
                }) }
            </div>
            <style>
                {r#"
                    .testimonials {
                        padding: 4rem 1.5rem;
                        text-align: center;
                    }
                    .testimonial-track {
                        position: relative;
                        max-width: 700px;
                        min-height: 180px;
                        margin: 2rem auto 0;
                    }
                    .testimonial-slide {
                        position: absolute;
                        inset: 0;
                        margin: 0;
                        opacity: 0;
                        transition: opacity 0.6s ease;
                    }
                    .testimonial-slide.active {
                        opacity: 1;
                    }
                    .testimonial-slide .quote {
                        font-size: 1.3rem;
                        font-style: italic;
                    }
                    .testimonial-slide .role {
                        display: block;
                        color: var(--muted);
                    }
                "#}
            </style>
        </section>
    }
}
