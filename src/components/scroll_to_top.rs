use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config;
use crate::scroll::{self, FloatingAction, FloatingControl};

#[derive(Properties, PartialEq)]
pub struct ScrollToTopProps {
    pub visible: bool,
}

/// Floating button that only exists while the page is scrolled past the
/// threshold, fading in after creation and out before removal.
#[function_component(ScrollToTop)]
pub fn scroll_to_top(props: &ScrollToTopProps) -> Html {
    let cfg = config::ui();
    let control = use_reducer(FloatingControl::default);

    {
        let dispatcher = control.dispatcher();
        use_effect_with_deps(
            move |visible| {
                dispatcher.dispatch(FloatingAction::Scrolled(*visible));
                || ()
            },
            props.visible,
        );
    }

    {
        let dispatcher = control.dispatcher();
        use_effect_with_deps(
            move |pending: &Option<(u32, u32)>| {
                if let Some((generation, delay)) = *pending {
                    spawn_local(async move {
                        TimeoutFuture::new(delay).await;
                        dispatcher.dispatch(FloatingAction::TransitionDone(generation));
                    });
                }
                || ()
            },
            control.pending(&cfg),
        );
    }

    if !control.is_rendered() {
        return html! {};
    }

    let onclick = {
        let duration = cfg.smooth_scroll_ms;
        Callback::from(move |_: MouseEvent| {
            spawn_local(scroll::smooth_scroll_to(0.0, duration));
        })
    };

    html! {
        <button
            id="scroll-to-top"
            class={classes!(if control.is_opaque() { "opacity-100" } else { "opacity-0" })}
            {onclick}
        >
            <i class="fas fa-arrow-up"></i>
            <style>
                {r#"
                    #scroll-to-top {
                        position: fixed;
                        bottom: 1.5rem;
                        right: 1.5rem;
                        width: 3rem;
                        height: 3rem;
                        border: none;
                        border-radius: 9999px;
                        background: var(--accent);
                        color: #fff;
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.2);
                        cursor: pointer;
                        z-index: 50;
                        transition: opacity 300ms ease;
                    }
                    #scroll-to-top.opacity-0 { opacity: 0; }
                    #scroll-to-top.opacity-100 { opacity: 1; }
                "#}
            </style>
        </button>
    }
}
