use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{js_sys, window, Element, Event, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::analytics::{self, TrackedEvent};
use crate::components::notification::use_notifier;
use crate::config::UiConfig;
use crate::disclosure::{DisclosureAction, Disclosures, PendingAnimation};
use crate::notification::Severity;
use crate::scroll::{self, ScrollState};
use crate::theme::{self, PreferenceStore, ThemePreference};

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Current theme plus a callback that flips, persists, applies and announces it.
#[hook]
pub fn use_theme() -> (ThemePreference, Callback<()>) {
    let notifier = use_notifier();
    let preference = use_state(|| PreferenceStore::browser().load());

    {
        let preference = *preference;
        use_effect_with_deps(
            move |_| {
                theme::apply(preference);
                || ()
            },
            (),
        );
    }

    let toggle = {
        let preference = preference.clone();
        Callback::from(move |_| {
            let next = PreferenceStore::browser().toggle(theme::applied());
            theme::apply(next);
            preference.set(next);
            notifier.notify(next.activated_message(), Severity::Success);
        })
    };

    (*preference, toggle)
}

/// Disclosure regions whose slide transitions settle after `slide_ms`.
#[hook]
pub fn use_disclosures<F>(init: F, slide_ms: u32) -> UseReducerHandle<Disclosures>
where
    F: FnOnce() -> Disclosures,
{
    let regions = use_reducer(init);

    {
        let dispatcher = regions.dispatcher();
        use_effect_with_deps(
            move |pending: &Vec<PendingAnimation>| {
                for animation in pending.iter().cloned() {
                    let dispatcher = dispatcher.clone();
                    spawn_local(async move {
                        TimeoutFuture::new(slide_ms).await;
                        dispatcher.dispatch(DisclosureAction::AnimationDone {
                            id: animation.id,
                            generation: animation.generation,
                        });
                    });
                }
                || ()
            },
            regions.pending(),
        );
    }

    regions
}

/// Scroll-derived state, recomputed on a trailing-edge debounce.
#[hook]
pub fn use_scroll_reactor(cfg: UiConfig) -> ScrollState {
    let state = use_state(|| ScrollState::from_offset(scroll::scroll_top(), &cfg));

    let debounced = {
        let state = state.clone();
        let delay = cfg.scroll_debounce_ms;
        use_debounce(
            move || state.set(ScrollState::from_offset(scroll::scroll_top(), &cfg)),
            delay,
        )
    };

    use_event_with_window("scroll", move |_: Event| {
        debounced.run();
    });

    *state
}

/// Tags every `section` with `fade-in` and adds `visible` once it scrolls into view.
#[hook]
pub fn use_fade_in() {
    use_effect_with_deps(
        move |_| {
            let observer = observe_sections();
            move || {
                if let Some((observer, _callback)) = observer {
                    observer.disconnect();
                }
            }
        },
        (),
    );
}

fn observe_sections() -> Option<(IntersectionObserver, ObserverCallback)> {
    let document = window()?.document()?;
    let callback: ObserverCallback = Closure::wrap(Box::new(move |entries: js_sys::Array, _observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            if entry.is_intersecting() {
                let _ = entry.target().class_list().add_1("visible");
            }
        }
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(0.1));
    options.set_root_margin("0px 0px -50px 0px");
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;

    for section in query_all(&document, "section") {
        let _ = section.class_list().add_1("fade-in");
        observer.observe(&section);
    }
    Some((observer, callback))
}

/// Swaps `data-src` into `src` for images as they first intersect the viewport.
#[hook]
pub fn use_lazy_images() {
    use_effect_with_deps(
        move |_| {
            let observer = observe_lazy_images();
            move || {
                if let Some((observer, _callback)) = observer {
                    observer.disconnect();
                }
            }
        },
        (),
    );
}

fn observe_lazy_images() -> Option<(IntersectionObserver, ObserverCallback)> {
    let document = window()?.document()?;
    let callback: ObserverCallback = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            if !entry.is_intersecting() {
                continue;
            }
            let img = entry.target();
            if let Some(src) = img.get_attribute("data-src") {
                let _ = img.set_attribute("src", &src);
            }
            let _ = img.class_list().remove_1("lazy");
            observer.unobserve(&img);
        }
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let observer = IntersectionObserver::new(callback.as_ref().unchecked_ref()).ok()?;
    for img in query_all(&document, "img[data-src]") {
        observer.observe(&img);
    }
    Some((observer, callback))
}

fn query_all(document: &web_sys::Document, selector: &str) -> Vec<Element> {
    let Ok(nodes) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Tracks `page_hidden` / `page_visible` on document visibility changes.
#[hook]
pub fn use_page_visibility() {
    use_effect_with_deps(
        move |_| {
            let listener = window().and_then(|w| w.document()).map(|document| {
                let observed = document.clone();
                let callback = Closure::wrap(Box::new(move || {
                    analytics::track(TrackedEvent::visibility(observed.hidden()));
                }) as Box<dyn FnMut()>);
                let _ = document.add_event_listener_with_callback("visibilitychange", callback.as_ref().unchecked_ref());
                (document, callback)
            });

            move || {
                if let Some((document, callback)) = listener {
                    let _ = document.remove_event_listener_with_callback("visibilitychange", callback.as_ref().unchecked_ref());
                }
            }
        },
        (),
    );
}
