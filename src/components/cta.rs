use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

use crate::analytics::{self, TrackedEvent};

#[derive(Properties, PartialEq)]
pub struct CtaButtonProps {
    pub label: AttrValue,
    /// Registered `data-action` to run on click, if any.
    #[prop_or_default]
    pub action: Option<AttrValue>,
}

/// Reads the button text and enclosing section id from the clicked element.
fn cta_event(e: &MouseEvent) -> Option<TrackedEvent> {
    let target = e.target()?.dyn_into::<Element>().ok()?;
    let button = target.closest(".cta-button").ok()??;
    let page_section = button
        .closest("section")
        .ok()
        .flatten()
        .map(|section| section.id())
        .filter(|id| !id.is_empty());
    Some(TrackedEvent::CtaClick {
        button_text: button.text_content().unwrap_or_default(),
        page_section,
    })
}

#[function_component(CtaButton)]
pub fn cta_button(props: &CtaButtonProps) -> Html {
    let onclick = Callback::from(move |e: MouseEvent| {
        if let Some(event) = cta_event(&e) {
            analytics::track(event);
        }
    });

    html! {
        <button class="cta-button pulse-animation" data-action={props.action.clone()} {onclick}>
            { &*props.label }
        </button>
    }
}
