use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config;
use crate::scroll;

#[derive(Properties, PartialEq)]
pub struct FragmentLinkProps {
    /// Element id to scroll to, without the leading `#`.
    pub target: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onclick: Option<Callback<()>>,
    pub children: Children,
}

/// In-page link that scrolls smoothly to its target instead of jumping.
#[function_component(FragmentLink)]
pub fn fragment_link(props: &FragmentLinkProps) -> Html {
    let onclick = {
        let target = props.target.clone();
        let extra = props.onclick.clone();
        let cfg = config::ui();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if let Some(extra) = &extra {
                extra.emit(());
            }
            // Missing targets are ignored.
            if let Some(offset) = scroll::anchor_offset(&target, cfg.header_offset) {
                spawn_local(scroll::smooth_scroll_to(offset, cfg.smooth_scroll_ms));
            }
        })
    };

    html! {
        <a href={format!("#{}", props.target)} class={props.class.clone()} {onclick}>
            { for props.children.iter() }
        </a>
    }
}
