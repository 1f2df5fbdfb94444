use yew::prelude::*;

use crate::components::fragment_link::FragmentLink;
use crate::config;
use crate::disclosure::{DisclosureAction, Disclosures, IconPair, MOBILE_MENU};
use crate::hooks::use_disclosures;
use crate::theme::ThemePreference;

const LINKS: &[(&str, &str)] = &[
    ("products", "Products"),
    ("how-it-works", "How It Works"),
    ("pricing", "Pricing"),
    ("faq", "FAQ"),
];

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub theme: ThemePreference,
    pub on_toggle_theme: Callback<()>,
    pub background_active: bool,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let menu = use_disclosures(
        || Disclosures::default().with_region(MOBILE_MENU, None, IconPair::Menu),
        config::ui().disclosure_slide_ms,
    );

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu.dispatch(DisclosureAction::Click(MOBILE_MENU.to_string()));
        })
    };

    // Following a link always collapses the menu.
    let close_menu = {
        let menu = menu.clone();
        Callback::from(move |_: ()| {
            menu.dispatch(DisclosureAction::ForceClose(MOBILE_MENU.to_string()));
        })
    };

    let icons = props.theme.icons();
    let theme_toggle = |id: &'static str| {
        let on_toggle = props.on_toggle_theme.clone();
        html! {
            <button id={id} class="theme-toggle" onclick={Callback::from(move |_: MouseEvent| on_toggle.emit(()))}>
                <i class={classes!("fas", "fa-sun", (!icons.sun_visible).then_some("hidden"))}></i>
                <i class={classes!("fas", "fa-moon", (!icons.moon_visible).then_some("hidden"))}></i>
            </button>
        }
    };

    let menu_state = menu.state(MOBILE_MENU);
    let menu_icon = menu.get(MOBILE_MENU).map_or("fa-bars", |region| region.icon());

    html! {
        <nav class={classes!("top-nav", props.background_active.then_some("bg-opacity-95"))}>
            <div class="nav-content">
                <FragmentLink target="top" class="nav-logo">{"TryFirst"}</FragmentLink>
                <div class="nav-links">
                    { for LINKS.iter().map(|(target, label)| html! {
                        <FragmentLink target={*target} class="nav-link">{ *label }</FragmentLink>
                    }) }
                    { theme_toggle("theme-toggle") }
                </div>
                <button id="mobile-menu-toggle" class="burger-menu" onclick={toggle_menu}>
                    <i class={classes!("fas", menu_icon)}></i>
                </button>
            </div>
            <div
                id="mobile-menu"
                class={classes!("mobile-menu", "disclosure-panel", menu_state.class(), (!menu_state.is_rendered()).then_some("hidden"))}
            >
                { for LINKS.iter().map(|(target, label)| html! {
                    <FragmentLink target={*target} class="mobile-nav-link" onclick={close_menu.clone()}>{ *label }</FragmentLink>
                }) }
                { theme_toggle("theme-toggle-mobile") }
            </div>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 40;
                        background: var(--nav-bg);
                        transition: background 0.3s ease;
                    }
                    .top-nav.bg-opacity-95 {
                        background: var(--nav-bg-solid);
                        box-shadow: 0 2px 12px rgba(0, 0, 0, 0.1);
                    }
                    .nav-content {
                        max-width: 1200px;
                        margin: 0 auto;
                        height: 80px;
                        padding: 0 1.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav-logo {
                        font-weight: 700;
                        font-size: 1.5rem;
                        color: var(--accent);
                        text-decoration: none;
                    }
                    .nav-links {
                        display: flex;
                        gap: 1.5rem;
                        align-items: center;
                    }
                    .nav-link, .mobile-nav-link {
                        color: var(--text);
                        text-decoration: none;
                    }
                    .theme-toggle, .burger-menu {
                        background: none;
                        border: none;
                        color: var(--text);
                        font-size: 1.2rem;
                        cursor: pointer;
                    }
                    .burger-menu {
                        display: none;
                    }
                    .mobile-menu {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                        padding: 1rem 1.5rem;
                        background: var(--nav-bg-solid);
                    }
                    @media (max-width: 768px) {
                        .nav-links {
                            display: none;
                        }
                        .burger-menu {
                            display: block;
                        }
                    }
                    @media (min-width: 769px) {
                        .mobile-menu {
                            display: none;
                        }
                    }
                "#}
            </style>
        </nav>
    }
}
