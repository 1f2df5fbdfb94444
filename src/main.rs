use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod actions;
mod analytics;
mod config;
mod disclosure;
mod forms;
mod hooks;
mod notification;
mod pricing;
mod rotator;
mod scroll;
mod theme;
mod components {
    pub mod cta;
    pub mod faq;
    pub mod forms;
    pub mod fragment_link;
    pub mod nav;
    pub mod notification;
    pub mod pricing;
    pub mod products;
    pub mod scroll_to_top;
    pub mod testimonials;
    pub mod video;
}
mod pages {
    pub mod home;
}

use components::notification::NotificationProvider;
use pages::home::Home;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! {
                <div class="not-found">
                    <h1>{"Page not found"}</h1>
                    <Link<Route> to={Route::Home}>{"Back to the homepage"}</Link<Route>>
                </div>
            }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <NotificationProvider>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
            <style>
                {r#"
                    :root {
                        --bg: #ffffff;
                        --surface: #f8fafc;
                        --text: #0f172a;
                        --muted: #64748b;
                        --border: #e2e8f0;
                        --accent: #4f46e5;
                        --accent-soft: rgba(79, 70, 229, 0.18);
                        --nav-bg: rgba(255, 255, 255, 0.6);
                        --nav-bg-solid: rgba(255, 255, 255, 0.95);
                    }
                    html.dark {
                        --bg: #0b1120;
                        --surface: #111827;
                        --text: #f1f5f9;
                        --muted: #94a3b8;
                        --border: #1e293b;
                        --accent: #818cf8;
                        --accent-soft: rgba(129, 140, 248, 0.2);
                        --nav-bg: rgba(11, 17, 32, 0.6);
                        --nav-bg-solid: rgba(11, 17, 32, 0.95);
                    }
                    body {
                        margin: 0;
                        background: var(--bg);
                        color: var(--text);
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                        transition: background 0.3s ease, color 0.3s ease;
                    }
                    .hidden {
                        display: none !important;
                    }
                    .not-found {
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                    }
                "#}
            </style>
        </NotificationProvider>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
