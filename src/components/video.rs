use yew::prelude::*;

use crate::components::notification::use_notifier;
use crate::notification::Severity;

const VIDEO_ID: &str = "dQw4w9WgXcQ";

/// Thumbnail that swaps itself for the autoplaying embed on first click.
#[function_component(VideoPlayer)]
pub fn video_player() -> Html {
    let notifier = use_notifier();
    let loaded = use_state(|| false);

    let onclick = {
        let loaded = loaded.clone();
        Callback::from(move |_: MouseEvent| {
            if !*loaded {
                loaded.set(true);
                notifier.notify("Video loaded successfully", Severity::Success);
            }
        })
    };

    let body = if *loaded {
        html! {
            <iframe
                width="100%"
                height="100%"
                src={format!("https://www.youtube.com/embed/{}?autoplay=1", VIDEO_ID)}
                frameborder="0"
                allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
                allowfullscreen={true}
            ></iframe>
        }
    } else {
        html! {
            <div class="video-thumbnail" {onclick}>
                <button class="video-play-button">
                    <i class="fas fa-play"></i>
                </button>
            </div>
        }
    };

    html! {
        <section id="how-it-works" class="how-it-works">
            <h2>{"How It Works"}</h2>
            <p>{"Choose products, try them at home, keep only what you love."}</p>
            <div class="video-container">{ body }</div>
            <style>
                {r#"
                    .how-it-works {
                        padding: 4rem 1.5rem;
                        text-align: center;
                    }
                    .video-container {
                        position: relative;
                        max-width: 800px;
                        aspect-ratio: 16 / 9;
                        margin: 2rem auto 0;
                        border-radius: 1rem;
                        overflow: hidden;
                        background: #111;
                    }
                    .video-thumbnail {
                        width: 100%;
                        height: 100%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        cursor: pointer;
                        background: linear-gradient(135deg, var(--accent), #111);
                    }
                    .video-play-button {
                        width: 4.5rem;
                        height: 4.5rem;
                        border-radius: 50%;
                        border: none;
                        background: rgba(255, 255, 255, 0.9);
                        font-size: 1.5rem;
                        cursor: pointer;
                    }
                "#}
            </style>
        </section>
    }
}
