use crate::config::use_site_config;
use leptos::*;

/// Embedded product walkthrough.
#[component]
pub fn DemoPage() -> impl IntoView {
    let config = use_site_config();

    view! {
        <div class="demo-page">
            <section class="demo-page__video">
                <div class="container demo-page__container">
                    <div class="demo-page__frame">
                        <iframe
                            class="demo-video-embed"
                            width="100%"
                            height="100%"
                            src=config.demo_embed_url()
                            title=config.demo_video_title
                            frameborder="0"
                            allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share"
                            allowfullscreen=true
                        ></iframe>
                    </div>
                </div>
            </section>
        </div>
    }
}
