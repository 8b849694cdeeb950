pub mod components;
pub mod config;
pub mod content;
pub mod pages;
pub mod routes;
pub mod scroll;
pub mod status;

use components::MainLayout;
use config::SiteConfig;
use leptos::logging::log;
use leptos::*;
use leptos_router::*;
use pages::{
    AboutPage, AppPage, ContactPage, DemoPage, HomePage, ImpactPage, NotFoundPage, PrivacyPage,
    SupportPage, TeamPage, TermsPage,
};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

/// Workaround for Leptos 0.6 router not re-rendering on browser back/forward.
///
/// On `popstate`, the router updates its internal location signal but doesn't
/// always trigger `<Routes>` to re-evaluate which view to show. Forcing a full
/// reload re-initializes the WASM app at the correct URL; the scroll offset
/// survives through sessionStorage.
fn setup_popstate_reload() {
    let closure = Closure::wrap(Box::new(move |_: web_sys::Event| {
        if let Some(window) = web_sys::window() {
            let _ = window.location().reload();
        }
    }) as Box<dyn Fn(web_sys::Event)>);

    if let Some(window) = web_sys::window() {
        let _ = window.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

#[component]
fn Root() -> impl IntoView {
    provide_context(SiteConfig::load());

    view! {
        <ErrorBoundary fallback=|errors| view! {
            <main class="container">
                <div class="error-container">
                    <h2>"Something went wrong"</h2>
                    <p>"This page failed to load. Try refreshing."</p>
                    <ul>
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect_view()
                        }
                    </ul>
                    <button on:click=move |_| {
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().reload();
                        }
                    }>"Reload"</button>
                </div>
            </main>
        }>
            <Router>
                <MainLayout>
                    <Routes>
                        <Route path="/" view=HomePage/>
                        <Route path="/app" view=AppPage/>
                        <Route path="/demo" view=DemoPage/>
                        <Route path="/team" view=TeamPage/>
                        <Route path="/impact" view=ImpactPage/>
                        <Route path="/about" view=AboutPage/>
                        <Route path="/contact" view=ContactPage/>
                        <Route path="/support" view=SupportPage/>
                        <Route path="/privacy" view=PrivacyPage/>
                        <Route path="/terms" view=TermsPage/>
                        <Route path="/*any" view=NotFoundPage/>
                    </Routes>
                </MainLayout>
            </Router>
        </ErrorBoundary>
    }
}

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    scroll::setup_scroll_restoration();
    setup_popstate_reload();
    log!("Chronomind: mounting site");
    mount_to_body(Root);
    // Content needs a tick to render before the saved offset is reachable.
    scroll::restore_scroll_after_delay(50);
}
