use crate::components::{Footer, Header};
use crate::config::use_site_config;
use crate::routes::SiteRoute;
use crate::scroll::scroll_to_top;
use leptos::*;
use leptos_router::use_location;

/// Title for a pathname, falling back to "Page not found" for unknown paths.
pub fn document_title(pathname: &str, brand: &str) -> String {
    match SiteRoute::from_path(pathname) {
        Some(route) => route.title(brand),
        None => format!("Page not found | {}", brand),
    }
}

/// Shell around every page: skip link, header, main content, footer.
#[component]
pub fn MainLayout(children: Children) -> impl IntoView {
    let brand = use_site_config().brand;
    let pathname = use_location().pathname;

    create_effect(move |prev: Option<String>| {
        let path = pathname.get();
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document.set_title(&document_title(&path, &brand));
        }
        // The first run is the initial load; leave that to scroll restoration.
        if prev.is_some_and(|p| p != path) {
            scroll_to_top();
        }
        path
    });

    view! {
        <div class="main-layout">
            <a href="#main-content" class="skip-to-content">"Skip to content"</a>
            <Header/>
            <main id="main-content" class="main-content">
                {children()}
            </main>
            <Footer/>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_title_known_routes() {
        assert_eq!(document_title("/", "Chronomind"), "Chronomind");
        assert_eq!(document_title("/impact", "Chronomind"), "Impact | Chronomind");
        assert_eq!(document_title("/support/", "Chronomind"), "Support | Chronomind");
    }

    #[test]
    fn test_document_title_unknown_route() {
        assert_eq!(document_title("/research", "Chronomind"), "Page not found | Chronomind");
    }
}
