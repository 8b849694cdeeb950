/// Every page the site can route to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiteRoute {
    Home,
    App,
    Demo,
    Team,
    Impact,
    About,
    Contact,
    Support,
    Privacy,
    Terms,
}

impl SiteRoute {
    pub const ALL: [SiteRoute; 10] = [
        SiteRoute::Home,
        SiteRoute::App,
        SiteRoute::Demo,
        SiteRoute::Team,
        SiteRoute::Impact,
        SiteRoute::About,
        SiteRoute::Contact,
        SiteRoute::Support,
        SiteRoute::Privacy,
        SiteRoute::Terms,
    ];

    /// Header navigation, in display order.
    pub const NAV: [SiteRoute; 6] = [
        SiteRoute::Home,
        SiteRoute::App,
        SiteRoute::Demo,
        SiteRoute::Team,
        SiteRoute::Impact,
        SiteRoute::About,
    ];

    /// Footer "Resources" column.
    pub const RESOURCES: [SiteRoute; 4] = [
        SiteRoute::Privacy,
        SiteRoute::Terms,
        SiteRoute::Contact,
        SiteRoute::Support,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            SiteRoute::Home => "/",
            SiteRoute::App => "/app",
            SiteRoute::Demo => "/demo",
            SiteRoute::Team => "/team",
            SiteRoute::Impact => "/impact",
            SiteRoute::About => "/about",
            SiteRoute::Contact => "/contact",
            SiteRoute::Support => "/support",
            SiteRoute::Privacy => "/privacy",
            SiteRoute::Terms => "/terms",
        }
    }

    /// Link text in the header.
    pub fn label(&self) -> &'static str {
        match self {
            SiteRoute::Home => "Home",
            SiteRoute::App => "App",
            SiteRoute::Demo => "Demo",
            SiteRoute::Team => "Team",
            SiteRoute::Impact => "Impact",
            SiteRoute::About => "About",
            SiteRoute::Contact => "Contact Us",
            SiteRoute::Support => "Support",
            SiteRoute::Privacy => "Privacy Policy",
            SiteRoute::Terms => "Terms of Service",
        }
    }

    /// Document title for the page.
    pub fn title(&self, brand: &str) -> String {
        match self {
            SiteRoute::Home => brand.to_string(),
            other => format!("{} | {}", other.label(), brand),
        }
    }

    /// Resolve a pathname, ignoring one trailing slash.
    pub fn from_path(path: &str) -> Option<SiteRoute> {
        let trimmed = match path.strip_suffix('/') {
            Some("") | None => path,
            Some(rest) => rest,
        };
        SiteRoute::ALL.into_iter().find(|r| r.path() == trimmed)
    }
}

/// Whether a nav link for `href` should be highlighted at `current`.
///
/// The root link only matches exactly; other links also match their
/// sub-paths (`/app/x` activates `/app`, `/apple` does not).
pub fn is_active(href: &str, current: &str) -> bool {
    if current == href {
        return true;
    }
    if href == "/" {
        return false;
    }
    match current.strip_prefix(href) {
        Some(rest) => rest.starts_with('/'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_are_unique() {
        for (i, a) in SiteRoute::ALL.iter().enumerate() {
            for b in SiteRoute::ALL.iter().skip(i + 1) {
                assert_ne!(a.path(), b.path(), "{:?} and {:?} share a path", a, b);
            }
        }
    }

    #[test]
    fn test_from_path_resolves_every_route() {
        for route in SiteRoute::ALL {
            assert_eq!(SiteRoute::from_path(route.path()), Some(route));
        }
    }

    #[test]
    fn test_from_path_trailing_slash() {
        assert_eq!(SiteRoute::from_path("/about/"), Some(SiteRoute::About));
        assert_eq!(SiteRoute::from_path("/"), Some(SiteRoute::Home));
        assert_eq!(SiteRoute::from_path("/research"), None);
        assert_eq!(SiteRoute::from_path(""), None);
    }

    #[test]
    fn test_nav_order() {
        let labels: Vec<_> = SiteRoute::NAV.iter().map(|r| r.label()).collect();
        assert_eq!(labels, ["Home", "App", "Demo", "Team", "Impact", "About"]);
    }

    #[test]
    fn test_resource_links() {
        let paths: Vec<_> = SiteRoute::RESOURCES.iter().map(|r| r.path()).collect();
        assert_eq!(paths, ["/privacy", "/terms", "/contact", "/support"]);
    }

    #[test]
    fn test_titles() {
        assert_eq!(SiteRoute::Home.title("Chronomind"), "Chronomind");
        assert_eq!(SiteRoute::Team.title("Chronomind"), "Team | Chronomind");
        assert_eq!(SiteRoute::Privacy.title("Chronomind"), "Privacy Policy | Chronomind");
    }

    #[test]
    fn test_is_active_root_only_exact() {
        assert!(is_active("/", "/"));
        assert!(!is_active("/", "/about"));
    }

    #[test]
    fn test_is_active_prefix_on_segment_boundary() {
        assert!(is_active("/app", "/app"));
        assert!(is_active("/app", "/app/features"));
        assert!(!is_active("/app", "/apple"));
        assert!(!is_active("/about", "/"));
    }
}
