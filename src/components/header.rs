use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::typography::{Typography, TypographyColor, TypographyVariant};
use crate::config::use_site_config;
use crate::routes::{is_active, SiteRoute};
use leptos::ev::MouseEvent;
use leptos::*;
use leptos_router::{use_location, A};

pub fn header_classes(is_home: bool) -> &'static str {
    if is_home {
        "header header--home"
    } else {
        "header"
    }
}

pub fn nav_link_classes(active: bool) -> &'static str {
    if active {
        "header__nav-link header__nav-link--active"
    } else {
        "header__nav-link"
    }
}

pub fn mobile_menu_classes(open: bool) -> &'static str {
    if open {
        "header__mobile-menu header__mobile-menu--open"
    } else {
        "header__mobile-menu"
    }
}

pub fn menu_toggle_label(open: bool) -> &'static str {
    if open {
        "Close menu"
    } else {
        "Open menu"
    }
}

/// Site header with desktop links and a collapsible mobile menu.
///
/// The header is the only owner of the menu flag. The mobile menu gets a
/// read handle and a toggle callback; navigating anywhere closes it.
#[component]
pub fn Header() -> impl IntoView {
    let config = use_site_config();
    let location = use_location();
    let pathname = location.pathname;

    let (menu_open, set_menu_open) = create_signal(false);
    let toggle_menu = Callback::new(move |_: ()| set_menu_open.update(|open| *open = !*open));

    create_effect(move |_| {
        let _ = pathname.get();
        set_menu_open.set(false);
    });

    view! {
        <header class=move || header_classes(pathname.get() == SiteRoute::Home.path())>
            <div class="header__container container">
                <A href=SiteRoute::Home.path() class="header__logo">
                    <Typography variant=TypographyVariant::HeadingMedium color=TypographyColor::Primary>
                        {config.brand}
                    </Typography>
                </A>

                <nav class="header__nav header__nav--desktop" aria-label="Main">
                    <NavLinks text_variant=TypographyVariant::BodyRegular/>
                </nav>

                <div class="header__actions">
                    <Button
                        variant=ButtonVariant::Text
                        size=ButtonSize::Small
                        class="header__menu-toggle"
                        on_click=move |_: MouseEvent| toggle_menu.call(())
                        aria_label=Signal::derive(move || menu_toggle_label(menu_open.get()).to_string())
                        aria_expanded=Signal::from(menu_open)
                    >
                        <div class="header__hamburger">
                            <span class="header__hamburger-line"></span>
                            <span class="header__hamburger-line"></span>
                            <span class="header__hamburger-line"></span>
                        </div>
                    </Button>
                </div>

                <MobileMenu open=menu_open on_toggle=toggle_menu/>
            </div>
        </header>
    }
}

#[component]
fn MobileMenu(open: ReadSignal<bool>, on_toggle: Callback<()>) -> impl IntoView {
    view! {
        <div class=move || mobile_menu_classes(open.get())>
            <nav class="header__nav header__nav--mobile" aria-label="Mobile">
                <NavLinks
                    text_variant=TypographyVariant::BodyLarge
                    on_navigate=Callback::new(move |_: ()| {
                        if open.get_untracked() {
                            on_toggle.call(());
                        }
                    })
                />
            </nav>
        </div>
    }
}

#[component]
fn NavLinks(
    text_variant: TypographyVariant,
    #[prop(optional)] on_navigate: Option<Callback<()>>,
) -> impl IntoView {
    let location = use_location();
    let pathname = location.pathname;

    view! {
        <ul class="header__nav-list">
            {SiteRoute::NAV
                .into_iter()
                .map(|route| {
                    let active = move || is_active(route.path(), &pathname.get());
                    view! {
                        <li
                            class="header__nav-item"
                            on:click=move |_| {
                                if let Some(cb) = on_navigate {
                                    cb.call(());
                                }
                            }
                        >
                            <A href=route.path() class=move || nav_link_classes(active())>
                                {move || {
                                    let color = if active() {
                                        TypographyColor::Primary
                                    } else {
                                        TypographyColor::Secondary
                                    };
                                    view! {
                                        <Typography variant=text_variant color=color>
                                            {route.label()}
                                        </Typography>
                                    }
                                }}
                            </A>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_classes() {
        assert_eq!(header_classes(true), "header header--home");
        assert_eq!(header_classes(false), "header");
    }

    #[test]
    fn test_nav_link_classes() {
        assert_eq!(nav_link_classes(true), "header__nav-link header__nav-link--active");
        assert_eq!(nav_link_classes(false), "header__nav-link");
    }

    #[test]
    fn test_mobile_menu_classes() {
        assert_eq!(mobile_menu_classes(true), "header__mobile-menu header__mobile-menu--open");
        assert_eq!(mobile_menu_classes(false), "header__mobile-menu");
    }

    #[test]
    fn test_toggle_label_tracks_state() {
        assert_eq!(menu_toggle_label(false), "Open menu");
        assert_eq!(menu_toggle_label(true), "Close menu");
    }
}
