use crate::components::button::{Button, ButtonSize, ButtonVariant, LinkButton};
use crate::components::typography::{Typography, TypographyColor, TypographyVariant};
use crate::config::use_site_config;
use crate::routes::SiteRoute;
use leptos::ev::MouseEvent;
use leptos::*;
use leptos_router::{use_navigate, NavigateOptions, A};

pub fn copyright_line(year: u32, brand: &str) -> String {
    format!("\u{00A9} {} {} Dementia Care Simulator. All rights reserved.", year, brand)
}

fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

#[component]
pub fn Footer() -> impl IntoView {
    let config = use_site_config();
    let navigate = use_navigate();
    let youtube_url = config.youtube_url.clone();
    let copyright = copyright_line(current_year(), &config.brand);

    view! {
        <footer class="footer">
            <div class="footer__container container">
                <div class="footer__top">
                    <div class="footer__logo-section">
                        <A href=SiteRoute::Home.path()>
                            <Typography variant=TypographyVariant::HeadingMedium color=TypographyColor::Primary>
                                {config.brand.clone()}
                            </Typography>
                        </A>
                        <Typography
                            variant=TypographyVariant::BodySmall
                            color=TypographyColor::Secondary
                            class="footer__description"
                        >
                            {config.description.clone()}
                        </Typography>
                        <Button
                            size=ButtonSize::Small
                            on_click=move |_: MouseEvent| navigate(SiteRoute::Demo.path(), NavigateOptions::default())
                        >
                            "Try Demo"
                        </Button>
                    </div>

                    <div class="footer__links-section">
                        <Typography
                            variant=TypographyVariant::HeadingMedium
                            color=TypographyColor::Primary
                            class="footer__links-title"
                        >
                            "Resources"
                        </Typography>
                        <ul class="footer__links-list">
                            {SiteRoute::RESOURCES
                                .into_iter()
                                .map(|route| view! {
                                    <li>
                                        <A href=route.path() class="footer__link">
                                            <Typography variant=TypographyVariant::BodySmall color=TypographyColor::Secondary>
                                                {route.label()}
                                            </Typography>
                                        </A>
                                    </li>
                                })
                                .collect_view()}
                        </ul>
                    </div>

                    <div class="footer__links-section">
                        <Typography
                            variant=TypographyVariant::HeadingMedium
                            color=TypographyColor::Primary
                            class="footer__links-title"
                        >
                            "Stay Updated"
                        </Typography>
                        <Typography variant=TypographyVariant::BodySmall color=TypographyColor::Secondary>
                            "Follow our Socials"
                        </Typography>
                        <LinkButton
                            href=youtube_url
                            external=true
                            variant=ButtonVariant::Secondary
                            size=ButtonSize::Small
                            full_width=true
                            class="footer__subscribe"
                        >
                            "YouTube"
                        </LinkButton>
                    </div>
                </div>

                <div class="footer__bottom">
                    <Typography
                        variant=TypographyVariant::Caption
                        color=TypographyColor::Secondary
                        class="footer__copyright"
                    >
                        {copyright}
                    </Typography>

                    <div class="footer__social">
                        {config
                            .socials
                            .into_iter()
                            .map(|social| view! {
                                <a
                                    href=social.url
                                    class="footer__social-link"
                                    aria-label=format!("Follow us on {}", social.name)
                                    target="_blank"
                                    rel="noopener noreferrer"
                                >
                                    <Typography color=TypographyColor::Inherit>{social.icon}</Typography>
                                </a>
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copyright_line() {
        assert_eq!(
            copyright_line(2026, "Chronomind"),
            "\u{00A9} 2026 Chronomind Dementia Care Simulator. All rights reserved."
        );
    }
}
