use crate::components::{Card, LinkButton, CardPadding, CardVariant, Typography, TypographyAlign, TypographyColor, TypographyVariant};
use crate::config::use_site_config;
use crate::pages::sections::Hero;
use crate::routes::SiteRoute;
use leptos::*;

#[component]
pub fn ContactPage() -> impl IntoView {
    let config = use_site_config();
    let mailto = config.mailto();
    let response_note = format!(
        "We aim to respond to all inquiries within {}.",
        config.response_time
    );
    let location_note = format!("{} is based in {}.", config.brand, config.location);
    let thanks = format!(
        "Thank you for your interest in {}. We're committed to improving dementia care education and appreciate your support.",
        config.brand
    );

    view! {
        <div class="contact-page">
            <Hero title="Contact Us" subtitle="We'd love to hear from you" class="contact-page__section"/>

            <div class="container contact-page__container">
                <section class="contact-page__section">
                    <Card variant=CardVariant::Filled padding=CardPadding::Large class="contact-page__card">
                        <Typography variant=TypographyVariant::HeadingLarge class="contact-page__section-title">
                            "General Inquiries"
                        </Typography>
                        <Typography color=TypographyColor::Secondary>
                            "For general questions, partnership opportunities, or media inquiries, please reach out to us via email."
                        </Typography>
                        <div class="contact-page__info-item">
                            <Typography variant=TypographyVariant::HeadingMedium class="contact-page__info-label">
                                "Email"
                            </Typography>
                            <a href=mailto class="contact-page__link">
                                <Typography variant=TypographyVariant::BodyLarge>{config.contact_email}</Typography>
                            </a>
                        </div>
                        <Typography variant=TypographyVariant::BodySmall color=TypographyColor::Secondary>
                            {response_note}
                        </Typography>
                    </Card>
                </section>

                <section class="contact-page__section">
                    <Card variant=CardVariant::Filled padding=CardPadding::Large class="contact-page__card">
                        <Typography variant=TypographyVariant::HeadingLarge class="contact-page__section-title">
                            "Technical Support"
                        </Typography>
                        <Typography color=TypographyColor::Secondary>
                            "For technical issues, bug reports, or feature requests related to our applications, please visit our Support page."
                        </Typography>
                        <div class="contact-page__info-item">
                            <LinkButton href=SiteRoute::Support.path() class="contact-page__link">
                                "Visit Support Page"
                            </LinkButton>
                        </div>
                    </Card>
                </section>

                <section class="contact-page__section">
                    <Card variant=CardVariant::Filled padding=CardPadding::Large class="contact-page__card">
                        <Typography variant=TypographyVariant::HeadingLarge class="contact-page__section-title">
                            "Follow Our Journey"
                        </Typography>
                        <Typography color=TypographyColor::Secondary>
                            "Stay updated with our latest developments, announcements, and educational content."
                        </Typography>
                        <div class="contact-page__social-links">
                            {config
                                .socials
                                .into_iter()
                                .map(|social| view! {
                                    <a
                                        href=social.url
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="contact-page__social-link"
                                    >
                                        <span aria-hidden="true">{social.icon}</span>
                                        <Typography>{social.name}</Typography>
                                    </a>
                                })
                                .collect_view()}
                        </div>
                    </Card>
                </section>

                <section class="contact-page__section">
                    <Card variant=CardVariant::Filled padding=CardPadding::Large class="contact-page__card">
                        <Typography variant=TypographyVariant::HeadingLarge class="contact-page__section-title">
                            "Our Location"
                        </Typography>
                        <Typography color=TypographyColor::Secondary>{location_note}</Typography>
                        <Typography variant=TypographyVariant::BodySmall color=TypographyColor::Secondary>
                            "We work remotely and collaborate with partners worldwide."
                        </Typography>
                    </Card>
                </section>

                <section class="contact-page__section">
                    <Card>
                        <Typography color=TypographyColor::Secondary align=TypographyAlign::Center>
                            {thanks}
                        </Typography>
                    </Card>
                </section>
            </div>
        </div>
    }
}
