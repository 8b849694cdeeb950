use crate::components::{Card, CardPadding, CardVariant, Typography, TypographyAlign, TypographyColor, TypographyVariant};
use crate::config::use_site_config;
use crate::content::{MISSION, MISSION_DETAIL};
use crate::pages::sections::{Hero, SectionHeading};
use crate::routes::SiteRoute;
use leptos::*;
use leptos_router::A;

struct Value {
    title: &'static str,
    description: &'static str,
}

const VALUES: &[Value] = &[
    Value {
        title: "Simplicity",
        description: "We prioritize a clean, intuitive interface because we know how frustrating \
                      complex software can be. Everything we build is designed to be as \
                      straightforward as possible, so you can focus on learning, not navigating.",
    },
    Value {
        title: "Accessible Education",
        description: "Dementia care training should be available to everyone, regardless of \
                      location, background, or financial means.",
    },
    Value {
        title: "Evidence-Based",
        description: "Our approach is rooted in real-world expertise. We have consulted and \
                      interviewed local caregiving facilities and professional caregivers to \
                      ensure our simulations reflect the actual challenges faced in daily care.",
    },
];

struct Founder {
    name: &'static str,
    role: &'static str,
}

const FOUNDERS: &[Founder] = &[
    Founder {
        name: "Landon Cai",
        role: "Cofounder + Lead Developer",
    },
    Founder {
        name: "Joyce Song",
        role: "Cofounder + Communication Lead",
    },
    Founder {
        name: "Darryl Tang",
        role: "Software Developer",
    },
];

#[component]
pub fn AboutPage() -> impl IntoView {
    let config = use_site_config();
    let mailto = config.mailto();

    view! {
        <div class="about-page">
            <Hero title=format!("About {}", config.brand) class="about-page__hero"/>

            <section class="about-page__mission">
                <div class="container">
                    <Card variant=CardVariant::Filled padding=CardPadding::Large class="mission-card">
                        <Typography variant=TypographyVariant::HeadingLarge align=TypographyAlign::Center>
                            "Our Mission"
                        </Typography>
                        <Typography
                            variant=TypographyVariant::BodyLarge
                            align=TypographyAlign::Center
                            color=TypographyColor::Secondary
                        >
                            {MISSION}
                        </Typography>
                        <Typography
                            align=TypographyAlign::Center
                            color=TypographyColor::Secondary
                            class="mission-statement"
                        >
                            {MISSION_DETAIL}
                        </Typography>
                    </Card>
                </div>
            </section>

            <section class="about-page__values">
                <div class="container">
                    <SectionHeading title="Our Values" description="The principles that guide our work"/>
                    <div class="about-page__values-grid">
                        {VALUES
                            .iter()
                            .map(|value| view! {
                                <Card class="value-card">
                                    <Typography variant=TypographyVariant::HeadingMedium align=TypographyAlign::Center>
                                        {value.title}
                                    </Typography>
                                    <Typography
                                        variant=TypographyVariant::BodySmall
                                        align=TypographyAlign::Center
                                        color=TypographyColor::Secondary
                                    >
                                        {value.description}
                                    </Typography>
                                </Card>
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <section class="about-page__team">
                <div class="container">
                    <SectionHeading title="Team"/>
                    <div class="about-page__team-grid">
                        {FOUNDERS
                            .iter()
                            .map(|member| view! {
                                <Card class="team-member">
                                    <div class="team-member__avatar" aria-hidden="true">"\u{1F468}\u{200D}\u{1F4BB}"</div>
                                    <Typography variant=TypographyVariant::HeadingMedium align=TypographyAlign::Center>
                                        {member.name}
                                    </Typography>
                                    <Typography variant=TypographyVariant::BodySmall align=TypographyAlign::Center>
                                        {member.role}
                                    </Typography>
                                </Card>
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <section class="about-page__contact">
                <div class="container">
                    <Card variant=CardVariant::Filled padding=CardPadding::Large class="contact-card">
                        <Typography variant=TypographyVariant::HeadingLarge align=TypographyAlign::Center>
                            "Get in Touch"
                        </Typography>
                        <Typography
                            variant=TypographyVariant::BodyLarge
                            align=TypographyAlign::Center
                            color=TypographyColor::Secondary
                        >
                            "We're always interested in connecting with caregivers, researchers, and partners who share our mission."
                        </Typography>
                        <div class="contact-links">
                            <a href=mailto.clone() class="contact-link">
                                <Typography>{config.contact_email}</Typography>
                            </a>
                            <A href=SiteRoute::Contact.path() class="contact-link">
                                <Typography>"Partnership Inquiries"</Typography>
                            </A>
                            <a href=mailto class="contact-link">
                                <Typography>"Research Collaboration"</Typography>
                            </a>
                        </div>
                    </Card>
                </div>
            </section>
        </div>
    }
}
