use crate::components::{Card, CardPadding, CardVariant, Typography, TypographyAlign, TypographyColor, TypographyVariant};
use crate::content::MISSION;
use crate::pages::sections::{Hero, SectionHeading};
use leptos::*;

struct Member {
    name: &'static str,
    role: &'static str,
    bio: &'static str,
    expertise: &'static str,
    avatar: &'static str,
}

const CORE_TEAM: &[Member] = &[
    Member {
        name: "Dr. Sarah Chen",
        role: "Founder & CEO",
        bio: "Neurologist with 15+ years experience in dementia care.",
        expertise: "Clinical Neurology, Caregiver Training",
        avatar: "\u{1F469}\u{200D}\u{2695}\u{FE0F}",
    },
    Member {
        name: "Marcus Johnson",
        role: "Lead Developer",
        bio: "Software engineer specializing in educational technology.",
        expertise: "React Native, Simulation Design",
        avatar: "\u{1F468}\u{200D}\u{1F4BB}",
    },
    Member {
        name: "Dr. Elena Rodriguez",
        role: "Clinical Director",
        bio: "Geriatric psychologist focusing on caregiver mental health.",
        expertise: "Psychology, Stress Management",
        avatar: "\u{1F469}\u{200D}\u{1F3EB}",
    },
    Member {
        name: "David Kim",
        role: "UX/UI Designer",
        bio: "Accessibility-focused designer with healthcare experience.",
        expertise: "Accessibility, User Research",
        avatar: "\u{1F3A8}",
    },
];

struct Advisor {
    name: &'static str,
    role: &'static str,
    affiliation: &'static str,
    avatar: &'static str,
}

const ADVISORS: &[Advisor] = &[
    Advisor {
        name: "Prof. James Wilson",
        role: "Advisory Board Chair",
        affiliation: "Stanford University Geriatrics",
        avatar: "\u{1F474}",
    },
    Advisor {
        name: "Dr. Maria Garcia",
        role: "Ethics Advisor",
        affiliation: "National Dementia Care Network",
        avatar: "\u{1F469}\u{200D}\u{2696}\u{FE0F}",
    },
    Advisor {
        name: "Lisa Thompson",
        role: "Caregiver Advocate",
        affiliation: "Family Caregiver Alliance",
        avatar: "\u{1F475}",
    },
];

const CAREERS_MAILTO: &str = "mailto:careers@chronomind.com";
const ADVISOR_MAILTO: &str = "mailto:advisor@chronomind.com";

#[component]
pub fn TeamPage() -> impl IntoView {
    view! {
        <div class="team-page">
            <Hero
                title="Our Team"
                subtitle="Passionate professionals dedicated to transforming dementia care training"
                class="team-page__hero"
            />

            <section class="team-page__mission">
                <div class="container">
                    <Card variant=CardVariant::Filled padding=CardPadding::Large>
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
                    </Card>
                </div>
            </section>

            <section class="team-page__core">
                <div class="container">
                    <SectionHeading title="Core Team" description="The dedicated professionals building Chronomind"/>
                    <div class="team-page__grid">
                        {CORE_TEAM
                            .iter()
                            .map(|member| view! {
                                <Card class="team-member">
                                    <div class="team-member__avatar" aria-hidden="true">{member.avatar}</div>
                                    <Typography variant=TypographyVariant::HeadingMedium align=TypographyAlign::Center>
                                        {member.name}
                                    </Typography>
                                    <Typography variant=TypographyVariant::BodySmall align=TypographyAlign::Center>
                                        {member.role}
                                    </Typography>
                                    <Typography
                                        variant=TypographyVariant::BodySmall
                                        align=TypographyAlign::Center
                                        color=TypographyColor::Secondary
                                    >
                                        {member.bio}
                                    </Typography>
                                    <div class="team-member__expertise">
                                        <Typography variant=TypographyVariant::Caption color=TypographyColor::Secondary>
                                            {format!("Expertise: {}", member.expertise)}
                                        </Typography>
                                    </div>
                                </Card>
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <section class="team-page__advisors">
                <div class="container">
                    <SectionHeading title="Advisory Board" description="Experts guiding our mission and impact"/>
                    <div class="team-page__grid team-page__grid--advisors">
                        {ADVISORS
                            .iter()
                            .map(|advisor| view! {
                                <Card variant=CardVariant::Outlined class="advisor">
                                    <div class="advisor__avatar" aria-hidden="true">{advisor.avatar}</div>
                                    <Typography variant=TypographyVariant::HeadingMedium align=TypographyAlign::Center>
                                        {advisor.name}
                                    </Typography>
                                    <Typography variant=TypographyVariant::BodySmall align=TypographyAlign::Center>
                                        {advisor.role}
                                    </Typography>
                                    <Typography
                                        variant=TypographyVariant::BodySmall
                                        align=TypographyAlign::Center
                                        color=TypographyColor::Secondary
                                    >
                                        {advisor.affiliation}
                                    </Typography>
                                </Card>
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <section class="team-page__join">
                <div class="container">
                    <Card variant=CardVariant::Filled padding=CardPadding::Large class="join-card">
                        <Typography variant=TypographyVariant::HeadingLarge align=TypographyAlign::Center>
                            "Join Our Mission"
                        </Typography>
                        <Typography
                            variant=TypographyVariant::BodyLarge
                            align=TypographyAlign::Center
                            color=TypographyColor::Secondary
                        >
                            "We're always looking for passionate individuals to help transform dementia care."
                        </Typography>
                        <div class="join-actions">
                            <a href=CAREERS_MAILTO class="join-link">
                                <Typography>"View Open Positions \u{2192}"</Typography>
                            </a>
                            <a href=ADVISOR_MAILTO class="join-link">
                                <Typography>"Become an Advisor \u{2192}"</Typography>
                            </a>
                        </div>
                    </Card>
                </div>
            </section>
        </div>
    }
}
