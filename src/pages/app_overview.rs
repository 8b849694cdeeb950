use crate::components::{Card, CardPadding, CardVariant, StatusIndicator, Typography, TypographyAlign, TypographyColor, TypographyVariant};
use crate::pages::sections::{Hero, SectionHeading};
use crate::status::MeasurementKind;
use leptos::*;

struct Feature {
    title: &'static str,
    description: &'static str,
}

const FEATURES: &[Feature] = &[
    Feature {
        title: "Interactive Scenarios",
        description: "Practice real-life dementia care situations in a safe environment.",
    },
    Feature {
        title: "AI Analysis",
        description: "Have AI analyze your game-play, the decisions you make, and their impact",
    },
    Feature {
        title: "Stress Stats",
        description: "Learn how your decisions in simulation affect patient and caregiver stress, \
                      empathy, safety...",
    },
];

struct Mode {
    title: &'static str,
    summary: &'static str,
    topics: [&'static str; 4],
    class: &'static str,
}

static MODES: [Mode; 2] = [
    Mode {
        title: "Family Caregiver Mode",
        summary: "Focus on empathy, daily care routines, and emotional support for loved ones at home.",
        topics: [
            "Personal care scenarios",
            "Communication techniques",
            "Stress management tools",
            "Family support resources",
        ],
        class: "mode-card mode-card--family",
    },
    Mode {
        title: "Professional Caregiver Mode",
        summary: "Develop clinical skills, care management, and professional caregiving standards.",
        topics: [
            "Clinical assessment training",
            "Care plan development",
            "Team coordination exercises",
            "Professional ethics scenarios",
        ],
        class: "mode-card mode-card--professional",
    },
];

/// Sample end-of-scenario readouts shown under "Stress Stats".
const SAMPLE_READOUTS: [(&str, MeasurementKind, f64); 3] = [
    ("Caregiver stress", MeasurementKind::Stress, 72.0),
    ("Patient well-being", MeasurementKind::WellBeing, 41.0),
    ("Empathy score", MeasurementKind::Metric, 85.0),
];

#[component]
pub fn AppPage() -> impl IntoView {
    view! {
        <div class="app-page">
            <Hero title="Chronomind App" class="app-page__hero"/>

            <section class="app-page__features">
                <div class="container">
                    <SectionHeading
                        title="Key Features"
                        description="Designed to provide effective, empathetic training for caregivers"
                    />
                    <div class="app-page__feature-grid">
                        {FEATURES
                            .iter()
                            .map(|feature| view! {
                                <Card class="feature-card">
                                    <Typography variant=TypographyVariant::HeadingMedium align=TypographyAlign::Center>
                                        {feature.title}
                                    </Typography>
                                    <Typography align=TypographyAlign::Center color=TypographyColor::Secondary>
                                        {feature.description}
                                    </Typography>
                                </Card>
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <section class="app-page__readouts">
                <div class="container">
                    <SectionHeading
                        title="See the Impact of Every Choice"
                        description="After each scenario the app scores how your decisions landed"
                    />
                    <Card variant=CardVariant::Outlined padding=CardPadding::Large class="readout-card">
                        {SAMPLE_READOUTS
                            .into_iter()
                            .map(|(label, kind, value)| view! {
                                <StatusIndicator value=value kind=kind label=label/>
                            })
                            .collect_view()}
                    </Card>
                </div>
            </section>

            <section class="app-page__modes">
                <div class="container">
                    <SectionHeading
                        title="Two Modes, One Mission"
                        description="Choose the training path that fits your role"
                    />
                    <div class="app-page__mode-comparison">
                        {MODES
                            .iter()
                            .map(|mode| view! {
                                <Card padding=CardPadding::Large class=mode.class>
                                    <Typography
                                        variant=TypographyVariant::HeadingMedium
                                        align=TypographyAlign::Center
                                        color=TypographyColor::Primary
                                    >
                                        {mode.title}
                                    </Typography>
                                    <Typography align=TypographyAlign::Center color=TypographyColor::Secondary>
                                        {mode.summary}
                                    </Typography>
                                    <ul class="mode-features">
                                        {mode.topics.iter().map(|topic| view! { <li>{*topic}</li> }).collect_view()}
                                    </ul>
                                </Card>
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <section class="app-page__cta">
                <div class="container">
                    <Card variant=CardVariant::Filled padding=CardPadding::Large class="cta-card">
                        <Typography variant=TypographyVariant::HeadingLarge align=TypographyAlign::Center>
                            "Download the App"
                        </Typography>
                        <Typography
                            variant=TypographyVariant::BodyLarge
                            align=TypographyAlign::Center
                            color=TypographyColor::Secondary
                        >
                            "Available soon on iOS and Android devices"
                        </Typography>
                        <Typography
                            variant=TypographyVariant::Caption
                            align=TypographyAlign::Center
                            color=TypographyColor::Secondary
                        >
                            "*Demo version available on this website"
                        </Typography>
                    </Card>
                </div>
            </section>
        </div>
    }
}
