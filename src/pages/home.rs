use crate::components::{Button, ButtonSize, Card, CardPadding, CardVariant, Typography, TypographyAlign, TypographyColor, TypographyVariant};
use crate::config::use_site_config;
use crate::content::{CURRENT_ISSUES, GROWTH_STATS, TESTIMONIALS};
use crate::pages::sections::{Hero, IssueGrid, SectionHeading, StatGrid, TestimonialGrid};
use crate::routes::SiteRoute;
use leptos::ev::MouseEvent;
use leptos::*;
use leptos_router::{use_navigate, NavigateOptions};

#[component]
pub fn HomePage() -> impl IntoView {
    let config = use_site_config();
    let navigate = use_navigate();

    view! {
        <div class="home-page">
            <Hero title=config.brand subtitle=config.tagline class="home-page__hero"/>

            <section class="home-page__growth">
                <div class="container">
                    <SectionHeading
                        title="The Growing Need"
                        description="Market data underscores the urgent need for better dementia care solutions"
                    />
                    <StatGrid stats=GROWTH_STATS class="home-page__stats-grid"/>
                </div>
            </section>

            <section class="home-page__issues">
                <div class="container">
                    <SectionHeading
                        title="The Problem We're Solving"
                        description="Current challenges in dementia care education and training"
                    />
                    <IssueGrid issues=CURRENT_ISSUES class="home-page__issues-grid"/>
                </div>
            </section>

            <section class="home-page__testimonials">
                <div class="container">
                    <SectionHeading title="Real Stories, Real Impact"/>
                    <TestimonialGrid testimonials=TESTIMONIALS class="home-page__testimonial-grid"/>
                </div>
            </section>

            <section class="home-page__cta">
                <div class="container">
                    <Card variant=CardVariant::Filled padding=CardPadding::Large class="cta-card">
                        <Typography variant=TypographyVariant::HeadingLarge align=TypographyAlign::Center>
                            "Ready to transform dementia care training?"
                        </Typography>
                        <Typography
                            variant=TypographyVariant::BodyLarge
                            align=TypographyAlign::Center
                            color=TypographyColor::Secondary
                        >
                            "Join thousands of caregivers already using Chronomind to build essential skills."
                        </Typography>
                        <div class="cta-actions">
                            <Button
                                size=ButtonSize::Large
                                on_click=move |_: MouseEvent| navigate(SiteRoute::Demo.path(), NavigateOptions::default())
                            >
                                "Start Free Demo"
                            </Button>
                        </div>
                    </Card>
                </div>
            </section>
        </div>
    }
}
