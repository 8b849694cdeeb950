use crate::components::{Card, CardPadding, CardVariant, Typography, TypographyAlign, TypographyColor, TypographyVariant};
use crate::content::{CURRENT_ISSUES, GROWTH_STATS, TESTIMONIALS};
use crate::pages::sections::{Hero, IssueGrid, SectionHeading, StatGrid, TestimonialGrid};
use crate::routes::SiteRoute;
use leptos::*;
use leptos_router::A;

const MOVEMENT: &str = "Chronomind isn't just an app, it's a training tool, empathy builder, and a \
                        support system. It prepares caregivers for reality, reduces burnout, and \
                        ultimately improves quality of life not just for people with dementia but \
                        also for the people around them and society as a whole.";

#[component]
pub fn ImpactPage() -> impl IntoView {
    view! {
        <div class="impact-page">
            <Hero
                title="Our Impact"
                subtitle="Addressing critical gaps in dementia care through innovative training"
                class="impact-page__hero"
            />

            <section class="impact-page__issues">
                <div class="container">
                    <SectionHeading
                        title="The Problem We're Solving"
                        description="Current challenges in dementia care education and training"
                    />
                    <IssueGrid issues=CURRENT_ISSUES class="impact-page__issues-grid"/>
                </div>
            </section>

            <section class="impact-page__growth">
                <div class="container">
                    <SectionHeading
                        title="The Growing Need"
                        description="Market data underscores the urgent need for better dementia care solutions"
                    />
                    <StatGrid stats=GROWTH_STATS class="impact-page__stats-grid"/>
                </div>
            </section>

            <section class="impact-page__testimonials">
                <div class="container">
                    <SectionHeading title="Real Stories, Real Impact"/>
                    <TestimonialGrid testimonials=TESTIMONIALS class="impact-page__testimonial-grid"/>
                </div>
            </section>

            <section class="impact-page__cta">
                <div class="container">
                    <Card variant=CardVariant::Filled padding=CardPadding::Large class="cta-card">
                        <Typography variant=TypographyVariant::HeadingLarge align=TypographyAlign::Center>
                            "Join the Movement"
                        </Typography>
                        <Typography
                            variant=TypographyVariant::BodyLarge
                            align=TypographyAlign::Center
                            color=TypographyColor::Secondary
                        >
                            {MOVEMENT}
                        </Typography>
                        <div class="cta-actions">
                            <A href=SiteRoute::Demo.path() class="cta-link">
                                <Typography>"Try the Demo \u{2192}"</Typography>
                            </A>
                            <A href=SiteRoute::Contact.path() class="cta-link">
                                <Typography>"Partner With Us \u{2192}"</Typography>
                            </A>
                        </div>
                    </Card>
                </div>
            </section>
        </div>
    }
}
