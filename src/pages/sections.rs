//! Building blocks repeated across pages.

use crate::components::{Card, CardPadding, CardVariant, Typography, TypographyAlign, TypographyColor, TypographyVariant};
use crate::config::use_site_config;
use crate::content::{Stat, Testimonial};
use leptos::*;

/// Hero block: display title with an optional subtitle.
#[component]
pub fn Hero(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: Option<String>,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    view! {
        <section class=class>
            <div class="container">
                <Typography variant=TypographyVariant::DisplayLarge align=TypographyAlign::Center>
                    {title}
                </Typography>
                {subtitle.map(|text| view! {
                    <Typography
                        variant=TypographyVariant::BodyLarge
                        align=TypographyAlign::Center
                        color=TypographyColor::Secondary
                    >
                        {text}
                    </Typography>
                })}
            </div>
        </section>
    }
}

/// Centered section heading plus optional description.
#[component]
pub fn SectionHeading(title: &'static str, #[prop(optional)] description: Option<&'static str>) -> impl IntoView {
    view! {
        <Typography variant=TypographyVariant::HeadingLarge align=TypographyAlign::Center class="section-title">
            {title}
        </Typography>
        {description.map(|text| view! {
            <Typography
                align=TypographyAlign::Center
                color=TypographyColor::Secondary
                class="section-description"
            >
                {text}
            </Typography>
        })}
    }
}

#[component]
pub fn StatGrid(stats: &'static [Stat], class: &'static str) -> impl IntoView {
    view! {
        <div class=class>
            {stats
                .iter()
                .map(|stat| view! {
                    <Card class="stat-card">
                        <Typography
                            variant=TypographyVariant::DisplayMedium
                            align=TypographyAlign::Center
                            target=crate::components::RenderTarget::P
                        >
                            {stat.value}
                        </Typography>
                        <Typography
                            variant=TypographyVariant::BodySmall
                            align=TypographyAlign::Center
                            color=TypographyColor::Secondary
                        >
                            {stat.label}
                        </Typography>
                    </Card>
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn IssueGrid(issues: &'static [&'static str], class: &'static str) -> impl IntoView {
    view! {
        <div class=class>
            {issues
                .iter()
                .map(|issue| view! {
                    <Card variant=CardVariant::Outlined class="issue-card">
                        <Typography>{*issue}</Typography>
                    </Card>
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn TestimonialGrid(testimonials: &'static [Testimonial], class: &'static str) -> impl IntoView {
    view! {
        <div class=class>
            {testimonials
                .iter()
                .map(|t| view! {
                    <Card variant=CardVariant::Filled padding=CardPadding::Large class="testimonial-card">
                        <Typography variant=TypographyVariant::BodyLarge align=TypographyAlign::Center>
                            {format!("\u{201C}{}\u{201D}", t.quote)}
                        </Typography>
                        <div class="testimonial-author">
                            <Typography variant=TypographyVariant::HeadingMedium align=TypographyAlign::Center>
                                {t.author}
                            </Typography>
                            <Typography
                                variant=TypographyVariant::BodySmall
                                align=TypographyAlign::Center
                                color=TypographyColor::Secondary
                            >
                                {t.role}
                            </Typography>
                        </div>
                    </Card>
                })
                .collect_view()}
        </div>
    }
}

/// Filled card with a left-aligned heading, used by the text-heavy pages.
#[component]
pub fn TextSection(title: &'static str, #[prop(optional)] class: &'static str, children: Children) -> impl IntoView {
    view! {
        <section class=class>
            <Card variant=CardVariant::Filled padding=CardPadding::Large>
                <Typography variant=TypographyVariant::HeadingLarge class="page-section__title">
                    {title}
                </Typography>
                {children()}
            </Card>
        </section>
    }
}

/// Bulleted list of secondary body text.
#[component]
pub fn BulletList(items: &'static [&'static str], #[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <ul class=format!("bullet-list {}", class).trim_end().to_string()>
            {items
                .iter()
                .map(|item| view! {
                    <li>
                        <Typography color=TypographyColor::Secondary>{*item}</Typography>
                    </li>
                })
                .collect_view()}
        </ul>
    }
}

/// One titled block of a legal document.
pub struct LegalSection {
    pub title: &'static str,
    pub body: &'static str,
    pub bullets: &'static [&'static str],
}

pub const LAST_UPDATED: &str = "Last Updated: December 2025";

/// Shared layout of the privacy policy and the terms of service.
#[component]
pub fn LegalDocument(
    title: &'static str,
    sections: &'static [LegalSection],
    contact_prompt: &'static str,
    closing_note: &'static str,
    class: &'static str,
) -> impl IntoView {
    let config = use_site_config();

    view! {
        <div class=class>
            <Hero title=title subtitle=LAST_UPDATED class="legal-page__header"/>
            <div class="container legal-page__container">
                {sections
                    .iter()
                    .map(|section| view! {
                        <TextSection title=section.title class="legal-page__section">
                            <Typography color=TypographyColor::Secondary class="legal-page__content">
                                {section.body}
                            </Typography>
                            {(!section.bullets.is_empty()).then(|| view! { <BulletList items=section.bullets/> })}
                        </TextSection>
                    })
                    .collect_view()}
                <TextSection title="Contact Us" class="legal-page__section">
                    <Typography color=TypographyColor::Secondary class="legal-page__content">
                        {contact_prompt}
                    </Typography>
                    <a href=config.mailto() class="legal-page__mail">
                        <Typography>{config.contact_email}</Typography>
                    </a>
                </TextSection>
                <Typography
                    variant=TypographyVariant::BodySmall
                    color=TypographyColor::Secondary
                    class="legal-page__last-updated"
                >
                    {closing_note}
                </Typography>
            </div>
        </div>
    }
}
