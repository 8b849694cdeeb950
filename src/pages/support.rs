use crate::components::{ButtonSize, ButtonVariant, Card, LinkButton, CardPadding, CardVariant, Typography, TypographyAlign, TypographyColor, TypographyVariant};
use crate::config::use_site_config;
use crate::pages::sections::{Hero, TextSection};
use crate::routes::SiteRoute;
use leptos::*;

struct Faq {
    question: &'static str,
    answer: &'static str,
}

/// Answers that point at the contact inbox end with the address appended at render time.
const FAQS: &[Faq] = &[
    Faq {
        question: "How do I report a bug or technical issue?",
        answer: "Please report bugs or technical issues by contacting us via email at",
    },
    Faq {
        question: "Where can I find documentation for using Chronomind?",
        answer: "We are currently developing comprehensive documentation. In the meantime, you can \
                 watch our YouTube tutorials or check the GitHub repository for website setup \
                 instructions.",
    },
    Faq {
        question: "Is Chronomind free to use?",
        answer: "Yes, Chronomind is currently free to use. We believe dementia care education \
                 should be accessible to everyone.",
    },
    Faq {
        question: "Can I contribute to the project?",
        answer: "Yes! We welcome contributions and feedback. Please contact us via email at",
    },
    Faq {
        question: "How often is Chronomind updated?",
        answer: "We release updates regularly as we add new features and improvements. Follow our \
                 YouTube channel for announcements about the application, and our GitHub \
                 repository for website updates.",
    },
];

fn faq_answer(answer: &str, email: &str) -> String {
    if answer.ends_with(" at") {
        format!("{answer} {email}.")
    } else {
        answer.to_string()
    }
}

#[component]
pub fn SupportPage() -> impl IntoView {
    let config = use_site_config();
    let youtube_url = config.youtube_url.clone();
    let github_url = config.github_url.clone();
    let mailto = config.mailto();
    let email = config.contact_email.clone();

    view! {
        <div class="support-page">
            <Hero title="Support" subtitle="Help and resources for using Chronomind" class="support-page__section"/>

            <div class="container support-page__container">
                <TextSection title="Resources & Documentation" class="support-page__section">
                    <Typography color=TypographyColor::Secondary>
                        "Find tutorials, documentation, and community resources to help you get the most out of Chronomind."
                    </Typography>
                    <div class="support-page__resource-grid">
                        <Card class="support-page__resource-card">
                            <Typography variant=TypographyVariant::HeadingMedium class="support-page__resource-title">
                                "Video Tutorials"
                            </Typography>
                            <Typography variant=TypographyVariant::BodySmall color=TypographyColor::Secondary>
                                "Watch step-by-step tutorials and demonstrations on our YouTube channel."
                            </Typography>
                            <LinkButton
                                href=config.youtube_url
                                external=true
                                variant=ButtonVariant::Secondary
                                size=ButtonSize::Small
                                class="support-page__link"
                            >
                                "Visit YouTube"
                            </LinkButton>
                        </Card>
                        <Card class="support-page__resource-card">
                            <Typography variant=TypographyVariant::HeadingMedium class="support-page__resource-title">
                                "GitHub Repository"
                            </Typography>
                            <Typography variant=TypographyVariant::BodySmall color=TypographyColor::Secondary>
                                "Access the website source code and report issues. For contributions, please contact us via email."
                            </Typography>
                            <LinkButton
                                href=config.github_url
                                external=true
                                variant=ButtonVariant::Secondary
                                size=ButtonSize::Small
                                class="support-page__link"
                            >
                                "Visit GitHub"
                            </LinkButton>
                        </Card>
                        <Card class="support-page__resource-card">
                            <Typography variant=TypographyVariant::HeadingMedium class="support-page__resource-title">
                                "Contact Support"
                            </Typography>
                            <Typography variant=TypographyVariant::BodySmall color=TypographyColor::Secondary>
                                "Get direct help from our team for technical issues or questions."
                            </Typography>
                            <LinkButton
                                href=SiteRoute::Contact.path()
                                variant=ButtonVariant::Secondary
                                size=ButtonSize::Small
                                class="support-page__link"
                            >
                                "Contact Us"
                            </LinkButton>
                        </Card>
                    </div>
                </TextSection>

                <TextSection title="Frequently Asked Questions" class="support-page__section">
                    <div class="support-page__faq-list">
                        {FAQS
                            .iter()
                            .map(|faq| {
                                let answer = faq_answer(faq.answer, &email);
                                view! {
                                    <div class="support-page__faq-item">
                                        <Typography variant=TypographyVariant::HeadingMedium class="support-page__faq-question">
                                            {faq.question}
                                        </Typography>
                                        <Typography color=TypographyColor::Secondary>{answer}</Typography>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </TextSection>

                <TextSection title="Join Our Community" class="support-page__section">
                    <Typography color=TypographyColor::Secondary>
                        "Connect with other caregivers, developers, and educators who are passionate about improving dementia care."
                    </Typography>
                    <div class="support-page__community-actions">
                        <LinkButton href=youtube_url external=true class="support-page__link">
                            "Subscribe on YouTube"
                        </LinkButton>
                        <LinkButton
                            href=github_url
                            external=true
                            variant=ButtonVariant::Secondary
                            class="support-page__link"
                        >
                            "Star on GitHub"
                        </LinkButton>
                    </div>
                </TextSection>

                <section class="support-page__section">
                    <Card variant=CardVariant::Elevated padding=CardPadding::Medium>
                        <Typography color=TypographyColor::Secondary align=TypographyAlign::Center>
                            "Can't find what you're looking for? Reach out to us directly at "
                            <a href=mailto class="support-page__mail">{config.contact_email}</a>
                        </Typography>
                    </Card>
                </section>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_faq_answer_appends_email_where_needed() {
        assert_eq!(
            faq_answer(FAQS[0].answer, "team@example.com"),
            "Please report bugs or technical issues by contacting us via email at team@example.com."
        );
        assert_eq!(faq_answer(FAQS[2].answer, "team@example.com"), FAQS[2].answer);
    }

    #[test]
    fn test_every_faq_answer_is_a_full_sentence() {
        for faq in FAQS {
            let answer = faq_answer(faq.answer, "team@example.com");
            assert!(answer.ends_with('.'), "unterminated answer for {:?}", faq.question);
            assert!(!answer.ends_with(" at"));
        }
    }

    #[test]
    fn test_faq_list_shape() {
        assert_eq!(FAQS.len(), 5);
        assert!(FAQS.iter().all(|f| f.question.ends_with('?')));
        assert!(FAQS.iter().all(|f| !f.answer.contains("  ")));
    }
}
