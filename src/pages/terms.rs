use crate::pages::sections::{LegalDocument, LegalSection};
use leptos::*;

const SECTIONS: &[LegalSection] = &[
    LegalSection {
        title: "Agreement to Terms",
        body: "By accessing or using Chronomind's website, applications, or services \
               (collectively, the \"Services\"), you agree to be bound by these Terms of Service. \
               If you do not agree to these terms, please do not use our Services.",
        bullets: &[],
    },
    LegalSection {
        title: "Description of Services",
        body: "Chronomind provides dementia care simulation and educational tools designed to \
               help caregivers learn and practice caregiving techniques. Our Services may include \
               web-based applications, mobile applications, and related content.",
        bullets: &[],
    },
    LegalSection {
        title: "Acceptable Use",
        body: "You agree not to use our Services to:",
        bullets: &[
            "Violate any applicable laws or regulations",
            "Infringe upon the rights of others",
            "Distribute malicious software or harmful content",
            "Attempt to gain unauthorized access to our systems",
            "Interfere with the proper functioning of our Services",
        ],
    },
    LegalSection {
        title: "Intellectual Property",
        body: "All content, features, and functionality of our Services are owned by Chronomind \
               or its licensors and are protected by copyright, trademark, and other intellectual \
               property laws. You may not reproduce, distribute, or create derivative works \
               without our express permission.",
        bullets: &[],
    },
    LegalSection {
        title: "Disclaimer of Warranties",
        body: "Our Services are provided \"as is\" and \"as available\" without warranties of any \
               kind, either express or implied. We do not guarantee that our Services will be \
               uninterrupted, error-free, or completely secure.",
        bullets: &[],
    },
    LegalSection {
        title: "Limitation of Liability",
        body: "To the fullest extent permitted by law, Chronomind shall not be liable for any \
               indirect, incidental, special, consequential, or punitive damages arising from \
               your use of our Services.",
        bullets: &[],
    },
    LegalSection {
        title: "Changes to Terms",
        body: "We may update these Terms of Service from time to time. We will notify you of any \
               material changes by posting the new terms on this page with an updated revision \
               date.",
        bullets: &[],
    },
];

#[component]
pub fn TermsPage() -> impl IntoView {
    view! {
        <LegalDocument
            title="Terms of Service"
            sections=SECTIONS
            contact_prompt="If you have any questions about these Terms of Service, please contact us at:"
            closing_note="These Terms of Service constitute the entire agreement between you and Chronomind regarding your use of our Services."
            class="terms-page"
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_are_titled_and_single_spaced() {
        assert_eq!(SECTIONS.len(), 7);
        for section in SECTIONS {
            assert!(!section.title.is_empty());
            assert!(!section.body.contains("  "), "double space in {}", section.title);
        }
        assert_eq!(SECTIONS.iter().filter(|s| !s.bullets.is_empty()).count(), 1);
    }
}
