use crate::pages::sections::{LegalDocument, LegalSection};
use leptos::*;

const SECTIONS: &[LegalSection] = &[
    LegalSection {
        title: "Introduction",
        body: "This Privacy Policy describes how Chronomind (\"we\", \"us\", or \"our\") collects, \
               uses, and shares information about you when you use our website, applications, and \
               services (collectively, the \"Services\"). We are committed to protecting your \
               privacy and handling your personal information with care.",
        bullets: &[],
    },
    LegalSection {
        title: "Information We Collect",
        body: "We may collect information that you provide directly to us, such as when you \
               contact us or participate in surveys. This may include your name, email address, \
               and any other information you choose to provide.",
        bullets: &[],
    },
    LegalSection {
        title: "How We Use Your Information",
        body: "We use the information we collect to:",
        bullets: &[
            "Provide, maintain, and improve our Services",
            "Respond to your comments and questions",
            "Send you technical notices and updates",
            "Monitor and analyze trends and usage",
            "Protect the security and integrity of our Services",
        ],
    },
    LegalSection {
        title: "Information Sharing",
        body: "We do not sell your personal information. We may share your information in the \
               following circumstances:",
        bullets: &[
            "With service providers who assist in operating our Services",
            "If required by law or to protect rights and safety",
            "In connection with a business transfer, such as a merger or acquisition",
        ],
    },
    LegalSection {
        title: "Your Choices",
        body: "You may opt out of receiving promotional emails from us by following the \
               instructions in those emails. Even if you opt out, we may still send you \
               non-promotional communications, such as those about our ongoing business relations.",
        bullets: &[],
    },
];

#[component]
pub fn PrivacyPage() -> impl IntoView {
    view! {
        <LegalDocument
            title="Privacy Policy"
            sections=SECTIONS
            contact_prompt="If you have any questions about this Privacy Policy, please contact us at:"
            closing_note="This Privacy Policy may be updated periodically. We will post any changes on this page with an updated revision date."
            class="privacy-page"
        />
    }
}
