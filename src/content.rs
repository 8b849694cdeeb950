//! Copy shared by more than one page.

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

pub const CURRENT_ISSUES: &[&str] = &[
    "Lack of training for current dementia caregivers",
    "Caregiver stress and burnout due to underpreparedness",
    "Overreliance on trial and error to solve issues",
    "Underfunding in dementia/aging research",
    "Society lack awareness on aging diseases",
    "No easy way to practice dementia care skills in a low risk environment",
    "Many people lack access to proper aging and dementia care",
    "Current practice or simulations are too expensive",
];

pub const GROWTH_STATS: &[Stat] = &[
    Stat {
        value: "29.1M \u{2192} 56.7M",
        label: "Global dementia care products market growth (2023-2033)",
    },
    Stat {
        value: "1 in 6",
        label: "People aged over 60 by 2030",
    },
    Stat {
        value: "426M",
        label: "People aged over 80 by 2050 (triple from 2020)",
    },
    Stat {
        value: "35.55B \u{2192} 64.79B",
        label: "Dementia Care App Market (2026-2035)",
    },
    Stat {
        value: "6.9%",
        label: "Annual growth rate (CAGR) for dementia care apps",
    },
    Stat {
        value: "Double",
        label: "Dementia cases by 2060",
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[Testimonial {
    quote: "Having lots of information is essential, I like how simple the app is. When most \
            families come in, they have lots of questions about basic daily care.",
    author: "Nurse Practitioner",
    role: "Sunset Senior Living",
}];

pub const MISSION: &str = "Chronomind seeks to end the deficit in dementia and aging education.";

pub const MISSION_DETAIL: &str = "By turning education into experience, we're not just teaching \
     caregiving, we're changing how caregivers learn, cope, and connect. Chronomind isn't just an \
     app, it's a training tool, empathy builder, and a support system.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_is_populated() {
        assert_eq!(CURRENT_ISSUES.len(), 8);
        assert_eq!(GROWTH_STATS.len(), 6);
        assert!(!TESTIMONIALS.is_empty());
        assert!(GROWTH_STATS.iter().all(|s| !s.value.is_empty() && !s.label.is_empty()));
    }

    #[test]
    fn test_multiline_copy_has_single_spaces() {
        for t in TESTIMONIALS {
            assert!(!t.quote.contains("  "), "double space in {:?}", t.quote);
        }
        assert!(!MISSION_DETAIL.contains("  "));
    }
}
