//! Static dashboard FAQ and exact matcher

/// A fixed question/answer pair shipped with the dashboard.
#[derive(Debug, Clone, Copy)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

/// The dashboard FAQ set. Fixed at compile time, evaluated in this order.
pub const FAQS: &[FaqEntry] = &[
    FaqEntry {
        question: "How do I change settings?",
        answer: "To change settings, go to the Settings section on the dashboard and select \
                 your desired profile. Click 'Apply Profile' to save your changes.",
    },
    FaqEntry {
        question: "What's the current air quality?",
        answer: "You can find the current air quality information in the Air Quality Overview \
                 section of the dashboard. It displays PM2.5 levels, humidity, temperature, \
                 and overall status.",
    },
    FaqEntry {
        question: "How often should I schedule maintenance?",
        answer: "It's recommended to schedule maintenance every 3-6 months, depending on usage. \
                 You can use the Maintenance section of the dashboard to schedule your next \
                 maintenance.",
    },
    FaqEntry {
        question: "What do I do in case of an emergency?",
        answer: "In case of an emergency, check the Emergency Alerts section for any active \
                 alerts. You can also find nearby hospitals and emergency contact information \
                 in the Emergency Contacts section.",
    },
    FaqEntry {
        question: "What do the heart rate and SpO2 readings mean?",
        answer: "The heart rate shows your current pulse in beats per minute (BPM). SpO2 is \
                 your blood oxygen saturation level, measured as a percentage. Normal SpO2 \
                 levels are usually above 95%.",
    },
];

/// First entry whose question appears as a substring of the lower-cased
/// input, returning its answer verbatim.
///
/// No ranking, no fuzzy matching — first-in-order containment.
pub fn find_match(input: &str) -> Option<&'static str> {
    let lowered = input.to_lowercase();
    FAQS.iter()
        .find(|faq| lowered.contains(&faq.question.to_lowercase()))
        .map(|faq| faq.answer)
}
