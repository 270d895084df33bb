// crmsynth-core/src/domain/generation/text.rs
//
// Canned comment text for feedback records. Purely cosmetic: the score is
// sampled first and the text is picked to agree with its label.

use crate::domain::model::SentimentLabel;
use crate::domain::random::RandomSource;

const POSITIVE_WORDS: [&str; 10] = [
    "excellent",
    "reliable",
    "fantastic",
    "outstanding",
    "impressive",
    "helpful",
    "efficient",
    "professional",
    "smooth",
    "great",
];

// Several of these double as pain-point keywords picked up by the analyzer.
const NEGATIVE_WORDS: [&str; 11] = [
    "terrible",
    "awful",
    "disappointing",
    "frustrating",
    "slow",
    "unhelpful",
    "confusing",
    "expensive",
    "difficult",
    "broken",
    "poor",
];

const NEUTRAL_WORDS: [&str; 8] = [
    "okay",
    "average",
    "standard",
    "acceptable",
    "decent",
    "adequate",
    "typical",
    "fine",
];

const PAIN_POINTS: [&str; 12] = [
    "slow response times",
    "complicated onboarding",
    "expensive renewals",
    "poor support coverage",
    "technical issues",
    "billing problems",
    "missing features",
    "integration difficulties",
    "training gaps",
    "system downtime",
    "data migration issues",
    "security concerns",
];

const PRODUCTS: [&str; 4] = ["platform", "software", "solution", "system"];
const AREAS: [&str; 5] = ["support", "service", "implementation", "training", "onboarding"];

const POSITIVE_TEMPLATES: [&str; 4] = [
    "The {product} has been {word} for our team.",
    "Support was {word} and the {area} went smoothly.",
    "A {word} experience with the {product} so far.",
    "Our {area} exceeded expectations, {word} work all round.",
];

const NEGATIVE_TEMPLATES: [&str; 4] = [
    "The {product} has been {word} lately because of {pain}.",
    "Still dealing with {pain}, the {area} feels {word}.",
    "Not happy: {word} {area} and ongoing {pain}.",
    "We keep running into {pain} and the {product} is {word}.",
];

const NEUTRAL_TEMPLATES: [&str; 3] = [
    "The {product} is {word} and covers the basics.",
    "Our {area} experience was {word}, nothing stood out.",
    "Service has been {word}, some areas could improve.",
];

/// Builds a comment that reads consistently with `label`.
pub fn compose(label: SentimentLabel, rng: &mut RandomSource) -> String {
    let (templates, words): (&[&str], &[&str]) = match label {
        SentimentLabel::Positive => (&POSITIVE_TEMPLATES, &POSITIVE_WORDS),
        SentimentLabel::Negative => (&NEGATIVE_TEMPLATES, &NEGATIVE_WORDS),
        SentimentLabel::Neutral => (&NEUTRAL_TEMPLATES, &NEUTRAL_WORDS),
    };

    let template = rng.choose(templates).unwrap_or("{word}");
    template
        .replace("{word}", rng.choose(words).unwrap_or_default())
        .replace("{product}", rng.choose(&PRODUCTS).unwrap_or_default())
        .replace("{area}", rng.choose(&AREAS).unwrap_or_default())
        .replace("{pain}", rng.choose(&PAIN_POINTS).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_fills_every_placeholder() {
        let mut rng = RandomSource::new(4);
        for label in [
            SentimentLabel::Positive,
            SentimentLabel::Neutral,
            SentimentLabel::Negative,
        ] {
            for _ in 0..50 {
                let text = compose(label, &mut rng);
                assert!(!text.contains('{'), "unfilled template: {}", text);
                assert!(!text.is_empty());
            }
        }
    }

    #[test]
    fn test_negative_text_uses_negative_vocabulary() {
        let mut rng = RandomSource::new(4);
        let text = compose(SentimentLabel::Negative, &mut rng);
        assert!(NEGATIVE_WORDS.iter().any(|w| text.contains(w)));
        assert!(PAIN_POINTS.iter().any(|p| text.contains(p)));
    }
}
