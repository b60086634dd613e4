//! Quiz question catalog.
//!
//! Keys and answer tokens are the exact strings the quiz front end submits.

use serde::Serialize;

pub const EXPERIENCE_LEVEL: &str = "experience-level";
pub const TIME_AVAILABLE: &str = "time-available";
pub const INCOME_TYPE: &str = "income-type";
pub const INTEREST_SERVICES: &str = "interest-services";
pub const INTEREST_FREELANCE: &str = "interest-freelance";
pub const INTEREST_CONTENT: &str = "interest-content";
pub const INTEREST_PRODUCTS: &str = "interest-products";
pub const MAIN_GOAL: &str = "main-goal";
pub const BIGGEST_OBSTACLE: &str = "biggest-obstacle";
pub const BUDGET: &str = "budget";
pub const REFERRAL_SOURCE: &str = "referral-source";

pub const ADVANCED: &str = "avanzada";
pub const HOURS_20_PLUS: &str = "20h+";
pub const MAIN_INCOME: &str = "ingreso-principal";
pub const VERY_INTERESTED: &str = "muy-interesado";
pub const INTERESTED: &str = "interesado";

/// Questions whose answers feed a path rule.
pub const DECISIVE_QUESTIONS: &[&str] = &[
    EXPERIENCE_LEVEL,
    TIME_AVAILABLE,
    INCOME_TYPE,
    INTEREST_SERVICES,
    INTEREST_FREELANCE,
    INTEREST_CONTENT,
    INTEREST_PRODUCTS,
];

/// Questions that only change offer framing.
pub const ADJUSTING_QUESTIONS: &[&str] = &[MAIN_GOAL, BIGGEST_OBSTACLE, BUDGET];

/// How a question participates in segmentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionRole {
    Decisive,
    Adjusting,
    /// Collected but unused by the engine.
    Informational,
}

impl QuestionRole {
    /// Role from the static membership lists; anything unlisted is informational.
    pub fn of(key: &str) -> Self {
        if DECISIVE_QUESTIONS.contains(&key) {
            QuestionRole::Decisive
        } else if ADJUSTING_QUESTIONS.contains(&key) {
            QuestionRole::Adjusting
        } else {
            QuestionRole::Informational
        }
    }
}

/// Display metadata for one question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuestionMeta {
    pub key: &'static str,
    pub prompt: &'static str,
    pub options: &'static [&'static str],
}

impl QuestionMeta {
    pub fn role(&self) -> QuestionRole {
        QuestionRole::of(self.key)
    }
}

const INTEREST_SCALE: &[&str] = &[VERY_INTERESTED, INTERESTED, "poco-interesado", "nada-interesado"];

/// The quiz, in the order it is asked.
pub const QUESTIONS: &[QuestionMeta] = &[
    QuestionMeta {
        key: EXPERIENCE_LEVEL,
        prompt: "How much experience do you have selling online?",
        options: &["ninguna", "basica", "intermedia", ADVANCED],
    },
    QuestionMeta {
        key: TIME_AVAILABLE,
        prompt: "How many hours a week can you dedicate?",
        options: &["<5h", "5-10h", "10-20h", HOURS_20_PLUS],
    },
    QuestionMeta {
        key: INCOME_TYPE,
        prompt: "What role should this income play?",
        options: &["extra", "complementario", MAIN_INCOME],
    },
    QuestionMeta {
        key: INTEREST_SERVICES,
        prompt: "How interested are you in selling services?",
        options: INTEREST_SCALE,
    },
    QuestionMeta {
        key: INTEREST_FREELANCE,
        prompt: "How interested are you in freelancing?",
        options: INTEREST_SCALE,
    },
    QuestionMeta {
        key: INTEREST_CONTENT,
        prompt: "How interested are you in creating content?",
        options: INTEREST_SCALE,
    },
    QuestionMeta {
        key: INTEREST_PRODUCTS,
        prompt: "How interested are you in selling digital products?",
        options: INTEREST_SCALE,
    },
    QuestionMeta {
        key: MAIN_GOAL,
        prompt: "What is your main goal for the next 90 days?",
        options: &["primeros-ingresos", "audiencia", "clientes", "escalar"],
    },
    QuestionMeta {
        key: BIGGEST_OBSTACLE,
        prompt: "What is holding you back the most?",
        options: &["tiempo", "conocimiento", "confianza", "dinero"],
    },
    QuestionMeta {
        key: BUDGET,
        prompt: "How much can you invest in your training?",
        options: &["<50", "50-200", "200-500", "500+"],
    },
    QuestionMeta {
        key: REFERRAL_SOURCE,
        prompt: "How did you hear about us?",
        options: &["youtube", "instagram", "tiktok", "recomendacion", "otro"],
    },
];

/// Metadata for a key, if it is part of the shipped quiz.
pub fn question(key: &str) -> Option<&'static QuestionMeta> {
    QUESTIONS.iter().find(|q| q.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_come_from_static_lists() {
        assert_eq!(QuestionRole::of(EXPERIENCE_LEVEL), QuestionRole::Decisive);
        assert_eq!(QuestionRole::of(BUDGET), QuestionRole::Adjusting);
        assert_eq!(QuestionRole::of(REFERRAL_SOURCE), QuestionRole::Informational);
        assert_eq!(QuestionRole::of("not-a-question"), QuestionRole::Informational);
    }

    #[test]
    fn every_listed_question_is_in_the_catalog() {
        for key in DECISIVE_QUESTIONS.iter().chain(ADJUSTING_QUESTIONS) {
            assert!(question(key).is_some(), "{} missing from catalog", key);
        }
    }

    #[test]
    fn catalog_keys_are_unique() {
        for (i, q) in QUESTIONS.iter().enumerate() {
            assert!(QUESTIONS[i + 1..].iter().all(|other| other.key != q.key));
        }
    }
}
