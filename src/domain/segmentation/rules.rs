//! The ordered path rule table.
//!
//! Rules are evaluated top to bottom and the first match wins, so a user who
//! qualifies for both SCALER and FREELANCER is a SCALER. Do not reorder.

use serde::Serialize;

use super::questions::{
    ADVANCED, EXPERIENCE_LEVEL, HOURS_20_PLUS, INCOME_TYPE, INTERESTED, INTEREST_CONTENT,
    INTEREST_FREELANCE, INTEREST_PRODUCTS, INTEREST_SERVICES, MAIN_INCOME, TIME_AVAILABLE,
    VERY_INTERESTED,
};
use super::{Path, QuizAnswers};

/// `question` must be answered with one of `accepts`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Condition {
    pub question: &'static str,
    pub accepts: &'static [&'static str],
}

impl Condition {
    /// Absent answers never satisfy a condition.
    pub fn is_met(&self, answers: &QuizAnswers) -> bool {
        answers
            .get(self.question)
            .map(|answer| answer.is_any_of(self.accepts))
            .unwrap_or(false)
    }
}

/// All conditions must hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Clause {
    pub conditions: &'static [Condition],
}

impl Clause {
    pub fn is_met(&self, answers: &QuizAnswers) -> bool {
        !self.conditions.is_empty() && self.conditions.iter().all(|c| c.is_met(answers))
    }
}

/// Any clause is sufficient to assign `path`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PathRule {
    pub path: Path,
    pub clauses: &'static [Clause],
}

impl PathRule {
    /// Index of the first satisfied clause.
    pub fn matching_clause(&self, answers: &QuizAnswers) -> Option<usize> {
        self.clauses.iter().position(|clause| clause.is_met(answers))
    }
}

/// Assigned when no rule matches.
pub const DEFAULT_PATH: Path = Path::Starter;

const INTEREST: &[&str] = &[VERY_INTERESTED, INTERESTED];

const fn is(question: &'static str, accepts: &'static [&'static str]) -> Condition {
    Condition { question, accepts }
}

/// Path rules in priority order.
pub const PATH_RULES: &[PathRule] = &[
    PathRule {
        path: Path::Scaler,
        clauses: &[
            Clause {
                conditions: &[is(EXPERIENCE_LEVEL, &[ADVANCED]), is(TIME_AVAILABLE, &[HOURS_20_PLUS])],
            },
            Clause {
                conditions: &[is(INCOME_TYPE, &[MAIN_INCOME]), is(EXPERIENCE_LEVEL, &[ADVANCED])],
            },
            Clause {
                conditions: &[is(INCOME_TYPE, &[MAIN_INCOME]), is(TIME_AVAILABLE, &[HOURS_20_PLUS])],
            },
        ],
    },
    PathRule {
        path: Path::Freelancer,
        clauses: &[
            Clause {
                conditions: &[is(INTEREST_SERVICES, INTEREST)],
            },
            Clause {
                conditions: &[is(INTEREST_FREELANCE, INTEREST)],
            },
        ],
    },
    PathRule {
        path: Path::Creator,
        clauses: &[
            Clause {
                conditions: &[is(INTEREST_CONTENT, INTEREST)],
            },
            Clause {
                conditions: &[is(INTEREST_PRODUCTS, INTEREST)],
            },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_order_is_scaler_freelancer_creator() {
        let order: Vec<_> = PATH_RULES.iter().map(|r| r.path).collect();
        assert_eq!(order, vec![Path::Scaler, Path::Freelancer, Path::Creator]);
    }

    #[test]
    fn default_path_has_no_rule() {
        assert!(PATH_RULES.iter().all(|r| r.path != DEFAULT_PATH));
    }

    #[test]
    fn scaler_clauses_need_both_conditions() {
        let scaler = &PATH_RULES[0];
        let only_advanced = QuizAnswers::new().with(EXPERIENCE_LEVEL, ADVANCED);
        assert_eq!(scaler.matching_clause(&only_advanced), None);

        let income_and_time = QuizAnswers::new()
            .with(INCOME_TYPE, MAIN_INCOME)
            .with(TIME_AVAILABLE, HOURS_20_PLUS);
        assert_eq!(scaler.matching_clause(&income_and_time), Some(2));
    }

    #[test]
    fn empty_clause_never_matches() {
        let clause = Clause { conditions: &[] };
        assert!(!clause.is_met(&QuizAnswers::new()));
    }

    #[test]
    fn rules_only_reference_decisive_questions() {
        use super::super::questions::DECISIVE_QUESTIONS;
        for rule in PATH_RULES {
            for clause in rule.clauses {
                for condition in clause.conditions {
                    assert!(DECISIVE_QUESTIONS.contains(&condition.question));
                }
            }
        }
    }
}
