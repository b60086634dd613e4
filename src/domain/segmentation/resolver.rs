//! Path assignment.

use serde::{Deserialize, Serialize};

use super::rules::{DEFAULT_PATH, PATH_RULES};
use super::{Path, QuizAnswers};

/// Which rule and clause decided an assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleMatch {
    /// Index into [`PATH_RULES`].
    pub rule: usize,
    /// Index into that rule's clauses.
    pub clause: usize,
}

/// A resolved path plus the rule that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathAssignment {
    pub path: Path,
    /// `None` when the default applied.
    pub matched: Option<RuleMatch>,
}

impl PathAssignment {
    pub fn is_default(&self) -> bool {
        self.matched.is_none()
    }
}

/// Resolves quiz answers to exactly one path. Never fails.
pub fn assign_path(answers: &QuizAnswers) -> Path {
    explain_assignment(answers).path
}

/// Like [`assign_path`], also reporting the deciding rule.
pub fn explain_assignment(answers: &QuizAnswers) -> PathAssignment {
    for (rule_index, rule) in PATH_RULES.iter().enumerate() {
        if let Some(clause) = rule.matching_clause(answers) {
            tracing::debug!(path = %rule.path, rule = rule_index, clause, "path rule matched");
            return PathAssignment {
                path: rule.path,
                matched: Some(RuleMatch {
                    rule: rule_index,
                    clause,
                }),
            };
        }
    }

    tracing::debug!(path = %DEFAULT_PATH, answered = answers.len(), "no path rule matched");
    PathAssignment {
        path: DEFAULT_PATH,
        matched: None,
    }
}

#[cfg(test)]
mod tests {
    use super::super::questions::*;
    use super::*;
    use crate::domain::segmentation::Answer;
    use proptest::prelude::*;

    // Worked Examples

    #[test]
    fn advanced_with_twenty_hours_is_scaler() {
        let answers = QuizAnswers::new()
            .with(EXPERIENCE_LEVEL, ADVANCED)
            .with(TIME_AVAILABLE, HOURS_20_PLUS);
        assert_eq!(assign_path(&answers), Path::Scaler);
    }

    #[test]
    fn very_interested_in_services_is_freelancer() {
        let answers = QuizAnswers::new().with(INTEREST_SERVICES, VERY_INTERESTED);
        assert_eq!(assign_path(&answers), Path::Freelancer);
    }

    #[test]
    fn interested_in_content_is_creator() {
        let answers = QuizAnswers::new().with(INTEREST_CONTENT, INTERESTED);
        assert_eq!(assign_path(&answers), Path::Creator);
    }

    #[test]
    fn no_answers_is_starter() {
        let assignment = explain_assignment(&QuizAnswers::new());
        assert_eq!(assignment.path, Path::Starter);
        assert!(assignment.is_default());
    }

    // Scaler Disjuncts

    #[test]
    fn main_income_with_advanced_is_scaler() {
        let answers = QuizAnswers::new()
            .with(INCOME_TYPE, MAIN_INCOME)
            .with(EXPERIENCE_LEVEL, ADVANCED);
        let assignment = explain_assignment(&answers);
        assert_eq!(assignment.path, Path::Scaler);
        assert_eq!(assignment.matched, Some(RuleMatch { rule: 0, clause: 1 }));
    }

    #[test]
    fn main_income_with_twenty_hours_is_scaler() {
        let answers = QuizAnswers::new()
            .with(INCOME_TYPE, MAIN_INCOME)
            .with(TIME_AVAILABLE, HOURS_20_PLUS);
        assert_eq!(assign_path(&answers), Path::Scaler);
    }

    #[test]
    fn a_single_scaler_signal_is_not_enough() {
        for answers in [
            QuizAnswers::new().with(EXPERIENCE_LEVEL, ADVANCED),
            QuizAnswers::new().with(TIME_AVAILABLE, HOURS_20_PLUS),
            QuizAnswers::new().with(INCOME_TYPE, MAIN_INCOME),
        ] {
            assert_eq!(assign_path(&answers), Path::Starter);
        }
    }

    // Priority / Tie-breaks

    #[test]
    fn scaler_beats_freelancer() {
        let answers = QuizAnswers::new()
            .with(EXPERIENCE_LEVEL, ADVANCED)
            .with(TIME_AVAILABLE, HOURS_20_PLUS)
            .with(INTEREST_SERVICES, VERY_INTERESTED);
        assert_eq!(assign_path(&answers), Path::Scaler);
    }

    #[test]
    fn freelancer_beats_creator() {
        let answers = QuizAnswers::new()
            .with(INTEREST_FREELANCE, INTERESTED)
            .with(INTEREST_PRODUCTS, VERY_INTERESTED);
        let assignment = explain_assignment(&answers);
        assert_eq!(assignment.path, Path::Freelancer);
        assert_eq!(assignment.matched, Some(RuleMatch { rule: 1, clause: 1 }));
    }

    // Degenerate Input

    #[test]
    fn unexpected_tokens_fall_through() {
        let answers = QuizAnswers::new()
            .with(EXPERIENCE_LEVEL, "AVANZADA")
            .with(TIME_AVAILABLE, "20h")
            .with(INTEREST_SERVICES, "poco-interesado");
        assert_eq!(assign_path(&answers), Path::Starter);
    }

    #[test]
    fn empty_multi_select_falls_through() {
        let answers = QuizAnswers::new().with(INTEREST_CONTENT, Answer::Multi(vec![]));
        assert_eq!(assign_path(&answers), Path::Starter);
    }

    #[test]
    fn multi_select_containing_accepted_token_matches() {
        let answers =
            QuizAnswers::new().with(INTEREST_PRODUCTS, vec!["nada-interesado", INTERESTED]);
        assert_eq!(assign_path(&answers), Path::Creator);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let answers = QuizAnswers::new()
            .with("favourite-colour", "verde")
            .with(INTEREST_CONTENT, INTERESTED);
        assert_eq!(assign_path(&answers), Path::Creator);
    }

    // Properties

    fn token() -> impl Strategy<Value = String> {
        prop_oneof![
            Just(ADVANCED.to_string()),
            Just(HOURS_20_PLUS.to_string()),
            Just(MAIN_INCOME.to_string()),
            Just(VERY_INTERESTED.to_string()),
            Just(INTERESTED.to_string()),
            "[a-z0-9+-]{0,12}",
        ]
    }

    fn answer() -> impl Strategy<Value = Answer> {
        prop_oneof![
            token().prop_map(Answer::Single),
            prop::collection::vec(token(), 0..4).prop_map(Answer::Multi),
        ]
    }

    fn key() -> impl Strategy<Value = String> {
        prop_oneof![
            prop::sample::select(DECISIVE_QUESTIONS).prop_map(str::to_string),
            "[a-z-]{1,16}",
        ]
    }

    fn answers() -> impl Strategy<Value = QuizAnswers> {
        prop::collection::vec((key(), answer()), 0..10)
            .prop_map(|pairs| pairs.into_iter().collect::<QuizAnswers>())
    }

    proptest! {
        #[test]
        fn assignment_is_deterministic(answers in answers()) {
            prop_assert_eq!(explain_assignment(&answers), explain_assignment(&answers));
        }

        #[test]
        fn default_iff_no_rule_matches(answers in answers()) {
            let assignment = explain_assignment(&answers);
            let any_rule = PATH_RULES.iter().any(|r| r.matching_clause(&answers).is_some());
            prop_assert_eq!(assignment.is_default(), !any_rule);
            prop_assert!(Path::all().contains(&assignment.path));
        }

        #[test]
        fn scaler_signals_always_win(mut answers in answers()) {
            answers.insert(EXPERIENCE_LEVEL, ADVANCED);
            answers.insert(TIME_AVAILABLE, HOURS_20_PLUS);
            prop_assert_eq!(assign_path(&answers), Path::Scaler);
        }
    }
}
