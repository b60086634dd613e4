//! Quiz answers as submitted by the onboarding quiz.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single answer: one token, or the ordered tokens of a multi-select.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    Single(String),
    Multi(Vec<String>),
}

impl Answer {
    /// True if the answer (or any selected option) is one of `accepted`.
    ///
    /// An empty multi-select never matches.
    pub fn is_any_of(&self, accepted: &[&str]) -> bool {
        match self {
            Answer::Single(token) => accepted.contains(&token.as_str()),
            Answer::Multi(tokens) => tokens.iter().any(|t| accepted.contains(&t.as_str())),
        }
    }
}

impl From<&str> for Answer {
    fn from(token: &str) -> Self {
        Answer::Single(token.to_string())
    }
}

impl From<Vec<&str>> for Answer {
    fn from(tokens: Vec<&str>) -> Self {
        Answer::Multi(tokens.into_iter().map(str::to_string).collect())
    }
}

/// Answers keyed by question key.
///
/// Keys are not predeclared; whatever the quiz sent is kept and anything the
/// rules do not reference is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuizAnswers(BTreeMap<String, Answer>);

impl QuizAnswers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, question: impl Into<String>, answer: impl Into<Answer>) -> Self {
        self.0.insert(question.into(), answer.into());
        self
    }

    pub fn insert(&mut self, question: impl Into<String>, answer: impl Into<Answer>) {
        self.0.insert(question.into(), answer.into());
    }

    pub fn get(&self, question: &str) -> Option<&Answer> {
        self.0.get(question)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Answer)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>> FromIterator<(K, Answer)> for QuizAnswers {
    fn from_iter<I: IntoIterator<Item = (K, Answer)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_answer_matches_exact_token() {
        let answer = Answer::from("interesado");
        assert!(answer.is_any_of(&["muy-interesado", "interesado"]));
        assert!(!answer.is_any_of(&["muy-interesado"]));
    }

    #[test]
    fn multi_answer_matches_any_selected_token() {
        let answer = Answer::from(vec!["poco", "interesado"]);
        assert!(answer.is_any_of(&["interesado"]));
    }

    #[test]
    fn empty_multi_select_never_matches() {
        let answer = Answer::Multi(vec![]);
        assert!(!answer.is_any_of(&["interesado"]));
    }

    #[test]
    fn deserializes_strings_and_arrays() {
        let json = r#"{"experience-level":"avanzada","main-goal":["ventas","audiencia"]}"#;
        let answers: QuizAnswers = serde_json::from_str(json).unwrap();

        assert_eq!(answers.get("experience-level"), Some(&Answer::from("avanzada")));
        assert_eq!(
            answers.get("main-goal"),
            Some(&Answer::from(vec!["ventas", "audiencia"]))
        );
    }

    #[test]
    fn missing_key_is_none() {
        assert!(QuizAnswers::new().get("time-available").is_none());
    }
}
