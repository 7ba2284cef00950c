//! Quiz Answers
//!
//! Answers are picked per question index and sent keyed by question text.
//! Mentors generate quizzes for a whole course or a single chapter.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{Quiz, QuizResult};

/// Delay before returning to the course after a submission
pub const RETURN_DELAY_MS: u32 = 2_000;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct QuizAnswers {
    picked: Vec<Option<String>>,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct QuizSubmission {
    pub answers: BTreeMap<String, String>,
}

impl QuizAnswers {
    pub fn for_quiz(quiz: &Quiz) -> Self {
        Self {
            picked: vec![None; quiz.questions.len()],
        }
    }

    pub fn pick(&mut self, index: usize, option: &str) {
        if let Some(slot) = self.picked.get_mut(index) {
            *slot = Some(option.to_string());
        }
    }

    pub fn picked(&self, index: usize) -> Option<&str> {
        self.picked.get(index).and_then(|answer| answer.as_deref())
    }

    pub fn answered(&self) -> usize {
        self.picked.iter().filter(|answer| answer.is_some()).count()
    }

    pub fn is_complete(&self) -> bool {
        self.picked.iter().all(Option::is_some)
    }

    /// `None` until every question has an answer.
    pub fn submission(&self, quiz: &Quiz) -> Option<QuizSubmission> {
        if !self.is_complete() || self.picked.len() != quiz.questions.len() {
            return None;
        }
        let answers = quiz
            .questions
            .iter()
            .zip(&self.picked)
            .filter_map(|(question, answer)| Some((question.question.clone(), answer.clone()?)))
            .collect();
        Some(QuizSubmission { answers })
    }
}

/// Notification text for a graded attempt
pub fn result_message(result: &QuizResult) -> String {
    if result.passed {
        format!("Quiz passed with {}%!", result.score_percentage)
    } else {
        format!(
            "Quiz failed with {}%. The passing score is 80%.",
            result.score_percentage
        )
    }
}

// ========================
// Generation
// ========================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizScope {
    Chapter,
    Final,
}

impl QuizScope {
    pub const OPTIONS: [(&'static str, &'static str); 2] =
        [("chapter", "Chapter-based Quiz"), ("final", "Final Course Quiz")];

    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "chapter" => Some(Self::Chapter),
            "final" => Some(Self::Final),
            _ => None,
        }
    }

    pub fn key(scope: Option<Self>) -> &'static str {
        match scope {
            Some(Self::Chapter) => "chapter",
            Some(Self::Final) => "final",
            None => "",
        }
    }
}

/// What the generator is asked to cover
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged, rename_all_fields = "camelCase")]
pub enum QuizTarget {
    Final { course_id: u32 },
    Chapter { course_id: u32, chapter_id: u32 },
}

impl QuizTarget {
    pub fn path(&self) -> &'static str {
        match self {
            Self::Final { .. } => "/api/quizzes/final",
            Self::Chapter { .. } => "/api/quizzes/chapter",
        }
    }
}

/// `None` while the selection is incomplete. A chapter quiz needs a chapter.
pub fn quiz_target(course: Option<u32>, scope: Option<QuizScope>, chapter: Option<u32>) -> Option<QuizTarget> {
    match (course?, scope?) {
        (course_id, QuizScope::Final) => Some(QuizTarget::Final { course_id }),
        (course_id, QuizScope::Chapter) => Some(QuizTarget::Chapter {
            course_id,
            chapter_id: chapter?,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::QuizQuestion;

    fn quiz() -> Quiz {
        Quiz {
            quiz_id: 5,
            questions: vec![
                QuizQuestion {
                    question: "What does HTML stand for?".into(),
                    options: vec!["HyperText Markup Language".into(), "High Tech".into()],
                },
                QuizQuestion {
                    question: "Which tag makes a link?".into(),
                    options: vec!["<a>".into(), "<p>".into()],
                },
            ],
            is_final: false,
        }
    }

    #[test]
    fn test_refuses_partial_submission() {
        let quiz = quiz();
        let mut answers = QuizAnswers::for_quiz(&quiz);
        answers.pick(0, "High Tech");
        assert_eq!(answers.answered(), 1);
        assert!(answers.submission(&quiz).is_none());
    }

    #[test]
    fn test_submission_keyed_by_question() {
        let quiz = quiz();
        let mut answers = QuizAnswers::for_quiz(&quiz);
        answers.pick(0, "High Tech");
        answers.pick(0, "HyperText Markup Language");
        answers.pick(1, "<a>");
        answers.pick(7, "ignored");

        let submission = answers.submission(&quiz).unwrap();
        assert_eq!(submission.answers.len(), 2);
        assert_eq!(
            submission.answers["What does HTML stand for?"],
            "HyperText Markup Language"
        );
        assert_eq!(answers.picked(1), Some("<a>"));
    }

    #[test]
    fn test_result_messages() {
        let passed = QuizResult { passed: true, score_percentage: 90.0 };
        let failed = QuizResult { passed: false, score_percentage: 40.5 };
        assert_eq!(result_message(&passed), "Quiz passed with 90%!");
        assert_eq!(result_message(&failed), "Quiz failed with 40.5%. The passing score is 80%.");
    }

    #[test]
    fn test_quiz_target_needs_full_selection() {
        assert_eq!(quiz_target(None, Some(QuizScope::Final), None), None);
        assert_eq!(quiz_target(Some(3), None, Some(1)), None);
        assert_eq!(quiz_target(Some(3), Some(QuizScope::Chapter), None), None);
        // A leftover chapter is ignored for a final quiz
        assert_eq!(
            quiz_target(Some(3), Some(QuizScope::Final), Some(7)),
            Some(QuizTarget::Final { course_id: 3 })
        );
    }

    #[test]
    fn test_quiz_target_body_and_path() {
        let chapter = quiz_target(Some(3), Some(QuizScope::Chapter), Some(7)).unwrap();
        assert_eq!(chapter.path(), "/api/quizzes/chapter");
        assert_eq!(
            serde_json::to_value(chapter).unwrap(),
            serde_json::json!({"courseId": 3, "chapterId": 7})
        );
        let final_quiz = QuizTarget::Final { course_id: 3 };
        assert_eq!(final_quiz.path(), "/api/quizzes/final");
        assert_eq!(serde_json::to_value(final_quiz).unwrap(), serde_json::json!({"courseId": 3}));
    }

    #[test]
    fn test_scope_keys() {
        for (key, _) in QuizScope::OPTIONS {
            assert_eq!(QuizScope::key(QuizScope::parse(key)), key);
        }
        assert_eq!(QuizScope::parse(""), None);
    }
}
