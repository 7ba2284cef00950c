//! Course Progress
//!
//! Chapter completion summary and final-quiz gating for the course page.

use crate::models::{Chapter, LearnCourse};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CourseProgress {
    pub completed: usize,
    pub total: usize,
}

impl CourseProgress {
    pub fn of(chapters: &[Chapter]) -> Self {
        Self {
            completed: chapters.iter().filter(|chapter| chapter.is_completed).count(),
            total: chapters.len(),
        }
    }

    /// Rounded percentage; 0 for a course without chapters
    pub fn percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        ((self.completed as f64 / self.total as f64) * 100.0).round() as u32
    }

    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.completed == self.total
    }

    pub fn label(&self) -> String {
        format!(
            "{}% Complete ({} / {} Chapters)",
            self.percent(),
            self.completed,
            self.total
        )
    }
}

/// What the final-quiz section shows
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FinalQuizState {
    /// Course has no final quiz
    Absent,
    /// Chapters still open
    Locked,
    Available(u32),
    Passed,
}

pub fn final_quiz_state(course: &LearnCourse) -> FinalQuizState {
    let Some(final_quiz) = &course.final_quiz else {
        return FinalQuizState::Absent;
    };
    if final_quiz.is_completed {
        FinalQuizState::Passed
    } else if CourseProgress::of(&course.chapters).is_complete() {
        FinalQuizState::Available(final_quiz.quiz_id)
    } else {
        FinalQuizState::Locked
    }
}

/// Apply the backend's answer to a completion toggle.
pub fn set_chapter_completed(chapters: &mut [Chapter], chapter_id: u32, completed: bool) -> bool {
    match chapters.iter_mut().find(|chapter| chapter.id == chapter_id) {
        Some(chapter) => {
            chapter.is_completed = completed;
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FinalQuiz;

    fn course(completed: usize, total: usize) -> LearnCourse {
        LearnCourse {
            id: 1,
            title: "Web Basics".into(),
            description: String::new(),
            video_link: None,
            chapters: (0..total)
                .map(|i| Chapter {
                    id: i as u32 + 1,
                    title: format!("Chapter {}", i + 1),
                    content: String::new(),
                    quiz_id: None,
                    is_completed: i < completed,
                    quiz_passed: false,
                })
                .collect(),
            final_quiz: Some(FinalQuiz {
                quiz_id: 99,
                is_completed: false,
            }),
        }
    }

    #[test]
    fn test_four_of_five_then_all() {
        let mut course = course(4, 5);
        let progress = CourseProgress::of(&course.chapters);
        assert_eq!(progress.percent(), 80);
        assert_eq!(progress.label(), "80% Complete (4 / 5 Chapters)");
        assert_eq!(final_quiz_state(&course), FinalQuizState::Locked);

        assert!(set_chapter_completed(&mut course.chapters, 5, true));
        assert_eq!(CourseProgress::of(&course.chapters).percent(), 100);
        assert_eq!(final_quiz_state(&course), FinalQuizState::Available(99));
    }

    #[test]
    fn test_rounding_and_empty() {
        assert_eq!(CourseProgress { completed: 1, total: 3 }.percent(), 33);
        assert_eq!(CourseProgress { completed: 2, total: 3 }.percent(), 67);
        assert_eq!(CourseProgress::default().percent(), 0);
        assert!(!CourseProgress::default().is_complete());
    }

    #[test]
    fn test_passed_and_absent_final_quiz() {
        let mut passed = course(5, 5);
        passed.final_quiz = Some(FinalQuiz {
            quiz_id: 99,
            is_completed: true,
        });
        assert_eq!(final_quiz_state(&passed), FinalQuizState::Passed);

        let mut none = course(5, 5);
        none.final_quiz = None;
        assert_eq!(final_quiz_state(&none), FinalQuizState::Absent);
    }

    #[test]
    fn test_unknown_chapter_untouched() {
        let mut course = course(0, 2);
        assert!(!set_chapter_completed(&mut course.chapters, 42, true));
        assert_eq!(CourseProgress::of(&course.chapters).completed, 0);
    }
}
