//! Quiz Endpoints

use super::ApiClient;
use crate::error::ApiError;
use crate::models::{GeneratedQuestion, GeneratedQuizEnvelope, Quiz, QuizEnvelope, QuizResult, QuizResultEnvelope};
use crate::quiz::{QuizSubmission, QuizTarget};

impl ApiClient {
    pub async fn quiz(&self, quiz_id: u32) -> Result<Quiz, ApiError> {
        let envelope: QuizEnvelope = self.get(&format!("/api/quizzes/{}", quiz_id)).await?;
        Ok(envelope.quiz)
    }

    pub async fn submit_quiz(&self, quiz_id: u32, submission: &QuizSubmission) -> Result<QuizResult, ApiError> {
        let envelope: QuizResultEnvelope = self
            .post(&format!("/api/quizzes/{}/submit", quiz_id), submission)
            .await?;
        Ok(envelope.result)
    }

    /// Generated questions are stored by the backend as they are returned
    pub async fn generate_quiz(&self, target: &QuizTarget) -> Result<Vec<GeneratedQuestion>, ApiError> {
        let envelope: GeneratedQuizEnvelope = self.post(target.path(), target).await?;
        Ok(envelope.quiz.questions)
    }
}
