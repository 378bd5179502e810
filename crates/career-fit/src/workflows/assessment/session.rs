use super::domain::{Question, QuestionId, Response, ResponseSet, ResponseValue};
use super::scoring::{AssessmentResults, ScoringEngine};

/// Outcome of advancing a session.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionStep<'a> {
    Question(&'a Question),
    Complete(AssessmentResults),
}

/// Walks the catalog one question at a time and scores once the last
/// question is passed. Nothing is kept after the value is dropped.
#[derive(Debug, Clone)]
pub struct AssessmentSession {
    engine: ScoringEngine,
    index: usize,
    responses: ResponseSet,
    results: Option<AssessmentResults>,
}

impl AssessmentSession {
    pub fn new(engine: ScoringEngine) -> Self {
        Self {
            engine,
            index: 0,
            responses: ResponseSet::new(),
            results: None,
        }
    }

    pub fn current(&self) -> Option<&Question> {
        if self.results.is_some() {
            return None;
        }
        self.engine.catalog().get(self.index)
    }

    /// 1-based position of the current question and the catalog length.
    pub fn position(&self) -> (usize, usize) {
        (self.index + 1, self.engine.catalog().len())
    }

    pub fn current_answer(&self) -> Option<&ResponseValue> {
        let question = self.current()?;
        self.responses.get(&question.id)
    }

    pub fn answer(&mut self, value: impl Into<ResponseValue>) -> Result<(), SessionError> {
        let question_id = self.current_id()?;
        self.responses.record(Response {
            question_id,
            value: value.into(),
        });
        Ok(())
    }

    pub fn can_proceed(&self) -> bool {
        self.current_answer().is_some()
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 >= self.engine.catalog().len()
    }

    pub fn next(&mut self) -> Result<SessionStep<'_>, SessionError> {
        let question_id = self.current_id()?;
        if self.responses.get(&question_id).is_none() {
            return Err(SessionError::Unanswered(question_id));
        }

        if self.is_last() {
            let results = self.engine.score(&self.responses);
            self.results = Some(results.clone());
            return Ok(SessionStep::Complete(results));
        }

        self.index += 1;
        self.engine
            .catalog()
            .get(self.index)
            .map(SessionStep::Question)
            .ok_or(SessionError::Finished)
    }

    /// Step back one question; stays put on the first question.
    pub fn previous(&mut self) -> Option<&Question> {
        if self.results.is_none() && self.index > 0 {
            self.index -= 1;
        }
        self.current()
    }

    pub fn restart(&mut self) {
        self.index = 0;
        self.responses.clear();
        self.results = None;
    }

    pub fn responses(&self) -> &ResponseSet {
        &self.responses
    }

    pub fn results(&self) -> Option<&AssessmentResults> {
        self.results.as_ref()
    }

    fn current_id(&self) -> Result<QuestionId, SessionError> {
        self.current()
            .map(|question| question.id.clone())
            .ok_or(SessionError::Finished)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("question '{0}' must be answered before moving on")]
    Unanswered(QuestionId),
    #[error("assessment already completed; restart to answer again")]
    Finished,
}
