use axum::response::Response as HttpResponse;
use serde_json::Value;

use crate::workflows::assessment::domain::{
    Question, QuestionId, QuestionKind, Response, ResponseSet, Section,
};
use crate::workflows::assessment::{AnswerKey, QuestionCatalog, ScoringEngine};

pub(super) fn standard_engine() -> ScoringEngine {
    ScoringEngine::standard()
}

pub(super) fn likert_question(id: &str, section: Section, construct: Option<&str>) -> Question {
    Question {
        id: QuestionId::new(id),
        text: format!("Prompt for {id}"),
        kind: QuestionKind::Likert,
        section,
        options: Vec::new(),
        construct: construct.map(str::to_string),
    }
}

pub(super) fn choice_question(id: &str, options: &[&str]) -> Question {
    Question {
        id: QuestionId::new(id),
        text: format!("Prompt for {id}"),
        kind: QuestionKind::MultipleChoice,
        section: Section::Technical,
        options: options.iter().map(|option| option.to_string()).collect(),
        construct: None,
    }
}

/// Same Likert value for every psychometric and WISCAR question of the standard catalog.
pub(super) fn uniform_likert(value: i64) -> Vec<Response> {
    QuestionCatalog::standard()
        .questions()
        .iter()
        .filter(|question| question.kind == QuestionKind::Likert)
        .map(|question| Response::new(question.id.as_str(), value))
        .collect()
}

pub(super) fn correct_technical() -> Vec<Response> {
    let key = AnswerKey::standard();
    QuestionCatalog::standard()
        .section(Section::Technical)
        .map(|question| {
            let answer = key
                .correct_answer(&question.id)
                .expect("standard key covers technical questions");
            Response::new(question.id.as_str(), answer)
        })
        .collect()
}

pub(super) fn wrong_technical() -> Vec<Response> {
    let key = AnswerKey::standard();
    QuestionCatalog::standard()
        .section(Section::Technical)
        .map(|question| {
            let wrong = question
                .options
                .iter()
                .find(|option| Some(option.as_str()) != key.correct_answer(&question.id))
                .expect("every technical question has a distractor");
            Response::new(question.id.as_str(), wrong.as_str())
        })
        .collect()
}

pub(super) fn responses(parts: Vec<Vec<Response>>) -> ResponseSet {
    parts.into_iter().flatten().collect()
}

pub(super) async fn read_json_body(response: HttpResponse) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
