use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier wrapper for catalog questions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(pub String);

impl QuestionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// How a question is answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    Likert,
    MultipleChoice,
}

/// Rubric a question contributes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Psychometric,
    Technical,
    Wiscar,
}

impl Section {
    pub const fn label(self) -> &'static str {
        match self {
            Section::Psychometric => "Psychometric",
            Section::Technical => "Technical",
            Section::Wiscar => "WISCAR",
        }
    }
}

/// Immutable catalog record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub text: String,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    pub section: Section,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub construct: Option<String>,
}

impl Question {
    /// WISCAR dimension named by the construct tag, if it is one of the six letters.
    pub fn wiscar_dimension(&self) -> Option<WiscarDimension> {
        self.construct
            .as_deref()
            .and_then(WiscarDimension::from_construct)
    }
}

/// The six WISCAR readiness dimensions in their natural order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WiscarDimension {
    W,
    I,
    S,
    C,
    A,
    R,
}

impl WiscarDimension {
    pub const ALL: [WiscarDimension; 6] = [
        WiscarDimension::W,
        WiscarDimension::I,
        WiscarDimension::S,
        WiscarDimension::C,
        WiscarDimension::A,
        WiscarDimension::R,
    ];

    pub fn from_construct(construct: &str) -> Option<Self> {
        match construct {
            "W" => Some(Self::W),
            "I" => Some(Self::I),
            "S" => Some(Self::S),
            "C" => Some(Self::C),
            "A" => Some(Self::A),
            "R" => Some(Self::R),
            _ => None,
        }
    }

    pub const fn letter(self) -> &'static str {
        match self {
            Self::W => "W",
            Self::I => "I",
            Self::S => "S",
            Self::C => "C",
            Self::A => "A",
            Self::R => "R",
        }
    }

    /// Heading shown next to the dimension score.
    pub const fn label(self) -> &'static str {
        match self {
            Self::W => "Will & Motivation",
            Self::I => "Interest & Curiosity",
            Self::S => "Skills & Communication",
            Self::C => "Cognitive Readiness",
            Self::A => "Ability to Learn",
            Self::R => "Role Understanding",
        }
    }

    /// Phrase used when the dimension is flagged as a development area.
    pub const fn development_area(self) -> &'static str {
        match self {
            Self::W => "motivation and initiative",
            Self::I => "industry knowledge and curiosity",
            Self::S => "communication and reporting skills",
            Self::C => "analytical thinking",
            Self::A => "learning agility",
            Self::R => "understanding of CSR roles",
        }
    }
}

/// Raw answer as captured by a front end.
///
/// Deserialization accepts any JSON value so malformed answers reach the
/// engine, which scores them as zero or incorrect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponseValue {
    Scale(i64),
    Choice(String),
    Unrecognized(serde_json::Value),
}

impl ResponseValue {
    /// Likert point when the value is a whole number on the 1-5 scale.
    /// Integral floats such as `4.0` count; `3.5` does not.
    pub fn likert_point(&self) -> Option<u8> {
        match self {
            ResponseValue::Scale(value) if LIKERT_RANGE.contains(value) => Some(*value as u8),
            ResponseValue::Unrecognized(serde_json::Value::Number(number)) => number
                .as_f64()
                .filter(|value| value.fract() == 0.0)
                .map(|value| value as i64)
                .filter(|value| LIKERT_RANGE.contains(value))
                .map(|value| value as u8),
            _ => None,
        }
    }

    pub fn as_choice(&self) -> Option<&str> {
        match self {
            ResponseValue::Choice(choice) => Some(choice),
            _ => None,
        }
    }
}

impl Default for ResponseValue {
    fn default() -> Self {
        ResponseValue::Unrecognized(serde_json::Value::Null)
    }
}

impl From<i64> for ResponseValue {
    fn from(value: i64) -> Self {
        ResponseValue::Scale(value)
    }
}

impl From<i32> for ResponseValue {
    fn from(value: i32) -> Self {
        ResponseValue::Scale(i64::from(value))
    }
}

impl From<&str> for ResponseValue {
    fn from(value: &str) -> Self {
        ResponseValue::Choice(value.to_string())
    }
}

impl From<String> for ResponseValue {
    fn from(value: String) -> Self {
        ResponseValue::Choice(value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub question_id: QuestionId,
    #[serde(default)]
    pub value: ResponseValue,
}

impl Response {
    pub fn new(question_id: impl Into<String>, value: impl Into<ResponseValue>) -> Self {
        Self {
            question_id: QuestionId::new(question_id),
            value: value.into(),
        }
    }
}

/// At most one answer per question; a later answer replaces the earlier one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResponseSet {
    answers: HashMap<QuestionId, ResponseValue>,
}

impl ResponseSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, response: Response) -> Option<ResponseValue> {
        self.answers.insert(response.question_id, response.value)
    }

    pub fn get(&self, question_id: &QuestionId) -> Option<&ResponseValue> {
        self.answers.get(question_id)
    }

    pub fn clear(&mut self) {
        self.answers.clear();
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Snapshot as a list sorted by question id.
    pub fn to_responses(&self) -> Vec<Response> {
        let mut responses: Vec<Response> = self
            .answers
            .iter()
            .map(|(question_id, value)| Response {
                question_id: question_id.clone(),
                value: value.clone(),
            })
            .collect();
        responses.sort_by(|left, right| left.question_id.cmp(&right.question_id));
        responses
    }
}

impl FromIterator<Response> for ResponseSet {
    fn from_iter<T: IntoIterator<Item = Response>>(iter: T) -> Self {
        let mut set = ResponseSet::new();
        for response in iter {
            set.record(response);
        }
        set
    }
}

impl Extend<Response> for ResponseSet {
    fn extend<T: IntoIterator<Item = Response>>(&mut self, iter: T) {
        for response in iter {
            self.record(response);
        }
    }
}

pub const LIKERT_RANGE: std::ops::RangeInclusive<i64> = 1..=5;

/// One point on the agreement scale offered for Likert questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LikertPoint {
    pub value: u8,
    pub label: &'static str,
}

pub const LIKERT_SCALE: [LikertPoint; 5] = [
    LikertPoint {
        value: 1,
        label: "Strongly Disagree",
    },
    LikertPoint {
        value: 2,
        label: "Disagree",
    },
    LikertPoint {
        value: 3,
        label: "Neutral",
    },
    LikertPoint {
        value: 4,
        label: "Agree",
    },
    LikertPoint {
        value: 5,
        label: "Strongly Agree",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn response_values_accept_any_json() {
        let scale: ResponseValue = serde_json::from_value(json!(4)).expect("integer");
        let choice: ResponseValue = serde_json::from_value(json!("ESG")).expect("string");
        let odd: ResponseValue = serde_json::from_value(json!(3.5)).expect("float");
        let nothing: ResponseValue = serde_json::from_value(json!(null)).expect("null");

        assert_eq!(scale, ResponseValue::Scale(4));
        assert_eq!(choice, ResponseValue::Choice("ESG".to_string()));
        assert!(matches!(odd, ResponseValue::Unrecognized(_)));
        assert_eq!(nothing, ResponseValue::default());
    }

    #[test]
    fn integral_floats_count_as_likert_points() {
        let four: ResponseValue = serde_json::from_value(json!(4.0)).expect("float");
        let half: ResponseValue = serde_json::from_value(json!(3.5)).expect("float");
        let high: ResponseValue = serde_json::from_value(json!(6.0)).expect("float");

        assert_eq!(four.likert_point(), Some(4));
        assert_eq!(half.likert_point(), None);
        assert_eq!(high.likert_point(), None);
        assert_eq!(ResponseValue::Unrecognized(json!(1e300)).likert_point(), None);
    }

    #[test]
    fn response_without_value_reads_as_unrecognized() {
        let response: Response =
            serde_json::from_value(json!({ "questionId": "psy2" })).expect("response parses");

        assert_eq!(response.value, ResponseValue::Unrecognized(serde_json::Value::Null));
        assert_eq!(response.value.likert_point(), None);
        assert!(serde_json::from_value::<Response>(json!({ "questionId": 7, "value": 3 })).is_err());
    }

    #[test]
    fn snapshot_lists_answers_by_question_id() {
        let set: ResponseSet = vec![
            Response::new("wiscar1", 3),
            Response::new("psy1", 2),
            Response::new("tech1", "GRI"),
        ]
        .into_iter()
        .collect();

        let ids: Vec<String> = set
            .to_responses()
            .into_iter()
            .map(|response| response.question_id.to_string())
            .collect();
        assert_eq!(ids, vec!["psy1", "tech1", "wiscar1"]);
    }

    #[test]
    fn likert_point_rejects_values_off_the_scale() {
        assert_eq!(ResponseValue::Scale(1).likert_point(), Some(1));
        assert_eq!(ResponseValue::Scale(5).likert_point(), Some(5));
        assert_eq!(ResponseValue::Scale(0).likert_point(), None);
        assert_eq!(ResponseValue::Scale(6).likert_point(), None);
        assert_eq!(ResponseValue::from("5").likert_point(), None);
    }

    #[test]
    fn later_answer_replaces_earlier_one() {
        let set: ResponseSet = vec![
            Response::new("psy1", 2),
            Response::new("psy2", 4),
            Response::new("psy1", 5),
        ]
        .into_iter()
        .collect();

        assert_eq!(set.len(), 2);
        assert_eq!(
            set.get(&QuestionId::new("psy1")),
            Some(&ResponseValue::Scale(5))
        );
    }

    #[test]
    fn question_uses_type_key_on_the_wire() {
        let question: Question = serde_json::from_value(json!({
            "id": "wiscar1",
            "text": "Do you take initiative?",
            "type": "likert",
            "section": "wiscar",
            "construct": "W"
        }))
        .expect("question parses");

        assert_eq!(question.kind, QuestionKind::Likert);
        assert_eq!(question.wiscar_dimension(), Some(WiscarDimension::W));
        assert!(question.options.is_empty());

        let value = serde_json::to_value(&question).expect("serializes");
        assert_eq!(value["type"], "likert");
        assert!(value.get("options").is_none());
    }

    #[test]
    fn construct_parsing_is_exact() {
        assert_eq!(WiscarDimension::from_construct("R"), Some(WiscarDimension::R));
        assert_eq!(WiscarDimension::from_construct("r"), None);
        assert_eq!(WiscarDimension::from_construct("interest"), None);
    }
}
