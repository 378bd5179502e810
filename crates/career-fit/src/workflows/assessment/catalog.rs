use std::collections::{BTreeMap, HashSet};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::domain::{Question, QuestionId, QuestionKind, Section};

/// Ordered, validated question list. Order matters to scoring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionCatalog {
    questions: Arc<[Question]>,
}

impl QuestionCatalog {
    pub fn new(questions: Vec<Question>) -> Result<Self, CatalogError> {
        if questions.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        for (index, question) in questions.iter().enumerate() {
            if question.id.as_str().trim().is_empty() {
                return Err(CatalogError::MissingId { index });
            }
            if !seen.insert(question.id.clone()) {
                return Err(CatalogError::DuplicateId(question.id.clone()));
            }
            if question.kind == QuestionKind::MultipleChoice && question.options.is_empty() {
                return Err(CatalogError::MissingOptions(question.id.clone()));
            }
            if question.section == Section::Wiscar && question.wiscar_dimension().is_none() {
                warn!(
                    question = %question.id,
                    construct = ?question.construct,
                    "wiscar question has no recognised dimension and will not be scored"
                );
            }
        }

        Ok(Self {
            questions: questions.into(),
        })
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn find(&self, id: &QuestionId) -> Option<&Question> {
        self.questions.iter().find(|question| &question.id == id)
    }

    pub fn section(&self, section: Section) -> impl Iterator<Item = &Question> {
        self.questions
            .iter()
            .filter(move |question| question.section == section)
    }

    /// Log answer-key gaps that would make a technical question unwinnable.
    pub fn audit_answer_key(&self, key: &AnswerKey) -> usize {
        let mut findings = 0;
        for question in self.section(Section::Technical) {
            match key.correct_answer(&question.id) {
                None => {
                    findings += 1;
                    warn!(
                        question = %question.id,
                        "technical question has no answer key entry and always scores incorrect"
                    );
                }
                Some(answer) if !question.options.iter().any(|option| option == answer) => {
                    findings += 1;
                    warn!(
                        question = %question.id,
                        answer,
                        "answer key entry is not one of the question options"
                    );
                }
                Some(_) => {}
            }
        }
        findings
    }

    /// Built-in CSR management catalog.
    pub fn standard() -> Self {
        Self {
            questions: standard_questions().into(),
        }
    }
}

/// Technical question id to the exact correct option text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerKey(BTreeMap<QuestionId, String>);

impl AnswerKey {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, answer: impl Into<String>) {
        self.0.insert(QuestionId::new(id), answer.into());
    }

    pub fn correct_answer(&self, id: &QuestionId) -> Option<&str> {
        self.0.get(id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn standard() -> Self {
        let mut key = Self::new();
        key.insert("tech1", "People, Planet, Profit");
        key.insert("tech2", "GRI (Global Reporting Initiative)");
        key.insert(
            "tech3",
            "Conduct an internal audit of all sustainability claims",
        );
        key.insert("tech4", "Environmental, Social, Governance");
        key
    }
}

/// On-disk catalog format: the ordered questions plus their answer key.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogDocument {
    pub questions: Vec<Question>,
    #[serde(default)]
    pub answer_key: AnswerKey,
}

impl CatalogDocument {
    pub fn standard() -> Self {
        Self {
            questions: standard_questions(),
            answer_key: AnswerKey::standard(),
        }
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<(QuestionCatalog, AnswerKey), CatalogError> {
        let document: CatalogDocument = serde_json::from_reader(reader)?;
        document.into_parts()
    }

    pub fn load_from_path(
        path: impl AsRef<Path>,
    ) -> Result<(QuestionCatalog, AnswerKey), CatalogError> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn into_parts(self) -> Result<(QuestionCatalog, AnswerKey), CatalogError> {
        let catalog = QuestionCatalog::new(self.questions)?;
        catalog.audit_answer_key(&self.answer_key);
        Ok((catalog, self.answer_key))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog contains no questions")]
    Empty,
    #[error("question at position {index} has an empty id")]
    MissingId { index: usize },
    #[error("question id '{0}' appears more than once")]
    DuplicateId(QuestionId),
    #[error("multiple choice question '{0}' has no options")]
    MissingOptions(QuestionId),
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

fn likert(id: &str, text: &str, section: Section, construct: &str) -> Question {
    Question {
        id: QuestionId::new(id),
        text: text.to_string(),
        kind: QuestionKind::Likert,
        section,
        options: Vec::new(),
        construct: Some(construct.to_string()),
    }
}

fn multiple_choice(id: &str, text: &str, options: [&str; 4]) -> Question {
    Question {
        id: QuestionId::new(id),
        text: text.to_string(),
        kind: QuestionKind::MultipleChoice,
        section: Section::Technical,
        options: options.iter().map(|option| option.to_string()).collect(),
        construct: None,
    }
}

fn standard_questions() -> Vec<Question> {
    vec![
        likert(
            "psy1",
            "I am interested in creating long-term impact in communities.",
            Section::Psychometric,
            "interest",
        ),
        likert(
            "psy2",
            "I follow sustainability or ESG trends regularly.",
            Section::Psychometric,
            "interest",
        ),
        likert(
            "psy3",
            "I enjoy balancing business and ethical decisions.",
            Section::Psychometric,
            "interest",
        ),
        likert(
            "psy4",
            "I prefer working with people rather than just data.",
            Section::Psychometric,
            "cognitive_style",
        ),
        likert(
            "psy5",
            "I am motivated more by internal values than external rewards.",
            Section::Psychometric,
            "motivation",
        ),
        multiple_choice(
            "tech1",
            "What does the \"triple bottom line\" refer to in business?",
            [
                "People, Planet, Profit",
                "Revenue, Growth, Market Share",
                "Quality, Cost, Delivery",
                "Safety, Efficiency, Innovation",
            ],
        ),
        multiple_choice(
            "tech2",
            "Which framework is commonly used for sustainability reporting?",
            [
                "GRI (Global Reporting Initiative)",
                "IFRS (International Financial Reporting Standards)",
                "GAAP (Generally Accepted Accounting Principles)",
                "ISO 9001",
            ],
        ),
        multiple_choice(
            "tech3",
            "A company faces accusations of greenwashing. What should be the first step?",
            [
                "Conduct an internal audit of all sustainability claims",
                "Immediately deny all accusations publicly",
                "Hire a PR firm to manage the crisis",
                "Reduce all environmental messaging",
            ],
        ),
        multiple_choice(
            "tech4",
            "ESG stands for:",
            [
                "Environmental, Social, Governance",
                "Economic, Sustainable, Growth",
                "Ethics, Standards, Guidelines",
                "Equity, Strategy, Goals",
            ],
        ),
        likert(
            "wiscar1",
            "Do you take initiative in social causes without being asked?",
            Section::Wiscar,
            "W",
        ),
        likert(
            "wiscar2",
            "Do you actively keep up with sustainability policies and news?",
            Section::Wiscar,
            "I",
        ),
        likert(
            "wiscar3",
            "How confident are you in writing clear stakeholder communications?",
            Section::Wiscar,
            "S",
        ),
        likert(
            "wiscar4",
            "You can effectively analyze and identify gaps in sustainability reports.",
            Section::Wiscar,
            "C",
        ),
        likert(
            "wiscar5",
            "You actively seek and respond well to feedback for improvement.",
            Section::Wiscar,
            "A",
        ),
        likert(
            "wiscar6",
            "How well do you understand the day-to-day responsibilities of a CSR Manager?",
            Section::Wiscar,
            "R",
        ),
    ]
}
