use serde::{Deserialize, Serialize};

use super::super::catalog::AnswerKey;
use super::super::domain::{Question, ResponseSet, Section, WiscarDimension};

const LIKERT_MAX: f64 = 5.0;

/// Per-dimension WISCAR percentages. Dimensions without a scored question stay at 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WiscarScores {
    #[serde(rename = "W")]
    pub will: u8,
    #[serde(rename = "I")]
    pub interest: u8,
    #[serde(rename = "S")]
    pub skill: u8,
    #[serde(rename = "C")]
    pub cognitive: u8,
    #[serde(rename = "A")]
    pub ability: u8,
    #[serde(rename = "R")]
    pub role: u8,
}

impl WiscarScores {
    pub fn get(&self, dimension: WiscarDimension) -> u8 {
        match dimension {
            WiscarDimension::W => self.will,
            WiscarDimension::I => self.interest,
            WiscarDimension::S => self.skill,
            WiscarDimension::C => self.cognitive,
            WiscarDimension::A => self.ability,
            WiscarDimension::R => self.role,
        }
    }

    pub fn set(&mut self, dimension: WiscarDimension, score: u8) {
        let slot = match dimension {
            WiscarDimension::W => &mut self.will,
            WiscarDimension::I => &mut self.interest,
            WiscarDimension::S => &mut self.skill,
            WiscarDimension::C => &mut self.cognitive,
            WiscarDimension::A => &mut self.ability,
            WiscarDimension::R => &mut self.role,
        };
        *slot = score;
    }

    /// Scores in W, I, S, C, A, R order.
    pub fn iter(&self) -> impl Iterator<Item = (WiscarDimension, u8)> + '_ {
        WiscarDimension::ALL
            .into_iter()
            .map(move |dimension| (dimension, self.get(dimension)))
    }

    /// Unrounded mean of all six dimensions.
    pub fn average(&self) -> f64 {
        let total: u32 = self.iter().map(|(_, score)| u32::from(score)).sum();
        f64::from(total) / WiscarDimension::ALL.len() as f64
    }
}

/// Rounded percentage clamped to 0..=100. A zero denominator yields 0.
pub(crate) fn percentage(numerator: f64, denominator: f64) -> u8 {
    if denominator <= 0.0 {
        return 0;
    }
    ((numerator / denominator) * 100.0).round().clamp(0.0, 100.0) as u8
}

fn in_section(questions: &[Question], section: Section) -> impl Iterator<Item = &Question> {
    questions
        .iter()
        .filter(move |question| question.section == section)
}

fn likert_value(question: &Question, responses: &ResponseSet) -> u8 {
    responses
        .get(&question.id)
        .and_then(|value| value.likert_point())
        .unwrap_or(0)
}

/// Share of the maximum possible endorsement across psychometric items.
pub fn psychometric_score(questions: &[Question], responses: &ResponseSet) -> u8 {
    let (count, sum) = in_section(questions, Section::Psychometric).fold(
        (0u32, 0u32),
        |(count, sum), question| (count + 1, sum + u32::from(likert_value(question, responses))),
    );

    percentage(f64::from(sum), f64::from(count) * LIKERT_MAX)
}

/// Share of technical questions answered with the exact keyed option.
pub fn technical_score(
    questions: &[Question],
    answer_key: &AnswerKey,
    responses: &ResponseSet,
) -> u8 {
    let (count, correct) = in_section(questions, Section::Technical).fold(
        (0u32, 0u32),
        |(count, correct), question| {
            let answered = responses
                .get(&question.id)
                .and_then(|value| value.as_choice());
            let expected = answer_key.correct_answer(&question.id);
            let hit = matches!((answered, expected), (Some(given), Some(key)) if given == key);
            (count + 1, correct + u32::from(hit))
        },
    );

    percentage(f64::from(correct), f64::from(count))
}

/// Single-item conversion per dimension. Walks the catalog in order and
/// overwrites, so the last question tagged with a letter decides its score.
pub fn wiscar_scores(questions: &[Question], responses: &ResponseSet) -> WiscarScores {
    let mut scores = WiscarScores::default();
    for question in in_section(questions, Section::Wiscar) {
        let Some(dimension) = question.wiscar_dimension() else {
            continue;
        };
        let value = likert_value(question, responses);
        scores.set(dimension, percentage(f64::from(value), LIKERT_MAX));
    }
    scores
}

pub fn confidence_score(psychometric: u8, technical: u8, wiscar: &WiscarScores) -> u8 {
    let combined = f64::from(psychometric) + f64::from(technical) + wiscar.average();
    (combined / 3.0).round().clamp(0.0, 100.0) as u8
}
