use crate::infra::{load_engine, read_responses_from_path};
use career_fit::error::AppError;
use career_fit::workflows::assessment::{
    AssessmentResults, AssessmentSession, QuestionCatalog, QuestionId, QuestionKind, ResponseSet,
    ResponseValue, ScoringEngine, SessionStep, LIKERT_SCALE,
};
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct CatalogArgs {
    /// Catalog document to print instead of the built-in questions
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// JSON file holding a list of `{ "questionId", "value" }` responses
    #[arg(long)]
    pub(crate) responses: PathBuf,
    /// Catalog document to score against instead of the built-in questions
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Emit the results payload as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Emit the results payload as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_catalog(args: CatalogArgs) -> Result<(), AppError> {
    let engine = load_engine(args.catalog.as_deref())?;
    render_catalog(engine.catalog());
    Ok(())
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs {
        responses,
        catalog,
        json,
    } = args;

    let engine = load_engine(catalog.as_deref())?;
    let responses = read_responses_from_path(&responses)?;
    let unknown = unknown_question_ids(engine.catalog(), &responses);
    if !unknown.is_empty() {
        let ids: Vec<&str> = unknown.iter().map(QuestionId::as_str).collect();
        eprintln!("ignoring answers for unknown questions: {}", ids.join(", "));
    }
    let results = engine.score(&responses);

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        render_results(&results);
    }
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let results = sample_respondent(ScoringEngine::standard());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        println!("Career fit demo (sample respondent)");
        render_results(&results);
    }
    Ok(())
}

/// Answered ids the catalog does not know, sorted.
fn unknown_question_ids(catalog: &QuestionCatalog, responses: &ResponseSet) -> Vec<QuestionId> {
    responses
        .to_responses()
        .into_iter()
        .map(|response| response.question_id)
        .filter(|id| catalog.find(id).is_none())
        .collect()
}

/// Walk the session the way a front end would, answering every question.
fn sample_respondent(engine: ScoringEngine) -> AssessmentResults {
    let mut session = AssessmentSession::new(engine.clone());
    let mut likert_answers = [4_i64, 5, 3, 4, 5, 4, 3, 4, 5, 3, 4].into_iter().cycle();

    while let Some(question) = session.current() {
        let value = match question.kind {
            QuestionKind::Likert => ResponseValue::Scale(likert_answers.next().unwrap_or(3)),
            QuestionKind::MultipleChoice => question
                .options
                .first()
                .map(|option| ResponseValue::from(option.as_str()))
                .unwrap_or(ResponseValue::Scale(0)),
        };

        if session.answer(value).is_err() {
            break;
        }
        match session.next() {
            Ok(SessionStep::Question(_)) => {}
            Ok(SessionStep::Complete(results)) => return results,
            Err(_) => break,
        }
    }

    engine.score(session.responses())
}

pub(crate) fn render_catalog(catalog: &QuestionCatalog) {
    println!("Assessment catalog ({} questions)", catalog.len());

    let mut current_section = None;
    for (index, question) in catalog.questions().iter().enumerate() {
        if current_section != Some(question.section) {
            current_section = Some(question.section);
            println!("\n{}", question.section.label());
        }

        println!("{:>2}. [{}] {}", index + 1, question.id, question.text);
        match question.kind {
            QuestionKind::Likert => {
                let scale: Vec<String> = LIKERT_SCALE
                    .iter()
                    .map(|point| format!("{}={}", point.value, point.label))
                    .collect();
                println!("    scale: {}", scale.join(", "));
            }
            QuestionKind::MultipleChoice => {
                for option in &question.options {
                    println!("    - {}", option);
                }
            }
        }
    }
}

pub(crate) fn render_results(results: &AssessmentResults) {
    println!("{}", results.recommendation.summary());
    println!(
        "Recommendation: {} | Confidence Score: {}%",
        results.recommendation.label(),
        results.confidence_score
    );

    println!("\nSection scores");
    println!("- Psychometric fit: {}%", results.scores.psychometric);
    println!("- Technical readiness: {}%", results.scores.technical);

    println!("\nWISCAR analysis");
    for (dimension, score) in results.scores.wiscar.iter() {
        println!("- {} ({}): {}%", dimension.label(), dimension.letter(), score);
    }

    print_list("Key insights", &results.insights);
    print_list("Recommended next steps", &results.next_steps);
    print_list("Career alignment", &results.career_alignment);
}

fn print_list(heading: &str, items: &[String]) {
    println!("\n{heading}");
    for item in items {
        println!("- {item}");
    }
}
