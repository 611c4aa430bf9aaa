use crate::infra::{parse_answer, parse_gender, InMemoryResultRepository};
use clap::Args;
use hps::error::AppError;
use hps::quiz::{
    Answer, Axis, Gender, IgnoredAnswer, PersonalityType, QuestionBank, QuizEngine, QuizResult, QuizService,
    RepositoryError, ResultRepository, SessionId, StoredResult, Submission, TypeProfile,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct TypesArgs {
    /// Three-letter type code such as TDI or esr
    pub(crate) code: Option<String>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ScoreArgs {
    /// Answers as QUESTION:OPTION pairs, e.g. `1:0 6:2`
    #[arg(value_parser = parse_answer)]
    pub(crate) answers: Vec<Answer>,
    /// JSON file holding an array of `{"questionId", "optionIndex"}` answers
    #[arg(long)]
    pub(crate) file: Option<PathBuf>,
    /// Respondent gender used for the result title (male or female)
    #[arg(long, value_parser = parse_gender)]
    pub(crate) gender: Option<Gender>,
    /// Print the full result payload as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Print each stored result as JSON instead of a summary
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_questions() -> Result<(), AppError> {
    let engine = QuizEngine::standard()?;
    for question in engine.bank().questions() {
        println!("{} [{}] {}", question.id, question.dimension.axis().label(), question.text);
        for (index, option) in question.options.iter().enumerate() {
            println!("    {index}: {}", option.text);
        }
    }
    Ok(())
}

pub(crate) fn run_types(args: TypesArgs) -> Result<(), AppError> {
    let engine = QuizEngine::standard()?;
    match args.code {
        Some(code) => {
            let personality_type = code
                .parse::<PersonalityType>()
                .map_err(|err| AppError::Input(err.to_string()))?;
            print_profile(engine.catalog().profile(personality_type));
        }
        None => {
            for profile in engine.catalog().profiles() {
                println!(
                    "{} {} {}: {}",
                    profile.icon, profile.personality_type, profile.name, profile.description
                );
            }
        }
    }
    Ok(())
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let mut answers = match &args.file {
        Some(path) => load_answers(path)?,
        None => Vec::new(),
    };
    answers.extend(args.answers.iter().copied());
    if answers.is_empty() {
        return Err(AppError::Input(
            "provide answers inline (QUESTION:OPTION) or with --file".to_string(),
        ));
    }

    let engine = QuizEngine::standard()?;
    let evaluation = engine.evaluate(&answers, args.gender);

    if args.json {
        println!("{}", render_json(&evaluation.result)?);
        return Ok(());
    }

    print_result(&evaluation.result);
    if !evaluation.aggregate.is_complete(engine.bank()) {
        println!(
            "Note: {} of {} questions answered",
            evaluation.aggregate.counted.len(),
            engine.bank().len()
        );
    }
    for ignored in &evaluation.aggregate.ignored {
        println!("{}", ignored_line(ignored));
    }
    Ok(())
}

/// Echoes an ignored answer in the same `QUESTION:OPTION` form `score` accepts.
fn ignored_line(ignored: &IgnoredAnswer) -> String {
    format!(
        "Ignored {}:{} ({:?})",
        ignored.answer.question_id.0, ignored.answer.option_index, ignored.reason
    )
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let engine = Arc::new(QuizEngine::standard()?);
    let repository = Arc::new(InMemoryResultRepository::with_capacity(16));
    let service = QuizService::new(engine, repository);

    println!("=== Hormone Personality System Demo ===");
    walk_respondents(&service, args.json)
}

fn walk_respondents<R: ResultRepository + 'static>(
    service: &QuizService<R>,
    json: bool,
) -> Result<(), AppError> {
    for (session, leanings, gender) in sample_respondents() {
        let answers = leaning_answers(service.engine().bank(), leanings);
        let submitted = service.submit(Submission {
            session_id: SessionId(session.to_string()),
            answers,
            gender,
        })?;

        let stored = service.result(&submitted.session_id)?;

        println!();
        println!(
            "Session {} stored at {}",
            stored.session_id,
            stored.completed_at.format("%Y-%m-%d %H:%M:%S UTC")
        );
        if json {
            println!("{}", render_json(&stored.result)?);
        } else {
            print_result(&stored.result);
        }
    }
    Ok(())
}

fn sample_respondents() -> [(&'static str, [bool; 3], Option<Gender>); 3] {
    [
        ("demo-driver", [true, true, true], Some(Gender::Male)),
        ("demo-caretaker", [false, false, false], Some(Gender::Female)),
        ("demo-analyst", [true, false, true], None),
    ]
}

/// Picks, per question, the option that leans hardest toward the requested pole.
fn leaning_answers(bank: &QuestionBank, first_pole: [bool; 3]) -> Vec<Answer> {
    bank.questions()
        .iter()
        .filter_map(|question| {
            let axis = question.dimension.axis();
            let wants_first = first_pole[axis_slot(axis)];
            question
                .options
                .iter()
                .enumerate()
                .max_by_key(|(_, option)| {
                    let (first, second) = option.weights.axis(axis);
                    let lean = i64::from(first) - i64::from(second);
                    if wants_first {
                        lean
                    } else {
                        -lean
                    }
                })
                .map(|(index, _)| Answer::for_slot(question.id, index))
        })
        .collect()
}

fn axis_slot(axis: Axis) -> usize {
    match axis {
        Axis::Hormone => 0,
        Axis::Action => 1,
        Axis::Focus => 2,
    }
}

fn load_answers(path: &Path) -> Result<Vec<Answer>, AppError> {
    let raw = std::fs::read_to_string(path)?;
    serde_json::from_str(&raw).map_err(|err| {
        AppError::Input(format!("{} is not a JSON answer list: {err}", path.display()))
    })
}

fn render_json(result: &QuizResult) -> Result<String, AppError> {
    serde_json::to_string_pretty(result)
        .map_err(|err| AppError::Input(format!("unable to render result: {err}")))
}

fn print_result(result: &QuizResult) {
    println!("{} {} ({})", result.icon, result.title, result.personality_type);
    println!("{}", result.description);
    for view in &result.axes {
        println!(
            "  {:<8} {} {:>3}% | {} {:>3}%",
            view.label,
            view.first_pole.label(),
            view.first_share,
            view.second_pole.label(),
            view.second_share
        );
    }
    println!("  Strengths: {}", result.characteristics.strengths.join(", "));
    println!("  Growth tips: {}", result.characteristics.growth_tips.join(", "));
    println!("  Careers: {}", result.characteristics.careers.join(", "));
    println!("  Best match: {}", codes(&result.compatibility.perfect));
}

fn print_profile(profile: &TypeProfile) {
    println!("{} {} {}", profile.icon, profile.personality_type, profile.name);
    println!("{}", profile.description);
    println!("  Strengths: {}", profile.strengths.join(", "));
    println!("  Weaknesses: {}", profile.weaknesses.join(", "));
    println!("  Careers: {}", profile.careers.join(", "));
    println!("  Notable: {}", profile.notable_examples.join(", "));
    println!("  Perfect: {}", codes(&profile.compatibility.perfect));
    println!("  Good: {}", codes(&profile.compatibility.good));
    println!("  Growth: {}", codes(&profile.compatibility.growth));
}

fn codes(types: &[PersonalityType]) -> String {
    types
        .iter()
        .map(|ty| ty.code())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use hps::quiz::IgnoreReason;

    #[test]
    fn sample_respondents_land_on_their_leaning_types() {
        let engine = QuizEngine::standard().expect("engine builds");
        let expected = [PersonalityType::Tdi, PersonalityType::Esr, PersonalityType::Tsi];

        for ((_, leanings, gender), expected) in sample_respondents().into_iter().zip(expected) {
            let answers = leaning_answers(engine.bank(), leanings);
            assert_eq!(answers.len(), engine.bank().len());
            let evaluation = engine.evaluate(&answers, gender);
            assert_eq!(evaluation.result.personality_type, expected);
        }
    }

    #[test]
    fn score_without_answers_is_an_input_error() {
        let err = run_score(ScoreArgs::default()).expect_err("no answers");
        assert!(matches!(err, AppError::Input(_)));
    }

    #[test]
    fn unknown_type_code_is_an_input_error() {
        let err = run_types(TypesArgs {
            code: Some("XYZ".to_string()),
        })
        .expect_err("unknown code");
        assert!(matches!(err, AppError::Input(_)));
    }

    struct OfflineRepository;

    impl ResultRepository for OfflineRepository {
        fn save(&self, _record: StoredResult) -> Result<(), RepositoryError> {
            Err(RepositoryError::Unavailable("store offline".to_string()))
        }

        fn fetch(&self, _session_id: &SessionId) -> Result<Option<StoredResult>, RepositoryError> {
            Err(RepositoryError::Unavailable("store offline".to_string()))
        }
    }

    #[test]
    fn storage_faults_are_not_reported_as_bad_input() {
        let service = QuizService::new(
            Arc::new(QuizEngine::standard().expect("engine builds")),
            Arc::new(OfflineRepository),
        );

        let err = walk_respondents(&service, false).expect_err("store is offline");
        assert!(matches!(
            err,
            AppError::Storage(RepositoryError::Unavailable(_))
        ));
    }

    #[test]
    fn ignored_answers_echo_the_input_syntax() {
        let line = ignored_line(&IgnoredAnswer {
            answer: Answer::new(42, 0),
            reason: IgnoreReason::UnknownQuestion,
        });
        assert_eq!(line, "Ignored 42:0 (UnknownQuestion)");
        assert_eq!(parse_answer("42:0"), Ok(Answer::new(42, 0)));
    }

    #[test]
    fn demo_flow_completes() {
        run_demo(DemoArgs::default()).expect("demo runs");
    }
}
