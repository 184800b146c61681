use crate::infra::parse_date;
use chrono::{Local, NaiveDate};
use clap::Args;
use spirit_quiz::error::AppError;
use spirit_quiz::quiz::{QuizResultView, QuizService, QuizSubmission, ValidationErrors};

#[derive(Args, Debug)]
pub(crate) struct QuizScoreArgs {
    /// Morning person answer (yes or no)
    #[arg(long)]
    pub(crate) morning_person: String,
    /// Favorite snack (sweet or savory)
    #[arg(long)]
    pub(crate) favorite_snack: String,
    /// Favorite season (spring, summer, autumn, winter)
    #[arg(long)]
    pub(crate) favorite_season: String,
    /// Ideal day-off activity (reading, hiking, cooking, gaming, socializing)
    #[arg(long)]
    pub(crate) ideal_activity: String,
    /// Competitiveness on a 1-10 scale
    #[arg(long)]
    pub(crate) competitiveness: i64,
    /// Submission date (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) selected_date: Option<NaiveDate>,
    /// Acknowledge the terms and conditions
    #[arg(long)]
    pub(crate) agree_to_terms: bool,
    /// Evaluation date override (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Evaluation date override (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

pub(crate) fn run_quiz_score(args: QuizScoreArgs) -> Result<(), AppError> {
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let submission = QuizSubmission {
        morning_person: Some(args.morning_person),
        favorite_snack: Some(args.favorite_snack),
        favorite_season: Some(args.favorite_season),
        ideal_activity: Some(args.ideal_activity),
        competitiveness: Some(args.competitiveness),
        selected_date: args.selected_date.or(Some(today)),
        agree_to_terms: Some(args.agree_to_terms),
    };

    let service = QuizService::new();
    match service.submit(&submission, today) {
        Ok(result) => render_result(&result),
        Err(errors) => render_errors(&errors),
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let service = QuizService::new();

    println!("Spirit animal quiz demo (evaluation date {today})");

    for (name, submission) in demo_profiles(today) {
        println!("\n{name}");
        println!("  Form completion: {}%", submission.progress_percent());
        match service.submit(&submission, today) {
            Ok(result) => render_result(&result),
            Err(errors) => render_errors(&errors),
        }
    }

    Ok(())
}

fn demo_profiles(today: NaiveDate) -> Vec<(&'static str, QuizSubmission)> {
    let filled = |morning: &str, snack: &str, season: &str, activity: &str, level: i64| {
        QuizSubmission {
            morning_person: Some(morning.to_string()),
            favorite_snack: Some(snack.to_string()),
            favorite_season: Some(season.to_string()),
            ideal_activity: Some(activity.to_string()),
            competitiveness: Some(level),
            selected_date: Some(today),
            agree_to_terms: Some(true),
        }
    };

    let mut missing_consent = filled("yes", "sweet", "spring", "hiking", 4);
    missing_consent.agree_to_terms = Some(false);

    vec![
        ("Early-bird socialite", filled("yes", "sweet", "summer", "socializing", 10)),
        ("Winter reader", filled("no", "savory", "winter", "reading", 1)),
        ("Weekend chef", filled("yes", "savory", "autumn", "cooking", 6)),
        ("Missing consent (rejected)", missing_consent),
    ]
}

fn render_result(result: &QuizResultView) {
    println!("  Score components:");
    for component in &result.components {
        println!("    {:+} {}", component.points, component.notes);
    }
    println!("  Total score: {}", result.total_score);
    println!("  Spirit animal: {}", result.spirit_animal);
    println!("  Display asset: {}", result.asset);
}

fn render_errors(errors: &ValidationErrors) {
    println!("  Submission rejected:");
    for (field, message) in errors.iter() {
        println!("    {}: {}", field.key(), message);
    }
}
