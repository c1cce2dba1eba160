use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use log::{info, LevelFilter};
use serde::Serialize;
use unistroke::{
    best_score, GestureLibrary, GestureRecord, LibraryError, RecognizeError, TemplateScore,
};

#[derive(Parser, Debug)]
#[command(name = "unistroke", version, about = "Match single-stroke gestures against a template library")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate a raw gesture and append it to a library file.
    Add(AddArgs),
    /// Recognize a raw gesture against a library file.
    Recognize(RecognizeArgs),
}

#[derive(Args, Debug)]
struct AddArgs {
    /// Library JSON file (created if missing).
    #[arg(long)]
    library: PathBuf,
    /// Gesture JSON file to add.
    #[arg(long)]
    gesture: PathBuf,
    /// Template name; defaults to the name stored in the gesture file.
    #[arg(long)]
    name: Option<String>,
}

#[derive(Args, Debug)]
struct RecognizeArgs {
    /// Library JSON file.
    #[arg(long)]
    library: PathBuf,
    /// Gesture JSON file to recognize.
    #[arg(long)]
    gesture: PathBuf,
    /// Print the score of every template.
    #[arg(long)]
    all: bool,
    /// Print a JSON report instead of text.
    #[arg(long)]
    json: bool,
}

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error(transparent)]
    Library(#[from] LibraryError),
    #[error(transparent)]
    Io(#[from] unistroke::GestureIoError),
    #[error(transparent)]
    Recognize(#[from] RecognizeError),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Serialize)]
struct ScoreReport {
    name: String,
    #[serde(flatten)]
    score: TemplateScore,
}

#[derive(Debug, Serialize)]
struct RecognizeReport {
    gesture_path: String,
    library_path: String,
    best: ScoreReport,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    scores: Vec<ScoreReport>,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Command::Add(args) => run_add(args),
        Command::Recognize(args) => run_recognize(args),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

#[cfg(not(feature = "tracing"))]
fn init_logging(verbose: u8) {
    let level: LevelFilter = unistroke::core::level_from_verbosity(verbose);
    let _ = unistroke::core::init_with_level(level);
}

#[cfg(feature = "tracing")]
fn init_logging(verbose: u8) {
    let level: LevelFilter = unistroke::core::level_from_verbosity(verbose);
    let _ = tracing_log::LogTracer::init();
    log::set_max_level(level);
    unistroke::core::init_tracing(unistroke::core::TraceFormat::Text, level);
}

fn run_add(args: AddArgs) -> Result<(), CliError> {
    let mut record = GestureRecord::load_json(&args.gesture)?;
    if let Some(name) = args.name {
        record.name = name;
    }

    let mut library = GestureLibrary::load_or_default(&args.library)?;
    library.push(record.clone());
    // Rejects the whole library if the new stroke cannot be normalized.
    let recognizer = library.build_recognizer()?;
    library.write_json(&args.library)?;

    info!("library {} now holds {} gesture(s)", args.library.display(), recognizer.len());
    println!("added '{}' ({} templates)", record.name, recognizer.len());
    Ok(())
}

fn run_recognize(args: RecognizeArgs) -> Result<(), CliError> {
    let library = GestureLibrary::load_json(&args.library)?;
    let recognizer = library.build_recognizer()?;
    let gesture = GestureRecord::load_json(&args.gesture)?;

    let points = gesture.to_points();
    let scores = recognizer.score_all(&points)?;
    let best = *best_score(&scores).ok_or(RecognizeError::EmptyTemplateLibrary)?;

    let named = |s: &TemplateScore| ScoreReport {
        name: recognizer
            .template(s.index)
            .map(|t| t.name().to_string())
            .unwrap_or_default(),
        score: *s,
    };

    if args.json {
        let report = RecognizeReport {
            gesture_path: args.gesture.to_string_lossy().into_owned(),
            library_path: args.library.to_string_lossy().into_owned(),
            best: named(&best),
            scores: if args.all {
                scores.iter().map(named).collect()
            } else {
                Vec::new()
            },
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Match: {} Confidence: {:.4}", named(&best).name, best.score);
    if args.all {
        for s in &scores {
            let r = named(s);
            println!(
                "  #{:<3} {:<24} score {:.4} distance {:.3}{}",
                s.index,
                r.name,
                s.score,
                s.distance,
                if s.reversed { " (reversed)" } else { "" }
            );
        }
    }
    Ok(())
}
