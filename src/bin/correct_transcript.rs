use std::path::{Path, PathBuf};

use chrono::Utc;
use clap::{Parser, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use refalign_rs::formats::{
    read_hypothesis_csv, read_hypothesis_json, read_reference_text, words_to_csv, words_to_text,
};
use refalign_rs::{AlignConfig, AlignError, TranscriptCorrector, TranscriptCorrectorBuilder};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Csv,
    Json,
    Text,
}

impl OutputFormat {
    fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Text => "txt",
        }
    }
}

/// Align recognizer transcripts against a trusted reference text and write
/// corrected word timings.
#[derive(Debug, Parser)]
#[command(name = "correct_transcript")]
struct Cli {
    /// Hypothesis word files (.json recognizer output or .csv word rows),
    /// one per chapter.
    #[arg(required = true)]
    hypothesis: Vec<PathBuf>,

    /// Reference text file the transcripts are corrected against.
    #[arg(long, short)]
    reference: PathBuf,

    /// Directory for corrected output files; defaults to each input's
    /// directory.
    #[arg(long)]
    out_dir: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,

    /// Write a JSON run report to this path.
    #[arg(long)]
    report: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct RunReport {
    generated_at: String,
    reference_path: String,
    chapters: Vec<ChapterReport>,
}

#[derive(Debug, Serialize)]
struct ChapterReport {
    input_path: String,
    output_path: String,
    hypothesis_words: usize,
    corrected_words: usize,
    trailer_words: usize,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        tracing::error!(error = %err, "correction run failed");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), AlignError> {
    let reference_text = read_reference_text(&cli.reference)?;
    let corrector = TranscriptCorrectorBuilder::new(AlignConfig::default()).build()?;
    let trailer_confidence = corrector.config().trailer_confidence;

    let progress = ProgressBar::new(cli.hypothesis.len() as u64).with_style(
        ProgressStyle::with_template("{bar:36} {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let mut chapters = Vec::with_capacity(cli.hypothesis.len());
    for input in &cli.hypothesis {
        progress.set_message(
            input
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
        );
        chapters.push(correct_one(
            &corrector,
            input,
            &reference_text,
            cli,
            trailer_confidence,
        )?);
        progress.inc(1);
    }
    progress.finish_and_clear();

    if let Some(report_path) = &cli.report {
        let report = RunReport {
            generated_at: Utc::now().to_rfc3339(),
            reference_path: cli.reference.display().to_string(),
            chapters,
        };
        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| AlignError::Json {
                context: "serialize run report",
                source: e,
            })?;
        std::fs::write(report_path, json).map_err(|e| AlignError::Io {
            context: "write run report",
            source: e,
        })?;
    }

    Ok(())
}

fn correct_one(
    corrector: &TranscriptCorrector,
    input: &Path,
    reference_text: &str,
    cli: &Cli,
    trailer_confidence: f64,
) -> Result<ChapterReport, AlignError> {
    let hypothesis = match input.extension().and_then(|e| e.to_str()) {
        Some("csv") => read_hypothesis_csv(input)?,
        _ => read_hypothesis_json(input)?,
    };

    let corrected = corrector.correct(&hypothesis, reference_text);
    let trailer_words = corrected
        .words
        .iter()
        .filter(|w| w.confidence == trailer_confidence)
        .count();

    let output_path = output_path_for(input, cli);
    let rendered = match cli.format {
        OutputFormat::Csv => words_to_csv(&corrected.words),
        OutputFormat::Json => serde_json::to_string_pretty(&corrected.words)
            .map_err(|e| AlignError::Json {
                context: "serialize corrected words",
                source: e,
            })?,
        OutputFormat::Text => {
            let mut text = words_to_text(&corrected.words);
            text.push('\n');
            text
        }
    };
    std::fs::write(&output_path, rendered).map_err(|e| AlignError::Io {
        context: "write corrected transcript",
        source: e,
    })?;

    tracing::info!(
        input = %input.display(),
        output = %output_path.display(),
        hypothesis_words = hypothesis.len(),
        corrected_words = corrected.words.len(),
        "chapter corrected"
    );

    Ok(ChapterReport {
        input_path: input.display().to_string(),
        output_path: output_path.display().to_string(),
        hypothesis_words: hypothesis.len(),
        corrected_words: corrected.words.len(),
        trailer_words,
    })
}

fn output_path_for(input: &Path, cli: &Cli) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "transcript".to_string());
    let file_name = format!("{stem}.corrected.{}", cli.format.extension());
    match &cli.out_dir {
        Some(dir) => dir.join(file_name),
        None => input.with_file_name(file_name),
    }
}
