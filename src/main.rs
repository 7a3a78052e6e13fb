use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use recap::{
    extract_action_items_tagged, read_transcript_file, split_sentences, HumanSummary, Strategy,
    SummarizerConfig, Summarizer, SummaryReport, TranscriptDocument, TranscriptStats,
    WordFrequencyTable,
};

#[derive(Parser)]
#[command(name = "recap")]
#[command(author, version, about = "Extractive transcript summarizer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize a transcript into summary, key points and action items
    Summarize {
        /// Input transcript (plain text or JSON with a "text" field); stdin if omitted
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file for the JSON report; stdout if omitted
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output file for a human-readable report
        #[arg(long)]
        human_readable: Option<PathBuf>,

        /// Number of summary sentences, 1-20 (defaults to SUMMARY_SENTENCE_COUNT or 5)
        #[arg(short = 'n', long, value_parser = clap::value_parser!(u64).range(1..=20))]
        sentences: Option<u64>,

        /// Maximum number of key points, 1-7
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..=7))]
        max_key_points: Option<u64>,

        /// Summarize map-reduce segments on the current thread
        #[arg(long)]
        sequential: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show transcript statistics without summarizing
    Analyze {
        /// Input transcript; stdin if omitted
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Number of top terms to list
        #[arg(long, default_value = "10")]
        top_terms: usize,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Summarize {
            input,
            output,
            human_readable,
            sentences,
            max_key_points,
            sequential,
            verbose,
        } => {
            setup_logging(verbose);
            summarize_transcript(
                input,
                output,
                human_readable,
                sentences,
                max_key_points,
                sequential,
            )
        }
        Commands::Analyze {
            input,
            top_terms,
            verbose,
        } => {
            setup_logging(verbose);
            analyze_transcript(input, top_terms)
        }
    }
}

/// `--verbose` forces DEBUG; otherwise `RUST_LOG` is honoured, defaulting to INFO
fn setup_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

fn load_transcript(input: Option<PathBuf>) -> Result<TranscriptDocument> {
    match input {
        Some(path) => {
            info!("Loading transcript from {:?}", path);
            read_transcript_file(&path)
        }
        None => {
            info!("Reading transcript from stdin");
            recap::io::read_transcript_stdin()
        }
    }
}

fn to_count(value: u64) -> Result<usize> {
    usize::try_from(value).context("Count does not fit in usize")
}

fn summarize_transcript(
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    human_readable: Option<PathBuf>,
    sentences: Option<u64>,
    max_key_points: Option<u64>,
    sequential: bool,
) -> Result<()> {
    let mut config = SummarizerConfig::from_env().context("Invalid summarizer configuration")?;
    if let Some(max) = max_key_points {
        config.max_key_points = to_count(max)?;
    }
    if sequential {
        config.parallel_segments = false;
    }
    let target = match sentences {
        Some(n) => to_count(n)?,
        None => config.default_sentence_count,
    };
    let summarizer = Summarizer::with_config(config)?;

    let document = load_transcript(input)?;

    let outcome = summarizer.run(&document.text, target)?;
    info!(
        "Summarized {} sentences via {:?}: {} key points, {} action items",
        outcome.sentence_count,
        outcome.strategy,
        outcome.result.key_points.len(),
        outcome.result.action_items.len()
    );

    let report = SummaryReport::new(&document, outcome, Utc::now());
    info!("Transcript has {} words", report.stats.word_count);

    match output {
        Some(path) => {
            report.write_json(&path)?;
            info!("Report written to {:?}", path);
        }
        None => println!("{}", report.to_json_string()?),
    }

    if let Some(path) = human_readable {
        HumanSummary::new(&report).write_file(&path)?;
        info!("Human-readable report written to {:?}", path);
    }

    Ok(())
}

fn analyze_transcript(input: Option<PathBuf>, top_terms: usize) -> Result<()> {
    let config = SummarizerConfig::from_env().context("Invalid summarizer configuration")?;
    let summarizer = Summarizer::with_config(config)?;
    let document = load_transcript(input)?;

    let stats = TranscriptStats::from_text(&document.text);
    let strategy = summarizer.strategy_for(stats.sentence_count);

    println!("Transcript Analysis");
    println!("===================");
    println!("Words: {}", stats.word_count);
    println!("Sentences: {}", stats.sentence_count);
    if let Some(language) = &document.language {
        println!("Language: {}", language);
    }
    match strategy {
        Strategy::Direct => println!("Strategy: direct"),
        Strategy::MapReduce => println!(
            "Strategy: map-reduce ({} segments of up to {} sentences)",
            stats.sentence_count.div_ceil(summarizer.config().segment_size),
            summarizer.config().segment_size
        ),
    }
    println!();

    println!("Top Terms");
    println!("---------");
    let table = WordFrequencyTable::build(&split_sentences(&document.text));
    for (term, frequency) in table.top_terms(top_terms) {
        println!("{:<20} {:.2}", term, frequency);
    }
    println!();

    println!("Action Items");
    println!("------------");
    let items = extract_action_items_tagged(&document.text);
    if items.is_empty() {
        println!("(none)");
    }
    for item in items {
        println!("[{:?}] {}", item.kind, item.text);
    }

    Ok(())
}
