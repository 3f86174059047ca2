//! Newsbrief CLI - Extractive News Summarizer
//!
//! Command-line interface for summarizing articles and asking questions
//! about them.

use clap::{Parser, Subcommand, ValueEnum};
use log::{error, info};
use newsbrief::shell::{self, load_article, ArticleSource};
use newsbrief::{
    clean_text, split_sentences, BriefError, Config, QuestionAnswerer, Result, ScoringStrategy,
    Summarizer,
};
use serde_json::json;
use std::io;

#[derive(Parser)]
#[command(name = "newsbrief")]
#[command(author = "Newsbrief Contributors")]
#[command(version)]
#[command(about = "Summarize news articles and ask questions about them", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Paste an article, read its summary, then ask questions (default)
    Chat {
        /// Read the article from a file instead of pasting it. With "-" the
        /// article is read from stdin up to the first blank line and the
        /// questions follow it
        #[arg(short, long)]
        input: Option<String>,

        /// Number of sentences in the summary
        #[arg(short = 'n', long, default_value = "3")]
        max_sentences: usize,

        /// Sentence scoring strategy
        #[arg(short, long, value_enum, default_value = "frequency")]
        strategy: StrategyArg,
    },

    /// Print a summary of an article and exit
    Summarize {
        /// Input file (use "-" for stdin)
        #[arg(short, long)]
        input: Option<String>,

        /// Direct text input (alternative to --input)
        #[arg(short, long)]
        text: Option<String>,

        /// Number of sentences in the summary
        #[arg(short = 'n', long, default_value = "3")]
        max_sentences: usize,

        /// Sentence scoring strategy
        #[arg(short, long, value_enum, default_value = "frequency")]
        strategy: StrategyArg,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Answer a single question about an article and exit
    Ask {
        /// Input file (use "-" for stdin)
        #[arg(short, long)]
        input: Option<String>,

        /// Direct text input (alternative to --input)
        #[arg(short, long)]
        text: Option<String>,

        /// The question to answer
        question: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

// Mirrors ScoringStrategy so the library does not depend on clap.
#[derive(Clone, Copy, ValueEnum)]
enum StrategyArg {
    /// Rank sentences by the frequency of their words in the article
    Frequency,
    /// Rank sentences by length
    Length,
}

impl From<StrategyArg> for ScoringStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Frequency => ScoringStrategy::Frequency,
            StrategyArg::Length => ScoringStrategy::Length,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let command = cli.command.unwrap_or(Commands::Chat {
        input: None,
        max_sentences: newsbrief::DEFAULT_MAX_SENTENCES,
        strategy: StrategyArg::Frequency,
    });

    let result = match command {
        Commands::Chat {
            input,
            max_sentences,
            strategy,
        } => chat(input, max_sentences, strategy.into()),

        Commands::Summarize {
            input,
            text,
            max_sentences,
            strategy,
            format,
        } => summarize_article(input, text, max_sentences, strategy.into(), format),

        Commands::Ask {
            input,
            text,
            question,
            format,
        } => ask_question(input, text, question, format),
    };

    if let Err(e) = result {
        error!("Error: {}", e);
        std::process::exit(1);
    }
}

fn build_config(max_sentences: usize, strategy: ScoringStrategy) -> Result<Config> {
    let mut config = Config::default();
    config.summary.max_sentences = max_sentences;
    config.summary.strategy = strategy;
    config.validate()?;
    Ok(config)
}

fn read_nonempty_article(input: Option<String>, text: Option<String>) -> Result<String> {
    let article = load_article(input.as_deref(), text.as_deref())?;
    if article.trim().is_empty() {
        return Err(BriefError::EmptyInput("article text is blank".to_string()));
    }
    Ok(article)
}

fn chat(input: Option<String>, max_sentences: usize, strategy: ScoringStrategy) -> Result<()> {
    let config = build_config(max_sentences, strategy)?;

    let source = match input.as_deref() {
        Some("-") => ArticleSource::Stream,
        Some(path) => ArticleSource::Loaded(load_article(Some(path), None)?),
        None => ArticleSource::Paste,
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    shell::run_chat(&mut stdin.lock(), &mut stdout.lock(), &config, source)
}

fn summarize_article(
    input: Option<String>,
    text: Option<String>,
    max_sentences: usize,
    strategy: ScoringStrategy,
    format: OutputFormat,
) -> Result<()> {
    let config = build_config(max_sentences, strategy)?;
    let article = read_nonempty_article(input, text)?;

    let report = Summarizer::with_config(config.summary).summarize_report(&article);
    info!(
        "Kept {} of {} sentences",
        report.sentences.len(),
        report.sentence_count
    );

    match format {
        OutputFormat::Text => println!("{}", report.summary),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}

fn ask_question(
    input: Option<String>,
    text: Option<String>,
    question: String,
    format: OutputFormat,
) -> Result<()> {
    let config = Config::default();
    let article = read_nonempty_article(input, text)?;

    let sentences = split_sentences(&clean_text(&article));
    let answerer = QuestionAnswerer::with_config(config.question.clone());
    let answer = answerer.answer(&question, &sentences);

    let message = answer.message(&config.question);
    info!("Answered with {}", if answer.is_found() { "a sentence" } else { "a fallback" });

    match format {
        OutputFormat::Text => println!("{}", message),
        OutputFormat::Json => {
            let output = json!({
                "question": question,
                "answer": answer,
                "message": message,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
