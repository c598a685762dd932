mod logging;
mod metrics;
mod model;
mod pipeline;
mod report;
mod tokenize;
mod translate;

use std::io::{IsTerminal, Read};

use clap::{Args, Parser, Subcommand};
use thiserror::Error;

use crate::model::language::TargetLanguage;
use crate::pipeline::evaluate::{EvalError, EvaluationRequest, evaluate};
use crate::report::{ReportError, ReportFormat, write_report};
use crate::tokenize::TokenizerKind;
use crate::translate::{
    DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS, FixedTranslator, GoogleTranslator, ReferenceTranslator,
    TranslatorConfig,
};

#[derive(Parser, Debug)]
#[command(name = "transeval", version)]
#[command(about = "Score a translation against a machine reference with BLEU and ROUGE-1")]
struct Cli {
    /// Debug logging on stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch a reference translation and score the candidate against it
    Eval(EvalArgs),
    /// Score the candidate against a reference given on the command line
    Score(ScoreArgs),
    /// List supported target languages
    Languages,
}

#[derive(Args, Debug)]
struct EvalArgs {
    /// Source text in English, or `-` for stdin
    #[arg(long)]
    source: String,

    #[command(flatten)]
    scoring: ScoringArgs,

    /// Translation service base URL
    #[arg(long, env = "TRANSEVAL_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Request timeout in seconds
    #[arg(long, env = "TRANSEVAL_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,
}

#[derive(Args, Debug)]
struct ScoreArgs {
    /// Source text, or `-` for stdin
    #[arg(long)]
    source: String,

    /// Reference translation, or `-` for stdin
    #[arg(long)]
    reference: String,

    #[command(flatten)]
    scoring: ScoringArgs,
}

#[derive(Args, Debug)]
struct ScoringArgs {
    /// Your translation, or `-` for stdin
    #[arg(long)]
    candidate: String,

    /// Target language (fr|de|es or its English name)
    #[arg(short, long, default_value = "fr")]
    lang: TargetLanguage,

    #[arg(long, value_enum, default_value_t = TokenizerKind::Mteval13a)]
    tokenize: TokenizerKind,

    /// Lowercase both texts before tokenizing
    #[arg(long)]
    lowercase: bool,

    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Eval(#[from] EvalError),
    #[error(transparent)]
    Report(#[from] ReportError),
    #[error("{0}")]
    Input(String),
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    if let Err(err) = run(cli) {
        tracing::error!(%err, "aborted");
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Eval(args) => {
            let mut stdin = StdinText::default();
            let source = stdin.resolve(&args.source)?;
            let candidate = stdin.resolve(&args.scoring.candidate)?;
            let translator = GoogleTranslator::new(TranslatorConfig {
                endpoint: args.endpoint,
                timeout_secs: args.timeout_secs,
            })
            .map_err(EvalError::from)?;
            score_and_report(&args.scoring, source, candidate, &translator)
        }
        Command::Score(args) => {
            let mut stdin = StdinText::default();
            let source = stdin.resolve(&args.source)?;
            let reference = stdin.resolve(&args.reference)?;
            let candidate = stdin.resolve(&args.scoring.candidate)?;
            let translator = FixedTranslator::new(reference);
            score_and_report(&args.scoring, source, candidate, &translator)
        }
        Command::Languages => {
            for lang in TargetLanguage::all() {
                println!("{}\t{}", lang.code(), lang.name());
            }
            Ok(())
        }
    }
}

fn score_and_report(
    scoring: &ScoringArgs,
    source: String,
    candidate: String,
    translator: &dyn ReferenceTranslator,
) -> Result<(), CliError> {
    let request = EvaluationRequest {
        source_text: source,
        candidate_text: candidate,
        language: scoring.lang,
        lowercase: scoring.lowercase,
    };
    let tokenizer = scoring.tokenize.build();
    let result = evaluate(&request, translator, tokenizer.as_ref())?;

    let stdout = std::io::stdout();
    let color = scoring.format == ReportFormat::Text
        && stdout.is_terminal()
        && std::env::var_os("NO_COLOR").is_none();
    write_report(&mut stdout.lock(), &result, scoring.format, color)?;
    Ok(())
}

/// Hands stdin to at most one `-` argument per invocation.
#[derive(Debug, Default)]
struct StdinText {
    used: bool,
}

impl StdinText {
    fn resolve(&mut self, value: &str) -> Result<String, CliError> {
        if value != "-" {
            return Ok(value.to_string());
        }
        if self.used {
            return Err(CliError::Input(
                "only one argument may be read from stdin".to_string(),
            ));
        }
        self.used = true;
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| CliError::Input(format!("failed to read stdin: {}", e)))?;
        Ok(buf)
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
