//! CLI entrypoint for SimpleQA
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use simpleqa_application::{AnswerQueryUseCase, DatasetSource};
use simpleqa_domain::Query;
use simpleqa_infrastructure::{
    ConfigLoader, DatasetCache, GeminiGenerator, HuggingFaceDatasetSource, JsonlTranscriptLogger,
};
use simpleqa_presentation::{AnswerSpinner, ChatRepl, Cli, ConsoleFormatter, OutputFormat};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // Load and merge configuration
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("failed to load configuration")?
    };

    // CLI flags override config files
    if let Some(model) = &cli.model {
        config.model.name = model.clone();
    }
    if let Some(dataset) = &cli.dataset {
        config.dataset.name = dataset.clone();
    }
    if let Some(split) = &cli.split {
        config.dataset.split = split.clone();
    }
    if let Some(threshold) = cli.threshold {
        config.matcher.threshold = threshold;
    }
    if cli.offline {
        config.dataset.offline = true;
    }
    if cli.quiet {
        config.repl.show_progress = false;
    }

    config.validate().context("invalid configuration")?;

    if !config.output.color {
        colored::control::set_override(false);
    }

    // Fatal startup condition: the API credential must be present even for
    // queries the dataset could answer
    let api_key = match std::env::var("GEMINI_API_KEY") {
        Ok(key) if !key.trim().is_empty() => key,
        _ => bail!(
            "GEMINI_API_KEY is not set. Export it in your environment before starting simpleqa."
        ),
    };

    info!("Starting SimpleQA");

    // === Dependency Injection ===
    let timeout = config.model.timeout_seconds.map(Duration::from_secs);
    let generator = Arc::new(
        GeminiGenerator::new(api_key, &config.model.name, timeout)
            .context("failed to initialize Gemini client")?,
    );

    let mut source =
        HuggingFaceDatasetSource::new(&config.dataset.name, &config.dataset.split)
            .offline(config.dataset.offline);
    if let Some(cache) = DatasetCache::for_dataset(&config.dataset.name, &config.dataset.split) {
        source = source.with_cache(cache);
    }

    // Fatal startup condition: an unloadable or misshapen dataset halts the
    // application with a user-facing message
    let dataset = Arc::new(
        source
            .load()
            .await
            .with_context(|| format!("error loading dataset '{}'", config.dataset.name))?,
    );
    info!(records = dataset.len(), "dataset ready");

    let mut use_case = AnswerQueryUseCase::new(dataset.clone(), generator)
        .with_threshold(config.matcher.threshold);

    if let Some(path) = &cli.transcript
        && let Some(logger) = JsonlTranscriptLogger::new(path)
    {
        use_case = use_case.with_transcript_logger(Arc::new(logger));
    }

    // Chat mode
    if cli.chat {
        let repl = ChatRepl::new(use_case, &config.model.name, dataset.len())
            .with_progress(config.repl.show_progress)
            .with_history_file(config.repl.history_file.as_ref().map(Into::into));

        repl.run().await?;
        return Ok(());
    }

    // Single question mode - a non-blank question is required
    let question = match cli.question.and_then(Query::try_new) {
        Some(q) => q,
        None => bail!("Question is required. Use --chat for interactive mode."),
    };

    let spinner = AnswerSpinner::start(config.repl.show_progress);
    let answered = use_case.execute(question.content()).await;
    spinner.finish();

    let output = match cli.output {
        OutputFormat::Text => ConsoleFormatter::format_answer(&answered),
        OutputFormat::Json => ConsoleFormatter::format_json(&answered),
    };

    print!("{}", output);

    Ok(())
}
