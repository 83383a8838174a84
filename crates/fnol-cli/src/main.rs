//! FNOL CLI - extract, route, and validate First Notice of Loss documents.

use clap::Parser;
use fnol_cli::{cli::Cli, config::Config, output, prompt, Result};
use fnol_llm::{GroqProvider, ReasoningConfig};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        // Fatal errors produce a single structured payload and no
        // partial output.
        eprintln!("{}", serde_json::json!({ "error": e.to_string() }));
        std::process::exit(2);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let config = Config::load(cli.config.as_deref())?;
    let provider = build_provider(&cli, &config)?;

    let extraction = fnol_extractor::extract_file(&cli.path)?;

    if let Some(expected_path) = &cli.expected {
        let expected = fnol_validator::load_expected(expected_path)?;
        let mut report = fnol_validator::validate(&expected, extraction);
        debug!(raw_text_length = report.raw_text_length, "Validation complete");

        if let Some(provider) = provider {
            let prompt = prompt::validation_prompt(&report, &expected);
            if let Some(text) = attempt_reasoning(&provider, &prompt).await {
                report.reasoning = text;
            }
        }
        output::emit(&report, cli.output.as_deref())?;
    } else {
        let mut extraction = extraction;
        let raw_text_length = extraction.raw_text_length();
        // Raw text is discarded before the output record exists
        drop(extraction.take_raw_text());

        let mut record = fnol_router::build_output(&extraction.fields);
        debug!(raw_text_length, "Extraction and routing complete");

        if let Some(provider) = provider {
            let prompt = prompt::extraction_prompt(&record, raw_text_length);
            if let Some(text) = attempt_reasoning(&provider, &prompt).await {
                record.reasoning = text;
            }
        }
        output::emit(&record, cli.output.as_deref())?;
    }

    Ok(())
}

/// Build the reasoning provider, or `None` when reasoning is disabled or
/// unconfigured. An incomplete `[reasoning]` section fails fast.
fn build_provider(cli: &Cli, config: &Config) -> Result<Option<GroqProvider>> {
    if cli.no_reasoning {
        return Ok(None);
    }
    let settings = match &config.reasoning {
        Some(settings) => settings,
        None => {
            debug!("No reasoning configuration; keeping router-generated reason");
            return Ok(None);
        }
    };
    let reasoning_config =
        ReasoningConfig::new(settings.api_key.clone(), settings.model.clone())?;
    Ok(Some(GroqProvider::new(reasoning_config)?))
}

/// One reasoning round-trip. The routing decision is already final; a
/// failure here is surfaced on stderr and the machine reason stands.
async fn attempt_reasoning(provider: &GroqProvider, prompt: &str) -> Option<String> {
    match provider.explain(prompt).await {
        Ok(text) => Some(text),
        Err(e) => {
            warn!("Reasoning call failed: {}", e);
            eprintln!("{}", serde_json::json!({ "error": e.to_string() }));
            None
        }
    }
}

fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
