mod cli;
mod config;
mod logging;

use bom_graph::adapters::outbound::console::StderrProgressReporter;
use bom_graph::adapters::outbound::network::DEFAULT_TIMEOUT;
use bom_graph::application::dto::AnalysisRequest;
use bom_graph::application::factories::{
    FormatterFactory, PresenterFactory, PresenterType, SourceFactory, SourceType,
};
use bom_graph::application::store::BomStore;
use bom_graph::application::use_cases::AnalyzeBomUseCase;
use bom_graph::bom_analysis::services::{BomValidator, ValidationOptions};
use bom_graph::shared::error::{BomError, ExitCode};
use bom_graph::shared::Result;
use cli::Args;
use config::ConfigFile;
use logging::LoggingConfig;
use std::path::Path;
use std::process;
use std::time::Duration;

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            exit_code_for(&e)
        }
    };

    process::exit(exit_code.as_i32());
}

async fn run() -> Result<ExitCode> {
    let Args {
        input,
        api_url,
        format,
        output,
        config: config_path,
        log_level,
        quiet,
        command,
    } = Args::parse_args();

    // Config file: explicit path, or auto-discovered in the working directory
    let config = match config_path {
        Some(path) => config::load_config_from_path(&path)?,
        None => config::discover_config(Path::new("."))?.unwrap_or_default(),
    };

    logging::init_logging(&LoggingConfig {
        level: log_level
            .or_else(|| config.log_level.clone())
            .unwrap_or_else(|| logging::DEFAULT_LOG_LEVEL.to_string()),
        format: config.log_format.unwrap_or_default(),
    })?;

    let source_type = resolve_source(input, api_url, &config)?;
    let format = format.or_else(|| config.output_format()).unwrap_or_default();
    tracing::debug!(?source_type, %format, "resolved settings");

    // Create adapters (Dependency Injection)
    let source = SourceFactory::create(source_type)?;
    let store = BomStore::with_policy(source, config.stale_data.unwrap_or_default());
    let progress_reporter = if quiet {
        StderrProgressReporter::quiet()
    } else {
        StderrProgressReporter::new()
    };
    let validator = BomValidator::with_options(ValidationOptions {
        allow_leaf_items: config.allow_leaf_items.unwrap_or(false),
    });

    let mut use_case = AnalyzeBomUseCase::new(store, progress_reporter, validator);
    let response = use_case
        .execute(AnalysisRequest::new(command.analysis_kind()))
        .await?;

    if !quiet {
        eprintln!("{}", FormatterFactory::progress_message(format));
    }
    let formatted_output = FormatterFactory::create(format).format(&response)?;
    PresenterFactory::create(PresenterType::from(output)).present(&formatted_output)?;

    if response.report.has_validation_errors() {
        Ok(ExitCode::ValidationFailed)
    } else {
        Ok(ExitCode::Success)
    }
}

/// Picks the BOM source. Command-line flags win over the config file.
fn resolve_source(
    input: Option<std::path::PathBuf>,
    api_url: Option<String>,
    config: &ConfigFile,
) -> Result<SourceType> {
    let timeout = config
        .timeout_secs
        .map(Duration::from_secs)
        .unwrap_or(DEFAULT_TIMEOUT);

    if let Some(path) = input {
        return Ok(SourceType::File(path));
    }
    if let Some(base_url) = api_url {
        return Ok(SourceType::Api { base_url, timeout });
    }
    if let Some(path) = config.input.clone() {
        return Ok(SourceType::File(path));
    }
    if let Some(base_url) = config.api_url.clone() {
        return Ok(SourceType::Api { base_url, timeout });
    }

    Err(BomError::Validation {
        message: "no BOM source given.\n\n💡 Hint: Pass --input <file> or --api-url <url>, or set 'input' or 'api_url' in bom-graph.config.yml".to_string(),
    }
    .into())
}

/// Invalid user input exits with 2, every other failure with 3
fn exit_code_for(error: &anyhow::Error) -> ExitCode {
    match error.downcast_ref::<BomError>() {
        Some(BomError::Validation { .. }) => ExitCode::InvalidArguments,
        _ => ExitCode::ApplicationError,
    }
}
