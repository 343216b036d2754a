mod cli;

use cli::Args;
use owo_colors::OwoColorize;
use sbom_compare::adapters::outbound::console::StderrProgressReporter;
use sbom_compare::adapters::outbound::filesystem::FileSystemDocumentReader;
use sbom_compare::adapters::outbound::network::{HttpCompareClient, HttpQualityClient};
use sbom_compare::application::dto::{CompareRequest, ComparisonResponse, QualityResult};
use sbom_compare::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use sbom_compare::application::read_models::ComparisonReportBuilder;
use sbom_compare::application::use_cases::{AnalyzeQualityUseCase, CompareDocumentsUseCase};
use sbom_compare::comparison::services::{ConflictFilter, NavigationState};
use sbom_compare::config::{self, ConfigFile, Settings};
use sbom_compare::ports::outbound::{ComparisonFormatter, OutputPresenter, ProgressReporter};
use sbom_compare::shared::error::ExitCode;
use sbom_compare::shared::Result;
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // clap exits with code 2 on invalid arguments and 0 for --help/--version
    let args = Args::parse_args();
    init_tracing(args.verbose);

    match run(args).await {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n{}\n", "❌ An error occurred:".red().bold());
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

/// Diagnostics go to stderr; `RUST_LOG` wins over `--verbose`
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

async fn run(args: Args) -> Result<ExitCode> {
    let config = load_config(&args)?;
    let settings = Settings::resolve(args.overrides(), config.as_ref())?;
    tracing::debug!(service_url = %settings.service_url, format = %settings.format, "settings resolved");

    let request = CompareRequest::new(args.target.clone(), args.others.clone())?;

    // Create adapters (Dependency Injection)
    let document_reader = FileSystemDocumentReader::new();
    let compare_client = HttpCompareClient::new(&settings.service_url, settings.timeout)?;
    let progress_reporter = StderrProgressReporter::new();

    let use_case = CompareDocumentsUseCase::new(document_reader, compare_client, progress_reporter);
    let response = use_case.execute(request).await?;

    let quality = if settings.quality {
        Some(analyze_quality(&settings, &response).await?)
    } else {
        None
    };

    // Build the root view and walk to the requested location
    let document_count = response.document_count();
    let mut filter = ConflictFilter::new();
    let root = if settings.conflicts_only {
        filter.toggle(&response.comparison, document_count)
    } else {
        filter.current_view(&response.comparison, document_count)
    };
    let mut navigation = NavigationState::new(root);
    if let Some(component) = &args.component {
        navigation.descend_into_component(component)?;
        if let Some(version) = &args.component_version {
            navigation.descend_into_version(version)?;
        }
    }

    let report = ComparisonReportBuilder::build(
        &response,
        &navigation,
        filter.is_filtered(),
        quality.as_deref(),
    );

    let reporter = StderrProgressReporter::new();
    reporter.report(FormatterFactory::progress_message(settings.format));
    let formatter = FormatterFactory::create(settings.format);
    let output = formatter.format(&report)?;

    let presenter = PresenterFactory::create(PresenterType::from_output(args.output.clone()));
    presenter.present(&output)?;

    if settings.fail_on_conflict && report.summary.divergent_components > 0 {
        reporter.report_error(&format!(
            "⚠️  {} divergent component(s) found across {} document(s)",
            report.summary.divergent_components, document_count
        ));
        return Ok(ExitCode::ConflictsDetected);
    }

    Ok(ExitCode::Success)
}

/// Explicit `--config` must exist; otherwise look for one in the working directory
fn load_config(args: &Args) -> Result<Option<ConfigFile>> {
    match &args.config {
        Some(path) => Ok(Some(config::load_config_from_path(path)?)),
        None => {
            let cwd = std::env::current_dir()?;
            config::discover_config(&cwd)
        }
    }
}

async fn analyze_quality(settings: &Settings, response: &ComparisonResponse) -> Result<Vec<QualityResult>> {
    let quality_client = HttpQualityClient::new(&settings.service_url, settings.timeout)?;
    let use_case = AnalyzeQualityUseCase::new(
        FileSystemDocumentReader::new(),
        quality_client,
        StderrProgressReporter::new(),
    );

    let documents: Vec<_> = response.documents.iter().cloned().collect();
    Ok(use_case.execute(&documents).await)
}
