use anyhow::Result;
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use sam_domain_check::report::{self, OutputFormat};
use sam_domain_check::template::{DEFAULT_TEMPLATE_PATH, Template};
use sam_domain_check::validation::validate_custom_domain;

#[derive(Parser)]
#[command(
    name = "sam-domain-check",
    about = "Sanity-check the CloudFront custom domain wiring of a SAM template",
    version,
    long_about = None
)]
struct Cli {
    /// Path to the template to check
    #[arg(
        short,
        long,
        env = "SAM_DOMAIN_CHECK_TEMPLATE",
        default_value = DEFAULT_TEMPLATE_PATH
    )]
    template: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Enable verbose output (use -vv for debug output)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match check_command(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = match verbose {
        0 => EnvFilter::new("sam_domain_check=warn"),
        1 => EnvFilter::new("sam_domain_check=info"),
        _ => EnvFilter::new("sam_domain_check=debug"),
    };

    // stdout carries the report
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

/// Returns whether the template passed.
fn check_command(cli: &Cli) -> Result<bool> {
    tracing::info!("Checking template: {}", cli.template.display());

    let mut out = io::stdout().lock();

    let template = match Template::load(&cli.template) {
        Ok(template) => template,
        Err(e) => {
            report::render_load_error(cli.format, &cli.template, &e, &mut out)?;
            out.flush()?;
            return Ok(false);
        }
    };

    let findings = validate_custom_domain(template.text());
    report::render(cli.format, &template, &findings, &mut out)?;
    out.flush()?;

    if findings.is_empty() {
        tracing::info!("Template passed all checks");
    } else {
        tracing::info!("Template failed {} check(s)", findings.len());
    }
    Ok(findings.is_empty())
}
