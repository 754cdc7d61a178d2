use std::io::IsTerminal;
use std::process::{ExitCode, ExitStatus};

use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub mod config;
pub mod credentials;
pub mod fetch;
pub mod query;
pub mod report;

#[derive(Debug, thiserror::Error)]
pub enum DbSizeError {
    #[error("database credentials are not set in environment variables ({0})")]
    MissingCredentials(String),
    #[error("failed to run command {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to run command: {status}{}", fmt_output(.output))]
    ClientFailed { status: ExitStatus, output: String },
    #[error("io: {0}")]
    IoError(#[from] std::io::Error),
}

fn fmt_output(output: &str) -> String {
    match output.trim() {
        "" => String::new(),
        s => format!(": {}", s),
    }
}

use config::*;
use credentials::*;
use fetch::*;
use report::*;

pub async fn execute(source: &Source, config: &ClientConfig) -> Result<Report, DbSizeError> {
    let creds = source.resolve()?;
    let invocation = ClientInvocation::mysql(&config.program, &creds, query::SIZE_QUERY);
    debug!(command = %invocation, "invoking database client");

    let data = fetch(&invocation).await?;
    debug!(bytes = data.data.len(), "client finished");

    let report = Report::from_output(&data.data);
    info!(rows = report.rows.len(), "parsed client output");
    Ok(report)
}

pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // report goes to stdout, keep logs out of it
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false),
        )
        .try_init();
}

/// Shared body of both binaries: prints the report, or a fatal diagnostic
/// and a non-zero status.
pub async fn run<S: Into<Source>>(source: S) -> ExitCode {
    dotenvy::dotenv().ok();
    init_tracing();

    let source = source.into();
    let config = ClientConfig::from_env();
    match execute(&source, &config).await {
        Ok(report) => {
            print!("{}", report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            debug!(error = ?e, "fatal");
            eprintln!("dbsizes: {}", e);
            ExitCode::FAILURE
        }
    }
}
