use clap::Parser;
use janitor_cli::{render, run, Cli};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    // stdout carries the report; diagnostics go to stderr.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "janitor_core=info,janitor_cli=info,media_janitor=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            tracing::error!("Failed to start runtime: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let report = match runtime.block_on(run(&cli)) {
        Ok(report) => report,
        Err(e) => {
            tracing::error!("{:#}", e);
            return ExitCode::FAILURE;
        }
    };

    match render(&report, cli.format) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Failed to render report: {}", e);
            ExitCode::FAILURE
        }
    }
}
