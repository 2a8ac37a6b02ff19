//! Clarity terminal client.
//!
//! # Architecture Overview
//!
//! ```text
//!   ┌───────────────────────────────────────────────────────────────┐
//!   │                         clarity                               │
//!   │                                                               │
//!   │   stdin ──▶ shell ──▶ App ──┬──▶ endpoint selector            │
//!   │                             │        │                        │
//!   │                             │        ▼                        │
//!   │   timer ──▶ HealthMonitor ──┼──▶ HealthProber ──── GET  ──────┼──▶ /api/health
//!   │                             │                                 │
//!   │                             └──▶ Submitter ─────── POST ──────┼──▶ /api/correct
//!   │                                      │                        │
//!   │                                      ▼                        │
//!   │   stdout ◀── render ◀──────────── Workbench                   │
//!   └───────────────────────────────────────────────────────────────┘
//! ```

use std::process::ExitCode;

use clap::Parser;
use tokio::io::AsyncReadExt;

use clarity_client::cli::{Cli, Commands};
use clarity_client::config::{load_or_default, ClientConfig};
use clarity_client::correction::SubmitOutcome;
use clarity_client::health::ConnectivityStatus;
use clarity_client::lifecycle::signals::spawn_ctrl_c_handler;
use clarity_client::observability::{logging, metrics};
use clarity_client::shell::{self, render};
use clarity_client::{App, Shutdown};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut config = match load_or_default(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("clarity: {e}");
            return ExitCode::from(2);
        }
    };
    cli.apply_overrides(&mut config);

    logging::init_logging(&config.observability.log_level);
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "clarity starting");

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    match run(cli.command.unwrap_or(Commands::Shell), config).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("clarity: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Commands, config: ClientConfig) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let app = App::from_config(&config)?;
    let shutdown = Shutdown::new();
    spawn_ctrl_c_handler(shutdown.clone());

    match command {
        Commands::Shell => {
            let monitor = app.start(&shutdown).await;
            shell::run(&app, &config, &shutdown).await?;
            let _ = monitor.await;
            // A pending stdin read lives on a blocking thread that runtime
            // shutdown would wait on.
            std::process::exit(0);
        }
        Commands::Health => {
            let status = app.monitor().perform_health_check().await;
            println!("{}", render::header(&app.workbench().snapshot()));
            Ok(match status {
                ConnectivityStatus::Online => ExitCode::SUCCESS,
                ConnectivityStatus::Offline => ExitCode::FAILURE,
            })
        }
        Commands::Correct { file } => {
            let source = match file {
                Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)?,
                _ => {
                    let mut source = String::new();
                    tokio::io::stdin().read_to_string(&mut source).await?;
                    source
                }
            };
            Ok(correct_once(&app, &source).await)
        }
        Commands::Watch => {
            let mut status_rx = app.workbench().subscribe_status();
            let monitor = app.start(&shutdown).await;
            println!("{}", render::header(&app.workbench().snapshot()));
            loop {
                tokio::select! {
                    changed = status_rx.changed() => {
                        if changed.is_err() {
                            break;
                        }
                        let connectivity = status_rx.borrow_and_update().clone();
                        println!("{}", render::status_line(&connectivity));
                    }
                    _ = shutdown.triggered() => break,
                }
            }
            let _ = monitor.await;
            Ok(ExitCode::SUCCESS)
        }
    }
}

async fn correct_once(app: &App, source: &str) -> ExitCode {
    match app.submit(source).await {
        SubmitOutcome::Skipped => {
            eprintln!("clarity: nothing to correct");
            ExitCode::from(2)
        }
        SubmitOutcome::Busy => ExitCode::FAILURE,
        SubmitOutcome::Corrected { response, latency } => {
            println!("{}", response.corrected_code);
            let language = response.language.map(|l| l.name).unwrap_or_default();
            eprintln!("Latency: {}ms {language}", latency.as_millis());
            ExitCode::SUCCESS
        }
        SubmitOutcome::Failed { .. } => {
            eprintln!("{}", app.workbench().output_text());
            ExitCode::FAILURE
        }
    }
}
