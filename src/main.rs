use clap::Parser;
use shipscope::prelude::*;
use std::process::ExitCode;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let config = SessionConfig::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.log_level.clone()),
        )
        .with_writer(std::io::stderr)
        .try_init()
        .ok();

    match run(config).await {
        Ok(end) => {
            tracing::debug!(end = ?end, "Exiting");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %format!("{e:#}"), "shipscope failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: SessionConfig) -> anyhow::Result<SessionEnd> {
    let records = load_records(&config.data, config.format).await?;

    let settings = config.command_settings();
    match serde_json::to_string(&settings) {
        Ok(json) => tracing::debug!(settings = %json, "Command settings"),
        Err(e) => tracing::warn!(error = %e, "Could not serialize command settings"),
    }
    let dispatcher = Dispatcher::defaults(settings)?;

    if config.is_scripted() {
        let mut stdout = std::io::stdout();
        return Session::run_script(&dispatcher, &records, &config.commands, &mut stdout).await;
    }

    let cancel = CancellationToken::new();
    let interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Interrupt received");
            interrupt.cancel();
        }
    });

    let io = Arc::new(StdinInteraction::new());
    io.notify(WELCOME_MESSAGE).await?;
    let end = Session::new(&dispatcher, &records, io.clone())
        .with_prompt(config.prompt.clone())
        .with_cancellation(cancel)
        .run()
        .await?;
    if end != SessionEnd::Exit {
        io.notify("\n").await?;
    }
    Ok(end)
}
