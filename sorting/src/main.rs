use std::env;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

use sorting::{
    initial_layout, Algorithm, Config, Controller, JsonSink, RenderMode, RenderSink, TextSink,
};

fn menu() -> String {
    Algorithm::ALL
        .iter()
        .map(|a| a.name())
        .collect::<Vec<_>>()
        .join(", ")
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env().context("invalid SORT_* environment")?;
    let sink: Arc<dyn RenderSink> = match config.render {
        RenderMode::Text => Arc::new(TextSink::stdout()),
        RenderMode::Json => Arc::new(JsonSink::stdout()),
    };
    let controller = Controller::new(initial_layout(), &config, sink);

    info!(step_delay = ?config.step_delay, policy = ?config.run_policy, "ready");
    eprintln!("Algorithms: {}", menu());

    let args: Vec<String> = env::args().skip(1).collect();
    if !args.is_empty() {
        for name in &args {
            if controller.run(name).await {
                controller.wait().await;
            } else {
                eprintln!("Unknown algorithm {name:?}, skipping");
            }
        }
        return Ok(());
    }

    eprintln!("Type an algorithm name; empty line skips a pause, `cancel`, `list` or `quit`.");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("failed to read stdin")? {
        match line.trim() {
            "" => controller.interrupt_pause(),
            "quit" | "exit" => break,
            "list" => eprintln!("Algorithms: {}", menu()),
            "cancel" => {
                if let Some(report) = controller.cancel().await {
                    info!(algorithm = %report.algorithm, fast_forwarded = report.fast_forwarded, "cancelled");
                }
            }
            name => {
                controller.run(name).await;
            }
        }
    }

    if let Some(report) = controller.wait().await {
        info!(algorithm = %report.algorithm, steps = report.total_steps, "last run done");
    }
    Ok(())
}
