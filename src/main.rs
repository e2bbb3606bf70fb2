//! Riskscan TUI entry point.

use std::io::IsTerminal;
use std::path::Path;

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use riskscan::adapters::sanitize::SanitizingMakeWriter;
use riskscan::adapters::ModelArtifacts;
use riskscan::tui::App;

/// Initialize logging.
///
/// Defaults to a log file when stdout is a terminal: the TUI owns the
/// alternate screen and interleaved log lines would corrupt it. Override
/// with `RISKSCAN_LOG_MODE=file|stdout`; the file path comes from
/// `RISKSCAN_LOG_FILE` (default `riskscan.log`).
fn init_logging() -> anyhow::Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let mode = std::env::var("RISKSCAN_LOG_MODE").unwrap_or_default();
    let to_file = match mode.as_str() {
        "file" => true,
        "stdout" => false,
        _ => std::io::stdout().is_terminal(),
    };

    if to_file {
        let path =
            std::env::var("RISKSCAN_LOG_FILE").unwrap_or_else(|_| "riskscan.log".to_string());
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("Failed to open log file '{path}'"))?;
        let (writer, guard) = tracing_appender::non_blocking(file);

        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(SanitizingMakeWriter::new(writer))
                    .with_ansi(false),
            )
            .init();
        Ok(Some(guard))
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(SanitizingMakeWriter::new(std::io::stdout)),
            )
            .init();
        Ok(None)
    }
}

fn main() -> anyhow::Result<()> {
    let _guard = init_logging()?;

    tracing::info!("Starting riskscan v{}", env!("CARGO_PKG_VERSION"));

    let models_dir =
        std::env::var("RISKSCAN_MODEL_PATH").unwrap_or_else(|_| "models".to_string());

    let artifacts = ModelArtifacts::load(Path::new(&models_dir))
        .with_context(|| format!("Failed to load model artifacts from '{models_dir}'"))?;

    let mut app = App::new(artifacts, models_dir);
    app.run()?;

    tracing::info!("Shutdown complete");
    Ok(())
}
