use clap::{Parser, ValueEnum};
use miette::{IntoDiagnostic, Result};
use payrate::application::demo;
use payrate::domain::ports::EventSink;
use payrate::interfaces::csv::event_writer::CsvEventWriter;
use payrate::interfaces::json::JsonEventWriter;
use payrate::interfaces::text::TextEventWriter;
use std::io;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    /// One human-readable line per event
    Text,
    /// `event,source,value` rows with a header
    Csv,
    /// One JSON object per line
    Json,
}

/// Demonstrates swappable payment behaviors and exchange rate subscribers.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output format for the demonstration events
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout only carries events. Set RUST_LOG to see them.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let stdout = io::stdout();
    let mut sink: Box<dyn EventSink> = match cli.format {
        OutputFormat::Text => Box::new(TextEventWriter::new(stdout.lock())),
        OutputFormat::Csv => Box::new(CsvEventWriter::new(stdout.lock())),
        OutputFormat::Json => Box::new(JsonEventWriter::new(stdout.lock())),
    };

    demo::run(sink.as_mut()).into_diagnostic()?;

    Ok(())
}
