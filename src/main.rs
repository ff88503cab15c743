use clap::Parser;
use inkpress::{ExportError, ExporterBuilder, Strategy, WidthScaling};
use log::{LevelFilter, info};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

/// Export a tablet notebook archive to PDF.
#[derive(Parser, Debug)]
#[command(name = "inkpress", version, about)]
struct Cli {
    /// Notebook archive (.zip) to read.
    input: PathBuf,

    /// PDF file to write.
    output: PathBuf,

    /// Render only this page (0-based) with the built-in stroke renderer.
    #[arg(long)]
    page: Option<usize>,

    /// JSON configuration file.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Scale stroke widths by pen pressure.
    #[arg(long)]
    pressure: bool,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn run(cli: Cli) -> Result<(), ExportError> {
    let mut builder = ExporterBuilder::new();
    if let Some(path) = &cli.config {
        builder = builder.with_config_file(path)?;
    }
    if cli.pressure {
        builder = builder.with_width_scaling(WidthScaling::pressure());
    }
    let orchestrator = builder.build()?;

    let strategy = match cli.page {
        Some(page) => Strategy::CustomSinglePage { page },
        None => Strategy::FullDocument,
    };

    let start = Instant::now();
    let mut document = orchestrator.export(strategy, &cli.input, &cli.output)?;
    document
        .close()
        .map_err(|source| ExportError::OutputIOFailed {
            action: "close output",
            source,
        })?;

    info!("Wrote {} in {:.2?}.", cli.output.display(), start.elapsed());
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("inkpress: {}", e);
            ExitCode::FAILURE
        }
    }
}
