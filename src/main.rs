use std::fs::OpenOptions;
use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Mutex;

use clap::Parser;
use ratatui::DefaultTerminal;
use tracing::info;
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod controller;
mod domain;
mod model;
mod printer;
mod report;
mod roster;
mod table;
mod ui;

use controller::Controller;
use domain::{AppError, DEFAULT_LOG_FILE, Message, ReportConfig};
use model::{Model, Status};
use printer::{LinePrinter, Platform, Printer};
use report::format_report;
use roster::build_roster;
use ui::ReportUI;

/// Lists tournament competitors with missing registration data and prints the report.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Print command used instead of the platform default, e.g. "lp -d front-desk".
    /// The report is written to its standard input.
    #[arg(long)]
    printer: Option<String>,

    /// Log file, `~` and environment variables are expanded.
    #[arg(long, default_value = DEFAULT_LOG_FILE)]
    log_file: String,

    /// Log filter, overridden by RUST_LOG.
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Write the report to stdout instead of starting the UI. Nothing is logged.
    #[arg(long)]
    preview: bool,
}

impl Cli {
    fn config(&self) -> Result<ReportConfig, AppError> {
        let log_file = shellexpand::full(&self.log_file)
            .map_err(|e| AppError::LoggingFailed(e.to_string()))?;
        let mut cfg = ReportConfig::default()
            .with_log_file(log_file.into_owned())
            .with_log_level(self.log_level.as_str());
        if let Some(command) = &self.printer {
            cfg = cfg.with_printer_command(command.as_str());
        }
        Ok(cfg)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
        Ok(_) => ExitCode::SUCCESS,
    }
}

fn run(cli: &Cli) -> Result<(), AppError> {
    let cfg = cli.config()?;
    let table = build_roster();
    if cli.preview {
        io::stdout().write_all(format_report(&table).as_bytes())?;
        return Ok(());
    }

    init_logging(&cfg)?;

    let mut model = Model::new(table, select_printer(&cfg));
    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, &mut model, &cfg);
    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    model: &mut Model,
    cfg: &ReportConfig,
) -> Result<(), AppError> {
    let mut ui = ReportUI::new();
    let controller = Controller::new(cfg);

    let size = terminal.size()?;
    model.update(Message::Resize(size.width.into(), size.height.into()));

    while model.status != Status::QUITTING {
        // Render the current view
        terminal.draw(|f| ui.draw(model, f))?;

        // Handle events and map to a Message
        if let Some(message) = controller.handle_event()? {
            model.update(message);
        };
    }

    info!("Quitting ...");
    Ok(())
}

fn select_printer(cfg: &ReportConfig) -> Box<dyn Printer> {
    match cfg
        .printer_command
        .as_deref()
        .and_then(LinePrinter::from_command_line)
    {
        Some(printer) => {
            info!("Using configured print command {:?}", printer);
            Box::new(printer)
        }
        None => {
            let platform = Platform::detect();
            info!("Using default printer for {:?}", platform);
            platform.printer()
        }
    }
}

fn init_logging(cfg: &ReportConfig) -> Result<(), AppError> {
    // The terminal belongs to the UI, so logs go to a file.
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&cfg.log_file)?;
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cfg.log_level))
        .map_err(|e| AppError::LoggingFailed(e.to_string()))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
        .with(ErrorLayer::default())
        .try_init()
        .map_err(|e| AppError::LoggingFailed(e.to_string()))?;
    info!("Starting dojo-report!");
    Ok(())
}
