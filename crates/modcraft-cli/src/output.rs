//! Terminal output: status lines, scaffold reports and spinners.

use std::io::{self, IsTerminal};
use std::path::Path;
use std::time::Duration;

use console::Term;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;

use modcraft_core::application::ScaffoldReport;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;
use crate::error::CliResult;

/// Writes command results to stdout, honouring quiet mode, colour settings
/// and the output format.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let resolved_format = if args.output_format == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            args.output_format
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format != OutputFormat::Human,
            term: Term::stdout(),
        }
    }

    /// Write one line unless quiet.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.status(Status::Success, msg)
    }

    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.status(Status::Warning, msg)
    }

    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.status(Status::Info, msg)
    }

    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.no_color {
            self.print(text)
        } else {
            self.print(&text.cyan().bold().to_string())
        }
    }

    fn status(&self, status: Status, msg: &str) -> io::Result<()> {
        let symbol = status.symbol();
        if self.no_color {
            return self.print(&format!("{symbol} {msg}"));
        }
        let line = match status {
            Status::Success => format!("{} {}", symbol.green().bold(), msg.green()),
            Status::Warning => format!("{} {}", symbol.yellow().bold(), msg.yellow()),
            Status::Info => format!("{} {}", symbol.blue().bold(), msg),
        };
        self.print(&line)
    }

    /// Print what one scaffold operation did.
    ///
    /// JSON output is printed even in quiet mode since scripts ask for it
    /// explicitly.
    pub fn report(&self, report: &ScaffoldReport) -> CliResult<()> {
        if self.resolved_format == OutputFormat::Json {
            self.term
                .write_line(&serde_json::to_string_pretty(report)?)?;
            return Ok(());
        }

        for dir in &report.created_dirs {
            self.print(&format!("  created  {}", display(dir)))?;
        }
        for file in &report.written_files {
            self.success(&format!("created  {}", display(file)))?;
        }
        for skipped in &report.skipped {
            self.warning(&format!(
                "{} already exists, skipped: {}",
                skipped.kind,
                display(&skipped.path)
            ))?;
        }
        for patch in &report.registries {
            let msg = if patch.outcome.is_inserted() {
                format!("registered in {}", display(&patch.path))
            } else {
                format!("already registered in {}", display(&patch.path))
            };
            self.info(&msg)?;
        }
        if report.refreshed {
            self.info("dependencies refreshed")?;
        }
        Ok(())
    }

    /// Whether spinners should be drawn at all.
    pub fn shows_progress(&self) -> bool {
        !self.quiet && io::stderr().is_terminal()
    }

    pub fn supports_color(&self) -> bool {
        !self.no_color
    }

    /// Never `Auto`.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }
}

/// Spinner on stderr for a long-running step; hidden unless `visible`.
pub fn spinner(visible: bool, message: impl Into<String>) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(message.into());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

#[derive(Clone, Copy)]
enum Status {
    Success,
    Warning,
    Info,
}

impl Status {
    fn symbol(self) -> &'static str {
        match self {
            Self::Success => "\u{2713}",
            Self::Warning => "\u{26a0}",
            Self::Info => "\u{2139}",
        }
    }
}

fn display(path: &Path) -> String {
    path.display().to_string()
}
