use indicatif::{ProgressBar, ProgressStyle};
use std::fmt;
use std::time::Duration;

/// Message severity, ordered from always shown to most detailed
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Error,
    Warning,
    Info,
    Debug,
    Verbose,
}

impl LogLevel {
    fn icon(self) -> Option<&'static str> {
        match self {
            LogLevel::Error => Some("❌"),
            LogLevel::Warning => Some("⚠️"),
            LogLevel::Info => None,
            LogLevel::Debug => Some("🔍"),
            LogLevel::Verbose => Some("💬"),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Error => write!(f, "ERROR"),
            LogLevel::Warning => write!(f, "WARN"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Verbose => write!(f, "VERBOSE"),
        }
    }
}

/// Console logger. Errors and warnings go to stderr, everything else to stdout.
#[derive(Debug, Clone)]
pub struct Logger {
    max_level: LogLevel,
}

impl Logger {
    pub fn new(verbose: bool, debug: bool) -> Self {
        let max_level = if verbose {
            LogLevel::Verbose
        } else if debug {
            LogLevel::Debug
        } else {
            LogLevel::Info
        };
        Self { max_level }
    }

    /// Only errors and warnings, used by tests and library callers that want silence
    pub fn quiet() -> Self {
        Self {
            max_level: LogLevel::Warning,
        }
    }

    pub fn should_log(&self, level: LogLevel) -> bool {
        level <= self.max_level
    }

    pub fn log(&self, level: LogLevel, message: &str) {
        if !self.should_log(level) {
            return;
        }

        let line = match level.icon() {
            Some(icon) => format!("{} {}", icon, message),
            None => message.to_string(),
        };
        if level <= LogLevel::Warning {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    }

    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }

    pub fn warning(&self, message: &str) {
        self.log(LogLevel::Warning, message);
    }

    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    pub fn verbose(&self, message: &str) {
        self.log(LogLevel::Verbose, message);
    }

    pub fn is_verbose(&self) -> bool {
        self.max_level == LogLevel::Verbose
    }
}

/// The stages of a `generate` run, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    LoadConfig,
    ReadManifest,
    Generate,
}

impl Stage {
    pub const ALL: [Stage; 3] = [Stage::LoadConfig, Stage::ReadManifest, Stage::Generate];

    pub fn label(self) -> &'static str {
        match self {
            Stage::LoadConfig => "Loading configuration",
            Stage::ReadManifest => "Reading manifest",
            Stage::Generate => "Generating SolidJS types",
        }
    }

    fn position(self) -> usize {
        Stage::ALL.iter().position(|s| *s == self).unwrap_or_default() + 1
    }
}

/// Spinner in normal mode, one log line per stage in verbose mode
pub struct ProgressReporter {
    logger: Logger,
    spinner: Option<ProgressBar>,
    stage: Option<Stage>,
}

impl ProgressReporter {
    pub fn new(logger: Logger) -> Self {
        let spinner = if logger.is_verbose() {
            None
        } else {
            let pb = ProgressBar::new_spinner();
            if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
                pb.set_style(
                    style.tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
                );
            }
            pb.enable_steady_tick(Duration::from_millis(100));
            Some(pb)
        };

        Self {
            logger,
            spinner,
            stage: None,
        }
    }

    pub fn start(&mut self, stage: Stage) {
        self.stage = Some(stage);
        let status = format!(
            "{} ({}/{})",
            stage.label(),
            stage.position(),
            Stage::ALL.len()
        );

        match &self.spinner {
            Some(pb) => pb.set_message(status),
            None => self.logger.info(&format!("🚀 {}", status)),
        }
    }

    pub fn complete(&mut self, detail: Option<&str>) {
        let Some(stage) = self.stage else {
            return;
        };
        match detail {
            Some(detail) => self.logger.verbose(&format!("✅ {} - {}", stage.label(), detail)),
            None => self.logger.verbose(&format!("✅ {}", stage.label())),
        }
    }

    /// Report a failed stage and pass the error through
    pub fn check<T, E: fmt::Display>(&mut self, result: Result<T, E>) -> Result<T, E> {
        if let Err(e) = &result {
            if let Some(pb) = self.spinner.take() {
                pb.finish_and_clear();
            }
            let stage = self.stage.map(Stage::label).unwrap_or("Generation");
            self.logger.error(&format!("{} failed: {}", stage, e));
        }
        result
    }

    pub fn finish(mut self, output_path: &str, component_count: usize) {
        if let Some(pb) = self.spinner.take() {
            pb.finish_and_clear();
        }
        print_usage_info(output_path, component_count);
    }
}

impl Drop for ProgressReporter {
    fn drop(&mut self) {
        if let Some(ref pb) = self.spinner {
            pb.finish_and_clear();
        }
    }
}

/// Summary printed by the CLI after a successful run
pub fn print_usage_info(output_path: &str, component_count: usize) {
    println!(
        "\n✓ Generated SolidJS types for {} custom element{}",
        component_count,
        if component_count == 1 { "" } else { "s" }
    );
    println!("📁 Location: {}", output_path);

    println!("\n💡 Register the elements with Solid's JSX namespace:");
    println!("  import type {{ CustomElements }} from '{}';", output_path);
    println!("  declare module 'solid-js' {{");
    println!("    namespace JSX {{ interface IntrinsicElements extends CustomElements {{}} }}");
    println!("  }}");
}
