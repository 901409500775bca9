//! `cronforge check`: validate a schedules file.

use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use cronforge_config::{
    load_and_prepare, load_config, CronforgeConfig, LoggingConfig, ValidationReport,
};

use crate::terminal_output::{note_error, note_success, note_warn, render_table};

/// One row per schedule: name, enabled flag and the rendered expression.
pub fn summarize(config: &CronforgeConfig) -> String {
    let rows: Vec<Vec<String>> = config
        .schedules
        .iter()
        .map(|s| {
            let expression = match s.build() {
                Ok(expression) => expression.to_string(),
                Err(_) => "(invalid)".to_string(),
            };
            let enabled = if s.is_enabled() { "yes" } else { "no" };
            vec![s.name.clone(), enabled.to_string(), expression]
        })
        .collect();
    render_table(&["Name", "Enabled", "Expression"], &rows)
}

fn print_report(report: &ValidationReport) {
    for warning in &report.warnings {
        note_warn(&format!("{}: {}", warning.path, warning.message));
    }
    for error in &report.errors {
        note_error(&format!("{}: {}", error.path, error.message));
    }
}

/// The file's `logging` section, read before the logger is up.
///
/// Load errors are left for [`check_file`] to report.
pub async fn file_logging(path: &Path) -> Option<LoggingConfig> {
    load_config(path).await.ok().and_then(|config| config.logging)
}

/// Print the summary and report; true when the file has no errors.
pub async fn check_file(path: &Path) -> Result<bool> {
    if !path.exists() {
        note_warn(&format!("No schedules file at {}", path.display()));
    }

    let (config, report) = load_and_prepare(path).await?;
    print!("{}", summarize(&config));
    print_report(&report);

    if report.is_valid() {
        note_success(&format!("{} schedule(s) valid", config.schedules.len()));
    }
    Ok(report.is_valid())
}

pub async fn run(path: &Path) -> Result<ExitCode> {
    let code = if check_file(path).await? {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    };
    Ok(code)
}
