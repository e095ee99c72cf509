//! `yuml render` command implementation.

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use clap::Args;
use yuml_config::{CliSettings, Config};
use yuml_filter::{InvalidBlocks, Problem};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Input document (default: stdin, also `-`).
    input: Option<PathBuf>,

    /// Output file (default: stdout).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// yUML service URL (overrides config).
    #[arg(long, env = "YUML_SERVICE_URL")]
    service_url: Option<String>,

    /// Keep blocks with invalid options verbatim instead of removing them.
    #[arg(long)]
    keep_invalid: bool,

    /// Fail if any problem is reported.
    #[arg(long)]
    strict: bool,

    /// Path to configuration file (default: auto-discover yuml.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration or I/O fails, or in strict mode when
    /// problems were reported.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            service_url: self.service_url,
            invalid_blocks: self.keep_invalid.then_some(InvalidBlocks::Keep),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        if let Some(path) = &config.config_path {
            tracing::info!(path = %path.display(), "Loaded configuration");
        }

        let input = read_input(self.input.as_deref())?;
        let result = config.build_filter().filter(&input);

        for problem in &result.problems {
            output.warning(&format!("Warning: {problem}"));
        }

        match &self.output {
            Some(path) => {
                std::fs::write(path, &result.text)?;
                output.success(&format!("Wrote {}", path.display()));
            }
            None => std::io::stdout().write_all(result.text.as_bytes())?,
        }

        check_strict(&result.problems, self.strict)
    }
}

/// Read the document from `path`, or stdin when absent or `-`.
fn read_input(path: Option<&Path>) -> Result<String, CliError> {
    match path {
        Some(path) if path != Path::new("-") => {
            if !path.exists() {
                return Err(CliError::Validation(format!(
                    "Input file not found: {}",
                    path.display()
                )));
            }
            Ok(std::fs::read_to_string(path)?)
        }
        _ => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

/// Fail when strict mode is on and problems were reported.
fn check_strict(problems: &[Problem], strict: bool) -> Result<(), CliError> {
    if strict && !problems.is_empty() {
        return Err(CliError::Validation(format!(
            "{} problem(s) found in strict mode",
            problems.len()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_read_input_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.txt");
        std::fs::write(&path, "\n[yuml diagram:class\n[A]\n]\n").unwrap();

        let input = read_input(Some(&path)).unwrap();

        assert_eq!(input, "\n[yuml diagram:class\n[A]\n]\n");
    }

    #[test]
    fn test_read_input_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");

        let err = read_input(Some(&path)).unwrap_err();

        assert!(matches!(err, CliError::Validation(_)));
        assert!(err.to_string().contains("missing.txt"));
    }

    #[test]
    fn test_check_strict() {
        let problems = vec![Problem::MissingRequiredOption {
            key: "diagram".to_owned(),
        }];

        assert!(check_strict(&problems, false).is_ok());
        assert!(check_strict(&[], true).is_ok());

        let err = check_strict(&problems, true).unwrap_err();
        assert_eq!(err.to_string(), "1 problem(s) found in strict mode");
    }
}
