//! `yuml options` command implementation.

use std::io::Write;

use clap::Args;
use yuml_filter::help;

use crate::error::CliError;

/// Arguments for the options command.
#[derive(Args)]
pub(crate) struct OptionsArgs {
    /// Print the reference as HTML instead of plain text.
    #[arg(long)]
    html: bool,
}

impl OptionsArgs {
    /// Execute the options command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let mut stdout = std::io::stdout();
        stdout.write_all(self.reference().as_bytes())?;
        Ok(())
    }

    fn reference(&self) -> String {
        if self.html {
            help::long_tip()
        } else {
            format!("{}\n\n{}", help::short_tip(), help::options_reference_text())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_reference() {
        let text = OptionsArgs { html: false }.reference();
        assert!(text.starts_with("Use yUML to generate inline UML Diagrams.\n\n"));
        assert!(text.contains("diagram (e.g. diagram:class)"));
    }

    #[test]
    fn test_html_reference() {
        let html = OptionsArgs { html: true }.reference();
        assert!(html.contains("<dl>"));
        assert!(html.contains("<dt>diagram</dt>"));
    }
}
