//! Command-line interface.
//!
//! `rrgc [OPTIONS] <WINDOWS>... -- <GLOBS>...`

use std::path::PathBuf;

use clap::Parser;

pub mod gc;
pub mod output;

use output::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "rrgc",
    version,
    about = "Keep timestamped files by retention windows, delete the rest",
    override_usage = "rrgc [OPTIONS] <WINDOWS>... -- <GLOBS>...",
    after_help = "Example: rrgc 2h,5 1day,4 1w,3 -- 'logs/*.log' 'logs/*.log.gz'"
)]
pub struct Cli {
    #[command(flatten)]
    pub gc: gc::GcArgs,

    /// Debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Suppress logging
    #[arg(short, long, global = true, conflicts_with = "debug")]
    pub quiet: bool,

    /// Machine-readable JSON output
    #[arg(long, global = true, alias = "robot")]
    pub json: bool,

    /// Configuration file (replaces the global and project files)
    #[arg(long, global = true, env = "RRGC_CONFIG")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Output format requested on the command line, if any.
    #[must_use]
    pub const fn output_format(&self) -> Option<OutputFormat> {
        if self.json {
            Some(OutputFormat::Json)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn splits_windows_and_globs_on_separator() {
        let cli = Cli::try_parse_from([
            "rrgc", "--dry-run", "1h,5", "1day,4", "--", "a/*.log", "b/*.gz",
        ])
        .unwrap();
        assert_eq!(cli.gc.windows, vec!["1h,5", "1day,4"]);
        assert_eq!(cli.gc.globs, vec!["a/*.log", "b/*.gz"]);
        assert!(cli.gc.dry_run);
        assert!(!cli.json);
    }

    #[test]
    fn flags_after_windows_are_parsed() {
        let cli = Cli::try_parse_from(["rrgc", "1h,5", "--keep", "--json", "--", "*.log"]).unwrap();
        assert!(cli.gc.keep);
        assert_eq!(cli.output_format(), Some(OutputFormat::Json));
    }

    #[test]
    fn empty_invocation_parses_for_config_driven_runs() {
        let cli = Cli::try_parse_from(["rrgc"]).unwrap();
        assert!(cli.gc.windows.is_empty());
        assert!(cli.gc.globs.is_empty());
    }
}
