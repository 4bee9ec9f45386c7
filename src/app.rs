use crate::cli::output::OutputFormat;
use crate::config::Config;
use crate::error::Result;

/// Which side of the GC list the run acts on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListMode {
    /// Delete (or, in dry-run, print) the dropped files.
    #[default]
    Drop,
    /// Print the kept files; nothing is deleted.
    Keep,
}

/// Run options after configuration files, environment and flags are merged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GcOptions {
    pub dry_run: bool,
    pub verbose: bool,
    pub mode: ListMode,
}

pub struct AppContext {
    pub config: Config,
    pub options: GcOptions,
    pub output_format: OutputFormat,
}

impl AppContext {
    pub fn from_cli(cli: &crate::cli::Cli) -> Result<Self> {
        let project_dir = std::env::current_dir()?;
        let config = Config::load(cli.config.as_deref(), &project_dir)?;
        Ok(Self::with_config(cli, config))
    }

    /// Combine loaded configuration with command-line flags; flags win.
    #[must_use]
    pub fn with_config(cli: &crate::cli::Cli, config: Config) -> Self {
        let options = GcOptions {
            dry_run: cli.gc.dry_run || config.gc.dry_run,
            verbose: cli.gc.verbose || config.gc.verbose,
            mode: if cli.gc.keep {
                ListMode::Keep
            } else {
                ListMode::Drop
            },
        };
        let output_format = cli.output_format().unwrap_or(config.output.format);

        Self {
            config,
            options,
            output_format,
        }
    }
}
