use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::cli::output::OutputFormat;
use crate::core::{Window, parse_window};
use crate::error::{Result, RrgcError};

/// Name of the per-directory configuration file.
pub const PROJECT_CONFIG_FILE: &str = ".rrgc.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub gc: GcConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub windows: Vec<Window>,
}

impl Config {
    /// Load configuration: defaults, then files, then environment.
    ///
    /// An explicit path (or `RRGC_CONFIG`) replaces the global and project
    /// files instead of layering on top of them.
    pub fn load(explicit_path: Option<&Path>, project_dir: &Path) -> Result<Self> {
        let mut config = Self::default();

        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| std::env::var("RRGC_CONFIG").ok().map(PathBuf::from));

        if let Some(path) = explicit {
            let patch = Self::load_patch(&path)?.ok_or_else(|| {
                RrgcError::Config(format!("config file {} not found", path.display()))
            })?;
            config.merge_patch(patch);
        } else {
            if let Some(global) = Self::load_global()? {
                config.merge_patch(global);
            }
            if let Some(project) = Self::load_patch(&project_dir.join(PROJECT_CONFIG_FILE))? {
                config.merge_patch(project);
            }
        }

        config.apply_env_overrides()?;

        Ok(config)
    }

    fn load_global() -> Result<Option<ConfigPatch>> {
        match dirs::config_dir() {
            Some(dir) => Self::load_patch(&dir.join("rrgc/config.toml")),
            None => Ok(None),
        }
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|err| RrgcError::Config(format!("read config {}: {err}", path.display())))?;
        let patch = toml::from_str(&raw)
            .map_err(|err| RrgcError::Config(format!("parse config {}: {err}", path.display())))?;
        tracing::debug!(path = %path.display(), "config file loaded");
        Ok(Some(patch))
    }

    fn merge_patch(&mut self, patch: ConfigPatch) {
        if let Some(patch) = patch.gc {
            self.gc.merge(patch);
        }
        if let Some(patch) = patch.output {
            self.output.merge(patch);
        }
        if let Some(windows) = patch.windows {
            self.windows = windows;
        }
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides_from(|key| std::env::var(key).ok())
    }

    fn apply_overrides_from(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(value) = lookup("RRGC_DRY_RUN") {
            self.gc.dry_run = parse_bool(&value);
        }
        if let Some(value) = lookup("RRGC_VERBOSE") {
            self.gc.verbose = parse_bool(&value);
        }
        if let Some(value) = lookup("RRGC_OUTPUT_FORMAT") {
            self.output.format = parse_output_format(&value)?;
        }
        if let Some(value) = lookup("RRGC_WINDOWS") {
            self.windows = value
                .split_whitespace()
                .map(|spec| {
                    parse_window(spec)
                        .map_err(|err| RrgcError::Config(format!("invalid RRGC_WINDOWS: {err}")))
                })
                .collect::<Result<Vec<_>>>()?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GcConfig {
    /// Print what would be deleted instead of deleting.
    #[serde(default)]
    pub dry_run: bool,
    /// Echo every deletion.
    #[serde(default)]
    pub verbose: bool,
}

impl GcConfig {
    fn merge(&mut self, patch: GcPatch) {
        if let Some(value) = patch.dry_run {
            self.dry_run = value;
        }
        if let Some(value) = patch.verbose {
            self.verbose = value;
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

impl OutputConfig {
    fn merge(&mut self, patch: OutputPatch) {
        if let Some(value) = patch.format {
            self.format = value;
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigPatch {
    pub gc: Option<GcPatch>,
    pub output: Option<OutputPatch>,
    pub windows: Option<Vec<Window>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct GcPatch {
    pub dry_run: Option<bool>,
    pub verbose: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct OutputPatch {
    pub format: Option<OutputFormat>,
}

fn parse_bool(value: &str) -> bool {
    matches!(
        value.to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

fn parse_output_format(value: &str) -> Result<OutputFormat> {
    match value.to_lowercase().as_str() {
        "human" | "text" => Ok(OutputFormat::Human),
        "json" => Ok(OutputFormat::Json),
        _ => Err(RrgcError::Config(format!(
            "invalid output format {value} (expected human|json)"
        ))),
    }
}
