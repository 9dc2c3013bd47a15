use anyhow::{Context, Result};
use semkit::BumpKind;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Name of the configuration file looked up from the working directory upward
pub const CONFIG_FILE_NAME: &str = "semkit.toml";

/// The semkit configuration file structure (semkit.toml)
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SemkitConfig {
    /// Bump defaults
    pub bump: BumpConfig,
}

/// Tokens used when a prerelease or build section is bumped from nothing
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct BumpConfig {
    /// Seed for `bump prerelease` (built-in default: "rc")
    pub prerelease_token: Option<String>,

    /// Seed for `bump build` (built-in default: "build")
    pub build_token: Option<String>,
}

impl SemkitConfig {
    /// Load configuration from semkit.toml, searching upward from the given directory
    pub fn load(start_dir: &Path) -> Result<Option<(Self, PathBuf)>> {
        let mut current = start_dir.to_path_buf();

        loop {
            let config_path = current.join(CONFIG_FILE_NAME);

            if config_path.exists() {
                let config = Self::load_file(&config_path)?;
                return Ok(Some((config, config_path)));
            }

            // Move to parent directory
            if !current.pop() {
                return Ok(None);
            }
        }
    }

    /// Load configuration from an explicit path
    pub fn load_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: SemkitConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(config)
    }

    /// Resolve configuration: explicit path first, then discovery from the cwd
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            log::debug!("Using config file {}", path.display());
            return Self::load_file(path);
        }

        let cwd = std::env::current_dir().context("Failed to resolve working directory")?;
        match Self::load(&cwd)? {
            Some((config, path)) => {
                log::debug!("Found config file {}", path.display());
                Ok(config)
            }
            None => {
                log::debug!("No {} found, using defaults", CONFIG_FILE_NAME);
                Ok(Self::default())
            }
        }
    }

    /// Configured seed token for a bump kind, if any
    pub fn token_for(&self, kind: BumpKind) -> Option<&str> {
        match kind {
            BumpKind::Prerelease => self.bump.prerelease_token.as_deref(),
            BumpKind::Build => self.bump.build_token.as_deref(),
            BumpKind::Major | BumpKind::Minor | BumpKind::Patch => None,
        }
    }
}
