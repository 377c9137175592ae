use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub normalize: NormalizeConfig,
    #[serde(default)]
    pub roster: RosterConfig,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string() }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NormalizeConfig {
    /// Inserted before the extension when no output path is given
    pub output_suffix: String,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self { output_suffix: "norm".to_string() }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RosterConfig {
    pub average_precision: usize,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self { average_precision: 1 }
    }
}

impl Config {
    /// Load the user configuration, writing the defaults on first use
    pub fn load() -> Result<Self> {
        let config_path = get_config_path()?;

        if !config_path.exists() {
            let default_config = Config::default();
            default_config.save_to(&config_path)?;
            return Ok(default_config);
        }

        Self::load_from(&config_path)
    }

    /// Load the configuration stored at `path`
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&content).context("Failed to parse config file")
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).context("Failed to write config file")?;

        Ok(())
    }

    /// Output path used when the caller names only the input file:
    /// `notes.txt` becomes `notes.norm.txt`
    pub fn derive_output_path(&self, input: &Path) -> PathBuf {
        let stem = input.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default();
        let file_name = match input.extension() {
            Some(ext) => format!("{}.{}.{}", stem, self.normalize.output_suffix, ext.to_string_lossy()),
            None => format!("{}.{}", stem, self.normalize.output_suffix),
        };
        input.with_file_name(file_name)
    }
}

pub fn get_config_path() -> Result<PathBuf> {
    let proj_dirs = ProjectDirs::from("com", "horario", "horario")
        .context("Failed to determine config directory")?;

    Ok(proj_dirs.config_dir().join("config.toml"))
}
