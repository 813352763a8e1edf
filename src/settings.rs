use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use serde::{Deserialize, Serialize};

pub use crate::error::{Error, Result};
use crate::password_generator::{GenerationPolicy, DEFAULT_LENGTH, MAX_LENGTH, MIN_LENGTH};

/// Prefix of the environment variables that override the settings file, for example
/// `PASSWORDGEN_LENGTH=20`.
pub const ENV_PREFIX: &str = "PASSWORDGEN";

/// The user's preferences, everything a front end needs to remember between runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub length: usize,
    pub uppercase: bool,
    pub lowercase: bool,
    pub numbers: bool,
    pub special: bool,
    pub animate: bool,
    pub reveal_interval_ms: u64,
    pub copy_feedback_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            uppercase: true,
            lowercase: true,
            numbers: true,
            special: true,
            animate: true,
            reveal_interval_ms: 50,
            copy_feedback_ms: 2000,
        }
    }
}

/// Where the settings file lives, `$XDG_CONFIG_HOME/passwordgen/settings.toml` with a
/// fallback to `$HOME/.config`.
pub fn config_file_location() -> Option<PathBuf> {
    let base = match std::env::var_os("XDG_CONFIG_HOME") {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => PathBuf::from(std::env::var_os("HOME")?).join(".config"),
    };
    Some(base.join("passwordgen").join("settings.toml"))
}

impl Settings {
    /// Reads the settings from the default location and the environment.
    pub fn load() -> Result<Settings> {
        Settings::load_from(config_file_location().as_deref())
    }

    /// Layers built in defaults, the toml file at `path` if it exists and finally the
    /// `PASSWORDGEN_*` environment variables.
    pub fn load_from(path: Option<&Path>) -> Result<Settings> {
        let mut settings = config::Config::default();

        if let Some(path) = path {
            log::debug!("reading settings from {}", path.display());
            settings.merge(
                config::File::from(path)
                    .format(config::FileFormat::Toml)
                    .required(false),
            )?;
        }
        settings.merge(config::Environment::with_prefix(ENV_PREFIX))?;

        let settings: Settings = settings.try_into()?;
        Ok(settings)
    }

    /// Writes the settings as toml, creating the parent directory when needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    /// The generation policy these settings describe.
    ///
    /// Unlike the generator itself this refuses lengths outside of
    /// `MIN_LENGTH..=MAX_LENGTH`.
    pub fn policy(&self) -> Result<GenerationPolicy> {
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&self.length) {
            return Err(Error::LengthOutOfRange(self.length));
        }

        Ok(GenerationPolicy {
            length: self.length,
            include_upper: self.uppercase,
            include_lower: self.lowercase,
            include_digits: self.numbers,
            include_special: self.special,
        })
    }

    pub fn reveal_interval(&self) -> Duration {
        Duration::from_millis(self.reveal_interval_ms)
    }

    pub fn copy_feedback_window(&self) -> Duration {
        Duration::from_millis(self.copy_feedback_ms)
    }
}

#[cfg(test)]
#[path = "tests/settings.rs"]
mod settings;
