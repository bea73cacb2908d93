use crate::action::Action;
use crate::error::{ConfigError, Result};
use crate::model::Pt;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "scriv.json";

/// Default step magnitudes for the direction aliases, stored in
/// `scriv.json`.
///
/// These are explicit configuration, not hidden constants: a caller
/// that wants "the increase indent button" builds its action through
/// this struct, so the magnitude is always visible and overridable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StepDefaults {
    /// Whole points added or removed per font size step.
    #[serde(default = "default_font_size_step")]
    pub font_size_step: u32,

    /// Points added or removed per indent step.
    #[serde(default = "default_indent_step")]
    pub indent_step: Pt,

    /// Levels added or removed per superscript step.
    #[serde(default = "default_superscript_step")]
    pub superscript_step: u32,
}

fn default_font_size_step() -> u32 {
    1
}

fn default_indent_step() -> Pt {
    Pt(4.0)
}

fn default_superscript_step() -> u32 {
    1
}

impl Default for StepDefaults {
    fn default() -> Self {
        Self {
            font_size_step: default_font_size_step(),
            indent_step: default_indent_step(),
            superscript_step: default_superscript_step(),
        }
    }
}

impl StepDefaults {
    /// Load from the given directory, or return defaults if not found.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> std::result::Result<Self, ConfigError> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: StepDefaults = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save to the given directory, creating it if needed.
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> std::result::Result<(), ConfigError> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }

    pub fn increase_font_size(&self) -> Result<Action> {
        Action::increase_font_size(self.font_size_step)
    }

    pub fn decrease_font_size(&self) -> Result<Action> {
        Action::decrease_font_size(self.font_size_step)
    }

    pub fn increase_indent(&self) -> Action {
        Action::StepIndent(self.indent_step)
    }

    pub fn decrease_indent(&self) -> Action {
        Action::StepIndent(-self.indent_step)
    }

    pub fn increase_superscript(&self) -> Result<Action> {
        Action::increase_superscript(self.superscript_step)
    }

    pub fn decrease_superscript(&self) -> Result<Action> {
        Action::decrease_superscript(self.superscript_step)
    }
}
