//! Configuration for agenda generation
//!
//! Every field has a default matching the board's standing document format,
//! so a missing config file is never an error. A TOML file may override any
//! subset of sections.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main agenda configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AgendaConfig {
    #[serde(default)]
    pub document: DocumentSection,
    #[serde(default)]
    pub classification: ClassificationSection,
    #[serde(default)]
    pub layout: LayoutSection,
    #[serde(default)]
    pub output: OutputSection,
}

/// Fixed text blocks written around the two item sections
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DocumentSection {
    /// Title block at the top of the document
    pub title: String,
    /// Block left for the secretary to fill in the meeting date
    pub date_placeholder: String,
    /// Heading of the section holding circulated items
    pub read_for_meeting_title: String,
    /// Heading of the section holding everything else
    pub preliminary_report_title: String,
}

impl Default for DocumentSection {
    fn default() -> Self {
        Self {
            title: "\t\t\t\tRepresentations Board Meeting\n".to_string(),
            date_placeholder: "\t\t\t\t\t- FILL IN DATE -\n\n\n\n".to_string(),
            read_for_meeting_title: "Read for Meeting\n\n".to_string(),
            preliminary_report_title: "Preliminary Report\n\n".to_string(),
        }
    }
}

/// How the circulate column is interpreted
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ClassificationSection {
    /// Token that marks an item for circulation (compared case-insensitively)
    pub circulation_affirmation: String,
}

impl Default for ClassificationSection {
    fn default() -> Self {
        Self {
            circulation_affirmation: "yes".to_string(),
        }
    }
}

/// Tab-stop alignment of the reader/login date line
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LayoutSection {
    /// Maximum tab stops on a reader line that keeps "Login date" aligned
    pub tab_size: i64,
    /// Characters covered by one tab-stop unit
    pub tab_width: usize,
}

impl Default for LayoutSection {
    fn default() -> Self {
        Self {
            tab_size: 7,
            tab_width: 5,
        }
    }
}

/// Where the dated agenda file is written
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputSection {
    pub directory: PathBuf,
    pub file_prefix: String,
    pub extension: String,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            file_prefix: "Agenda-".to_string(),
            extension: "txt".to_string(),
        }
    }
}

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl AgendaConfig {
    /// Load configuration from a TOML file and validate it
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: AgendaConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check values that would make the layout or file naming meaningless
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.layout.tab_width == 0 {
            return Err(ConfigError::InvalidConfig(
                "layout.tab_width must be greater than zero".to_string(),
            ));
        }

        if self.classification.circulation_affirmation.trim().is_empty() {
            return Err(ConfigError::InvalidConfig(
                "classification.circulation_affirmation must not be empty".to_string(),
            ));
        }

        if self.output.file_prefix.is_empty() {
            return Err(ConfigError::InvalidConfig(
                "output.file_prefix must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_board_format() {
        let config = AgendaConfig::default();
        assert_eq!(
            config.document.title,
            "\t\t\t\tRepresentations Board Meeting\n"
        );
        assert_eq!(
            config.document.date_placeholder,
            "\t\t\t\t\t- FILL IN DATE -\n\n\n\n"
        );
        assert_eq!(config.document.read_for_meeting_title, "Read for Meeting\n\n");
        assert_eq!(
            config.document.preliminary_report_title,
            "Preliminary Report\n\n"
        );
        assert_eq!(config.classification.circulation_affirmation, "yes");
        assert_eq!(config.layout.tab_size, 7);
        assert_eq!(config.layout.tab_width, 5);
        assert_eq!(config.output.file_prefix, "Agenda-");
        assert_eq!(config.output.extension, "txt");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_toml_yields_defaults() {
        let config: AgendaConfig = toml::from_str("").unwrap();
        assert_eq!(config, AgendaConfig::default());
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let toml_content = r#"
[layout]
tab_size = 9

[output]
directory = "agendas"
"#;

        let config: AgendaConfig = toml::from_str(toml_content).unwrap();
        assert_eq!(config.layout.tab_size, 9);
        assert_eq!(config.layout.tab_width, 5);
        assert_eq!(config.output.directory, PathBuf::from("agendas"));
        assert_eq!(config.output.file_prefix, "Agenda-");
        assert_eq!(config.document, DocumentSection::default());
    }

    #[test]
    fn test_zero_tab_width_is_rejected() {
        let mut config = AgendaConfig::default();
        config.layout.tab_width = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_blank_affirmation_is_rejected() {
        let mut config = AgendaConfig::default();
        config.classification.circulation_affirmation = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_round_trips_through_toml() {
        let config = AgendaConfig::default();
        let rendered = toml::to_string_pretty(&config).unwrap();
        let parsed: AgendaConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed, config);
    }
}
