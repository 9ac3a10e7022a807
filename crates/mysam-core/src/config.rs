use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::Result;

/// Top-level configuration for the mySAM application.
///
/// Loaded from `~/.mysam/config.toml` by default. Each section corresponds
/// to a bounded context or cross-cutting concern.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MySamConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub feedback_chat: FeedbackChatConfig,
    #[serde(default)]
    pub assistant: AssistantConfig,
    #[serde(default)]
    pub voice: VoiceConfig,
}

impl MySamConfig {
    /// Load configuration from a TOML file.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: MySamConfig = toml::from_str(&content)?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist or cannot be parsed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Failed to load config from {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Save the current configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        info!("Configuration saved to {}", path.display());
        Ok(())
    }
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Name of the rep, used in greetings.
    pub rep_name: String,
    /// Log level: trace, debug, info, warn, error.
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            rep_name: "Murthy".to_string(),
            log_level: "info".to_string(),
        }
    }
}

/// Feedback companion chat settings.
///
/// The reply delay is drawn uniformly from `[min, max)` per reply to mimic
/// a typing pause. This is intentionally distinct from the assistant's
/// fixed delay; the two variants are tuned independently.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedbackChatConfig {
    pub reply_delay_min_ms: u64,
    pub reply_delay_max_ms: u64,
}

impl Default for FeedbackChatConfig {
    fn default() -> Self {
        Self {
            reply_delay_min_ms: 1000,
            reply_delay_max_ms: 2000,
        }
    }
}

/// Call assistant chat settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    /// Fixed delay before each assistant reply.
    pub reply_delay_ms: u64,
    /// Read replies aloud when a synthesizer is available.
    pub speak_replies: bool,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: 800,
            speak_replies: true,
        }
    }
}

/// Voice capture settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VoiceConfig {
    /// Whether to probe for a speech recognizer at startup.
    pub enabled: bool,
    /// Recognition language tag.
    pub language: String,
}

impl Default for VoiceConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            language: "en-US".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_config() {
        let config = MySamConfig::default();
        assert_eq!(config.general.rep_name, "Murthy");
        assert_eq!(config.general.log_level, "info");
        assert_eq!(config.feedback_chat.reply_delay_min_ms, 1000);
        assert_eq!(config.feedback_chat.reply_delay_max_ms, 2000);
        assert_eq!(config.assistant.reply_delay_ms, 800);
        assert!(config.assistant.speak_replies);
        assert!(config.voice.enabled);
        assert_eq!(config.voice.language, "en-US");
    }

    #[test]
    fn test_load_valid_config() {
        let content = r#"
[general]
rep_name = "Priya"
log_level = "debug"

[feedback_chat]
reply_delay_min_ms = 250
reply_delay_max_ms = 500

[assistant]
reply_delay_ms = 100
speak_replies = false
"#;
        let file = create_temp_config(content);
        let config = MySamConfig::load(file.path()).unwrap();
        assert_eq!(config.general.rep_name, "Priya");
        assert_eq!(config.general.log_level, "debug");
        assert_eq!(config.feedback_chat.reply_delay_min_ms, 250);
        assert_eq!(config.assistant.reply_delay_ms, 100);
        assert!(!config.assistant.speak_replies);
    }

    #[test]
    fn test_load_partial_config_uses_defaults() {
        let content = r#"
[general]
log_level = "warn"
"#;
        let file = create_temp_config(content);
        let config = MySamConfig::load(file.path()).unwrap();
        assert_eq!(config.general.log_level, "warn");
        // Remaining fields use defaults
        assert_eq!(config.general.rep_name, "Murthy");
        assert_eq!(config.feedback_chat.reply_delay_max_ms, 2000);
        assert_eq!(config.assistant.reply_delay_ms, 800);
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = MySamConfig::load_or_default(Path::new("/nonexistent/config.toml"));
        assert_eq!(config.general.rep_name, "Murthy");
    }

    #[test]
    fn test_load_invalid_toml() {
        let content = "this is {{ not valid TOML";
        let file = create_temp_config(content);
        assert!(MySamConfig::load(file.path()).is_err());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = MySamConfig::default();
        config.save(&path).unwrap();

        let reloaded = MySamConfig::load(&path).unwrap();
        assert_eq!(reloaded.general.rep_name, config.general.rep_name);
        assert_eq!(
            reloaded.feedback_chat.reply_delay_min_ms,
            config.feedback_chat.reply_delay_min_ms
        );
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sub").join("dir").join("config.toml");

        MySamConfig::default().save(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let file = create_temp_config("");
        let config = MySamConfig::load(file.path()).unwrap();
        assert_eq!(config.general.rep_name, "Murthy");
        assert_eq!(config.assistant.reply_delay_ms, 800);
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let config = MySamConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let deserialized: MySamConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(deserialized.general.log_level, config.general.log_level);
        assert_eq!(deserialized.voice.language, config.voice.language);
    }
}
