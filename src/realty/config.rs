use crate::error::{RealtyError, Result};
use serde::{Deserialize, Serialize};

const DEFAULT_PROMPT: &str = "realty> ";

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

/// Session settings. Seeded from command-line flags and environment variables, adjustable
/// with the `config` shell command, gone when the process exits.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AgentConfig {
    /// When to style output
    #[serde(default)]
    pub color: ColorChoice,

    /// Rejected answers tolerated per enumerated question (0 = unlimited)
    #[serde(default)]
    pub max_attempts: u32,

    /// Shell prompt
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

fn default_prompt() -> String {
    DEFAULT_PROMPT.to_string()
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            color: ColorChoice::default(),
            max_attempts: 0,
            prompt: default_prompt(),
        }
    }
}

impl AgentConfig {
    pub const KEYS: [&'static str; 3] = ["color", "max-attempts", "prompt"];

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "color" => Some(self.color.to_string()),
            "max-attempts" => Some(self.max_attempts.to_string()),
            "prompt" => Some(self.prompt.clone()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "color" => {
                self.color = value.parse().map_err(|_| {
                    RealtyError::Config(format!(
                        "Invalid color '{}': expected auto, always or never",
                        value
                    ))
                })?;
            }
            "max-attempts" => {
                self.max_attempts = value.parse().map_err(|_| {
                    RealtyError::Config(format!(
                        "Invalid max-attempts '{}': expected a whole number",
                        value
                    ))
                })?;
            }
            "prompt" => {
                // Prompts always end with a space
                self.prompt = if value.ends_with(' ') {
                    value.to_string()
                } else {
                    format!("{} ", value)
                };
            }
            _ => return Err(RealtyError::Config(format!("Unknown config key: {}", key))),
        }
        Ok(())
    }

    pub fn list_all(&self) -> Vec<(String, String)> {
        Self::KEYS
            .iter()
            .filter_map(|key| self.get(key).map(|value| (key.to_string(), value)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = AgentConfig::default();
        assert_eq!(config.color, ColorChoice::Auto);
        assert_eq!(config.max_attempts, 0);
        assert_eq!(config.prompt, "realty> ");
    }

    #[test]
    fn get_known_and_unknown_keys() {
        let config = AgentConfig::default();
        assert_eq!(config.get("color").as_deref(), Some("auto"));
        assert_eq!(config.get("max-attempts").as_deref(), Some("0"));
        assert_eq!(config.get("editor"), None);
    }

    #[test]
    fn set_color_case_insensitive() {
        let mut config = AgentConfig::default();
        config.set("color", "NEVER").unwrap();
        assert_eq!(config.color, ColorChoice::Never);
    }

    #[test]
    fn set_rejects_bad_values() {
        let mut config = AgentConfig::default();
        assert!(matches!(
            config.set("color", "sometimes"),
            Err(RealtyError::Config(_))
        ));
        assert!(matches!(
            config.set("max-attempts", "-2"),
            Err(RealtyError::Config(_))
        ));
        assert!(matches!(
            config.set("nope", "1"),
            Err(RealtyError::Config(_))
        ));
        assert_eq!(config, AgentConfig::default());
    }

    #[test]
    fn set_prompt_appends_space() {
        let mut config = AgentConfig::default();
        config.set("prompt", "agent>").unwrap();
        assert_eq!(config.prompt, "agent> ");
        config.set("prompt", "$ ").unwrap();
        assert_eq!(config.prompt, "$ ");
    }

    #[test]
    fn list_all_in_key_order() {
        let mut config = AgentConfig::default();
        config.set("max-attempts", "3").unwrap();
        let keys: Vec<_> = config.list_all().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["color", "max-attempts", "prompt"]);
        assert!(config
            .list_all()
            .contains(&("max-attempts".to_string(), "3".to_string())));
    }

    #[test]
    fn serialization_roundtrip() {
        let config = AgentConfig {
            color: ColorChoice::Always,
            max_attempts: 5,
            prompt: "> ".to_string(),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: AgentConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, parsed);
    }
}
