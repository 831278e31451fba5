use crate::commands::{CmdMessage, CmdResult};
use crate::config::AgentConfig;
use crate::error::Result;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(config: &mut AgentConfig, action: ConfigAction) -> Result<CmdResult> {
    match action {
        ConfigAction::ShowAll => Ok(CmdResult::default().with_config(config.clone())),
        ConfigAction::ShowKey(key) => {
            let mut result = CmdResult::default();
            match config.get(&key) {
                Some(val) => result.add_message(CmdMessage::info(format!("{} = {}", key, val))),
                None => {
                    result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)))
                }
            }
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            if let Err(e) = config.set(&key, &value) {
                let mut res = CmdResult::default();
                res.add_message(CmdMessage::error(e.to_string()));
                return Ok(res);
            }
            tracing::debug!(%key, %value, "config updated");
            let mut result = CmdResult::default().with_config(config.clone());
            let display_val = config.get(&key).unwrap_or(value);
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key, display_val
            )));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::config::ColorChoice;

    #[test]
    fn show_all_returns_config() {
        let mut config = AgentConfig::default();
        let result = run(&mut config, ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config, Some(AgentConfig::default()));
    }

    #[test]
    fn show_key_reports_value() {
        let mut config = AgentConfig::default();
        let result = run(&mut config, ConfigAction::ShowKey("color".into())).unwrap();
        assert_eq!(result.messages[0].content, "color = auto");
    }

    #[test]
    fn show_unknown_key_is_error_message() {
        let mut config = AgentConfig::default();
        let result = run(&mut config, ConfigAction::ShowKey("editor".into())).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Error);
    }

    #[test]
    fn set_updates_session_config() {
        let mut config = AgentConfig::default();
        let result = run(
            &mut config,
            ConfigAction::Set("color".into(), "never".into()),
        )
        .unwrap();

        assert_eq!(config.color, ColorChoice::Never);
        assert_eq!(result.messages[0].content, "color set to never");
        assert_eq!(result.config.unwrap().color, ColorChoice::Never);
    }

    #[test]
    fn set_invalid_value_leaves_config_alone() {
        let mut config = AgentConfig::default();
        let result = run(
            &mut config,
            ConfigAction::Set("max-attempts".into(), "lots".into()),
        )
        .unwrap();

        assert_eq!(result.messages[0].level, MessageLevel::Error);
        assert_eq!(config, AgentConfig::default());
    }
}
