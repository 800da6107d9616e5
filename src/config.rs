//! Deployment configuration
//!
//! One yaml file per environment under `config/`. The funding destination is
//! the deployment flag deciding which rail the simulator targets; it is read
//! once at startup and injected into the workflow, never consulted from
//! ambient global state at runtime.

use serde::{Deserialize, Serialize};
use std::fs;

use crate::transfer::Destination;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub log_dir: String,
    pub log_file: String,
    pub use_json: bool,
    pub rotation: String,
    pub enable_tracing: bool,
    #[serde(default)]
    pub funding: FundingConfig,
}

/// Which rail the simulator targets
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DestinationKind {
    #[default]
    Ach,
    Processor,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct FundingConfig {
    pub destination: DestinationKind,
    #[serde(default)]
    pub ach: AchConfig,
    #[serde(default)]
    pub processor: ProcessorConfig,
}

impl Default for FundingConfig {
    fn default() -> Self {
        Self {
            destination: DestinationKind::Ach,
            ach: AchConfig::default(),
            processor: ProcessorConfig::default(),
        }
    }
}

/// ACH details as they would come back from an external auth step
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AchConfig {
    pub routing_number: String,
    pub account_number: String,
}

impl Default for AchConfig {
    fn default() -> Self {
        Self {
            routing_number: "021000021".to_string(),
            account_number: "1111222233330000".to_string(),
        }
    }
}

/// Processor funding-source handle
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ProcessorConfig {
    pub funding_source_url: String,
    pub item_id: u64,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            funding_source_url: "https://api.example.com/funding-sources/demo".to_string(),
            item_id: 0,
        }
    }
}

impl FundingConfig {
    /// Build the concrete destination handed to the simulator.
    pub fn destination(&self) -> Destination {
        match self.destination {
            DestinationKind::Ach => Destination::Ach {
                routing_number: self.ach.routing_number.clone(),
                account_number: self.ach.account_number.clone(),
            },
            DestinationKind::Processor => Destination::Processor {
                funding_source_url: self.processor.funding_source_url.clone(),
                item_id: self.processor.item_id,
            },
        }
    }
}

impl AppConfig {
    pub fn load(env: &str) -> Self {
        let config_path = format!("config/{}.yaml", env);
        let content = fs::read_to_string(&config_path)
            .unwrap_or_else(|_| panic!("Failed to read config file: {}", config_path));
        serde_yaml::from_str(&content).expect("Failed to parse config yaml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_funding_section() {
        let yaml = r#"
log_level: info
log_dir: ./logs
log_file: app.log
use_json: false
rotation: daily
enable_tracing: true
funding:
  destination: processor
  processor:
    funding_source_url: https://api.example.com/funding-sources/abc
    item_id: 7
"#;
        let config: AppConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.funding.destination, DestinationKind::Processor);
        match config.funding.destination() {
            Destination::Processor {
                funding_source_url,
                item_id,
            } => {
                assert_eq!(
                    funding_source_url,
                    "https://api.example.com/funding-sources/abc"
                );
                assert_eq!(item_id, 7);
            }
            other => panic!("expected processor destination, got {:?}", other),
        }
    }

    #[test]
    fn funding_section_defaults_to_ach() {
        let yaml = r#"
log_level: info
log_dir: ./logs
log_file: app.log
use_json: false
rotation: never
enable_tracing: false
"#;
        let config: AppConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.funding.destination, DestinationKind::Ach);
        assert!(matches!(
            config.funding.destination(),
            Destination::Ach { .. }
        ));
    }
}
