use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::eligibility::evaluator::EligibilityThresholds;
use crate::error::Result;

pub const DEFAULT_CONFIG_PATH: &str = "config/default";
pub const ENV_PREFIX: &str = "TRANSCRIPT";

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Config {
    pub eligibility: EligibilityThresholds,
    pub audit: AuditConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AuditConfig {
    pub enabled: bool,
    /// Operator channel the audit lines are meant for
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
    pub default_requester: String,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            channel: None,
            default_requester: "anonymous".to_string(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(DEFAULT_CONFIG_PATH)
    }

    /// Defaults, then the optional config file, then `TRANSCRIPT_*` environment
    /// variables (`TRANSCRIPT_AUDIT__CHANNEL=eligibility-log`)
    pub fn load_from(path: &str) -> Result<Self> {
        dotenv::dotenv().ok();

        let defaults = Config::default();
        let thresholds = &defaults.eligibility;

        let config = config::Config::builder()
            .set_default(
                "eligibility.continuing_graduate_min_gpa",
                thresholds.continuing_graduate_min_gpa,
            )?
            .set_default(
                "eligibility.continuing_undergraduate_min_gpa",
                thresholds.continuing_undergraduate_min_gpa,
            )?
            .set_default(
                "eligibility.graduate_full_time_hours",
                thresholds.graduate_full_time_hours,
            )?
            .set_default(
                "eligibility.undergraduate_full_time_hours",
                thresholds.undergraduate_full_time_hours,
            )?
            .set_default("audit.enabled", defaults.audit.enabled)?
            .set_default("audit.default_requester", defaults.audit.default_requester)?
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Write the default configuration as TOML
    pub fn write_default(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(&Config::default())?;
        fs::write(path, contents)?;
        Ok(())
    }
}
