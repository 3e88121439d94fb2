use anyhow::{Context, Result};

use crate::scoring::enhancement::dual_track::RoleTrack;
use crate::scoring::enhancement::role_level::RoleLevel;

/// Process configuration loaded from environment variables.
/// Every variable is optional; CLI flags override the role defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub rust_log: String,
    /// Width of the report separator lines.
    pub separator_width: usize,
    pub target_role_type: RoleTrack,
    pub target_role_level: RoleLevel,
    pub years_experience: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rust_log: "warn".to_string(),
            separator_width: 50,
            target_role_type: RoleTrack::Executive,
            target_role_level: RoleLevel::SeniorExecutive,
            years_experience: 20,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup, so tests never touch the process env.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();

        let separator_width = match lookup("SKILLFIT_SEPARATOR_WIDTH") {
            Some(raw) => {
                let width = raw
                    .trim()
                    .parse::<usize>()
                    .context("SKILLFIT_SEPARATOR_WIDTH must be a positive integer")?;
                anyhow::ensure!(width > 0, "SKILLFIT_SEPARATOR_WIDTH must be greater than 0");
                width
            }
            None => defaults.separator_width,
        };

        let target_role_type = match lookup("SKILLFIT_TARGET_ROLE_TYPE") {
            Some(raw) => raw
                .parse::<RoleTrack>()
                .context("SKILLFIT_TARGET_ROLE_TYPE is invalid")?,
            None => defaults.target_role_type,
        };

        let target_role_level = lookup("SKILLFIT_TARGET_ROLE_LEVEL")
            .map(|raw| RoleLevel::from_label_or_default(&raw))
            .unwrap_or(defaults.target_role_level);

        let years_experience = match lookup("SKILLFIT_YEARS_EXPERIENCE") {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .context("SKILLFIT_YEARS_EXPERIENCE must be a non-negative integer")?,
            None => defaults.years_experience,
        };

        Ok(Config {
            rust_log: lookup("RUST_LOG").unwrap_or(defaults.rust_log),
            separator_width,
            target_role_type,
            target_role_level,
            years_experience,
        })
    }
}
