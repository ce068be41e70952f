// src/infrastructure/config.rs
use crate::application::SolverProfile;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// TOML configuration for studybot
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub quiz: QuizConfig,
    #[serde(default)]
    pub seed: SeedConfig,
    #[serde(default)]
    pub simulation: SimulationConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
pub struct QuizConfig {
    /// Questions per session when `--count` is not given; whole pool if unset.
    #[serde(default)]
    pub default_count: Option<usize>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct SeedConfig {
    #[serde(default = "default_seed_notes")]
    pub notes: usize,
    #[serde(default = "default_seed_quizzes")]
    pub quizzes: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct SimulationConfig {
    #[serde(default = "default_exam_size")]
    pub exam_size: usize,
    #[serde(flatten)]
    pub profile: SolverProfile,
}

// Default value functions
fn default_seed_notes() -> usize { 1_000 }
fn default_seed_quizzes() -> usize { 10_000 }
fn default_exam_size() -> usize { 100 }

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            notes: default_seed_notes(),
            quizzes: default_seed_quizzes(),
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            exam_size: default_exam_size(),
            profile: SolverProfile::default(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .context("Failed to read config file")?;

        let config: Config = toml::from_str(&content)
            .context("Failed to parse TOML config")?;
        config
            .simulation
            .profile
            .validate()
            .context("Invalid [simulation] section")?;

        Ok(config)
    }

    /// Load from `path` if it exists, otherwise fall back to defaults
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            debug!(?path, "Loading config");
            Self::load(path)
        } else {
            debug!(?path, "No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Save configuration to TOML file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let toml_string = toml::to_string_pretty(self)
            .context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string)
            .context("Failed to write config file")?;

        Ok(())
    }
}
