use crate::error::{FecError, Result};
use crate::fec::{field, Elem, SolveStrategy, DIM};
use crate::session::{SessionConfig, DEFAULT_MAX_ATTEMPTS, DEFAULT_MESSAGE};
use serde::Deserialize;
use std::path::Path;

/// Unified configuration structure parsed from a TOML file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub session: SessionConfig,
    pub message: Vec<Elem>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            session: SessionConfig::default(),
            message: DEFAULT_MESSAGE.to_vec(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML string. Missing keys take their defaults.
    pub fn from_toml(s: &str) -> Result<Self> {
        #[derive(Deserialize)]
        struct Root {
            session: Option<SessionSection>,
        }

        #[derive(Deserialize)]
        struct SessionSection {
            max_attempts: Option<usize>,
            seed: Option<u64>,
            pivoting: Option<SolveStrategy>,
            message: Option<Vec<Elem>>,
        }

        let raw: Root = toml::from_str(s)?;
        let Some(sec) = raw.session else {
            return Ok(Self::default());
        };
        Ok(Self {
            session: SessionConfig {
                max_attempts: sec.max_attempts.unwrap_or(DEFAULT_MAX_ATTEMPTS),
                seed: sec.seed,
                strategy: sec.pivoting.unwrap_or_default(),
            },
            message: sec.message.unwrap_or_else(|| DEFAULT_MESSAGE.to_vec()),
        })
    }

    /// Load configuration from a file path.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    pub fn validate(&self) -> Result<()> {
        if self.session.max_attempts == 0 {
            return Err(FecError::Config("max_attempts must be at least 1".into()));
        }
        if self.message.len() != DIM {
            return Err(FecError::Config(format!(
                "message must hold {} elements, got {}",
                DIM,
                self.message.len()
            )));
        }
        if let Some(v) = self.message.iter().find(|&&v| !field::contains(v)) {
            return Err(FecError::Config(format!("message element {} is not in the field", v)));
        }
        Ok(())
    }
}
