use anyhow::Context;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_INPUT: &str = "data/contacts.csv";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Run settings. Scoring weights are deliberately not part of this.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TriageConfig {
    pub input: PathBuf,
    pub format: OutputFormat,
}

impl Default for TriageConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            format: OutputFormat::Table,
        }
    }
}

impl TriageConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading triage config {}", path_ref.display()))?;
        let config: TriageConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing triage config {}", path_ref.display()))?;
        Ok(config)
    }

    /// Explicit command-line values win over file or default values.
    pub fn with_overrides(mut self, input: Option<PathBuf>, format: Option<OutputFormat>) -> Self {
        if let Some(input) = input {
            self.input = input;
        }
        if let Some(format) = format {
            self.format = format;
        }
        self
    }
}
