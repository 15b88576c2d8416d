use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::types::parameters::WaveformParameters;

/// Waveform parameter file
/// Holds the same three values the command line accepts
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SignalConfig {
    #[serde(default = "default_amplitude")]
    pub amplitude: f64,

    #[serde(default = "default_frequency")]
    pub frequency: f64,

    #[serde(default)]
    pub phase: f64,
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self {
            amplitude: default_amplitude(),
            frequency: default_frequency(),
            phase: 0.0,
        }
    }
}

impl SignalConfig {
    /// Load configuration from a YAML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config = Self::parse(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;

        log::info!("Loaded waveform parameters from {}", path.display());
        Ok(config)
    }

    /// Parse and validate YAML content
    pub fn parse(content: &str) -> Result<Self> {
        // An empty document means "all defaults"
        let config: SignalConfig = if content.trim().is_empty() {
            SignalConfig::default()
        } else {
            serde_yaml::from_str(content).context("Failed to parse YAML config")?
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !self.amplitude.is_finite() {
            return Err(anyhow!("Amplitude must be a finite number"));
        }
        if !self.frequency.is_finite() {
            return Err(anyhow!("Frequency must be a finite number"));
        }
        if !self.phase.is_finite() {
            return Err(anyhow!("Phase must be a finite number"));
        }

        Ok(())
    }

    /// Apply command line overrides on top of the file values
    pub fn with_overrides(
        mut self,
        amplitude: Option<f64>,
        frequency: Option<f64>,
        phase: Option<f64>,
    ) -> Self {
        if let Some(amplitude) = amplitude {
            self.amplitude = amplitude;
        }
        if let Some(frequency) = frequency {
            self.frequency = frequency;
        }
        if let Some(phase) = phase {
            self.phase = phase;
        }
        self
    }

    /// Parameters to generate sweeps from
    pub fn parameters(&self) -> WaveformParameters {
        WaveformParameters::new(self.amplitude, self.frequency, self.phase)
    }
}

// Default value functions for serde
fn default_amplitude() -> f64 {
    WaveformParameters::default().amplitude
}

fn default_frequency() -> f64 {
    WaveformParameters::default().frequency
}
