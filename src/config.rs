//! Application Configuration
//!
//! Simulation timings, relevance thresholds and upload limits. Defaults
//! match the mock behavior; a JSON override can be placed in local storage
//! under [`CONFIG_STORAGE_KEY`] for local experiments.

use gloo_storage::errors::StorageError;
use gloo_storage::{LocalStorage, Storage};
use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const CONFIG_STORAGE_KEY: &str = "bid_platform_config";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub simulation: SimulationConfig,
    pub relevance: RelevanceThresholds,
    pub upload: UploadLimits,
}

/// Delays used by the mock workflows, in milliseconds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub upload_tick_ms: u32,
    pub upload_step_percent: u8,
    /// Time between the start of two parsing steps
    pub parse_step_spacing_ms: u32,
    pub parse_step_duration_ms: u32,
    pub validation_ms: u32,
    pub proposal_section_ms: u32,
    pub chat_reply_ms: u32,
    pub salesforce_sync_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelevanceThresholds {
    pub high: f64,
    pub low: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadLimits {
    pub max_file_bytes: u64,
}

/// Relevance band of a knowledge-store document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelevanceBand {
    High,
    Medium,
    Low,
}

impl RelevanceBand {
    pub fn css_class(self) -> &'static str {
        match self {
            RelevanceBand::High => "relevance high",
            RelevanceBand::Medium => "relevance medium",
            RelevanceBand::Low => "relevance low",
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            simulation: SimulationConfig::default(),
            relevance: RelevanceThresholds::default(),
            upload: UploadLimits::default(),
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            upload_tick_ms: 500,
            upload_step_percent: 20,
            parse_step_spacing_ms: 3000,
            parse_step_duration_ms: 2000,
            validation_ms: 2000,
            proposal_section_ms: 2000,
            chat_reply_ms: 1000,
            salesforce_sync_ms: 2000,
        }
    }
}

impl Default for RelevanceThresholds {
    fn default() -> Self {
        Self { high: 0.8, low: 0.5 }
    }
}

impl Default for UploadLimits {
    fn default() -> Self {
        Self { max_file_bytes: 10 * 1024 * 1024 }
    }
}

impl SimulationConfig {
    /// Idle time between one parsing step finishing and the next starting
    pub fn parse_step_gap_ms(&self) -> u32 {
        self.parse_step_spacing_ms.saturating_sub(self.parse_step_duration_ms)
    }
}

impl RelevanceThresholds {
    pub fn band(&self, score: f64) -> RelevanceBand {
        if score >= self.high {
            RelevanceBand::High
        } else if score >= self.low {
            RelevanceBand::Medium
        } else {
            RelevanceBand::Low
        }
    }

    pub fn is_low(&self, score: f64) -> bool {
        score < self.low
    }
}

impl AppConfig {
    pub fn from_value(raw: serde_json::Value) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_json::from_value(raw)?;
        config.validated()
    }

    pub fn validated(self) -> Result<Self, ConfigError> {
        let (high, low) = (self.relevance.high, self.relevance.low);
        if low > high {
            return Err(ConfigError::Thresholds { low, high });
        }
        Ok(self)
    }

    /// Defaults merged with the local-storage override, if any
    pub fn load() -> Self {
        match LocalStorage::get::<serde_json::Value>(CONFIG_STORAGE_KEY) {
            Ok(raw) => Self::from_value(raw).unwrap_or_else(|e| {
                tracing::warn!("ignoring config override: {}", e);
                Self::default()
            }),
            Err(StorageError::KeyNotFound(_)) => Self::default(),
            Err(e) => {
                tracing::warn!("config override unreadable: {}", e);
                Self::default()
            }
        }
    }
}

/// Get the config from context
pub fn use_config() -> AppConfig {
    expect_context::<AppConfig>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = AppConfig::from_value(json!({"simulation": {"chat_reply_ms": 10}})).unwrap();
        assert_eq!(config.simulation.chat_reply_ms, 10);
        assert_eq!(config.simulation.upload_tick_ms, 500);
        assert_eq!(config.relevance, RelevanceThresholds::default());
        assert_eq!(config.upload.max_file_bytes, 10 * 1024 * 1024);
    }

    #[test]
    fn test_rejects_inverted_thresholds() {
        let err = AppConfig::from_value(json!({"relevance": {"high": 0.3, "low": 0.6}})).unwrap_err();
        assert!(matches!(err, ConfigError::Thresholds { .. }));
        assert!(AppConfig::from_value(json!({"upload": {"max_file_bytes": "ten"}})).is_err());
    }

    #[test]
    fn test_relevance_bands() {
        let t = RelevanceThresholds::default();
        assert_eq!(t.band(0.95), RelevanceBand::High);
        assert_eq!(t.band(0.8), RelevanceBand::High);
        assert_eq!(t.band(0.5), RelevanceBand::Medium);
        assert_eq!(t.band(0.45), RelevanceBand::Low);
        assert!(t.is_low(0.45));
        assert!(!t.is_low(0.5));
    }

    #[test]
    fn test_parse_gap() {
        assert_eq!(SimulationConfig::default().parse_step_gap_ms(), 1000);
    }
}
