//! Initialization-time configuration for a list engine.
//!
//! Everything here is plain data that can come from a JSON file. Item data,
//! the key extraction function and the tap callback are supplied in code
//! when constructing the engine.

use crate::constants::{
    DEFAULT_LONG_PRESS_MS, LIST_EDGE_MARGIN, MEASURE_DEBOUNCE_ANDROID_MS, MEASURE_DEBOUNCE_IOS_MS,
};
use crate::error::{ConfigError, ConfigResult};
use crate::types::{GesturePlatform, Orientation};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListConfig {
    /// Scroll axis of the list
    pub orientation: Orientation,
    /// Gesture phase reporting of the host platform
    pub platform: GesturePlatform,
    /// How long a press must be held before a drag may start
    pub long_press_delay_ms: u64,
    /// Overrides the platform's measurement debounce
    pub measure_debounce_ms: Option<u64>,
    /// Margin added to the reorderable bounds, in pixels
    pub edge_margin: f32,
    /// Whether auto-scroll requests ask the host to animate
    pub animated_scroll: bool,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            orientation: Orientation::Vertical,
            platform: GesturePlatform::default(),
            long_press_delay_ms: DEFAULT_LONG_PRESS_MS,
            measure_debounce_ms: None,
            edge_margin: LIST_EDGE_MARGIN,
            animated_scroll: true,
        }
    }
}

impl ListConfig {
    pub fn vertical() -> Self {
        Self::default()
    }

    pub fn horizontal() -> Self {
        Self {
            orientation: Orientation::Horizontal,
            ..Self::default()
        }
    }

    pub fn with_platform(mut self, platform: GesturePlatform) -> Self {
        self.platform = platform;
        self
    }

    pub fn with_long_press_delay(mut self, delay: Duration) -> Self {
        self.long_press_delay_ms = delay.as_millis() as u64;
        self
    }

    pub fn with_measure_debounce(mut self, delay: Duration) -> Self {
        self.measure_debounce_ms = Some(delay.as_millis() as u64);
        self
    }

    pub fn long_press_delay(&self) -> Duration {
        Duration::from_millis(self.long_press_delay_ms)
    }

    /// Debounce for row measurements: the override, or the platform default.
    pub fn measure_debounce(&self) -> Duration {
        let ms = self.measure_debounce_ms.unwrap_or(match self.platform {
            GesturePlatform::Ios => MEASURE_DEBOUNCE_IOS_MS,
            GesturePlatform::Android => MEASURE_DEBOUNCE_ANDROID_MS,
        });
        Duration::from_millis(ms)
    }

    /// Parse and validate a JSON document. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&content)?;
        tracing::debug!(path = %path.display(), ?config, "Loaded list config");
        Ok(config)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if !self.edge_margin.is_finite() || self.edge_margin < 0.0 {
            return Err(ConfigError::Invalid {
                field: "edge_margin",
                reason: format!("must be a non-negative number, got {}", self.edge_margin),
            });
        }
        if self.long_press_delay_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "long_press_delay_ms",
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}
