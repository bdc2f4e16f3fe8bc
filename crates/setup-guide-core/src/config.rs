use serde::{Deserialize, Serialize};

use crate::error::GuideError;

/// Timings and thresholds for the guide page. Every field has a default, so a
/// partial override such as `{"swipe_threshold_px": 80}` is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuideConfig {
    pub scroll_throttle_ms: u32,
    /// Distance above a section's top at which it already counts as current.
    pub section_top_offset_px: f64,
    pub swipe_threshold_px: f64,
    pub method_loading_ms: u32,
    pub finish_advance_ms: u32,
    pub setup_loading_ms: u32,
    pub step_pulse_ms: u32,
    pub notification_enter_ms: u32,
    pub success_notification_ms: u32,
    pub copy_notification_ms: u32,
    pub transition_ms: u32,
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
    pub confetti_count: usize,
    pub confetti_lifetime_ms: u32,
}

impl Default for GuideConfig {
    fn default() -> Self {
        Self {
            scroll_throttle_ms: 100,
            section_top_offset_px: 100.0,
            swipe_threshold_px: 50.0,
            method_loading_ms: 2_000,
            finish_advance_ms: 1_000,
            setup_loading_ms: 3_000,
            step_pulse_ms: 300,
            notification_enter_ms: 100,
            success_notification_ms: 3_000,
            copy_notification_ms: 2_000,
            transition_ms: 300,
            reveal_threshold: 0.1,
            reveal_root_margin: "0px 0px -50px 0px".to_string(),
            confetti_count: 50,
            confetti_lifetime_ms: 3_000,
        }
    }
}

impl GuideConfig {
    pub fn from_json(raw: &str) -> Result<Self, GuideError> {
        let config: Self =
            serde_json::from_str(raw).map_err(|error| GuideError::ConfigParse(error.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), GuideError> {
        if self.scroll_throttle_ms == 0 {
            return Err(GuideError::ConfigRange {
                field: "scroll_throttle_ms",
                reason: "must be greater than zero",
            });
        }
        if !self.swipe_threshold_px.is_finite() || self.swipe_threshold_px < 0.0 {
            return Err(GuideError::ConfigRange {
                field: "swipe_threshold_px",
                reason: "must be a finite, non-negative distance",
            });
        }
        if !self.section_top_offset_px.is_finite() {
            return Err(GuideError::ConfigRange {
                field: "section_top_offset_px",
                reason: "must be finite",
            });
        }
        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(GuideError::ConfigRange {
                field: "reveal_threshold",
                reason: "must be between 0 and 1",
            });
        }
        if self.confetti_lifetime_ms == 0 {
            return Err(GuideError::ConfigRange {
                field: "confetti_lifetime_ms",
                reason: "must be greater than zero",
            });
        }
        Ok(())
    }
}
