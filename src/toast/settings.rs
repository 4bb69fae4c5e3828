// SPDX-License-Identifier: MPL-2.0
//! Runtime tuning values of the toast widget.

use crate::config::{self, ToastSection};
use std::time::Duration;

/// Resolved timing, gesture and layout values.
///
/// Built from the `[toast]` section of the settings file with every value
/// clamped to a sane range, or from [`Settings::default`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub default_duration: Duration,
    pub enter_duration: Duration,
    pub exit_duration: Duration,
    pub enter_offset_y: f32,
    pub drag_activation: f32,
    pub dismiss_threshold: f32,
    pub exit_distance: f32,
    pub anchor_margin: f32,
    pub stack_spacing: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self::from(&ToastSection::default())
    }
}

impl From<&ToastSection> for Settings {
    fn from(section: &ToastSection) -> Self {
        let millis = |value: Option<u64>, default: u64, min: u64, max: u64| {
            Duration::from_millis(value.unwrap_or(default).clamp(min, max))
        };
        let pixels = |value: Option<f32>, default: f32, max: f32| {
            let value = value.filter(|v| v.is_finite()).unwrap_or(default);
            value.clamp(0.0, max)
        };

        let drag_activation = pixels(
            section.drag_activation_px,
            config::DEFAULT_DRAG_ACTIVATION_PX,
            config::MAX_GESTURE_PX,
        );
        // A swipe that dismisses must first have become a drag.
        let dismiss_threshold = pixels(
            section.dismiss_threshold_px,
            config::DEFAULT_DISMISS_THRESHOLD_PX,
            config::MAX_GESTURE_PX,
        )
        .max(drag_activation);

        Self {
            default_duration: millis(
                section.default_duration_ms,
                config::DEFAULT_DURATION_MS,
                config::MIN_DURATION_MS,
                config::MAX_DURATION_MS,
            ),
            enter_duration: millis(
                section.enter_duration_ms,
                config::DEFAULT_ENTER_DURATION_MS,
                0,
                config::MAX_ANIMATION_MS,
            ),
            exit_duration: millis(
                section.exit_duration_ms,
                config::DEFAULT_EXIT_DURATION_MS,
                0,
                config::MAX_ANIMATION_MS,
            ),
            enter_offset_y: config::ENTER_OFFSET_Y,
            drag_activation,
            dismiss_threshold,
            exit_distance: pixels(
                section.exit_distance_px,
                config::DEFAULT_EXIT_DISTANCE_PX,
                config::MAX_GESTURE_PX,
            ),
            anchor_margin: pixels(
                section.anchor_margin_px,
                config::DEFAULT_ANCHOR_MARGIN_PX,
                config::MAX_LAYOUT_PX,
            ),
            stack_spacing: pixels(
                section.stack_spacing_px,
                config::DEFAULT_STACK_SPACING_PX,
                config::MAX_LAYOUT_PX,
            ),
        }
    }
}

impl From<&config::Config> for Settings {
    fn from(config: &config::Config) -> Self {
        Self::from(&config.toast)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_widget_constants() {
        let settings = Settings::default();
        assert_eq!(settings.default_duration, Duration::from_millis(2500));
        assert_eq!(settings.enter_duration, Duration::from_millis(250));
        assert_eq!(settings.exit_duration, Duration::from_millis(200));
        assert_eq!(settings.drag_activation, 10.0);
        assert_eq!(settings.dismiss_threshold, 100.0);
        assert_eq!(settings.exit_distance, 500.0);
        assert_eq!(settings.anchor_margin, 80.0);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let section = ToastSection {
            default_duration_ms: Some(1),
            enter_duration_ms: Some(1_000_000),
            anchor_margin_px: Some(-5.0),
            exit_distance_px: Some(f32::NAN),
            ..ToastSection::default()
        };
        let settings = Settings::from(&section);

        assert_eq!(
            settings.default_duration,
            Duration::from_millis(config::MIN_DURATION_MS)
        );
        assert_eq!(
            settings.enter_duration,
            Duration::from_millis(config::MAX_ANIMATION_MS)
        );
        assert_eq!(settings.anchor_margin, 0.0);
        assert_eq!(settings.exit_distance, config::DEFAULT_EXIT_DISTANCE_PX);
    }

    #[test]
    fn dismiss_threshold_never_below_activation() {
        let section = ToastSection {
            drag_activation_px: Some(50.0),
            dismiss_threshold_px: Some(20.0),
            ..ToastSection::default()
        };
        let settings = Settings::from(&section);
        assert_eq!(settings.dismiss_threshold, 50.0);
    }
}
