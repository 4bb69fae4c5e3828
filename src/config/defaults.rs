// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Timing**: Auto-dismiss delay and animation durations
//! - **Gesture**: Swipe activation and dismissal distances
//! - **Layout**: Anchor margins, stacking and width limits

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// Default auto-dismiss delay (in milliseconds).
pub const DEFAULT_DURATION_MS: u64 = 2500;

/// Minimum auto-dismiss delay accepted from the settings file.
pub const MIN_DURATION_MS: u64 = 250;

/// Maximum auto-dismiss delay accepted from the settings file.
pub const MAX_DURATION_MS: u64 = 60_000;

/// Fade/slide-in duration (in milliseconds).
pub const DEFAULT_ENTER_DURATION_MS: u64 = 250;

/// Slide-out duration after a successful swipe (in milliseconds).
pub const DEFAULT_EXIT_DURATION_MS: u64 = 200;

/// Upper bound for enter and exit animations.
pub const MAX_ANIMATION_MS: u64 = 2000;

/// Initial vertical offset of an entering toast.
pub const ENTER_OFFSET_Y: f32 = 30.0;

/// Interval between animation ticks while toasts are on screen.
pub const FRAME_INTERVAL_MS: u64 = 16;

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Horizontal travel before a press turns into a drag.
pub const DEFAULT_DRAG_ACTIVATION_PX: f32 = 10.0;

/// Horizontal travel at release that dismisses the toast.
pub const DEFAULT_DISMISS_THRESHOLD_PX: f32 = 100.0;

/// Horizontal distance a dismissed toast slides out to.
pub const DEFAULT_EXIT_DISTANCE_PX: f32 = 500.0;

/// Upper bound for every gesture distance.
pub const MAX_GESTURE_PX: f32 = 2000.0;

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Distance of the top and bottom layers from the viewport edge.
pub const DEFAULT_ANCHOR_MARGIN_PX: f32 = 80.0;

/// Vertical gap between stacked toasts.
pub const DEFAULT_STACK_SPACING_PX: f32 = 8.0;

/// Upper bound for layout distances.
pub const MAX_LAYOUT_PX: f32 = 400.0;

/// Minimum toast width as a fraction of the viewport width.
pub const MIN_WIDTH_RATIO: f32 = 0.6;

/// Maximum toast width as a fraction of the viewport width.
pub const MAX_WIDTH_RATIO: f32 = 0.9;

/// Viewport width assumed until the first resize event arrives.
pub const FALLBACK_VIEWPORT_WIDTH: f32 = 400.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_DURATION_MS > 0);
    assert!(DEFAULT_DURATION_MS >= MIN_DURATION_MS);
    assert!(DEFAULT_DURATION_MS <= MAX_DURATION_MS);

    assert!(DEFAULT_ENTER_DURATION_MS <= MAX_ANIMATION_MS);
    assert!(DEFAULT_EXIT_DURATION_MS <= MAX_ANIMATION_MS);
    assert!(FRAME_INTERVAL_MS > 0);

    assert!(DEFAULT_DRAG_ACTIVATION_PX < DEFAULT_DISMISS_THRESHOLD_PX);
    assert!(DEFAULT_DISMISS_THRESHOLD_PX < DEFAULT_EXIT_DISTANCE_PX);
    assert!(DEFAULT_EXIT_DISTANCE_PX <= MAX_GESTURE_PX);

    assert!(DEFAULT_ANCHOR_MARGIN_PX <= MAX_LAYOUT_PX);
    assert!(DEFAULT_STACK_SPACING_PX <= MAX_LAYOUT_PX);
    assert!(MIN_WIDTH_RATIO < MAX_WIDTH_RATIO);
    assert!(MAX_WIDTH_RATIO <= 1.0);
};
