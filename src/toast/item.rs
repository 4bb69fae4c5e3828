// SPDX-License-Identifier: MPL-2.0
//! Presentation and gesture state of a single on-screen toast.
//!
//! A [`ToastItem`] owns the transient visual properties of one toast
//! (opacity and offsets) and decides when a swipe should dismiss it. It knows
//! nothing about the toast's timeout: the owner removes the record when the
//! timer fires, or when [`ToastItem::tick`] reports [`ItemEvent::Dismissed`].
//!
//! ```text
//! Entering -> Resting -> (idle | Dragging) -> Dismissing -> Removed
//!                ^             |
//!                +-- spring ---+   (release below the dismiss threshold)
//! ```

use super::animation::AnimatedValue;
use super::settings::Settings;
use std::time::Instant;

/// Lifecycle phase of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Fading and sliding in.
    Entering,
    /// At rest, or springing back to rest after a short drag.
    Resting,
    /// Following the pointer horizontally.
    Dragging,
    /// Sliding out after a swipe.
    Dismissing,
    /// Exit animation finished; the owner should drop the item.
    Removed,
}

/// Outcome of releasing the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Release {
    /// No drag was in progress.
    Ignored,
    /// The drag was too short; the item springs back.
    SpringBack,
    /// The drag was long enough; the item slides out.
    Dismiss,
}

/// Notification produced by [`ToastItem::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemEvent {
    /// The exit animation completed; remove the toast.
    Dismissed,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Gesture {
    Idle,
    /// Pointer is down but has not yet moved past the activation threshold.
    Pressed { origin_x: f32 },
    Dragging { origin_x: f32, dx: f32 },
}

#[derive(Debug, Clone)]
pub struct ToastItem {
    opacity: AnimatedValue,
    offset_y: AnimatedValue,
    offset_x: AnimatedValue,
    gesture: Gesture,
    exiting: bool,
    removed: bool,
    settings: Settings,
}

impl ToastItem {
    /// Creates an item and starts its enter animation.
    #[must_use]
    pub fn new(settings: Settings, now: Instant) -> Self {
        let mut opacity = AnimatedValue::new(0.0);
        let mut offset_y = AnimatedValue::new(settings.enter_offset_y);
        // Both run concurrently.
        opacity.timing(1.0, settings.enter_duration, now);
        offset_y.timing(0.0, settings.enter_duration, now);

        Self {
            opacity,
            offset_y,
            offset_x: AnimatedValue::new(0.0),
            gesture: Gesture::Idle,
            exiting: false,
            removed: false,
            settings,
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.removed {
            Phase::Removed
        } else if self.exiting {
            Phase::Dismissing
        } else if matches!(self.gesture, Gesture::Dragging { .. }) {
            Phase::Dragging
        } else if self.opacity.is_animating() || self.offset_y.is_animating() {
            Phase::Entering
        } else {
            Phase::Resting
        }
    }

    /// Pointer went down on the item at horizontal position `x`.
    ///
    /// Returns `false` if the item no longer accepts gestures.
    pub fn press(&mut self, x: f32) -> bool {
        if self.exiting || self.removed {
            return false;
        }
        self.gesture = Gesture::Pressed { origin_x: x };
        true
    }

    /// Pointer moved to horizontal position `x`.
    pub fn move_to(&mut self, x: f32) {
        match self.gesture {
            Gesture::Idle => {}
            Gesture::Pressed { origin_x } => {
                let dx = x - origin_x;
                if dx.abs() > self.settings.drag_activation {
                    tracing::trace!(dx, "drag started");
                    self.gesture = Gesture::Dragging { origin_x, dx };
                    self.offset_x.set(dx);
                }
            }
            Gesture::Dragging { origin_x, .. } => {
                let dx = x - origin_x;
                self.gesture = Gesture::Dragging { origin_x, dx };
                self.offset_x.set(dx);
            }
        }
    }

    /// Pointer was released.
    pub fn release(&mut self, now: Instant) -> Release {
        let gesture = std::mem::replace(&mut self.gesture, Gesture::Idle);
        let Gesture::Dragging { dx, .. } = gesture else {
            return Release::Ignored;
        };

        if dx.abs() >= self.settings.dismiss_threshold {
            tracing::trace!(dx, "swipe past threshold");
            self.start_exit(dx, now);
            Release::Dismiss
        } else {
            tracing::trace!(dx, "swipe too short, springing back");
            self.offset_x.spring(0.0, now);
            Release::SpringBack
        }
    }

    /// Slides the item out horizontally in the direction of `direction`'s
    /// sign. Does nothing if it is already leaving.
    pub fn start_exit(&mut self, direction: f32, now: Instant) {
        if self.exiting || self.removed {
            return;
        }
        let target = if direction < 0.0 {
            -self.settings.exit_distance
        } else {
            self.settings.exit_distance
        };
        self.gesture = Gesture::Idle;
        self.exiting = true;
        self.offset_x.timing(target, self.settings.exit_duration, now);
    }

    /// Advances every running animation to `now`.
    pub fn tick(&mut self, now: Instant) -> Option<ItemEvent> {
        if self.removed {
            return None;
        }
        self.opacity.step(now);
        self.offset_y.step(now);
        let offset_done = self.offset_x.step(now);

        if self.exiting && (offset_done || !self.offset_x.is_animating()) {
            self.removed = true;
            return Some(ItemEvent::Dismissed);
        }
        None
    }

    /// Whether any animation is running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.opacity.is_animating() || self.offset_y.is_animating() || self.offset_x.is_animating()
    }

    #[must_use]
    pub fn is_pressed(&self) -> bool {
        !matches!(self.gesture, Gesture::Idle)
    }

    #[must_use]
    pub fn opacity(&self) -> f32 {
        self.opacity.get()
    }

    #[must_use]
    pub fn offset_x(&self) -> f32 {
        self.offset_x.get()
    }

    #[must_use]
    pub fn offset_y(&self) -> f32 {
        self.offset_y.get()
    }
}
