// SPDX-License-Identifier: MPL-2.0
//! The toast engine shared by the ambient and scoped forms.
//!
//! A [`Toaster`] couples the [`ToastQueue`] with one [`ToastItem`] per queued
//! record, routes pointer input to the item being dragged and steps every
//! animation on each tick. Both removal paths (timer and swipe) end in the
//! same idempotent [`Toaster::dismiss`].

use super::clock::{Clock, SystemClock};
use super::item::{ItemEvent, Release, ToastItem};
use super::queue::ToastQueue;
use super::record::{ToastConfig, ToastId};
use super::settings::Settings;
use crate::config::{FALLBACK_VIEWPORT_WIDTH, FRAME_INTERVAL_MS};
use iced::{event, mouse, time, touch, window, Point, Size, Subscription};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Messages driving a [`Toaster`].
#[derive(Debug, Clone)]
pub enum Message {
    /// Animation frame / timer check.
    Tick(Instant),
    /// Pointer went down on a toast.
    Pressed(ToastId),
    /// Cursor or finger moved.
    PointerMoved(Point),
    /// Cursor button or finger released.
    Released,
    /// Remove a toast right away.
    Dismiss(ToastId),
    /// Viewport size changed.
    Resized(Size),
}

#[derive(Debug)]
pub struct Toaster {
    queue: ToastQueue,
    items: HashMap<ToastId, ToastItem>,
    clock: Box<dyn Clock>,
    settings: Settings,
    /// Last known pointer position.
    pointer: Option<Point>,
    /// Toast currently under a pressed pointer.
    active: Option<ToastId>,
    /// Set when a press arrived before any pointer position was known.
    awaiting_origin: bool,
    viewport: Size,
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl Toaster {
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self::with_clock(settings, SystemClock)
    }

    /// Creates a toaster that arms its timers from `clock`.
    #[must_use]
    pub fn with_clock(settings: Settings, clock: impl Clock + 'static) -> Self {
        Self {
            queue: ToastQueue::new(settings.default_duration),
            items: HashMap::new(),
            clock: Box::new(clock),
            settings,
            pointer: None,
            active: None,
            awaiting_origin: false,
            viewport: Size::new(FALLBACK_VIEWPORT_WIDTH, 0.0),
        }
    }

    /// Queues a toast, arms its timer and starts its enter animation.
    pub fn show_toast(&mut self, config: ToastConfig) -> ToastId {
        let now = self.clock.now();
        let id = self.queue.show(config, now);
        if self.active.as_ref() == Some(&id) {
            self.active = None;
        }
        self.items
            .insert(id.clone(), ToastItem::new(self.settings, now));
        id
    }

    /// Removes a toast by id, whatever triggered the removal.
    ///
    /// Returns `true` if the toast was queued; calling it again for the same
    /// id is a no-op.
    pub fn dismiss(&mut self, id: &ToastId) -> bool {
        self.items.remove(id);
        if self.active.as_ref() == Some(id) {
            self.active = None;
            self.awaiting_origin = false;
        }
        let removed = self.queue.dismiss(id);
        if removed {
            tracing::debug!(%id, "toast dismissed");
        }
        removed
    }

    /// Handles a toaster message.
    pub fn update(&mut self, message: Message) {
        match message {
            Message::Tick(now) => self.tick(now),
            Message::Pressed(id) => self.press(id),
            Message::PointerMoved(position) => self.pointer_moved(position),
            Message::Released => self.release(),
            Message::Dismiss(id) => {
                self.dismiss(&id);
            }
            Message::Resized(size) => self.viewport = size,
        }
    }

    /// Expires due timers, then advances every animation to `now`.
    pub fn tick(&mut self, now: Instant) {
        for id in self.queue.expire(now) {
            tracing::debug!(%id, "toast expired");
            self.items.remove(&id);
            if self.active.as_ref() == Some(&id) {
                self.active = None;
                self.awaiting_origin = false;
            }
        }

        let finished: Vec<ToastId> = self
            .items
            .iter_mut()
            .filter_map(|(id, item)| match item.tick(now) {
                Some(ItemEvent::Dismissed) => Some(id.clone()),
                None => None,
            })
            .collect();

        for id in finished {
            self.dismiss(&id);
        }
    }

    fn press(&mut self, id: ToastId) {
        let Some(item) = self.items.get_mut(&id) else {
            return;
        };
        match self.pointer {
            Some(position) => {
                if !item.press(position.x) {
                    return;
                }
                self.awaiting_origin = false;
            }
            None => self.awaiting_origin = true,
        }
        self.active = Some(id);
    }

    fn pointer_moved(&mut self, position: Point) {
        self.pointer = Some(position);
        let Some(id) = &self.active else {
            return;
        };
        let Some(item) = self.items.get_mut(id) else {
            self.active = None;
            return;
        };
        if self.awaiting_origin {
            self.awaiting_origin = false;
            if !item.press(position.x) {
                self.active = None;
            }
            return;
        }
        item.move_to(position.x);
    }

    fn release(&mut self) {
        self.awaiting_origin = false;
        let Some(id) = self.active.take() else {
            return;
        };
        let now = self.clock.now();
        let Some(item) = self.items.get_mut(&id) else {
            return;
        };
        if item.release(now) == Release::Dismiss {
            // The exit animation owns the removal from here on.
            self.queue.cancel_timer(&id);
            tracing::debug!(%id, "toast swiped away");
        }
    }

    /// Events and ticks this toaster needs.
    ///
    /// Ticks run at animation frame rate, and only while toasts are queued.
    pub fn subscription(&self) -> Subscription<Message> {
        let events = event::listen_with(|event, _status, _window| route_event(&event));

        if self.queue.is_empty() {
            events
        } else {
            let ticks =
                time::every(Duration::from_millis(FRAME_INTERVAL_MS)).map(Message::Tick);
            Subscription::batch([events, ticks])
        }
    }

    #[must_use]
    pub fn queue(&self) -> &ToastQueue {
        &self.queue
    }

    #[must_use]
    pub fn item(&self, id: &ToastId) -> Option<&ToastItem> {
        self.items.get(id)
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[must_use]
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Whether any item is still animating.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.items.values().any(ToastItem::is_animating)
    }
}

/// Maps native events to toaster messages.
fn route_event(event: &event::Event) -> Option<Message> {
    match event {
        event::Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(Message::PointerMoved(*position))
        }
        event::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
            Some(Message::Released)
        }
        event::Event::Touch(
            touch::Event::FingerPressed { position, .. } | touch::Event::FingerMoved { position, .. },
        ) => Some(Message::PointerMoved(*position)),
        event::Event::Touch(touch::Event::FingerLifted { .. } | touch::Event::FingerLost { .. }) => {
            Some(Message::Released)
        }
        event::Event::Window(window::Event::Resized(size)) => Some(Message::Resized(*size)),
        event::Event::Window(window::Event::Opened { size, .. }) => Some(Message::Resized(*size)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toast::clock::ManualClock;
    use crate::toast::item::Phase;
    use crate::toast::record::ToastPosition;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn toaster() -> (Toaster, ManualClock) {
        let clock = ManualClock::new();
        (Toaster::with_clock(Settings::default(), clock.clone()), clock)
    }

    /// Advances the clock in frame-sized steps, ticking each time.
    fn run(toaster: &mut Toaster, clock: &ManualClock, total: Duration) {
        let mut elapsed = Duration::ZERO;
        while elapsed < total {
            let step = ms(16).min(total - elapsed);
            elapsed += step;
            let now = clock.advance(step);
            toaster.update(Message::Tick(now));
        }
    }

    fn swipe(toaster: &mut Toaster, id: &ToastId, from: f32, to: f32) {
        toaster.update(Message::PointerMoved(Point::new(from, 300.0)));
        toaster.update(Message::Pressed(id.clone()));
        toaster.update(Message::PointerMoved(Point::new((from + to) / 2.0, 300.0)));
        toaster.update(Message::PointerMoved(Point::new(to, 300.0)));
        toaster.update(Message::Released);
    }

    #[test]
    fn show_creates_entering_item() {
        let (mut toaster, _) = toaster();
        let id = toaster.show_toast(ToastConfig::new("hi"));

        assert_eq!(toaster.len(), 1);
        assert_eq!(toaster.item(&id).map(ToastItem::phase), Some(Phase::Entering));
    }

    #[test]
    fn timer_removes_record_and_item() {
        let (mut toaster, clock) = toaster();
        let id = toaster.show_toast(ToastConfig::new("bye").duration(ms(1000)));

        run(&mut toaster, &clock, ms(999));
        assert!(toaster.queue().contains(&id));

        run(&mut toaster, &clock, ms(1));
        assert!(toaster.is_empty());
        assert!(toaster.item(&id).is_none());
    }

    #[test]
    fn long_swipe_removes_toast_after_exit_animation() {
        let (mut toaster, clock) = toaster();
        let id = toaster.show_toast(ToastConfig::new("swipe me"));
        run(&mut toaster, &clock, ms(300));

        swipe(&mut toaster, &id, 100.0, 260.0);
        assert_eq!(toaster.item(&id).map(ToastItem::phase), Some(Phase::Dismissing));
        assert!(toaster.queue().contains(&id));

        run(&mut toaster, &clock, ms(250));
        assert!(!toaster.queue().contains(&id));
    }

    #[test]
    fn short_swipe_keeps_toast_queued() {
        let (mut toaster, clock) = toaster();
        let id = toaster.show_toast(ToastConfig::new("stay").duration(Duration::from_secs(10)));
        run(&mut toaster, &clock, ms(300));

        swipe(&mut toaster, &id, 100.0, 150.0);
        run(&mut toaster, &clock, Duration::from_secs(2));

        let item = toaster.item(&id).expect("toast should still be queued");
        assert_eq!(item.offset_x(), 0.0);
        assert_eq!(item.phase(), Phase::Resting);
    }

    #[test]
    fn swipe_cancels_timer_so_exit_completes() {
        let (mut toaster, clock) = toaster();
        let id = toaster.show_toast(ToastConfig::new("race").duration(ms(400)));
        run(&mut toaster, &clock, ms(300));

        swipe(&mut toaster, &id, 0.0, -150.0);
        assert_eq!(toaster.queue().deadline(&id), None);

        // The original deadline passes mid-animation without removing the toast.
        run(&mut toaster, &clock, ms(150));
        assert!(toaster.queue().contains(&id));

        run(&mut toaster, &clock, ms(100));
        assert!(toaster.is_empty());
    }

    #[test]
    fn every_queued_record_keeps_its_item_when_ids_look_alike() {
        let (mut toaster, _) = toaster();
        let explicit = toaster.show_toast(ToastConfig::new("explicit").id("toast-0"));
        let generated = toaster.show_toast(ToastConfig::new("generated"));
        assert_ne!(explicit, generated);

        assert!(toaster.dismiss(&generated));
        assert_eq!(toaster.len(), 1);
        assert!(toaster
            .queue()
            .iter()
            .all(|record| toaster.item(record.id()).is_some()));
    }

    #[test]
    fn dismiss_twice_is_a_no_op() {
        let (mut toaster, _) = toaster();
        let id = toaster.show_toast(ToastConfig::new("once"));
        toaster.show_toast(ToastConfig::new("other"));

        assert!(toaster.dismiss(&id));
        assert!(!toaster.dismiss(&id));
        assert_eq!(toaster.len(), 1);
    }

    #[test]
    fn press_before_pointer_position_uses_first_move_as_origin() {
        let (mut toaster, clock) = toaster();
        let id = toaster.show_toast(ToastConfig::new("touch"));
        run(&mut toaster, &clock, ms(300));

        toaster.update(Message::Pressed(id.clone()));
        toaster.update(Message::PointerMoved(Point::new(50.0, 10.0)));
        toaster.update(Message::PointerMoved(Point::new(70.0, 10.0)));

        assert_eq!(toaster.item(&id).map(ToastItem::offset_x), Some(20.0));
    }

    #[test]
    fn pointer_moves_without_press_do_nothing() {
        let (mut toaster, clock) = toaster();
        let id = toaster.show_toast(ToastConfig::new("still"));
        run(&mut toaster, &clock, ms(300));

        toaster.update(Message::PointerMoved(Point::new(0.0, 0.0)));
        toaster.update(Message::PointerMoved(Point::new(400.0, 0.0)));
        toaster.update(Message::Released);

        assert_eq!(toaster.item(&id).map(ToastItem::offset_x), Some(0.0));
    }

    #[test]
    fn expiry_during_drag_clears_active_gesture() {
        let (mut toaster, clock) = toaster();
        let id = toaster.show_toast(ToastConfig::new("short").duration(ms(500)));
        toaster.update(Message::PointerMoved(Point::new(0.0, 0.0)));
        toaster.update(Message::Pressed(id.clone()));
        toaster.update(Message::PointerMoved(Point::new(40.0, 0.0)));

        run(&mut toaster, &clock, ms(500));
        assert!(toaster.is_empty());

        // A late release must not resurrect anything.
        toaster.update(Message::Released);
        assert!(toaster.is_empty());
    }

    #[test]
    fn resize_updates_viewport() {
        let (mut toaster, _) = toaster();
        toaster.update(Message::Resized(Size::new(1024.0, 768.0)));
        assert_eq!(toaster.viewport(), Size::new(1024.0, 768.0));
    }

    #[test]
    fn route_event_maps_pointer_events() {
        let moved = event::Event::Mouse(mouse::Event::CursorMoved {
            position: Point::new(3.0, 4.0),
        });
        assert!(matches!(
            route_event(&moved),
            Some(Message::PointerMoved(p)) if p == Point::new(3.0, 4.0)
        ));

        let released = event::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left));
        assert!(matches!(route_event(&released), Some(Message::Released)));

        let right = event::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Right));
        assert!(route_event(&right).is_none());
    }

    #[test]
    fn positions_are_kept_per_record() {
        let (mut toaster, _) = toaster();
        toaster.show_toast(ToastConfig::new("t").position(ToastPosition::Top));
        toaster.show_toast(ToastConfig::new("c").position(ToastPosition::Center));
        toaster.show_toast(ToastConfig::new("b"));

        for position in ToastPosition::ALL {
            assert_eq!(toaster.queue().at(position).count(), 1);
        }
    }
}
