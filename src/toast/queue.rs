// SPDX-License-Identifier: MPL-2.0
//! Ordered toast queue with per-record auto-dismiss deadlines.
//!
//! The queue is the only owner of toast records. It is mutated through
//! [`ToastQueue::show`], [`ToastQueue::dismiss`] and the timer operations;
//! every removal path is keyed by id and idempotent.

use super::record::{IdGenerator, ToastConfig, ToastId, ToastPosition, ToastRecord};
use crate::config::DEFAULT_DURATION_MS;
use std::time::{Duration, Instant};

#[derive(Debug)]
struct Entry {
    record: ToastRecord,
    /// Auto-dismiss deadline. `None` once the timer has been cancelled.
    deadline: Option<Instant>,
}

/// Insertion-ordered toast records.
#[derive(Debug)]
pub struct ToastQueue {
    entries: Vec<Entry>,
    ids: IdGenerator,
    default_duration: Duration,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_DURATION_MS))
    }
}

impl ToastQueue {
    /// Creates an empty queue; toasts without a duration use `default_duration`.
    #[must_use]
    pub fn new(default_duration: Duration) -> Self {
        Self {
            entries: Vec::new(),
            ids: IdGenerator::default(),
            default_duration,
        }
    }

    /// Appends a toast and arms its auto-dismiss timer.
    ///
    /// Never fails. A toast without an id gets a fresh generated one; a toast
    /// whose id is already queued replaces the older record, which is dropped
    /// together with its timer.
    pub fn show(&mut self, config: ToastConfig, now: Instant) -> ToastId {
        let id = match config.id.clone() {
            Some(id) => {
                if self.dismiss(&id) {
                    tracing::debug!(%id, "replacing queued toast with the same id");
                }
                id
            }
            None => {
                // Skip counter values a caller already used as an explicit id.
                let mut id = self.ids.next_id();
                while self.contains(&id) {
                    id = self.ids.next_id();
                }
                id
            }
        };

        let record = ToastRecord::from_config(config, id.clone(), self.default_duration);
        let deadline = now.checked_add(record.duration());
        tracing::debug!(
            %id,
            kind = record.kind().as_str(),
            position = record.position().as_str(),
            duration_ms = u64::try_from(record.duration().as_millis()).unwrap_or(u64::MAX),
            "toast shown"
        );
        self.entries.push(Entry { record, deadline });
        id
    }

    /// Removes a toast by id.
    ///
    /// Returns `true` if the toast was queued. Removing an absent id leaves
    /// the queue untouched.
    pub fn dismiss(&mut self, id: &ToastId) -> bool {
        if let Some(pos) = self.entries.iter().position(|e| e.record.id() == id) {
            self.entries.remove(pos);
            true
        } else {
            false
        }
    }

    /// Disarms the auto-dismiss timer of a queued toast without removing it.
    ///
    /// Returns `true` if a live timer was cancelled.
    pub fn cancel_timer(&mut self, id: &ToastId) -> bool {
        self.entries
            .iter_mut()
            .find(|e| e.record.id() == id)
            .and_then(|e| e.deadline.take())
            .is_some()
    }

    /// Removes every toast whose deadline has been reached.
    ///
    /// Returns the removed ids in insertion order.
    pub fn expire(&mut self, now: Instant) -> Vec<ToastId> {
        let mut expired = Vec::new();
        self.entries.retain(|entry| match entry.deadline {
            Some(deadline) if deadline <= now => {
                expired.push(entry.record.id().clone());
                false
            }
            _ => true,
        });
        expired
    }

    /// Returns the deadline of a queued toast, if its timer is still armed.
    #[must_use]
    pub fn deadline(&self, id: &ToastId) -> Option<Instant> {
        self.entries
            .iter()
            .find(|e| e.record.id() == id)
            .and_then(|e| e.deadline)
    }

    /// Returns the record with the given id.
    #[must_use]
    pub fn get(&self, id: &ToastId) -> Option<&ToastRecord> {
        self.iter().find(|record| record.id() == id)
    }

    /// Returns whether a toast with the given id is queued.
    #[must_use]
    pub fn contains(&self, id: &ToastId) -> bool {
        self.get(id).is_some()
    }

    /// All records, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ToastRecord> {
        self.entries.iter().map(|e| &e.record)
    }

    /// Records anchored at `position`, in insertion order.
    pub fn at(&self, position: ToastPosition) -> impl Iterator<Item = &ToastRecord> {
        self.iter().filter(move |record| record.position() == position)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes every toast.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids_at(queue: &ToastQueue, position: ToastPosition) -> Vec<String> {
        queue
            .at(position)
            .map(|r| r.id().as_str().to_string())
            .collect()
    }

    #[test]
    fn new_queue_is_empty() {
        let queue = ToastQueue::default();
        assert!(queue.is_empty());
        assert_eq!(queue.len(), 0);
    }

    #[test]
    fn show_appends_one_record() {
        let mut queue = ToastQueue::default();
        let now = Instant::now();

        let id = queue.show(ToastConfig::new("saved"), now);

        assert_eq!(queue.len(), 1);
        assert!(queue.contains(&id));
        assert_eq!(queue.at(ToastPosition::Bottom).count(), 1);
    }

    #[test]
    fn ids_without_caller_value_never_collide() {
        let mut queue = ToastQueue::default();
        let now = Instant::now();

        let first = queue.show(ToastConfig::new("a"), now);
        let second = queue.show(ToastConfig::new("b"), now);

        assert_ne!(first, second);
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn generated_id_skips_caller_id_with_the_same_value() {
        let mut queue = ToastQueue::default();
        let now = Instant::now();

        let explicit = queue.show(ToastConfig::new("a").id("toast-0"), now);
        let generated = queue.show(ToastConfig::new("b"), now);

        assert_ne!(explicit, generated);
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.iter().filter(|r| r.id() == &explicit).count(), 1);
    }

    #[test]
    fn dismiss_is_idempotent() {
        let mut queue = ToastQueue::default();
        let id = queue.show(ToastConfig::new("a"), Instant::now());

        assert!(queue.dismiss(&id));
        assert!(!queue.dismiss(&id));
        assert!(queue.is_empty());
    }

    #[test]
    fn dismiss_unknown_id_is_a_no_op() {
        let mut queue = ToastQueue::default();
        queue.show(ToastConfig::new("a"), Instant::now());

        assert!(!queue.dismiss(&ToastId::from("missing")));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn records_stay_fifo_within_a_position() {
        let mut queue = ToastQueue::default();
        let now = Instant::now();
        queue.show(ToastConfig::new("1").id("first"), now);
        queue.show(ToastConfig::new("x").id("other").position(ToastPosition::Top), now);
        queue.show(ToastConfig::new("2").id("second"), now);

        assert_eq!(ids_at(&queue, ToastPosition::Bottom), ["first", "second"]);
        assert_eq!(ids_at(&queue, ToastPosition::Top), ["other"]);
        assert!(ids_at(&queue, ToastPosition::Center).is_empty());
    }

    #[test]
    fn expire_removes_only_due_records() {
        let mut queue = ToastQueue::default();
        let now = Instant::now();
        let short = queue.show(ToastConfig::new("short").duration(Duration::from_millis(100)), now);
        let long = queue.show(ToastConfig::new("long").duration(Duration::from_secs(5)), now);

        assert!(queue.expire(now + Duration::from_millis(99)).is_empty());

        let expired = queue.expire(now + Duration::from_millis(100));
        assert_eq!(expired, vec![short]);
        assert!(queue.contains(&long));
    }

    #[test]
    fn default_duration_is_applied() {
        let mut queue = ToastQueue::default();
        let now = Instant::now();
        let id = queue.show(ToastConfig::new("default"), now);

        assert_eq!(queue.deadline(&id), Some(now + Duration::from_millis(2500)));
        assert!(queue.expire(now + Duration::from_millis(2499)).is_empty());
        assert_eq!(queue.expire(now + Duration::from_millis(2500)), vec![id]);
    }

    #[test]
    fn cancelled_timer_never_expires() {
        let mut queue = ToastQueue::default();
        let now = Instant::now();
        let id = queue.show(ToastConfig::new("a"), now);

        assert!(queue.cancel_timer(&id));
        assert!(!queue.cancel_timer(&id));
        assert!(queue.expire(now + Duration::from_secs(60)).is_empty());
        assert!(queue.contains(&id));
    }

    #[test]
    fn duplicate_id_replaces_previous_record() {
        let mut queue = ToastQueue::default();
        let now = Instant::now();
        queue.show(ToastConfig::new("old").id("same"), now);
        queue.show(ToastConfig::new("middle").id("mid"), now);
        let later = now + Duration::from_secs(1);
        queue.show(ToastConfig::new("new").id("same"), later);

        assert_eq!(queue.len(), 2);
        let same = ToastId::from("same");
        assert_eq!(
            queue.get(&same).and_then(|r| r.content().as_text()),
            Some("new")
        );
        assert_eq!(queue.deadline(&same), Some(later + Duration::from_millis(2500)));
        assert_eq!(ids_at(&queue, ToastPosition::Bottom), ["mid", "same"]);
    }

    #[test]
    fn clear_removes_all() {
        let mut queue = ToastQueue::default();
        for i in 0..5 {
            queue.show(ToastConfig::new(format!("toast {i}")), Instant::now());
        }
        queue.clear();
        assert!(queue.is_empty());
    }
}
