// One-shot timer queue: supersede, cancel, and per-key independence.

use folio_core::{TimerKey, TimerPurpose, TimerQueue};

#[test]
fn schedule_and_fire_when_due() {
    let mut timers = TimerQueue::default();
    timers.schedule(TimerKey::hover_decay("GitHub"), 500.0);

    assert!(timers.fire_due(499.0).is_empty());
    let due = timers.fire_due(500.0);
    assert_eq!(due.len(), 1);
    assert_eq!(due[0].owner, "GitHub");
    assert_eq!(due[0].purpose, TimerPurpose::HoverDecay);
    assert!(timers.is_empty());
}

#[test]
fn rescheduling_supersedes_the_pending_deadline() {
    let mut timers = TimerQueue::default();
    let key = TimerKey::hover_decay("GitHub");
    timers.schedule(key.clone(), 500.0);
    timers.schedule(key.clone(), 900.0);

    assert_eq!(timers.len(), 1);
    assert_eq!(timers.deadline_ms(&key), Some(900.0));
    assert!(timers.fire_due(600.0).is_empty());
    assert_eq!(timers.fire_due(900.0).len(), 1);
}

#[test]
fn cancel_removes_the_pending_entry() {
    let mut timers = TimerQueue::default();
    let key = TimerKey::hover_decay("CV");
    timers.schedule(key.clone(), 500.0);
    timers.cancel(&key);

    assert!(timers.is_empty());
    assert!(timers.fire_due(1000.0).is_empty());
}

#[test]
fn keys_are_independent_per_anchor_and_purpose() {
    let mut timers = TimerQueue::default();
    timers.schedule(TimerKey::hover_decay("GitHub"), 500.0);
    timers.schedule(TimerKey::hover_decay("CV"), 700.0);
    timers.schedule(TimerKey::rotate_decay(), 100.0);
    assert_eq!(timers.len(), 3);

    let due = timers.fire_due(100.0);
    assert_eq!(due.len(), 1);
    assert_eq!(due[0].purpose, TimerPurpose::RotateDecay);

    let due = timers.fire_due(500.0);
    assert_eq!(due.len(), 1);
    assert_eq!(due[0].owner, "GitHub");
    assert_eq!(timers.deadline_ms(&TimerKey::hover_decay("CV")), Some(700.0));
}
