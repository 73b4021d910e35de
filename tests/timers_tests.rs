// Host-side tests for the deferred action table.

#![allow(dead_code)]
mod core {
    pub mod timers {
        include!("../src/core/timers.rs");
    }
}

use crate::core::timers::*;

#[test]
fn nothing_fires_before_deadline() {
    let mut t = Timers::default();
    t.schedule(TimerKind::HideWish, 2200.0);
    assert!(t.take_due(2199.0).is_empty());
    assert!(t.is_pending(TimerKind::HideWish));
}

#[test]
fn fires_once_at_deadline() {
    let mut t = Timers::default();
    t.schedule(TimerKind::HideWish, 2200.0);
    assert_eq!(t.take_due(2200.0).as_slice(), &[TimerKind::HideWish]);
    assert!(t.take_due(5000.0).is_empty());
    assert!(!t.is_pending(TimerKind::HideWish));
}

#[test]
fn rescheduling_supersedes_previous_deadline() {
    let mut t = Timers::default();
    assert!(!t.schedule(TimerKind::HideWish, 2200.0));
    assert!(t.schedule(TimerKind::HideWish, 3000.0));
    assert!(t.take_due(2500.0).is_empty());
    assert_eq!(t.due_at(TimerKind::HideWish), Some(3000.0));
}

#[test]
fn due_timers_come_out_in_deadline_order() {
    let mut t = Timers::default();
    t.schedule(TimerKind::ResetBalloons, 4500.0);
    t.schedule(TimerKind::FadeLoading, 1500.0);
    t.schedule(TimerKind::OpenMessage, 1200.0);
    t.schedule(TimerKind::HideWish, 1500.0);
    let due = t.take_due(10_000.0);
    assert_eq!(
        due.as_slice(),
        &[
            TimerKind::OpenMessage,
            TimerKind::HideWish,
            TimerKind::FadeLoading,
            TimerKind::ResetBalloons,
        ]
    );
}

#[test]
fn cancel_removes_pending() {
    let mut t = Timers::default();
    t.schedule(TimerKind::ResumeOrbit, 350.0);
    assert!(t.cancel(TimerKind::ResumeOrbit));
    assert!(!t.cancel(TimerKind::ResumeOrbit));
    assert!(t.take_due(1000.0).is_empty());
}
