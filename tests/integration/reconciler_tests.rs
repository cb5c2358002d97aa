//! Integration tests for the StateStore → Reconciler → actuators cycle.

use std::sync::Arc;

use crate::mock_ports::{
    ActuatorCall, MockActuators, MockClock, RecordingSink, local, monday_evening,
    monday_late_morning,
};

use homesync::app::events::ReconcileEvent;
use homesync::app::ports::Clock;
use homesync::app::service::Reconciler;
use homesync::config::SystemConfig;
use homesync::history::HISTORY_CAPACITY;
use homesync::snapshot::InputSource;
use homesync::store::StateStore;

fn make(store: &Arc<StateStore>) -> (Reconciler, MockActuators, RecordingSink) {
    (
        Reconciler::new(Arc::clone(store), SystemConfig::default()),
        MockActuators::new(),
        RecordingSink::new(),
    )
}

// ── Hysteresis ────────────────────────────────────────────────

#[test]
fn standby_only_after_a_full_off_window() {
    let store = Arc::new(StateStore::new());
    store.mutate("amp", monday_evening(), |s| s.amp_powered = true);
    let (mut rec, mut hw, mut sink) = make(&store);
    let clock = MockClock::at(monday_evening());

    for _ in 0..HISTORY_CAPACITY {
        rec.cycle(clock.now(), &mut hw, &mut sink);
        clock.advance(1);
    }
    assert!(hw.calls.is_empty(), "window still filling: {:?}", hw.calls);
    assert_eq!(sink.deferrals(), HISTORY_CAPACITY);

    rec.cycle(clock.now(), &mut hw, &mut sink);
    assert_eq!(hw.calls, [ActuatorCall::Standby]);
    assert!(sink.events.contains(&ReconcileEvent::AmplifierStandby));
}

#[test]
fn one_on_sample_holds_standby_back() {
    let store = Arc::new(StateStore::new());
    store.mutate("amp", monday_evening(), |s| s.amp_powered = true);
    let (mut rec, mut hw, mut sink) = make(&store);
    let clock = MockClock::at(monday_evening());

    // Someone home for the first sample.
    store.mutate("lock", clock.now(), |s| s.lock_unlocked = true);
    rec.cycle(clock.now(), &mut hw, &mut sink);
    store.mutate("lock", clock.now(), |s| s.lock_unlocked = false);

    for _ in 1..HISTORY_CAPACITY {
        clock.advance(1);
        rec.cycle(clock.now(), &mut hw, &mut sink);
    }
    clock.advance(1);
    rec.cycle(clock.now(), &mut hw, &mut sink);
    assert!(hw.calls.is_empty(), "on sample still in window");

    // The on sample was overwritten by the cycle above.
    clock.advance(1);
    rec.cycle(clock.now(), &mut hw, &mut sink);
    assert_eq!(hw.calls, [ActuatorCall::Standby]);
}

#[test]
fn bursts_within_a_second_do_not_fill_the_window() {
    let store = Arc::new(StateStore::new());
    store.mutate("amp", monday_evening(), |s| s.amp_powered = true);
    let (mut rec, mut hw, mut sink) = make(&store);

    for _ in 0..500 {
        rec.cycle(monday_evening(), &mut hw, &mut sink);
    }
    assert!(hw.calls.is_empty());
    assert_eq!(store.history().len(), 1);
}

// ── Power and input ───────────────────────────────────────────

#[test]
fn power_on_is_held_back_while_the_input_changes() {
    let store = Arc::new(StateStore::new());
    store.mutate("stick", monday_evening(), |s| {
        s.media_playing = true;
        s.lock_unlocked = true;
    });
    let (mut rec, mut hw, mut sink) = make(&store);

    let next = rec.cycle(monday_evening(), &mut hw, &mut sink);
    assert!(next.amp_powered);
    assert_eq!(next.amp_source, InputSource::Game);
    assert_eq!(hw.calls, [ActuatorCall::SelectSource(InputSource::Game)]);

    // Once the amplifier reports the new input, power-on follows.
    store.mutate("amp", monday_evening(), |s| s.amp_source = InputSource::Game);
    rec.cycle(monday_evening(), &mut hw, &mut sink);
    assert_eq!(hw.take().last(), Some(&ActuatorCall::PowerOn));
}

#[test]
fn input_follows_priority_while_on() {
    let store = Arc::new(StateStore::new());
    store.mutate("amp", monday_evening(), |s| {
        s.amp_powered = true;
        s.amp_source = InputSource::Game;
    });
    store.mutate("cast", monday_evening(), |s| {
        s.media_playing = true;
        s.media_audio_only_playing = true;
    });
    let (mut rec, mut hw, mut sink) = make(&store);

    rec.cycle(monday_evening(), &mut hw, &mut sink);
    assert_eq!(hw.calls, [ActuatorCall::SelectSource(InputSource::Audio)]);
    assert!(sink.events.contains(&ReconcileEvent::SourceChanged {
        from: InputSource::Game,
        to: InputSource::Audio,
    }));
}

#[test]
fn reconciler_never_writes_back() {
    let store = Arc::new(StateStore::new());
    store.mutate("lock", monday_evening(), |s| s.lock_unlocked = true);
    let before = store.read();
    let (mut rec, mut hw, mut sink) = make(&store);

    let next = rec.cycle(monday_evening(), &mut hw, &mut sink);
    assert_ne!(next.amp_powered, before.amp_powered);
    assert_eq!(store.read(), before);
}

// ── Cleaning robot ────────────────────────────────────────────

#[test]
fn cleaning_starts_once_per_day() {
    let store = Arc::new(StateStore::new());
    let (mut rec, mut hw, mut sink) = make(&store);
    let clock = MockClock::at(monday_late_morning());

    rec.cycle(clock.now(), &mut hw, &mut sink);
    for _ in 0..30 {
        clock.advance(60);
        rec.cycle(clock.now(), &mut hw, &mut sink);
    }
    assert_eq!(hw.count(ActuatorCall::StartCleaning), 1);
    assert_eq!(rec.last_clean(), Some(monday_late_morning().date_naive()));

    // Tuesday, same hour.
    rec.cycle(local(5, 11, 0, 0), &mut hw, &mut sink);
    assert_eq!(hw.count(ActuatorCall::StartCleaning), 2);
}

#[test]
fn no_cleaning_at_the_weekend_or_with_someone_home() {
    let store = Arc::new(StateStore::new());
    let (mut rec, mut hw, mut sink) = make(&store);

    rec.cycle(local(9, 11, 0, 0), &mut hw, &mut sink);
    store.mutate("lock", monday_late_morning(), |s| s.lock_unlocked = true);
    rec.cycle(monday_late_morning(), &mut hw, &mut sink);

    assert_eq!(hw.count(ActuatorCall::StartCleaning), 0);
    assert_eq!(rec.last_clean(), None);
}

#[test]
fn cleaning_outside_the_window_docks() {
    let store = Arc::new(StateStore::new());
    store.mutate("robot", monday_evening(), |s| s.cleaner_cleaning = true);
    let (mut rec, mut hw, mut sink) = make(&store);

    rec.cycle(monday_evening(), &mut hw, &mut sink);
    assert_eq!(hw.calls, [ActuatorCall::Dock]);
    assert!(sink.events.contains(&ReconcileEvent::CleanerDocked));
}

#[test]
fn arriving_home_docks_a_running_robot() {
    let store = Arc::new(StateStore::new());
    let (mut rec, mut hw, mut sink) = make(&store);
    rec.cycle(monday_late_morning(), &mut hw, &mut sink);
    assert_eq!(hw.take(), [ActuatorCall::StartCleaning]);

    store.mutate("robot", monday_late_morning(), |s| s.cleaner_cleaning = true);
    store.mutate("lock", monday_late_morning(), |s| s.lock_unlocked = true);
    rec.cycle(monday_late_morning(), &mut hw, &mut sink);
    assert_eq!(hw.calls, [ActuatorCall::PowerOn, ActuatorCall::Dock]);
}
