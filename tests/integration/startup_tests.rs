//! Startup behaviour of the running reconciler thread: nothing is
//! evaluated during the grace period, and reports raised meanwhile
//! collapse into a single first cycle.

use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use homesync::adapters::actuators::ChannelActuators;
use homesync::adapters::time::SystemClock;
use homesync::app::commands::AmpCommand;
use homesync::app::events::ReconcileEvent;
use homesync::app::ports::EventSink;
use homesync::app::reporter::Reporter;
use homesync::app::service::Reconciler;
use homesync::channels::{AmplifierChannel, ChangeSignal, CleanerChannel};
use homesync::config::SystemConfig;
use homesync::store::StateStore;

/// Event sink shared with the test thread.
#[derive(Clone, Default)]
struct SharedSink(Arc<Mutex<Vec<ReconcileEvent>>>);

impl SharedSink {
    fn evaluations(&self) -> usize {
        self.0
            .lock()
            .unwrap()
            .iter()
            .filter(|e| matches!(e, ReconcileEvent::Evaluated { .. }))
            .count()
    }
}

impl EventSink for SharedSink {
    fn emit(&mut self, event: &ReconcileEvent) {
        self.0.lock().unwrap().push(event.clone());
    }
}

#[test]
fn reports_during_grace_collapse_into_one_cycle() {
    let store = Arc::new(StateStore::new());
    let signal = Arc::new(ChangeSignal::new());
    let amp = Arc::new(AmplifierChannel::new());
    let robot = Arc::new(CleanerChannel::new());
    let sink = SharedSink::default();

    let lock = Reporter::new("lock", Arc::clone(&store), Arc::clone(&signal), SystemClock);
    lock.report(|s| s.lock_unlocked = true);
    lock.report(|s| s.lock_unlocked = true);

    let config = SystemConfig {
        startup_grace_secs: 1,
        ..SystemConfig::default()
    };
    let reconciler = Reconciler::new(Arc::clone(&store), config);
    let started = Instant::now();
    {
        let (signal, amp, robot, mut sink) =
            (Arc::clone(&signal), Arc::clone(&amp), Arc::clone(&robot), sink.clone());
        thread::spawn(move || {
            let mut hw = ChannelActuators::new(&amp, &robot);
            reconciler.run(&signal, &SystemClock, &mut hw, &mut sink)
        });
    }

    // Still inside the grace period.
    thread::sleep(Duration::from_millis(300));
    lock.report(|s| s.lock_unlocked = true);
    assert!(amp.try_receive().is_err(), "evaluated before the grace period ended");
    assert_eq!(sink.evaluations(), 0);

    let first = loop {
        if let Ok(cmd) = amp.try_receive() {
            break cmd;
        }
        assert!(started.elapsed() < Duration::from_secs(5), "no command after grace");
        thread::sleep(Duration::from_millis(10));
    };
    assert!(started.elapsed() >= Duration::from_secs(1));
    assert_eq!(first, AmpCommand::PowerOn);

    // Give a second, spurious cycle time to show up.
    thread::sleep(Duration::from_millis(300));
    assert!(amp.try_receive().is_err());
    assert!(robot.try_receive().is_err());
    assert_eq!(sink.evaluations(), 1);
}
