// Host-side tests for debounce and throttle against a fake millisecond clock.

use folio_core::rate_limit::{Debouncer, Throttle};

#[test]
fn burst_debounces_to_one_call_with_last_args() {
    let wait = 10.0;
    let mut d = Debouncer::new(wait);
    let mut executed = Vec::new();

    let mut now = 0.0;
    for i in 0..20 {
        d.call(now, i);
        // a timer armed by an earlier call fires mid-burst
        if let Some(v) = d.poll(now + wait / 2.0) {
            executed.push(v);
        }
        now += wait * 0.6;
    }
    assert!(executed.is_empty());

    let last_call = now - wait * 0.6;
    assert_eq!(d.poll(last_call + wait - 0.1), None);
    if let Some(v) = d.poll(last_call + wait) {
        executed.push(v);
    }
    assert_eq!(d.poll(last_call + wait * 5.0), None);
    assert_eq!(executed, vec![19]);
}

#[test]
fn debounce_call_reports_deadline() {
    let mut d: Debouncer<()> = Debouncer::default();
    assert_eq!(d.wait_ms(), 10.0);
    assert_eq!(d.call(100.0, ()), 110.0);
    assert_eq!(d.call(105.0, ()), 115.0);
    assert!(d.is_pending());
    assert_eq!(d.poll(115.0), Some(()));
    assert!(!d.is_pending());
}

#[test]
fn separate_bursts_each_execute() {
    let mut d = Debouncer::new(10.0);
    d.call(0.0, "a");
    assert_eq!(d.poll(10.0), Some("a"));
    d.call(50.0, "b");
    d.call(55.0, "c");
    assert_eq!(d.poll(64.0), None);
    assert_eq!(d.poll(65.0), Some("c"));
}

#[test]
fn throttle_drops_calls_inside_window() {
    let w = 100.0;
    let mut t = Throttle::new(w);
    let runs: Vec<f64> = [0.0, w / 2.0, w + 1.0]
        .into_iter()
        .filter(|now| t.try_call(*now))
        .collect();
    assert_eq!(runs, vec![0.0, w + 1.0]);
}

#[test]
fn throttle_window_restarts_from_last_execution() {
    let mut t = Throttle::default();
    assert_eq!(t.limit_ms(), 100.0);
    assert!(t.try_call(0.0));
    assert!(!t.try_call(99.9));
    assert!(t.try_call(100.0));
    assert!(!t.try_call(150.0));
    assert!(!t.try_call(199.0));
    assert!(t.try_call(200.0));
}
