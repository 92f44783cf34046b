//! Tests for the keystroke debouncer

use super::*;
use proptest::prelude::*;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn test_new_debouncer_has_nothing_pending() {
    let debouncer = Debouncer::new(300);
    assert!(!debouncer.has_pending());
    assert!(!debouncer.should_execute());
    assert_eq!(debouncer.delay(), ms(300));
    assert_eq!(debouncer.time_until_due(Instant::now()), None);
}

#[test]
fn test_does_not_fire_before_delay() {
    let start = Instant::now();
    let mut debouncer = Debouncer::new(300);

    debouncer.schedule_execution_at(start);

    assert!(!debouncer.should_execute_at(start));
    assert!(!debouncer.should_execute_at(start + ms(299)));
    assert!(debouncer.should_execute_at(start + ms(300)));
}

#[test]
fn test_keystroke_restarts_timer() {
    let start = Instant::now();
    let mut debouncer = Debouncer::new(300);

    debouncer.schedule_execution_at(start);
    debouncer.schedule_execution_at(start + ms(200));

    // 300ms after the first keystroke but only 100ms after the second
    assert!(!debouncer.should_execute_at(start + ms(300)));
    assert!(debouncer.should_execute_at(start + ms(500)));
}

#[test]
fn test_fires_at_most_once_per_idle_period() {
    let start = Instant::now();
    let mut debouncer = Debouncer::new(100);

    debouncer.schedule_execution_at(start);
    assert!(debouncer.should_execute_at(start + ms(150)));
    debouncer.mark_executed();

    assert!(!debouncer.has_pending());
    assert!(!debouncer.should_execute_at(start + ms(10_000)));
}

#[test]
fn test_cancel_drops_pending_trigger() {
    let start = Instant::now();
    let mut debouncer = Debouncer::new(100);

    debouncer.schedule_execution_at(start);
    debouncer.cancel();

    assert!(!debouncer.should_execute_at(start + ms(200)));
}

#[test]
fn test_time_until_due() {
    let start = Instant::now();
    let mut debouncer = Debouncer::new(300);
    debouncer.schedule_execution_at(start);

    assert_eq!(debouncer.time_until_due(start + ms(100)), Some(ms(200)));
    assert_eq!(debouncer.time_until_due(start + ms(400)), Some(Duration::ZERO));
}

#[test]
fn test_clock_before_schedule_does_not_fire() {
    let start = Instant::now() + ms(50);
    let mut debouncer = Debouncer::new(0);
    debouncer.schedule_execution_at(start);

    // An earlier `now` saturates to zero elapsed; zero delay still fires
    assert!(debouncer.should_execute_at(start - ms(10)));

    let mut debouncer = Debouncer::new(20);
    debouncer.schedule_execution_at(start);
    assert!(!debouncer.should_execute_at(start - ms(10)));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // A burst of keystrokes spaced closer than the delay never fires
    // mid-burst, and fires exactly once after the last one.
    #[test]
    fn prop_burst_fires_once(delay in 50u64..5000, gaps in prop::collection::vec(0u64..50, 1..40)) {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(delay);
        let mut now = start;
        let mut fired = 0;

        for gap in &gaps {
            now += ms(*gap);
            if debouncer.should_execute_at(now) {
                debouncer.mark_executed();
                fired += 1;
            }
            debouncer.schedule_execution_at(now);
        }
        prop_assert_eq!(fired, 0);

        for step in 1..=3 {
            let later = now + ms(delay * step);
            if debouncer.should_execute_at(later) {
                debouncer.mark_executed();
                fired += 1;
            }
        }
        prop_assert_eq!(fired, 1);
    }
}
