use super::*;

#[test]
fn throttle_passes_the_first_call() {
    let mut throttle = Throttle::new(100.0);
    assert!(throttle.ready(5000.0));
}

#[test]
fn throttle_blocks_inside_the_window() {
    let mut throttle = Throttle::new(100.0);
    assert!(throttle.ready(0.0));
    assert!(!throttle.ready(50.0));
    assert!(!throttle.ready(99.9));
}

#[test]
fn throttle_reopens_after_the_wait() {
    let mut throttle = Throttle::new(100.0);
    assert!(throttle.ready(0.0));
    assert!(throttle.ready(100.0));
    assert!(!throttle.ready(150.0));
    assert!(throttle.ready(250.0));
}

#[test]
fn blocked_calls_do_not_reset_the_window() {
    let mut throttle = Throttle::new(100.0);
    assert!(throttle.ready(0.0));
    assert!(!throttle.ready(90.0));
    // 90 ms call didn't push the window forward; 110 ms is past it.
    assert!(throttle.ready(110.0));
}
