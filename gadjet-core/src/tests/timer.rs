use crate::timer::Timers;

#[test]
fn due_order_then_scheduling_order() {
    let mut timers = Timers::new();
    timers.set_timeout(10, "b");
    timers.set_timeout(5, "a");
    timers.set_timeout(10, "c");

    let mut fired = Vec::new();
    while let Some((_, task)) = timers.pop_due(20) {
        fired.push((timers.now(), task));
    }
    assert_eq!(fired, vec![(5, "a"), (10, "b"), (10, "c")]);
    assert_eq!(timers.now(), 20);
    assert!(timers.is_empty());
}

#[test]
fn intervals_repeat_until_cleared() {
    let mut timers = Timers::new();
    let id = timers.set_interval(100, ());

    let mut count = 0;
    while timers.pop_due(350).is_some() {
        count += 1;
    }
    assert_eq!(count, 3);
    assert_eq!(timers.next_due(), Some(400));

    assert!(timers.clear(id));
    assert!(!timers.is_pending(id));
    assert!(timers.pop_due(1000).is_none());
}

#[test]
fn cleared_timeouts_never_fire() {
    let mut timers = Timers::new();
    let id = timers.set_timeout(0, 1);
    timers.set_timeout(0, 2);
    assert!(timers.clear(id));

    assert_eq!(timers.pop_due(0).map(|(_, t)| t), Some(2));
    assert_eq!(timers.pop_due(0), None);
    assert!(!timers.clear(id));
}
