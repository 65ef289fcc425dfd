use super::super::util::*;
use crate::{
    attr::Attributes,
    events::names,
    widgets::input_number::{Direction, StepperState},
};

fn stepper(registry: &mut Registry, attributes: Attributes) -> InputNumber {
    if !registry.is_defined::<InputNumber>() {
        InputNumber::define(registry, "el-input-number").unwrap();
    }
    InputNumber::new(registry, Element::with_attributes(attributes)).unwrap()
}

fn changes(stepper: &mut InputNumber) -> Vec<f64> {
    stepper
        .host_mut()
        .element
        .take_events()
        .into_iter()
        .filter(|event| event.is(names::CHANGE))
        .filter_map(|event| event.detail.as_number())
        .collect()
}

#[test]
fn quick_click_reports_once_after_the_delay() {
    let mut registry = registry();
    let mut input = stepper(&mut registry, Attributes::new());

    input.press(Direction::Up);
    assert_eq!(input.value_text(), "1");
    input.release();
    assert_eq!(input.state(), StepperState::Idle);

    input.advance(999);
    assert!(changes(&mut input).is_empty());

    input.advance(1);
    assert_eq!(changes(&mut input), vec![1.0]);
}

#[test]
fn holding_repeats_after_the_threshold() {
    let mut registry = registry();
    let mut input = stepper(&mut registry, Attributes::new());

    input.press(Direction::Up);
    input.advance(699);
    assert_eq!(input.value_text(), "1");
    assert_eq!(input.state(), StepperState::Stepping { direction: Direction::Up, repeating: false });

    input.advance(51);
    assert_eq!(input.value_text(), "2");
    assert_eq!(input.state(), StepperState::Stepping { direction: Direction::Up, repeating: true });

    input.release();
    input.advance(1000);
    assert_eq!(changes(&mut input), vec![2.0]);
}

#[test]
fn repeats_every_interval_while_held() {
    let mut registry = registry();
    let mut input = stepper(&mut registry, Attributes::new().with("value", "10"));

    input.press(Direction::Down);
    input.advance(1000);
    // 1 on press, 1 at the threshold, 3 repeats at 800, 900 and 1000.
    assert_eq!(input.value(), 5.0);
    assert!(changes(&mut input).is_empty());

    input.leave();
    input.advance(2000);
    assert_eq!(changes(&mut input), vec![5.0]);
}

#[test]
fn pressing_again_restarts_the_delay() {
    let mut registry = registry();
    let mut input = stepper(&mut registry, Attributes::new());

    input.press(Direction::Up);
    input.release();
    input.advance(500);

    input.press(Direction::Up);
    input.release();
    input.advance(999);
    assert!(changes(&mut input).is_empty());

    input.advance(1);
    assert_eq!(changes(&mut input), vec![2.0]);
}

#[test]
fn no_change_without_a_new_value() {
    let mut registry = registry();
    let mut input = stepper(&mut registry, Attributes::new().with("value", "3").with("max", "3"));

    assert_eq!(input.value(), 3.0);
    input.press(Direction::Up);
    input.release();
    assert_eq!(input.value_text(), "3");

    input.advance(5000);
    assert!(changes(&mut input).is_empty());
}

#[test]
fn values_stay_in_range_and_follow_the_step() {
    let mut registry = registry();
    let mut input = stepper(
        &mut registry,
        Attributes::new().with("min", "0").with("max", "1").with("step", "0.1"),
    );

    for _ in 0..3 {
        input.press(Direction::Up);
        input.release();
    }
    assert_eq!(input.value_text(), "0.3");

    for _ in 0..5 {
        input.press(Direction::Down);
        input.release();
    }
    assert_eq!(input.value_text(), "0");
}

#[test]
fn typed_values_report_right_away() {
    let mut registry = registry();
    let mut input = stepper(&mut registry, Attributes::new().with("max", "50"));

    input.set_value("12.5");
    assert_eq!(changes(&mut input), vec![12.5]);

    input.set_value("120");
    assert_eq!(input.value_text(), "50");
    assert_eq!(changes(&mut input), vec![50.0]);

    input.set_value("abc");
    assert_eq!(input.value_text(), "");
    assert!(input.value().is_nan());
}

#[test]
fn typing_during_the_delay_reports_once() {
    let mut registry = registry();
    let mut input = stepper(&mut registry, Attributes::new());

    input.press(Direction::Up);
    input.release();
    input.set_value("5");
    assert_eq!(changes(&mut input), vec![5.0]);

    input.advance(2000);
    assert!(changes(&mut input).is_empty());

    // Stepping back to the reported value.
    input.press(Direction::Up);
    input.release();
    input.press(Direction::Down);
    input.release();
    input.advance(2000);
    assert!(changes(&mut input).is_empty());
}

#[test]
fn timings_come_from_attributes() {
    let mut registry = registry();
    let mut input = stepper(
        &mut registry,
        Attributes::new()
            .with("stepIntervalThreshold", "200")
            .with("stepInterval", "50")
            .with("stepChangeDelay", "10"),
    );

    input.press(Direction::Up);
    input.advance(300);
    // press, threshold at 200, repeats at 250 and 300.
    assert_eq!(input.value(), 4.0);

    input.release();
    input.advance(10);
    assert_eq!(changes(&mut input), vec![4.0]);
    assert_eq!(input.now(), 310);
}

#[test]
fn centered_layout_is_its_own_component() {
    let mut registry = registry();
    InputNumber::define(&mut registry, "el-input-number").unwrap();
    InputNumberCenter::define(&mut registry, "el-input-number-center").unwrap();

    let mut input = InputNumberCenter::new(&mut registry, Element::new()).unwrap();
    assert_eq!(input.host().component(), "InputNumberCenter");
    assert_eq!(input.down.text, "-");
    assert_eq!(input.up.text, "+");

    input.press(Direction::Down);
    assert_eq!(input.value(), -1.0);
}
