use super::super::util::*;
use crate::attr::Attributes;

#[test]
fn checkbox_click_toggles_and_reports() {
    let mut registry = registry();
    Checkbox::define(&mut registry, "el-checkbox").unwrap();
    let mut checkbox = Checkbox::new(&mut registry, Element::new()).unwrap();

    assert_eq!(checkbox.input().attributes.get("type"), Some("checkbox"));
    assert!(!checkbox.is_checked());

    checkbox.click();
    assert!(checkbox.is_checked());
    checkbox.click();
    assert!(!checkbox.is_checked());
    assert_eq!(event_names(&mut checkbox.host_mut().element), ["change", "change"]);
}

#[test]
fn setting_the_same_state_is_silent() {
    let mut registry = registry();
    Checkbox::define(&mut registry, "el-checkbox").unwrap();
    let mut checkbox = Checkbox::new(&mut registry, Element::with_attributes(Attributes::new().with("checked", ""))).unwrap();

    assert!(checkbox.is_checked());
    checkbox.set_checked(true);
    assert!(event_names(&mut checkbox.host_mut().element).is_empty());
}

#[test]
fn radio_click_only_checks() {
    let mut registry = registry();
    InputRadio::define(&mut registry, "el-input-radio").unwrap();
    let mut radio = InputRadio::new(&mut registry, Element::new()).unwrap();

    assert_eq!(radio.input().attributes.get("type"), Some("radio"));
    radio.click();
    radio.click();
    assert!(radio.is_checked());
    assert_eq!(event_names(&mut radio.host_mut().element), ["change"]);

    radio.set_checked(false);
    assert!(!radio.is_checked());
}

#[test]
fn switch_has_track_and_pin() {
    let mut registry = registry();
    Switch::define(&mut registry, "el-switch").unwrap();
    let mut switch = Switch::new(&mut registry, Element::new()).unwrap();

    assert_eq!(switch.label.attributes.get("el"), Some("label"));
    assert_eq!(switch.pin.attributes.get("el"), Some("pin"));

    switch.click();
    assert!(switch.is_on());
    assert!(switch.input().attributes.has("checked"));
    switch.set_on(false);
    assert!(!switch.input().attributes.has("checked"));
    assert_eq!(event_names(&mut switch.host_mut().element), ["change", "change"]);
}
