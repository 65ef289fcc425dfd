use super::super::util::*;
use crate::attr::Attributes;

#[test]
fn bar_width_follows_the_value() {
    let mut registry = registry();
    ProgressBar::define(&mut registry, "el-progress-bar").unwrap();
    let mut bar = ProgressBar::new(&mut registry, Element::with_attributes(Attributes::new().with("value", "50"))).unwrap();

    assert_eq!(bar.max(), 100.0);
    assert_eq!(bar.progress.style.get("width"), Some("50%"));
    assert!(bar.host().element.classes.contains("value"));

    bar.set_value(25.0);
    assert_eq!(bar.progress.style.get("width"), Some("25%"));
}

#[test]
fn bar_loops_without_a_value() {
    let mut registry = registry();
    ProgressBar::define(&mut registry, "el-progress-bar").unwrap();
    let mut bar = ProgressBar::new(&mut registry, Element::new()).unwrap();

    assert!(bar.is_looping());
    assert!(bar.host().element.classes.contains("loop"));

    bar.set_value_text("40");
    assert!(!bar.is_looping());
    assert!(!bar.host().element.classes.contains("loop"));

    bar.set_value_text("unknown");
    assert!(bar.is_looping());
    assert!(!bar.host().element.classes.contains("value"));
}

#[test]
fn bar_max_falls_back_when_zero() {
    let mut registry = registry();
    ProgressBar::define(&mut registry, "el-progress-bar").unwrap();
    let attributes = Attributes::new().with("max", "0").with("value", "10");
    let bar = ProgressBar::new(&mut registry, Element::with_attributes(attributes)).unwrap();

    assert_eq!(bar.max(), 100.0);
    assert_eq!(bar.progress.style.get("width"), Some("10%"));
}

#[test]
fn bar_respects_max() {
    let mut registry = registry();
    ProgressBar::define(&mut registry, "el-progress-bar").unwrap();
    let attributes = Attributes::new().with("max", "200").with("value", "50");
    let bar = ProgressBar::new(&mut registry, Element::with_attributes(attributes)).unwrap();

    assert_eq!(bar.progress.style.get("width"), Some("25%"));
}

#[test]
fn circle_geometry() {
    let mut registry = registry();
    ProgressCircle::define(&mut registry, "el-progress-circle").unwrap();
    let circle = ProgressCircle::new(&mut registry, Element::with_attributes(Attributes::new().with("value", "50"))).unwrap();

    assert_eq!(circle.svg.attributes.get("viewBox"), Some("0 0 200 200"));
    assert_eq!(circle.track.attributes.get("el"), Some("circle1"));
    assert_eq!(circle.arc.attributes.get("r"), Some("75"));
    assert_eq!(circle.arc.attributes.get("cx"), Some("100"));

    let offset: f64 = circle.arc.style.get("stroke-dashoffset").unwrap().parse().unwrap();
    assert!((offset - 235.619).abs() < 1e-3, "{offset}");
}

#[test]
fn circle_resizes_per_instance() {
    let mut registry = registry();
    ProgressCircle::define(&mut registry, "el-progress-circle").unwrap();
    let mut circle = ProgressCircle::new(&mut registry, Element::with_attributes(Attributes::new().with("value", "0"))).unwrap();

    circle.set_radius(&registry, 50.0).unwrap();
    assert_eq!(circle.svg.attributes.get("viewBox"), Some("0 0 150 150"));
    assert_eq!(circle.track.attributes.get("r"), Some("50"));

    let token = circle.host().token().to_string();
    let selector = format!("el-progress-circle.{token}.value circle[el=\"circle2\"]");
    assert_declares!(registry.sheet(), &selector, "stroke-dasharray", "314 314");

    circle.set_track_width(&registry, 10.0).unwrap();
    assert_eq!(circle.svg.attributes.get("viewBox"), Some("0 0 120 120"));
    let selector = format!("el-progress-circle.{token} circle[el=\"circle1\"]");
    assert_declares!(registry.sheet(), &selector, "stroke-width", "10");
}

#[test]
fn circle_loops_without_a_value() {
    let mut registry = registry();
    ProgressCircle::define(&mut registry, "el-progress-circle").unwrap();
    let mut circle = ProgressCircle::new(&mut registry, Element::new()).unwrap();

    assert!(circle.host().element.classes.contains("loop"));
    circle.set_value(100.0);
    assert!(circle.host().element.classes.contains("value"));
    assert_eq!(circle.arc.style.get("stroke-dashoffset"), Some("0"));
}
