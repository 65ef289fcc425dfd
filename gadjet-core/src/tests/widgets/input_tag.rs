use super::super::util::*;
use crate::widgets::input_tag::{InputTagConfig, InputTagX};

fn input_tag(registry: &mut Registry) -> InputTag {
    InputTag::define(registry, "el-input-tag").unwrap();
    InputTag::new(registry, Element::new()).unwrap()
}

fn type_and_enter(input: &mut InputTag, registry: &mut Registry, text: &str) {
    for c in text.chars() {
        input.keydown(registry, &Key::Character(c.to_string())).unwrap();
    }
    input.keydown(registry, &Key::Named(NamedKey::Enter)).unwrap();
}

#[test]
fn defining_also_defines_the_chip() {
    let mut registry = registry();
    InputTag::define(&mut registry, "el-input-tag").unwrap();

    assert!(registry.is_defined::<InputTagX>());
    assert_eq!(&*registry.tag_of::<InputTagX>().unwrap(), "el-input-tag-tagx");
    assert_declares!(registry.sheet(), "el-input-tag-tagx", "margin", "0.3em 0.2em");
}

#[test]
fn rejected_tag_leaves_the_chip_undefined() {
    let mut registry = registry();
    assert!(matches!(InputTag::define(&mut registry, "InputTag"), Err(ComponentError::InvalidTag { .. })));
    assert!(!registry.is_defined::<InputTagX>());

    Badge::define(&mut registry, "el-input-tag").unwrap();
    assert!(matches!(InputTag::define(&mut registry, "el-input-tag"), Err(ComponentError::TagTaken { .. })));
    assert!(!registry.is_defined::<InputTagX>());
    assert!(registry.sheet().rules_for("el-input-tag-tagx").is_empty());

    InputTag::define(&mut registry, "el-tags").unwrap();
    assert_eq!(&*registry.tag_of::<InputTagX>().unwrap(), "el-tags-tagx");
}

#[test]
fn enter_commits_the_trimmed_buffer() {
    let mut registry = registry();
    let mut input = input_tag(&mut registry);

    type_and_enter(&mut input, &mut registry, "  rust ");
    type_and_enter(&mut input, &mut registry, "css");
    assert_eq!(input.tags(), ["rust", "css"]);
    assert_eq!(input.buffer(), "");
    assert_eq!(input.input.attributes.get("contenteditable"), Some("true"));
}

#[test]
fn empty_and_duplicate_values_are_ignored() {
    let mut registry = registry();
    let mut input = input_tag(&mut registry);

    type_and_enter(&mut input, &mut registry, "   ");
    type_and_enter(&mut input, &mut registry, "a");
    type_and_enter(&mut input, &mut registry, "a");
    assert_eq!(input.tags(), ["a"]);
    assert_eq!(registry.instance_count::<InputTagX>(), 1);
}

#[test]
fn backspace_edits_then_removes_chips() {
    let mut registry = registry();
    let mut input = input_tag(&mut registry);
    input.add_tags(&mut registry, ["one", "two"]).unwrap();

    input.type_text("ab");
    input.keydown(&mut registry, &Key::Named(NamedKey::Backspace)).unwrap();
    assert_eq!(input.buffer(), "a");
    assert_eq!(input.tags(), ["one", "two"]);

    input.keydown(&mut registry, &Key::Named(NamedKey::Backspace)).unwrap();
    input.keydown(&mut registry, &Key::Named(NamedKey::Backspace)).unwrap();
    assert_eq!(input.buffer(), "");
    assert_eq!(input.tags(), ["one"]);
    assert_eq!(registry.instance_count::<InputTagX>(), 1);
}

#[test]
fn blur_commits() {
    let mut registry = registry();
    let mut input = input_tag(&mut registry);

    input.type_text("pending");
    input.blur(&mut registry).unwrap();
    assert_eq!(input.tags(), ["pending"]);
}

#[test]
fn removing_a_chip_reports_its_text() {
    let mut registry = registry();
    let mut input = input_tag(&mut registry);
    input.set_tags(&mut registry, ["x", "y", "z"]).unwrap();

    assert!(input.click_remove(&mut registry, 1));
    assert!(!input.click_remove(&mut registry, 5));
    assert_eq!(input.tags(), ["x", "z"]);

    let events = input.host_mut().element.take_events();
    assert_eq!(events.len(), 1);
    assert!(events[0].is("remove"));
    assert_eq!(events[0].detail, Detail::Text("y".into()));
}

#[test]
fn clearing_releases_every_chip() {
    let mut registry = registry();
    let mut input = input_tag(&mut registry);
    input.set_tags(&mut registry, ["a", "b", "c"]).unwrap();
    assert_eq!(registry.instance_count::<InputTagX>(), 3);

    input.set_tags(&mut registry, ["d"]).unwrap();
    assert_eq!(registry.instance_count::<InputTagX>(), 1);

    input.clear_tags(&mut registry);
    assert!(input.chips().is_empty());
    assert_eq!(registry.instance_count::<InputTagX>(), 0);
}

#[test]
fn chip_options_style_the_chips() {
    let mut registry = registry();
    let mut input = input_tag(&mut registry);
    input.add_tag(&mut registry, "styled").unwrap();

    let config = InputTagConfig {
        tag_color: Some("#ffff00".into()),
        ..Default::default()
    };
    InputTag::class_style(&registry, "warn", config.clone()).unwrap();
    assert_declares!(registry.sheet(), "el-input-tag-tagx.warn", "color", "black");

    input.add_style(&registry, config).unwrap();
    let token = input.host().token().to_string();
    assert!(input.host().element.classes.contains(&token));

    let chip = &input.chips()[0];
    let chip_token = chip.host().token();
    assert!(chip.host().element.classes.contains(chip_token));
    assert_declares!(registry.sheet(), &format!("el-input-tag-tagx.{chip_token}"), "color", "black");
}
