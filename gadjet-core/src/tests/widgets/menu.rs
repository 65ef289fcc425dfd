use super::super::util::*;
use crate::widgets::menu::MenuItem;

// A (shown)
//   A1 (shown)
//     x
//   A2
// B
fn menu(registry: &mut Registry) -> Menu {
    Menu::define(registry, "el-menu").unwrap();
    let items = vec![
        MenuItem::new("A")
            .with_children(vec![MenuItem::new("A1").with_children(vec![MenuItem::new("x")]).shown(), MenuItem::new("A2")])
            .shown(),
        MenuItem::new("B"),
    ];
    Menu::new(registry, Element::new(), items).unwrap()
}

#[test]
fn carets_mark_entries_with_submenus() {
    let mut registry = registry();
    let menu = menu(&mut registry);

    assert!(menu.item(&[0]).unwrap().caret.is_some());
    assert!(menu.item(&[0, 0]).unwrap().caret.is_some());
    assert!(menu.item(&[0, 1]).unwrap().caret.is_none());
    assert!(menu.item(&[1]).unwrap().caret.is_none());
    assert_eq!(menu.item(&[0, 0, 0]).unwrap().label(), "x");
    assert!(menu.item(&[0, 2]).is_none());
}

#[test]
fn shown_entries_expand_on_creation() {
    let mut registry = registry();
    let menu = menu(&mut registry);

    assert!(menu.is_shown(&[0]));
    assert!(menu.is_shown(&[0, 0]));
    assert_eq!(menu.host().element.style.get("height"), Some("auto"));
    // Expanding A1 lets A grow with it.
    assert_eq!(menu.item(&[0]).unwrap().height(), Some("auto"));
    assert_eq!(menu.item(&[0, 0]).unwrap().height(), Some("32px"));
}

#[test]
fn hiding_collapses_the_whole_branch() {
    let mut registry = registry();
    let mut menu = menu(&mut registry);

    assert!(menu.click(&[0]));
    assert!(!menu.is_shown(&[0]));
    assert!(!menu.is_shown(&[0, 0]));

    // Fixed heights first, so the collapse can transition.
    assert_eq!(menu.item(&[0]).unwrap().height(), Some("96px"));
    assert_eq!(menu.item(&[0, 0]).unwrap().height(), Some("32px"));

    menu.advance(0);
    assert_eq!(menu.item(&[0]).unwrap().height(), Some("0px"));
    assert_eq!(menu.item(&[0, 0]).unwrap().height(), Some("0px"));
}

#[test]
fn showing_measures_the_submenu() {
    let mut registry = registry();
    let mut menu = menu(&mut registry);
    menu.click(&[0]);
    menu.advance(0);

    assert!(menu.click(&[0]));
    assert!(menu.is_shown(&[0]));
    assert!(!menu.is_shown(&[0, 0]));
    assert_eq!(menu.item(&[0]).unwrap().height(), Some("64px"));
}

#[test]
fn unknown_paths_are_ignored() {
    let mut registry = registry();
    let mut menu = menu(&mut registry);

    assert!(!menu.click(&[7]));
    assert!(!menu.click(&[]));
    assert!(menu.click(&[1]));
    assert!(menu.is_shown(&[1]));
}
