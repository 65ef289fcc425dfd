use super::super::util::*;

fn tabs(active: &[usize]) -> Vec<Element> {
    (0..4)
        .map(|idx| {
            let tab = Element::new().with_text(format!("Tab {idx}"));
            if active.contains(&idx) { tab.with_class("active") } else { tab }
        })
        .collect()
}

#[test]
fn last_marked_tab_starts_active() {
    let mut registry = registry();
    Tab::define(&mut registry, "el-tab").unwrap();

    let tab = Tab::new(&mut registry, Element::new(), tabs(&[1, 2])).unwrap();
    assert_eq!(tab.active(), Some(2));

    let tab = Tab::new(&mut registry, Element::new(), tabs(&[])).unwrap();
    assert_eq!(tab.active(), None);
}

#[test]
fn click_moves_the_active_class() {
    let mut registry = registry();
    Tab::define(&mut registry, "el-tab").unwrap();
    let mut tab = Tab::new(&mut registry, Element::new(), tabs(&[0])).unwrap();

    assert!(tab.click(3));
    assert_eq!(tab.active(), Some(3));
    assert!(!tab.tabs[0].classes.contains("active"));
    assert!(tab.tabs[3].classes.contains("active"));

    assert!(!tab.click(4));
    assert_eq!(tab.active(), Some(3));
}
