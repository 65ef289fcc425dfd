use super::super::util::*;
use crate::{attr::Attributes, widgets::sidebar::SidebarState};

fn sidebar(registry: &mut Registry, element: Element, width: f32) -> Sidebar {
    Sidebar::define(registry, "el-sidebar").unwrap();
    Sidebar::new(registry, element, &Viewport::new(width, 800.0)).unwrap()
}

#[test]
fn wide_viewports_show_it_without_overlay() {
    let mut registry = registry();
    let sidebar = sidebar(&mut registry, Element::new(), 1200.0);

    assert_eq!(sidebar.show_at(), "1000px");
    assert_eq!(sidebar.state(), SidebarState::Shown { overlay: false });
}

#[test]
fn narrow_viewports_hide_it() {
    let mut registry = registry();
    let sidebar = sidebar(&mut registry, Element::new(), 800.0);
    assert_eq!(sidebar.state(), SidebarState::Hidden);
}

#[test]
fn overlay_click_hides() {
    let mut registry = registry();
    let mut sidebar = sidebar(&mut registry, Element::new(), 800.0);

    sidebar.show(true);
    assert_eq!(sidebar.state(), SidebarState::Shown { overlay: true });
    assert!(sidebar.overlay.classes.contains("show"));

    sidebar.click_overlay();
    assert_eq!(sidebar.state(), SidebarState::Hidden);
    assert!(!sidebar.overlay.classes.contains("show"));
}

#[test]
fn resizing_only_acts_across_the_breakpoint() {
    let mut registry = registry();
    let mut sidebar = sidebar(&mut registry, Element::new(), 800.0);

    sidebar.show(true);
    sidebar.resize(&Viewport::new(900.0, 800.0));
    assert_eq!(sidebar.state(), SidebarState::Shown { overlay: true });

    sidebar.resize(&Viewport::new(1000.0, 800.0));
    assert_eq!(sidebar.state(), SidebarState::Shown { overlay: true });
    assert!(sidebar.content.classes.contains("show"));

    sidebar.hide();
    sidebar.resize(&Viewport::new(1300.0, 800.0));
    assert_eq!(sidebar.state(), SidebarState::Hidden);

    sidebar.resize(&Viewport::new(999.0, 800.0));
    assert_eq!(sidebar.state(), SidebarState::Hidden);
}

#[test]
fn breakpoint_comes_from_the_attribute() {
    let mut registry = registry();
    let element = Element::with_attributes(Attributes::new().with("showAt", "600px"));
    let mut sidebar = sidebar(&mut registry, element, 800.0);

    assert_eq!(sidebar.show_at(), "600px");
    assert_eq!(sidebar.state(), SidebarState::Shown { overlay: false });

    sidebar.set_show_at("700px", &Viewport::new(800.0, 800.0));
    assert_eq!(sidebar.show_at(), "700px");
    assert_eq!(sidebar.state(), SidebarState::Shown { overlay: false });

    sidebar.resize(&Viewport::new(950.0, 800.0));
    assert_eq!(sidebar.state(), SidebarState::Shown { overlay: false });
    sidebar.resize(&Viewport::new(650.0, 800.0));
    assert_eq!(sidebar.state(), SidebarState::Hidden);
}

#[test]
fn new_breakpoint_applies_right_away() {
    let mut registry = registry();
    let mut sidebar = sidebar(&mut registry, Element::new(), 1200.0);
    assert_eq!(sidebar.state(), SidebarState::Shown { overlay: false });

    let viewport = Viewport::new(1200.0, 800.0);
    sidebar.set_show_at("1400px", &viewport);
    assert_eq!(sidebar.state(), SidebarState::Hidden);

    // No crossing of the new breakpoint, nothing changes.
    sidebar.resize(&Viewport::new(1300.0, 800.0));
    assert_eq!(sidebar.state(), SidebarState::Hidden);

    sidebar.set_show_at("1000px", &viewport);
    assert_eq!(sidebar.state(), SidebarState::Shown { overlay: false });
}
