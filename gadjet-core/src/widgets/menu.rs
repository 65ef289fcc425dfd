//! A collapsible tree menu.
//!
//! Entries are addressed by index paths: `[1]` is the second top level entry, `[1, 0]` the first entry of its submenu.
//! Submenus animate their `height`, so expanding pins it to the natural content height and collapsing goes
//! through the current height before dropping to `0px` on the next tick.

use crate::{
    attr::parse_float,
    color::{Color, ColorError},
    component::{Component, ComponentError, Host, Registry},
    css::{self, mixins},
    dom::Element,
    style::{StyleConfig, StyleDescriptor},
    timer::Timers,
};

/// Rendered height of one entry row, in px.
pub const ENTRY_HEIGHT: f64 = 32.0;

#[derive(Clone, Debug, Default, PartialEq, StyleConfig)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(rename_all = "camelCase", default))]
pub struct MenuConfig {
    /// Entry background on hover.
    pub hover_color: Option<String>,
    pub arrow_color: Option<String>,
}

pub struct MenuStyle;

impl StyleDescriptor for MenuStyle {
    type Config = MenuConfig;

    fn defaults() -> MenuConfig {
        MenuConfig {
            hover_color: Some("blue".into()),
            arrow_color: Some("blue".into()),
        }
    }

    fn layout(_: &MenuConfig) -> String {
        "display: block;
        padding: 0;
        margin: 0;
        border: 1px solid blue;
        border-radius: 0.2em;
        .arrow i {
            font-size: 1.2em;
            float: right;
            border-left: 0.25em solid transparent;
            border-right: 0.25em solid transparent;
            will-change: transform;
            transform: rotateZ(90deg);
            transition: transform 0.2s;
        }
        ul {
            margin: 0;
            padding-left: 1em;
            transition: height 0.2s;
            will-change: transition;
        }
        > ul {
            padding-left: 0;
        }
        li {
            list-style: none;
            display: block;
            overflow-y: hidden;
            overflow-x: hidden;
        }
        a {
            display: flex;
            align-items: center;
            cursor: pointer;
            padding: 0.5em 1em;
            div.content { width: 100%; }
            div.arrow { min-width: 1em; }
        }
        a ~ ul {
            height: 0;
        }
        a.show {
            .arrow i { transform: rotateZ(180deg); }
        }"
        .to_string()
    }

    fn generate(config: &MenuConfig) -> String {
        css::join([css::recover(hover_color(config)), arrow_color(config)])
    }
}

fn hover_color(config: &MenuConfig) -> Result<String, ColorError> {
    let Some(hover) = &config.hover_color else { return Ok(String::new()) };
    let color = Color::parse(hover)?;
    Ok(format!(
        "a {{ -webkit-tap-highlight-color: {color}; }}
        a:hover {{
            {bg}
            .arrow i {{ border-bottom-color: {arrow}; }}
        }}",
        bg = mixins::bg_color(hover)?,
        arrow = color.contrast_text(),
    ))
}

fn arrow_color(config: &MenuConfig) -> String {
    let Some(color) = &config.arrow_color else { return String::new() };
    format!(".arrow i {{ border-bottom: 0.25em solid {color}; }}")
}

/// One `<li>`: a link row and an optional submenu.
#[derive(Clone, Debug)]
pub struct MenuItem {
    /// The `<a>` row. Carries the `show` class while expanded.
    pub link: Element,
    /// `div.content`, the label.
    pub content: Element,
    /// `div.arrow`, holding the caret of entries with a submenu.
    pub arrow: Element,
    pub caret: Option<Element>,
    pub submenu: Option<SubMenu>,
}

/// A nested `<ul>`.
#[derive(Clone, Debug)]
pub struct SubMenu {
    pub list: Element,
    pub items: Vec<MenuItem>,
}

impl MenuItem {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            link: Element::new(),
            content: Element::new().with_class("content").with_text(label),
            arrow: Element::new().with_class("arrow"),
            caret: None,
            submenu: None,
        }
    }

    pub fn with_children(mut self, items: Vec<MenuItem>) -> Self {
        self.submenu = Some(SubMenu { list: Element::new(), items });
        self
    }

    /// Starts expanded.
    pub fn shown(mut self) -> Self {
        self.link.classes.add("show");
        self
    }

    pub fn label(&self) -> &str {
        &self.content.text
    }

    pub fn is_shown(&self) -> bool {
        self.link.classes.contains("show")
    }

    /// The submenu's inline height, if set.
    pub fn height(&self) -> Option<&str> {
        self.submenu.as_ref().and_then(|sub| sub.list.style.get("height"))
    }
}

// ---------- Menu ----------

#[derive(Debug)]
pub struct Menu {
    host: Host,
    items: Vec<MenuItem>,
    timers: Timers<Vec<usize>>,
}

impl Menu {
    /// Entries created with [`MenuItem::shown`] are expanded right away.
    pub fn new(registry: &mut Registry, element: Element, items: Vec<MenuItem>) -> Result<Self, ComponentError> {
        let host = registry.create::<Self>(element)?;
        let mut menu = Self { host, items, timers: Timers::new() };

        let mut shown = Vec::new();
        decorate(&mut menu.items, &mut Vec::new(), &mut shown);
        for path in shown {
            menu.show(&path);
        }
        Ok(menu)
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn item(&self, path: &[usize]) -> Option<&MenuItem> {
        let (first, rest) = path.split_first()?;
        let mut item = self.items.get(*first)?;
        for idx in rest {
            item = item.submenu.as_ref()?.items.get(*idx)?;
        }
        Some(item)
    }

    fn item_mut(&mut self, path: &[usize]) -> Option<&mut MenuItem> {
        let (first, rest) = path.split_first()?;
        let mut item = self.items.get_mut(*first)?;
        for idx in rest {
            item = item.submenu.as_mut()?.items.get_mut(*idx)?;
        }
        Some(item)
    }

    pub fn is_shown(&self, path: &[usize]) -> bool {
        self.item(path).is_some_and(MenuItem::is_shown)
    }

    /// Click on an entry row: expands or collapses it. Returns `false` for unknown paths.
    pub fn click(&mut self, path: &[usize]) -> bool {
        match self.item(path).map(MenuItem::is_shown) {
            Some(true) => self.hide(path),
            Some(false) => self.show(path),
            None => return false,
        }
        true
    }

    fn show(&mut self, path: &[usize]) {
        let Some((_, parent)) = path.split_last() else { return };
        // The enclosing list grows with the submenu.
        let enclosing = if parent.is_empty() {
            Some(&mut self.host.element)
        } else {
            self.item_mut(parent).and_then(|item| item.submenu.as_mut()).map(|sub| &mut sub.list)
        };
        if let Some(list) = enclosing {
            list.style.set("height", "auto");
        }

        let Some(item) = self.item_mut(path) else { return };
        item.link.classes.add("show");
        if let Some(sub) = &mut item.submenu {
            let height = scroll_height(&sub.items);
            sub.list.style.set("height", format!("{height}px"));
        }
    }

    fn hide(&mut self, path: &[usize]) {
        let mut paths = Vec::new();
        if let Some(item) = self.item(path) {
            subtree(item, &mut path.to_vec(), &mut paths);
        }

        for path in paths {
            let Some(item) = self.item_mut(&path) else { continue };
            item.link.classes.remove("show");
            let Some(sub) = &mut item.submenu else { continue };
            let height = scroll_height(&sub.items);
            sub.list.style.set("height", format!("{height}px"));
            self.timers.set_timeout(0, path);
        }
    }

    /// Moves virtual time forward, finishing pending collapse transitions.
    pub fn advance(&mut self, millis: u64) {
        let until = self.timers.now() + millis;
        while let Some((_, path)) = self.timers.pop_due(until) {
            if let Some(sub) = self.item_mut(&path).and_then(|item| item.submenu.as_mut()) {
                sub.list.style.set("height", "0px");
            }
        }
    }
}

/// Adds carets to entries with a submenu and collects the paths of entries that start expanded.
fn decorate(items: &mut [MenuItem], path: &mut Vec<usize>, shown: &mut Vec<Vec<usize>>) {
    for (idx, item) in items.iter_mut().enumerate() {
        path.push(idx);
        if item.is_shown() {
            shown.push(path.clone());
        }
        if let Some(sub) = &mut item.submenu {
            item.caret = Some(Element::new());
            decorate(&mut sub.items, path, shown);
        }
        path.pop();
    }
}

/// `item` and every entry below it, in document order.
fn subtree(item: &MenuItem, path: &mut Vec<usize>, out: &mut Vec<Vec<usize>>) {
    out.push(path.clone());
    if let Some(sub) = &item.submenu {
        for (idx, child) in sub.items.iter().enumerate() {
            path.push(idx);
            subtree(child, path, out);
            path.pop();
        }
    }
}

/// Natural content height of a list.
fn scroll_height(items: &[MenuItem]) -> f64 {
    items.iter().map(|item| ENTRY_HEIGHT + item.submenu.as_ref().map_or(0.0, rendered_height)).sum()
}

/// Height a submenu currently takes: collapsed by default, its content when `auto`.
fn rendered_height(sub: &SubMenu) -> f64 {
    match sub.list.style.get("height") {
        Some("auto") => scroll_height(&sub.items),
        Some(height) => Some(parse_float(height)).filter(|h| h.is_finite()).unwrap_or(0.0),
        None => 0.0,
    }
}

impl Component for Menu {
    type Style = MenuStyle;
    const NAME: &'static str = "Menu";

    fn host(&self) -> &Host {
        &self.host
    }

    fn host_mut(&mut self) -> &mut Host {
        &mut self.host
    }
}
