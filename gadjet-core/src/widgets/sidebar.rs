use crate::{
    component::{Component, ComponentError, Host, Registry},
    css::{self, mixins},
    dom::Element,
    media::{MediaQuery, Viewport},
    style::{StyleConfig, StyleDescriptor},
};

#[derive(Clone, Debug, Default, PartialEq, StyleConfig)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(rename_all = "camelCase", default))]
pub struct SidebarConfig {
    /// Panel background.
    pub bg_color: Option<String>,
    /// Backdrop behind the panel while it's shown over the page.
    pub overlay_color: Option<String>,
}

pub struct SidebarStyle;

impl StyleDescriptor for SidebarStyle {
    type Config = SidebarConfig;

    fn defaults() -> SidebarConfig {
        SidebarConfig {
            bg_color: Some("#eee".into()),
            overlay_color: Some("rgba(0,0,0,0.7)".into()),
        }
    }

    fn layout(_: &SidebarConfig) -> String {
        r#"position: absolute;
        top: 0;
        left: 0;
        [el="content"] {
            position: fixed;
            z-index: 101;
            height: 100%;
            min-width: 250px;
            overflow-x: hidden;
            overflow-y: auto;
            transition: transform 0.3s;
            transform: translateX(-100%);
            will-change: transform;
            &.show { transform: translateX(0); }
        }
        [el="overlay"] {
            position: fixed;
            top: 0;
            left: 0;
            z-index: 100;
            display: none;
            width: 100%;
            height: 100%;
            &.show { display: block; }
        }"#
        .to_string()
    }

    fn generate(config: &SidebarConfig) -> String {
        let bg = match &config.bg_color {
            Some(color) => css::scope(r#"[el="content"]"#, &css::recover(mixins::bg_color(color))),
            None => String::new(),
        };
        let overlay = match &config.overlay_color {
            Some(color) => format!(r#"[el="overlay"] {{ background-color: {color}; }}"#),
            None => String::new(),
        };
        css::join([bg, overlay])
    }
}

pub const SHOW_AT: &str = "1000px";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SidebarState {
    Hidden,
    Shown { overlay: bool },
}

// ---------- Sidebar ----------

/// An off-canvas panel. Stays open without an overlay on viewports at least `showAt` wide.
#[derive(Debug)]
pub struct Sidebar {
    host: Host,
    pub content: Element,
    pub overlay: Element,
    query: MediaQuery,
    matched: bool,
}

impl Sidebar {
    pub fn new(registry: &mut Registry, element: Element, viewport: &Viewport) -> Result<Self, ComponentError> {
        let host = registry.create::<Self>(element)?;
        Ok(Self::with_host(host, viewport))
    }

    /// Wraps a host created for another component type, for widgets that extend the sidebar.
    pub fn with_host(mut host: Host, viewport: &Viewport) -> Self {
        let show_at = host.element.attributes.get("showAt").filter(|v| !v.is_empty()).unwrap_or(SHOW_AT).to_string();
        host.element.attributes.set("showAt", show_at.as_str());

        let query = MediaQuery::min_width(&show_at);
        let matched = query.matches(viewport);
        let mut sidebar = Self {
            host,
            content: Element::part("content"),
            overlay: Element::part("overlay"),
            query,
            matched,
        };
        sidebar.media_change();
        sidebar
    }

    pub fn show_at(&self) -> &str {
        self.host.element.attributes.get("showAt").unwrap_or(SHOW_AT)
    }

    /// Replaces the breakpoint. Re-asserts the media state if `viewport` lands on the other side of it.
    pub fn set_show_at(&mut self, value: &str, viewport: &Viewport) {
        self.host.element.attributes.set("showAt", value);
        self.query = MediaQuery::min_width(value);
        self.resize(viewport);
    }

    /// The viewport changed size. Re-asserts the media state when the breakpoint is crossed.
    pub fn resize(&mut self, viewport: &Viewport) {
        let matched = self.query.matches(viewport);
        if matched != self.matched {
            self.matched = matched;
            self.media_change();
        }
    }

    fn media_change(&mut self) {
        if self.matched {
            self.show(false);
        } else {
            self.hide();
        }
    }

    pub fn show(&mut self, overlay: bool) {
        self.content.classes.add("show");
        if overlay {
            self.overlay.classes.add("show");
        }
    }

    pub fn hide(&mut self) {
        self.content.classes.remove("show");
        self.overlay.classes.remove("show");
    }

    pub fn click_overlay(&mut self) {
        self.hide();
    }

    pub fn state(&self) -> SidebarState {
        if !self.content.classes.contains("show") {
            SidebarState::Hidden
        } else {
            SidebarState::Shown {
                overlay: self.overlay.classes.contains("show"),
            }
        }
    }
}

impl Component for Sidebar {
    type Style = SidebarStyle;
    const NAME: &'static str = "Sidebar";

    fn host(&self) -> &Host {
        &self.host
    }

    fn host_mut(&mut self) -> &mut Host {
        &mut self.host
    }
}
