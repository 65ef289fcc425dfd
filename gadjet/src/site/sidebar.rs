use gadjet_core::{
    attr::Attributes,
    component::{Component, ComponentError, Host, Registry},
    css::{
        self,
        mixins::{self, BgColorInt},
    },
    dom::Element,
    media::Viewport,
    style::StyleDescriptor,
    widgets::{
        button_square::{ButtonSquare, ButtonSquareStyle},
        sidebar::{Sidebar, SidebarConfig, SidebarState, SidebarStyle},
    },
};

use super::{palette, theme};

// ---------- SidebarButton ----------

/// The floating menu button in the top left corner that opens the docs sidebar.
#[derive(Debug)]
pub struct SidebarButton {
    button: ButtonSquare,
    pub icon: Element,
}

impl SidebarButton {
    pub fn new(registry: &mut Registry, element: Element) -> Result<Self, ComponentError> {
        let host = registry.create::<Self>(element)?;
        Ok(Self {
            button: ButtonSquare::with_host(host),
            icon: Element::with_attributes(Attributes::new().with("name", "menu")),
        })
    }
}

impl Component for SidebarButton {
    type Style = ButtonSquareStyle;
    const NAME: &'static str = "SidebarButton";

    fn host(&self) -> &Host {
        self.button.host()
    }

    fn host_mut(&mut self) -> &mut Host {
        self.button.host_mut()
    }

    fn define(registry: &mut Registry, tag: &str) -> Result<(), ComponentError> {
        registry.bind::<Self>(tag)?;
        Self::init_style(registry)?;
        let color = css::recover(mixins::bg_color_int(BgColorInt::new(palette::RED)));
        Self::tag_style(
            registry,
            format!(
                "position: fixed;
                top: 0;
                left: 0;
                font-size: 1.5em;
                border-radius: 0;
                border-bottom-right-radius: 10px;
                {color}"
            ),
        )?;
        Ok(())
    }
}

// ---------- DocsSidebar ----------

/// The site navigation: title row, menu links, close control.
pub struct DocsSidebarStyle;

impl StyleDescriptor for DocsSidebarStyle {
    type Config = SidebarConfig;

    fn defaults() -> SidebarConfig {
        SidebarStyle::defaults()
    }

    fn layout(config: &SidebarConfig) -> String {
        let hover = css::recover(mixins::bg_color_int(BgColorInt::new(theme::ULTRA_RED)));
        css::join([
            SidebarStyle::layout(config),
            format!(
                r#"a {{
                    text-decoration: none;
                    color: inherit;
                }}
                [el="title"] {{
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    width: 100%;
                    color: {title};
                    font-weight: bold;
                    border-bottom: 2px solid;
                    [el="home"] {{
                        display: flex;
                        justify-content: center;
                        width: 100%;
                        font-size: 1.5em;
                        line-height: 2;
                    }}
                    [el="close"] {{
                        align-self: self-start;
                        el-button-square {{
                            font-size: 1.5rem;
                            border-radius: 0;
                        }}
                    }}
                }}
                [el="menu"] {{
                    padding-top: 0.5rem;
                    a {{
                        display: block;
                        width: 100%;
                        line-height: 2;
                        font-size: 1.1em;
                        padding-left: 0.5rem;
                        &:hover {{
                            {hover}
                        }}
                    }}
                    ul {{
                        margin: 0;
                        list-style: none;
                        padding-left: 1rem;
                    }}
                }}"#,
                title = theme::ULTRA_RED,
            ),
        ])
    }

    fn generate(config: &SidebarConfig) -> String {
        SidebarStyle::generate(config)
    }
}

/// The core [`Sidebar`] with the docs chrome: a close control inside and a [`SidebarButton`] outside.
#[derive(Debug)]
pub struct DocsSidebar {
    sidebar: Sidebar,
    pub close: Element,
    pub button: SidebarButton,
}

impl DocsSidebar {
    /// Needs `el-sidebar-button`, defined along with this component.
    pub fn new(registry: &mut Registry, element: Element, viewport: &Viewport) -> Result<Self, ComponentError> {
        let host = registry.create::<Self>(element)?;
        let button = SidebarButton::new(registry, Element::new())?;
        Ok(Self {
            sidebar: Sidebar::with_host(host, viewport),
            close: Element::part("close"),
            button,
        })
    }

    pub fn sidebar(&self) -> &Sidebar {
        &self.sidebar
    }

    pub fn sidebar_mut(&mut self) -> &mut Sidebar {
        &mut self.sidebar
    }

    pub fn state(&self) -> SidebarState {
        self.sidebar.state()
    }

    pub fn resize(&mut self, viewport: &Viewport) {
        self.sidebar.resize(viewport);
    }

    /// Click on the close control.
    pub fn click_close(&mut self) {
        self.sidebar.hide();
    }

    /// Click on the floating menu button. Opens the sidebar over an overlay.
    pub fn click_button(&mut self) {
        self.sidebar.show(true);
    }
}

impl Component for DocsSidebar {
    type Style = DocsSidebarStyle;
    const NAME: &'static str = "DocsSidebar";

    fn host(&self) -> &Host {
        self.sidebar.host()
    }

    fn host_mut(&mut self) -> &mut Host {
        self.sidebar.host_mut()
    }

    fn define(registry: &mut Registry, tag: &str) -> Result<(), ComponentError> {
        registry.bind::<Self>(tag)?;
        Self::init_style(registry)?;
        SidebarButton::define(registry, "el-sidebar-button")
    }
}
