use crate::{
    component::{Component, ComponentError, Host, Registry},
    css::{self, mixins},
    dom::Element,
    style::StyleDescriptor,
    widgets::button::{ButtonConfig, ButtonStyle},
};

pub struct ButtonSquareStyle;

impl StyleDescriptor for ButtonSquareStyle {
    type Config = ButtonConfig;

    fn defaults() -> ButtonConfig {
        ButtonStyle::defaults()
    }

    fn layout(config: &ButtonConfig) -> String {
        css::join([ButtonStyle::layout(config), "user-select: none;".to_string(), mixins::aspect_ratio("1/1")])
    }

    fn generate(config: &ButtonConfig) -> String {
        ButtonStyle::generate(config)
    }
}

// ---------- ButtonSquare ----------

/// A button with a 1:1 aspect ratio, for icons.
#[derive(Debug)]
pub struct ButtonSquare {
    host: Host,
}

impl ButtonSquare {
    /// Creates the instance and adds the `button` class to its host.
    pub fn new(registry: &mut Registry, element: Element) -> Result<Self, ComponentError> {
        let host = registry.create::<Self>(element)?;
        Ok(Self::with_host(host))
    }

    /// Wraps a host created for another component type, for widgets that extend the square button.
    pub fn with_host(mut host: Host) -> Self {
        host.element.classes.add("button");
        Self { host }
    }
}

impl Component for ButtonSquare {
    type Style = ButtonSquareStyle;
    const NAME: &'static str = "ButtonSquare";

    fn host(&self) -> &Host {
        &self.host
    }

    fn host_mut(&mut self) -> &mut Host {
        &mut self.host
    }
}
