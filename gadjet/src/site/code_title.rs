use gadjet_core::{
    component::{Component, ComponentError, Host, Registry},
    css::{self, mixins},
    dom::Element,
    style::StyleDescriptor,
};

use super::palette;

/// The tab-like caption above a code block.
pub struct CodeTitleStyle;

impl StyleDescriptor for CodeTitleStyle {
    type Config = ();

    fn defaults() {}

    fn layout(_: &()) -> String {
        css::join([
            css::recover(mixins::bg_color(palette::BLUE)),
            "display: inline-block;
            padding: 0.1rem 0.3rem 0.1rem 0.3rem;
            border-radius: 5px;
            border-bottom-left-radius: 0;
            border-bottom-right-radius: 0;
            border-bottom: 1px solid white;"
                .to_string(),
        ])
    }

    fn generate(_: &()) -> String {
        String::new()
    }
}

#[derive(Debug)]
pub struct CodeTitle {
    host: Host,
}

impl CodeTitle {
    pub fn new(registry: &mut Registry, element: Element) -> Result<Self, ComponentError> {
        Ok(Self {
            host: registry.create::<Self>(element)?,
        })
    }
}

impl Component for CodeTitle {
    type Style = CodeTitleStyle;
    const NAME: &'static str = "CodeTitle";

    fn host(&self) -> &Host {
        &self.host
    }

    fn host_mut(&mut self) -> &mut Host {
        &mut self.host
    }
}
