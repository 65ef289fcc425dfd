use crate::{
    color::{Color, ColorError},
    component::{Component, ComponentError, Host, Registry},
    css::{
        self,
        mixins::{self, BgColorInt},
    },
    dom::Element,
    events::{Detail, names},
    style::{StyleConfig, StyleDescriptor},
};

#[derive(Clone, Debug, Default, PartialEq, StyleConfig)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(rename_all = "camelCase", default))]
pub struct TagConfig {
    /// Background color. A darker shade of it is used for the bottom edge.
    pub color: Option<String>,
    pub border_radius: Option<String>,
}

pub struct TagStyle;

impl StyleDescriptor for TagStyle {
    type Config = TagConfig;

    fn defaults() -> TagConfig {
        TagConfig {
            color: Some("blue".into()),
            border_radius: Some("4px".into()),
        }
    }

    fn layout(_: &TagConfig) -> String {
        "display: inline-flex;
        align-items: center;
        padding: 0.1em 0.4em;
        font-size: 0.9em;
        line-height: unset;"
            .to_string()
    }

    fn generate(config: &TagConfig) -> String {
        css::join([css::recover(color(config, mixins::bg_color)), border_radius(config)])
    }
}

/// A tag with a remove control. Hovering and pressing shade the background.
pub struct TagXStyle;

impl StyleDescriptor for TagXStyle {
    type Config = TagConfig;

    fn defaults() -> TagConfig {
        TagStyle::defaults()
    }

    fn layout(config: &TagConfig) -> String {
        css::join([
            TagStyle::css(config).as_str(),
            r#"padding-right: 0;
            [el="remove"] {
                margin-left: 0.3em;
                padding-left: 0.4em;
                padding-right: 0.5em;
                font-weight: bold;
                border-left: 1px solid;
                cursor: pointer;
            }"#,
        ])
    }

    fn generate(config: &TagConfig) -> String {
        css::join([css::recover(color(config, |c| mixins::bg_color_int(BgColorInt::new(c)))), border_radius(config)])
    }
}

fn color(config: &TagConfig, background: impl Fn(&str) -> Result<String, ColorError>) -> Result<String, ColorError> {
    let Some(color) = &config.color else { return Ok(String::new()) };
    let edge = Color::parse(color)?.darken(0.5);
    Ok(format!("{}\nbox-shadow: 0 0.17em 0 0 {edge};", background(color)?))
}

fn border_radius(config: &TagConfig) -> String {
    config.border_radius.as_ref().map(|radius| format!("border-radius: {radius};")).unwrap_or_default()
}

style_component!(
    /// A static label chip.
    Tag,
    TagStyle
);

// ---------- TagX ----------

/// A chip showing `text` followed by an `x` control.
#[derive(Debug)]
pub struct TagX {
    host: Host,
    pub text: Element,
    pub remove: Element,
    removed: bool,
}

impl TagX {
    /// The host's text becomes the chip text.
    pub fn new(registry: &mut Registry, element: Element) -> Result<Self, ComponentError> {
        let host = registry.create::<Self>(element)?;
        Ok(Self::with_host(host))
    }

    /// Wraps a host created for another component type, for widgets that build their own chips.
    pub fn with_host(mut host: Host) -> Self {
        let text = std::mem::take(&mut host.element.text);
        Self {
            host,
            text: Element::part("text").with_text(text),
            remove: Element::part("remove").with_text("x"),
            removed: false,
        }
    }

    pub fn value(&self) -> &str {
        &self.text.text
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.text.text = value.into();
    }

    pub fn is_removed(&self) -> bool {
        self.removed
    }

    /// Click on the `x` control. Emits `remove` with the chip text, once.
    pub fn click_remove(&mut self) {
        if self.removed {
            return;
        }
        self.removed = true;
        let detail = Detail::Text(self.value().to_string());
        self.notify(names::REMOVE, detail);
    }
}

impl Component for TagX {
    type Style = TagXStyle;
    const NAME: &'static str = "TagX";

    fn host(&self) -> &Host {
        &self.host
    }

    fn host_mut(&mut self) -> &mut Host {
        &mut self.host
    }
}
