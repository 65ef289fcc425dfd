use keyboard_types::{Key, NamedKey};

use crate::{
    attr::Attributes,
    component::{Component, ComponentError, ConfigOf, Host, Registry},
    css::{self, Injection},
    dom::Element,
    events::{Detail, names},
    style::{StyleConfig, StyleDescriptor, StyleInput},
    widgets::tag::{TagConfig, TagX, TagXStyle},
};

#[derive(Clone, Debug, Default, PartialEq, StyleConfig)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(rename_all = "camelCase", default))]
pub struct InputTagConfig {
    /// Chip color.
    pub tag_color: Option<String>,
    /// Chip corner radius.
    pub tag_border_radius: Option<String>,
}

impl InputTagConfig {
    fn chip(&self) -> TagConfig {
        TagConfig {
            color: self.tag_color.clone(),
            border_radius: self.tag_border_radius.clone(),
        }
    }
}

/// The field itself. Chip colors are applied to the chip component, see [`InputTag::define`].
pub struct InputTagStyle;

impl StyleDescriptor for InputTagStyle {
    type Config = InputTagConfig;

    fn defaults() -> InputTagConfig {
        InputTagConfig {
            tag_color: Some("blue".into()),
            tag_border_radius: Some("4px".into()),
        }
    }

    fn layout(_: &InputTagConfig) -> String {
        r#"display: flex;
        flex-wrap: wrap;
        align-items: center;
        cursor: text;
        border: 1px solid grey;
        border-radius: 4px;
        background: white;
        min-height: 2em;
        min-width: 150px;
        padding: 0.2em;
        div[contenteditable="true"] {
            display: flex;
            align-items: center;
            outline: none;
            height: auto;
            border: 0;
            margin-left: 0.2em;
        }"#
        .to_string()
    }

    fn generate(_: &InputTagConfig) -> String {
        String::new()
    }
}

/// The chip type of [`InputTag`], bound to `<tag>-tagx`.
#[derive(Debug)]
pub struct InputTagX(TagX);

impl InputTagX {
    fn new(registry: &mut Registry, value: &str) -> Result<Self, ComponentError> {
        let host = registry.create::<Self>(Element::new().with_text(value))?;
        Ok(Self(TagX::with_host(host)))
    }

    pub fn value(&self) -> &str {
        self.0.value()
    }

    pub fn chip(&self) -> &TagX {
        &self.0
    }
}

impl Component for InputTagX {
    type Style = TagXStyle;
    const NAME: &'static str = "InputTagX";

    fn host(&self) -> &Host {
        self.0.host()
    }

    fn host_mut(&mut self) -> &mut Host {
        self.0.host_mut()
    }
}

// ---------- InputTag ----------

/// Free text chips: type a value and press Enter to add it.
#[derive(Debug)]
pub struct InputTag {
    host: Host,
    /// The editable part holding the buffer.
    pub input: Element,
    chips: Vec<InputTagX>,
}

impl InputTag {
    pub fn new(registry: &mut Registry, element: Element) -> Result<Self, ComponentError> {
        let host = registry.create::<Self>(element)?;
        Ok(Self {
            host,
            input: Element::with_attributes(Attributes::new().with("contenteditable", "true")),
            chips: Vec::new(),
        })
    }

    /// The uncommitted text.
    pub fn buffer(&self) -> &str {
        &self.input.text
    }

    /// Appends typed text to the buffer.
    pub fn type_text(&mut self, text: &str) {
        self.input.text.push_str(text);
    }

    pub fn keydown(&mut self, registry: &mut Registry, key: &Key) -> Result<(), ComponentError> {
        match key {
            Key::Named(NamedKey::Enter) => self.commit(registry),
            Key::Named(NamedKey::Backspace) => {
                if self.buffer().trim().is_empty() {
                    self.pop(registry);
                } else {
                    self.input.text.pop();
                }
                Ok(())
            }
            Key::Character(text) => {
                self.type_text(text);
                Ok(())
            }
            _ => Ok(()),
        }
    }

    /// Focus left the field. Commits the buffer.
    pub fn blur(&mut self, registry: &mut Registry) -> Result<(), ComponentError> {
        self.commit(registry)
    }

    fn commit(&mut self, registry: &mut Registry) -> Result<(), ComponentError> {
        let value = std::mem::take(&mut self.input.text);
        self.add_tag(registry, &value)
    }

    /// Chip values in order.
    pub fn tags(&self) -> Vec<&str> {
        self.chips.iter().map(InputTagX::value).collect()
    }

    pub fn chips(&self) -> &[InputTagX] {
        &self.chips
    }

    /// Adds a chip for the trimmed `value`, unless it's empty or already present.
    pub fn add_tag(&mut self, registry: &mut Registry, value: &str) -> Result<(), ComponentError> {
        let value = value.trim();
        if value.is_empty() || self.chips.iter().any(|chip| chip.value() == value) {
            return Ok(());
        }
        let chip = InputTagX::new(registry, value)?;
        self.chips.push(chip);
        Ok(())
    }

    pub fn add_tags<'a>(&mut self, registry: &mut Registry, values: impl IntoIterator<Item = &'a str>) -> Result<(), ComponentError> {
        for value in values {
            self.add_tag(registry, value)?;
        }
        Ok(())
    }

    pub fn set_tags<'a>(&mut self, registry: &mut Registry, values: impl IntoIterator<Item = &'a str>) -> Result<(), ComponentError> {
        self.clear_tags(registry);
        self.add_tags(registry, values)
    }

    pub fn clear_tags(&mut self, registry: &mut Registry) {
        for chip in self.chips.drain(..) {
            registry.unregister(chip.host());
        }
    }

    /// Click on the `x` control of the chip at `index`. Emits `remove` with the chip text.
    pub fn click_remove(&mut self, registry: &mut Registry, index: usize) -> bool {
        if index >= self.chips.len() {
            return false;
        }
        let mut chip = self.chips.remove(index);
        chip.0.click_remove();
        registry.unregister(chip.host());
        self.notify(names::REMOVE, Detail::Text(chip.value().to_string()));
        true
    }

    fn pop(&mut self, registry: &mut Registry) {
        if let Some(chip) = self.chips.pop() {
            registry.unregister(chip.host());
        }
    }
}

impl Component for InputTag {
    type Style = InputTagStyle;
    const NAME: &'static str = "InputTag";

    fn host(&self) -> &Host {
        &self.host
    }

    fn host_mut(&mut self) -> &mut Host {
        &mut self.host
    }

    /// Also defines the chip component as `<tag>-tagx`, once `tag` itself is bound.
    fn define(registry: &mut Registry, tag: &str) -> Result<(), ComponentError> {
        registry.bind::<Self>(tag)?;

        registry.define::<InputTagX>(&format!("{tag}-tagx"))?;
        let chip = registry.tag_of::<InputTagX>()?;
        registry.sheet().inject(&css::scope(&chip, "margin: 0.3em 0.2em;"));

        Self::init_style(registry)
    }

    fn tag_style(registry: &Registry, style: impl Into<StyleInput<ConfigOf<Self>>>) -> Result<Injection, ComponentError> {
        let style = style.into();
        if let StyleInput::Config(config) = &style {
            InputTagX::tag_style(registry, config.chip())?;
        }
        let tag = registry.tag_of::<Self>()?;
        Ok(registry.sheet().inject(&css::scope(&tag, &style.resolve::<InputTagStyle>())))
    }

    fn class_style(registry: &Registry, class: &str, style: impl Into<StyleInput<ConfigOf<Self>>>) -> Result<Injection, ComponentError> {
        let style = style.into();
        if let StyleInput::Config(config) = &style {
            InputTagX::class_style(registry, class, config.chip())?;
        }
        let tag = registry.tag_of::<Self>()?;
        Ok(registry.sheet().inject(&css::scope(&format!("{tag}.{class}"), &style.resolve::<InputTagStyle>())))
    }

    fn add_style(&mut self, registry: &Registry, style: impl Into<StyleInput<ConfigOf<Self>>>) -> Result<Injection, ComponentError> {
        let style = style.into();
        if let StyleInput::Config(config) = &style {
            for chip in &mut self.chips {
                chip.add_style(registry, config.chip())?;
            }
        }
        let css = style.resolve::<InputTagStyle>();
        let host = self.host_mut();
        let token = host.token().to_string();
        host.element.classes.add(&token);
        Ok(registry.sheet().inject(&css::scope(&host.selector(), &css)))
    }
}
