use crate::{
    attr::Attributes,
    color::Color,
    component::{Component, ComponentError, Host, Registry},
    css,
    dom::Element,
    events::{Detail, names},
    style::{StyleConfig, StyleDescriptor},
};

#[derive(Clone, Debug, Default, PartialEq, StyleConfig)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(rename_all = "camelCase", default))]
pub struct CheckboxConfig {
    /// Box color while unchecked.
    pub bg_color: Option<String>,
    /// Box color while checked. The check mark turns black or white to stay readable.
    pub active_color: Option<String>,
}

pub struct CheckboxStyle;

impl StyleDescriptor for CheckboxStyle {
    type Config = CheckboxConfig;

    fn defaults() -> CheckboxConfig {
        CheckboxConfig {
            bg_color: Some("#ccc".into()),
            active_color: Some("blue".into()),
        }
    }

    fn layout(_: &CheckboxConfig) -> String {
        r#"position: relative;
        width: 1em;
        height: 1em;
        user-select: none;
        display: inline-block;
        input {
            opacity: 0;
            cursor: pointer;
            width: 1em;
            height: 1em;
            margin: 0;
            position: absolute;
            top: 1;
            left: 0;
            z-index: 1;
        }
        span {
            position: absolute;
            top: 0;
            left: 0;
            width: 1em;
            height: 1em;
            box-shadow: 0 1px 1px 0 grey;
        }
        span:after {
            content: "";
            position: absolute;
            display: none;
        }
        input:checked ~ span:after {
            display: block;
        }"#
        .to_string()
    }

    fn generate(config: &CheckboxConfig) -> String {
        css::join([bg_color(config), css::recover(active_color(config))])
    }
}

fn bg_color(config: &CheckboxConfig) -> String {
    let Some(color) = &config.bg_color else { return String::new() };
    format!("span {{ background-color: {color}; }}")
}

fn active_color(config: &CheckboxConfig) -> Result<String, crate::color::ColorError> {
    let Some(active) = &config.active_color else { return Ok(String::new()) };
    let color = Color::parse(active)?;
    let mark = color.contrast_text();
    Ok(format!(
        "span:after {{
            border: solid {mark};
            left: 0.25em;
            width: 0.3em;
            height: 0.6em;
            border-width: 0 0.2em 0.2em 0;
            transform: rotate(45deg);
        }}
        input:checked ~ span {{ background-color: {active}; }}
        &:hover input ~ span {{ background-color: {hover}; }}",
        hover = color.lighten(0.2),
    ))
}

/// Checked state mirrored on an `<input>` part.
#[derive(Debug)]
pub(crate) struct CheckState {
    pub(crate) input: Element,
}

impl CheckState {
    /// Reads `checked` from the host attributes.
    pub(crate) fn new(input_type: &str, host: &Element) -> Self {
        let mut input = Element::with_attributes(Attributes::new().with("type", input_type));
        if host.attributes.has("checked") {
            input.attributes.set("checked", "");
        }
        Self { input }
    }

    pub(crate) fn is_checked(&self) -> bool {
        self.input.attributes.has("checked")
    }

    /// Returns whether the state changed.
    pub(crate) fn set(&mut self, checked: bool) -> bool {
        if checked == self.is_checked() {
            return false;
        }
        if checked {
            self.input.attributes.set("checked", "");
        } else {
            self.input.attributes.remove("checked");
        }
        true
    }
}

// ---------- Checkbox ----------

/// A styled checkbox: a hidden native input over a painted `span`.
#[derive(Debug)]
pub struct Checkbox {
    host: Host,
    state: CheckState,
}

impl Checkbox {
    pub fn new(registry: &mut Registry, element: Element) -> Result<Self, ComponentError> {
        let host = registry.create::<Self>(element)?;
        let state = CheckState::new("checkbox", &host.element);
        Ok(Self { host, state })
    }

    pub fn input(&self) -> &Element {
        &self.state.input
    }

    pub fn is_checked(&self) -> bool {
        self.state.is_checked()
    }

    /// Emits `change` if the state flips.
    pub fn set_checked(&mut self, checked: bool) {
        if self.state.set(checked) {
            self.notify(names::CHANGE, Detail::None);
        }
    }

    pub fn click(&mut self) {
        self.set_checked(!self.is_checked());
    }
}

impl Component for Checkbox {
    type Style = CheckboxStyle;
    const NAME: &'static str = "Checkbox";

    fn host(&self) -> &Host {
        &self.host
    }

    fn host_mut(&mut self) -> &mut Host {
        &mut self.host
    }
}
