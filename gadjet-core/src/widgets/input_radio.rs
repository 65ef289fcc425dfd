use crate::{
    color::{Color, ColorError},
    component::{Component, ComponentError, Host, Registry},
    css,
    dom::Element,
    events::{Detail, names},
    style::{StyleConfig, StyleDescriptor},
    widgets::checkbox::CheckState,
};

#[derive(Clone, Debug, Default, PartialEq, StyleConfig)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(rename_all = "camelCase", default))]
pub struct InputRadioConfig {
    /// Circle color while unchecked.
    pub color: Option<String>,
    pub box_shadow_color: Option<String>,
    /// Circle color while checked. The dot turns black or white to stay readable.
    pub active_color: Option<String>,
}

pub struct InputRadioStyle;

impl StyleDescriptor for InputRadioStyle {
    type Config = InputRadioConfig;

    fn defaults() -> InputRadioConfig {
        InputRadioConfig {
            color: Some("#ccc".into()),
            box_shadow_color: Some("#777".into()),
            active_color: Some("blue".into()),
        }
    }

    fn layout(config: &InputRadioConfig) -> String {
        let dot = match config.active_color.as_deref().map(Color::parse) {
            Some(Ok(color)) => color.contrast_text(),
            Some(Err(err)) => {
                log::error!("{err}, the radio dot falls back to black");
                "black"
            }
            None => "black",
        };

        format!(
            r#"position: relative;
            display: inline-block;
            font-size: 1em;
            user-select: none;
            width: 1.1em;
            height: 1.1em;
            input {{
                position: absolute;
                z-index: 1;
                top: 0;
                left: 0;
                opacity: 0;
                cursor: pointer;
                width: 1.1em;
                height: 1.1em;
                vertical-align: middle;
            }}
            span {{
                position: absolute;
                top: 0;
                left: 0;
                width: 1.1em;
                height: 1.1em;
                border-radius: 50%;
            }}
            span:after {{
                content: "";
                position: absolute;
                display: none;
            }}
            input:checked ~ span:after {{
                display: block;
            }}
            span:after {{
                top: 0.35em;
                left: 0.35em;
                width: 0.4em;
                height: 0.4em;
                border-radius: 50%;
                background-color: {dot};
            }}"#
        )
    }

    fn generate(config: &InputRadioConfig) -> String {
        css::join([color(config), box_shadow_color(config), css::recover(active_color(config))])
    }
}

fn color(config: &InputRadioConfig) -> String {
    let Some(color) = &config.color else { return String::new() };
    format!("span {{ background-color: {color}; }}")
}

fn box_shadow_color(config: &InputRadioConfig) -> String {
    let Some(color) = &config.box_shadow_color else { return String::new() };
    format!("span {{ box-shadow: 0 1px 1px 0 {color}; }}")
}

fn active_color(config: &InputRadioConfig) -> Result<String, ColorError> {
    let Some(active) = &config.active_color else { return Ok(String::new()) };
    let hover = Color::parse(active)?.lighten(0.2).saturate(0.2);
    Ok(format!(
        "&:hover input ~ span {{ background-color: {hover}; }}\n\
         input:checked ~ span {{ background-color: {active}; }}"
    ))
}

// ---------- InputRadio ----------

/// A styled radio button. Clicking only ever checks it; unchecking is up to whoever manages the group.
#[derive(Debug)]
pub struct InputRadio {
    host: Host,
    state: CheckState,
}

impl InputRadio {
    pub fn new(registry: &mut Registry, element: Element) -> Result<Self, ComponentError> {
        let host = registry.create::<Self>(element)?;
        let state = CheckState::new("radio", &host.element);
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
        self.set_checked(true);
    }
}

impl Component for InputRadio {
    type Style = InputRadioStyle;
    const NAME: &'static str = "InputRadio";

    fn host(&self) -> &Host {
        &self.host
    }

    fn host_mut(&mut self) -> &mut Host {
        &mut self.host
    }
}
