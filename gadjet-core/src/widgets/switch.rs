use crate::{
    component::{Component, ComponentError, Host, Registry},
    css::{
        self,
        mixins::{self, LIFT_SHADOW_COLOR},
    },
    dom::Element,
    events::{Detail, names},
    style::{StyleConfig, StyleDescriptor},
    widgets::checkbox::CheckState,
};

#[derive(Clone, Debug, Default, PartialEq, StyleConfig)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(rename_all = "camelCase", default))]
pub struct SwitchConfig {
    pub pin_color: Option<String>,
    /// Corner radius of both the pin and the track.
    pub pin_radius: Option<String>,
    /// Track color while off.
    pub bg_color: Option<String>,
    /// Track color while on.
    pub active_color: Option<String>,
}

pub struct SwitchStyle;

impl StyleDescriptor for SwitchStyle {
    type Config = SwitchConfig;

    fn defaults() -> SwitchConfig {
        SwitchConfig {
            pin_color: Some("#f6f5f4".into()),
            pin_radius: Some("10em".into()),
            bg_color: Some("#deddda".into()),
            active_color: Some("blue".into()),
        }
    }

    fn layout(_: &SwitchConfig) -> String {
        format!(
            r#"display: inline-flex;
            font-weight: bold;
            line-height: initial;
            width: 3.8em;
            height: 2em;
            align-items: center;
            position: relative;
            input[type="checkbox"] {{
                position: absolute;
                opacity: 0;
                cursor: pointer;
                z-index: 10;
                width: 100%;
                height: 100%;
                margin: 0;
            }}
            div[el="label"] {{
                display: flex;
                width: 100%;
                height: 100%;
                {lift}
                overflow: hidden;
                transition: .4s;
                align-items: center;
                text-align: center;
                padding-left: 0.2em;
                padding-right: 0.2em;
            }}
            div[el="pin"] {{
                box-sizing: border-box;
                position: absolute;
                top: 50%;
                left: 0.1em;
                transform: translateY(-50%);
                text-align: center;
                width: 1.8em;
                height: 1.8em;
                border: 1px solid #9a9996;
                transition: .2s;
            }}
            div[el="label"] > span {{
                font-size: 0.8em;
                display: flex;
                justify-content: center;
                align-items: center;
                width: 50%;
            }}
            input[type="checkbox"]:checked ~ div[el="pin"] {{
                transform: translate(1.8em, -50%);
                will-change: transform;
            }}"#,
            lift = mixins::lift(1, LIFT_SHADOW_COLOR),
        )
    }

    fn generate(config: &SwitchConfig) -> String {
        css::join([
            nested_bg(r#"div[el="pin"]"#, config.pin_color.as_deref()),
            pin_radius(config),
            nested_bg(r#"div[el="label"]"#, config.bg_color.as_deref()),
            nested_bg(r#"input[type="checkbox"]:checked ~ div[el="label"]"#, config.active_color.as_deref()),
        ])
    }
}

fn nested_bg(selector: &str, color: Option<&str>) -> String {
    match color {
        Some(color) => css::scope(selector, &css::recover(mixins::bg_color(color))),
        None => String::new(),
    }
}

fn pin_radius(config: &SwitchConfig) -> String {
    let Some(radius) = &config.pin_radius else { return String::new() };
    format!("div[el=\"pin\"] {{ border-radius: {radius}; }}\ndiv[el=\"label\"] {{ border-radius: {radius}; }}")
}

// ---------- Switch ----------

/// An on/off toggle: a hidden checkbox over a track (`label`) and a sliding `pin`.
#[derive(Debug)]
pub struct Switch {
    host: Host,
    state: CheckState,
    pub label: Element,
    pub pin: Element,
}

impl Switch {
    pub fn new(registry: &mut Registry, element: Element) -> Result<Self, ComponentError> {
        let host = registry.create::<Self>(element)?;
        let state = CheckState::new("checkbox", &host.element);
        Ok(Self {
            host,
            state,
            label: Element::part("label"),
            pin: Element::part("pin"),
        })
    }

    pub fn input(&self) -> &Element {
        &self.state.input
    }

    pub fn is_on(&self) -> bool {
        self.state.is_checked()
    }

    /// Emits `change` if the state flips.
    pub fn set_on(&mut self, on: bool) {
        if self.state.set(on) {
            self.notify(names::CHANGE, Detail::None);
        }
    }

    pub fn click(&mut self) {
        self.set_on(!self.is_on());
    }
}

impl Component for Switch {
    type Style = SwitchStyle;
    const NAME: &'static str = "Switch";

    fn host(&self) -> &Host {
        &self.host
    }

    fn host_mut(&mut self) -> &mut Host {
        &mut self.host
    }
}
