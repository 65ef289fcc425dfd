use std::fmt;

use crate::{
    component::{ComponentError, Host, Registry},
    css::{self, mixins},
    dom::Element,
    style::{StyleConfig, StyleDescriptor},
};

#[derive(Clone, Debug, Default, PartialEq, StyleConfig)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(rename_all = "camelCase", default))]
pub struct BoxArrowConfig {
    /// Which side the arrow points out of: `top`, `right`, `bottom` or `left`.
    pub arrow: Option<String>,
    pub arrow_size: Option<String>,
    /// Offset of the arrow along its side.
    pub position: Option<String>,
    pub bg_color: Option<String>,
    pub border_width: Option<String>,
    pub border_style: Option<String>,
    pub border_color: Option<String>,
    pub border_radius: Option<String>,
}

pub struct BoxArrowStyle;

impl StyleDescriptor for BoxArrowStyle {
    type Config = BoxArrowConfig;

    fn defaults() -> BoxArrowConfig {
        BoxArrowConfig {
            arrow: Some("top".into()),
            arrow_size: Some("8px".into()),
            position: Some("50%".into()),
            bg_color: Some("#ccc".into()),
            border_width: Some("1px".into()),
            border_style: Some("solid".into()),
            border_color: Some("black".into()),
            border_radius: Some("4px".into()),
        }
    }

    fn layout(_: &BoxArrowConfig) -> String {
        r#"display: inline-block;
        position: relative;
        div[el="box"] {
            position: relative;
            background: inherit;
            z-index: 1;
        }
        div[el="arrows"] {
            background: inherit;
        }
        div[el="arrow-top"] {
            position: absolute;
            top: 0;
            background: inherit;
            transform: translate(-50%, -50%) rotate(45deg);
        }
        div[el="arrow-right"] {
            position: absolute;
            right: 0;
            background: inherit;
            transform: translate(50%, -50%) rotate(135deg);
        }
        div[el="arrow-bottom"] {
            position: absolute;
            bottom: 0;
            background: inherit;
            transform: translate(50%, 50%) rotate(225deg);
        }
        div[el="arrow-left"] {
            position: absolute;
            left: 0;
            background: inherit;
            transform: translate(-50%, 50%) rotate(315deg);
        }"#
        .to_string()
    }

    fn generate(config: &BoxArrowConfig) -> String {
        css::join([
            arrow(config),
            arrow_size(config),
            position(config),
            bg_color(config),
            border_width(config),
            border_style(config),
            border_color(config),
            border_radius(config),
        ])
    }
}

fn arrow(config: &BoxArrowConfig) -> String {
    let Some(side) = &config.arrow else { return String::new() };
    format!("div[el^=\"arrow-\"] {{ display: none; }}\ndiv[el=\"arrow-{side}\"] {{ display: block; }}")
}

fn arrow_size(config: &BoxArrowConfig) -> String {
    let Some(size) = &config.arrow_size else { return String::new() };
    format!("div[el^=\"arrow-\"] {{ width: {size}; height: {size}; }}")
}

fn position(config: &BoxArrowConfig) -> String {
    let Some(at) = &config.position else { return String::new() };
    format!(
        "div[el=\"arrow-top\"] {{ left: {at}; }}\n\
         div[el=\"arrow-right\"] {{ top: {at}; }}\n\
         div[el=\"arrow-bottom\"] {{ right: {at}; }}\n\
         div[el=\"arrow-left\"] {{ bottom: {at}; }}"
    )
}

fn bg_color(config: &BoxArrowConfig) -> String {
    config.bg_color.as_deref().map(|color| css::recover(mixins::bg_color(color))).unwrap_or_default()
}

fn border_width(config: &BoxArrowConfig) -> String {
    let Some(width) = &config.border_width else { return String::new() };
    format!("border-width: {width};\ndiv[el^=\"arrow-\"] {{ border-width: {width}; }}")
}

fn border_style(config: &BoxArrowConfig) -> String {
    let Some(style) = &config.border_style else { return String::new() };
    format!("border-style: {style};\ndiv[el^=\"arrow-\"] {{ border-style: {style}; }}")
}

fn border_color(config: &BoxArrowConfig) -> String {
    let Some(color) = &config.border_color else { return String::new() };
    format!(
        "border-color: {color};\n\
         div[el^=\"arrow-\"] {{ border-color: {color}; border-bottom-color: transparent; border-right-color: transparent; }}"
    )
}

fn border_radius(config: &BoxArrowConfig) -> String {
    let Some(radius) = &config.border_radius else { return String::new() };
    format!("border-radius: {radius};\ndiv[el=\"box\"] {{ border-radius: {radius}; }}")
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::Top, Side::Right, Side::Bottom, Side::Left];
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Side::Top => "top",
            Side::Right => "right",
            Side::Bottom => "bottom",
            Side::Left => "left",
        })
    }
}

// ---------- BoxArrow ----------

/// A box with an arrow on one side, for popovers and speech bubbles.
///
/// The host's text moves into the `box` part. All four arrows are rendered, styles pick the visible one.
#[derive(Debug)]
pub struct BoxArrow {
    host: Host,
    pub content: Element,
    arrows: [Element; 4],
}

impl BoxArrow {
    pub fn new(registry: &mut Registry, element: Element) -> Result<Self, ComponentError> {
        let mut host = registry.create::<Self>(element)?;
        let content = Element::part("box").with_text(std::mem::take(&mut host.element.text));
        let arrows = Side::ALL.map(|side| Element::part(&format!("arrow-{side}")));
        Ok(Self { host, content, arrows })
    }

    pub fn arrow(&self, side: Side) -> &Element {
        &self.arrows[side as usize]
    }
}

impl crate::component::Component for BoxArrow {
    type Style = BoxArrowStyle;
    const NAME: &'static str = "BoxArrow";

    fn host(&self) -> &Host {
        &self.host
    }

    fn host_mut(&mut self) -> &mut Host {
        &mut self.host
    }
}
