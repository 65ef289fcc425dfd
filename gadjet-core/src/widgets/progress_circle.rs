use std::f64::consts::PI;

use crate::{
    attr::Attributes,
    component::{Component, ComponentError, Host, Registry},
    css::{self, Injection},
    dom::Element,
    style::{StyleConfig, StyleDescriptor},
    widgets::progress_bar::DEFAULT_MAX,
};

#[derive(Clone, Debug, Default, PartialEq, StyleConfig)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(rename_all = "camelCase", default))]
pub struct ProgressCircleConfig {
    /// In SVG user units.
    pub radius: Option<f64>,
    pub track_width: Option<f64>,
    pub progress_color: Option<String>,
    pub track_color: Option<String>,
}

pub struct ProgressCircleStyle;

impl StyleDescriptor for ProgressCircleStyle {
    type Config = ProgressCircleConfig;

    fn defaults() -> ProgressCircleConfig {
        ProgressCircleConfig {
            radius: Some(75.0),
            track_width: Some(25.0),
            progress_color: Some("blue".into()),
            track_color: Some("#ccc".into()),
        }
    }

    fn layout(_: &ProgressCircleConfig) -> String {
        let rotate = css::keyframes("0% { transform: rotateZ(0deg); } 100% { transform: rotateZ(360deg); }");
        format!(
            "{keyframes}
            display: flex;
            overflow: hidden;
            &.loop svg {{ animation: 2s linear infinite {name}; }}",
            keyframes = rotate.css,
            name = rotate.name,
        )
    }

    fn generate(config: &ProgressCircleConfig) -> String {
        css::join([radius(config), track_width(config), progress_color(config), track_color(config)])
    }
}

fn radius(config: &ProgressCircleConfig) -> String {
    let Some(radius) = config.radius else { return String::new() };
    let c = (2.0 * PI * radius).floor();
    let dash = |ratio: f64| (c * ratio).floor();
    let spin = css::keyframes(&format!(
        "0%, 25% {{ stroke-dashoffset: {open}; transform: rotate(0); }}
        50%, 75% {{ stroke-dashoffset: {closed}; transform: rotate(45deg); }}
        100% {{ stroke-dashoffset: {open}; transform: rotate(360deg); }}",
        open = dash(0.97),
        closed = dash(0.25),
    ));
    format!(
        r#"{keyframes}
        &.loop circle[el="circle2"] {{
            stroke-dasharray: {c};
            stroke-linecap: round;
            transition: unset;
            transform: none;
            transform-origin: 50% 50%;
            animation: 1.5s ease-in-out infinite both {name};
        }}
        &.value circle[el="circle2"] {{
            stroke-linecap: unset;
            stroke-dasharray: {c} {c};
            transition: stroke-dashoffset 0.25s ease-in-out;
            transform: rotate(-90deg);
            transform-origin: 50% 50%;
            animation: unset;
        }}"#,
        keyframes = spin.css,
        name = spin.name,
    )
}

fn track_width(config: &ProgressCircleConfig) -> String {
    let Some(width) = config.track_width else { return String::new() };
    format!(
        r#"circle[el="circle1"] {{ stroke-width: {width}; }}
        &.loop circle[el="circle2"] {{ stroke-width: {width}; }}
        &.value circle[el="circle2"] {{ stroke-width: {width}; }}"#
    )
}

fn progress_color(config: &ProgressCircleConfig) -> String {
    let Some(color) = &config.progress_color else { return String::new() };
    format!(
        r#"&.loop circle[el="circle2"] {{ stroke: {color}; }}
        &.value circle[el="circle2"] {{ stroke: {color}; }}"#
    )
}

fn track_color(config: &ProgressCircleConfig) -> String {
    let Some(color) = &config.track_color else { return String::new() };
    format!(r#"circle[el="circle1"] {{ stroke: {color}; }}"#)
}

// ---------- ProgressCircle ----------

/// A circular progress indicator drawn as two SVG circles: the track and the arc over it.
#[derive(Debug)]
pub struct ProgressCircle {
    host: Host,
    pub svg: Element,
    pub track: Element,
    pub arc: Element,
    radius: f64,
    track_width: f64,
    max: f64,
    value: f64,
}

impl ProgressCircle {
    pub fn new(registry: &mut Registry, element: Element) -> Result<Self, ComponentError> {
        let host = registry.create::<Self>(element)?;
        let defaults = ProgressCircleStyle::defaults();
        let max = host.element.attributes.float("max");
        let value = host.element.attributes.float("value");

        let mut circle = Self {
            host,
            svg: Element::new(),
            track: Element::part("circle1"),
            arc: Element::part("circle2"),
            radius: defaults.radius.unwrap_or(75.0),
            track_width: defaults.track_width.unwrap_or(25.0),
            max: if max.is_nan() || max == 0.0 { DEFAULT_MAX } else { max },
            value,
        };
        circle.render();
        Ok(circle)
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn track_width(&self) -> f64 {
        self.track_width
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Resizes the circle and restyles this instance to match.
    pub fn set_radius(&mut self, registry: &Registry, radius: f64) -> Result<Injection, ComponentError> {
        self.radius = radius;
        self.restyle(registry)
    }

    pub fn set_track_width(&mut self, registry: &Registry, width: f64) -> Result<Injection, ComponentError> {
        self.track_width = width;
        self.restyle(registry)
    }

    fn restyle(&mut self, registry: &Registry) -> Result<Injection, ComponentError> {
        let config = ProgressCircleConfig {
            radius: Some(self.radius),
            track_width: Some(self.track_width),
            ..Default::default()
        };
        let injection = self.add_style(registry, config)?;
        self.render();
        Ok(injection)
    }

    /// `NaN` switches to the loop animation.
    pub fn set_value(&mut self, value: f64) {
        self.value = value;
        let classes = &mut self.host.element.classes;
        if value.is_nan() {
            classes.remove("value");
            classes.add("loop");
            return;
        }
        classes.remove("loop");
        classes.add("value");

        let ratio = value / self.max;
        let c = 2.0 * PI * self.radius;
        self.arc.style.set("stroke-dashoffset", (c - ratio * c).to_string());
    }

    fn render(&mut self) {
        let center = self.radius + self.track_width;
        let size = 2.0 * center;
        self.svg.attributes.set("viewBox", format!("0 0 {size} {size}"));
        for circle in [&mut self.track, &mut self.arc] {
            let el = circle.attributes.get("el").unwrap_or_default().to_string();
            circle.attributes = Attributes::new()
                .with("el", el)
                .with("fill", "transparent")
                .with("r", self.radius.to_string())
                .with("cx", center.to_string())
                .with("cy", center.to_string());
        }
        self.set_value(self.value);
    }
}

impl Component for ProgressCircle {
    type Style = ProgressCircleStyle;
    const NAME: &'static str = "ProgressCircle";

    fn host(&self) -> &Host {
        &self.host
    }

    fn host_mut(&mut self) -> &mut Host {
        &mut self.host
    }
}
