use crate::{
    component::{Component, ComponentError, Host, Registry},
    css,
    dom::Element,
    style::{StyleConfig, StyleDescriptor},
};

#[derive(Clone, Debug, Default, PartialEq, StyleConfig)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(rename_all = "camelCase", default))]
pub struct ProgressBarConfig {
    pub progress_color: Option<String>,
    pub track_color: Option<String>,
    /// Height of the bar.
    pub thickness: Option<String>,
    pub border_radius: Option<String>,
}

pub struct ProgressBarStyle;

impl StyleDescriptor for ProgressBarStyle {
    type Config = ProgressBarConfig;

    fn defaults() -> ProgressBarConfig {
        ProgressBarConfig {
            progress_color: Some("blue".into()),
            track_color: Some("#ccc".into()),
            thickness: Some("5px".into()),
            border_radius: Some("5px".into()),
        }
    }

    fn layout(_: &ProgressBarConfig) -> String {
        let sweep = css::keyframes(
            "from { width: 0; opacity: 1; }
            25% { opacity: 1; }
            to { width: 100%; opacity: 0; }",
        );
        format!(
            r#"{keyframes}
            width: 100%;
            &.value {{
                display: flex;
                justify-content: flex-start;
                div[el="progress"] {{
                    will-change: width opacity;
                    transition: width 0.25s ease 0s;
                    animation: none;
                }}
            }}
            &.loop {{
                display: flex;
                justify-content: center;
                div[el="progress"] {{
                    will-change: width, opacity;
                    transition: none;
                    animation: {name} 1.5s ease infinite;
                }}
            }}"#,
            keyframes = sweep.css,
            name = sweep.name,
        )
    }

    fn generate(config: &ProgressBarConfig) -> String {
        let progress = |property: &str, value: &Option<String>| match value {
            Some(value) => format!("div[el=\"progress\"] {{ {property}: {value}; }}"),
            None => String::new(),
        };
        let radius = match &config.border_radius {
            Some(radius) => format!("border-radius: {radius};\n{}", progress("border-radius", &config.border_radius)),
            None => String::new(),
        };
        css::join([
            progress("background-color", &config.progress_color),
            config.track_color.as_ref().map(|color| format!("background-color: {color};")).unwrap_or_default(),
            progress("height", &config.thickness),
            radius,
        ])
    }
}

/// Fallback for a missing, zero or unparsable `max`.
pub const DEFAULT_MAX: f64 = 100.0;

// ---------- ProgressBar ----------

/// A determinate bar, or a looping animation while the value is unknown.
#[derive(Debug)]
pub struct ProgressBar {
    host: Host,
    pub progress: Element,
    max: f64,
    value: f64,
}

impl ProgressBar {
    /// Reads `max` and `value` from the host's attributes.
    pub fn new(registry: &mut Registry, element: Element) -> Result<Self, ComponentError> {
        let host = registry.create::<Self>(element)?;
        let max = host.element.attributes.float("max");
        let value = host.element.attributes.float("value");

        let mut bar = Self {
            host,
            progress: Element::part("progress"),
            max: if max.is_nan() || max == 0.0 { DEFAULT_MAX } else { max },
            value,
        };
        bar.set_value(value);
        Ok(bar)
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// `NaN` while looping.
    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn is_looping(&self) -> bool {
        self.value.is_nan()
    }

    /// `NaN` switches to the loop animation.
    pub fn set_value(&mut self, value: f64) {
        self.value = value;
        let classes = &mut self.host.element.classes;
        if value.is_nan() {
            classes.remove("value");
            classes.add("loop");
        } else {
            classes.remove("loop");
            classes.add("value");
            self.progress.style.set("width", format!("{}%", value / self.max * 100.0));
        }
    }

    /// Parses like the `value` attribute: anything that isn't a number loops.
    pub fn set_value_text(&mut self, text: &str) {
        self.set_value(crate::attr::parse_float(text));
    }
}

impl Component for ProgressBar {
    type Style = ProgressBarStyle;
    const NAME: &'static str = "ProgressBar";

    fn host(&self) -> &Host {
        &self.host
    }

    fn host_mut(&mut self) -> &mut Host {
        &mut self.host
    }
}
