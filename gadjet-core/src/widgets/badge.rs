use crate::{
    css::{self, mixins},
    style::{StyleConfig, StyleDescriptor},
};

#[derive(Clone, Debug, Default, PartialEq, StyleConfig)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(rename_all = "camelCase", default))]
pub struct BadgeConfig {
    /// Background color. The text turns black or white to stay readable.
    pub color: Option<String>,
}

pub struct BadgeStyle;

impl StyleDescriptor for BadgeStyle {
    type Config = BadgeConfig;

    fn defaults() -> BadgeConfig {
        BadgeConfig { color: Some("blue".into()) }
    }

    fn layout(_: &BadgeConfig) -> String {
        "display: inline-flex;
        justify-content: center;
        align-items: center;
        font-size: 1em;
        line-height: initial;
        border-radius: 20em;
        padding-left: 0.2em;
        padding-right: 0.2em;
        min-width: 1.5em;
        min-height: 1.7em;"
            .to_string()
    }

    fn generate(config: &BadgeConfig) -> String {
        match &config.color {
            Some(color) => css::recover(mixins::bg_color(color)),
            None => String::new(),
        }
    }
}

style_component!(
    /// A small rounded counter or label.
    Badge,
    BadgeStyle
);
