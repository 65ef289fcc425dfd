use crate::{
    css,
    style::{StyleConfig, StyleDescriptor},
    widgets::button::{ButtonConfig, ButtonStyle},
};

#[derive(Clone, Debug, Default, PartialEq, StyleConfig)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(rename_all = "camelCase", default))]
pub struct ButtonPinConfig {
    pub color: Option<String>,
}

impl ButtonPinConfig {
    fn as_button(&self) -> ButtonConfig {
        ButtonConfig {
            color: self.color.clone(),
            border_radius: None,
        }
    }
}

pub struct ButtonPinStyle;

impl StyleDescriptor for ButtonPinStyle {
    type Config = ButtonPinConfig;

    fn defaults() -> ButtonPinConfig {
        ButtonPinConfig { color: Some("blue".into()) }
    }

    fn layout(config: &ButtonPinConfig) -> String {
        css::join([
            ButtonStyle::css(&config.as_button()).as_str(),
            "user-select: none;
            border-radius: 50%;
            min-width: 2em;
            min-height: 2em;",
        ])
    }

    fn generate(config: &ButtonPinConfig) -> String {
        if config.color.is_none() {
            return String::new();
        }
        // Must follow the 4px radius that the button defaults bring in.
        css::join([ButtonStyle::style(&config.as_button()).as_str(), "border-radius: 50%;"])
    }
}

style_component!(
    /// A round button.
    ButtonPin,
    ButtonPinStyle
);
