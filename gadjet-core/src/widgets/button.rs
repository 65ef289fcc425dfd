use crate::{
    css::{
        self,
        mixins::{self, BgColorInt, LIFT_SHADOW_COLOR},
    },
    style::{StyleConfig, StyleDescriptor},
};

#[derive(Clone, Debug, Default, PartialEq, StyleConfig)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(rename_all = "camelCase", default))]
pub struct ButtonConfig {
    /// Background color. Hover and press shades are derived from it.
    pub color: Option<String>,
    pub border_radius: Option<String>,
}

impl ButtonConfig {
    pub fn color(color: impl Into<String>) -> Self {
        Self {
            color: Some(color.into()),
            ..Default::default()
        }
    }
}

pub struct ButtonStyle;

impl StyleDescriptor for ButtonStyle {
    type Config = ButtonConfig;

    fn defaults() -> ButtonConfig {
        ButtonConfig {
            color: Some("blue".into()),
            border_radius: Some("4px".into()),
        }
    }

    fn layout(_: &ButtonConfig) -> String {
        format!(
            "border: 0;
            font-size: 1em;
            line-height: 1;
            font-weight: bold;
            text-decoration: none;
            outline: none;
            display: inline-flex;
            align-items: center;
            justify-content: center;
            height: 2em;
            padding-left: 0.4em;
            padding-right: 0.4em;
            cursor: pointer;
            transition: 0.2s;
            box-sizing: border-box;
            -webkit-tap-highlight-color: rgba(0,0,0,0);
            &[disabled]:hover {{ cursor: not-allowed; }}
            a {{ text-decoration: none; }}
            {rest}
            &:hover {{ {hover} }}
            &:active {{ {rest} }}",
            rest = mixins::lift(1, LIFT_SHADOW_COLOR),
            hover = mixins::lift(2, LIFT_SHADOW_COLOR),
        )
    }

    fn generate(config: &ButtonConfig) -> String {
        css::join([color(config), border_radius(config)])
    }
}

fn color(config: &ButtonConfig) -> String {
    match &config.color {
        Some(color) => css::recover(mixins::bg_color_int(BgColorInt::new(color))),
        None => String::new(),
    }
}

fn border_radius(config: &ButtonConfig) -> String {
    config.border_radius.as_ref().map(|radius| format!("border-radius: {radius};")).unwrap_or_default()
}

style_component!(
    /// Styles the native `<button>`, or a custom tag.
    Button,
    ButtonStyle,
    native = "button"
);
