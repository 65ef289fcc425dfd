use crate::{
    css::{
        self,
        mixins::{self, LIFT_SHADOW_COLOR},
    },
    style::{StyleConfig, StyleDescriptor},
};

#[derive(Clone, Debug, Default, PartialEq, StyleConfig)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(rename_all = "camelCase", default))]
pub struct CardConfig {
    pub color: Option<String>,
    pub border_radius: Option<String>,
}

pub struct CardStyle;

impl StyleDescriptor for CardStyle {
    type Config = CardConfig;

    fn defaults() -> CardConfig {
        CardConfig {
            color: Some("#eee".into()),
            border_radius: Some("4px".into()),
        }
    }

    fn layout(_: &CardConfig) -> String {
        css::join(["display: block;".to_string(), mixins::lift(3, LIFT_SHADOW_COLOR)])
    }

    fn generate(config: &CardConfig) -> String {
        let color = config.color.as_deref().map(|color| css::recover(mixins::bg_color(color))).unwrap_or_default();
        let radius = config
            .border_radius
            .as_ref()
            .map(|radius| format!("border-radius: {radius};\noverflow: hidden;"))
            .unwrap_or_default();
        css::join([color, radius])
    }
}

style_component!(
    /// A raised panel.
    Card,
    CardStyle
);
