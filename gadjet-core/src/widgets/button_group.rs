use crate::style::{StyleConfig, StyleDescriptor};

#[derive(Clone, Debug, Default, PartialEq, StyleConfig)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(rename_all = "camelCase", default))]
pub struct ButtonGroupConfig {
    /// Radius of the outer corners of the first and last button.
    pub border_radius: Option<String>,
}

pub struct ButtonGroupStyle;

impl StyleDescriptor for ButtonGroupStyle {
    type Config = ButtonGroupConfig;

    fn defaults() -> ButtonGroupConfig {
        ButtonGroupConfig {
            border_radius: Some("4px".into()),
        }
    }

    fn layout(_: &ButtonGroupConfig) -> String {
        "display: inline-flex;".to_string()
    }

    fn generate(config: &ButtonGroupConfig) -> String {
        let Some(radius) = &config.border_radius else { return String::new() };
        format!(
            "> * {{
                border-radius: 0;
                &:first-of-type {{ border-radius: {radius} 0 0 {radius}; }}
                &:last-of-type {{ border-radius: 0 {radius} {radius} 0; }}
            }}"
        )
    }
}

style_component!(
    /// Joins adjacent buttons into one bar.
    ButtonGroup,
    ButtonGroupStyle
);
