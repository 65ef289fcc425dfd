use crate::{
    color::{Color, ColorError},
    css::{self, mixins},
    style::{StyleConfig, StyleDescriptor},
};

#[derive(Clone, Debug, Default, PartialEq, StyleConfig)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(rename_all = "camelCase", default))]
pub struct TableConfig {
    pub thead_bg_color: Option<String>,
    /// Background of the hovered cell. Its selection uses the complementary hue.
    pub active_color: Option<String>,
    /// Lines between rows.
    pub horizontal_line: Option<bool>,
    /// Lines between columns.
    pub vertical_line: Option<bool>,
}

pub struct TableStyle;

impl StyleDescriptor for TableStyle {
    type Config = TableConfig;

    fn defaults() -> TableConfig {
        TableConfig {
            thead_bg_color: Some("#ccc".into()),
            active_color: Some("blue".into()),
            horizontal_line: Some(true),
            vertical_line: Some(true),
        }
    }

    fn layout(_: &TableConfig) -> String {
        "display: block;
        overflow: auto;
        border: 1px solid;
        border-collapse: separate;
        border-spacing: 0;
        thead { font-weight: bold; }
        th, td { padding: 0.5rem; }"
            .to_string()
    }

    fn generate(config: &TableConfig) -> String {
        let thead = match &config.thead_bg_color {
            Some(color) => css::scope("thead", &css::recover(mixins::bg_color(color))),
            None => String::new(),
        };
        css::join([thead, css::recover(active_color(config)), horizontal_line(config), vertical_line(config)])
    }
}

fn active_color(config: &TableConfig) -> Result<String, ColorError> {
    let Some(active) = &config.active_color else { return Ok(String::new()) };
    let selection = Color::parse(active)?.rotate(180.0);
    Ok(format!(
        "tbody td:hover {{
            {hover}
            &::selection {{ {selection} }}
        }}",
        hover = mixins::bg_color(active)?,
        selection = mixins::bg_color(&selection.to_string())?,
    ))
}

fn horizontal_line(config: &TableConfig) -> String {
    let (cell, head) = match config.horizontal_line {
        Some(true) => ("1px solid", "3px double"),
        Some(false) => ("0", "0"),
        None => return String::new(),
    };
    format!("td, th {{ border-bottom: {cell}; }}\nthead {{ td, th {{ border-bottom: {head}; }} }}")
}

fn vertical_line(config: &TableConfig) -> String {
    let border = match config.vertical_line {
        Some(true) => "1px solid",
        Some(false) => "0",
        None => return String::new(),
    };
    format!("td:not(:first-child), th:not(:first-child) {{ border-left: {border}; }}")
}

style_component!(
    /// Styles the native `<table>`, or a custom tag.
    Table,
    TableStyle,
    native = "table"
);
