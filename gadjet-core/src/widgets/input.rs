use crate::{
    css::{self, Injection, StyleSheet},
    style::StyleDescriptor,
};

pub struct InputStyle;

impl StyleDescriptor for InputStyle {
    type Config = ();

    fn defaults() {}

    fn layout(_: &()) -> String {
        "font-size: 1em;
        border: 1px solid grey;
        border-radius: 0.2em;
        padding: 0.4em;"
            .to_string()
    }

    fn generate(_: &()) -> String {
        String::new()
    }
}

style_component!(
    /// A text input.
    Input,
    InputStyle,
    native = "input"
);

/// Styles every native `<input>` in the sheet, without a reset.
pub fn inject_global(sheet: &StyleSheet) -> Injection {
    sheet.inject(&css::scope("input", &InputStyle::css(&())))
}
