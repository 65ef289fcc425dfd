//! Reusable CSS fragments.
//!
//! Fragments are declaration lists, possibly with nested `&` rules, meant to be placed inside a block.

use crate::color::{Color, ColorError};

/// A background color with readable text on top of it.
///
/// ```
/// # use gadjet_core::css::mixins::bg_color;
/// assert_eq!(bg_color("#000").unwrap(), "background-color: #000;\ncolor: white;");
/// ```
pub fn bg_color(color: &str) -> Result<String, ColorError> {
    let text = Color::parse(color)?.contrast_text();
    Ok(format!("background-color: {color};\ncolor: {text};"))
}

/// An interactive background: [`bg_color`] plus lighter and darker shades on hover and press.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BgColorInt<'a> {
    pub color: &'a str,
    pub lighten: f64,
    pub saturate: f64,
}

impl<'a> BgColorInt<'a> {
    pub fn new(color: &'a str) -> Self {
        Self {
            color,
            lighten: 0.2,
            saturate: 0.2,
        }
    }
}

pub fn bg_color_int(config: BgColorInt<'_>) -> Result<String, ColorError> {
    let color = Color::parse(config.color)?;
    let hover = color.lighten(config.lighten).saturate(config.saturate);
    let active = color.lighten(-config.lighten).saturate(config.saturate);
    Ok(format!(
        "{}\n&:hover {{\nbackground-color: {hover};\n}}\n&:active {{\nbackground-color: {active};\n}}",
        bg_color(&color.to_string())?
    ))
}

/// Font size scaling linearly with the viewport width between two breakpoints.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontFluid {
    pub vw_min: f64,
    pub vw_max: f64,
    pub font_size_min: f64,
    pub font_size_max: f64,
}

impl Default for FontFluid {
    fn default() -> Self {
        Self {
            vw_min: 300.0,
            vw_max: 1200.0,
            font_size_min: 16.0,
            font_size_max: 18.0,
        }
    }
}

pub fn font_fluid(config: FontFluid) -> String {
    let FontFluid {
        vw_min,
        vw_max,
        font_size_min: min,
        font_size_max: max,
    } = config;
    format!(
        "font-size: {min}px;\n\
         @media screen and (min-width: {vw_min}px) {{\n\
         font-size: calc({min}px + ({max} - {min}) * (100vw - {vw_min}px) / ({vw_max} - {vw_min}));\n\
         }}\n\
         @media screen and (min-width: {vw_max}px) {{\n\
         font-size: {max}px;\n\
         }}"
    )
}

pub const LIFT_SHADOW_COLOR: &str = "rgb(0, 0, 0, 50%)";

/// Elevation shadow, levels `0..=5`. Levels outside that range render flat.
pub fn lift(level: i64, shadow_color: &str) -> String {
    let offsets = match level {
        1 => "0 1px 3px 0",
        2 => "0 2px 5px 0",
        3 => "0 4px 9px 0",
        4 => "0 8px 17px 0",
        5 => "0 16px 33px 0",
        _ => "0 0 0 0",
    };
    format!("box-shadow: {offsets} {shadow_color};")
}

/// `aspect-ratio`, with a padding-based fallback for engines without it.
pub fn aspect_ratio(ratio: &str) -> String {
    format!(
        "aspect-ratio: {ratio};\n\
         @supports not (aspect-ratio: {ratio}) {{\n\
         &::before {{\nfloat: left;\npadding-top: calc(100% / ({ratio}));\ncontent: \"\";\n}}\n\
         &::after {{\ndisplay: block;\ncontent: \"\";\nclear: both;\n}}\n\
         }}"
    )
}
