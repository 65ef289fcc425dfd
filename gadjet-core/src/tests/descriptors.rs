use super::util::*;
use crate::{
    css::{self, flatten},
    widgets::{
        badge::{BadgeConfig, BadgeStyle},
        box_arrow::BoxArrowStyle,
        button::{ButtonConfig, ButtonStyle},
        button_group::ButtonGroupStyle,
        button_pin::ButtonPinStyle,
        button_square::ButtonSquareStyle,
        card::CardStyle,
        checkbox::CheckboxStyle,
        input::InputStyle,
        input_date::InputDateStyle,
        input_number::{InputNumberCenterStyle, InputNumberConfig, InputNumberStyle},
        input_radio::InputRadioStyle,
        input_tag::InputTagStyle,
        menu::MenuStyle,
        progress_bar::ProgressBarStyle,
        progress_circle::{ProgressCircleConfig, ProgressCircleStyle},
        sidebar::SidebarStyle,
        switch::SwitchStyle,
        tab::TabStyle,
        table::{TableConfig, TableStyle},
        tag::{TagConfig, TagStyle, TagXStyle},
    },
};

/// An empty configuration produces the same CSS as the published defaults, and the CSS parses.
fn check_defaults<S: StyleDescriptor>() {
    let empty = S::Config::default();
    let defaults = S::defaults();
    assert_eq!(S::style(&empty), S::style(&defaults));
    assert_eq!(S::css(&empty), S::css(&defaults));

    let css = css::scope("x-widget", &S::css(&empty));
    assert!(!flatten(&css).is_empty());
}

/// Nothing is generated for an empty configuration.
fn check_absent<S: StyleDescriptor>() {
    assert_eq!(S::generate(&S::Config::default()), "", "{}", std::any::type_name::<S>());
}

#[test]
fn empty_config_matches_defaults() {
    init_logger();
    check_defaults::<BadgeStyle>();
    check_defaults::<BoxArrowStyle>();
    check_defaults::<ButtonStyle>();
    check_defaults::<ButtonGroupStyle>();
    check_defaults::<ButtonPinStyle>();
    check_defaults::<ButtonSquareStyle>();
    check_defaults::<CardStyle>();
    check_defaults::<CheckboxStyle>();
    check_defaults::<InputStyle>();
    check_defaults::<InputDateStyle>();
    check_defaults::<InputNumberStyle>();
    check_defaults::<InputNumberCenterStyle>();
    check_defaults::<InputRadioStyle>();
    check_defaults::<InputTagStyle>();
    check_defaults::<MenuStyle>();
    check_defaults::<ProgressBarStyle>();
    check_defaults::<ProgressCircleStyle>();
    check_defaults::<SidebarStyle>();
    check_defaults::<SwitchStyle>();
    check_defaults::<TabStyle>();
    check_defaults::<TableStyle>();
    check_defaults::<TagStyle>();
    check_defaults::<TagXStyle>();
}

#[test]
fn absent_options_contribute_nothing() {
    check_absent::<BadgeStyle>();
    check_absent::<BoxArrowStyle>();
    check_absent::<ButtonStyle>();
    check_absent::<ButtonGroupStyle>();
    check_absent::<ButtonPinStyle>();
    check_absent::<ButtonSquareStyle>();
    check_absent::<CardStyle>();
    check_absent::<CheckboxStyle>();
    check_absent::<InputStyle>();
    check_absent::<InputDateStyle>();
    check_absent::<InputNumberStyle>();
    check_absent::<InputNumberCenterStyle>();
    check_absent::<InputRadioStyle>();
    check_absent::<InputTagStyle>();
    check_absent::<MenuStyle>();
    check_absent::<ProgressBarStyle>();
    check_absent::<ProgressCircleStyle>();
    check_absent::<SidebarStyle>();
    check_absent::<SwitchStyle>();
    check_absent::<TabStyle>();
    check_absent::<TableStyle>();
    check_absent::<TagStyle>();
    check_absent::<TagXStyle>();

    let only_radius = ButtonStyle::generate(&ButtonConfig {
        border_radius: Some("1em".into()),
        ..Default::default()
    });
    assert_eq!(only_radius, "border-radius: 1em;");
}

#[test]
fn supplied_options_win() {
    let rules = flatten(&css::scope("el-badge", &BadgeStyle::css(&BadgeConfig { color: Some("#eee".into()) })));
    assert_eq!(rules[0].get("background-color"), Some("#eee"));
    assert_eq!(rules[0].get("color"), Some("black"));
}

#[test]
fn bad_colors_drop_their_fragment() {
    init_logger();
    let css = TagStyle::style(&TagConfig {
        color: Some("definitely-not-a-color".into()),
        border_radius: Some("2px".into()),
    });
    assert_eq!(css, "border-radius: 2px;");
}

#[test]
fn tag_edge_is_darker() {
    let css = TagStyle::style(&TagConfig::default());
    assert!(css.contains("background-color: blue;"));
    assert!(css.contains("box-shadow: 0 0.17em 0 0 hsl(240, 100%, 25%);"));

    let x = TagXStyle::css(&TagConfig::default());
    assert!(x.contains("padding-right: 0;"));
    assert!(x.contains("&:hover"));
}

#[test]
fn stepper_embeds_square_buttons() {
    let sheet = StyleSheet::new();
    sheet.inject(&css::scope("el-input-number", &InputNumberStyle::css(&InputNumberConfig::default())));

    let up = r#"el-input-number button[el="up"]"#;
    let down = r#"el-input-number button[el="down"]"#;
    assert_declares!(sheet, up, "aspect-ratio", "1/1");
    assert_declares!(sheet, up, "border-radius", "0 4px 4px 0");
    assert_declares!(sheet, up, "background-color", "rgb(0, 0, 255)");
    assert_declares!(sheet, down, "width", "2em");
    assert!(!sheet.rules_for(&format!("{up}:hover")).is_empty());

    let center = StyleSheet::new();
    center.inject(&css::scope("el-input-number-center", &InputNumberCenterStyle::css(&InputNumberConfig::default())));
    assert_declares!(center, r#"el-input-number-center button[el="down"]"#, "z-index", "1");
    assert_declares!(center, r#"el-input-number-center input[type="number"]"#, "border-radius", "0");
}

#[test]
fn table_selection_uses_complementary_hue() {
    let sheet = StyleSheet::new();
    sheet.inject(&css::scope("table", &TableStyle::css(&TableConfig::default())));

    assert_declares!(sheet, "table tbody td:hover", "background-color", "blue");
    assert_declares!(sheet, "table tbody td:hover::selection", "background-color", "hsl(60, 100%, 50%)");
    assert_declares!(sheet, "table tbody td:hover::selection", "color", "black");
    assert_declares!(sheet, "table thead td", "border-bottom", "3px double");

    let flat = TableStyle::style(&TableConfig {
        horizontal_line: Some(false),
        vertical_line: Some(false),
        ..Default::default()
    });
    assert!(flat.contains("td, th { border-bottom: 0; }"));
    assert!(flat.contains("border-left: 0;"));
}

#[test]
fn animations_are_named_by_content() {
    let sheet = StyleSheet::new();
    sheet.inject(&css::scope("el-progress-bar", &ProgressBarStyle::css(&Default::default())));

    let keyframes: Vec<_> = sheet.rules().into_iter().filter(|rule| matches!(rule, Rule::Verbatim { .. })).collect();
    assert_eq!(keyframes.len(), 1);
    let Rule::Verbatim { text, .. } = &keyframes[0] else { unreachable!() };
    let name = text.trim_start_matches("@keyframes ").split_whitespace().next().unwrap();
    assert!(name.starts_with("animation-"));
    assert_declares!(sheet, r#"el-progress-bar.loop div[el="progress"]"#, "animation", &*format!("{name} 1.5s ease infinite"));

    // Same radius, same animation.
    let a = ProgressCircleStyle::style(&ProgressCircleConfig::default());
    let b = ProgressCircleStyle::style(&ProgressCircleConfig::default());
    assert_eq!(a, b);
    assert!(a.contains("stroke-dasharray: 471;"));
    assert!(a.contains("stroke-dasharray: 471 471;"));
}

#[test]
fn menu_hover_text_is_readable() {
    let sheet = StyleSheet::new();
    sheet.inject(&css::scope("el-menu", &MenuStyle::css(&Default::default())));
    assert_declares!(sheet, "el-menu a:hover", "color", "white");
    assert_declares!(sheet, "el-menu a:hover .arrow i", "border-bottom-color", "white");
    assert_declares!(sheet, "el-menu a", "-webkit-tap-highlight-color", "rgb(0, 0, 255)");
    assert_declares!(sheet, "el-menu a ~ ul", "height", "0");
}

#[cfg(feature = "serde")]
#[test]
fn configs_load_from_camel_case_json() {
    use crate::widgets::sidebar::SidebarConfig;

    let sidebar: SidebarConfig = serde_json::from_str(r##"{ "bgColor": "#222" }"##).unwrap();
    assert_eq!(sidebar.bg_color.as_deref(), Some("#222"));
    assert_eq!(sidebar.overlay_color, None);

    let circle: ProgressCircleConfig = serde_json::from_str(r#"{ "radius": 40, "trackWidth": 8 }"#).unwrap();
    assert_eq!(circle.radius, Some(40.0));
    assert_eq!(circle.track_width, Some(8.0));

    let json = serde_json::to_value(&Detail::Number(2.5)).unwrap();
    assert_eq!(serde_json::from_value::<Detail>(json).unwrap(), Detail::Number(2.5));
}
