use super::util::*;
use crate::{color::Model, css::mixins};

fn color(text: &str) -> Color {
    Color::parse(text).unwrap()
}

#[test]
fn prints_in_its_model() {
    assert_eq!(color("#ff0000").to_string(), "rgb(255, 0, 0)");
    assert_eq!(color("red").to_string(), "rgb(255, 0, 0)");
    assert_eq!(color("rgba(0, 0, 0, 0.5)").to_string(), "rgba(0, 0, 0, 0.5)");
    assert_eq!(color("hsl(120, 50%, 25%)").to_string(), "hsl(120, 50%, 25%)");
}

#[test]
fn adjustments_switch_to_hsl() {
    let lighter = color("#ff0000").lighten(0.2);
    assert_eq!(lighter.model(), Model::Hsl);
    assert_eq!(lighter.to_string(), "hsl(0, 100%, 60%)");

    assert_eq!(color("#3584e4").lighten(0.2).model(), Model::Hsl);
    assert_eq!(color("blue").rotate(180.0).to_string(), "hsl(60, 100%, 50%)");
    assert_eq!(color("hsl(0, 40%, 50%)").darken(0.5).to_string(), "hsl(0, 40%, 25%)");
    assert_eq!(color("hsl(0, 40%, 50%)").saturate(0.5).to_string(), "hsl(0, 60%, 50%)");
}

#[test]
fn adjustments_clamp() {
    assert_eq!(color("white").lighten(0.5).to_string(), "hsl(0, 0%, 100%)");
    assert_eq!(color("hsl(10, 80%, 50%)").saturate(1.0).to_string(), "hsl(10, 100%, 50%)");
}

#[test]
fn other_color_spaces_convert_to_rgb() {
    assert_eq!(color("hwb(120 0% 0%)").to_string(), "rgb(0, 255, 0)");
    assert_eq!(color("color(srgb 1 0 0)").to_string(), "rgb(255, 0, 0)");
    assert_eq!(color("color(srgb 0 0 1 / 0.5)").to_string(), "rgba(0, 0, 255, 0.5)");

    // Out of gamut channels are clamped.
    assert_eq!(color("color(display-p3 1 0 0)").to_string(), "rgb(255, 0, 0)");

    for text in ["oklch(0.6 0.1 250)", "lab(50% 20 30)", "lch(40% 30 120)", "oklab(0.5 0.1 -0.1)"] {
        let parsed = color(text);
        assert_eq!(parsed.model(), Model::Rgb, "{text}");

        let lighter = parsed.lighten(0.2);
        assert_eq!(lighter.model(), Model::Hsl, "{text}");
        assert!(lighter.values()[2] > parsed.to_hsl().values()[2], "{text}");
        assert!(Color::parse(&lighter.to_string()).is_ok(), "{text}");
    }

    assert!(color("lab(100% 0 0)").is_light());
    assert!(color("oklch(0.2 0.05 30)").is_dark());
}

#[test]
fn darkness_threshold() {
    assert!(color("black").is_dark());
    assert!(color("blue").is_dark());
    assert!(color("white").is_light());
    assert!(color("#ccc").is_light());
    assert_eq!(color("blue").contrast_text(), "white");
    assert_eq!(color("#eee").contrast_text(), "black");
}

#[test]
fn rejects_what_it_cannot_adjust() {
    assert!(matches!(Color::parse("nope"), Err(ColorError::Invalid(_))));
    assert!(matches!(Color::parse("#ff0000 extra"), Err(ColorError::Invalid(_))));
    assert!(matches!(Color::parse("currentcolor"), Err(ColorError::Unsupported(_))));
}

#[test]
fn readable_backgrounds() {
    assert_eq!(mixins::bg_color("#000").unwrap(), "background-color: #000;\ncolor: white;");
    assert_eq!(mixins::bg_color("#eee").unwrap(), "background-color: #eee;\ncolor: black;");
    assert!(mixins::bg_color("not-a-color").is_err());

    let interactive = mixins::bg_color_int(mixins::BgColorInt::new("#ff0000")).unwrap();
    assert!(interactive.starts_with("background-color: rgb(255, 0, 0);\ncolor: white;"));
    assert!(interactive.contains("&:hover {\nbackground-color: hsl(0, 100%, 60%);"));
    assert!(interactive.contains("&:active {\nbackground-color: hsl(0, 100%, 40%);"));
}
