#![no_main]

use arbitrary::Arbitrary;
use gadjet_core::prelude::Color;

#[derive(Arbitrary, Debug)]
enum Adjust {
    Lighten(f64),
    Darken(f64),
    Saturate(f64),
    Desaturate(f64),
    Rotate(f64),
}

impl Adjust {
    fn amount(&self) -> f64 {
        match self {
            Adjust::Lighten(v) | Adjust::Darken(v) | Adjust::Saturate(v) | Adjust::Desaturate(v) | Adjust::Rotate(v) => *v,
        }
    }
}

#[derive(Arbitrary, Debug)]
struct Input {
    text: String,
    adjust: Vec<Adjust>,
}

libfuzzer_sys::fuzz_target!(|input: Input| {
    let Ok(mut color) = Color::parse(&input.text) else { return };
    for adjust in input.adjust.into_iter().filter(|a| a.amount().is_finite() && a.amount().abs() < 1e6) {
        color = match adjust {
            Adjust::Lighten(r) => color.lighten(r),
            Adjust::Darken(r) => color.darken(r),
            Adjust::Saturate(r) => color.saturate(r),
            Adjust::Desaturate(r) => color.desaturate(r),
            Adjust::Rotate(d) => color.rotate(d),
        };
    }

    // Whatever comes out prints as a color that parses again.
    let printed = color.to_string();
    assert!(Color::parse(&printed).is_ok(), "{printed}");
    let _ = color.contrast_text();
});
