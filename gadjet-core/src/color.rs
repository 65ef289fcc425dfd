//! Colors for style generators.
//!
//! A [`Color`] remembers the model it was written in. Hex, named and `rgb()` colors are `rgb`, `hsl()` input is
//! `hsl`, and every other CSS color space (`hwb()`, `lab()`, `oklch()`, `color(display-p3 ..)`, ...) is converted
//! to `rgb`. Every adjustment ([`lighten`](Color::lighten), [`rotate`](Color::rotate), ...) works in and returns
//! `hsl`. [`Display`](std::fmt::Display) prints the color in its model, rounded to one decimal place:
//!
//! ```text
//! #ff0000                 -> rgb(255, 0, 0)
//! #ff0000 lighten(0.2)    -> hsl(0, 100%, 60%)
//! rgba(0, 0, 0, 0.5)      -> rgba(0, 0, 0, 0.5)
//! hwb(120 0% 0%)          -> rgb(0, 255, 0)
//! ```

use std::{fmt, str::FromStr};

use cssparser::{Parser, ParserInput, color::PredefinedColorSpace};
use cssparser_color::{DefaultColorParser, parse_color_with};

use crate::peniko::color::{
    A98Rgb, AlphaColor, ColorSpace, DisplayP3, Hsl, Hwb, Lab, Lch, LinearSrgb, Oklab, Oklch, ProphotoRgb, Rec2020, Srgb, XyzD50, XyzD65,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Model {
    /// Red, green, blue in `0..=255`.
    Rgb,

    /// Hue in degrees, saturation and lightness in `0..=100`.
    Hsl,
}

/// Reasons a color string was rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColorError {
    /// Not a CSS color at all.
    Invalid(String),

    /// A valid CSS color that can't be adjusted, such as `currentColor`.
    Unsupported(String),
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorError::Invalid(text) => write!(f, "Invalid color `{text}`"),
            ColorError::Unsupported(text) => write!(f, "Unsupported color `{text}`, it has no fixed value to adjust"),
        }
    }
}

impl std::error::Error for ColorError {}

#[derive(Clone, Copy)]
enum Inner {
    Rgb(AlphaColor<Srgb>),
    Hsl(AlphaColor<Hsl>),
}

#[derive(Clone, Copy)]
pub struct Color(Inner);

impl Color {
    pub fn rgb(red: f64, green: f64, blue: f64) -> Self {
        let channel = |v: f64| (v.clamp(0.0, 255.0) / 255.0) as f32;
        Self(Inner::Rgb(AlphaColor::new([channel(red), channel(green), channel(blue), 1.0])))
    }

    pub fn hsl(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self::from_hsl(AlphaColor::new([
            normalize_hue(hue) as f32,
            saturation.clamp(0.0, 100.0) as f32,
            lightness.clamp(0.0, 100.0) as f32,
            1.0,
        ]))
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        let alpha = alpha.clamp(0.0, 1.0) as f32;
        match &mut self.0 {
            Inner::Rgb(c) => c.components[3] = alpha,
            Inner::Hsl(c) => c.components[3] = alpha,
        }
        self
    }

    /// Parses any CSS color with a fixed value.
    pub fn parse(text: &str) -> Result<Self, ColorError> {
        #[inline]
        fn convert<S: ColorSpace>(c1: Option<f32>, c2: Option<f32>, c3: Option<f32>, alpha: Option<f32>) -> Color {
            let c1 = c1.unwrap_or_default();
            let c2 = c2.unwrap_or_default();
            let c3 = c3.unwrap_or_default();
            let alpha = alpha.unwrap_or(1.0);

            Color::from_srgb(AlphaColor::<S>::new([c1, c2, c3, alpha]).convert())
        }

        let mut input = ParserInput::new(text);
        let mut parser = Parser::new(&mut input);

        let parsed = parse_color_with(&DefaultColorParser, &mut parser).map_err(|_| ColorError::Invalid(text.to_string()))?;
        if parser.expect_exhausted().is_err() {
            return Err(ColorError::Invalid(text.to_string()));
        }

        Ok(match parsed {
            cssparser_color::Color::CurrentColor => return Err(ColorError::Unsupported(text.to_string())),
            cssparser_color::Color::Rgba(rgba) => {
                Color::rgb(rgba.red as f64, rgba.green as f64, rgba.blue as f64).with_alpha(rgba.alpha as f64)
            }
            cssparser_color::Color::Hsl(hsl) => {
                let hue = hsl.hue.unwrap_or_default() as f64;
                let saturation = hsl.saturation.unwrap_or_default() as f64 * 100.0;
                let lightness = hsl.lightness.unwrap_or_default() as f64 * 100.0;
                Color::hsl(hue, saturation, lightness).with_alpha(hsl.alpha.unwrap_or(1.0) as f64)
            }
            cssparser_color::Color::Hwb(hwb) => convert::<Hwb>(hwb.hue, hwb.whiteness.map(|v| v * 100.0), hwb.blackness.map(|v| v * 100.0), hwb.alpha),
            cssparser_color::Color::Lab(lab) => convert::<Lab>(lab.lightness, lab.a, lab.b, lab.alpha),
            cssparser_color::Color::Lch(lch) => convert::<Lch>(lch.lightness, lch.chroma, lch.hue, lch.alpha),
            cssparser_color::Color::Oklab(oklab) => convert::<Oklab>(oklab.lightness, oklab.a, oklab.b, oklab.alpha),
            cssparser_color::Color::Oklch(oklch) => convert::<Oklch>(oklch.lightness, oklch.chroma, oklch.hue, oklch.alpha),
            cssparser_color::Color::ColorFunction(func) => match func.color_space {
                PredefinedColorSpace::Srgb => convert::<Srgb>(func.c1, func.c2, func.c3, func.alpha),
                PredefinedColorSpace::SrgbLinear => convert::<LinearSrgb>(func.c1, func.c2, func.c3, func.alpha),
                PredefinedColorSpace::DisplayP3 => convert::<DisplayP3>(func.c1, func.c2, func.c3, func.alpha),
                PredefinedColorSpace::A98Rgb => convert::<A98Rgb>(func.c1, func.c2, func.c3, func.alpha),
                PredefinedColorSpace::ProphotoRgb => convert::<ProphotoRgb>(func.c1, func.c2, func.c3, func.alpha),
                PredefinedColorSpace::Rec2020 => convert::<Rec2020>(func.c1, func.c2, func.c3, func.alpha),
                PredefinedColorSpace::XyzD50 => convert::<XyzD50>(func.c1, func.c2, func.c3, func.alpha),
                PredefinedColorSpace::XyzD65 => convert::<XyzD65>(func.c1, func.c2, func.c3, func.alpha),
            },
        })
    }

    /// Out of gamut channels are clamped.
    fn from_srgb(color: AlphaColor<Srgb>) -> Self {
        let [r, g, b, a] = color.components;
        Self(Inner::Rgb(AlphaColor::new([r.clamp(0.0, 1.0), g.clamp(0.0, 1.0), b.clamp(0.0, 1.0), a.clamp(0.0, 1.0)])))
    }

    fn from_hsl(color: AlphaColor<Hsl>) -> Self {
        let [h, s, l, a] = color.components;
        Self(Inner::Hsl(AlphaColor::new([
            normalize_hue(h as f64) as f32,
            s.clamp(0.0, 100.0),
            l.clamp(0.0, 100.0),
            a.clamp(0.0, 1.0),
        ])))
    }

    pub fn model(&self) -> Model {
        match self.0 {
            Inner::Rgb(_) => Model::Rgb,
            Inner::Hsl(_) => Model::Hsl,
        }
    }

    pub fn alpha(&self) -> f64 {
        match self.0 {
            Inner::Rgb(c) => c.components[3] as f64,
            Inner::Hsl(c) => c.components[3] as f64,
        }
    }

    /// Channel values in the current model.
    pub fn values(&self) -> [f64; 3] {
        match self.0 {
            Inner::Rgb(c) => [c.components[0], c.components[1], c.components[2]].map(|v| v as f64 * 255.0),
            Inner::Hsl(c) => [c.components[0], c.components[1], c.components[2]].map(|v| v as f64),
        }
    }

    /// The color in sRGB, for drawing.
    pub fn to_alpha_color(&self) -> AlphaColor<Srgb> {
        match self.0 {
            Inner::Rgb(c) => c,
            Inner::Hsl(c) => c.convert(),
        }
    }

    pub fn to_rgb(self) -> Self {
        match self.0 {
            Inner::Rgb(_) => self,
            Inner::Hsl(c) => Self::from_srgb(c.convert()),
        }
    }

    pub fn to_hsl(self) -> Self {
        match self.0 {
            Inner::Hsl(_) => self,
            Inner::Rgb(c) => Self::from_hsl(c.convert()),
        }
    }

    fn map_hsl(self, f: impl FnOnce([f32; 3]) -> [f32; 3]) -> Self {
        let hsl: AlphaColor<Hsl> = match self.0 {
            Inner::Hsl(c) => c,
            Inner::Rgb(c) => c.convert(),
        };
        let [h, s, l, a] = hsl.components;
        let [h, s, l] = f([h, s, l]);
        Self::from_hsl(AlphaColor::new([h, s, l, a]))
    }

    /// Raises lightness by `ratio` of its current value.
    pub fn lighten(self, ratio: f64) -> Self {
        let ratio = ratio as f32;
        self.map_hsl(|[h, s, l]| [h, s, l + l * ratio])
    }

    pub fn darken(self, ratio: f64) -> Self {
        let ratio = ratio as f32;
        self.map_hsl(|[h, s, l]| [h, s, l - l * ratio])
    }

    /// Raises saturation by `ratio` of its current value.
    pub fn saturate(self, ratio: f64) -> Self {
        let ratio = ratio as f32;
        self.map_hsl(|[h, s, l]| [h, s + s * ratio, l])
    }

    pub fn desaturate(self, ratio: f64) -> Self {
        let ratio = ratio as f32;
        self.map_hsl(|[h, s, l]| [h, s - s * ratio, l])
    }

    /// Rotates the hue by `degrees`.
    pub fn rotate(self, degrees: f64) -> Self {
        let hsl = self.to_hsl();
        let [h, s, l] = hsl.values();
        Color::hsl(h + degrees, s, l).with_alpha(hsl.alpha())
    }

    /// YIQ brightness below half.
    pub fn is_dark(&self) -> bool {
        let [r, g, b] = self.to_rgb().values();
        (r * 2126.0 + g * 7152.0 + b * 722.0) / 10000.0 < 128.0
    }

    pub fn is_light(&self) -> bool {
        !self.is_dark()
    }

    /// `white` on dark colors, `black` on light ones.
    pub fn contrast_text(&self) -> &'static str {
        if self.is_dark() { "white" } else { "black" }
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        match (self.0, other.0) {
            (Inner::Rgb(a), Inner::Rgb(b)) => a.components == b.components,
            (Inner::Hsl(a), Inner::Hsl(b)) => a.components == b.components,
            _ => false,
        }
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Color")
            .field("model", &self.model())
            .field("values", &self.values())
            .field("alpha", &self.alpha())
            .finish()
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::parse(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.values().map(round1);
        let alpha = round1(self.alpha());
        match (self.model(), alpha == 1.0) {
            (Model::Rgb, true) => write!(f, "rgb({}, {}, {})", round0(a), round0(b), round0(c)),
            (Model::Rgb, false) => write!(f, "rgba({}, {}, {}, {})", round0(a), round0(b), round0(c), Num(alpha)),
            (Model::Hsl, true) => write!(f, "hsl({}, {}%, {}%)", Num(a), Num(b), Num(c)),
            (Model::Hsl, false) => write!(f, "hsla({}, {}%, {}%, {})", Num(a), Num(b), Num(c), Num(alpha)),
        }
    }
}

/// Prints a number without a trailing `.0` and without a negative zero.
struct Num(f64);

impl fmt::Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0.0 { f.write_str("0") } else { write!(f, "{}", self.0) }
    }
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

fn round0(v: f64) -> Num {
    Num((v + 0.5).floor())
}

fn normalize_hue(hue: f64) -> f64 {
    let hue = hue % 360.0;
    if hue < 0.0 { hue + 360.0 } else { hue }
}
