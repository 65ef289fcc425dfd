//! `(min-width: <length>)` media queries against a simulated viewport.

use cssparser::{Parser, ParserInput, Token, match_ignore_ascii_case};

/// Pixels per `em`/`rem` when resolving query lengths.
pub const ROOT_FONT_SIZE: f32 = 16.0;

/// The size of the area the widgets are laid out in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self { width: 1024.0, height: 768.0 }
    }
}

/// A `min-width` query. A query that failed to parse never matches, like `not all`.
#[derive(Clone, Debug, PartialEq)]
pub struct MediaQuery {
    source: String,
    min_width: Option<f32>,
}

impl MediaQuery {
    /// Builds `(min-width: <length>)` from a length such as `1000px` or `40em`.
    ///
    /// Invalid lengths are logged and produce a query that never matches.
    pub fn min_width(length: &str) -> Self {
        let source = format!("(min-width: {length})");
        let mut input = ParserInput::new(length);
        let mut parser = Parser::new(&mut input);

        let min_width = match parse_length(&mut parser) {
            Some(px) if parser.expect_exhausted().is_ok() => Some(px),
            _ => {
                log::error!("Invalid media query length `{length}`, the query will never match");
                None
            }
        };

        Self { source, min_width }
    }

    pub fn matches(&self, viewport: &Viewport) -> bool {
        self.min_width.is_some_and(|px| viewport.width >= px)
    }

    /// The threshold in pixels, if the query is valid.
    pub fn threshold(&self) -> Option<f32> {
        self.min_width
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }
}

fn parse_length(parser: &mut Parser<'_, '_>) -> Option<f32> {
    match parser.next().ok()? {
        Token::Dimension { value, unit, .. } => {
            let value = *value;
            match_ignore_ascii_case! { unit,
                "px" => Some(value),
                "em" => Some(value * ROOT_FONT_SIZE),
                "rem" => Some(value * ROOT_FONT_SIZE),
                _ => None,
            }
        }
        Token::Number { value, .. } if *value == 0.0 => Some(0.0),
        _ => None,
    }
}
