//! CSS text generation and injection.
//!
//! Components produce CSS as plain text and hand it to a [`StyleSheet`], which flattens it into
//! ordinary rules and stores each distinct piece of text once.
//!
//! ## Nesting
//!
//! Injected text may nest rules the way preprocessors allow:
//!
//! ```css
//! el-tag {
//!   color: white;
//!   &:hover { color: black; }
//!   [el="remove"] { margin-left: 0.2em; }
//!   @media screen and (min-width: 300px) {
//!     font-size: 18px;
//!   }
//! }
//! ```
//!
//! flattens to
//!
//! ```css
//! el-tag { color: white; }
//! el-tag:hover { color: black; }
//! el-tag [el="remove"] { margin-left: 0.2em; }
//! @media screen and (min-width: 300px) { el-tag { font-size: 18px; } }
//! ```
//!
//! - `&` is replaced by the parent selector. A selector without `&` becomes a descendant of its parent.
//! - Comma lists on either level expand to every combination.
//! - `@media` and `@supports` may appear at any depth and wrap the rules inside them.
//! - Other at-rules (`@keyframes`, `@font-face`, ...) are kept verbatim and moved to the top level.
//! - Declarations outside of any rule are dropped with an error.
//!
//! Syntax errors are logged with their position and only the offending item is skipped.

pub mod mixins;
mod parser;
mod sheet;

pub use parser::flatten;
pub use sheet::{Injection, Rule, StyleSheet};

use crate::{color::ColorError, hasher::content_hash};

pub(crate) fn log_error(msg: impl std::fmt::Display, location: cssparser::SourceLocation) {
    log::error!("{msg} <injected>:{}:{}", location.line + 1, location.column);
}

/// Joins non-empty fragments with newlines.
pub fn join<I, S>(fragments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for fragment in fragments {
        let fragment = fragment.as_ref().trim();
        if fragment.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(fragment);
    }
    out
}

/// Unwraps a color-derived fragment, logging the error and producing nothing on failure.
pub fn recover(fragment: Result<String, ColorError>) -> String {
    fragment.unwrap_or_else(|err| {
        log::error!("{err}, the style fragment was skipped");
        String::new()
    })
}

/// A named `@keyframes` block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Keyframes {
    /// `animation-<hash>`, derived from the keyframe body.
    pub name: String,

    /// The complete `@keyframes <name> { ... }` rule.
    pub css: String,
}

/// Names a keyframes body after its content. Identical bodies get identical names.
pub fn keyframes(body: &str) -> Keyframes {
    let name = format!("animation-{:x}", content_hash(body.trim()));
    let css = format!("@keyframes {name} {{ {} }}", body.trim());
    Keyframes { name, css }
}

/// Wraps a block body in `selector { ... }`. Empty bodies produce nothing.
pub fn scope(selector: &str, body: &str) -> String {
    let body = body.trim();
    if body.is_empty() { String::new() } else { format!("{selector} {{\n{body}\n}}") }
}
