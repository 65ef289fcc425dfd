//! Style configurations and descriptors.
//!
//! A [`StyleDescriptor`] turns a configuration into CSS text. Configurations are plain structs whose fields are
//! all optional. Whatever the caller leaves out is taken from the descriptor's [`defaults`](StyleDescriptor::defaults),
//! field by field, before any CSS is generated.
//!
//! ```
//! use gadjet_core::prelude::*;
//! use gadjet_core::widgets::badge::{BadgeConfig, BadgeStyle};
//!
//! let custom = BadgeStyle::style(&BadgeConfig { color: Some("#c01c28".into()) });
//! assert!(custom.contains("background-color: #c01c28;"));
//!
//! // An empty configuration is the same as the defaults.
//! assert_eq!(BadgeStyle::style(&BadgeConfig::default()), BadgeStyle::style(&BadgeStyle::defaults()));
//! ```

use crate::css;

pub use gadjet_derive::StyleConfig;

/// A set of optional style options.
///
/// Usually derived with [`#[derive(StyleConfig)]`](gadjet_derive::StyleConfig). `Default` must be the empty configuration.
pub trait StyleConfig: Clone + Default {
    /// Fills every option missing from `self` with the one from `defaults`.
    fn overlay(&self, defaults: &Self) -> Self;
}

impl StyleConfig for () {
    fn overlay(&self, _: &Self) -> Self {}
}

/// Either CSS text, used as written, or a configuration to run through a descriptor.
#[derive(Clone, Debug, PartialEq)]
pub enum StyleInput<C> {
    Raw(String),
    Config(C),
}

impl<C> From<&str> for StyleInput<C> {
    fn from(css: &str) -> Self {
        StyleInput::Raw(css.to_string())
    }
}

impl<C> From<String> for StyleInput<C> {
    fn from(css: String) -> Self {
        StyleInput::Raw(css)
    }
}

impl From<()> for StyleInput<()> {
    fn from(config: ()) -> Self {
        StyleInput::Config(config)
    }
}

impl<C: StyleConfig> StyleInput<C> {
    /// The CSS text for this input, with configurations merged over `S`'s defaults.
    pub fn resolve<S: StyleDescriptor<Config = C>>(self) -> String {
        match self {
            StyleInput::Raw(css) => css,
            StyleInput::Config(config) => S::style(&config),
        }
    }
}

/// Generates the CSS of one kind of widget.
pub trait StyleDescriptor {
    type Config: StyleConfig;

    /// The published default configuration.
    fn defaults() -> Self::Config;

    /// Structural CSS that every instance needs, such as part layout and keyframes.
    ///
    /// Receives the merged configuration for the few values the structure depends on.
    fn layout(_config: &Self::Config) -> String {
        String::new()
    }

    /// CSS for the options present in `config`. Absent options contribute nothing.
    fn generate(config: &Self::Config) -> String;

    /// `config` with every missing option taken from the defaults.
    fn merged(config: &Self::Config) -> Self::Config {
        config.overlay(&Self::defaults())
    }

    /// The option CSS for `config` merged over the defaults.
    fn style(config: &Self::Config) -> String {
        Self::generate(&Self::merged(config))
    }

    /// The complete CSS of the widget: layout followed by option CSS.
    fn css(config: &Self::Config) -> String {
        let merged = Self::merged(config);
        css::join([Self::layout(&merged), Self::generate(&merged)])
    }
}

