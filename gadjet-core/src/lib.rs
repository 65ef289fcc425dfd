#![deny(unsafe_code)]

// The derive macros name this crate by its path.
extern crate self as gadjet_core;

#[cfg(test)]
mod tests;

mod hasher;

pub mod attr;
pub mod color;
pub mod component;
pub mod css;
pub mod dom;
pub mod events;
pub mod media;
pub mod style;
pub mod timer;
pub mod widgets;

pub use keyboard_types;
pub use log;
pub use peniko;
pub use time;

/// The public API
pub mod prelude {
    #[doc(inline)]
    pub use crate::attr::Attributes;

    #[doc(inline)]
    pub use crate::color::{Color, ColorError};

    #[doc(inline)]
    pub use crate::component::{Component, ComponentError, Host, Registry};

    #[doc(inline)]
    pub use crate::css::{Injection, Rule, StyleSheet};

    #[doc(inline)]
    pub use crate::dom::Element;

    #[doc(inline)]
    pub use crate::events::{CustomEvent, Detail};

    #[doc(inline)]
    pub use crate::media::Viewport;

    #[doc(inline)]
    pub use crate::style::{StyleConfig, StyleDescriptor, StyleInput};

    pub use keyboard_types::{Key, NamedKey};
}
