//! Configurable-style widgets, and the shell of the documentation site built with them.
//!
//! The widgets live in [`gadjet_core`]. This crate re-exports them and adds [`site`], the palette, components and
//! global CSS of the documentation pages.
//!
//! ```
//! use gadjet::prelude::*;
//!
//! let mut registry = Registry::with_sheet(StyleSheet::new());
//! gadjet::site::define_components(&mut registry).unwrap();
//! assert!(registry.is_defined::<gadjet::site::CodeTitle>());
//! ```

#![deny(unsafe_code)]


pub mod site;

pub use gadjet_core::{css, timer};

/// Every built-in widget
pub mod widgets {
    pub use gadjet_core::widgets::*;
}

/// The public API
pub mod prelude {
    pub use gadjet_core::prelude::*;
}
