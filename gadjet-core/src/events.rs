//! Custom events dispatched by components.
//!
//! Events are queued on the element that dispatched them. Whoever drives the widgets (an app loop, a test)
//! drains the queue with [`Element::take_events`](crate::dom::Element::take_events) and reacts to them.

use std::borrow::Cow;
use std::fmt;

/// Payload carried by a [`CustomEvent`].
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Detail {
    #[default]
    None,

    /// A numeric value, such as the committed value of a numeric stepper.
    Number(f64),

    /// Text, such as the label of a removed tag chip.
    Text(String),
}

impl Detail {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Detail::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Detail::Text(t) => Some(t),
            _ => None,
        }
    }
}

/// A named event with a detail payload.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CustomEvent {
    pub name: Cow<'static, str>,
    pub detail: Detail,
}

impl CustomEvent {
    pub fn new(name: impl Into<Cow<'static, str>>, detail: Detail) -> Self {
        Self { name: name.into(), detail }
    }

    pub fn is(&self, name: &str) -> bool {
        self.name == name
    }
}

impl fmt::Display for CustomEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.detail {
            Detail::None => write!(f, "{}", self.name),
            Detail::Number(n) => write!(f, "{}({n})", self.name),
            Detail::Text(t) => write!(f, "{}({t:?})", self.name),
        }
    }
}

/// Event names used by the built-in widgets.
pub mod names {
    pub const CHANGE: &str = "change";
    pub const REMOVE: &str = "remove";
}
