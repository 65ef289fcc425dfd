//! A minimal in-memory element model.
//!
//! Widgets own their host element and any parts they render (`[el="content"]`, `[el="overlay"]`, ...) as [`Element`]s.
//! Only what the widgets observe or mutate is modeled: the class list, attributes, inline style, text, and
//! the queue of dispatched events.

use smallvec::SmallVec;

use crate::{attr::Attributes, events::CustomEvent};

/// The `class` attribute of an element, in insertion order without duplicates.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassList(SmallVec<[String; 4]>);

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` if the class was already present.
    pub fn add(&mut self, class: &str) -> bool {
        if self.contains(class) {
            return false;
        }
        self.0.push(class.to_string());
        true
    }

    /// Returns `false` if the class wasn't present.
    pub fn remove(&mut self, class: &str) -> bool {
        let Some(idx) = self.0.iter().position(|c| c == class) else {
            return false;
        };
        self.0.remove(idx);
        true
    }

    pub fn contains(&self, class: &str) -> bool {
        self.0.iter().any(|c| c == class)
    }

    /// Adds the class if missing, removes it otherwise. Returns whether it's present afterwards.
    pub fn toggle(&mut self, class: &str) -> bool {
        if self.remove(class) {
            false
        } else {
            self.0.push(class.to_string());
            true
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for ClassList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, class) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(class)?;
        }
        Ok(())
    }
}

/// Inline `style="..."` declarations.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InlineStyle(SmallVec<[(String, String); 2]>);

impl InlineStyle {
    pub fn get(&self, property: &str) -> Option<&str> {
        self.0.iter().find(|(p, _)| p == property).map(|(_, v)| v.as_str())
    }

    pub fn set(&mut self, property: &str, value: impl Into<String>) {
        let value = value.into();
        match self.0.iter_mut().find(|(p, _)| p == property) {
            Some(entry) => entry.1 = value,
            None => self.0.push((property.to_string(), value)),
        }
    }

    pub fn remove(&mut self, property: &str) -> Option<String> {
        let idx = self.0.iter().position(|(p, _)| p == property)?;
        Some(self.0.remove(idx).1)
    }
}

/// An element: the host of a component or one of its parts.
#[derive(Clone, Debug, Default)]
pub struct Element {
    pub classes: ClassList,
    pub attributes: Attributes,
    pub style: InlineStyle,
    pub text: String,
    events: Vec<CustomEvent>,
}

impl Element {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_attributes(attributes: Attributes) -> Self {
        Self { attributes, ..Default::default() }
    }

    /// A part element, identified by its `el` attribute.
    pub fn part(name: &str) -> Self {
        Self::with_attributes(Attributes::new().with("el", name))
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.add(class);
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Queues an event on this element.
    pub fn dispatch(&mut self, event: CustomEvent) {
        log::trace!("dispatch {event}");
        self.events.push(event);
    }

    /// Events dispatched since the last [`take_events`](Self::take_events).
    pub fn events(&self) -> &[CustomEvent] {
        &self.events
    }

    pub fn take_events(&mut self) -> Vec<CustomEvent> {
        std::mem::take(&mut self.events)
    }
}
