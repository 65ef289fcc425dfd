use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

use crate::{
    attr::Attributes,
    component::{Component, ComponentError, Host, Registry},
    dom::Element,
    events::{Detail, names},
    style::StyleDescriptor,
};

const DATE_FORMAT: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");

pub struct InputDateStyle;

impl StyleDescriptor for InputDateStyle {
    type Config = ();

    fn defaults() {}

    fn layout(_: &()) -> String {
        r#"display: inline-flex;
        flex-wrap: wrap;
        align-items: center;
        position: relative;
        [el="icon"] {
            line-height: 0.8;
            font-size: 2em;
        }
        input[type="date"] {
            position: absolute;
            left: 0;
            top: 0;
            width: 100%;
            height: 100%;
            opacity: 0;
            cursor: pointer;
            box-sizing: border-box;
            padding: 0;
            z-index: 100;
        }
        input[type="date"]::-webkit-calendar-picker-indicator {
            position: absolute;
            left: 0;
            top: 0;
            width: 100%;
            height: 100%;
            margin: 0;
            padding: 0;
            cursor: pointer;
        }
        span[el="display"] {
            display: inline-flex;
            flex-wrap: wrap;
            justify-content: center;
            align-items: center;
            padding: 0 0.5em;
            margin-left: 0.5em;
            border: 2px solid;
            border-radius: 0.2em;
            min-width: 7rem;
            height: 2em;
            line-height: 1;
        }"#
        .to_string()
    }

    fn generate(_: &()) -> String {
        String::new()
    }
}

// ---------- InputDate ----------

/// A date picker showing the picked date as text next to a calendar icon.
///
/// The native input covers the whole widget, invisible, so any click opens the picker.
#[derive(Debug)]
pub struct InputDate {
    host: Host,
    pub icon: Element,
    pub input: Element,
    pub display: Element,
}

impl InputDate {
    /// Takes the initial date from the host's `value` attribute.
    pub fn new(registry: &mut Registry, element: Element) -> Result<Self, ComponentError> {
        let host = registry.create::<Self>(element)?;
        let initial = host.element.attributes.get("value").and_then(parse_date);

        let mut input = Element::with_attributes(Attributes::new().with("type", "date"));
        let text = initial.map(format_date).unwrap_or_default();
        input.attributes.set("value", text.clone());

        Ok(Self {
            host,
            icon: Element::part("icon"),
            input,
            display: Element::part("display").with_text(text),
        })
    }

    /// The current value, `YYYY-MM-DD` or empty.
    pub fn value_text(&self) -> &str {
        self.input.attributes.get("value").unwrap_or("")
    }

    pub fn value(&self) -> Option<Date> {
        parse_date(self.value_text())
    }

    /// Changes the value as the picker would. Anything that isn't a valid date clears it.
    ///
    /// The display mirrors the new value and `change` is emitted with it.
    pub fn set_value(&mut self, text: &str) {
        let value = match parse_date(text) {
            Some(date) => format_date(date),
            None => {
                if !text.is_empty() {
                    log::debug!("Cleared invalid date `{text}`");
                }
                String::new()
            }
        };

        self.input.attributes.set("value", value.clone());
        self.display.text = value.clone();
        self.notify(names::CHANGE, Detail::Text(value));
    }

    pub fn set_date(&mut self, date: Date) {
        self.set_value(&format_date(date));
    }
}

impl Component for InputDate {
    type Style = InputDateStyle;
    const NAME: &'static str = "InputDate";

    fn host(&self) -> &Host {
        &self.host
    }

    fn host_mut(&mut self) -> &mut Host {
        &mut self.host
    }
}

fn parse_date(text: &str) -> Option<Date> {
    Date::parse(text.trim(), DATE_FORMAT).ok()
}

fn format_date(date: Date) -> String {
    date.format(DATE_FORMAT).unwrap_or_default()
}
