//! Numeric steppers: a number field between `-` and `+` buttons that repeat while held.
//!
//! ```text
//!  press ──► step ──► Stepping ──(threshold)──► step ──► repeating ──(interval)──► step ...
//!                        │                                   │
//!                        └──────────── release/leave ────────┘──► Idle ──(delay)──► change
//! ```
//!
//! A single press steps once. Holding past `stepIntervalThreshold` steps again and then once every `stepInterval`.
//! `change` is debounced by `stepChangeDelay` after release and only fires if the value differs from the last one reported.

use std::marker::PhantomData;

use crate::{
    attr::Attributes,
    component::{Component, ComponentError, Host, Registry},
    css,
    dom::Element,
    events::{Detail, names},
    style::{StyleConfig, StyleDescriptor},
    timer::{TimerId, Timers},
    widgets::{
        button::{ButtonConfig, ButtonStyle},
        button_square::ButtonSquareStyle,
        input::InputStyle,
    },
};

pub const STEP_INTERVAL_THRESHOLD: u64 = 700;
pub const STEP_INTERVAL: u64 = 100;
pub const STEP_CHANGE_DELAY: u64 = 1000;

#[derive(Clone, Debug, Default, PartialEq, StyleConfig)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(rename_all = "camelCase", default))]
pub struct InputNumberConfig {
    /// Color of the step buttons.
    pub color: Option<String>,
}

impl InputNumberConfig {
    fn as_button(&self) -> ButtonConfig {
        ButtonConfig {
            color: self.color.clone(),
            border_radius: None,
        }
    }
}

pub struct InputNumberStyle;

impl StyleDescriptor for InputNumberStyle {
    type Config = InputNumberConfig;

    fn defaults() -> InputNumberConfig {
        InputNumberConfig { color: Some("blue".into()) }
    }

    fn layout(config: &InputNumberConfig) -> String {
        let button = ButtonSquareStyle::css(&config.as_button());
        format!(
            r#"display: inline-flex;
            height: 2em;
            min-width: 7em;
            input[type="number"] {{
                {input}
                &::-webkit-inner-spin-button {{ -webkit-appearance: none; }}
                -moz-appearance: textfield;
                text-align: center;
                width: 4em;
                border-radius: 0.2em 0 0 0.2em;
            }}
            button[el="down"] {{
                {button}
                border-radius: 0;
                width: 2em;
            }}
            button[el="up"] {{
                {button}
                border-radius: 0 4px 4px 0;
                width: 2em;
            }}"#,
            input = InputStyle::css(&()),
        )
    }

    fn generate(config: &InputNumberConfig) -> String {
        if config.color.is_none() {
            return String::new();
        }
        // Colors only, the radius comes from the layout.
        let button = ButtonStyle::generate(&config.as_button());
        css::join([css::scope(r#"button[el="down"]"#, &button), css::scope(r#"button[el="up"]"#, &button)])
    }
}

/// The stepper with the field in the middle: `- [ 3 ] +`.
pub struct InputNumberCenterStyle;

impl StyleDescriptor for InputNumberCenterStyle {
    type Config = InputNumberConfig;

    fn defaults() -> InputNumberConfig {
        InputNumberStyle::defaults()
    }

    fn layout(config: &InputNumberConfig) -> String {
        css::join([
            InputNumberStyle::css(config).as_str(),
            r#"input[type="number"] { border-radius: 0; }
            button[el="up"] { z-index: 1; }
            button[el="down"] { border-radius: 0.2em 0 0 0.2em; z-index: 1; }"#,
        ])
    }

    fn generate(config: &InputNumberConfig) -> String {
        InputNumberStyle::generate(config)
    }
}

/// Where the field sits relative to the buttons.
pub trait StepperLayout: 'static {
    type Style: StyleDescriptor<Config = InputNumberConfig>;
    const NAME: &'static str;
}

/// `[ 3 ] - +`
#[derive(Debug)]
pub struct Inline;

/// `- [ 3 ] +`
#[derive(Debug)]
pub struct Centered;

impl StepperLayout for Inline {
    type Style = InputNumberStyle;
    const NAME: &'static str = "InputNumber";
}

impl StepperLayout for Centered {
    type Style = InputNumberCenterStyle;
    const NAME: &'static str = "InputNumberCenter";
}

pub type InputNumber = NumberInput<Inline>;
pub type InputNumberCenter = NumberInput<Centered>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepperState {
    Idle,
    /// A step button is held. `repeating` once the threshold has passed.
    Stepping { direction: Direction, repeating: bool },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Task {
    Threshold,
    Repeat,
    Notify,
}

// ---------- NumberInput ----------

#[derive(Debug)]
pub struct NumberInput<L: StepperLayout> {
    host: Host,
    pub input: Element,
    pub down: Element,
    pub up: Element,

    state: StepperState,
    timers: Timers<Task>,
    threshold: Option<TimerId>,
    interval: Option<TimerId>,
    debounce: Option<TimerId>,

    step_interval_threshold: u64,
    step_interval: u64,
    step_change_delay: u64,
    step: f64,
    min: Option<f64>,
    max: Option<f64>,

    /// Value at the last `change`, or the initial value.
    reported: String,
    layout: PhantomData<L>,
}

impl<L: StepperLayout> NumberInput<L> {
    /// Reads the timings, `value`, `step`, `min` and `max` from the host's attributes.
    pub fn new(registry: &mut Registry, element: Element) -> Result<Self, ComponentError> {
        let host = registry.create::<Self>(element)?;
        let attrs = &host.element.attributes;

        let millis = |name: &str, default: u64| attrs.int_or(name, default as i64).max(0) as u64;
        let finite = |name: &str| Some(attrs.float(name)).filter(|v| v.is_finite());

        let step_interval_threshold = millis("stepIntervalThreshold", STEP_INTERVAL_THRESHOLD);
        let step_interval = millis("stepInterval", STEP_INTERVAL);
        let step_change_delay = millis("stepChangeDelay", STEP_CHANGE_DELAY);
        let step = finite("step").filter(|s| *s > 0.0).unwrap_or(1.0);
        let min = finite("min");
        let max = finite("max");
        let initial = finite("value");

        let mut this = Self {
            input: Element::with_attributes(Attributes::new().with("type", "number")),
            down: Element::part("down").with_text("-"),
            up: Element::part("up").with_text("+"),
            host,
            state: StepperState::Idle,
            timers: Timers::new(),
            threshold: None,
            interval: None,
            debounce: None,
            step_interval_threshold,
            step_interval,
            step_change_delay,
            step,
            min,
            max,
            reported: String::new(),
            layout: PhantomData,
        };
        if let Some(value) = initial {
            this.write(value);
        }
        this.reported = this.value_text().to_string();
        Ok(this)
    }

    pub fn state(&self) -> StepperState {
        self.state
    }

    /// Milliseconds of virtual time elapsed.
    pub fn now(&self) -> u64 {
        self.timers.now()
    }

    /// The field's text.
    pub fn value_text(&self) -> &str {
        self.input.attributes.get("value").unwrap_or("")
    }

    /// The field's value, `NaN` if it's empty.
    pub fn value(&self) -> f64 {
        crate::attr::parse_float(self.value_text())
    }

    /// Pointer down on a step button.
    pub fn press(&mut self, direction: Direction) {
        self.stop_stepping();
        if let Some(id) = self.debounce.take() {
            self.timers.clear(id);
        }

        self.step_once(direction);
        self.threshold = Some(self.timers.set_timeout(self.step_interval_threshold, Task::Threshold));
        self.state = StepperState::Stepping { direction, repeating: false };
    }

    /// Pointer up on the held button.
    pub fn release(&mut self) {
        if self.state == StepperState::Idle {
            return;
        }
        self.stop_stepping();

        if let Some(id) = self.debounce.take() {
            self.timers.clear(id);
        }
        if self.value_text() != self.reported {
            self.debounce = Some(self.timers.set_timeout(self.step_change_delay, Task::Notify));
        }
    }

    /// The pointer left the held button. Same as releasing it.
    pub fn leave(&mut self) {
        self.release();
    }

    /// A value typed into the field. Reported with `change` right away.
    pub fn set_value(&mut self, text: &str) {
        if let Some(id) = self.debounce.take() {
            self.timers.clear(id);
        }
        let value = crate::attr::parse_float(text);
        if value.is_nan() {
            self.input.attributes.set("value", "");
        } else {
            self.write(value);
        }
        self.report();
    }

    /// Moves virtual time forward by `millis`, running every timer that comes due.
    pub fn advance(&mut self, millis: u64) {
        let until = self.timers.now() + millis;
        while let Some((_, task)) = self.timers.pop_due(until) {
            self.run(task);
        }
    }

    fn run(&mut self, task: Task) {
        match task {
            Task::Threshold => {
                self.threshold = None;
                if let StepperState::Stepping { direction, .. } = self.state {
                    self.step_once(direction);
                    self.interval = Some(self.timers.set_interval(self.step_interval, Task::Repeat));
                    self.state = StepperState::Stepping { direction, repeating: true };
                }
            }
            Task::Repeat => {
                if let StepperState::Stepping { direction, .. } = self.state {
                    self.step_once(direction);
                }
            }
            Task::Notify => {
                self.debounce = None;
                if self.value_text() != self.reported {
                    self.report();
                }
            }
        }
    }

    fn stop_stepping(&mut self) {
        if let Some(id) = self.threshold.take() {
            self.timers.clear(id);
        }
        if let Some(id) = self.interval.take() {
            self.timers.clear(id);
        }
        self.state = StepperState::Idle;
    }

    fn step_once(&mut self, direction: Direction) {
        let current = self.value();
        let current = if current.is_nan() { 0.0 } else { current };
        let next = match direction {
            Direction::Up => current + self.step,
            Direction::Down => current - self.step,
        };
        self.write(next);
    }

    fn write(&mut self, value: f64) {
        let mut value = value;
        if let Some(min) = self.min {
            value = value.max(min);
        }
        if let Some(max) = self.max {
            value = value.min(max);
        }
        // Drops binary noise such as 0.30000000000000004.
        let value = (value * 1e10).round() / 1e10;
        let text = if value == 0.0 { "0".to_string() } else { value.to_string() };
        self.input.attributes.set("value", text);
    }

    fn report(&mut self) {
        self.reported = self.value_text().to_string();
        let value = self.value();
        self.notify(names::CHANGE, Detail::Number(value));
    }
}

impl<L: StepperLayout> Component for NumberInput<L> {
    type Style = L::Style;
    const NAME: &'static str = L::NAME;

    fn host(&self) -> &Host {
        &self.host
    }

    fn host_mut(&mut self) -> &mut Host {
        &mut self.host
    }
}
