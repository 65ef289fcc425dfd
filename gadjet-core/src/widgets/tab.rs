use crate::{
    component::{Component, ComponentError, Host, Registry},
    css::{
        self,
        mixins::{self, LIFT_SHADOW_COLOR},
    },
    dom::Element,
    style::{StyleConfig, StyleDescriptor},
};

#[derive(Clone, Debug, Default, PartialEq, StyleConfig)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(rename_all = "camelCase", default))]
pub struct TabConfig {
    pub tab_color: Option<String>,
    pub hover_color: Option<String>,
    pub active_color: Option<String>,
    pub separator_line_color: Option<String>,
    pub separator_line_width: Option<String>,
}

pub struct TabStyle;

impl StyleDescriptor for TabStyle {
    type Config = TabConfig;

    fn defaults() -> TabConfig {
        TabConfig {
            tab_color: Some("#ccc".into()),
            hover_color: Some("#ddd".into()),
            active_color: Some("blue".into()),
            separator_line_color: Some("black".into()),
            separator_line_width: Some("1px".into()),
        }
    }

    fn layout(_: &TabConfig) -> String {
        format!(
            "display: inline-flex;
            flex-wrap: wrap;
            overflow: hidden;
            border-radius: 4px;
            > div {{
                display: flex;
                flex-wrap: wrap;
                justify-content: center;
                align-items: center;
                cursor: pointer;
                padding: 0.25em 0.5em 0.25em 0.5em;
                line-height: 1;
                height: 1.8em;
            }}
            > div:not(:last-of-type) {{ border-right-style: solid; }}
            > div.active {{ {lift} }}",
            lift = mixins::lift(2, LIFT_SHADOW_COLOR),
        )
    }

    fn generate(config: &TabConfig) -> String {
        let nested_bg = |selector: Option<&str>, color: &Option<String>| {
            let Some(color) = color else { return String::new() };
            let bg = css::recover(mixins::bg_color(color));
            match selector {
                Some(selector) => css::scope(selector, &bg),
                None => bg,
            }
        };
        let separator = |property: &str, value: &Option<String>| match value {
            Some(value) => format!("border-{property}: {value};\n> div:not(:last-of-type) {{ border-right-{property}: {value}; }}"),
            None => String::new(),
        };
        css::join([
            nested_bg(None, &config.tab_color),
            nested_bg(Some("> div:hover"), &config.hover_color),
            nested_bg(Some("> div.active"), &config.active_color),
            separator("color", &config.separator_line_color),
            separator("width", &config.separator_line_width),
        ])
    }
}

// ---------- Tab ----------

/// A row of tabs, one of them active.
#[derive(Debug)]
pub struct Tab {
    host: Host,
    pub tabs: Vec<Element>,
    active: Option<usize>,
}

impl Tab {
    /// The last tab created with the `active` class starts active.
    pub fn new(registry: &mut Registry, element: Element, tabs: Vec<Element>) -> Result<Self, ComponentError> {
        let host = registry.create::<Self>(element)?;
        let active = tabs.iter().rposition(|tab| tab.classes.contains("active"));
        Ok(Self { host, tabs, active })
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// Click on the tab at `index`. Returns `false` for unknown indexes.
    pub fn click(&mut self, index: usize) -> bool {
        if index >= self.tabs.len() {
            return false;
        }
        if let Some(previous) = self.active.and_then(|idx| self.tabs.get_mut(idx)) {
            previous.classes.remove("active");
        }
        self.tabs[index].classes.add("active");
        self.active = Some(index);
        true
    }
}

impl Component for Tab {
    type Style = TabStyle;
    const NAME: &'static str = "Tab";

    fn host(&self) -> &Host {
        &self.host
    }

    fn host_mut(&mut self) -> &mut Host {
        &mut self.host
    }
}
