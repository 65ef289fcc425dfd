pub use crate::prelude::*;
pub use crate::widgets::*;

pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A registry over a fresh sheet, with reproducible instance tokens.
pub(crate) fn registry() -> Registry {
    init_logger();
    Registry::with_sheet(StyleSheet::new()).seeded(7)
}

/// Names of the events queued on `element`, draining them.
pub(crate) fn event_names(element: &mut Element) -> Vec<String> {
    element.take_events().into_iter().map(|event| event.name.into_owned()).collect()
}

/// A style rule built by hand, for comparing against flattened output.
pub(crate) fn style_rule(conditions: &[&str], selectors: &[&str], declarations: &[(&str, &str)]) -> Rule {
    Rule::Style {
        conditions: conditions.iter().map(|c| c.to_string()).collect(),
        selectors: selectors.iter().map(|s| s.to_string()).collect(),
        declarations: declarations.iter().map(|(n, v)| (n.to_string(), v.to_string())).collect(),
    }
}

/// Asserts that the last rule for `selector` in `sheet` declares `property: value`.
macro_rules! assert_declares {
    ($sheet:expr, $selector:expr, $property:expr, $value:expr) => {{
        let rules = $sheet.rules_for($selector);
        let found = rules.iter().rev().find_map(|rule| rule.get($property));
        assert_eq!(found, Some($value), "`{}` in rules for `{}`", $property, $selector);
    }};
}
