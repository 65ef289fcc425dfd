use std::{
    collections::HashSet,
    fmt,
    sync::{Arc, OnceLock},
};

use parking_lot::RwLock;

use crate::{
    css::flatten,
    hasher::{IdentityBuildHasher, content_hash},
};

// Stored in an Arc so every handle, including the global one, sees the same rules.
static STYLE_SHEET: OnceLock<StyleSheet> = OnceLock::new();

/// A flattened CSS rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Rule {
    /// `selectors { declarations }`, wrapped in the `@media`/`@supports` conditions that enclosed it, outermost first.
    Style {
        conditions: Vec<String>,
        selectors: Vec<String>,
        declarations: Vec<(String, String)>,
    },

    /// An at-rule kept as written, such as `@keyframes` or `@font-face`.
    Verbatim { conditions: Vec<String>, text: String },
}

impl Rule {
    pub fn conditions(&self) -> &[String] {
        match self {
            Rule::Style { conditions, .. } | Rule::Verbatim { conditions, .. } => conditions,
        }
    }

    /// The selector list, or an empty slice for verbatim at-rules.
    pub fn selectors(&self) -> &[String] {
        match self {
            Rule::Style { selectors, .. } => selectors,
            Rule::Verbatim { .. } => &[],
        }
    }

    /// The value of the last declaration of `property`.
    pub fn get(&self, property: &str) -> Option<&str> {
        match self {
            Rule::Style { declarations, .. } => declarations.iter().rev().find(|(name, _)| name == property).map(|(_, value)| value.as_str()),
            Rule::Verbatim { .. } => None,
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for condition in self.conditions() {
            write!(f, "{condition} {{ ")?;
        }

        match self {
            Rule::Style { selectors, declarations, .. } => {
                write!(f, "{} {{", selectors.join(", "))?;
                for (name, value) in declarations {
                    write!(f, " {name}: {value};")?;
                }
                f.write_str(" }")?;
            }
            Rule::Verbatim { text, .. } => f.write_str(text)?,
        }

        for _ in self.conditions() {
            f.write_str(" }")?;
        }
        Ok(())
    }
}

/// What [`StyleSheet::inject`] did with a piece of CSS.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Injection {
    /// New content. `rules` flattened rules were appended.
    Inserted { hash: u64, rules: usize },

    /// Identical content was injected before, nothing changed.
    Duplicate { hash: u64 },

    /// The text held no rules.
    Empty,
}

impl Injection {
    pub fn is_inserted(&self) -> bool {
        matches!(self, Injection::Inserted { .. })
    }
}

#[derive(Default)]
struct SheetInner {
    hashes: HashSet<u64, IdentityBuildHasher>,
    rules: Vec<Rule>,
}

/// An append-only style sheet that stores each distinct block of CSS once.
///
/// Content is keyed by a hash of its flattened form, so the same rules injected with different
/// whitespace or from different components are only stored the first time.
/// Handles are cheap to clone and share the same rules.
#[derive(Clone, Default)]
pub struct StyleSheet {
    inner: Arc<RwLock<SheetInner>>,
}

impl fmt::Debug for StyleSheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.read();
        f.debug_struct("StyleSheet").field("blocks", &inner.hashes.len()).field("rules", &inner.rules.len()).finish()
    }
}

impl StyleSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide style sheet.
    pub fn global() -> &'static StyleSheet {
        STYLE_SHEET.get_or_init(StyleSheet::new)
    }

    /// Initialize the global style sheet, if it isn't already.
    pub fn set_global(sheet: StyleSheet) -> bool {
        STYLE_SHEET.set(sheet).is_ok()
    }

    /// Flattens `css` and appends its rules, unless identical content is already present.
    pub fn inject(&self, css: &str) -> Injection {
        let rules = flatten(css);
        if rules.is_empty() {
            return Injection::Empty;
        }

        let hash = content_hash(&serialize(&rules));
        let mut inner = self.inner.write();
        if !inner.hashes.insert(hash) {
            log::trace!("Skipped duplicate style block {hash:016x}");
            return Injection::Duplicate { hash };
        }

        let count = rules.len();
        inner.rules.extend(rules);
        log::debug!("Injected style block {hash:016x} ({count} rules)");
        Injection::Inserted { hash, rules: count }
    }

    /// Whether `css` was injected before.
    pub fn contains(&self, css: &str) -> bool {
        let rules = flatten(css);
        !rules.is_empty() && self.inner.read().hashes.contains(&content_hash(&serialize(&rules)))
    }

    /// A snapshot of every stored rule, in insertion order.
    pub fn rules(&self) -> Vec<Rule> {
        self.inner.read().rules.clone()
    }

    /// Rules whose selector list contains `selector` exactly.
    pub fn rules_for(&self, selector: &str) -> Vec<Rule> {
        self.inner.read().rules.iter().filter(|rule| rule.selectors().iter().any(|s| s == selector)).cloned().collect()
    }

    /// Number of distinct blocks injected.
    pub fn len(&self) -> usize {
        self.inner.read().hashes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().hashes.is_empty()
    }

    pub fn rule_count(&self) -> usize {
        self.inner.read().rules.len()
    }

    /// Serializes every stored rule, one per line.
    pub fn to_css(&self) -> String {
        serialize(&self.inner.read().rules)
    }
}

fn serialize(rules: &[Rule]) -> String {
    let mut out = String::new();
    for rule in rules {
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(&rule.to_string());
    }
    out
}
