//! The component base: tag binding, style injection and instance identity.
//!
//! A [`Component`] is bound to a tag name once through a [`Registry`], which injects its base CSS into the
//! registry's [`StyleSheet`]. Instances are created by the registry too, which hands each one a [`Host`]:
//! the element plus a short random class token (`adt-1f3a`) that scopes per-instance styles.
//!
//! ```
//! use gadjet_core::prelude::*;
//! use gadjet_core::widgets::badge::{Badge, BadgeConfig};
//!
//! let mut registry = Registry::with_sheet(StyleSheet::new());
//! Badge::define(&mut registry, "el-badge").unwrap();
//!
//! let mut badge = Badge::new(&mut registry, Element::new()).unwrap();
//! badge.add_style(&registry, BadgeConfig { color: Some("red".into()) }).unwrap();
//!
//! let token = badge.host().token().to_string();
//! assert!(badge.host().element.classes.contains(&token));
//! assert!(!registry.sheet().rules_for(&format!("el-badge.{token}")).is_empty());
//! ```

use std::{
    any::TypeId,
    collections::{HashMap, HashSet},
    fmt,
    sync::Arc,
};

use rand::{Rng, SeedableRng, rngs::StdRng};
use slotmap::{SlotMap, new_key_type};

use crate::{
    css::{self, Injection, StyleSheet},
    dom::Element,
    events::{CustomEvent, Detail},
    style::{StyleDescriptor, StyleInput},
};

/// Instance tokens are `adt-` followed by a hex number below this.
pub const MAX_INSTANCE_ID: u32 = 16u32.pow(4) - 1;

new_key_type! {
    /// Key of a live instance in its type's arena.
    pub struct InstanceKey;
}

/// The configuration type of a component's style descriptor.
pub type ConfigOf<C> = <<C as Component>::Style as StyleDescriptor>::Config;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ComponentError {
    /// The component was used before being defined.
    Unbound { component: &'static str },

    /// The component is already bound to `tag`.
    AlreadyDefined { component: &'static str, tag: String },

    /// `tag` is already bound to `owner`.
    TagTaken { tag: String, owner: &'static str },

    /// Custom tag names need a `-`, and no uppercase letters.
    InvalidTag { tag: String },

    /// Every instance token is in use.
    IdsExhausted { component: &'static str },
}

impl fmt::Display for ComponentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComponentError::Unbound { component } => write!(f, "{component} has not been defined"),
            ComponentError::AlreadyDefined { component, tag } => write!(f, "{component} is already defined as `{tag}`"),
            ComponentError::TagTaken { tag, owner } => write!(f, "`{tag}` is already defined by {owner}"),
            ComponentError::InvalidTag { tag } => write!(f, "`{tag}` is not a valid custom element name"),
            ComponentError::IdsExhausted { component } => write!(f, "No instance ids left for {component}"),
        }
    }
}

impl std::error::Error for ComponentError {}

/// A widget kind that can be bound to a tag and instantiated.
pub trait Component: Sized + 'static {
    type Style: StyleDescriptor;

    /// Used in diagnostics.
    const NAME: &'static str;

    /// The native element this component styles, if any. Binding to it skips custom element validation.
    const NATIVE_TAG: Option<&'static str> = None;

    fn host(&self) -> &Host;
    fn host_mut(&mut self) -> &mut Host;

    /// Binds the component to `tag` and injects its base CSS.
    fn define(registry: &mut Registry, tag: &str) -> Result<(), ComponentError> {
        registry.bind::<Self>(tag)?;
        Self::init_style(registry)
    }

    /// Injects `tag { all: unset; }` followed by the default CSS under `tag`.
    fn init_style(registry: &Registry) -> Result<(), ComponentError> {
        let tag = registry.tag_of::<Self>()?;
        let sheet = registry.sheet();
        sheet.inject(&css::scope(&tag, "all: unset;"));
        sheet.inject(&css::scope(&tag, &Self::Style::css(&Default::default())));
        Ok(())
    }

    /// Injects a class-wide override under the tag.
    fn tag_style(registry: &Registry, style: impl Into<StyleInput<ConfigOf<Self>>>) -> Result<Injection, ComponentError> {
        let tag = registry.tag_of::<Self>()?;
        let css = style.into().resolve::<Self::Style>();
        Ok(registry.sheet().inject(&css::scope(&tag, &css)))
    }

    /// Injects an override under `tag.class`.
    fn class_style(registry: &Registry, class: &str, style: impl Into<StyleInput<ConfigOf<Self>>>) -> Result<Injection, ComponentError> {
        let tag = registry.tag_of::<Self>()?;
        let css = style.into().resolve::<Self::Style>();
        Ok(registry.sheet().inject(&css::scope(&format!("{tag}.{class}"), &css)))
    }

    /// Styles this instance only: adds the instance token to the host's classes and injects under `tag.token`.
    fn add_style(&mut self, registry: &Registry, style: impl Into<StyleInput<ConfigOf<Self>>>) -> Result<Injection, ComponentError> {
        let css = style.into().resolve::<Self::Style>();
        let host = self.host_mut();
        host.element.classes.add(&host.token);
        let selector = host.selector();
        Ok(registry.sheet().inject(&css::scope(&selector, &css)))
    }

    /// Dispatches a custom event from the host element.
    fn notify(&mut self, name: &'static str, detail: Detail) {
        self.host_mut().element.dispatch(CustomEvent::new(name, detail));
    }
}

/// One live instance: its identity and its element.
#[derive(Debug)]
pub struct Host {
    key: InstanceKey,
    type_id: TypeId,
    component: &'static str,
    tag: Arc<str>,
    token: Arc<str>,
    pub element: Element,
}

impl Host {
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The instance class, `adt-<hex>`.
    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn component(&self) -> &'static str {
        self.component
    }

    /// `tag.token`, the selector of instance styles.
    pub fn selector(&self) -> String {
        format!("{}.{}", self.tag, self.token)
    }
}

#[derive(Debug)]
struct Binding {
    tag: Arc<str>,
    name: &'static str,
}

#[derive(Debug, Default)]
struct Arena {
    tokens: SlotMap<InstanceKey, Arc<str>>,
    live: HashSet<Arc<str>>,
}

/// Tag bindings and instance arenas, plus the style sheet everything is injected into.
pub struct Registry {
    sheet: StyleSheet,
    bound: HashMap<TypeId, Binding>,
    tags: HashMap<Arc<str>, TypeId>,
    arenas: HashMap<TypeId, Arena>,
    rng: StdRng,
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry").field("sheet", &self.sheet).field("bound", &self.bound).finish_non_exhaustive()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// A registry injecting into [`StyleSheet::global`].
    pub fn new() -> Self {
        Self::with_sheet(StyleSheet::global().clone())
    }

    pub fn with_sheet(sheet: StyleSheet) -> Self {
        Self {
            sheet,
            bound: HashMap::new(),
            tags: HashMap::new(),
            arenas: HashMap::new(),
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reseeds the instance token generator, for reproducible tokens.
    pub fn seeded(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn sheet(&self) -> &StyleSheet {
        &self.sheet
    }

    /// Same as `C::define(self, tag)`.
    pub fn define<C: Component>(&mut self, tag: &str) -> Result<(), ComponentError> {
        C::define(self, tag)
    }

    /// Binds `C` to `tag` without injecting anything. Conflicts are logged and leave existing bindings alone.
    pub fn bind<C: Component>(&mut self, tag: &str) -> Result<(), ComponentError> {
        let result = self.try_bind::<C>(tag);
        if let Err(err) = &result {
            log::error!("Failed to define `{tag}`: {err}");
        }
        result
    }

    fn try_bind<C: Component>(&mut self, tag: &str) -> Result<(), ComponentError> {
        let type_id = TypeId::of::<C>();
        if let Some(binding) = self.bound.get(&type_id) {
            return Err(ComponentError::AlreadyDefined {
                component: C::NAME,
                tag: binding.tag.to_string(),
            });
        }

        let native = C::NATIVE_TAG.is_some_and(|native| native.eq_ignore_ascii_case(tag));
        let tag: Arc<str> = if native { Arc::from(tag.to_ascii_lowercase()) } else { Arc::from(tag) };

        if !native {
            if !is_custom_tag(&tag) {
                return Err(ComponentError::InvalidTag { tag: tag.to_string() });
            }
            if let Some(owner) = self.tags.get(&tag).and_then(|id| self.bound.get(id)) {
                return Err(ComponentError::TagTaken {
                    tag: tag.to_string(),
                    owner: owner.name,
                });
            }
            self.tags.insert(tag.clone(), type_id);
        }

        log::debug!("Defined {} as `{tag}`", C::NAME);
        self.bound.insert(type_id, Binding { tag, name: C::NAME });
        Ok(())
    }

    pub fn is_defined<C: Component>(&self) -> bool {
        self.bound.contains_key(&TypeId::of::<C>())
    }

    /// The tag `C` is bound to.
    pub fn tag_of<C: Component>(&self) -> Result<Arc<str>, ComponentError> {
        self.bound
            .get(&TypeId::of::<C>())
            .map(|binding| binding.tag.clone())
            .ok_or(ComponentError::Unbound { component: C::NAME })
    }

    /// Creates the host of a new `C` instance, with a fresh instance token.
    pub fn create<C: Component>(&mut self, element: Element) -> Result<Host, ComponentError> {
        let type_id = TypeId::of::<C>();
        let tag = self.tag_of::<C>()?;

        let arena = self.arenas.entry(type_id).or_default();
        if arena.live.len() >= MAX_INSTANCE_ID as usize {
            return Err(ComponentError::IdsExhausted { component: C::NAME });
        }

        let token: Arc<str> = loop {
            let id = self.rng.random_range(0..MAX_INSTANCE_ID);
            let token: Arc<str> = Arc::from(format!("adt-{id:x}"));
            if !arena.live.contains(&token) {
                break token;
            }
        };

        arena.live.insert(token.clone());
        let key = arena.tokens.insert(token.clone());

        Ok(Host {
            key,
            type_id,
            component: C::NAME,
            tag,
            token,
            element,
        })
    }

    /// Releases an instance token so it may be handed out again. Injected CSS is kept.
    pub fn unregister(&mut self, host: &Host) -> bool {
        let Some(arena) = self.arenas.get_mut(&host.type_id) else {
            return false;
        };
        match arena.tokens.remove(host.key) {
            Some(token) => arena.live.remove(&token),
            None => false,
        }
    }

    /// Number of live instances of `C`.
    pub fn instance_count<C: Component>(&self) -> usize {
        self.arenas.get(&TypeId::of::<C>()).map_or(0, |arena| arena.tokens.len())
    }
}

/// Lowercase, starts with a letter, contains a `-`.
fn is_custom_tag(tag: &str) -> bool {
    tag.starts_with(|c: char| c.is_ascii_lowercase()) && tag.contains('-') && !tag.chars().any(|c| c.is_ascii_uppercase() || c.is_whitespace())
}
