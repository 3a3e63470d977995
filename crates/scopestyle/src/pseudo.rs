//! Recognized pseudo-classes and their native selector forms.
//!
//! The compiler treats a variant key as a pseudo-class only if the active
//! [`PseudoClasses`] table says so; every other key is an arbitrary variant
//! with no native CSS selector. The table is a collaborator the compiler
//! consults but does not own — callers may extend it or supply their own.

use indexmap::IndexMap;
use strum_macros::Display;

/// The built-in recognized pseudo-class set, keyed by the `camelCase` names
/// used in style specs.
///
/// Covers the interactive and structural pseudo-classes of
/// [Selectors Level 4](https://www.w3.org/TR/selectors-4/).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum PseudoClass {
    /// [§ 4.7 :hover](https://www.w3.org/TR/selectors-4/#the-hover-pseudo)
    /// "while the user designates an element with a pointing device"
    #[strum(serialize = "hover")]
    Hover,

    /// [§ 4.7 :focus](https://www.w3.org/TR/selectors-4/#the-focus-pseudo)
    /// "while an element has the focus"
    #[strum(serialize = "focus")]
    Focus,

    /// [§ 4.7 :active](https://www.w3.org/TR/selectors-4/#the-active-pseudo)
    /// "while an element is being activated by the user"
    #[strum(serialize = "active")]
    Active,

    /// [§ 4.6 :visited](https://www.w3.org/TR/selectors-4/#link)
    /// applies once the link has been visited
    #[strum(serialize = "visited")]
    Visited,

    /// [§ 4.6 :link](https://www.w3.org/TR/selectors-4/#link)
    /// "applies to links that have not yet been visited"
    #[strum(serialize = "link")]
    Link,

    /// [§ 4.9 :checked](https://www.w3.org/TR/selectors-4/#checked)
    /// radio/checkbox/option elements that are toggled on
    #[strum(serialize = "checked")]
    Checked,

    /// [§ 4.9 :enabled](https://www.w3.org/TR/selectors-4/#enableddisabled)
    /// form element without the disabled attribute
    #[strum(serialize = "enabled")]
    Enabled,

    /// [§ 4.9 :disabled](https://www.w3.org/TR/selectors-4/#enableddisabled)
    /// form element with the disabled attribute
    #[strum(serialize = "disabled")]
    Disabled,

    /// [§ 4.12 :first-child](https://www.w3.org/TR/selectors-4/#the-first-child-pseudo)
    /// "an element that is first among its inclusive siblings"
    #[strum(serialize = "firstChild")]
    FirstChild,

    /// [§ 4.12 :last-child](https://www.w3.org/TR/selectors-4/#the-last-child-pseudo)
    /// "an element that is last among its inclusive siblings"
    #[strum(serialize = "lastChild")]
    LastChild,

    /// [§ 4.11 :first-of-type](https://www.w3.org/TR/selectors-4/#the-first-of-type-pseudo)
    /// "an element that is the first sibling of its type"
    #[strum(serialize = "firstOfType")]
    FirstOfType,

    /// [§ 4.11 :last-of-type](https://www.w3.org/TR/selectors-4/#the-last-of-type-pseudo)
    /// "an element that is the last sibling of its type"
    #[strum(serialize = "lastOfType")]
    LastOfType,

    /// [§ 4.12 :only-child](https://www.w3.org/TR/selectors-4/#the-only-child-pseudo)
    /// "an element that has no siblings"
    #[strum(serialize = "onlyChild")]
    OnlyChild,

    /// [§ 4.5 :empty](https://www.w3.org/TR/selectors-4/#the-empty-pseudo)
    /// "an element that has no children at all"
    #[strum(serialize = "empty")]
    Empty,
}

impl PseudoClass {
    /// Every built-in pseudo-class, in registration order.
    pub const ALL: [Self; 14] = [
        Self::Hover,
        Self::Focus,
        Self::Active,
        Self::Visited,
        Self::Link,
        Self::Checked,
        Self::Enabled,
        Self::Disabled,
        Self::FirstChild,
        Self::LastChild,
        Self::FirstOfType,
        Self::LastOfType,
        Self::OnlyChild,
        Self::Empty,
    ];

    /// The native CSS selector this pseudo-class maps to, colon included.
    #[must_use]
    pub fn native(self) -> &'static str {
        match self {
            Self::Hover => ":hover",
            Self::Focus => ":focus",
            Self::Active => ":active",
            Self::Visited => ":visited",
            Self::Link => ":link",
            Self::Checked => ":checked",
            Self::Enabled => ":enabled",
            Self::Disabled => ":disabled",
            Self::FirstChild => ":first-child",
            Self::LastChild => ":last-child",
            Self::FirstOfType => ":first-of-type",
            Self::LastOfType => ":last-of-type",
            Self::OnlyChild => ":only-child",
            Self::Empty => ":empty",
        }
    }
}

/// The pseudo-class lookup table consulted during compilation: variant name
/// to native selector, in registration order.
#[derive(Debug, Clone)]
pub struct PseudoClasses {
    map: IndexMap<String, String>,
}

impl Default for PseudoClasses {
    /// The built-in table, one entry per [`PseudoClass`] variant.
    fn default() -> Self {
        let mut map = IndexMap::new();
        for pseudo in PseudoClass::ALL {
            let _ = map.insert(pseudo.to_string(), pseudo.native().to_string());
        }
        Self { map }
    }
}

impl PseudoClasses {
    /// A table with no recognized pseudo-classes at all: every variant key
    /// compiles as an arbitrary modifier.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            map: IndexMap::new(),
        }
    }

    /// Register (or replace) a pseudo-class mapping, e.g.
    /// `register("placeholderShown", ":placeholder-shown")`.
    pub fn register(&mut self, name: impl Into<String>, native: impl Into<String>) {
        let _ = self.map.insert(name.into(), native.into());
    }

    /// The native selector for a variant name, if it is recognized.
    #[must_use]
    pub fn native(&self, name: &str) -> Option<&str> {
        self.map.get(name).map(String::as_str)
    }

    /// Whether a variant name is a recognized pseudo-class.
    #[must_use]
    pub fn is_recognized(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }
}
