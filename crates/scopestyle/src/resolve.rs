//! Property value resolution.
//!
//! Turns one property/value pair from a spec into the ordered list of CSS
//! declarations it stands for:
//!
//! - property names convert from `camelCase` to kebab-case (`fontSize` →
//!   `font-size`) before emission;
//! - bare numbers get the fixed `px` unit suffix, unconditionally
//!   ([§ 6.1 Absolute lengths](https://www.w3.org/TR/css-values-4/#absolute-lengths),
//!   "1px = 1/96th of 1in");
//! - lists flatten to one declaration per element, and the empty list still
//!   emits its property with an empty value string;
//! - [`ToCss`] convertibles are converted once and treated as scalars.

use core::fmt;

use crate::error::CompileError;
use crate::spec::{Scalar, Value};

/// One CSS declaration, displayed as `property:value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// The kebab-case property name.
    pub property: String,
    /// The resolved value text (may be empty, from an empty list).
    pub value: String,
}

impl Declaration {
    /// Build a declaration from already-resolved parts.
    #[must_use]
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.property, self.value)
    }
}

/// Resolve one property/value pair into its declarations, in order.
///
/// # Errors
///
/// Returns [`CompileError::Value`] for malformed shapes — currently a list
/// nested inside a list, which has no CSS serialization.
pub fn resolve(key: &str, value: &Value) -> Result<Vec<Declaration>, CompileError> {
    let property = hyphenate(key);
    match value {
        Value::Scalar(scalar) => Ok(vec![Declaration::new(property, scalar_text(scalar))]),
        Value::Convertible(convertible) => {
            // Single conversion step: the result is a plain scalar and is
            // never re-converted.
            let scalar = convertible.to_css();
            Ok(vec![Declaration::new(property, scalar_text(&scalar))])
        }
        Value::List(items) => {
            if items.is_empty() {
                // The property is still emitted, with no value (`color:`).
                return Ok(vec![Declaration::new(property, String::new())]);
            }
            let mut declarations = Vec::with_capacity(items.len());
            for item in items {
                let scalar = match item {
                    Value::Scalar(scalar) => scalar.clone(),
                    Value::Convertible(convertible) => convertible.to_css(),
                    Value::List(_) => {
                        return Err(CompileError::Value {
                            property: key.to_string(),
                            reason: "arrays cannot nest inside arrays".to_string(),
                        });
                    }
                };
                declarations.push(Declaration::new(property.clone(), scalar_text(&scalar)));
            }
            Ok(declarations)
        }
    }
}

/// Render a scalar as CSS value text. Numbers take the fixed `px` suffix;
/// a whole number prints without its fractional part (`10`, not `10.0`).
fn scalar_text(scalar: &Scalar) -> String {
    match scalar {
        Scalar::Text(text) => text.clone(),
        Scalar::Number(number) => format!("{number}px"),
    }
}

/// Convert a `camelCase` identifier to its hyphenated lowercase CSS form.
///
/// A leading uppercase letter also gains a hyphen, which yields the vendor
/// prefix form for free (`MozBoxSizing` → `-moz-box-sizing`).
#[must_use]
pub fn hyphenate(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}
