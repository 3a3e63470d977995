//! Style specification trees.
//!
//! A [`StyleSpec`] is the declarative input to the compiler: a mapping from
//! property-or-variant keys to values, where a nested mapping opens a variant
//! scope (a pseudo-class such as `hover`, or an arbitrary modifier name).
//!
//! Key insertion order is preserved — it decides the order declarations and
//! rules are emitted in, which keeps compilation output deterministic.

use core::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::Deserialize;
use serde::de::{self, Deserializer, MapAccess, SeqAccess, Visitor};

use crate::error::CompileError;

// ─────────────────────────────────────────────────────────────────────────────
// Leaf values
// ─────────────────────────────────────────────────────────────────────────────

/// A primitive CSS value: a string passed through verbatim, or a number that
/// will receive the fixed `px` unit suffix.
///
/// [§ 4 Textual Data Types](https://www.w3.org/TR/css-values-4/#textual-values)
/// [§ 4.1 Lengths](https://www.w3.org/TR/css-values-4/#lengths) — "1px = 1/96th of 1in"
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// A textual value, emitted unchanged (`red`, `1px solid black`).
    Text(String),
    /// A numeric value, emitted with a `px` suffix (`10` becomes `10px`).
    Number(f64),
}

/// Capability trait for value types that know how to render themselves as a
/// CSS scalar.
///
/// The conversion runs exactly once per compilation: the returned [`Scalar`]
/// is treated as a plain scalar and never re-converted.
pub trait ToCss: fmt::Debug {
    /// Produce the CSS scalar representation of this value.
    fn to_css(&self) -> Scalar;
}

/// A leaf property value: one scalar, an ordered list of values, or an object
/// carrying the [`ToCss`] conversion capability.
///
/// Lists may hold scalars and convertibles but not further lists; a nested
/// list is rejected during value resolution.
#[derive(Debug, Clone)]
pub enum Value {
    /// A single scalar value.
    Scalar(Scalar),
    /// An ordered list of values, one declaration emitted per element.
    /// The empty list still emits its property, with an empty value string.
    List(Vec<Value>),
    /// A value that converts itself to a scalar via [`ToCss`].
    Convertible(Arc<dyn ToCss>),
}

impl Value {
    /// Wrap a [`ToCss`] value.
    #[must_use]
    pub fn convertible<T: ToCss + 'static>(value: T) -> Self {
        Self::Convertible(Arc::new(value))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Scalar(Scalar::Text(value.to_string()))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Scalar(Scalar::Text(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Scalar(Scalar::Number(value))
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Scalar(Scalar::Number(f64::from(value)))
    }
}

impl From<Scalar> for Value {
    fn from(value: Scalar) -> Self {
        Self::Scalar(value)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Spec tree
// ─────────────────────────────────────────────────────────────────────────────

/// One entry in a [`StyleSpec`]: either a leaf property value or a nested
/// spec opening a variant scope.
#[derive(Debug, Clone)]
pub enum SpecValue {
    /// A directly-assigned property value.
    Leaf(Value),
    /// A nested spec: the key names a pseudo-class or arbitrary variant.
    Nested(StyleSpec),
}

/// A declarative style specification: an order-preserving map from
/// property-or-variant keys to [`SpecValue`]s.
///
/// Specs are immutable inputs to compilation; the compiler never mutates one.
#[derive(Debug, Clone, Default)]
pub struct StyleSpec {
    entries: IndexMap<String, SpecValue>,
}

impl StyleSpec {
    /// Create an empty spec.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a key, appending it if new and replacing the value in place if the
    /// key already exists (its position in the order is kept).
    pub fn set(&mut self, key: impl Into<String>, value: SpecValue) {
        let _ = self.entries.insert(key.into(), value);
    }

    /// Look up a key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&SpecValue> {
        self.entries.get(key)
    }

    /// Number of direct entries (leaf properties plus child variants).
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the spec has no entries at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate direct entries in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &SpecValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Deep-merge a patch spec onto this one, the patch taking precedence.
    ///
    /// For every key present in both trees: two nested specs merge
    /// recursively; a leaf patch value replaces the base value entirely
    /// (arrays replace wholesale, there is no element-wise merge). Keys only
    /// in the patch are appended; keys only in the base are kept in place.
    ///
    /// # Errors
    ///
    /// Returns [`CompileError::Merge`] when a nested patch lands on a leaf
    /// base value — the shapes conflict and there is no sensible merge.
    pub fn merged(&self, patch: &Self) -> Result<Self, CompileError> {
        let mut out = self.clone();
        for (key, patch_value) in &patch.entries {
            match (out.entries.get_mut(key), patch_value) {
                (Some(SpecValue::Nested(base_child)), SpecValue::Nested(patch_child)) => {
                    let merged_child = base_child.merged(patch_child)?;
                    *base_child = merged_child;
                }
                (Some(SpecValue::Leaf(_)), SpecValue::Nested(_)) => {
                    return Err(CompileError::Merge { key: key.clone() });
                }
                (Some(slot), SpecValue::Leaf(_)) => {
                    *slot = patch_value.clone();
                }
                (None, _) => {
                    let _ = out.entries.insert(key.clone(), patch_value.clone());
                }
            }
        }
        Ok(out)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Deserialization
// ─────────────────────────────────────────────────────────────────────────────

// JSON maps onto the spec tree directly: objects are nested specs, strings
// and numbers are scalars, arrays are lists. `Convertible` values carry a
// live trait object and are only constructible from Rust code.

impl<'de> Deserialize<'de> for StyleSpec {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let entries = IndexMap::<String, SpecValue>::deserialize(deserializer)?;
        Ok(Self { entries })
    }
}

impl<'de> Deserialize<'de> for SpecValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(SpecValueVisitor)
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ValueVisitor)
    }
}

struct SpecValueVisitor;

impl<'de> Visitor<'de> for SpecValueVisitor {
    type Value = SpecValue;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a scalar, an array of scalars, or a nested style spec")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(SpecValue::Leaf(Value::from(v)))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(SpecValue::Leaf(Value::from(v)))
    }

    #[allow(clippy::cast_precision_loss)]
    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(SpecValue::Leaf(Value::from(v as f64)))
    }

    #[allow(clippy::cast_precision_loss)]
    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(SpecValue::Leaf(Value::from(v as f64)))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut items = Vec::new();
        while let Some(item) = seq.next_element::<Value>()? {
            items.push(item);
        }
        Ok(SpecValue::Leaf(Value::List(items)))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut spec = StyleSpec::new();
        while let Some((key, value)) = map.next_entry::<String, SpecValue>()? {
            spec.set(key, value);
        }
        Ok(SpecValue::Nested(spec))
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a scalar or an array of scalars")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(Value::from(v))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(Value::from(v))
    }

    #[allow(clippy::cast_precision_loss)]
    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(Value::from(v as f64))
    }

    #[allow(clippy::cast_precision_loss)]
    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(Value::from(v as f64))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut items = Vec::new();
        while let Some(item) = seq.next_element::<Value>()? {
            items.push(item);
        }
        Ok(Value::List(items))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Construction macro
// ─────────────────────────────────────────────────────────────────────────────

/// Build a [`StyleSpec`] from a braced key/value listing.
///
/// Keys are bare identifiers or string literals; values are scalars, arrays,
/// or nested `{ ... }` blocks opening a variant scope.
///
/// ```
/// use scopestyle::spec;
///
/// let button = spec! {
///     width: 10,
///     color: "red",
///     hover: { color: "white" },
/// };
/// assert_eq!(button.len(), 3);
/// ```
#[macro_export]
macro_rules! spec {
    ($($key:tt : $value:tt),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut spec = $crate::StyleSpec::new();
        $( spec.set($crate::spec_key!($key), $crate::spec_entry!($value)); )*
        spec
    }};
}

/// Internal helper for [`spec!`]: normalize a key token to a string.
#[doc(hidden)]
#[macro_export]
macro_rules! spec_key {
    ($key:ident) => {
        stringify!($key)
    };
    ($key:literal) => {
        $key
    };
}

/// Internal helper for [`spec!`]: build a [`SpecValue`] from a value token.
#[doc(hidden)]
#[macro_export]
macro_rules! spec_entry {
    ({ $($inner:tt)* }) => {
        $crate::SpecValue::Nested($crate::spec! { $($inner)* })
    };
    ([ $($elem:expr),* $(,)? ]) => {
        $crate::SpecValue::Leaf($crate::Value::List(vec![ $( $crate::Value::from($elem) ),* ]))
    };
    ($value:expr) => {
        $crate::SpecValue::Leaf($crate::Value::from($value))
    };
}
