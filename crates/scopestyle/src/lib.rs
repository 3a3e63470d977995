//! Scoped CSS compilation from declarative style trees.
//!
//! # Scope
//!
//! This crate implements the compilation core used by component code to
//! generate scoped, uniquely-named stylesheets at load time:
//!
//! - **Style specs** — nested key/value trees where a nested mapping opens a
//!   variant scope: a recognized pseudo-class (`hover`, `focus`,
//!   `firstChild`, …) or an arbitrary modifier name. Built with the [`spec!`]
//!   macro, by hand, or deserialized from JSON.
//! - **Compilation** — a depth-first, pre-order walk emitting one CSS rule
//!   per spec node: the root rule first (wrapped in the fixed
//!   `box-sizing:border-box` / `-moz-box-sizing:border-box` fragment pair),
//!   then one rule per variant scope, with every structurally-equivalent
//!   selector form for pseudo-class paths
//!   ([Selectors Level 4](https://www.w3.org/TR/selectors-4/)).
//! - **Value resolution** — `camelCase` property names hyphenate to their CSS
//!   form, bare numbers take the fixed `px` suffix
//!   ([CSS Values Level 4 § 6.1](https://www.w3.org/TR/css-values-4/#absolute-lengths)),
//!   arrays fan out to one declaration per element, and value types may opt
//!   into the [`ToCss`] conversion capability.
//! - **Scoped naming** — every compiled style mints a process-unique root
//!   class name (`Style_style0`), so styles sharing a base name never
//!   collide.
//! - **Class-name resolution** — [`CompiledStyle::class_name`] computes the
//!   applicable class string for a set of active variant flags, honoring the
//!   variant tree (a descendant contributes nothing unless all its ancestors
//!   are active).
//! - **Override** — [`CompiledStyle::override_with`] deep-merges a patch
//!   tree onto the original spec and recompiles under the same base name,
//!   leaving the original style untouched.
//!
//! # Not Implemented
//!
//! - Parsing of raw CSS text
//! - Stylesheet injection / DOM mounting (consumers concatenate
//!   [`CompiledStyle::rules`] and inject however they like)
//! - Shorthand expansion beyond the `px` unit-suffix rule
//! - Selector specificity resolution
//! - Vendor prefixing beyond the fixed box-sizing pair
//!
//! # Example
//!
//! ```
//! use scopestyle::{compile, spec};
//!
//! let style = compile(
//!     &spec! {
//!         width: 10,
//!         color: "red",
//!         hover: { color: "white" },
//!     },
//!     "button",
//! )
//! .unwrap();
//!
//! let rules = style.rules();
//! assert_eq!(rules.len(), 2);
//! assert!(rules[1].contains(":hover"));
//! assert_eq!(style.class_name(&[]), style.root_class());
//! ```

/// The recursive tree compiler and the compiled-style artifact.
pub mod compile;
/// Compilation error types.
pub mod error;
/// Process-unique scoped class-name minting.
pub mod name;
/// Recognized pseudo-classes per [Selectors Level 4](https://www.w3.org/TR/selectors-4/).
pub mod pseudo;
/// Property value resolution into CSS declarations.
pub mod resolve;
/// Style specification trees and their construction.
pub mod spec;

// Re-exports for convenience
pub use compile::{CompiledRule, CompiledStyle, compile, compile_with};
pub use error::CompileError;
pub use pseudo::{PseudoClass, PseudoClasses};
pub use resolve::Declaration;
pub use spec::{Scalar, SpecValue, StyleSpec, ToCss, Value};
