//! The recursive style-tree compiler.
//!
//! Walks a [`StyleSpec`] depth-first, pre-order, turning every node into one
//! CSS rule group: the root rule first (wrapped in the fixed box-sizing
//! fragment pair), then one rule per nested variant scope, however deep.
//! Alongside the rule list the walk records every variant path, which backs
//! the class-name resolution over active variant flags.
//!
//! The walk itself builds a structured node tree; serialized rules and the
//! variant table come from two separate flattening passes over it, both in
//! the same pre-order.

use core::fmt;

use crate::error::CompileError;
use crate::name::mint;
use crate::pseudo::PseudoClasses;
use crate::resolve::{Declaration, resolve};
use crate::spec::{SpecValue, StyleSpec};

/// One emitted rule group: a selector (possibly a comma-separated list of
/// equivalent forms) plus its ordered declarations.
///
/// Displays as `<selector> { <decl>;<decl>; }`; a rule with no declarations
/// displays as `<selector> { }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledRule {
    /// The full selector string for this rule group.
    pub selector: String,
    /// Declarations in emission order.
    pub declarations: Vec<Declaration>,
}

impl fmt::Display for CompiledRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.declarations.is_empty() {
            return write!(f, "{} {{ }}", self.selector);
        }
        write!(f, "{} {{ ", self.selector)?;
        for declaration in &self.declarations {
            write!(f, "{declaration};")?;
        }
        write!(f, " }}")
    }
}

/// One node of the compiled tree: its rule, the variant path that produced
/// it (empty at the root), and its compiled children in spec order.
struct CompiledNode {
    rule: CompiledRule,
    path: Vec<String>,
    children: Vec<CompiledNode>,
}

/// A variant path together with its dashed modifier class, recorded in
/// compilation pre-order for class-name resolution.
#[derive(Debug, Clone)]
struct VariantEntry {
    path: Vec<String>,
    class: String,
}

/// The immutable output of compilation: a process-unique root class name, an
/// ordered CSS rule list, and class-name resolution over variant flags.
///
/// Produced once by [`compile`] (or [`compile_with`]); never mutated.
/// [`CompiledStyle::override_with`] builds a brand-new style instead.
#[derive(Debug, Clone)]
pub struct CompiledStyle {
    root_class: String,
    base_name: String,
    rules: Vec<CompiledRule>,
    variants: Vec<VariantEntry>,
    spec: StyleSpec,
    pseudo: PseudoClasses,
}

impl CompiledStyle {
    /// The minted root class name, e.g. `Style_style0`.
    #[must_use]
    pub fn root_class(&self) -> &str {
        &self.root_class
    }

    /// The serialized rule strings in emission order. The root rule is
    /// always first.
    #[must_use]
    pub fn rules(&self) -> Vec<String> {
        self.rules.iter().map(ToString::to_string).collect()
    }

    /// The structured rules in emission order.
    #[must_use]
    pub fn compiled_rules(&self) -> &[CompiledRule] {
        &self.rules
    }

    /// All rules concatenated into one stylesheet string, ready to hand to
    /// whatever injects it.
    #[must_use]
    pub fn to_css(&self) -> String {
        self.rules().join("\n")
    }

    /// Resolve the class-name string for a set of active variant flags.
    ///
    /// `active` lists the variant names whose flag is on; every other name
    /// is off. The result is the root class followed by the dashed modifier
    /// class of every variant path whose segments are all active, in the
    /// order the rules were compiled. A variant path is skipped whenever any
    /// ancestor segment is inactive, regardless of its own flag. Names that
    /// appear nowhere in the compiled tree are silently ignored.
    ///
    /// Pure and callable any number of times; `class_name(&[])` returns the
    /// root class alone.
    #[must_use]
    pub fn class_name(&self, active: &[&str]) -> String {
        let mut out = self.root_class.clone();
        for entry in &self.variants {
            let all_active = entry
                .path
                .iter()
                .all(|segment| active.contains(&segment.as_str()));
            if all_active {
                out.push(' ');
                out.push_str(&entry.class);
            }
        }
        out
    }

    /// Compile a new style from this one plus a patch tree.
    ///
    /// The patch deep-merges onto the original spec (patch precedence at
    /// every property; see [`StyleSpec::merged`]) and the merged tree
    /// recompiles under the original base name — fresh rules, fresh unique
    /// discriminator, same logical style. `self` is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`CompileError::Merge`] on conflicting shapes and
    /// [`CompileError::Value`] if the merged tree holds a malformed value.
    pub fn override_with(&self, patch: &StyleSpec) -> Result<Self, CompileError> {
        let merged = self.spec.merged(patch)?;
        compile_with(&merged, &self.base_name, &self.pseudo)
    }
}

/// Compile a style spec under a base name, using the built-in pseudo-class
/// table.
///
/// # Errors
///
/// Returns [`CompileError::Value`] if the spec holds a malformed leaf value;
/// nothing partial is returned.
pub fn compile(spec: &StyleSpec, base: &str) -> Result<CompiledStyle, CompileError> {
    compile_with(spec, base, &PseudoClasses::default())
}

/// Compile a style spec consulting a caller-supplied pseudo-class table.
///
/// # Errors
///
/// Returns [`CompileError::Value`] if the spec holds a malformed leaf value;
/// nothing partial is returned.
pub fn compile_with(
    spec: &StyleSpec,
    base: &str,
    pseudo: &PseudoClasses,
) -> Result<CompiledStyle, CompileError> {
    let root_class = mint(base);
    let tree = compile_node(spec, &[], &root_class, pseudo)?;

    let mut variants = Vec::new();
    collect_variants(&tree, &root_class, &mut variants);
    let mut rules = Vec::new();
    collect_rules(tree, &mut rules);

    Ok(CompiledStyle {
        root_class,
        base_name: base.to_string(),
        rules,
        variants,
        spec: spec.clone(),
        pseudo: pseudo.clone(),
    })
}

/// Compile one spec node into its rule and recurse into child variants.
///
/// A node's rule aggregates only its own direct leaf properties; nested
/// scopes get their own rules. The root node (empty path) wraps its
/// declarations in the fixed vendor-prefix fragment pair.
fn compile_node(
    spec: &StyleSpec,
    path: &[String],
    root_class: &str,
    pseudo: &PseudoClasses,
) -> Result<CompiledNode, CompileError> {
    let mut declarations = Vec::new();
    if path.is_empty() {
        declarations.push(Declaration::new("box-sizing", "border-box"));
    }

    // Partition direct keys: leaves resolve into this rule, nested specs
    // become child variant scopes. Spec order decides both orders.
    let mut child_specs = Vec::new();
    for (key, value) in spec.entries() {
        match value {
            SpecValue::Leaf(value) => declarations.extend(resolve(key, value)?),
            SpecValue::Nested(child) => child_specs.push((key, child)),
        }
    }

    if path.is_empty() {
        declarations.push(Declaration::new("-moz-box-sizing", "border-box"));
    }

    let selector = if path.is_empty() {
        format!(".{root_class}")
    } else {
        variant_selector(root_class, path, pseudo)
    };

    let mut children = Vec::with_capacity(child_specs.len());
    for (key, child) in child_specs {
        let mut child_path = path.to_vec();
        child_path.push(key.to_string());
        children.push(compile_node(child, &child_path, root_class, pseudo)?);
    }

    Ok(CompiledNode {
        rule: CompiledRule {
            selector,
            declarations,
        },
        path: path.to_vec(),
        children,
    })
}

/// Flatten the compiled tree into the ordered rule list (pre-order).
fn collect_rules(node: CompiledNode, rules: &mut Vec<CompiledRule>) {
    rules.push(node.rule);
    for child in node.children {
        collect_rules(child, rules);
    }
}

/// Flatten the compiled tree into the variant-path table (pre-order,
/// root excluded).
fn collect_variants(node: &CompiledNode, root_class: &str, variants: &mut Vec<VariantEntry>) {
    if !node.path.is_empty() {
        variants.push(VariantEntry {
            path: node.path.clone(),
            class: modifier_class(root_class, &node.path),
        });
    }
    for child in &node.children {
        collect_variants(child, root_class, variants);
    }
}

/// The dashed modifier class for a variant path: `root--seg1--seg2`.
fn modifier_class(root_class: &str, path: &[String]) -> String {
    format!("{root_class}--{}", path.join("--"))
}

/// Build the selector list for a variant path.
///
/// Every path gets the all-dashed modifier-class form. A path containing
/// recognized pseudo-classes additionally gets every structurally-equivalent
/// native form, joined with `, `:
///
/// - the substituted form: arbitrary segments stay dashed, every pseudo
///   segment renders as its native `:pseudo` suffix;
/// - one partial form per split point whose entire tail is pseudo: the
///   leading segments stay dashed, the tail renders natively
///   (`.Root--firstChild:hover` between the all-dashed and fully-native
///   forms of a `firstChild`/`hover` chain).
///
/// Duplicate forms collapse; the reference output fixes this shape up to
/// depth 2, deeper chains follow the same induction.
fn variant_selector(root_class: &str, path: &[String], pseudo: &PseudoClasses) -> String {
    let mut forms = vec![format!(".{}", modifier_class(root_class, path))];

    let natives: Vec<Option<&str>> = path.iter().map(|segment| pseudo.native(segment)).collect();
    if natives.iter().any(Option::is_some) {
        push_unique(&mut forms, substituted_form(root_class, path, &natives));

        for split in 1..path.len() {
            if natives[split..].iter().all(Option::is_some) {
                let mut form = format!(".{}", modifier_class(root_class, &path[..split]));
                form.extend(natives[split..].iter().flatten().copied());
                push_unique(&mut forms, form);
            }
        }
    }

    forms.join(", ")
}

/// The fully-substituted selector form: dashed chain of the non-pseudo
/// segments, native suffixes for every pseudo segment, path order kept.
fn substituted_form(root_class: &str, path: &[String], natives: &[Option<&str>]) -> String {
    let mut class = format!(".{root_class}");
    for (segment, native) in path.iter().zip(natives) {
        if native.is_none() {
            class.push_str("--");
            class.push_str(segment);
        }
    }
    class.extend(natives.iter().flatten().copied());
    class
}

/// Append a selector form unless an identical one is already present.
fn push_unique(forms: &mut Vec<String>, form: String) {
    if !forms.contains(&form) {
        forms.push(form);
    }
}
