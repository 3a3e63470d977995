//! Scoped class-name minting.
//!
//! Every compiled style gets a process-unique root class name so that
//! independently compiled styles sharing a base name can never collide,
//! while the name stays traceable to its source identifier for debugging.

use std::sync::atomic::{AtomicU64, Ordering};

/// Process-wide discriminator counter. Monotonically increasing, never
/// reused, never reset within a process lifetime. A single atomic increment
/// keeps minting safe under concurrent compilation.
static DISCRIMINATOR: AtomicU64 = AtomicU64::new(0);

/// Mint a unique class name from a base identifier.
///
/// The format is `Capitalize(base) + "_" + base + discriminator`:
/// `mint("style")` produces `Style_style0`, then `Style_style1`, and so on.
#[must_use]
pub fn mint(base: &str) -> String {
    let discriminator = DISCRIMINATOR.fetch_add(1, Ordering::Relaxed);
    let capitalized = capitalize(base);
    format!("{capitalized}_{base}{discriminator}")
}

/// Uppercase the first character, leaving the rest untouched.
fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    chars.next().map_or_else(String::new, |first| {
        let mut out: String = first.to_uppercase().collect();
        out.push_str(chars.as_str());
        out
    })
}
