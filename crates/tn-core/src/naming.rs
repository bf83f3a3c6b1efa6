//! Naming variants derived from a raw tenant or entity name
//!
//! The patch catalogs synthesize identifiers, routes, and file paths from a
//! single source name. All variants are derived once per run and are pure
//! string transforms.

use convert_case::{Case, Casing};
use serde::Serialize;

/// Case and plural variants of a single source name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameVariants {
    /// The name exactly as given
    pub raw: String,

    /// First letter upper-cased (class/interface form)
    pub upper_first: String,

    /// First letter lower-cased (property/identifier form)
    pub lower_first: String,

    /// kebab-case (route and file-path segment form)
    pub kebab: String,

    /// Plural of the lower-first form (collection identifiers)
    pub plural_lower_first: String,

    /// Plural of the upper-first form
    pub plural_upper_first: String,
}

impl NameVariants {
    /// Derive all variants from a raw name.
    pub fn derive(raw: &str) -> Self {
        let lower_first = lower_first(raw);
        let upper_first = upper_first(raw);
        Self {
            raw: raw.to_string(),
            plural_lower_first: pluralize(&lower_first),
            plural_upper_first: pluralize(&upper_first),
            kebab: raw.to_case(Case::Kebab),
            upper_first,
            lower_first,
        }
    }
}

/// Upper-case the first character, leaving the rest untouched.
pub fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Lower-case the first character, leaving the rest untouched.
pub fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_lowercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Naive English pluralization.
///
/// Covers the shapes that occur in entity and tenant names: sibilant endings
/// take "es", consonant+"y" becomes "ies", everything else takes "s".
pub fn pluralize(s: &str) -> String {
    if s.is_empty() {
        return String::new();
    }
    let lower = s.to_lowercase();
    if lower.ends_with('s')
        || lower.ends_with('x')
        || lower.ends_with('z')
        || lower.ends_with("ch")
        || lower.ends_with("sh")
    {
        return format!("{s}es");
    }
    if let Some(stem) = s.strip_suffix('y') {
        let precedes_consonant = stem
            .chars()
            .last()
            .map(|c| !matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u'))
            .unwrap_or(false);
        if precedes_consonant {
            return format!("{stem}ies");
        }
    }
    format!("{s}s")
}

#[cfg(test)]
#[path = "naming_test.rs"]
mod tests;
