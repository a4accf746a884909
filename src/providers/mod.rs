//! External recommendation providers
//!
//! Both providers return free-form assessment names that have to be mapped
//! back onto the local catalog before they are usable. The mapping rules
//! differ per provider and live here so they can be tested without HTTP.

pub mod gemini;
pub mod rag;

use itertools::Itertools;

use crate::catalog::{Assessment, Catalog, strip_vendor_suffix};

pub use gemini::GeminiClient;
pub use rag::RagClient;

/// Map generative-model output onto the catalog.
///
/// Exact (case-sensitive) names win and keep catalog order. When nothing
/// matches exactly, each suggested name (vendor suffix removed) is matched
/// case-insensitively as a substring of catalog names, keeping suggestion
/// order and dropping repeats.
#[must_use]
pub fn match_suggested_names(names: &[String], catalog: &Catalog, limit: usize) -> Vec<Assessment> {
    let exact: Vec<Assessment> = catalog
        .iter()
        .filter(|entry| names.iter().any(|name| *name == entry.name))
        .take(limit)
        .cloned()
        .collect();
    if !exact.is_empty() {
        return exact;
    }

    names
        .iter()
        .map(|name| strip_vendor_suffix(name).to_lowercase())
        .filter(|needle| !needle.is_empty())
        .flat_map(|needle| {
            catalog
                .iter()
                .filter(move |entry| entry.name.to_lowercase().contains(&needle))
        })
        .unique_by(|entry| entry.name.as_str())
        .take(limit)
        .cloned()
        .collect()
}

/// Map retrieval fragments onto the catalog by containment in either
/// direction: the catalog name contains the fragment, or the fragment
/// contains the suffix-free catalog name. Catalog order is kept.
#[must_use]
pub fn match_fragments(fragments: &[String], catalog: &Catalog, limit: usize) -> Vec<Assessment> {
    let fragments: Vec<&str> = fragments
        .iter()
        .map(|fragment| fragment.trim())
        .filter(|fragment| !fragment.is_empty())
        .collect();

    catalog
        .iter()
        .filter(|entry| {
            fragments.iter().any(|fragment| {
                entry.name.contains(fragment) || fragment.contains(entry.display_name())
            })
        })
        .take(limit)
        .cloned()
        .collect()
}

/// Slice from the first `{` to the last `}` of untrusted model text.
#[must_use]
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (start < end).then(|| &text[start..=end])
}
